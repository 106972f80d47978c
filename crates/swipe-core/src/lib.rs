//! swipe-core
//!
//! Headless swipe-deck engine: a per-card drag / release / fly-out state
//! machine and a deck that consumes an ordered list of items one decision at
//! a time.
//!
//! # モジュール構成
//! - **domain**: ids, items, gesture state machine (`Card`), decisions, view derivations
//! - **ports**: Clock, IdGenerator, DecisionSink, InteractionLogger
//! - **impls**: RecordingSink, Callbacks, ChannelSink, MemoryLogger
//! - **app**: DeckBuilder, Deck, DeckDriver, outbox

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{Deck, DeckBuilder, DeckDriver};
pub use domain::{Decision, DeckItem, DeckView, InputEvent, SwipeConfig};
