//! Domain model (ids, items, gesture state, decisions, view derivations).
//!
//! Nothing in here knows about time sources, sinks or async runtimes; those
//! live in `ports` and `app`.

pub mod card;
pub mod config;
pub mod decision;
pub mod errors;
pub mod geometry;
pub mod ids;
pub mod input;
pub mod item;
pub mod state;
pub mod view;

pub use card::{Card, Interactivity, Transition};
pub use config::SwipeConfig;
pub use decision::{Decision, Verdict};
pub use errors::ConfigError;
pub use geometry::{Displacement, Point};
pub use ids::{CardId, DeckId};
pub use input::{InputEvent, Key, PointerId};
pub use item::{DeckItem, ItemBatch, ItemKey, ProductItem};
pub use state::{CardPhase, CardState, ReleaseTimer};
pub use view::{CardTransform, CardView, DeckView, HintVisibility, LookaheadStyle};
