//! Ports - 抽象化レイヤー
//!
//! Seams between the deck and its host: time, ids, and where decisions go.

pub mod clock;
pub mod decision_sink;
pub mod id_generator;
pub mod interaction_log;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::decision_sink::{DecisionSink, SinkError};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::interaction_log::{InteractionLog, InteractionLogger};
