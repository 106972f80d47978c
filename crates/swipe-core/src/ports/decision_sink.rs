//! DecisionSink port - 判定結果の通知先
//!
//! The deck calls exactly one of these per item, in queue order, after the
//! item's fly-out has finished. A returned error is logged by the deck and
//! otherwise ignored: queue advancement never depends on the sink.

use thiserror::Error;

use crate::domain::ItemKey;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink rejected item {item}: {reason}")]
    Rejected { item: ItemKey, reason: String },

    #[error("sink channel closed")]
    Closed,

    #[error("{0}")]
    Other(String),
}

/// Caller-supplied "liked" / "passed" handlers.
pub trait DecisionSink<T> {
    fn on_accept(&mut self, item: &T) -> Result<(), SinkError>;

    fn on_reject(&mut self, item: &T) -> Result<(), SinkError>;
}

impl<T, S: DecisionSink<T> + ?Sized> DecisionSink<T> for Box<S> {
    fn on_accept(&mut self, item: &T) -> Result<(), SinkError> {
        (**self).on_accept(item)
    }

    fn on_reject(&mut self, item: &T) -> Result<(), SinkError> {
        (**self).on_reject(item)
    }
}
