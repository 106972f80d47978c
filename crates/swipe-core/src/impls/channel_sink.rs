//! ChannelSink - 判定を mpsc で outbox に流す
//!
//! The deck runs synchronously; anything slow (HTTP, disk) happens on the
//! receiving side, see [`crate::app::outbox`].

use tokio::sync::mpsc;

use crate::domain::Decision;
use crate::ports::{DecisionSink, InteractionLog, SinkError};

pub struct ChannelSink<T> {
    tx: mpsc::UnboundedSender<InteractionLog<T>>,
}

impl<T> ChannelSink<T> {
    /// Sink plus the receiver to hand to the outbox.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<InteractionLog<T>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn forward(&self, item: &T, decision: Decision) -> Result<(), SinkError>
    where
        T: Clone,
    {
        self.tx
            .send(InteractionLog::decided(item.clone(), decision))
            .map_err(|_| SinkError::Closed)
    }
}

impl<T: Clone> DecisionSink<T> for ChannelSink<T> {
    fn on_accept(&mut self, item: &T) -> Result<(), SinkError> {
        self.forward(item, Decision::Accept)
    }

    fn on_reject(&mut self, item: &T) -> Result<(), SinkError> {
        self.forward(item, Decision::Reject)
    }
}
