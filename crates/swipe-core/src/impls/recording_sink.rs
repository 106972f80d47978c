//! RecordingSink - 判定を記録するだけの sink（テスト・デモ用）

use std::sync::{Arc, Mutex};

use crate::domain::Decision;
use crate::ports::{DecisionSink, SinkError};

/// Records every callback. Clones share the same log, so a test can keep a
/// handle while the deck owns the sink.
#[derive(Debug)]
pub struct RecordingSink<T> {
    calls: Arc<Mutex<Vec<(Decision, T)>>>,
}

impl<T: Clone> RecordingSink<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of `(decision, item)` pairs in callback order.
    pub fn calls(&self) -> Vec<(Decision, T)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, decision: Decision, item: &T) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((decision, item.clone()));
    }
}

impl<T: Clone> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordingSink<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T: Clone> DecisionSink<T> for RecordingSink<T> {
    fn on_accept(&mut self, item: &T) -> Result<(), SinkError> {
        self.record(Decision::Accept, item);
        Ok(())
    }

    fn on_reject(&mut self, item: &T) -> Result<(), SinkError> {
        self.record(Decision::Reject, item);
        Ok(())
    }
}
