//! MemoryLogger - InteractionLogger のメモリ実装（開発用）

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::{InteractionLog, InteractionLogger, SinkError};

#[derive(Debug)]
pub struct MemoryLogger<T> {
    entries: Mutex<Vec<InteractionLog<T>>>,
}

impl<T: Clone> MemoryLogger<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub async fn entries(&self) -> Vec<InteractionLog<T>> {
        self.entries.lock().await.clone()
    }
}

impl<T: Clone> Default for MemoryLogger<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Send + 'static> InteractionLogger<T> for MemoryLogger<T> {
    async fn log(&self, entry: InteractionLog<T>) -> Result<(), SinkError> {
        self.entries.lock().await.push(entry);
        Ok(())
    }
}
