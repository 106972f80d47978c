//! InteractionLogger port - 判定の外部記録
//!
//! One record per decided item, shaped like the `/api/interactions/log`
//! request body (`{ item, viewed, liked }`). Credentials are the logger
//! implementation's business and never pass through the deck.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::SinkError;
use crate::domain::Decision;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionLog<T> {
    pub item: T,
    pub viewed: bool,
    pub liked: bool,
}

impl<T> InteractionLog<T> {
    /// Every decided item has been viewed; only accepts are likes.
    pub fn decided(item: T, decision: Decision) -> Self {
        Self {
            item,
            viewed: true,
            liked: decision.liked(),
        }
    }
}

#[async_trait]
pub trait InteractionLogger<T: Send + 'static>: Send + Sync {
    async fn log(&self, entry: InteractionLog<T>) -> Result<(), SinkError>;
}
