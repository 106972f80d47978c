//! Status - デッキと outbox の集計

use serde::{Deserialize, Serialize};

/// Progress through the current deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCounts {
    pub total: usize,
    pub remaining: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// What the outbox managed to hand to the interaction logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxStats {
    pub delivered: usize,
    pub failed: usize,
}
