//! IdGenerator port - ID 生成の抽象化
//!
//! # 実装
//! - **UlidGenerator**: Clock ベースの ULID（本番・テスト共用）

use crate::domain::ids::{CardId, DeckId};
use crate::ports::Clock;
use ulid::Ulid;

pub trait IdGenerator: Send + Sync {
    fn generate_deck_id(&self) -> DeckId;

    fn generate_card_id(&self) -> CardId;
}

/// ULID generator whose timestamp part comes from `clock`.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn next_ulid(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis().max(0) as u64;
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_deck_id(&self) -> DeckId {
        DeckId::from(self.next_ulid())
    }

    fn generate_card_id(&self) -> CardId {
        CardId::from(self.next_ulid())
    }
}
