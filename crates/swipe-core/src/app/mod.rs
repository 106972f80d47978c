//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **DeckBuilder**: デッキの構築（設定の起動時検証）
//! - **Deck**: キュー・カーソル・カード 2 枚の管理
//! - **DeckDriver**: tokio タスク上のイベントループ
//! - **run_outbox**: 判定ログの非同期配送

pub mod builder;
pub mod deck;
pub mod driver;
pub mod outbox;
pub mod status;

pub use self::builder::{BuildError, DeckBuilder};
pub use self::deck::Deck;
pub use self::driver::{DeckCommand, DeckDriver, DriverError};
pub use self::outbox::run_outbox;
pub use self::status::{DeckCounts, OutboxStats};
