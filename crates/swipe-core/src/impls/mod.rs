//! Impls - ports の実装（メモリ・チャネル・クロージャ）

pub mod callbacks;
pub mod channel_sink;
pub mod memory_logger;
pub mod recording_sink;

pub use self::callbacks::Callbacks;
pub use self::channel_sink::ChannelSink;
pub use self::memory_logger::MemoryLogger;
pub use self::recording_sink::RecordingSink;
