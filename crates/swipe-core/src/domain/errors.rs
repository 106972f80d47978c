//! Errors - 設定値の検証エラー
//!
//! The gesture engine itself has no failure modes: stale decisions, timers
//! after disposal and empty decks are handled as no-ops. The only thing that
//! can be *wrong* is the tuning it is built with.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("swipe_threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("hint_threshold must be in 0..swipe_threshold ({swipe}), got {hint}")]
    InvalidHintThreshold { hint: f64, swipe: f64 },

    #[error("fly_out_multiplier must be at least 1.0, got {0}")]
    InvalidFlyOutMultiplier(f64),

    #[error("rotation_degrees must be finite, got {0}")]
    InvalidRotation(f64),

    #[error("release_duration_ms must be greater than zero")]
    ZeroReleaseDuration,

    #[error("invalid lookahead style: {0}")]
    InvalidLookahead(String),
}
