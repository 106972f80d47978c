//! Gesture tuning: thresholds, fly-out distance and timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::view::LookaheadStyle;

/// Tuning for the card gesture controller and the deck's lookahead card.
///
/// All distances are device-independent pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// A drag must end strictly beyond this horizontal offset to decide.
    pub swipe_threshold: f64,

    /// Rotation at `dx == swipe_threshold`; rotation is linear in dx.
    pub rotation_degrees: f64,

    /// Fly-out target is `swipe_threshold * fly_out_multiplier` in the decided direction.
    pub fly_out_multiplier: f64,

    /// Accept / reject hints show once `abs(dx)` exceeds this.
    pub hint_threshold: f64,

    /// Delay between release and the decision callback (the fly-out duration).
    pub release_duration_ms: u64,

    pub lookahead: LookaheadStyle,
}

impl SwipeConfig {
    /// Values the web deck shipped with (120px / 15deg / x6 / 40px / 220ms).
    pub fn default_v1() -> Self {
        Self {
            swipe_threshold: 120.0,
            rotation_degrees: 15.0,
            fly_out_multiplier: 6.0,
            hint_threshold: 40.0,
            release_duration_ms: 220,
            lookahead: LookaheadStyle::default(),
        }
    }

    pub fn release_duration(&self) -> Duration {
        Duration::from_millis(self.release_duration_ms)
    }

    /// Horizontal distance of the fly-out target from rest.
    pub fn fly_out_distance(&self) -> f64 {
        self.swipe_threshold * self.fly_out_multiplier
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.swipe_threshold));
        }
        if !self.hint_threshold.is_finite()
            || self.hint_threshold < 0.0
            || self.hint_threshold >= self.swipe_threshold
        {
            return Err(ConfigError::InvalidHintThreshold {
                hint: self.hint_threshold,
                swipe: self.swipe_threshold,
            });
        }
        if !self.fly_out_multiplier.is_finite() || self.fly_out_multiplier < 1.0 {
            return Err(ConfigError::InvalidFlyOutMultiplier(self.fly_out_multiplier));
        }
        if !self.rotation_degrees.is_finite() {
            return Err(ConfigError::InvalidRotation(self.rotation_degrees));
        }
        if self.release_duration_ms == 0 {
            return Err(ConfigError::ZeroReleaseDuration);
        }
        self.lookahead.validate()
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_policy_matches_shipped_values() {
        let config = SwipeConfig::default_v1();
        assert_eq!(config.swipe_threshold, 120.0);
        assert_eq!(config.rotation_degrees, 15.0);
        assert_eq!(config.fly_out_distance(), 720.0);
        assert_eq!(config.hint_threshold, 40.0);
        assert_eq!(config.release_duration(), Duration::from_millis(220));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_like_input_keeps_defaults() {
        let config: SwipeConfig =
            serde_json::from_value(serde_json::json!({ "swipe_threshold": 90.0 })).unwrap();
        assert_eq!(config.swipe_threshold, 90.0);
        assert_eq!(config.release_duration_ms, 220);
    }

    #[rstest]
    #[case::zero_threshold(SwipeConfig { swipe_threshold: 0.0, ..SwipeConfig::default_v1() })]
    #[case::nan_threshold(SwipeConfig { swipe_threshold: f64::NAN, ..SwipeConfig::default_v1() })]
    #[case::hint_above_threshold(SwipeConfig { hint_threshold: 130.0, ..SwipeConfig::default_v1() })]
    #[case::negative_hint(SwipeConfig { hint_threshold: -1.0, ..SwipeConfig::default_v1() })]
    #[case::short_fly_out(SwipeConfig { fly_out_multiplier: 0.5, ..SwipeConfig::default_v1() })]
    #[case::infinite_rotation(SwipeConfig { rotation_degrees: f64::INFINITY, ..SwipeConfig::default_v1() })]
    #[case::instant_release(SwipeConfig { release_duration_ms: 0, ..SwipeConfig::default_v1() })]
    fn invalid_configs_are_rejected(#[case] config: SwipeConfig) {
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_release_reports_kind() {
        let config = SwipeConfig {
            release_duration_ms: 0,
            ..SwipeConfig::default_v1()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroReleaseDuration));
    }
}
