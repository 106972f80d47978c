//! Render surface: what a host draws each frame.
//!
//! Everything here is derived from card state on demand; nothing is stored.

use serde::{Deserialize, Serialize};

use super::config::SwipeConfig;
use super::errors::ConfigError;
use super::geometry::Displacement;
use super::ids::CardId;
use super::item::ItemKey;
use super::state::CardPhase;

/// Translation plus rotation of a card.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation_deg: f64,
}

impl CardTransform {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        rotation_deg: 0.0,
    };

    /// Rotation is `dx / swipe_threshold * rotation_degrees`, unclamped.
    pub fn from_displacement(d: Displacement, config: &SwipeConfig) -> Self {
        Self {
            translate_x: d.dx,
            translate_y: d.dy,
            rotation_deg: d.dx / config.swipe_threshold * config.rotation_degrees,
        }
    }
}

/// Visibility of the "LIKE" / "PASS" affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HintVisibility {
    pub accept: bool,
    pub reject: bool,
}

impl HintVisibility {
    pub const HIDDEN: Self = Self {
        accept: false,
        reject: false,
    };

    pub fn from_displacement(d: Displacement, config: &SwipeConfig) -> Self {
        Self {
            accept: d.dx > config.hint_threshold,
            reject: d.dx < -config.hint_threshold,
        }
    }
}

/// Static presentation of the card beneath the interactive one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookaheadStyle {
    pub scale: f64,
    pub blur_px: f64,
    pub opacity: f64,
}

impl LookaheadStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(ConfigError::InvalidLookahead(format!(
                "scale must be in (0, 1], got {}",
                self.scale
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidLookahead(format!(
                "opacity must be in [0, 1], got {}",
                self.opacity
            )));
        }
        if !self.blur_px.is_finite() || self.blur_px < 0.0 {
            return Err(ConfigError::InvalidLookahead(format!(
                "blur_px must be non-negative, got {}",
                self.blur_px
            )));
        }
        Ok(())
    }
}

impl Default for LookaheadStyle {
    fn default() -> Self {
        Self {
            scale: 0.96,
            blur_px: 0.5,
            opacity: 0.8,
        }
    }
}

/// One card as it should be drawn right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub card_id: CardId,
    pub key: ItemKey,
    pub phase: CardPhase,
    /// Only the topmost card accepts input.
    pub interactive: bool,
    pub z_index: u8,
    pub transform: CardTransform,
    pub hints: HintVisibility,
    /// True while the fly-out is in progress.
    pub animating: bool,
    /// Present for the static lookahead card only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LookaheadStyle>,
}

/// The whole deck for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<CardView>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookahead: Option<CardView>,

    /// "No more items": the cursor is past the end of the deal.
    pub exhausted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::rest(0.0, 0.0)]
    #[case::at_threshold(120.0, 15.0)]
    #[case::half_left(-60.0, -7.5)]
    #[case::fly_out(720.0, 90.0)]
    fn rotation_is_linear_in_dx(#[case] dx: f64, #[case] expected: f64) {
        let config = SwipeConfig::default_v1();
        let t = CardTransform::from_displacement(Displacement::new(dx, 12.0), &config);
        assert_eq!(t.rotation_deg, expected);
        assert_eq!(t.translate_x, dx);
        assert_eq!(t.translate_y, 12.0);
    }

    #[rstest]
    #[case::hidden_at_rest(0.0, false, false)]
    #[case::hidden_at_boundary(40.0, false, false)]
    #[case::accept(41.0, true, false)]
    #[case::reject(-41.0, false, true)]
    #[case::reject_boundary(-40.0, false, false)]
    fn hints_follow_sign_past_hint_threshold(
        #[case] dx: f64,
        #[case] accept: bool,
        #[case] reject: bool,
    ) {
        let config = SwipeConfig::default_v1();
        let hints = HintVisibility::from_displacement(Displacement::new(dx, 0.0), &config);
        assert_eq!(hints, HintVisibility { accept, reject });
    }

    #[test]
    fn default_lookahead_is_valid() {
        assert!(LookaheadStyle::default().validate().is_ok());
        let bad = LookaheadStyle {
            scale: 0.0,
            ..LookaheadStyle::default()
        };
        assert!(bad.validate().is_err());
    }
}
