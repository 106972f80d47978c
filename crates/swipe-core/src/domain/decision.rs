//! Decision model: the binary classification a card resolves to.

use serde::{Deserialize, Serialize};

use super::ids::CardId;

/// Accept ("like", swipe right) or reject ("pass", swipe left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// Horizontal direction of the fly-out: `+1.0` right, `-1.0` left.
    pub fn sign(self) -> f64 {
        match self {
            Decision::Accept => 1.0,
            Decision::Reject => -1.0,
        }
    }

    /// Classify a finished drag.
    ///
    /// Strictly beyond `threshold` in either direction decides; anything
    /// within `-threshold..=threshold` (boundary included) snaps back.
    pub fn from_horizontal(dx: f64, threshold: f64) -> Option<Self> {
        if dx > threshold {
            Some(Decision::Accept)
        } else if dx < -threshold {
            Some(Decision::Reject)
        } else {
            None
        }
    }

    /// Whether this decision counts as a "like" in interaction logs.
    pub fn liked(self) -> bool {
        matches!(self, Decision::Accept)
    }
}

/// A decision applied by the deck, together with the item it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict<T> {
    pub card_id: CardId,
    pub decision: Decision,
    pub item: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::far_right(150.0, Some(Decision::Accept))]
    #[case::just_past_right(120.5, Some(Decision::Accept))]
    #[case::right_boundary(120.0, None)]
    #[case::center(0.0, None)]
    #[case::left_boundary(-120.0, None)]
    #[case::just_past_left(-120.5, Some(Decision::Reject))]
    #[case::far_left(-200.0, Some(Decision::Reject))]
    fn threshold_is_exclusive(#[case] dx: f64, #[case] expected: Option<Decision>) {
        assert_eq!(Decision::from_horizontal(dx, 120.0), expected);
    }

    #[test]
    fn nan_snaps_back() {
        assert_eq!(Decision::from_horizontal(f64::NAN, 120.0), None);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Decision::Accept).unwrap(), "\"accept\"");
        assert_eq!(serde_json::to_string(&Decision::Reject).unwrap(), "\"reject\"");
    }
}
