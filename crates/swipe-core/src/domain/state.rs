//! Card state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::decision::Decision;
use super::geometry::{Displacement, Point};
use super::input::PointerId;

/// Per-card gesture state.
///
/// State transitions:
/// - Idle -> Dragging -> Idle (snap back)
/// - Idle -> Dragging -> Released (threshold exceeded, or key press)
/// - Idle -> Released (key press / manual control)
///
/// `Released` is terminal for the card instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardState {
    Idle,

    /// Pointer captured; displacement = pointer - origin.
    Dragging { pointer: PointerId, origin: Point },

    /// Decision fixed; the card is flying out.
    Released {
        decision: Decision,
        /// Displacement at the moment of release (start of the fly-out).
        from: Displacement,
        started_at: DateTime<Utc>,
        timer: ReleaseTimer,
    },
}

impl CardState {
    pub fn phase(&self) -> CardPhase {
        match self {
            CardState::Idle => CardPhase::Idle,
            CardState::Dragging { .. } => CardPhase::Dragging,
            CardState::Released { .. } => CardPhase::Released,
        }
    }

    pub fn is_released(&self) -> bool {
        matches!(self, CardState::Released { .. })
    }
}

/// Fire-once deadline for the decision callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseTimer {
    deadline: DateTime<Utc>,
    armed: bool,
}

impl ReleaseTimer {
    pub fn arm(deadline: DateTime<Utc>) -> Self {
        Self {
            deadline,
            armed: true,
        }
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Disarm without firing. Idempotent.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Returns `true` exactly once, on the first call at or after the deadline.
    pub fn fire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        if self.armed && now >= self.deadline {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

/// Serializable view of CardState.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPhase {
    Idle,
    Dragging,
    Released,
}
