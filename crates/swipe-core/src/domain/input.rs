//! Host input events delivered to the interactive card.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Platform pointer identifier (mouse, pen or touch contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The mouse / first touch contact.
    pub const PRIMARY: PointerId = PointerId(1);
}

/// Directional keys the deck listens to; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Input events, as delivered by the host event loop.
///
/// State transitions:
/// - `PointerDown` starts a drag and captures the pointer
/// - `PointerMove` tracks the drag (ignored at zero pressure)
/// - `PointerUp` / `LostCapture` end the drag and evaluate the threshold
/// - `Key` releases the card immediately
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        pointer: PointerId,
        position: Point,
    },
    PointerMove {
        pointer: PointerId,
        position: Point,
        pressure: f32,
    },
    PointerUp {
        pointer: PointerId,
    },
    LostCapture {
        pointer: PointerId,
    },
    Key {
        key: Key,
    },
}

impl InputEvent {
    pub fn down(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            pointer: PointerId::PRIMARY,
            position: Point::new(x, y),
        }
    }

    /// A move of the primary pointer with the button held.
    pub fn drag_to(x: f64, y: f64) -> Self {
        InputEvent::PointerMove {
            pointer: PointerId::PRIMARY,
            position: Point::new(x, y),
            pressure: 0.5,
        }
    }

    pub fn up() -> Self {
        InputEvent::PointerUp {
            pointer: PointerId::PRIMARY,
        }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::Key { key }
    }
}
