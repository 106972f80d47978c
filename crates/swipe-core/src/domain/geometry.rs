//! Pointer positions and card displacement, in device-independent pixels.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// An absolute pointer position as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Offset of a card from its resting position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

impl Displacement {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Linear interpolation towards `to`; `t` is clamped to `0..=1`.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            dx: self.dx + (to.dx - self.dx) * t,
            dy: self.dy + (to.dy - self.dy) * t,
        }
    }
}

impl Sub for Point {
    type Output = Displacement;

    fn sub(self, rhs: Point) -> Displacement {
        Displacement::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<Displacement> for Point {
    type Output = Point;

    fn sub(self, rhs: Displacement) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl Add<Displacement> for Point {
    type Output = Point;

    fn add(self, rhs: Displacement) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}
