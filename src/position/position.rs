//! Normalized two-axis position within the widget rectangle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of a position coordinate, in percent.
pub const COORD_MIN: f64 = 0.0;

/// Upper bound of a position coordinate, in percent.
pub const COORD_MAX: f64 = 100.0;

/// Midpoint a pinned axis is held at.
pub const COORD_CENTER: f64 = 50.0;

/// A position inside the widget's bounding rectangle, expressed as
/// percentage offsets along the horizontal and vertical axes.
///
/// Both coordinates are always kept in the closed range [0, 100]. A full
/// two-axis position is retained internally regardless of orientation; the
/// orientation-projected view lives in
/// [`AxisPosition`](crate::position::AxisPosition).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl Position2D {
    /// Creates a position, clamping both coordinates into range.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }.clamped()
    }

    /// Returns a copy with both coordinates clamped to [0, 100].
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(COORD_MIN, COORD_MAX),
            y: self.y.clamp(COORD_MIN, COORD_MAX),
        }
    }

    /// Coordinates rounded to whole percent, for the state attributes
    /// exposed to styling and test hooks.
    pub fn rounded(&self) -> (u8, u8) {
        (self.x.round() as u8, self.y.round() as u8)
    }
}

impl Default for Position2D {
    /// The rectangle midpoint, the position a fresh widget starts at.
    fn default() -> Self {
        Self {
            x: COORD_CENTER,
            y: COORD_CENTER,
        }
    }
}

impl fmt::Display for Position2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
