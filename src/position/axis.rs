//! Orientation modes and the orientation-projected position exposed to
//! callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::{Position2D, COORD_CENTER};

/// Axis constraint mode of the widget.
///
/// Horizontal and vertical orientations pin the other axis to the rectangle
/// midpoint; the pin is re-applied on every update, including the very
/// first one at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Reveal along the x axis, y pinned to 50.
    Horizontal,
    /// Reveal along the y axis, x pinned to 50.
    Vertical,
    /// Free movement on both axes.
    #[serde(rename = "2d")]
    TwoD,
}

impl Orientation {
    /// Whether the x coordinate is pinned to the midpoint.
    pub fn pins_x(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Whether the y coordinate is pinned to the midpoint.
    pub fn pins_y(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Applies the orientation constraint: clamp both axes, then overwrite
    /// any pinned axis with the midpoint.
    pub fn constrain(&self, position: Position2D) -> Position2D {
        let mut p = position.clamped();
        if self.pins_x() {
            p.x = COORD_CENTER;
        }
        if self.pins_y() {
            p.y = COORD_CENTER;
        }
        p
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::TwoD
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::TwoD => write!(f, "2d"),
        }
    }
}

/// Position as seen at the interface boundary: only the axes the active
/// orientation exposes are present.
///
/// Internally the widget always keeps a full [`Position2D`]; this tagged
/// view is what change callbacks receive and what a controlled caller
/// supplies. Conversion in both directions is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisPosition {
    Horizontal { x: f64 },
    Vertical { y: f64 },
    TwoD { x: f64, y: f64 },
}

impl AxisPosition {
    /// Projects a full position down to the axes the orientation exposes.
    pub fn from_full(position: Position2D, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => AxisPosition::Horizontal { x: position.x },
            Orientation::Vertical => AxisPosition::Vertical { y: position.y },
            Orientation::TwoD => AxisPosition::TwoD {
                x: position.x,
                y: position.y,
            },
        }
    }

    /// Widens back to a full position; axes the variant does not carry sit
    /// at the midpoint.
    pub fn into_full(self) -> Position2D {
        match self {
            AxisPosition::Horizontal { x } => Position2D::new(x, COORD_CENTER),
            AxisPosition::Vertical { y } => Position2D::new(COORD_CENTER, y),
            AxisPosition::TwoD { x, y } => Position2D::new(x, y),
        }
    }

    /// The orientation this view belongs to.
    pub fn orientation(&self) -> Orientation {
        match self {
            AxisPosition::Horizontal { .. } => Orientation::Horizontal,
            AxisPosition::Vertical { .. } => Orientation::Vertical,
            AxisPosition::TwoD { .. } => Orientation::TwoD,
        }
    }
}

impl fmt::Display for AxisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisPosition::Horizontal { x } => write!(f, "x: {:.1}", x),
            AxisPosition::Vertical { y } => write!(f, "y: {:.1}", y),
            AxisPosition::TwoD { x, y } => write!(f, "x: {:.1}, y: {:.1}", x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_pins_the_off_axis() {
        let p = Position2D::new(30.0, 80.0);
        assert_eq!(
            Orientation::Horizontal.constrain(p),
            Position2D { x: 30.0, y: 50.0 }
        );
        assert_eq!(
            Orientation::Vertical.constrain(p),
            Position2D { x: 50.0, y: 80.0 }
        );
        assert_eq!(Orientation::TwoD.constrain(p), p);
    }

    #[test]
    fn projection_exposes_only_relevant_axes() {
        let p = Position2D::new(30.0, 80.0);
        assert_eq!(
            AxisPosition::from_full(p, Orientation::Horizontal),
            AxisPosition::Horizontal { x: 30.0 }
        );
        assert_eq!(
            AxisPosition::from_full(p, Orientation::Vertical),
            AxisPosition::Vertical { y: 80.0 }
        );
        assert_eq!(
            AxisPosition::from_full(p, Orientation::TwoD),
            AxisPosition::TwoD { x: 30.0, y: 80.0 }
        );
    }

    #[test]
    fn widening_fills_missing_axes_with_midpoint() {
        assert_eq!(
            AxisPosition::Horizontal { x: 10.0 }.into_full(),
            Position2D { x: 10.0, y: 50.0 }
        );
        assert_eq!(
            AxisPosition::Vertical { y: 90.0 }.into_full(),
            Position2D { x: 50.0, y: 90.0 }
        );
    }

    #[test]
    fn orientation_serde_names_match_the_wire_format() {
        #[derive(Serialize)]
        struct Wire {
            orientation: Orientation,
        }

        let twod = Wire {
            orientation: Orientation::TwoD,
        };
        assert_eq!(toml::to_string(&twod).unwrap().trim(), "orientation = \"2d\"");

        let horizontal = Wire {
            orientation: Orientation::Horizontal,
        };
        assert_eq!(
            toml::to_string(&horizontal).unwrap().trim(),
            "orientation = \"horizontal\""
        );
    }
}
