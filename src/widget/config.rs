//! Caller-facing configuration of the comparison widget.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::position::Orientation;

use super::style::CompareStyle;

/// Which rendered regions begin a drag gesture on pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragActivationScope {
    /// Anywhere on the widget surface.
    EntireSurface,
    /// Only the handle disc.
    HandleOnly,
    /// The handle disc plus the axis line bands.
    HandleAndAxisLines,
}

impl Default for DragActivationScope {
    fn default() -> Self {
        DragActivationScope::EntireSurface
    }
}

impl fmt::Display for DragActivationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragActivationScope::EntireSurface => write!(f, "entire surface"),
            DragActivationScope::HandleOnly => write!(f, "handle only"),
            DragActivationScope::HandleAndAxisLines => write!(f, "handle and axis lines"),
        }
    }
}

/// One widget dimension: absolute points or a fraction of the available
/// space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Points(f32),
    Fraction(f32),
}

impl Dimension {
    pub fn resolve(&self, available: f32) -> f32 {
        match self {
            Dimension::Points(points) => *points,
            Dimension::Fraction(fraction) => available * fraction.clamp(0.0, 1.0),
        }
    }
}

/// Widget size per axis; defaults to full available width by 400 points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl WidgetSize {
    pub fn points(width: f32, height: f32) -> Self {
        Self {
            width: Dimension::Points(width),
            height: Dimension::Points(height),
        }
    }

    pub fn resolve(&self, available: egui::Vec2) -> egui::Vec2 {
        egui::vec2(
            self.width.resolve(available.x),
            self.height.resolve(available.y),
        )
    }
}

impl Default for WidgetSize {
    fn default() -> Self {
        Self {
            width: Dimension::Fraction(1.0),
            height: Dimension::Points(400.0),
        }
    }
}

/// Full configuration surface of [`Compare2D`](super::Compare2D).
///
/// Everything here can also be changed after construction through the
/// widget's setters, except the control mode, which is fixed for the
/// widget's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    pub orientation: Orientation,
    pub activation_scope: DragActivationScope,
    pub size: WidgetSize,
    pub disabled: bool,
    /// Label reported through the accessibility channel; a default is
    /// derived from the orientation when absent.
    pub accessibility_label: Option<String>,
    pub style: CompareStyle,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            activation_scope: DragActivationScope::default(),
            size: WidgetSize::default(),
            disabled: false,
            accessibility_label: None,
            style: CompareStyle::default(),
        }
    }
}
