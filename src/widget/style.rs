//! Visual parameters of the comparison widget.
//!
//! Centralizes the colors and metrics used by the presentation layer so a
//! host application can restyle the widget from a single place, in the
//! same spirit as the demo UI's shared palette.

use egui::{Color32, Stroke};

/// Colors and metrics for handle, axis lines and overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareStyle {
    /// Fill behind layers that do not cover the full rectangle.
    pub background: Color32,

    /// Axis line color.
    pub line_color: Color32,

    /// Axis line thickness in points.
    pub line_thickness: f32,

    /// Handle disc radius in points.
    pub handle_radius: f32,

    /// Extra margin around handle and lines that still activates a drag.
    pub grab_margin: f32,

    /// Handle disc fill.
    pub handle_fill: Color32,

    /// Handle disc outline.
    pub handle_stroke: Stroke,

    /// Overlay drawn across the widget while disabled.
    pub disabled_overlay: Color32,
}

impl Default for CompareStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(20, 20, 20),
            line_color: Color32::from_gray(235),
            line_thickness: 2.0,
            handle_radius: 9.0,
            grab_margin: 6.0,
            handle_fill: Color32::from_gray(245),
            handle_stroke: Stroke::new(1.5, Color32::from_rgb(60, 60, 60)),
            disabled_overlay: Color32::from_black_alpha(110),
        }
    }
}
