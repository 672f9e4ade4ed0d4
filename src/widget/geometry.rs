//! Reveal geometry derived from the current position.
//!
//! Stateless projection of (position, orientation, widget rect) onto the
//! rectangles the presentation layer paints and hit-tests: the clip region
//! of the "before" layer, the handle center and the axis line bands. The
//! clip region spans from the rectangle origin towards the handle - a
//! full-height left slab (horizontal), a full-width top slab (vertical),
//! or the top-left sub-rectangle (2d).

use egui::{pos2, vec2, Pos2, Rect};

use crate::position::{Orientation, Position2D};

use super::config::DragActivationScope;
use super::style::CompareStyle;

/// Derived rectangles for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGeometry {
    /// The widget rectangle.
    pub outer: Rect,
    /// Region of the "before" layer that stays visible.
    pub clip: Rect,
    /// Handle center at (x%, y%).
    pub handle_center: Pos2,
    /// Vertical axis line band at x%, absent in vertical orientation.
    pub vertical_line: Option<Rect>,
    /// Horizontal axis line band at y%, absent in horizontal orientation.
    pub horizontal_line: Option<Rect>,
}

impl RevealGeometry {
    pub fn compute(
        outer: Rect,
        position: Position2D,
        orientation: Orientation,
        style: &CompareStyle,
    ) -> Self {
        let anchor = outer.lerp_inside(vec2(
            (position.x / 100.0) as f32,
            (position.y / 100.0) as f32,
        ));

        let clip = match orientation {
            Orientation::Horizontal => {
                Rect::from_min_max(outer.min, pos2(anchor.x, outer.max.y))
            }
            Orientation::Vertical => Rect::from_min_max(outer.min, pos2(outer.max.x, anchor.y)),
            Orientation::TwoD => Rect::from_min_max(outer.min, anchor),
        };

        let vertical_line = (!matches!(orientation, Orientation::Vertical)).then(|| {
            Rect::from_center_size(
                pos2(anchor.x, outer.center().y),
                vec2(style.line_thickness, outer.height()),
            )
        });
        let horizontal_line = (!matches!(orientation, Orientation::Horizontal)).then(|| {
            Rect::from_center_size(
                pos2(outer.center().x, anchor.y),
                vec2(outer.width(), style.line_thickness),
            )
        });

        Self {
            outer,
            clip,
            handle_center: anchor,
            vertical_line,
            horizontal_line,
        }
    }

    /// Whether a press at `pointer` begins a drag under the given scope.
    pub fn activates(
        &self,
        pointer: Pos2,
        scope: DragActivationScope,
        style: &CompareStyle,
    ) -> bool {
        match scope {
            DragActivationScope::EntireSurface => self.outer.contains(pointer),
            DragActivationScope::HandleOnly => self.hits_handle(pointer, style),
            DragActivationScope::HandleAndAxisLines => {
                self.hits_handle(pointer, style) || self.hits_line(pointer, style)
            }
        }
    }

    fn hits_handle(&self, pointer: Pos2, style: &CompareStyle) -> bool {
        pointer.distance(self.handle_center) <= style.handle_radius + style.grab_margin
    }

    fn hits_line(&self, pointer: Pos2, style: &CompareStyle) -> bool {
        let hit_band = |line: &Rect| line.expand(style.grab_margin).contains(pointer);
        self.vertical_line.as_ref().is_some_and(hit_band)
            || self.horizontal_line.as_ref().is_some_and(hit_band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outer() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0))
    }

    fn geometry(orientation: Orientation, x: f64, y: f64) -> RevealGeometry {
        RevealGeometry::compute(
            outer(),
            Position2D::new(x, y),
            orientation,
            &CompareStyle::default(),
        )
    }

    #[test]
    fn twod_clip_is_the_top_left_subrectangle() {
        let g = geometry(Orientation::TwoD, 25.0, 75.0);
        assert_eq!(g.clip, Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 225.0)));
        assert_eq!(g.handle_center, pos2(100.0, 225.0));
    }

    #[test]
    fn horizontal_clip_is_a_full_height_slab() {
        let g = geometry(Orientation::Horizontal, 25.0, 50.0);
        assert_eq!(g.clip, Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 300.0)));
        assert!(g.vertical_line.is_some());
        assert!(g.horizontal_line.is_none());
    }

    #[test]
    fn vertical_clip_is_a_full_width_slab() {
        let g = geometry(Orientation::Vertical, 50.0, 75.0);
        assert_eq!(g.clip, Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 225.0)));
        assert!(g.vertical_line.is_none());
        assert!(g.horizontal_line.is_some());
    }

    #[test]
    fn twod_shows_both_axis_lines() {
        let g = geometry(Orientation::TwoD, 50.0, 50.0);
        assert!(g.vertical_line.is_some());
        assert!(g.horizontal_line.is_some());
    }

    #[test]
    fn entire_surface_activates_anywhere_inside() {
        let style = CompareStyle::default();
        let g = geometry(Orientation::TwoD, 50.0, 50.0);
        assert!(g.activates(pos2(5.0, 295.0), DragActivationScope::EntireSurface, &style));
        assert!(!g.activates(pos2(-5.0, 10.0), DragActivationScope::EntireSurface, &style));
    }

    #[test]
    fn handle_only_requires_the_handle_disc() {
        let style = CompareStyle::default();
        let g = geometry(Orientation::TwoD, 50.0, 50.0);
        assert!(g.activates(pos2(200.0, 150.0), DragActivationScope::HandleOnly, &style));
        assert!(g.activates(
            pos2(200.0 + style.handle_radius, 150.0),
            DragActivationScope::HandleOnly,
            &style
        ));
        assert!(!g.activates(pos2(10.0, 10.0), DragActivationScope::HandleOnly, &style));
    }

    #[test]
    fn lines_scope_accepts_the_axis_bands() {
        let style = CompareStyle::default();
        let g = geometry(Orientation::TwoD, 50.0, 50.0);
        // On the vertical line, far from the handle.
        assert!(g.activates(
            pos2(200.0, 20.0),
            DragActivationScope::HandleAndAxisLines,
            &style
        ));
        // On the horizontal line.
        assert!(g.activates(
            pos2(30.0, 150.0),
            DragActivationScope::HandleAndAxisLines,
            &style
        ));
        // In open space.
        assert!(!g.activates(
            pos2(80.0, 60.0),
            DragActivationScope::HandleAndAxisLines,
            &style
        ));
    }
}
