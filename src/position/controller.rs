//! Input-to-position mapping and controlled/uncontrolled reconciliation.
//!
//! The controller turns raw pointer coordinates and key presses into valid
//! positions and decides whether an accepted update is stored or merely
//! reported. Ownership of the value is decided exactly once, at
//! construction:
//!
//! ```text
//! pointer / key ──► compute ──► constrain ──► reconcile ──► AxisPosition
//!                                                 │              │
//!                                      Uncontrolled: store    report to
//!                                      Controlled: discard     caller
//! ```
//!
//! In controlled mode the internal slot is dead weight by design - the
//! rendered value only moves when the caller feeds a new one back in.

use egui::{Key, Modifiers, Pos2, Rect};
use tracing::{debug, trace};

use super::axis::{AxisPosition, Orientation};
use super::position::{Position2D, COORD_MAX, COORD_MIN};

/// Step per arrow key press, in percent.
pub const STEP_DEFAULT: f64 = 1.0;

/// Step with the large-step modifier (Shift) held.
pub const STEP_LARGE: f64 = 10.0;

/// Step with the fine-step modifier (Alt) held.
pub const STEP_FINE: f64 = 0.1;

/// Who owns the position value.
///
/// Decided once from whether the caller supplied an external position at
/// construction. In controlled mode the caller owns the value and the
/// widget only requests changes; the internally stored copy is never
/// synchronized back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlMode {
    /// Caller-owned value; updated only through [`PositionController::sync_controlled`].
    Controlled(Position2D),
    /// Widget-owned value; updated on every accepted input event.
    Uncontrolled(Position2D),
}

/// Converts raw spatial/keyboard input into valid positions and applies
/// the ownership rules described in the module docs.
#[derive(Debug, Clone)]
pub struct PositionController {
    mode: ControlMode,
    orientation: Orientation,
}

impl PositionController {
    /// Creates a controller.
    ///
    /// `controlled` decides the ownership mode for the whole lifetime of
    /// the controller; `initial` seeds the uncontrolled default and is
    /// ignored when a controlled value is present. Both are widened to a
    /// full position and constrained, so the pinned axis sits at 50 from
    /// the first frame on.
    pub fn new(
        orientation: Orientation,
        controlled: Option<AxisPosition>,
        initial: Option<AxisPosition>,
    ) -> Self {
        let mode = match controlled {
            Some(value) => ControlMode::Controlled(orientation.constrain(value.into_full())),
            None => {
                let seed = initial.map(AxisPosition::into_full).unwrap_or_default();
                ControlMode::Uncontrolled(orientation.constrain(seed))
            }
        };
        debug!("position controller created: {:?} ({})", mode, orientation);
        Self { mode, orientation }
    }

    /// The externally visible position: controlled value if supplied,
    /// internal value otherwise.
    pub fn position(&self) -> Position2D {
        match self.mode {
            ControlMode::Controlled(value) => value,
            ControlMode::Uncontrolled(value) => value,
        }
    }

    /// The visible position projected onto the exposed axes.
    pub fn axis_position(&self) -> AxisPosition {
        AxisPosition::from_full(self.position(), self.orientation)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, ControlMode::Controlled(_))
    }

    /// Switches the axis constraint mode and re-pins the stored value.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        let constrained = orientation.constrain(self.position());
        match &mut self.mode {
            ControlMode::Controlled(value) => *value = constrained,
            ControlMode::Uncontrolled(value) => *value = constrained,
        }
        debug!("orientation changed to {}", orientation);
    }

    /// Feeds the caller-owned value in for the next render pass.
    ///
    /// Only meaningful in controlled mode; an uncontrolled controller
    /// ignores the call, it owns its value.
    pub fn sync_controlled(&mut self, value: AxisPosition) {
        match &mut self.mode {
            ControlMode::Controlled(stored) => {
                *stored = self.orientation.constrain(value.into_full());
            }
            ControlMode::Uncontrolled(_) => {
                trace!("sync_controlled on uncontrolled controller ignored");
            }
        }
    }

    /// Maps absolute pointer coordinates into percentage coordinates
    /// relative to `bounds`, clamped per axis, pinned axis overwritten.
    ///
    /// Returns `None` for a degenerate rectangle; missing geometry is a
    /// silent no-op, not an error.
    pub fn position_from_pointer(&self, pointer: Pos2, bounds: Rect) -> Option<Position2D> {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            trace!("degenerate bounds, pointer update skipped");
            return None;
        }

        let x = ((pointer.x - bounds.left()) / bounds.width()) as f64 * 100.0;
        let y = ((pointer.y - bounds.top()) / bounds.height()) as f64 * 100.0;
        Some(self.orientation.constrain(Position2D { x, y }))
    }

    /// Applies a key press to the current position.
    ///
    /// Arrow keys step the relevant axis by ±1 (±10 with Shift, ±0.1 with
    /// Alt; Shift is checked first and wins when both are held). An arrow
    /// along a pinned axis is a strict no-op. Home jumps the free axes to
    /// 0, End to 100. Anything else returns `None`.
    pub fn position_from_key(&self, key: Key, modifiers: Modifiers) -> Option<Position2D> {
        let step = if modifiers.shift {
            STEP_LARGE
        } else if modifiers.alt {
            STEP_FINE
        } else {
            STEP_DEFAULT
        };

        let mut next = self.position();
        match key {
            Key::ArrowLeft => {
                if self.orientation.pins_x() {
                    return None;
                }
                next.x = (next.x - step).max(COORD_MIN);
            }
            Key::ArrowRight => {
                if self.orientation.pins_x() {
                    return None;
                }
                next.x = (next.x + step).min(COORD_MAX);
            }
            Key::ArrowUp => {
                if self.orientation.pins_y() {
                    return None;
                }
                next.y = (next.y - step).max(COORD_MIN);
            }
            Key::ArrowDown => {
                if self.orientation.pins_y() {
                    return None;
                }
                next.y = (next.y + step).min(COORD_MAX);
            }
            Key::Home => {
                next = Position2D {
                    x: COORD_MIN,
                    y: COORD_MIN,
                };
            }
            Key::End => {
                next = Position2D {
                    x: COORD_MAX,
                    y: COORD_MAX,
                };
            }
            _ => return None,
        }

        Some(self.orientation.constrain(next))
    }

    /// Accepts a computed position: stores it in uncontrolled mode, leaves
    /// the controlled value untouched, and in both cases returns the
    /// projected view for reporting to the caller.
    pub fn reconcile(&mut self, new_position: Position2D) -> AxisPosition {
        let constrained = self.orientation.constrain(new_position);
        if let ControlMode::Uncontrolled(value) = &mut self.mode {
            *value = constrained;
        }
        trace!(
            "update reconciled to {} (controlled: {})",
            constrained,
            self.is_controlled()
        );
        AxisPosition::from_full(constrained, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Rect};
    use proptest::prelude::*;

    fn bounds() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0))
    }

    fn twod_at(x: f64, y: f64) -> PositionController {
        PositionController::new(
            Orientation::TwoD,
            None,
            Some(AxisPosition::TwoD { x, y }),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn pointer_maps_to_percentages() {
        let c = twod_at(50.0, 50.0);
        let p = c
            .position_from_pointer(pos2(200.0, 150.0), bounds())
            .unwrap();
        assert_eq!(p, Position2D { x: 50.0, y: 50.0 });

        let p = c.position_from_pointer(pos2(100.0, 75.0), bounds()).unwrap();
        assert_eq!(p, Position2D { x: 25.0, y: 25.0 });
    }

    #[test]
    fn pointer_outside_bounds_is_clamped() {
        let c = twod_at(50.0, 50.0);
        let p = c
            .position_from_pointer(pos2(-80.0, 900.0), bounds())
            .unwrap();
        assert_eq!(p, Position2D { x: 0.0, y: 100.0 });
    }

    #[test]
    fn pointer_update_is_idempotent() {
        let c = twod_at(10.0, 20.0);
        let first = c.position_from_pointer(pos2(123.0, 45.0), bounds());
        let second = c.position_from_pointer(pos2(123.0, 45.0), bounds());
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_bounds_suppress_the_update() {
        let c = twod_at(50.0, 50.0);
        let empty = Rect::from_min_size(pos2(0.0, 0.0), vec2(0.0, 300.0));
        assert_eq!(c.position_from_pointer(pos2(10.0, 10.0), empty), None);
    }

    #[test]
    fn horizontal_pins_y_on_pointer_updates() {
        let c = PositionController::new(Orientation::Horizontal, None, None);
        let p = c.position_from_pointer(pos2(100.0, 280.0), bounds()).unwrap();
        assert_eq!(p, Position2D { x: 25.0, y: 50.0 });
    }

    #[test]
    fn keyboard_step_law() {
        let c = twod_at(50.0, 50.0);

        let p = c
            .position_from_key(Key::ArrowRight, Modifiers::NONE)
            .unwrap();
        assert_close(p.x, 51.0);
        assert_close(p.y, 50.0);

        let p = c
            .position_from_key(Key::ArrowRight, Modifiers::SHIFT)
            .unwrap();
        assert_close(p.x, 60.0);

        let p = c.position_from_key(Key::ArrowLeft, Modifiers::ALT).unwrap();
        assert_close(p.x, 49.9);
    }

    #[test]
    fn large_step_wins_when_both_modifiers_held() {
        let c = twod_at(50.0, 50.0);
        let both = Modifiers::SHIFT.plus(Modifiers::ALT);
        let p = c.position_from_key(Key::ArrowRight, both).unwrap();
        assert_close(p.x, 60.0);
    }

    #[test]
    fn boundary_law_no_under_or_overflow() {
        let c = twod_at(0.0, 100.0);

        let p = c.position_from_key(Key::ArrowLeft, Modifiers::NONE).unwrap();
        assert_close(p.x, 0.0);

        let p = c.position_from_key(Key::ArrowDown, Modifiers::NONE).unwrap();
        assert_close(p.y, 100.0);
    }

    #[test]
    fn arrows_along_pinned_axis_are_strict_noops() {
        let c = PositionController::new(Orientation::Horizontal, None, None);
        assert_eq!(c.position_from_key(Key::ArrowUp, Modifiers::NONE), None);
        assert_eq!(c.position_from_key(Key::ArrowDown, Modifiers::NONE), None);

        let c = PositionController::new(Orientation::Vertical, None, None);
        assert_eq!(c.position_from_key(Key::ArrowLeft, Modifiers::NONE), None);
        assert_eq!(c.position_from_key(Key::ArrowRight, Modifiers::NONE), None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let c = twod_at(50.0, 50.0);
        assert_eq!(c.position_from_key(Key::A, Modifiers::NONE), None);
        assert_eq!(c.position_from_key(Key::Enter, Modifiers::NONE), None);
    }

    #[test]
    fn home_and_end_respect_orientation() {
        let c = twod_at(33.0, 66.0);
        assert_eq!(
            c.position_from_key(Key::Home, Modifiers::NONE).unwrap(),
            Position2D { x: 0.0, y: 0.0 }
        );
        assert_eq!(
            c.position_from_key(Key::End, Modifiers::NONE).unwrap(),
            Position2D { x: 100.0, y: 100.0 }
        );

        let c = PositionController::new(Orientation::Horizontal, None, None);
        assert_eq!(
            c.position_from_key(Key::Home, Modifiers::NONE).unwrap(),
            Position2D { x: 0.0, y: 50.0 }
        );
        assert_eq!(
            c.position_from_key(Key::End, Modifiers::NONE).unwrap(),
            Position2D { x: 100.0, y: 50.0 }
        );

        let c = PositionController::new(Orientation::Vertical, None, None);
        assert_eq!(
            c.position_from_key(Key::Home, Modifiers::NONE).unwrap(),
            Position2D { x: 50.0, y: 0.0 }
        );
    }

    #[test]
    fn uncontrolled_reconcile_stores_and_reports() {
        let mut c = twod_at(50.0, 50.0);
        let reported = c.reconcile(Position2D::new(10.0, 90.0));
        assert_eq!(reported, AxisPosition::TwoD { x: 10.0, y: 90.0 });
        assert_eq!(c.position(), Position2D { x: 10.0, y: 90.0 });
    }

    #[test]
    fn controlled_reconcile_reports_but_never_stores() {
        let mut c = PositionController::new(
            Orientation::TwoD,
            Some(AxisPosition::TwoD { x: 40.0, y: 40.0 }),
            None,
        );
        let reported = c.reconcile(Position2D::new(10.0, 90.0));
        assert_eq!(reported, AxisPosition::TwoD { x: 10.0, y: 90.0 });
        // Rendered value only moves through the externally supplied one.
        assert_eq!(c.position(), Position2D { x: 40.0, y: 40.0 });

        c.sync_controlled(AxisPosition::TwoD { x: 10.0, y: 90.0 });
        assert_eq!(c.position(), Position2D { x: 10.0, y: 90.0 });
    }

    #[test]
    fn controlled_value_is_constrained_on_sync() {
        let mut c = PositionController::new(
            Orientation::Horizontal,
            Some(AxisPosition::Horizontal { x: 30.0 }),
            None,
        );
        c.sync_controlled(AxisPosition::Horizontal { x: 250.0 });
        assert_eq!(c.position(), Position2D { x: 100.0, y: 50.0 });
    }

    #[test]
    fn reported_view_matches_orientation() {
        let mut c = PositionController::new(Orientation::Horizontal, None, None);
        let reported = c.reconcile(Position2D::new(42.0, 13.0));
        assert_eq!(reported, AxisPosition::Horizontal { x: 42.0 });
    }

    #[test]
    fn orientation_change_repins_the_stored_value() {
        let mut c = twod_at(20.0, 80.0);
        c.set_orientation(Orientation::Horizontal);
        assert_eq!(c.position(), Position2D { x: 20.0, y: 50.0 });
    }

    proptest! {
        #[test]
        fn pointer_results_always_in_range(
            px in -2000.0f32..2000.0,
            py in -2000.0f32..2000.0,
        ) {
            let c = twod_at(50.0, 50.0);
            let p = c.position_from_pointer(pos2(px, py), bounds()).unwrap();
            prop_assert!((0.0..=100.0).contains(&p.x));
            prop_assert!((0.0..=100.0).contains(&p.y));
        }

        #[test]
        fn horizontal_y_is_always_exactly_center(
            px in -2000.0f32..2000.0,
            py in -2000.0f32..2000.0,
        ) {
            let c = PositionController::new(Orientation::Horizontal, None, None);
            let p = c.position_from_pointer(pos2(px, py), bounds()).unwrap();
            prop_assert_eq!(p.y, 50.0);
        }
    }
}
