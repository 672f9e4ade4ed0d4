//! Drag gesture lifecycle with statum state machine
//!
//! A single logical gesture at a time, with compile-time state safety:
//!
//! ```text
//! Idle ──press──► Tracking ──release──► Idle
//!                    │
//!                 (track)
//! ```
//!
//! Move input is only consumed in `Tracking`; a release is guaranteed on
//! every exit path (pointer release, widget disabled mid-drag) because the
//! transitions consume the previous state - "move without press" and
//! "double release" do not typecheck.

use egui::Pos2;
use statum::{machine, state};
use tracing::{debug, warn};

/// States of the drag gesture lifecycle using statum
#[state]
#[derive(Debug, Clone)]
pub enum DragPhase {
    Idle,     // No gesture active, move events are ignored
    Tracking, // Pointer captured, moves become position updates
}

/// Drag gesture with compile-time state safety via statum
///
/// Holds the last pointer location seen by the active gesture so move
/// handling can skip frames where the pointer did not actually move.
#[machine]
pub struct DragGesture<S: DragPhase> {
    last_pointer: Pos2,
}

impl DragGesture<Idle> {
    pub fn ready() -> Self {
        Self::new(Pos2::ZERO)
    }

    /// Begins a gesture at the press location.
    pub fn press(mut self, at: Pos2) -> DragGesture<Tracking> {
        debug!("drag gesture started at {:?}", at);
        self.last_pointer = at;
        self.transition()
    }
}

impl DragGesture<Tracking> {
    pub fn last_pointer(&self) -> Pos2 {
        self.last_pointer
    }

    /// Records a pointer move inside the active gesture.
    pub fn track(&mut self, at: Pos2) {
        self.last_pointer = at;
    }

    /// Ends the gesture.
    pub fn release(self) -> DragGesture<Idle> {
        debug!("drag gesture released");
        self.transition()
    }
}

/// Runtime holder for the typestate machine.
///
/// The widget needs the gesture as a struct field across frames, so the
/// two statum states are carried in an enum and moved through
/// [`std::mem::replace`] on every transition.
pub enum Gesture {
    Idle(DragGesture<Idle>),
    Tracking(DragGesture<Tracking>),
}

impl Gesture {
    pub fn new() -> Self {
        Gesture::Idle(DragGesture::ready())
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, Gesture::Tracking(_))
    }

    /// Begins a gesture; a second press while one is live is ignored,
    /// only one gesture can be active.
    pub fn press(&mut self, at: Pos2) {
        let previous = std::mem::replace(self, Gesture::Idle(DragGesture::ready()));
        *self = match previous {
            Gesture::Idle(idle) => Gesture::Tracking(idle.press(at)),
            tracking @ Gesture::Tracking(_) => {
                warn!("press while a gesture is already active, ignored");
                tracking
            }
        };
    }

    /// Records a move; returns whether the move should produce an update.
    ///
    /// `false` while idle (move events are ignored without an active
    /// gesture) and for frames where the pointer did not move.
    pub fn track(&mut self, at: Pos2) -> bool {
        match self {
            Gesture::Idle(_) => false,
            Gesture::Tracking(tracking) => {
                if tracking.last_pointer() == at {
                    return false;
                }
                tracking.track(at);
                true
            }
        }
    }

    /// Ends the gesture on any exit path; idle is a no-op.
    pub fn release(&mut self) {
        let previous = std::mem::replace(self, Gesture::Idle(DragGesture::ready()));
        *self = match previous {
            Gesture::Tracking(tracking) => Gesture::Idle(tracking.release()),
            idle @ Gesture::Idle(_) => idle,
        };
    }
}

impl Default for Gesture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn moves_are_ignored_while_idle() {
        let mut gesture = Gesture::new();
        assert!(!gesture.track(pos2(10.0, 10.0)));
        assert!(!gesture.is_tracking());
    }

    #[test]
    fn press_track_release_cycle() {
        let mut gesture = Gesture::new();
        gesture.press(pos2(5.0, 5.0));
        assert!(gesture.is_tracking());

        assert!(gesture.track(pos2(6.0, 5.0)));
        gesture.release();
        assert!(!gesture.is_tracking());
        assert!(!gesture.track(pos2(7.0, 5.0)));
    }

    #[test]
    fn stationary_pointer_produces_no_update() {
        let mut gesture = Gesture::new();
        gesture.press(pos2(5.0, 5.0));
        assert!(!gesture.track(pos2(5.0, 5.0)));
        assert!(gesture.track(pos2(5.0, 6.0)));
    }

    #[test]
    fn double_press_keeps_the_active_gesture() {
        let mut gesture = Gesture::new();
        gesture.press(pos2(1.0, 1.0));
        gesture.press(pos2(9.0, 9.0));
        assert!(gesture.is_tracking());
        // The first gesture survives, so a move back is a real move.
        assert!(gesture.track(pos2(2.0, 2.0)));
    }

    #[test]
    fn release_while_idle_is_a_noop() {
        let mut gesture = Gesture::new();
        gesture.release();
        assert!(!gesture.is_tracking());
    }
}
