//! # Position Core
//!
//! This module implements the position state machine at the heart of the
//! comparison widget: raw spatial and keyboard input is normalized into a
//! two-axis position in the closed range [0, 100] per axis, constrained by
//! the active [`Orientation`], and reconciled against controlled or
//! uncontrolled ownership of the value.
//!
//! ## Why This Module Exists
//!
//! Everything visual about the widget (clip region, handle placement, axis
//! lines) is a stateless projection of one value: the current position. This
//! module exists to keep that value correct under every input path:
//!
//! - **Pointer input**: absolute screen coordinates mapped into percentage
//!   coordinates relative to the widget rectangle, clamped on both axes
//! - **Keyboard input**: stepped movement with large/fine modifiers and
//!   Home/End jumps, with pinned axes strictly ignored
//! - **Ownership**: a caller-supplied (controlled) value always overrides
//!   internal storage; the internal copy is only live in uncontrolled mode
//!
//! ## Design Rationale
//!
//! The controller is synchronous and allocation-free. Each input event
//! produces at most one new position and one report to the caller; there is
//! no batching, debouncing, or async path. Out-of-range input is clamped,
//! unknown keys are ignored, and degenerate geometry silently suppresses
//! the update - there is no error taxonomy here by design.

pub mod axis;
pub mod controller;
pub mod position;

pub use axis::{AxisPosition, Orientation};
pub use controller::{ControlMode, PositionController};
pub use position::Position2D;
