//! # compare2d
//!
//! A draggable, pointer/keyboard-controlled before/after comparison widget
//! for egui: two stacked visual layers and a handle/crosshair whose
//! normalized position decides how much of the "before" layer is revealed
//! over the "after" layer - along one axis (horizontal or vertical) or
//! freely on both (2d).
//!
//! The crate splits into a small position core and a presentational layer:
//!
//! - [`position`]: the input-to-position state machine - clamped [0, 100]
//!   coordinates, orientation pinning, keyboard stepping, and the
//!   controlled/uncontrolled ownership decision
//! - [`widget`]: the retained [`Compare2D`](widget::Compare2D) egui
//!   component - drag gesture lifecycle, reveal geometry, layer painting,
//!   activation-scope hit-testing and accessibility reporting
//! - [`config`]: TOML settings for the demo application shell
//!
//! Everything is synchronous and event-driven; each pointer or key event
//! is handled to completion with at most one position computation and one
//! change report.

pub mod config;
pub mod position;
pub mod widget;

pub use position::{AxisPosition, ControlMode, Orientation, Position2D, PositionController};
pub use widget::{
    Compare2D, CompareConfig, CompareResponse, CompareStyle, ContentKind, Dimension,
    DragActivationScope, InteractionState, LayerContent, WidgetSize, WidgetState,
};
