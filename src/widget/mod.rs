//! # Comparison Widget
//!
//! The presentational layer on top of the position core: a retained egui
//! component that stacks two visual layers and reveals the "before" layer
//! up to the handle/crosshair position.
//!
//! ## Module Map
//!
//! - [`compare`]: the `Compare2D` component wiring everything together
//! - [`gesture`]: drag lifecycle as a statum typestate machine
//! - [`geometry`]: position → clip region / handle / axis line rectangles
//! - [`layers`]: texture or caller-painted before/after content
//! - [`config`] / [`style`]: the caller-facing knobs
//!
//! Everything outside `compare` is a stateless function of the current
//! position and configuration; the only cross-frame state is the position
//! controller and the gesture machine.

pub mod compare;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod layers;
pub mod style;

pub use compare::{Compare2D, CompareResponse, InteractionState, WidgetState};
pub use config::{CompareConfig, Dimension, DragActivationScope, WidgetSize};
pub use geometry::RevealGeometry;
pub use layers::{ContentKind, LayerContent, LayerPair};
pub use style::CompareStyle;
