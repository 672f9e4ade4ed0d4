//! Shared components and styling for the demo UI.
//!
//! Keeps the demo screens visually consistent: the dark palette and frame
//! helper every menu uses, the navigation state, the settings shared
//! between screens, and the chrono-stamped position log the demos append
//! to from the widget's change callback.

use chrono::NaiveDateTime;
use eframe::egui::{self, Align2, Color32, FontId, Frame, Painter, Rect, Stroke};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use compare2d::{AxisPosition, DragActivationScope, Orientation};

/// Maximum number of retained position log entries.
pub const LOG_CAPACITY: usize = 64;

/// Current active demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Image comparison with generated textures.
    Images,
    /// Caller-painted custom layer content.
    Custom,
    /// Externally owned (controlled) position.
    Controlled,
    /// Widget options and usage notes.
    Settings,
}

/// Demo-wide widget options, owned by the settings screen and applied to
/// the demo widgets each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSettings {
    pub orientation: Orientation,
    pub activation_scope: DragActivationScope,
    pub disabled: bool,
}

/// Centralized dark theme palette for the demo screens.
pub struct UiColors;

impl UiColors {
    /// Primary background color for main content areas
    pub const MAIN_BG: Color32 = Color32::from_rgb(30, 30, 30);

    /// Secondary background color for nested components
    pub const INNER_BG: Color32 = Color32::from_rgb(25, 25, 25);

    /// Deepest background color for emphasized content areas
    pub const EXTREME_BG: Color32 = Color32::from_rgb(20, 20, 20);

    /// Border color for component separation
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);

    /// Active status indicator color
    pub const ACTIVE: Color32 = Color32::from_rgb(50, 200, 20);

    /// Inactive status indicator color
    pub const INACTIVE: Color32 = Color32::from_rgb(200, 50, 20);
}

/// Creates a styled frame with the demo's standard margins and border.
pub fn create_frame(bg_color: Color32, border_color: Color32) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, border_color))
        .fill(bg_color)
        .inner_margin(4)
        .outer_margin(2)
}

/// One reported position update, stamped when the callback fired.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionLogEntry {
    pub timestamp: NaiveDateTime,
    pub position: AxisPosition,
}

impl PositionLogEntry {
    pub fn from_position(position: AxisPosition) -> Self {
        Self {
            timestamp: chrono::Local::now().naive_local(),
            position,
        }
    }
}

impl fmt::Display for PositionLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.position
        )
    }
}

/// Shared handle on a demo's position log, filled from the widget's
/// change callback.
pub type PositionLog = Rc<RefCell<Vec<PositionLogEntry>>>;

pub fn new_position_log() -> PositionLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Appends an entry, dropping the oldest ones beyond the capacity.
pub fn push_log_entry(log: &PositionLog, position: AxisPosition) {
    let mut entries = log.borrow_mut();
    entries.push(PositionLogEntry::from_position(position));
    if entries.len() > LOG_CAPACITY {
        let overflow = entries.len() - LOG_CAPACITY;
        entries.drain(..overflow);
    }
}

/// Paints a horizontal color gradient as thin vertical strips.
pub fn paint_gradient(painter: &Painter, rect: Rect, from: Color32, to: Color32) {
    const STRIPS: usize = 48;
    let strip_width = rect.width() / STRIPS as f32;
    for i in 0..STRIPS {
        let t = i as f32 / (STRIPS - 1) as f32;
        let color = lerp_color(from, to, t);
        let strip = Rect::from_min_size(
            egui::pos2(rect.left() + i as f32 * strip_width, rect.top()),
            egui::vec2(strip_width + 1.0, rect.height()),
        );
        painter.rect_filled(strip, 0.0, color);
    }
}

/// Centered caption on top of a layer.
pub fn paint_label(painter: &Painter, rect: Rect, text: &str) {
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(24.0),
        Color32::WHITE,
    );
}

pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}
