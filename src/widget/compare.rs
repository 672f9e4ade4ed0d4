//! The retained comparison widget.
//!
//! `Compare2D` wires the position controller, the drag gesture machine,
//! the reveal geometry and the layer pair into a single egui component.
//! The host owns the widget across frames and calls [`Compare2D::show`]
//! once per frame, in the same retained-component shape the demo menus
//! use.
//!
//! Input handling per frame, in order: a primary press inside the active
//! drag region begins the gesture and moves the handle; pointer moves are
//! consumed only while the gesture is live; a primary release ends it.
//! With keyboard focus, arrow/Home/End presses are consumed before egui's
//! focus navigation sees them. Disabled suppresses all of it and force
//! releases a live gesture.

use egui::{CursorIcon, Key, Response, Sense, Ui, WidgetInfo};
use tracing::debug;

use crate::position::{AxisPosition, Orientation, PositionController};

use super::config::{CompareConfig, DragActivationScope, WidgetSize};
use super::geometry::RevealGeometry;
use super::gesture::Gesture;
use super::layers::{ContentKind, LayerContent, LayerPair};

/// Interaction state exposed for styling and test hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Dragging,
    Disabled,
}

/// Queryable widget state for external styling and test hooks: rounded
/// coordinates, interaction state, orientation and per-layer content kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetState {
    pub x: u8,
    pub y: u8,
    pub interaction: InteractionState,
    pub orientation: Orientation,
    pub before_content: ContentKind,
    pub after_content: ContentKind,
}

/// What one frame of the widget reports back to the caller.
pub struct CompareResponse {
    pub response: Response,
    /// The externally visible position after this frame.
    pub position: AxisPosition,
    /// Whether an update was accepted this frame.
    pub changed: bool,
    pub state: WidgetState,
}

/// Before/after comparison widget with a draggable handle/crosshair.
///
/// Construction decides the control mode for the widget's lifetime:
/// [`Compare2D::new`] builds an uncontrolled widget owning its position,
/// [`Compare2D::controlled`] builds one whose rendered position only moves
/// through [`Compare2D::sync_controlled_position`]. In both modes every
/// accepted update is reported through the change callback and the
/// per-frame [`CompareResponse`].
pub struct Compare2D {
    config: CompareConfig,
    controller: PositionController,
    gesture: Gesture,
    layers: LayerPair,
    on_change: Option<Box<dyn FnMut(AxisPosition)>>,
}

impl Compare2D {
    /// Uncontrolled widget starting at the constrained midpoint.
    pub fn new(config: CompareConfig) -> Self {
        let controller = PositionController::new(config.orientation, None, None);
        Self {
            config,
            controller,
            gesture: Gesture::new(),
            layers: LayerPair::default(),
            on_change: None,
        }
    }

    /// Controlled widget; the caller owns the position.
    pub fn controlled(config: CompareConfig, position: AxisPosition) -> Self {
        let controller = PositionController::new(config.orientation, Some(position), None);
        Self {
            config,
            controller,
            gesture: Gesture::new(),
            layers: LayerPair::default(),
            on_change: None,
        }
    }

    /// Seeds the uncontrolled default position; ignored on a controlled
    /// widget.
    pub fn with_initial_position(mut self, position: AxisPosition) -> Self {
        if !self.controller.is_controlled() {
            self.controller =
                PositionController::new(self.config.orientation, None, Some(position));
        }
        self
    }

    pub fn with_before(mut self, content: LayerContent) -> Self {
        self.layers.before = Some(content);
        self
    }

    pub fn with_after(mut self, content: LayerContent) -> Self {
        self.layers.after = Some(content);
        self
    }

    /// Attaches the change callback invoked with the orientation-projected
    /// position on every accepted update.
    pub fn on_position_change(mut self, callback: impl FnMut(AxisPosition) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn position(&self) -> AxisPosition {
        self.controller.axis_position()
    }

    pub fn is_controlled(&self) -> bool {
        self.controller.is_controlled()
    }

    pub fn orientation(&self) -> Orientation {
        self.controller.orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
        self.controller.set_orientation(orientation);
    }

    pub fn set_activation_scope(&mut self, scope: DragActivationScope) {
        self.config.activation_scope = scope;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    pub fn set_size(&mut self, size: WidgetSize) {
        self.config.size = size;
    }

    /// Feeds the caller-owned position in for the next frame (controlled
    /// mode only).
    pub fn sync_controlled_position(&mut self, position: AxisPosition) {
        self.controller.sync_controlled(position);
    }

    /// Renders the widget and processes this frame's input.
    pub fn show(&mut self, ui: &mut Ui) -> CompareResponse {
        let desired = self.config.size.resolve(ui.available_size());
        let (rect, mut response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

        let mut reported = None;
        if self.config.disabled {
            if self.gesture.is_tracking() {
                debug!("widget disabled mid-drag, releasing gesture");
                self.gesture.release();
            }
            if response.has_focus() {
                ui.memory_mut(|memory| memory.surrender_focus(response.id));
            }
        } else {
            reported = self.handle_pointer(ui, &response, rect);
            if let Some(update) = self.handle_keyboard(ui, &response) {
                reported = Some(update);
            }
        }

        if let Some(position) = reported {
            if let Some(callback) = &mut self.on_change {
                callback(position);
            }
            response.mark_changed();
        }

        let geometry = RevealGeometry::compute(
            rect,
            self.controller.position(),
            self.config.orientation,
            &self.config.style,
        );
        if ui.is_rect_visible(rect) {
            self.paint(ui, &geometry);
        }
        response = self.apply_cursor(ui, response, &geometry);

        let state = self.state_snapshot();
        let label = self.accessibility_label();
        let value = self.accessibility_value();
        let enabled = !self.config.disabled;
        response.widget_info(|| WidgetInfo::slider(enabled, value, label.clone()));

        CompareResponse {
            response,
            position: self.controller.axis_position(),
            changed: reported.is_some(),
            state,
        }
    }

    fn handle_pointer(
        &mut self,
        ui: &Ui,
        response: &Response,
        rect: egui::Rect,
    ) -> Option<AxisPosition> {
        let pointer = ui.input(|i| i.pointer.latest_pos());
        let pressed = ui.input(|i| i.pointer.primary_pressed());
        let released = ui.input(|i| i.pointer.primary_released());

        let mut reported = None;

        if pressed && response.is_pointer_button_down_on() {
            if let Some(at) = pointer {
                // Hit-test against the handle position before this update.
                let geometry = RevealGeometry::compute(
                    rect,
                    self.controller.position(),
                    self.config.orientation,
                    &self.config.style,
                );
                if geometry.activates(at, self.config.activation_scope, &self.config.style) {
                    self.gesture.press(at);
                    response.request_focus();
                    reported = self.apply_pointer(at, rect);
                }
            }
        } else if let Some(at) = pointer {
            if self.gesture.track(at) {
                reported = self.apply_pointer(at, rect);
            }
        }

        if released {
            self.gesture.release();
        }

        reported
    }

    fn apply_pointer(&mut self, at: egui::Pos2, rect: egui::Rect) -> Option<AxisPosition> {
        self.controller
            .position_from_pointer(at, rect)
            .map(|position| self.controller.reconcile(position))
    }

    fn handle_keyboard(&mut self, ui: &Ui, response: &Response) -> Option<AxisPosition> {
        if !response.has_focus() {
            return None;
        }

        const KEYS: [Key; 6] = [
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::Home,
            Key::End,
        ];

        let modifiers = ui.input(|i| i.modifiers);
        let mut reported = None;
        for key in KEYS {
            if ui.input_mut(|i| i.consume_key(modifiers, key)) {
                if let Some(position) = self.controller.position_from_key(key, modifiers) {
                    reported = Some(self.controller.reconcile(position));
                }
            }
        }
        reported
    }

    fn paint(&self, ui: &Ui, geometry: &RevealGeometry) {
        let style = &self.config.style;
        let painter = ui.painter().with_clip_rect(geometry.outer);

        painter.rect_filled(geometry.outer, 0.0, style.background);
        self.layers.paint_after(&painter, geometry.outer);

        let reveal = geometry.clip.intersect(geometry.outer);
        if reveal.is_positive() {
            let before_painter = ui.painter().with_clip_rect(reveal);
            self.layers.paint_before(&before_painter, geometry.outer);
        }

        if let Some(line) = geometry.vertical_line {
            painter.rect_filled(line, 0.0, style.line_color);
        }
        if let Some(line) = geometry.horizontal_line {
            painter.rect_filled(line, 0.0, style.line_color);
        }

        painter.circle_filled(geometry.handle_center, style.handle_radius, style.handle_fill);
        painter.circle_stroke(
            geometry.handle_center,
            style.handle_radius,
            style.handle_stroke,
        );

        if self.config.disabled {
            painter.rect_filled(geometry.outer, 0.0, style.disabled_overlay);
        }
    }

    fn apply_cursor(&self, ui: &Ui, response: Response, geometry: &RevealGeometry) -> Response {
        if self.config.disabled {
            return response;
        }
        if self.gesture.is_tracking() {
            return response.on_hover_cursor(CursorIcon::Grabbing);
        }
        if let Some(pointer) = ui.ctx().pointer_latest_pos() {
            if geometry.activates(pointer, self.config.activation_scope, &self.config.style) {
                return response.on_hover_cursor(CursorIcon::Grab);
            }
        }
        response
    }

    /// Snapshot of the externally queryable state.
    pub fn state_snapshot(&self) -> WidgetState {
        let (x, y) = self.controller.position().rounded();
        let interaction = if self.config.disabled {
            InteractionState::Disabled
        } else if self.gesture.is_tracking() {
            InteractionState::Dragging
        } else {
            InteractionState::Idle
        };
        WidgetState {
            x,
            y,
            interaction,
            orientation: self.config.orientation,
            before_content: self.layers.before_kind(),
            after_content: self.layers.after_kind(),
        }
    }

    fn accessibility_label(&self) -> String {
        self.config
            .accessibility_label
            .clone()
            .unwrap_or_else(|| match self.config.orientation {
                Orientation::Horizontal => "Horizontal comparison slider".to_owned(),
                Orientation::Vertical => "Vertical comparison slider".to_owned(),
                Orientation::TwoD => "2D comparison slider".to_owned(),
            })
    }

    /// Reported slider value: the free axis, or the rounded mean of both
    /// axes in 2d mode.
    fn accessibility_value(&self) -> f64 {
        let position = self.controller.position();
        match self.config.orientation {
            Orientation::Horizontal => position.x.round(),
            Orientation::Vertical => position.y.round(),
            Orientation::TwoD => ((position.x + position.y) / 2.0).round(),
        }
    }
}
