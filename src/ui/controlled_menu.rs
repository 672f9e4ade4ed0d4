//! Controlled mode demo screen.
//!
//! The position is owned by two external sliders; the widget only requests
//! changes through its callback. With "follow requests" off, dragging the
//! widget visibly does nothing to the rendered handle - the rendered value
//! moves exclusively through the sliders.

use eframe::egui::{Slider, Ui};
use std::cell::Cell;
use std::rc::Rc;

use compare2d::config::WidgetDefaults;
use compare2d::{
    AxisPosition, Compare2D, CompareConfig, LayerContent, Orientation, WidgetSize, WidgetState,
};

use super::common::{create_frame, paint_gradient, paint_label, DemoSettings, UiColors};

/// Last position the widget asked for, shared with the change callback.
type RequestSlot = Rc<Cell<Option<AxisPosition>>>;

pub struct ControlledMenuData {
    widget: Compare2D,
    external_x: f64,
    external_y: f64,
    requested: RequestSlot,
    last_requested: Option<AxisPosition>,
    follow_requests: bool,
}

impl ControlledMenuData {
    pub fn new(defaults: WidgetDefaults) -> Self {
        let external_x = 50.0;
        let external_y = 50.0;

        let config = CompareConfig {
            orientation: defaults.orientation,
            activation_scope: defaults.activation_scope,
            size: WidgetSize::points(500.0, 300.0),
            ..CompareConfig::default()
        };

        let requested: RequestSlot = Rc::new(Cell::new(None));
        let slot = requested.clone();
        let widget = Compare2D::controlled(
            config,
            AxisPosition::TwoD {
                x: external_x,
                y: external_y,
            },
        )
        .with_before(LayerContent::painter(|painter, rect| {
            paint_gradient(
                painter,
                rect,
                UiColors::ACTIVE,
                UiColors::EXTREME_BG,
            );
            paint_label(painter, rect, "Caller-owned");
        }))
        .with_after(LayerContent::painter(|painter, rect| {
            paint_gradient(
                painter,
                rect,
                UiColors::INACTIVE,
                UiColors::EXTREME_BG,
            );
            paint_label(painter, rect, "After");
        }))
        .on_position_change(move |position| slot.set(Some(position)));

        Self {
            widget,
            external_x,
            external_y,
            requested,
            last_requested: None,
            follow_requests: true,
        }
    }

    pub fn render(&mut self, ui: &mut Ui, settings: &DemoSettings) -> Option<WidgetState> {
        self.widget.set_orientation(settings.orientation);
        self.widget.set_activation_scope(settings.activation_scope);
        self.widget.set_disabled(settings.disabled);

        ui.heading("Controlled Mode");
        ui.label("The sliders own the position; the widget only requests changes.");

        ui.horizontal(|ui| {
            if settings.orientation != Orientation::Vertical {
                ui.label("x:");
                ui.add(Slider::new(&mut self.external_x, 0.0..=100.0));
            }
            if settings.orientation != Orientation::Horizontal {
                ui.label("y:");
                ui.add(Slider::new(&mut self.external_y, 0.0..=100.0));
            }
            ui.checkbox(&mut self.follow_requests, "Follow requests");
        });

        // The caller decides whether a requested change becomes the value.
        if let Some(request) = self.requested.take() {
            self.last_requested = Some(request);
            if self.follow_requests {
                let full = request.into_full();
                self.external_x = full.x;
                self.external_y = full.y;
            }
        }

        // Feed the caller-owned value in for this frame.
        self.widget
            .sync_controlled_position(AxisPosition::TwoD {
                x: self.external_x,
                y: self.external_y,
            });

        let mut state = None;
        create_frame(UiColors::MAIN_BG, UiColors::BORDER).show(ui, |ui| {
            let response = self.widget.show(ui);
            state = Some(response.state);
        });

        ui.add_space(4.0);
        match self.last_requested {
            Some(position) => ui.label(format!("Widget requested: {}", position)),
            None => ui.label("No requests yet"),
        };

        state
    }
}
