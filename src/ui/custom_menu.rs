//! Custom content demo screen.
//!
//! Both layers are painted by the caller (gradient fills with a centered
//! caption) instead of textures, and the uncontrolled widget starts away
//! from the midpoint at (25, 75).

use eframe::egui::{Color32, Ui};

use compare2d::config::WidgetDefaults;
use compare2d::{
    AxisPosition, Compare2D, CompareConfig, LayerContent, WidgetSize, WidgetState,
};

use super::common::{
    create_frame, paint_gradient, paint_label, DemoSettings, UiColors,
};

pub struct CustomMenuData {
    widget: Compare2D,
    last_reported: Option<AxisPosition>,
}

impl CustomMenuData {
    pub fn new(defaults: WidgetDefaults) -> Self {
        let config = CompareConfig {
            orientation: defaults.orientation,
            activation_scope: defaults.activation_scope,
            size: WidgetSize::points(500.0, 300.0),
            ..CompareConfig::default()
        };

        let widget = Compare2D::new(config)
            .with_initial_position(AxisPosition::TwoD { x: 25.0, y: 75.0 })
            .with_before(LayerContent::painter(|painter, rect| {
                paint_gradient(
                    painter,
                    rect,
                    Color32::from_rgb(0xff, 0x6b, 0x6b),
                    Color32::from_rgb(0x4e, 0xcd, 0xc4),
                );
                paint_label(painter, rect, "Before State");
            }))
            .with_after(LayerContent::painter(|painter, rect| {
                paint_gradient(
                    painter,
                    rect,
                    Color32::from_rgb(0x66, 0x7e, 0xea),
                    Color32::from_rgb(0x76, 0x4b, 0xa2),
                );
                paint_label(painter, rect, "After State");
            }));

        Self {
            widget,
            last_reported: None,
        }
    }

    pub fn render(&mut self, ui: &mut Ui, settings: &DemoSettings) -> Option<WidgetState> {
        self.widget.set_orientation(settings.orientation);
        self.widget.set_activation_scope(settings.activation_scope);
        self.widget.set_disabled(settings.disabled);

        ui.heading("Custom Content");
        ui.label("Both layers are painted by the caller; starts at (25, 75).");

        let mut state = None;
        create_frame(UiColors::MAIN_BG, UiColors::BORDER).show(ui, |ui| {
            let response = self.widget.show(ui);
            if response.changed {
                self.last_reported = Some(response.position);
            }
            state = Some(response.state);
        });

        ui.add_space(4.0);
        match self.last_reported {
            Some(position) => ui.label(format!("Last reported update: {}", position)),
            None => ui.label("No updates reported yet"),
        };

        state
    }
}
