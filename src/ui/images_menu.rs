//! Image comparison demo screen.
//!
//! Generates two gradient textures locally instead of fetching anything,
//! and wires the widget's change callback into a scrolling position log.

use eframe::egui::{
    self, vec2, Color32, ColorImage, ScrollArea, TextureHandle, TextureOptions, Ui,
};
use tracing::debug;

use compare2d::config::WidgetDefaults;
use compare2d::{Compare2D, CompareConfig, LayerContent, WidgetSize, WidgetState};

use super::common::{
    self, create_frame, lerp_color, new_position_log, DemoSettings, PositionLog, UiColors,
};

/// Generated texture resolution.
const TEXTURE_SIZE: [usize; 2] = [256, 192];

pub struct ImagesMenuData {
    defaults: WidgetDefaults,
    widget: Option<Compare2D>,
    log: PositionLog,
}

impl ImagesMenuData {
    pub fn new(defaults: WidgetDefaults) -> Self {
        Self {
            defaults,
            widget: None,
            log: new_position_log(),
        }
    }

    /// Renders the screen; returns the widget state for the status bar.
    pub fn render(&mut self, ui: &mut Ui, settings: &DemoSettings) -> Option<WidgetState> {
        self.ensure_widget(ui.ctx());

        let log = self.log.clone();
        let widget = self.widget.as_mut()?;
        widget.set_orientation(settings.orientation);
        widget.set_activation_scope(settings.activation_scope);
        widget.set_disabled(settings.disabled);

        let available_size = ui.available_size();
        let log_width = available_size.x * 0.3 - 8.0;

        let mut state = None;
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Images");
                ui.label("Drag, or focus and use the arrow keys.");
                create_frame(UiColors::MAIN_BG, UiColors::BORDER).show(ui, |ui| {
                    let response = widget.show(ui);
                    state = Some(response.state);
                });
            });

            ui.add_space(4.0);

            ui.vertical(|ui| {
                ui.set_max_width(log_width);
                ui.heading("Position Log");
                render_log_panel(ui, &log, vec2(log_width, available_size.y - 40.0));
            });
        });
        state
    }

    /// Builds the widget once textures can be uploaded.
    fn ensure_widget(&mut self, ctx: &egui::Context) {
        if self.widget.is_some() {
            return;
        }
        debug!("creating image comparison widget");

        let before = gradient_texture(
            ctx,
            "demo-before",
            Color32::from_rgb(222, 135, 80),
            Color32::from_rgb(120, 48, 92),
        );
        let after = gradient_texture(
            ctx,
            "demo-after",
            Color32::from_rgb(38, 70, 140),
            Color32::from_rgb(18, 28, 48),
        );

        let config = CompareConfig {
            orientation: self.defaults.orientation,
            activation_scope: self.defaults.activation_scope,
            size: WidgetSize::points(500.0, 300.0),
            ..CompareConfig::default()
        };

        let log = self.log.clone();
        let widget = Compare2D::new(config)
            .with_before(LayerContent::texture(before))
            .with_after(LayerContent::texture(after))
            .on_position_change(move |position| common::push_log_entry(&log, position));
        self.widget = Some(widget);
    }
}

/// Scrolling list of reported updates, newest at the bottom.
fn render_log_panel(ui: &mut Ui, log: &PositionLog, size: egui::Vec2) {
    create_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
        ui.set_min_size(size);

        ScrollArea::vertical()
            .id_salt("position_log")
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    let entries = log.borrow();
                    for entry in entries.iter() {
                        ui.label(entry.to_string());
                    }
                    if entries.is_empty() {
                        ui.label("No position updates yet");
                    }
                });
            });
    });
}

/// Uploads a diagonal gradient texture.
fn gradient_texture(
    ctx: &egui::Context,
    name: &str,
    from: Color32,
    to: Color32,
) -> TextureHandle {
    let [width, height] = TEXTURE_SIZE;
    let mut rgba = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let t = (x as f32 / (width - 1) as f32 + y as f32 / (height - 1) as f32) / 2.0;
            let color = lerp_color(from, to, t);
            rgba.extend_from_slice(&[color.r(), color.g(), color.b(), 255]);
        }
    }
    let image = ColorImage::from_rgba_unmultiplied(TEXTURE_SIZE, &rgba);
    ctx.load_texture(name, image, TextureOptions::LINEAR)
}
