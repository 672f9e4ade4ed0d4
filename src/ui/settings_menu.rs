//! Settings screen for the demo.
//!
//! Owns the widget options shared by the demo screens and shows the usage
//! notes.

use eframe::egui::{self, Ui};

use compare2d::config::WidgetDefaults;
use compare2d::{DragActivationScope, Orientation};

use super::common::{create_frame, DemoSettings, UiColors};

pub struct SettingsMenuData {
    settings: DemoSettings,
}

impl SettingsMenuData {
    pub fn new(defaults: WidgetDefaults) -> Self {
        Self {
            settings: DemoSettings {
                orientation: defaults.orientation,
                activation_scope: defaults.activation_scope,
                disabled: false,
            },
        }
    }

    /// The options the demo screens apply to their widgets.
    pub fn settings(&self) -> DemoSettings {
        self.settings
    }

    pub fn render(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.heading("Settings");

            let section_spacing = 5.0;

            self.render_widget_section(ui);
            ui.add_space(section_spacing);
            self.render_instructions_section(ui);
        });
    }

    fn render_widget_section(&mut self, ui: &mut Ui) {
        create_frame(UiColors::MAIN_BG, UiColors::BORDER)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.heading("Widget");

                    ui.horizontal(|ui| {
                        ui.label("Orientation:");
                        egui::ComboBox::from_id_salt("orientation")
                            .selected_text(self.settings.orientation.to_string())
                            .show_ui(ui, |ui| {
                                for orientation in [
                                    Orientation::Horizontal,
                                    Orientation::Vertical,
                                    Orientation::TwoD,
                                ] {
                                    ui.selectable_value(
                                        &mut self.settings.orientation,
                                        orientation,
                                        orientation.to_string(),
                                    );
                                }
                            });
                    });

                    ui.horizontal(|ui| {
                        ui.label("Drag activation:");
                        egui::ComboBox::from_id_salt("activation_scope")
                            .selected_text(self.settings.activation_scope.to_string())
                            .show_ui(ui, |ui| {
                                for scope in [
                                    DragActivationScope::EntireSurface,
                                    DragActivationScope::HandleOnly,
                                    DragActivationScope::HandleAndAxisLines,
                                ] {
                                    ui.selectable_value(
                                        &mut self.settings.activation_scope,
                                        scope,
                                        scope.to_string(),
                                    );
                                }
                            });
                    });

                    ui.checkbox(&mut self.settings.disabled, "Disabled");
                });
            });
    }

    fn render_instructions_section(&mut self, ui: &mut Ui) {
        create_frame(UiColors::MAIN_BG, UiColors::BORDER)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.heading("Instructions");
                    ui.label("Mouse/Touch: press and drag to move the crosshair.");
                    ui.label(
                        "Keyboard: arrow keys move the handle \
                         (Shift for large steps, Alt for fine steps).",
                    );
                    ui.label("Home/End: jump to the corners (0, 0) and (100, 100).");
                    ui.label("Disabled widgets ignore every interaction.");
                });
            });
    }
}
