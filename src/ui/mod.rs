//! # Demo User Interface
//!
//! The eframe shell around the comparison widget: one screen per usage
//! mode (image layers, caller-painted layers, controlled position) plus a
//! settings screen whose options are applied to every widget each frame.
//!
//! ## Layout
//!
//! The interface keeps a consistent three-panel layout:
//! - **Top Panel**: navigation buttons for the demo screens
//! - **Central Panel**: the active screen's content
//! - **Bottom Panel**: orientation, rounded position and interaction state
//!   of the widget on screen
//!
//! The immediate mode pattern fits the widget's design: each screen owns
//! its retained `Compare2D` instance and re-renders it every frame from
//! current state, so the settings screen can flip orientation, activation
//! scope or the disabled flag live without any plumbing beyond a shared
//! options struct.

pub mod common;
pub mod controlled_menu;
pub mod custom_menu;
pub mod images_menu;
pub mod settings_menu;

use eframe::egui::{self, Button, Vec2};
use std::time::Duration;

use compare2d::config::DemoConfig;
use compare2d::WidgetState;

use self::common::MenuState;
use self::controlled_menu::ControlledMenuData;
use self::custom_menu::CustomMenuData;
use self::images_menu::ImagesMenuData;
use self::settings_menu::SettingsMenuData;

/// Root application state for the demo shell.
pub struct CompareDemoUI {
    menu_state: MenuState,
    images_menu: ImagesMenuData,
    custom_menu: CustomMenuData,
    controlled_menu: ControlledMenuData,
    settings_menu: SettingsMenuData,
    /// State of the widget rendered this frame, for the status bar.
    active_state: Option<WidgetState>,
}

impl CompareDemoUI {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DemoConfig) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        CompareDemoUI {
            menu_state: MenuState::Images,
            images_menu: ImagesMenuData::new(config.widget.clone()),
            custom_menu: CustomMenuData::new(config.widget.clone()),
            controlled_menu: ControlledMenuData::new(config.widget.clone()),
            settings_menu: SettingsMenuData::new(config.widget),
            active_state: None,
        }
    }
}

impl eframe::App for CompareDemoUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.ctx().request_repaint_after(Duration::from_millis(33));
            let width = ui.available_width() - 60.0;

            // Top navigation panel with one button per demo screen
            egui::TopBottomPanel::top("top_panel")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        let nav_button = |label: &str| {
                            Button::new(label).min_size(Vec2 {
                                x: width / 4.0,
                                y: 20.0,
                            })
                        };

                        if ui.add(nav_button("Images")).clicked() {
                            self.menu_state = MenuState::Images;
                        };
                        if ui.add(nav_button("Custom")).clicked() {
                            self.menu_state = MenuState::Custom;
                        };
                        if ui.add(nav_button("Controlled")).clicked() {
                            self.menu_state = MenuState::Controlled;
                        };
                        if ui.add(nav_button("Settings")).clicked() {
                            self.menu_state = MenuState::Settings;
                        };
                    });
                });

            // Central content panel with the active screen
            let settings = self.settings_menu.settings();
            egui::CentralPanel::default().show_inside(ui, |ui| match self.menu_state {
                MenuState::Images => {
                    self.active_state = self.images_menu.render(ui, &settings);
                }
                MenuState::Custom => {
                    self.active_state = self.custom_menu.render(ui, &settings);
                }
                MenuState::Controlled => {
                    self.active_state = self.controlled_menu.render(ui, &settings);
                }
                MenuState::Settings => {
                    self.settings_menu.render(ui);
                }
            });

            // Bottom status panel mirroring the widget state attributes
            egui::TopBottomPanel::bottom("bottom_panel")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.horizontal_centered(|ui| match &self.active_state {
                        Some(state) => {
                            ui.label(format!("orientation: {}", state.orientation));
                            ui.label(format!("x: {} y: {}", state.x, state.y));
                            ui.label(format!("state: {:?}", state.interaction));
                            ui.label(format!(
                                "content: {} / {}",
                                state.before_content, state.after_content
                            ));
                        }
                        None => {
                            ui.label("no widget on screen");
                        }
                    });
                });
        });
    }
}
