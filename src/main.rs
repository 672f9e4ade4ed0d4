mod ui;

use crate::ui::CompareDemoUI;
use color_eyre::{eyre::eyre, Result};
use compare2d::config::DemoConfig;
use eframe::egui;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    setup()?;

    if let Err(e) = DemoConfig::ensure_default() {
        warn!("could not write default config: {}", e);
    }
    let config = DemoConfig::load_or_default();

    info!("Starting Compare2D demo");
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default()
        .with_title(config.window.title.clone())
        .with_inner_size(egui::vec2(1024.0, 720.0))
        .with_fullscreen(config.window.fullscreen);

    eframe::run_native(
        "Compare2D",
        native_options,
        Box::new(|cc| Ok(Box::new(CompareDemoUI::new(cc, config)))),
    )
    .map_err(|e| eyre!("Failed to run UI: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
