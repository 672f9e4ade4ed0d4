//! Demo application settings.
//!
//! Loads the demo's TOML configuration from the platform config directory,
//! falling back to compiled defaults when the file is missing or broken.
//! Only demo-level presentation settings live here; widget position state
//! is never persisted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::position::Orientation;
use crate::widget::DragActivationScope;

/// Errors of the configuration layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform provides no config directory.
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    /// Reading or writing the config file failed.
    #[error("config i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serializing the default configuration failed.
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Window setup for the demo shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Compare2D Demo".to_string(),
            fullscreen: false,
        }
    }
}

/// Startup defaults for the widgets shown by the demo.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WidgetDefaults {
    pub orientation: Orientation,
    pub activation_scope: DragActivationScope,
}

/// Root of the demo configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub widget: WidgetDefaults,
}

impl DemoConfig {
    /// Resolves the config file location under the platform config dir.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("compare2d").join("config.toml"))
    }

    /// Writes a default configuration if none exists yet.
    pub fn ensure_default() -> Result<(), ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(&DemoConfig::default())?;
        fs::write(&path, rendered)?;
        info!("default config written to {}", path.display());
        Ok(())
    }

    /// Loads the configuration, degrading to defaults with a warning on
    /// any failure.
    pub fn load_or_default() -> DemoConfig {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("falling back to default config: {}", e);
                DemoConfig::default()
            }
        }
    }

    fn load() -> Result<DemoConfig, ConfigError> {
        let path = Self::path()?;
        let raw = fs::read_to_string(&path)?;
        let config = toml::from_str(&raw)?;
        debug!("config loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let rendered = toml::to_string_pretty(&DemoConfig::default()).unwrap();
        let parsed: DemoConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.window.title, "Compare2D Demo");
        assert_eq!(parsed.widget.orientation, Orientation::TwoD);
    }

    #[test]
    fn wire_names_are_stable() {
        let parsed: DemoConfig = toml::from_str(
            r#"
            [window]
            title = "t"
            fullscreen = true

            [widget]
            orientation = "horizontal"
            activation_scope = "handle-only"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.widget.orientation, Orientation::Horizontal);
        assert_eq!(
            parsed.widget.activation_scope,
            DragActivationScope::HandleOnly
        );
    }
}
