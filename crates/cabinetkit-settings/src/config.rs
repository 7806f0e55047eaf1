//! Settings file handling for CabinetKit.
//!
//! Settings are stored as JSON or TOML, chosen by the file extension, in the
//! platform configuration directory. Two sections are kept:
//! - Drawing style (label font, dimension tiers, envelope margins)
//! - Viewport preferences (canvas size, initial view, annotation toggles)

use cabinetkit_core::{DrawingStyle, TechView};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Directory name under the platform config directory.
pub const APP_DIR: &str = "cabinetkit";

/// Settings file name.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Viewport preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Canvas height in pixels
    pub canvas_height: f64,
    /// View shown when a cabinet is opened
    pub initial_view: TechView,
    /// Draw dimension lines
    pub show_dimensions: bool,
    /// Draw the ground line under upright views
    pub show_ground_line: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            initial_view: TechView::Elevation,
            show_dimensions: true,
            show_ground_line: true,
        }
    }
}

/// Complete settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub drawing: DrawingStyle,
    pub viewport: ViewportSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Settings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path`, or the defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.drawing.validate()?;

        for (key, value) in [
            ("viewport.canvas_width", self.viewport.canvas_width),
            ("viewport.canvas_height", self.viewport.canvas_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::InvalidSetting {
                    key: key.to_string(),
                    reason: format!("must be a positive number of pixels, got {}", value),
                });
            }
        }

        Ok(())
    }

    /// Default settings file location
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory(
                "no configuration directory on this platform".to_string(),
            )
        })?;
        Ok(dir.join(APP_DIR).join(SETTINGS_FILE))
    }
}
