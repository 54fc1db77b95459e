//! Configuration for TextPath
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is in the platform config
//! directory.
//!
//! Configuration is organized into logical sections:
//! - Layout settings (line length, spacing, padding, passes, baseline)
//! - Glyph settings (definition directory, space width)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use textpath_core::{LayoutParams, DEFAULT_SPACE_WIDTH};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Directory name under the platform config directory.
const APP_DIR: &str = "textpath";

/// Default config file name.
const CONFIG_FILE: &str = "config.toml";

/// Layout settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Maximum length of a line before wrapping
    pub line_length: f64,
    /// Distance between two subsequent lines
    pub line_spacing: f64,
    /// Empty space between characters
    pub padding: f64,
    /// Stroke passes per character
    pub passes: u32,
    /// Height of the per-character anchor moves
    pub baseline: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            line_length: params.line_length,
            line_spacing: params.line_spacing,
            padding: params.padding,
            passes: params.passes,
            baseline: params.baseline,
        }
    }
}

impl LayoutSettings {
    /// Builds core layout parameters from these settings.
    pub fn to_params(&self) -> LayoutParams {
        LayoutParams::new(self.line_length, self.line_spacing, self.padding)
            .with_passes(self.passes)
            .with_baseline(self.baseline)
    }
}

/// Glyph settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphSettings {
    /// Directory containing one definition file per character
    pub directory: PathBuf,
    /// Advance width of the space character
    pub space_width: f64,
}

impl Default for GlyphSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./ascii_gcode/"),
            space_width: DEFAULT_SPACE_WIDTH,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Layout settings
    pub layout: LayoutSettings,
    /// Glyph settings
    pub glyphs: GlyphSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file path (`<config dir>/textpath/config.toml`).
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let layout = &self.layout;
        let checks = [
            ("layout.line_length", layout.line_length, 0.0),
            ("layout.line_spacing", layout.line_spacing, 0.0),
        ];
        for (key, value, min) in checks {
            if !value.is_finite() || value < min {
                return Err(out_of_range(key, value));
            }
        }

        for (key, value) in [
            ("layout.padding", layout.padding),
            ("layout.baseline", layout.baseline),
        ] {
            if !value.is_finite() {
                return Err(out_of_range(key, value));
            }
        }

        if layout.passes == 0 {
            return Err(out_of_range("layout.passes", layout.passes));
        }

        let space_width = self.glyphs.space_width;
        if !space_width.is_finite() || space_width <= 0.0 {
            return Err(out_of_range("glyphs.space_width", space_width));
        }

        Ok(())
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
