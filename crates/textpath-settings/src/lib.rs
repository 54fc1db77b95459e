//! TextPath Settings Crate
//!
//! Handles layout and glyph configuration stored as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, GlyphSettings, LayoutSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
