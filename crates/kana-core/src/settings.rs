//! Transliteration settings loaded from TOML.
//!
//! - `parse_settings_toml(toml)` validates and parses a settings file
//! - `default_toml()` returns the embedded defaults (`default_settings.toml`)
//! - `Settings::options()` turns settings into engine [`Options`]
//!
//! The engine itself never reads settings; callers pass `Options` explicitly.

use serde::Deserialize;

use crate::romaji::{Options, TrailingSokuon};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub decoder: DecoderSettings,
    #[serde(default)]
    pub engine: EngineSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoderSettings {
    #[serde(default)]
    pub strict_encoding: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSettings {
    #[serde(default)]
    pub trailing_sokuon: TrailingSokuon,
}

impl Settings {
    pub fn options(&self) -> Options {
        Options {
            strict_encoding: self.decoder.strict_encoding,
            trailing_sokuon: self.engine.trailing_sokuon,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}
