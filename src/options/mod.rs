//! Centralized engine options with TOML preset support.
//!
//! All tweakable settings (zoom geometry, animation timing) are
//! consolidated here. Options serialize to/from TOML for presets, and a
//! JSON schema export describes the UI-exposed settings for host option
//! panels.

mod animation;
mod zoom;

use std::path::Path;

pub use animation::AnimationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::ZoomOptions;

use crate::error::MappaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Zoom target geometry parameters.
    pub zoom: ZoomOptions,
    /// Animation timing parameters.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MappaError::Io`] when the file cannot be read, or
    /// [`MappaError::OptionsParse`] when the TOML does not parse.
    pub fn load(path: &Path) -> Result<Self, MappaError> {
        let content = std::fs::read_to_string(path).map_err(MappaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MappaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`MappaError::OptionsParse`] when serialization fails, or
    /// [`MappaError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MappaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MappaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MappaError::Io)?;
        }
        std::fs::write(path, content).map_err(MappaError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_takes_defaults() {
        let parsed: Options =
            toml::from_str("[animation]\nduration_ms = 250\n").unwrap();
        assert_eq!(parsed.animation.duration_ms, 250);
        assert_eq!(parsed.zoom, ZoomOptions::default());
    }

    #[test]
    fn schema_generation_succeeds() {
        let schema = Options::json_schema();
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("Zoom"));
    }
}
