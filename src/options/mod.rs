//! Centralized visualization options with TOML preset support.
//!
//! All tweakable settings (helix geometry, animation tuning, lighting
//! choreography, colors) are consolidated here. Options serialize to/from
//! TOML for scene presets stored in `presets/`.

mod animation;
mod colors;
mod geometry;
mod lighting;

use std::path::Path;

pub use animation::AnimationOptions;
pub use colors::ColorOptions;
pub use geometry::{GeometryOptions, Handedness};
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::HelicaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Helix shape and meshing parameters.
    pub geometry: GeometryOptions,
    /// Growth/idle animation tuning.
    pub animation: AnimationOptions,
    /// Scroll-choreographed lighting.
    pub lighting: LightingOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
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
    /// Returns [`HelicaError::Io`] when the file cannot be read and
    /// [`HelicaError::OptionsParse`] when its contents are not valid TOML.
    pub fn load(path: &Path) -> Result<Self, HelicaError> {
        let content = std::fs::read_to_string(path).map_err(HelicaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| HelicaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    /// Returns [`HelicaError::OptionsParse`] when serialization fails and
    /// [`HelicaError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), HelicaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HelicaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HelicaError::Io)?;
        }
        std::fs::write(path, content).map_err(HelicaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
