//! Centralized viewport options with TOML preset support.
//!
//! All tweakable settings (window, camera pose and projection, movement
//! tuning, keybindings) are consolidated here. Options serialize to/from
//! TOML, and every sub-struct uses `#[serde(default)]` so partial files
//! that override a single section still parse.

mod camera;
mod movement;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use movement::MovementOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::VantageError;
use crate::input::Bindings;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window title and surface dimensions.
    pub window: WindowOptions,
    /// Camera pose and projection parameters.
    pub camera: CameraOptions,
    /// Interactive movement tuning.
    pub movement: MovementOptions,
    /// Keyboard binding table.
    pub keybindings: Bindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content =
            std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }
}
