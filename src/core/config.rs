//! Editor configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::render::BoxStyles;
use crate::selection::controls::SelectionBindings;

/// Configuration for a selection editor session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Whether the editor starts open for editing
    pub start_editable: bool,
    /// Distance along the view ray at which the cursor sits when nothing is hit
    pub pick_distance: f32,
    /// Box hits further than this are ignored by the picker
    pub max_pick_distance: f32,
    /// Colours used when drawing boxes
    pub styles: BoxStyles,
    /// Keyboard and mouse bindings
    pub bindings: SelectionBindings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            start_editable: true,
            pick_distance: 10.0,
            max_pick_distance: 1000.0,
            styles: BoxStyles::default(),
            bindings: SelectionBindings::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Write the config to disk as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
