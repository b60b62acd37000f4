//! Editor configuration
//!
//! Handle sizes, display toggles, label layout and material, loadable from
//! RON so an owning application can restyle the editor without recompiling.

use std::path::Path;

use roof_core::{LabelLayout, RoofMaterial};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Sizes of the grips and the pick tolerance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HandleConfig {
    /// Radius of the edge-resize cylinders
    pub edge_grip_radius: f32,
    /// Length of the edge-resize cylinders
    pub edge_grip_length: f32,
    /// Radius of the height cylinders
    pub height_grip_radius: f32,
    /// Length of the height cylinders
    pub height_grip_length: f32,
    /// Radius of the rotation sphere
    pub rotate_grip_radius: f32,
    /// Distance of the rotation sphere behind the back edge
    pub rotate_offset: f32,
    /// Extra radius added to every grip when picking
    pub pick_tolerance: f32,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            edge_grip_radius: 0.05,
            edge_grip_length: 0.5,
            height_grip_radius: 0.05,
            height_grip_length: 1.0,
            rotate_grip_radius: 0.15,
            rotate_offset: 1.0,
            pick_tolerance: 0.05,
        }
    }
}

/// What the editor draws
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw grips and allow picking
    pub show_grips: bool,
    /// Draw dimension labels
    pub show_dimensions: bool,
    /// Draw the edge wireframe
    pub show_edges: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_grips: true,
            show_dimensions: true,
            show_edges: true,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub handles: HandleConfig,
    pub display: DisplayConfig,
    pub labels: LabelLayout,
    pub material: RoofMaterial,
}

impl EditorConfig {
    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize configuration to RON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Load configuration from RON bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}
