//! Roof material description handed to the renderer

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EDGE_COLOR, DEFAULT_ROOF_COLOR};

/// Surface and overlay appearance of the roof
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofMaterial {
    /// Body color (RGBA)
    pub color: [f32; 4],
    /// Body opacity, applied on top of `color`
    pub opacity: f32,
    /// Render both faces of every triangle
    pub double_sided: bool,
    /// Wireframe overlay color (RGBA)
    pub edge_color: [f32; 4],
    /// Wireframe line width in pixels
    pub edge_width: f32,
}

impl Default for RoofMaterial {
    fn default() -> Self {
        Self {
            color: DEFAULT_ROOF_COLOR,
            opacity: 0.25,
            double_sided: true,
            edge_color: DEFAULT_EDGE_COLOR,
            edge_width: 8.0,
        }
    }
}

impl RoofMaterial {
    /// Body color with opacity folded into alpha
    pub fn effective_color(&self) -> [f32; 4] {
        let [r, g, b, a] = self.color;
        [r, g, b, a * self.opacity]
    }
}
