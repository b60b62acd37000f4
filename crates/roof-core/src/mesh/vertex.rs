//! GPU-ready vertex layout for the roof mesh

use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: position, normal and texture coordinate
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RoofVertex {
    /// Position in the roof-local frame
    pub position: [f32; 3],
    /// Flat face normal
    pub normal: [f32; 3],
    /// Texture coordinate
    pub uv: [f32; 2],
}

impl RoofVertex {
    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<RoofVertex>();
}
