//! Fixed roof topology: vertex order, UVs and triangulation

use std::ops::Range;

use glam::Vec3;

use crate::constants::{ROOF_TRIANGLE_COUNT, ROOF_VERTEX_COUNT};
use crate::params::RoofParameters;

/// Ground-ring vertex indices (back-left, back-right, front-right, front-left)
pub const GROUND: [u32; 4] = [0, 1, 2, 3];
/// Roof-base-ring vertex indices (back-left, back-right, front-right, front-left)
pub const BASE: [u32; 4] = [4, 5, 6, 7];
/// Ridge vertex indices
pub const RIDGE: [u32; 2] = [8, 9];

/// Triangle index list, wound counter-clockwise when seen from outside
pub const TRIANGLES: [[u32; 3]; ROOF_TRIANGLE_COUNT] = [
    // Floor
    [0, 1, 2],
    [0, 2, 3],
    // Back wall (z = -width/2)
    [0, 5, 1],
    [0, 4, 5],
    // Right wall (x = +length/2)
    [1, 6, 2],
    [1, 5, 6],
    // Front wall (z = +width/2)
    [2, 7, 3],
    [2, 6, 7],
    // Left wall (x = -length/2)
    [3, 4, 0],
    [3, 7, 4],
    // Roof-base ceiling
    [4, 6, 5],
    [4, 7, 6],
    // Hips and slopes from the base corners
    [4, 7, 8],
    [7, 6, 8],
    [6, 5, 9],
    [5, 4, 9],
    // Closure between the two ridge points
    [8, 9, 4],
    [9, 8, 6],
];

/// Triangle ranges per surface group
pub const FLOOR_TRIANGLES: Range<usize> = 0..2;
/// Wall triangles
pub const WALL_TRIANGLES: Range<usize> = 2..10;
/// Ceiling triangles at the roof base plane
pub const CEILING_TRIANGLES: Range<usize> = 10..12;
/// Sloped roof triangles, hips and ridge closure
pub const ROOF_TRIANGLES: Range<usize> = 12..18;

/// Texture coordinates per named vertex
pub const UVS: [[f32; 2]; ROOF_VERTEX_COUNT] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [0.5, 0.5],
    [0.5, 0.5],
];

/// The ten named vertex positions in the local frame
pub fn roof_vertices(params: &RoofParameters) -> [Vec3; ROOF_VERTEX_COUNT] {
    let [g0, g1, g2, g3] = params.ground_corners();
    let [b0, b1, b2, b3] = params.base_corners();
    let [r0, r1] = params.ridge_points();
    [g0, g1, g2, g3, b0, b1, b2, b3, r0, r1]
}
