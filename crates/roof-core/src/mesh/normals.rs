//! Normal calculation for the flat-shaded roof mesh

use glam::Vec3;

/// Calculate the unit normal of a counter-clockwise triangle.
///
/// Zero-area triangles get `+Y` so downstream shading never sees NaN.
pub fn calculate_triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).try_normalize().unwrap_or(Vec3::Y)
}

/// Calculate per-vertex normals for a de-indexed triangle stream.
///
/// Every vertex receives the normal of the triangle it belongs to.
pub fn calculate_flat_normals(positions: &[[f32; 3]]) -> Vec<[f32; 3]> {
    let mut normals = Vec::with_capacity(positions.len());

    for chunk in positions.chunks(3) {
        if chunk.len() != 3 {
            continue;
        }

        let normal = calculate_triangle_normal(
            Vec3::from(chunk[0]),
            Vec3::from(chunk[1]),
            Vec3::from(chunk[2]),
        );
        normals.extend_from_slice(&[normal.to_array(); 3]);
    }

    normals
}
