//! Roof mesh generation
//!
//! Builds the flat-shaded triangle soup for a roof from its parameters:
//! ten named vertices are triangulated into 18 faces, then expanded so that
//! every triangle owns its three vertices and normals are never averaged
//! across differently oriented faces.

mod normals;
mod topology;
mod vertex;

use glam::Vec3;

use crate::bounds::BoundingSphere;
use crate::constants::FLAT_VERTEX_COUNT;
use crate::params::RoofParameters;

pub use normals::{calculate_flat_normals, calculate_triangle_normal};
pub use topology::{
    BASE, CEILING_TRIANGLES, FLOOR_TRIANGLES, GROUND, RIDGE, ROOF_TRIANGLES, TRIANGLES, UVS,
    WALL_TRIANGLES, roof_vertices,
};
pub use vertex::RoofVertex;

/// De-indexed roof mesh in the roof-local frame
#[derive(Debug, Clone, PartialEq)]
pub struct RoofMesh {
    /// Three entries per triangle
    pub positions: Vec<[f32; 3]>,
    /// Face normal repeated for each triangle vertex
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates
    pub uvs: Vec<[f32; 2]>,
    /// Sphere enclosing every position
    pub bounding_sphere: BoundingSphere,
}

impl RoofMesh {
    /// Build the mesh for the given parameters.
    ///
    /// Inputs are expected to be clamped already; see [`RoofParameters::clamp`].
    pub fn build(params: &RoofParameters) -> Self {
        build_roof_mesh(params)
    }

    /// Number of vertex entries
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Iterate over triangles as corner triples
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|t| [Vec3::from(t[0]), Vec3::from(t[1]), Vec3::from(t[2])])
    }

    /// Interleave positions, normals and UVs for upload
    pub fn interleaved(&self) -> Vec<RoofVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| RoofVertex {
                position: *position,
                normal: *normal,
                uv: *uv,
            })
            .collect()
    }

    /// Bounding sphere placed in world space by the roof's transform
    pub fn world_bounding_sphere(&self, params: &RoofParameters) -> BoundingSphere {
        self.bounding_sphere
            .transform_rigid(&params.world_transform())
    }
}

/// Build the flat-shaded roof mesh
pub fn build_roof_mesh(params: &RoofParameters) -> RoofMesh {
    let vertices = roof_vertices(params);

    let mut positions = Vec::with_capacity(FLAT_VERTEX_COUNT);
    let mut uvs = Vec::with_capacity(FLAT_VERTEX_COUNT);

    for triangle in &TRIANGLES {
        for &index in triangle {
            positions.push(vertices[index as usize].to_array());
            uvs.push(UVS[index as usize]);
        }
    }

    let normals = calculate_flat_normals(&positions);
    let bounding_sphere = BoundingSphere::from_points(&vertices);

    tracing::trace!(
        length = params.length,
        width = params.width,
        radius = bounding_sphere.radius,
        "rebuilt roof mesh"
    );

    RoofMesh {
        positions,
        normals,
        uvs,
        bounding_sphere,
    }
}
