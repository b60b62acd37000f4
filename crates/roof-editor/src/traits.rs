//! Collaborator contracts
//!
//! The editor never talks to a window, a GPU or a camera controller
//! directly. Owners plug those in through the traits below.

use glam::{Mat4, Vec2, Vec3};
use roof_core::{RoofMaterial, RoofMesh, Segment};

use crate::ray::{Plane, Ray, intersect_ray_with_plane};

/// Turns pointer positions into world-space rays.
///
/// Pointer positions are normalized device coordinates: `x` and `y` in
/// `[-1, 1]`, `y` pointing up.
pub trait RayCaster {
    /// World ray under the pointer, or `None` if the pointer is off-screen
    fn ray(&self, pointer: Vec2) -> Option<Ray>;

    /// Intersection of the pointer ray with a picking plane
    fn cast_ray(&self, pointer: Vec2, plane: &Plane) -> Option<Vec3> {
        self.ray(pointer)
            .and_then(|ray| intersect_ray_with_plane(&ray, plane))
    }

    /// Direction the view is looking, when known
    fn view_direction(&self) -> Option<Vec3> {
        None
    }
}

/// The orbit-camera controller that must stand still while a grip is dragged
pub trait CameraControl: Send {
    fn set_suspended(&mut self, suspended: bool);
}

/// Draws the roof each frame
pub trait MeshRenderer {
    /// Draw the roof body with its world transform
    fn render_mesh(&mut self, mesh: &RoofMesh, transform: Mat4, material: &RoofMaterial);

    /// Draw the wireframe overlay
    fn render_lines(
        &mut self,
        _segments: &[Segment],
        _transform: Mat4,
        _color: [f32; 4],
        _width: f32,
    ) {
    }
}
