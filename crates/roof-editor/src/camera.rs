//! Perspective pick camera

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::ray::Ray;
use crate::traits::RayCaster;

/// Perspective camera used to turn pointer positions into world rays.
///
/// Only the projection matters here; orbiting and panning belong to the
/// host's camera controller.
#[derive(Debug, Clone)]
pub struct PickCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PickCamera {
    /// Create a camera looking from `position` at `target`, Y up
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov: 50.0_f32.to_radians(),
            aspect,
            near: 0.01,
            far: 1000.0,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Unit vector from the camera toward its target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Convert pixel coordinates to normalized device coordinates
    pub fn screen_to_ndc(screen_x: f32, screen_y: f32, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            (2.0 * screen_x / width) - 1.0,
            1.0 - (2.0 * screen_y / height),
        )
    }

    /// Project a world point to normalized device coordinates
    pub fn world_to_ndc(&self, point: Vec3) -> Vec2 {
        let clip = self.projection_matrix() * self.view_matrix() * point.extend(1.0);
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }

    /// World ray through a point in normalized device coordinates
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = (self.projection_matrix() * self.view_matrix()).inverse();

        let near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        Ray::new(near, far - near)
    }
}

impl RayCaster for PickCamera {
    fn ray(&self, pointer: Vec2) -> Option<Ray> {
        let on_screen = pointer.x.abs() <= 1.0 && pointer.y.abs() <= 1.0;
        on_screen.then(|| self.ray_from_ndc(pointer))
    }

    fn view_direction(&self) -> Option<Vec3> {
        Some(self.forward())
    }
}
