//! Bounding sphere for culling and picking.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Sphere enclosing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// Centre of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Creates the sphere centred on the axis-aligned bounds of `points`
    /// whose radius reaches the farthest point.
    ///
    /// Returns a zero sphere at the origin for an empty set.
    pub fn from_points(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self::new(Vec3::ZERO, 0.0);
        }

        let (min, max) = points.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        let center = (min + max) * 0.5;
        let radius = points
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0_f32, f32::max)
            .sqrt();

        Self { center, radius }
    }

    /// Returns true if the point lies inside or on the sphere.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius + 1e-5
    }

    /// Moves the centre by a rigid transform. The radius is kept, so the
    /// transform must not scale.
    pub fn transform_rigid(&self, transform: &Mat4) -> BoundingSphere {
        BoundingSphere {
            center: transform.transform_point3(self.center),
            radius: self.radius,
        }
    }
}
