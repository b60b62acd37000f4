//! Editable roof parameters

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_FOOTPRINT, MIN_HEIGHT};

/// The single source of truth for one roof instance.
///
/// Dimensions are full extents: the footprint spans `±length/2` along X and
/// `±width/2` along Z around the footprint centre. Mesh data is built in this
/// local frame; [`RoofParameters::world_transform`] places it in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofParameters {
    /// Footprint extent along local X
    pub length: f32,
    /// Footprint extent along local Z
    pub width: f32,
    /// Wall height from the ground to the roof base plane
    pub base_height: f32,
    /// Ridge height above the roof base plane
    pub roof_height: f32,
    /// First ridge point offset from the footprint centre, as (x, z)
    pub ridge1: Vec2,
    /// Second ridge point offset from the footprint centre, as (x, z)
    pub ridge2: Vec2,
    /// World X of the footprint centre
    pub position_x: f32,
    /// World Z of the footprint centre
    pub position_z: f32,
    /// Yaw about the vertical axis (radians)
    pub rotation_y: f32,
}

impl Default for RoofParameters {
    fn default() -> Self {
        Self {
            length: 10.0,
            width: 8.0,
            base_height: 3.0,
            roof_height: 4.0,
            ridge1: Vec2::ZERO,
            ridge2: Vec2::ZERO,
            position_x: 0.0,
            position_z: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl RoofParameters {
    /// Create parameters with the given footprint and heights, centred at the origin
    pub fn new(length: f32, width: f32, base_height: f32, roof_height: f32) -> Self {
        Self {
            length,
            width,
            base_height,
            roof_height,
            ..Self::default()
        }
    }

    /// Set both ridge offsets
    pub fn with_ridge(mut self, ridge1: Vec2, ridge2: Vec2) -> Self {
        self.ridge1 = ridge1;
        self.ridge2 = ridge2;
        self
    }

    /// Set the world placement of the footprint centre
    pub fn with_position(mut self, x: f32, z: f32) -> Self {
        self.position_x = x;
        self.position_z = z;
        self
    }

    /// Set the yaw (radians)
    pub fn with_rotation(mut self, rotation_y: f32) -> Self {
        self.rotation_y = rotation_y;
        self
    }

    /// Return a copy with every dimension floored to its minimum.
    ///
    /// Non-finite dimensions land on the floor as well. Ridge offsets,
    /// position and rotation are left untouched.
    pub fn clamped(mut self) -> Self {
        self.clamp();
        self
    }

    /// Floor every dimension in place
    pub fn clamp(&mut self) {
        self.length = floor_at(self.length, MIN_FOOTPRINT);
        self.width = floor_at(self.width, MIN_FOOTPRINT);
        self.base_height = floor_at(self.base_height, MIN_HEIGHT);
        self.roof_height = floor_at(self.roof_height, MIN_HEIGHT);
    }

    /// Check that every dimension is at or above its floor
    pub fn is_within_limits(&self) -> bool {
        self.length >= MIN_FOOTPRINT
            && self.width >= MIN_FOOTPRINT
            && self.base_height >= MIN_HEIGHT
            && self.roof_height >= MIN_HEIGHT
    }

    /// Height of the ridge above the ground
    pub fn ridge_elevation(&self) -> f32 {
        self.base_height + self.roof_height
    }

    /// Ground corners: back-left, back-right, front-right, front-left
    pub fn ground_corners(&self) -> [Vec3; 4] {
        self.corners_at(0.0)
    }

    /// Roof-base corners: back-left, back-right, front-right, front-left
    pub fn base_corners(&self) -> [Vec3; 4] {
        self.corners_at(self.base_height)
    }

    /// The two ridge points in the local frame
    pub fn ridge_points(&self) -> [Vec3; 2] {
        let y = self.ridge_elevation();
        [
            Vec3::new(self.ridge1.x, y, self.ridge1.y),
            Vec3::new(self.ridge2.x, y, self.ridge2.y),
        ]
    }

    fn corners_at(&self, y: f32) -> [Vec3; 4] {
        let hx = self.length / 2.0;
        let hz = self.width / 2.0;
        [
            Vec3::new(-hx, y, -hz),
            Vec3::new(hx, y, -hz),
            Vec3::new(hx, y, hz),
            Vec3::new(-hx, y, hz),
        ]
    }

    /// World position of the footprint centre (ground level)
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.position_x, 0.0, self.position_z)
    }

    /// Local-to-world transform: translation then yaw
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.world_position())
    }

    /// Yaw as a quaternion
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_y)
    }

    /// Transform a local point into world space
    pub fn local_to_world(&self, point: Vec3) -> Vec3 {
        self.world_position() + self.orientation() * point
    }

    /// Express a world-space direction in the local frame
    pub fn world_to_local_vector(&self, vector: Vec3) -> Vec3 {
        self.orientation().inverse() * vector
    }
}

fn floor_at(value: f32, floor: f32) -> f32 {
    if value.is_finite() {
        value.max(floor)
    } else {
        floor
    }
}
