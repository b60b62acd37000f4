//! Drag session state

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use roof_core::RoofParameters;
use uuid::Uuid;

use crate::handle::{DragAccumulator, HandleKind};
use crate::ray::Plane;

/// Wrap an angle difference into `(-π, π]`.
///
/// Consecutive samples that straddle the `±π` seam would otherwise read as
/// an almost full turn in the opposite direction.
pub fn normalize_angle_delta(delta: f32) -> f32 {
    let mut d = delta % TAU;
    if d > PI {
        d -= TAU;
    } else if d <= -PI {
        d += TAU;
    }
    d
}

/// Angle of a point around a vertical pivot, `atan2(dz, dx)`
pub fn angle_around(pivot: Vec3, point: Vec3) -> f32 {
    (point.z - pivot.z).atan2(point.x - pivot.x)
}

/// One open drag, from pointer-down to pointer-up
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Correlates log lines of one drag
    pub id: Uuid,
    pub kind: HandleKind,
    /// Parameters captured when the drag began
    pub snapshot: RoofParameters,
    pub accumulator: DragAccumulator,
    /// World plane the pointer is projected onto
    pub plane: Plane,
    /// First plane point of the drag
    pub start_point: Vec3,
    /// Latest accepted plane point
    pub last_point: Vec3,
    /// Rotation pivot in world space
    pub pivot: Vec3,
    /// Latest angle sample around the pivot
    pub last_angle: f32,
}

impl DragSession {
    /// Open a session anchored at `start_point` on `plane`
    pub fn begin(
        kind: HandleKind,
        snapshot: RoofParameters,
        plane: Plane,
        start_point: Vec3,
    ) -> Self {
        let pivot = Vec3::new(snapshot.position_x, snapshot.base_height, snapshot.position_z);
        Self {
            id: Uuid::new_v4(),
            kind,
            snapshot,
            accumulator: DragAccumulator::default(),
            plane,
            start_point,
            last_point: start_point,
            pivot,
            last_angle: angle_around(pivot, start_point),
        }
    }

    /// Feed the next plane point into the accumulator
    pub fn advance(&mut self, point: Vec3) {
        match self.kind {
            HandleKind::EdgeResize(_) => {
                // Project in the frame the roof had when the drag began
                let local = self.snapshot.world_to_local_vector(point - self.last_point);
                self.accumulator.x += local.x;
                self.accumulator.z += local.z;
            }
            HandleKind::HeightAdjust(_) => {
                self.accumulator.y += point.y - self.last_point.y;
            }
            HandleKind::Rotate => {
                let angle = angle_around(self.pivot, point);
                self.accumulator.rotation += normalize_angle_delta(angle - self.last_angle);
                self.last_angle = angle;
            }
            HandleKind::FreeTranslate => {
                // Total displacement from the start point, never summed per frame
                self.accumulator.x = point.x - self.start_point.x;
                self.accumulator.z = point.z - self.start_point.z;
            }
        }
        self.last_point = point;
    }

    /// Feed a raw world-space displacement since the last sample
    pub fn advance_by(&mut self, delta: Vec3) {
        self.advance(self.last_point + delta);
    }

    /// Scale the drag-start wall height; replaces any earlier factor
    pub fn scale_base_height(&mut self, factor: f32) {
        self.accumulator.base_scale = Some(factor);
    }

    /// Live parameters implied by the snapshot and the accumulator
    pub fn parameters(&self) -> RoofParameters {
        self.kind.apply(&self.snapshot, &self.accumulator)
    }
}
