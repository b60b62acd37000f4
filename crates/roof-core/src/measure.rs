//! Derived measurements along the roof's sloped and ridge edges
//!
//! Lengths and orientations used to place dimension labels flat against
//! the roof. Everything here is a pure function of [`RoofParameters`].

use glam::Vec3;

use crate::params::RoofParameters;

/// Which roof edge a measurement describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoofEdge {
    /// Back-left base corner to ridge point 1
    BackLeftHip,
    /// Front-left base corner to ridge point 1
    FrontLeftHip,
    /// Front-right base corner to ridge point 2
    FrontRightHip,
    /// Back-right base corner to ridge point 2
    BackRightHip,
    /// Ridge point 1 to ridge point 2
    Ridge,
}

impl RoofEdge {
    /// The four hip edges in label order
    pub const HIPS: [RoofEdge; 4] = [
        RoofEdge::BackLeftHip,
        RoofEdge::FrontLeftHip,
        RoofEdge::FrontRightHip,
        RoofEdge::BackRightHip,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofEdge::BackLeftHip => "Back-left hip",
            RoofEdge::FrontLeftHip => "Front-left hip",
            RoofEdge::FrontRightHip => "Front-right hip",
            RoofEdge::BackRightHip => "Back-right hip",
            RoofEdge::Ridge => "Ridge",
        }
    }

    /// Endpoints of this edge in the local frame
    pub fn endpoints(&self, params: &RoofParameters) -> (Vec3, Vec3) {
        let [back_left, back_right, front_right, front_left] = params.base_corners();
        let [ridge1, ridge2] = params.ridge_points();
        match self {
            RoofEdge::BackLeftHip => (back_left, ridge1),
            RoofEdge::FrontLeftHip => (front_left, ridge1),
            RoofEdge::FrontRightHip => (front_right, ridge2),
            RoofEdge::BackRightHip => (back_right, ridge2),
            RoofEdge::Ridge => (ridge1, ridge2),
        }
    }
}

/// Length, midpoint and orientation of one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMeasurement {
    /// Edge being measured
    pub edge: RoofEdge,
    /// Start point (local frame)
    pub from: Vec3,
    /// End point (local frame)
    pub to: Vec3,
    /// Euclidean length
    pub length: f32,
    /// Midpoint (local frame)
    pub midpoint: Vec3,
    /// Slope angle above the horizontal, `atan2(Δy, horizontal)`
    pub pitch: f32,
    /// Heading in the ground plane, `atan2(Δx, Δz)`
    pub yaw: f32,
}

impl EdgeMeasurement {
    /// Measure the segment between two points
    pub fn between(edge: RoofEdge, from: Vec3, to: Vec3) -> Self {
        let d = to - from;
        let horizontal = (d.x * d.x + d.z * d.z).sqrt();
        Self {
            edge,
            from,
            to,
            length: d.length(),
            midpoint: (from + to) * 0.5,
            pitch: d.y.atan2(horizontal),
            yaw: d.x.atan2(d.z),
        }
    }
}

/// Measure a single edge
pub fn measure_edge(params: &RoofParameters, edge: RoofEdge) -> EdgeMeasurement {
    let (from, to) = edge.endpoints(params);
    EdgeMeasurement::between(edge, from, to)
}

/// Measure the four hip edges (back-left, front-left, front-right, back-right)
pub fn hip_edges(params: &RoofParameters) -> [EdgeMeasurement; 4] {
    RoofEdge::HIPS.map(|edge| measure_edge(params, edge))
}

/// Measure the central ridge edge
pub fn ridge_edge(params: &RoofParameters) -> EdgeMeasurement {
    measure_edge(params, RoofEdge::Ridge)
}
