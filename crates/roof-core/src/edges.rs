//! Wireframe overlay segments

use glam::Vec3;

use crate::measure::RoofEdge;
use crate::params::RoofParameters;

/// A straight line segment in the roof-local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point
    pub start: Vec3,
    /// End point
    pub end: Vec3,
}

impl Segment {
    /// Create a segment
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Segment length
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Outline drawn over the translucent roof body: the roof-base perimeter,
/// the four hips and the ridge.
pub fn wireframe_segments(params: &RoofParameters) -> [Segment; 9] {
    let [p4, p5, p6, p7] = params.base_corners();
    let [p8, p9] = params.ridge_points();
    [
        Segment::new(p4, p5),
        Segment::new(p5, p6),
        Segment::new(p6, p7),
        Segment::new(p7, p4),
        Segment::new(p4, p8),
        Segment::new(p8, p7),
        Segment::new(p9, p6),
        Segment::new(p5, p9),
        Segment::new(p8, p9),
    ]
}

/// The wireframe segment that traces a measured edge
pub fn segment_for_edge(params: &RoofParameters, edge: RoofEdge) -> Segment {
    let (start, end) = edge.endpoints(params);
    Segment::new(start, end)
}
