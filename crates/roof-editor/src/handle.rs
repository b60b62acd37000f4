//! Handle kinds, layout and the delta-to-parameter dispatch table

use glam::{Vec2, Vec3};
use roof_core::{MIN_FOOTPRINT, MIN_HEIGHT, RoofParameters};

use crate::config::HandleConfig;
use crate::ray::Plane;

/// Footprint edge moved by an edge-resize handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    /// Left edge (x = -length/2)
    LengthLeft,
    /// Right edge (x = +length/2)
    LengthRight,
    /// Back edge (z = -width/2)
    WidthBack,
    /// Front edge (z = +width/2)
    WidthFront,
}

impl EdgeSide {
    /// Local axis the edge moves along
    pub fn axis(&self) -> Vec3 {
        match self {
            EdgeSide::LengthLeft | EdgeSide::LengthRight => Vec3::X,
            EdgeSide::WidthBack | EdgeSide::WidthFront => Vec3::Z,
        }
    }

    /// +1 when moving along the axis grows the footprint, -1 otherwise
    pub fn sign(&self) -> f32 {
        match self {
            EdgeSide::LengthLeft | EdgeSide::WidthBack => -1.0,
            EdgeSide::LengthRight | EdgeSide::WidthFront => 1.0,
        }
    }
}

/// Height moved by a height handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightTarget {
    /// Ridge height above the roof base
    Ridge,
    /// Wall height
    Base,
}

/// Every way a drag can edit the roof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    EdgeResize(EdgeSide),
    HeightAdjust(HeightTarget),
    Rotate,
    /// Drag on the roof body itself
    FreeTranslate,
}

impl HandleKind {
    /// The seven grips drawn on the roof, in layout order
    pub const GRIPS: [HandleKind; 7] = [
        HandleKind::EdgeResize(EdgeSide::LengthLeft),
        HandleKind::EdgeResize(EdgeSide::LengthRight),
        HandleKind::EdgeResize(EdgeSide::WidthBack),
        HandleKind::EdgeResize(EdgeSide::WidthFront),
        HandleKind::HeightAdjust(HeightTarget::Ridge),
        HandleKind::HeightAdjust(HeightTarget::Base),
        HandleKind::Rotate,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HandleKind::EdgeResize(EdgeSide::LengthLeft) => "Length (left)",
            HandleKind::EdgeResize(EdgeSide::LengthRight) => "Length (right)",
            HandleKind::EdgeResize(EdgeSide::WidthBack) => "Width (back)",
            HandleKind::EdgeResize(EdgeSide::WidthFront) => "Width (front)",
            HandleKind::HeightAdjust(HeightTarget::Ridge) => "Ridge height",
            HandleKind::HeightAdjust(HeightTarget::Base) => "Base height",
            HandleKind::Rotate => "Rotate",
            HandleKind::FreeTranslate => "Move",
        }
    }

    /// Anchor in the roof-local frame
    pub fn anchor(&self, params: &RoofParameters, config: &HandleConfig) -> Vec3 {
        let y = params.base_height;
        let hx = params.length / 2.0;
        let hz = params.width / 2.0;
        match self {
            HandleKind::EdgeResize(EdgeSide::LengthLeft) => Vec3::new(-hx, y, 0.0),
            HandleKind::EdgeResize(EdgeSide::LengthRight) => Vec3::new(hx, y, 0.0),
            HandleKind::EdgeResize(EdgeSide::WidthBack) => Vec3::new(0.0, y, -hz),
            HandleKind::EdgeResize(EdgeSide::WidthFront) => Vec3::new(0.0, y, hz),
            HandleKind::HeightAdjust(HeightTarget::Ridge) => Vec3::new(0.0, y, 0.0),
            HandleKind::HeightAdjust(HeightTarget::Base) => Vec3::ZERO,
            HandleKind::Rotate => Vec3::new(0.0, y, -hz - config.rotate_offset),
            HandleKind::FreeTranslate => Vec3::ZERO,
        }
    }

    /// Pick shape for this handle
    pub fn shape(&self, config: &HandleConfig) -> HandleShape {
        match self {
            // Edge grips lie along the edge they move
            HandleKind::EdgeResize(EdgeSide::LengthLeft | EdgeSide::LengthRight) => {
                HandleShape::Cylinder {
                    axis: Vec3::Z,
                    length: config.edge_grip_length,
                    radius: config.edge_grip_radius,
                }
            }
            HandleKind::EdgeResize(EdgeSide::WidthBack | EdgeSide::WidthFront) => {
                HandleShape::Cylinder {
                    axis: Vec3::X,
                    length: config.edge_grip_length,
                    radius: config.edge_grip_radius,
                }
            }
            HandleKind::HeightAdjust(_) => HandleShape::Cylinder {
                axis: Vec3::Y,
                length: config.height_grip_length,
                radius: config.height_grip_radius,
            },
            HandleKind::Rotate => HandleShape::Sphere {
                radius: config.rotate_grip_radius,
            },
            HandleKind::FreeTranslate => HandleShape::Body,
        }
    }

    /// World-space plane the pointer is projected onto while dragging.
    ///
    /// Height handles use a vertical plane facing the viewer as squarely as
    /// the two horizontal world axes allow.
    pub fn drag_plane(
        &self,
        params: &RoofParameters,
        config: &HandleConfig,
        view_direction: Option<Vec3>,
    ) -> Plane {
        match self {
            HandleKind::EdgeResize(_) | HandleKind::Rotate => Plane::horizontal(params.base_height),
            HandleKind::FreeTranslate => Plane::horizontal(0.0),
            HandleKind::HeightAdjust(_) => {
                let anchor = params.local_to_world(self.anchor(params, config));
                let normal = match view_direction {
                    Some(forward) if forward.x.abs() > forward.z.abs() => Vec3::X,
                    _ => Vec3::Z,
                };
                Plane::from_normal_and_point(normal, anchor)
            }
        }
    }

    /// New parameters from the drag-start snapshot and the accumulated deltas.
    ///
    /// Dimensions are floored; position and rotation are not.
    pub fn apply(&self, snapshot: &RoofParameters, delta: &DragAccumulator) -> RoofParameters {
        let mut params = *snapshot;
        let base_height = match delta.base_scale {
            Some(factor) => snapshot.base_height * factor,
            None => snapshot.base_height,
        };
        if delta.base_scale.is_some() {
            params.base_height = base_height.max(MIN_HEIGHT);
        }
        match self {
            HandleKind::EdgeResize(side) => {
                let along = match side {
                    EdgeSide::LengthLeft | EdgeSide::LengthRight => delta.x,
                    EdgeSide::WidthBack | EdgeSide::WidthFront => delta.z,
                };
                let size = snapshot_extent(snapshot, *side) + side.sign() * along;
                match side {
                    EdgeSide::LengthLeft | EdgeSide::LengthRight => {
                        params.length = size.max(MIN_FOOTPRINT);
                    }
                    EdgeSide::WidthBack | EdgeSide::WidthFront => {
                        params.width = size.max(MIN_FOOTPRINT);
                    }
                }
                // Shift the centre so the opposite edge stays put
                let shift = snapshot.orientation() * (side.axis() * (along / 2.0));
                params.position_x = snapshot.position_x + shift.x;
                params.position_z = snapshot.position_z + shift.z;
            }
            HandleKind::HeightAdjust(HeightTarget::Ridge) => {
                params.roof_height = (snapshot.roof_height + delta.y).max(MIN_HEIGHT);
            }
            HandleKind::HeightAdjust(HeightTarget::Base) => {
                params.base_height = (base_height + delta.y).max(MIN_HEIGHT);
            }
            HandleKind::Rotate => {
                params.rotation_y = snapshot.rotation_y - delta.rotation;
            }
            HandleKind::FreeTranslate => {
                params.position_x = snapshot.position_x + delta.x;
                params.position_z = snapshot.position_z + delta.z;
            }
        }
        params
    }
}

fn snapshot_extent(snapshot: &RoofParameters, side: EdgeSide) -> f32 {
    match side {
        EdgeSide::LengthLeft | EdgeSide::LengthRight => snapshot.length,
        EdgeSide::WidthBack | EdgeSide::WidthFront => snapshot.width,
    }
}

/// Cumulative drag displacement since the session began.
///
/// `x` and `z` are in the roof-local frame for edge handles and in world
/// space for free translation; `y` is vertical; `rotation` is the summed
/// angle swept around the pivot. `base_scale` multiplies the drag-start
/// wall height when the base-height pivot control is used.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragAccumulator {
    pub x: f32,
    pub z: f32,
    pub y: f32,
    pub rotation: f32,
    pub base_scale: Option<f32>,
}

impl DragAccumulator {
    /// Horizontal part as (x, z)
    pub fn horizontal(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

/// Geometry used to hit-test a handle, in the roof-local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleShape {
    /// Cylinder centred on the anchor
    Cylinder { axis: Vec3, length: f32, radius: f32 },
    /// Sphere centred on the anchor
    Sphere { radius: f32 },
    /// The roof mesh itself
    Body,
}

/// A laid-out handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSpec {
    pub kind: HandleKind,
    /// Anchor in the roof-local frame
    pub anchor: Vec3,
    pub shape: HandleShape,
}

/// Lay out the seven grips for the current parameters
pub fn handle_layout(params: &RoofParameters, config: &HandleConfig) -> Vec<HandleSpec> {
    HandleKind::GRIPS
        .iter()
        .map(|kind| HandleSpec {
            kind: *kind,
            anchor: kind.anchor(params, config),
            shape: kind.shape(config),
        })
        .collect()
}
