//! Global constants for roof-core

/// Smallest footprint extent (length or width) a roof may have
pub const MIN_FOOTPRINT: f32 = 1.0;

/// Smallest wall or ridge height a roof may have
pub const MIN_HEIGHT: f32 = 0.1;

/// Named vertices before de-indexing (4 ground, 4 roof base, 2 ridge)
pub const ROOF_VERTEX_COUNT: usize = 10;

/// Triangles in the roof triangulation
pub const ROOF_TRIANGLE_COUNT: usize = 18;

/// Vertex entries in the flat-shaded mesh
pub const FLAT_VERTEX_COUNT: usize = ROOF_TRIANGLE_COUNT * 3;

/// Default roof body color (#18FFFF, RGBA)
pub const DEFAULT_ROOF_COLOR: [f32; 4] = [0.094, 1.0, 1.0, 1.0];

/// Default wireframe overlay color (#00FFFF, RGBA)
pub const DEFAULT_EDGE_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
