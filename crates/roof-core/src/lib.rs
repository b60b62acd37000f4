//! Roof Core
//!
//! Parametric roof geometry for the roof editor.
//!
//! # Module Structure
//!
//! ```text
//! roof-core/
//! ├── params.rs       # RoofParameters, clamping, world placement
//! ├── mesh/           # Flat-shaded mesh builder, normals, vertex layout
//! ├── bounds.rs       # Bounding sphere
//! ├── edges.rs        # Wireframe overlay segments
//! ├── measure.rs      # Hip and ridge measurements
//! ├── annotation.rs   # Dimension label layout
//! └── material.rs     # Appearance handed to the renderer
//! ```

pub mod annotation;
pub mod bounds;
pub mod constants;
pub mod edges;
pub mod material;
pub mod measure;
pub mod mesh;
pub mod params;

pub use annotation::{DimensionLabel, LabelLayout, LabelTarget, dimension_labels};
pub use bounds::BoundingSphere;
pub use constants::*;
pub use edges::{Segment, segment_for_edge, wireframe_segments};
pub use material::RoofMaterial;
pub use measure::{EdgeMeasurement, RoofEdge, hip_edges, measure_edge, ridge_edge};
pub use mesh::{RoofMesh, RoofVertex, build_roof_mesh};
pub use params::RoofParameters;
