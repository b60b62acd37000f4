//! Roof Editor
//!
//! Interactive handle protocol for a parametric roof: hit testing, drag
//! sessions and the state machine that turns pointer motion into
//! [`roof_core::RoofParameters`] updates.
//!
//! # Module Structure
//!
//! ```text
//! roof-editor/
//! ├── controller.rs   # RoofEditor state machine
//! ├── session.rs      # Drag snapshot, accumulator, angle unwrapping
//! ├── handle.rs       # Handle kinds, layout, delta dispatch
//! ├── ray.rs          # Ray/plane, cylinder, sphere, triangle tests
//! ├── camera.rs       # Perspective pick camera
//! ├── traits.rs       # RayCaster, CameraControl, MeshRenderer
//! ├── observer.rs     # Change notifications and interaction hints
//! ├── config.rs       # EditorConfig (RON)
//! └── error.rs        # InteractionError, ConfigError
//! ```

pub mod camera;
pub mod config;
pub mod controller;
pub mod error;
pub mod handle;
pub mod observer;
pub mod ray;
pub mod session;
pub mod traits;

pub use camera::PickCamera;
pub use config::{DisplayConfig, EditorConfig, HandleConfig};
pub use controller::{RoofEditor, SharedRoofEditor, shared};
pub use error::{ConfigError, InteractionError};
pub use handle::{
    DragAccumulator, EdgeSide, HandleKind, HandleShape, HandleSpec, HeightTarget, handle_layout,
};
pub use observer::{InteractionHint, NoopObserver, RoofObserver};
pub use ray::{Plane, Ray, intersect_ray_with_plane};
pub use session::{DragSession, normalize_angle_delta};
pub use traits::{CameraControl, MeshRenderer, RayCaster};
