//! Roof editor state machine
//!
//! Owns the live [`RoofParameters`], the mesh built from them and at most one
//! [`DragSession`]. Pointer events go in, parameter notifications come out.

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3};
use parking_lot::Mutex;
use roof_core::{
    DimensionLabel, EdgeMeasurement, RoofMesh, RoofParameters, Segment, build_roof_mesh,
    dimension_labels, hip_edges, ridge_edge, wireframe_segments,
};

use crate::config::{DisplayConfig, EditorConfig};
use crate::error::InteractionError;
use crate::handle::{HandleKind, HandleShape, HandleSpec, handle_layout};
use crate::observer::{InteractionHint, NoopObserver, RoofObserver, notify_changes};
use crate::ray::{
    Ray, ray_cylinder_intersection, ray_sphere_intersection, ray_triangle_intersection,
};
use crate::session::DragSession;
use crate::traits::{CameraControl, MeshRenderer, RayCaster};

/// Interactive roof editor
pub struct RoofEditor {
    params: RoofParameters,
    mesh: RoofMesh,
    config: EditorConfig,
    session: Option<DragSession>,
    hovered: Option<HandleKind>,
    observer: Box<dyn RoofObserver>,
    camera_control: Option<Box<dyn CameraControl>>,
}

impl RoofEditor {
    /// Create an editor with the default configuration.
    ///
    /// Out-of-range input is clamped rather than rejected.
    pub fn new(params: RoofParameters) -> Self {
        Self::with_config(params, EditorConfig::default())
    }

    /// Create an editor with an explicit configuration
    pub fn with_config(params: RoofParameters, config: EditorConfig) -> Self {
        let params = params.clamped();
        Self {
            mesh: build_roof_mesh(&params),
            params,
            config,
            session: None,
            hovered: None,
            observer: Box::new(NoopObserver),
            camera_control: None,
        }
    }

    /// Builder form of [`RoofEditor::set_observer`]
    pub fn with_observer(mut self, observer: impl RoofObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Replace the observer
    pub fn set_observer(&mut self, observer: Box<dyn RoofObserver>) {
        self.observer = observer;
    }

    /// Attach the orbit-camera controller suspended during drags
    pub fn set_camera_control(&mut self, camera_control: Box<dyn CameraControl>) {
        self.camera_control = Some(camera_control);
    }

    pub fn parameters(&self) -> &RoofParameters {
        &self.params
    }

    pub fn mesh(&self) -> &RoofMesh {
        &self.mesh
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Roof-local to world transform
    pub fn world_transform(&self) -> Mat4 {
        self.params.world_transform()
    }

    /// Change what is drawn and pickable.
    ///
    /// Hiding the grips closes any open drag.
    pub fn set_display(&mut self, display: DisplayConfig) {
        self.config.display = display;
        if !display.show_grips {
            self.teardown();
        }
    }

    /// Replace externally owned parameters.
    ///
    /// Refused while a drag is open so the owner cannot fight the session.
    pub fn set_parameters(&mut self, params: RoofParameters) -> Result<(), InteractionError> {
        if self.session.is_some() {
            tracing::warn!("refusing external parameter update during drag");
            return Err(InteractionError::DragInProgress);
        }
        tracing::debug!(?params, "external parameter update");
        self.apply(params.clamped());
        Ok(())
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Handle being dragged, if any
    pub fn active_handle(&self) -> Option<HandleKind> {
        self.session.as_ref().map(|session| session.kind)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn hovered(&self) -> Option<HandleKind> {
        self.hovered
    }

    /// Grips laid out for the current parameters, roof-local
    pub fn handles(&self) -> Vec<HandleSpec> {
        handle_layout(&self.params, &self.config.handles)
    }

    /// Find what a world-space ray hits first.
    ///
    /// Grips take priority over the roof body; nothing is pickable while
    /// grips are hidden.
    pub fn pick(&self, ray: &Ray) -> Option<HandleKind> {
        if !self.config.display.show_grips {
            return None;
        }

        let inverse = self.params.world_transform().inverse();
        let local = Ray::new(
            inverse.transform_point3(ray.origin),
            inverse.transform_vector3(ray.direction),
        );
        let tolerance = self.config.handles.pick_tolerance;

        let grip = self
            .handles()
            .into_iter()
            .filter_map(|spec| hit_handle(&local, &spec, tolerance).map(|t| (spec.kind, t)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(kind, _)| kind);
        if grip.is_some() {
            return grip;
        }

        self.mesh
            .triangles()
            .any(|[a, b, c]| ray_triangle_intersection(&local, a, b, c).is_some())
            .then_some(HandleKind::FreeTranslate)
    }

    /// Pick under a pointer position
    pub fn pick_at(&self, pointer: Vec2, caster: &dyn RayCaster) -> Option<HandleKind> {
        caster.ray(pointer).and_then(|ray| self.pick(&ray))
    }

    /// Pick and start dragging whatever is under the pointer.
    ///
    /// Returns `Ok(None)` when the pointer is over empty space.
    pub fn pointer_down(
        &mut self,
        pointer: Vec2,
        caster: &dyn RayCaster,
    ) -> Result<Option<HandleKind>, InteractionError> {
        if self.session.is_some() {
            tracing::warn!("pointer down while a drag is open");
            return Err(InteractionError::DragInProgress);
        }
        if !self.config.display.show_grips {
            return Err(InteractionError::GripsHidden);
        }
        let ray = caster.ray(pointer).ok_or(InteractionError::RayMissed)?;
        let Some(kind) = self.pick(&ray) else {
            return Ok(None);
        };
        self.begin_drag(kind, pointer, caster)?;
        Ok(Some(kind))
    }

    /// Start dragging a specific handle from a pointer position
    pub fn begin_drag(
        &mut self,
        kind: HandleKind,
        pointer: Vec2,
        caster: &dyn RayCaster,
    ) -> Result<(), InteractionError> {
        self.check_can_begin()?;
        let plane = kind.drag_plane(&self.params, &self.config.handles, caster.view_direction());
        let Some(point) = caster.cast_ray(pointer, &plane) else {
            tracing::debug!(handle = kind.display_name(), "drag start missed the drag plane");
            return Err(InteractionError::RayMissed);
        };
        self.open_session(DragSession::begin(kind, self.params, plane, point));
        Ok(())
    }

    /// Start dragging a specific handle from a world point on its drag plane
    pub fn begin_drag_at(&mut self, kind: HandleKind, point: Vec3) -> Result<(), InteractionError> {
        self.check_can_begin()?;
        let plane = kind.drag_plane(&self.params, &self.config.handles, None);
        self.open_session(DragSession::begin(kind, self.params, plane, point));
        Ok(())
    }

    /// Pointer moved during a drag.
    ///
    /// Returns whether the parameters changed. A ray that misses the drag
    /// plane skips the frame.
    pub fn drag(&mut self, pointer: Vec2, caster: &dyn RayCaster) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        match caster.cast_ray(pointer, &session.plane) {
            Some(point) => self.drag_to(point),
            None => {
                tracing::trace!(session = %session.id, "pointer ray missed drag plane");
                false
            }
        }
    }

    /// Drag to a world point on the session's plane
    pub fn drag_to(&mut self, point: Vec3) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };
        session.advance(point);
        let params = session.parameters();
        self.apply(params)
    }

    /// Drag by a world-space displacement since the previous sample
    pub fn drag_by(&mut self, delta: Vec3) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };
        session.advance_by(delta);
        let params = session.parameters();
        self.apply(params)
    }

    /// Scale the wall height relative to the drag-start value.
    ///
    /// The factor is kept in the session, so later pointer moves build on it.
    pub fn scale_base_height(&mut self, factor: f32) -> Result<(), InteractionError> {
        let Some(session) = &mut self.session else {
            tracing::warn!("base height scale requested without a drag");
            return Err(InteractionError::NotDragging);
        };
        session.scale_base_height(factor);
        let params = session.parameters();
        self.apply(params);
        Ok(())
    }

    /// Pointer released. Returns whether a drag was open.
    pub fn end_drag(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        tracing::debug!(
            session = %session.id,
            handle = session.kind.display_name(),
            "drag ended"
        );
        if let Some(camera_control) = &mut self.camera_control {
            camera_control.set_suspended(false);
        }
        self.observer.on_grip_interaction_change(false);
        self.observer
            .on_interaction_hint(InteractionHint::DragEnd(session.kind));
        true
    }

    /// Close any open drag and forget hover state
    pub fn teardown(&mut self) {
        self.end_drag();
        self.clear_hover();
    }

    /// Track the grip under the pointer and report hover changes
    pub fn hover(&mut self, pointer: Vec2, caster: &dyn RayCaster) -> Option<HandleKind> {
        if self.session.is_some() {
            return self.hovered;
        }
        let picked = self.pick_at(pointer, caster);
        if picked != self.hovered {
            if let Some(previous) = self.hovered {
                self.observer
                    .on_interaction_hint(InteractionHint::HoverEnd(previous));
            }
            if let Some(current) = picked {
                self.observer
                    .on_interaction_hint(InteractionHint::HoverStart(current));
            }
            self.hovered = picked;
        }
        picked
    }

    /// Dimension labels, empty when hidden
    pub fn labels(&self) -> Vec<DimensionLabel> {
        if !self.config.display.show_dimensions {
            return Vec::new();
        }
        dimension_labels(&self.params, &self.config.labels)
    }

    /// Hip edges followed by the ridge
    pub fn measurements(&self) -> Vec<EdgeMeasurement> {
        let mut edges = hip_edges(&self.params).to_vec();
        edges.push(ridge_edge(&self.params));
        edges
    }

    /// Wireframe overlay, `None` when hidden
    pub fn wireframe(&self) -> Option<[Segment; 9]> {
        self.config
            .display
            .show_edges
            .then(|| wireframe_segments(&self.params))
    }

    /// Draw the current mesh and overlay
    pub fn render(&self, renderer: &mut dyn MeshRenderer) {
        let transform = self.world_transform();
        let material = &self.config.material;
        renderer.render_mesh(&self.mesh, transform, material);
        if let Some(segments) = self.wireframe() {
            renderer.render_lines(&segments, transform, material.edge_color, material.edge_width);
        }
    }

    fn check_can_begin(&self) -> Result<(), InteractionError> {
        if self.session.is_some() {
            tracing::warn!("refusing to start a second drag");
            return Err(InteractionError::DragInProgress);
        }
        if !self.config.display.show_grips {
            return Err(InteractionError::GripsHidden);
        }
        Ok(())
    }

    fn open_session(&mut self, session: DragSession) {
        tracing::debug!(
            session = %session.id,
            handle = session.kind.display_name(),
            "drag started"
        );
        let kind = session.kind;
        self.session = Some(session);
        if let Some(camera_control) = &mut self.camera_control {
            camera_control.set_suspended(true);
        }
        self.observer.on_grip_interaction_change(true);
        self.observer
            .on_interaction_hint(InteractionHint::DragStart(kind));
    }

    fn clear_hover(&mut self) {
        if let Some(previous) = self.hovered.take() {
            self.observer
                .on_interaction_hint(InteractionHint::HoverEnd(previous));
        }
    }

    /// Commit new parameters, rebuild and notify. Returns whether anything changed.
    fn apply(&mut self, params: RoofParameters) -> bool {
        if params == self.params {
            tracing::trace!("parameters unchanged, rebuild skipped");
            return false;
        }
        let before = std::mem::replace(&mut self.params, params);
        self.mesh = build_roof_mesh(&self.params);
        notify_changes(self.observer.as_mut(), &before, &self.params);
        true
    }
}

impl Drop for RoofEditor {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for RoofEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoofEditor")
            .field("params", &self.params)
            .field("session", &self.session)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

/// Ray parameter of a hit on a grip, in the roof-local frame
fn hit_handle(ray: &Ray, spec: &HandleSpec, tolerance: f32) -> Option<f32> {
    match spec.shape {
        HandleShape::Cylinder {
            axis,
            length,
            radius,
        } => {
            let half = axis * (length / 2.0);
            ray_cylinder_intersection(
                ray,
                spec.anchor - half,
                spec.anchor + half,
                radius + tolerance,
            )
        }
        HandleShape::Sphere { radius } => {
            ray_sphere_intersection(ray, spec.anchor, radius + tolerance)
        }
        HandleShape::Body => None,
    }
}

/// Editor shared between event dispatch and rendering
pub type SharedRoofEditor = Arc<Mutex<RoofEditor>>;

/// Wrap an editor for sharing
pub fn shared(editor: RoofEditor) -> SharedRoofEditor {
    Arc::new(Mutex::new(editor))
}
