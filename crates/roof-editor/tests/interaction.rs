//! Drag sessions driven through the public editor API

use std::f32::consts::{PI, TAU};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use approx::assert_abs_diff_eq;
use glam::{Vec2, Vec3};
use parking_lot::Mutex;
use roof_core::{MIN_FOOTPRINT, MIN_HEIGHT, RoofParameters};
use roof_editor::{
    CameraControl, EdgeSide, HandleKind, HeightTarget, InteractionError, InteractionHint,
    PickCamera, Ray, RayCaster, RoofEditor, RoofObserver,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Dimensions(f32, f32),
    RoofHeight(f32),
    BaseHeight(f32),
    Rotation(f32),
    Position(f32, f32),
    Grip(bool),
    Parameters,
    Hint(InteractionHint),
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Event>>>);

impl Recorder {
    fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.lock())
    }
}

impl RoofObserver for Recorder {
    fn on_dimensions_change(&mut self, length: f32, width: f32) {
        self.0.lock().push(Event::Dimensions(length, width));
    }
    fn on_roof_height_change(&mut self, height: f32) {
        self.0.lock().push(Event::RoofHeight(height));
    }
    fn on_base_height_change(&mut self, height: f32) {
        self.0.lock().push(Event::BaseHeight(height));
    }
    fn on_rotation_change(&mut self, angle: f32) {
        self.0.lock().push(Event::Rotation(angle));
    }
    fn on_position_change(&mut self, x: f32, z: f32) {
        self.0.lock().push(Event::Position(x, z));
    }
    fn on_grip_interaction_change(&mut self, active: bool) {
        self.0.lock().push(Event::Grip(active));
    }
    fn on_parameters_change(&mut self, _params: &RoofParameters) {
        self.0.lock().push(Event::Parameters);
    }
    fn on_interaction_hint(&mut self, hint: InteractionHint) {
        self.0.lock().push(Event::Hint(hint));
    }
}

struct Orbit(Arc<AtomicBool>);

impl CameraControl for Orbit {
    fn set_suspended(&mut self, suspended: bool) {
        self.0.store(suspended, Ordering::SeqCst);
    }
}

/// Caster whose rays never reach a horizontal plane
struct Parallel;

impl RayCaster for Parallel {
    fn ray(&self, _pointer: Vec2) -> Option<Ray> {
        Some(Ray::new(Vec3::new(0.0, 100.0, 0.0), Vec3::X))
    }
}

fn recorded_editor() -> (RoofEditor, Recorder) {
    let recorder = Recorder::default();
    let editor = RoofEditor::new(RoofParameters::default()).with_observer(recorder.clone());
    (editor, recorder)
}

fn on_circle(center: Vec3, angle: f32) -> Vec3 {
    center + Vec3::new(angle.cos(), 0.0, angle.sin()) * 5.0
}

/// Small deterministic generator for drag sequences
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
    }
}

#[test]
fn test_length_drag_uses_snapshot() {
    init_tracing();
    let (mut editor, recorder) = recorded_editor();
    editor
        .begin_drag_at(HandleKind::EdgeResize(EdgeSide::LengthRight), Vec3::new(5.0, 3.0, 0.0))
        .unwrap();
    for x in [5.5, 6.1, 7.3, 8.0] {
        editor.drag_to(Vec3::new(x, 3.0, 0.2));
    }
    let params = *editor.parameters();
    assert_abs_diff_eq!(params.length, 13.0, epsilon = 1e-5);
    assert_abs_diff_eq!(params.position_x, 1.5, epsilon = 1e-5);
    assert_eq!(params.width, 8.0);
    editor.end_drag();

    let events = recorder.take();
    assert_eq!(events.first(), Some(&Event::Grip(true)));
    assert!(events.contains(&Event::Grip(false)));
    assert!(events.iter().any(|e| matches!(e, Event::Dimensions(_, w) if *w == 8.0)));
    assert!(events.iter().any(|e| matches!(e, Event::Position(..))));
    assert!(!events.iter().any(|e| matches!(e, Event::Rotation(_))));
}

#[test]
fn test_rotation_crossing_the_seam_keeps_direction() {
    init_tracing();
    let (mut editor, _recorder) = recorded_editor();
    let pivot = Vec3::new(0.0, 3.0, 0.0);
    editor
        .begin_drag_at(HandleKind::Rotate, on_circle(pivot, 3.10))
        .unwrap();
    editor.drag_to(on_circle(pivot, -3.13));
    let swept = TAU - 6.23;
    assert_abs_diff_eq!(
        editor.session().unwrap().accumulator.rotation,
        swept,
        epsilon = 1e-4
    );
    assert_abs_diff_eq!(editor.parameters().rotation_y, -swept, epsilon = 1e-4);
}

#[test]
fn test_full_turn_accumulates_past_pi() {
    let (mut editor, _recorder) = recorded_editor();
    let pivot = Vec3::new(0.0, 3.0, 0.0);
    editor.begin_drag_at(HandleKind::Rotate, on_circle(pivot, 0.0)).unwrap();
    for step in 1..=40 {
        editor.drag_to(on_circle(pivot, step as f32 * (TAU / 40.0)));
    }
    assert_abs_diff_eq!(editor.parameters().rotation_y, -TAU, epsilon = 1e-3);
    assert!(editor.parameters().rotation_y < -PI);
}

#[test]
fn test_floors_hold_for_any_drag_sequence() {
    let kinds = [
        HandleKind::EdgeResize(EdgeSide::LengthLeft),
        HandleKind::EdgeResize(EdgeSide::LengthRight),
        HandleKind::EdgeResize(EdgeSide::WidthBack),
        HandleKind::EdgeResize(EdgeSide::WidthFront),
        HandleKind::HeightAdjust(HeightTarget::Ridge),
        HandleKind::HeightAdjust(HeightTarget::Base),
    ];
    let mut rng = Lcg(7);
    let mut editor = RoofEditor::new(RoofParameters::new(2.0, 2.0, 0.5, 0.5));
    for round in 0..60 {
        let kind = kinds[round % kinds.len()];
        editor.begin_drag_at(kind, Vec3::ZERO).unwrap();
        for _ in 0..25 {
            editor.drag_by(Vec3::new(rng.next() * 4.0, rng.next() * 4.0, rng.next() * 4.0));
            let params = editor.parameters();
            assert!(params.length >= MIN_FOOTPRINT);
            assert!(params.width >= MIN_FOOTPRINT);
            assert!(params.base_height >= MIN_HEIGHT);
            assert!(params.roof_height >= MIN_HEIGHT);
            assert_eq!(editor.mesh().vertex_count(), 54);
        }
        editor.end_drag();
    }
}

#[test]
fn test_overshoot_stays_pinned() {
    let mut editor = RoofEditor::new(RoofParameters::default());
    editor
        .begin_drag_at(HandleKind::HeightAdjust(HeightTarget::Ridge), Vec3::ZERO)
        .unwrap();
    editor.drag_by(Vec3::new(0.0, -10.0, 0.0));
    assert_eq!(editor.parameters().roof_height, MIN_HEIGHT);
    for _ in 0..10 {
        editor.drag_by(Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(editor.parameters().roof_height, MIN_HEIGHT);
    }
    // Coming back up starts from the accumulated total, not from the floor
    editor.drag_by(Vec3::new(0.0, 29.0, 0.0));
    assert_abs_diff_eq!(editor.parameters().roof_height, 3.0, epsilon = 1e-4);
}

#[test]
fn test_new_drag_resnapshots_live_values() {
    let (mut editor, _recorder) = recorded_editor();
    editor
        .begin_drag_at(HandleKind::EdgeResize(EdgeSide::LengthRight), Vec3::new(5.0, 3.0, 0.0))
        .unwrap();
    editor.drag_to(Vec3::new(8.0, 3.0, 0.0));
    editor.end_drag();

    let pivot = Vec3::new(1.5, 3.0, 0.0);
    editor.begin_drag_at(HandleKind::Rotate, on_circle(pivot, 0.0)).unwrap();
    let session = editor.session().unwrap();
    assert_abs_diff_eq!(session.snapshot.length, 13.0, epsilon = 1e-5);
    assert_abs_diff_eq!(session.pivot.x, 1.5, epsilon = 1e-5);

    editor.drag_to(on_circle(pivot, 0.4));
    let params = *editor.parameters();
    assert_abs_diff_eq!(params.rotation_y, -0.4, epsilon = 1e-4);
    assert_abs_diff_eq!(params.position_x, 1.5, epsilon = 1e-5);
    assert_abs_diff_eq!(params.length, 13.0, epsilon = 1e-5);
}

#[test]
fn test_nothing_changes_after_drag_end() {
    let (mut editor, recorder) = recorded_editor();
    editor.begin_drag_at(HandleKind::FreeTranslate, Vec3::ZERO).unwrap();
    editor.drag_to(Vec3::new(2.0, 0.0, 1.0));
    editor.end_drag();
    let settled = *editor.parameters();
    recorder.take();

    assert!(!editor.drag_to(Vec3::new(9.0, 0.0, 9.0)));
    assert!(!editor.drag_by(Vec3::ONE));
    assert!(!editor.drag(Vec2::ZERO, &Parallel));
    assert_eq!(
        editor.scale_base_height(3.0),
        Err(InteractionError::NotDragging)
    );
    assert_eq!(*editor.parameters(), settled);
    assert!(recorder.take().is_empty());
}

#[test]
fn test_teardown_ends_open_drag() {
    let suspended = Arc::new(AtomicBool::new(false));
    let (mut editor, recorder) = recorded_editor();
    editor.set_camera_control(Box::new(Orbit(suspended.clone())));
    editor
        .begin_drag_at(HandleKind::HeightAdjust(HeightTarget::Base), Vec3::ZERO)
        .unwrap();
    assert!(suspended.load(Ordering::SeqCst));

    editor.teardown();
    assert!(!suspended.load(Ordering::SeqCst));
    assert!(!editor.is_dragging());
    let before = *editor.parameters();
    assert!(!editor.drag_by(Vec3::new(0.0, 5.0, 0.0)));
    assert_eq!(*editor.parameters(), before);
    assert!(recorder.take().contains(&Event::Grip(false)));
}

#[test]
fn test_dropping_editor_mid_drag_releases_camera() {
    let suspended = Arc::new(AtomicBool::new(false));
    let (mut editor, recorder) = recorded_editor();
    editor.set_camera_control(Box::new(Orbit(suspended.clone())));
    editor.begin_drag_at(HandleKind::Rotate, Vec3::new(0.0, 3.0, -5.0)).unwrap();
    drop(editor);
    assert!(!suspended.load(Ordering::SeqCst));
    assert_eq!(
        recorder.take().last(),
        Some(&Event::Hint(InteractionHint::DragEnd(HandleKind::Rotate)))
    );
}

#[test]
fn test_missed_frames_are_skipped() {
    init_tracing();
    let (mut editor, recorder) = recorded_editor();
    editor
        .begin_drag_at(HandleKind::EdgeResize(EdgeSide::WidthFront), Vec3::new(0.0, 3.0, 4.0))
        .unwrap();
    recorder.take();
    assert!(!editor.drag(Vec2::new(0.3, 0.3), &Parallel));
    assert_eq!(*editor.parameters(), RoofParameters::default());
    assert!(recorder.take().is_empty());
    assert!(editor.is_dragging());
}

#[test]
fn test_pointer_down_that_misses_starts_nothing() {
    let mut editor = RoofEditor::new(RoofParameters::default());
    assert_eq!(
        editor.begin_drag(HandleKind::EdgeResize(EdgeSide::LengthLeft), Vec2::ZERO, &Parallel),
        Err(InteractionError::RayMissed)
    );
    assert!(!editor.is_dragging());
}

#[test]
fn test_camera_driven_edge_drag() {
    init_tracing();
    let camera = PickCamera::new(Vec3::new(0.0, 15.0, 15.0), Vec3::new(0.0, 3.0, 0.0), 1.0);
    let (mut editor, recorder) = recorded_editor();

    let grip = camera.world_to_ndc(Vec3::new(5.0, 3.0, 0.0));
    let picked = editor.pointer_down(grip, &camera).unwrap();
    assert_eq!(picked, Some(HandleKind::EdgeResize(EdgeSide::LengthRight)));
    assert_eq!(
        recorder.take()[..2],
        [
            Event::Grip(true),
            Event::Hint(InteractionHint::DragStart(HandleKind::EdgeResize(EdgeSide::LengthRight)))
        ]
    );

    let target = camera.world_to_ndc(Vec3::new(7.0, 3.0, 0.0));
    assert!(editor.drag(target, &camera));
    let params = *editor.parameters();
    assert_abs_diff_eq!(params.length, 12.0, epsilon = 1e-2);
    assert_abs_diff_eq!(params.position_x, 1.0, epsilon = 1e-2);
    assert!(editor.end_drag());
}

#[test]
fn test_camera_driven_body_drag_translates() {
    let camera = PickCamera::new(Vec3::new(0.0, 15.0, 15.0), Vec3::new(0.0, 3.0, 0.0), 1.0);
    let mut editor = RoofEditor::new(RoofParameters::default());

    let body = camera.world_to_ndc(Vec3::new(2.0, 0.0, 2.0));
    assert_eq!(
        editor.pointer_down(body, &camera).unwrap(),
        Some(HandleKind::FreeTranslate)
    );
    // The grab point lies on the ground plane, not on the roof surface
    let start = editor.session().unwrap().start_point;
    assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-4);

    let moved = camera.world_to_ndc(start + Vec3::new(3.0, 0.0, -1.0));
    editor.drag(moved, &camera);
    let params = *editor.parameters();
    assert_abs_diff_eq!(params.position_x, 3.0, epsilon = 1e-2);
    assert_abs_diff_eq!(params.position_z, -1.0, epsilon = 1e-2);
    assert_eq!(params.length, 10.0);
}

#[test]
fn test_hover_reports_changes_only() {
    let camera = PickCamera::new(Vec3::new(0.0, 15.0, 15.0), Vec3::new(0.0, 3.0, 0.0), 1.0);
    let (mut editor, recorder) = recorded_editor();
    let rotate = camera.world_to_ndc(Vec3::new(0.0, 3.0, -5.0));

    assert_eq!(editor.hover(rotate, &camera), Some(HandleKind::Rotate));
    assert_eq!(editor.hover(rotate, &camera), Some(HandleKind::Rotate));
    assert_eq!(editor.hover(Vec2::new(0.95, 0.95), &camera), None);
    assert_eq!(
        recorder.take(),
        vec![
            Event::Hint(InteractionHint::HoverStart(HandleKind::Rotate)),
            Event::Hint(InteractionHint::HoverEnd(HandleKind::Rotate)),
        ]
    );
}

#[test]
fn test_external_updates_notify_and_clamp() {
    let (mut editor, recorder) = recorded_editor();
    editor
        .set_parameters(RoofParameters::new(10.0, 8.0, -1.0, 6.0))
        .unwrap();
    assert_eq!(
        recorder.take(),
        vec![Event::RoofHeight(6.0), Event::BaseHeight(MIN_HEIGHT), Event::Parameters]
    );
    // Same values again is a no-op
    editor
        .set_parameters(RoofParameters::new(10.0, 8.0, -1.0, 6.0))
        .unwrap();
    assert!(recorder.take().is_empty());
}
