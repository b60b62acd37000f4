//! Notifications sent to the owning application

use roof_core::RoofParameters;

use crate::handle::HandleKind;

/// Cursor-level hint about what the pointer is doing.
///
/// Purely cosmetic; the editor never reads these back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionHint {
    HoverStart(HandleKind),
    HoverEnd(HandleKind),
    DragStart(HandleKind),
    DragEnd(HandleKind),
}

/// Receives parameter changes from the editor.
///
/// Every method has an empty default so owners implement only what they
/// display. Calls happen synchronously inside the editor method that caused
/// them.
pub trait RoofObserver: Send {
    /// Length or width changed
    fn on_dimensions_change(&mut self, _length: f32, _width: f32) {}

    /// Ridge height above the base changed
    fn on_roof_height_change(&mut self, _height: f32) {}

    /// Wall height changed
    fn on_base_height_change(&mut self, _height: f32) {}

    /// Rotation about Y changed (radians)
    fn on_rotation_change(&mut self, _angle: f32) {}

    /// Footprint centre moved
    fn on_position_change(&mut self, _x: f32, _z: f32) {}

    /// A grip drag started (`true`) or ended (`false`)
    fn on_grip_interaction_change(&mut self, _active: bool) {}

    /// Any parameter changed; fired after the specific callbacks
    fn on_parameters_change(&mut self, _params: &RoofParameters) {}

    /// Hover and drag hints
    fn on_interaction_hint(&mut self, _hint: InteractionHint) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RoofObserver for NoopObserver {}

/// Fire the field-specific callbacks for whatever differs between two
/// parameter sets, then the catch-all.
pub(crate) fn notify_changes(
    observer: &mut dyn RoofObserver,
    before: &RoofParameters,
    after: &RoofParameters,
) {
    if before == after {
        return;
    }
    if before.length != after.length || before.width != after.width {
        observer.on_dimensions_change(after.length, after.width);
    }
    if before.roof_height != after.roof_height {
        observer.on_roof_height_change(after.roof_height);
    }
    if before.base_height != after.base_height {
        observer.on_base_height_change(after.base_height);
    }
    if before.rotation_y != after.rotation_y {
        observer.on_rotation_change(after.rotation_y);
    }
    if before.position_x != after.position_x || before.position_z != after.position_z {
        observer.on_position_change(after.position_x, after.position_z);
    }
    observer.on_parameters_change(after);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls(Vec<&'static str>);

    impl RoofObserver for Calls {
        fn on_dimensions_change(&mut self, _: f32, _: f32) {
            self.0.push("dimensions");
        }
        fn on_rotation_change(&mut self, _: f32) {
            self.0.push("rotation");
        }
        fn on_position_change(&mut self, _: f32, _: f32) {
            self.0.push("position");
        }
        fn on_parameters_change(&mut self, _: &RoofParameters) {
            self.0.push("parameters");
        }
    }

    #[test]
    fn test_only_changed_fields_fire() {
        let before = RoofParameters::default();
        let after = RoofParameters {
            length: 12.0,
            position_x: 1.0,
            ..before
        };
        let mut calls = Calls::default();
        notify_changes(&mut calls, &before, &after);
        assert_eq!(calls.0, vec!["dimensions", "position", "parameters"]);
    }

    #[test]
    fn test_identical_is_silent() {
        let params = RoofParameters::default();
        let mut calls = Calls::default();
        notify_changes(&mut calls, &params, &params);
        assert!(calls.0.is_empty());
    }
}
