//! Dimension label layout
//!
//! Places the nine on-screen readouts (footprint length and width on the
//! roof-base edges, the four hips and the ridge). The text widget that
//! renders them is external; this module only decides where each label
//! goes, how it is oriented and what it says.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::measure::{RoofEdge, hip_edges, ridge_edge};
use crate::params::RoofParameters;

/// What a label measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelTarget {
    /// Length along the front roof-base edge
    LengthFront,
    /// Length along the back roof-base edge
    LengthBack,
    /// Width along the left roof-base edge
    WidthLeft,
    /// Width along the right roof-base edge
    WidthRight,
    /// A hip or ridge edge
    Edge(RoofEdge),
}

/// Label layout settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelLayout {
    /// Unit suffix appended to every value
    pub unit: String,
    /// Decimals shown for length and width
    pub footprint_precision: usize,
    /// Decimals shown for hip and ridge edges
    pub edge_precision: usize,
    /// Inward offset of footprint labels from their edge
    pub footprint_inset: f32,
    /// Vertical lift of hip labels
    pub hip_lift: f32,
    /// Shift of the ridge label toward the back
    pub ridge_back_shift: f32,
    /// Vertical drop of the ridge label
    pub ridge_drop: f32,
    /// Scale of footprint and ridge labels
    pub label_scale: f32,
    /// Scale of hip labels
    pub hip_label_scale: f32,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            unit: "m".to_string(),
            footprint_precision: 1,
            edge_precision: 2,
            footprint_inset: 0.3,
            hip_lift: 0.2,
            ridge_back_shift: 0.2,
            ridge_drop: 0.3,
            label_scale: 0.5,
            hip_label_scale: 0.4,
        }
    }
}

/// A positioned dimension readout in the roof-local frame
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLabel {
    /// What is measured
    pub target: LabelTarget,
    /// Anchor point, offsets already applied
    pub position: Vec3,
    /// Measured value
    pub value: f32,
    /// Decimals to display
    pub precision: usize,
    /// Unit suffix
    pub unit: String,
    /// Euler rotation (x, y, z) in radians
    pub rotation: Vec3,
    /// Uniform scale
    pub scale: f32,
}

impl DimensionLabel {
    /// Formatted readout, e.g. `"6.0m"`
    pub fn text(&self) -> String {
        format!("{:.*}{}", self.precision, self.value, self.unit)
    }
}

/// Lay out every dimension label for the given parameters
pub fn dimension_labels(params: &RoofParameters, layout: &LabelLayout) -> Vec<DimensionLabel> {
    let y = params.base_height;
    let hx = params.length / 2.0;
    let hz = params.width / 2.0;
    let inset = layout.footprint_inset;
    let flat = Vec3::new(-FRAC_PI_2, 0.0, 0.0);
    let flat_turned = Vec3::new(-FRAC_PI_2, 0.0, FRAC_PI_2);

    let footprint = |target, position, value, rotation| DimensionLabel {
        target,
        position,
        value,
        precision: layout.footprint_precision,
        unit: layout.unit.clone(),
        rotation,
        scale: layout.label_scale,
    };

    let mut labels = vec![
        footprint(
            LabelTarget::LengthFront,
            Vec3::new(0.0, y, hz - inset),
            params.length,
            flat,
        ),
        footprint(
            LabelTarget::LengthBack,
            Vec3::new(0.0, y, -hz + inset),
            params.length,
            flat,
        ),
        footprint(
            LabelTarget::WidthLeft,
            Vec3::new(-hx + inset, y, 0.0),
            params.width,
            flat_turned,
        ),
        footprint(
            LabelTarget::WidthRight,
            Vec3::new(hx - inset, y, 0.0),
            params.width,
            flat_turned,
        ),
    ];

    labels.extend(hip_edges(params).into_iter().map(|hip| DimensionLabel {
        target: LabelTarget::Edge(hip.edge),
        position: hip.midpoint + Vec3::new(0.0, layout.hip_lift, 0.0),
        value: hip.length,
        precision: layout.edge_precision,
        unit: layout.unit.clone(),
        rotation: Vec3::new(-hip.pitch, -hip.yaw, 0.0),
        scale: layout.hip_label_scale,
    }));

    let ridge = ridge_edge(params);
    labels.push(DimensionLabel {
        target: LabelTarget::Edge(RoofEdge::Ridge),
        position: ridge.midpoint + Vec3::new(0.0, -layout.ridge_drop, -layout.ridge_back_shift),
        value: ridge.length,
        precision: layout.edge_precision,
        unit: layout.unit.clone(),
        rotation: flat,
        scale: layout.label_scale,
    });

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn sample() -> RoofParameters {
        RoofParameters::new(6.0, 4.0, 3.5, 2.0)
            .with_ridge(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0))
    }

    #[test]
    fn test_nine_labels() {
        let labels = dimension_labels(&sample(), &LabelLayout::default());
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0].target, LabelTarget::LengthFront);
        assert_eq!(labels[8].target, LabelTarget::Edge(RoofEdge::Ridge));
    }

    #[test]
    fn test_footprint_labels_sit_inside_edges() {
        let labels = dimension_labels(&sample(), &LabelLayout::default());
        assert_relative_eq!(labels[0].position.z, 1.7, epsilon = 1e-6);
        assert_relative_eq!(labels[1].position.z, -1.7, epsilon = 1e-6);
        assert_relative_eq!(labels[2].position.x, -2.7, epsilon = 1e-6);
        assert_relative_eq!(labels[3].position.x, 2.7, epsilon = 1e-6);
        assert_eq!(labels[0].text(), "6.0m");
        assert_eq!(labels[2].text(), "4.0m");
    }

    #[test]
    fn test_hip_labels_follow_slope() {
        let params = sample();
        let labels = dimension_labels(&params, &LabelLayout::default());
        let hip = &labels[4];
        let measured = crate::measure::hip_edges(&params)[0];
        assert_eq!(hip.target, LabelTarget::Edge(RoofEdge::BackLeftHip));
        assert_relative_eq!(hip.position.y, measured.midpoint.y + 0.2, epsilon = 1e-6);
        assert_eq!(hip.rotation, Vec3::new(-measured.pitch, -measured.yaw, 0.0));
        assert_eq!(hip.text(), "3.46m");
    }

    #[test]
    fn test_ridge_label_lies_flat() {
        let labels = dimension_labels(&sample(), &LabelLayout::default());
        let ridge = &labels[8];
        assert_relative_eq!(ridge.position.y, 5.2, epsilon = 1e-6);
        assert_relative_eq!(ridge.position.z, -0.2, epsilon = 1e-6);
        assert_eq!(ridge.text(), "2.00m");
    }
}
