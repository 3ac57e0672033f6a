//! Feature extraction: pose snapshot -> flat numeric feature map.

use fxhash::FxHashMap;

use super::geometry::angle_at;
use crate::models::{Landmark, Pose};

/// A derived numeric signal computed from one pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    RightElbowAngle,
    LeftElbowAngle,
    RightKneeAngle,
    LeftKneeAngle,
    /// Horizontal offset of a landmark relative to the neck, pixels.
    RelX(Landmark),
    /// Vertical offset of a landmark relative to the neck, pixels.
    RelY(Landmark),
}

pub type FeatureMap = FxHashMap<Feature, f32>;

/// Joint angles and their constituent landmarks: (feature, outer, vertex, outer).
const JOINT_ANGLES: [(Feature, Landmark, Landmark, Landmark); 4] = [
    (
        Feature::RightElbowAngle,
        Landmark::RightShoulder,
        Landmark::RightElbow,
        Landmark::RightWrist,
    ),
    (
        Feature::LeftElbowAngle,
        Landmark::LeftShoulder,
        Landmark::LeftElbow,
        Landmark::LeftWrist,
    ),
    (
        Feature::RightKneeAngle,
        Landmark::RightHip,
        Landmark::RightKnee,
        Landmark::RightAnkle,
    ),
    (
        Feature::LeftKneeAngle,
        Landmark::LeftHip,
        Landmark::LeftKnee,
        Landmark::LeftAnkle,
    ),
];

/// Extract classification features from one pose.
///
/// Each joint angle is present only when all three of its landmarks were
/// detected and the geometry is non-degenerate. Relative offsets are
/// computed for every landmark except the neck, anchored on the neck, and
/// only when both nose and neck are present. Missing landmarks silently
/// produce missing features.
pub fn extract_features(pose: &Pose) -> FeatureMap {
    let mut features = FeatureMap::default();

    for (feature, outer_a, vertex, outer_c) in JOINT_ANGLES {
        if let Some([a, b, c]) = pose.points([outer_a, vertex, outer_c]) {
            if let Some(angle) = angle_at(a, b, c) {
                features.insert(feature, angle);
            }
        }
    }

    // The neck anchors body-relative positions; the nose check guards
    // against torso-less partial detections.
    if pose.point(Landmark::Nose).is_some() {
        if let Some((neck_x, neck_y)) = pose.point(Landmark::Neck) {
            for landmark in Landmark::ALL {
                if landmark == Landmark::Neck {
                    continue;
                }
                if let Some((x, y)) = pose.point(landmark) {
                    features.insert(Feature::RelX(landmark), x - neck_x);
                    features.insert(Feature::RelY(landmark), y - neck_y);
                }
            }
        }
    }

    features
}
