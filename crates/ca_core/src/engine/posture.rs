//! Coarse body-orientation labeling from extracted features.

use serde::{Deserialize, Serialize};

use super::features::{Feature, FeatureMap};
use crate::models::Landmark;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Posture {
    LeaningRight,
    LeaningLeft,
    LeaningBack,
    Kneeling,
    Upright,
}

/// Lean threshold in pixels for nose-vs-neck horizontal offset.
const LEAN_THRESHOLD: f32 = 20.0;
/// Vertical nose-vs-neck offset below which the player is leaning back.
const BACK_LEAN_THRESHOLD: f32 = -15.0;
/// Knee angle below which a leg counts as bent into a kneel.
const KNEEL_KNEE_ANGLE: f32 = 90.0;

/// Map a feature map to one posture label.
///
/// First match wins: horizontal lean, then backward lean, then kneel.
/// Checks whose features are missing are skipped, so a sparse map degrades
/// to `Upright`.
pub fn determine_posture(features: &FeatureMap) -> Posture {
    let nose_x = features.get(&Feature::RelX(Landmark::Nose));
    let neck_x = features.get(&Feature::RelX(Landmark::Neck));
    if let (Some(nose_x), Some(neck_x)) = (nose_x, neck_x) {
        let lean = nose_x - neck_x;
        if lean > LEAN_THRESHOLD {
            return Posture::LeaningRight;
        }
        if lean < -LEAN_THRESHOLD {
            return Posture::LeaningLeft;
        }
    }

    let nose_y = features.get(&Feature::RelY(Landmark::Nose));
    let neck_y = features.get(&Feature::RelY(Landmark::Neck));
    if let (Some(nose_y), Some(neck_y)) = (nose_y, neck_y) {
        if nose_y - neck_y < BACK_LEAN_THRESHOLD {
            return Posture::LeaningBack;
        }
    }

    for knee in [Feature::RightKneeAngle, Feature::LeftKneeAngle] {
        if let Some(&angle) = features.get(&knee) {
            if angle < KNEEL_KNEE_ANGLE {
                return Posture::Kneeling;
            }
        }
    }

    Posture::Upright
}
