//! Rule-based shot classification.

use super::features::{extract_features, FeatureMap};
use super::motion::{calculate_motion, MotionResult, DEFAULT_WINDOW};
use super::posture::{determine_posture, Posture};
use super::shot_rules::{ShotRule, SHOT_CATALOG};
use crate::models::{Pose, ShotType};

/// Score per satisfied angle window.
const ANGLE_POINTS: i32 = 1;
/// Score for a matching posture.
const POSTURE_POINTS: i32 = 2;
/// Score for a swing in the shot's compatible direction.
const SWING_POINTS: i32 = 2;
/// Minimum winning score; below this the frame is "no shot".
const SCORE_THRESHOLD: i32 = 2;

fn score_rule(
    rule: &ShotRule,
    features: &FeatureMap,
    posture: Posture,
    motion: Option<&MotionResult>,
) -> i32 {
    let mut score = 0;

    for (feature, (min, max)) in rule.angle_windows {
        if let Some(&angle) = features.get(feature) {
            if (*min..=*max).contains(&angle) {
                score += ANGLE_POINTS;
            }
        }
    }

    if posture == rule.posture {
        score += POSTURE_POINTS;
    }

    if let Some(motion) = motion {
        if motion.is_swing && rule.shot.swing_direction() == Some(motion.direction) {
            score += SWING_POINTS;
        }
    }

    score
}

/// Classify the shot being played in the current pose.
///
/// Scores every catalog shot against the extracted features, the inferred
/// posture, and (when history is available) the wrist motion, then picks
/// the highest-scoring shot. Ties resolve to the shot defined first in the
/// catalog. Returns `None` when even the best score stays below the
/// detection threshold. Deterministic: no randomness on this path.
pub fn classify_shot(pose: &Pose, history: &[Pose]) -> Option<ShotType> {
    let features = extract_features(pose);
    let posture = determine_posture(&features);
    let motion = if history.is_empty() {
        None
    } else {
        Some(calculate_motion(pose, history, DEFAULT_WINDOW))
    };

    let mut best: Option<(ShotType, i32)> = None;
    for rule in &SHOT_CATALOG {
        let score = score_rule(rule, &features, posture, motion.as_ref());
        // Strict comparison keeps the first catalog entry on ties.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((rule.shot, score));
        }
    }

    match best {
        Some((shot, score)) if score >= SCORE_THRESHOLD => {
            log::debug!("classified {} with score {}", shot, score);
            Some(shot)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoundingBox, Keypoint, Landmark};
    use fxhash::FxHashMap;

    fn pose_with(points: &[(Landmark, f32, f32)]) -> Pose {
        let mut keypoints = FxHashMap::default();
        for &(landmark, x, y) in points {
            keypoints.insert(landmark, Keypoint::new(x, y, 0.9));
        }
        Pose::new(keypoints, BoundingBox::default())
    }

    /// Upright batsman with right elbow ~157° and left elbow ~120°: inside
    /// the straight-drive windows, outside the defensive-shot left window.
    fn straight_drive_pose() -> Pose {
        pose_with(&[
            (Landmark::Nose, 150.0, -50.0),
            (Landmark::Neck, 150.0, 0.0),
            (Landmark::RightShoulder, 100.0, 0.0),
            (Landmark::RightElbow, 100.0, 80.0),
            (Landmark::RightWrist, 131.0, 154.0),
            (Landmark::LeftShoulder, 200.0, 0.0),
            (Landmark::LeftElbow, 200.0, 80.0),
            (Landmark::LeftWrist, 269.0, 120.0),
            (Landmark::RightHip, 100.0, 200.0),
            (Landmark::RightKnee, 100.0, 300.0),
            (Landmark::RightAnkle, 100.0, 400.0),
            (Landmark::LeftHip, 200.0, 200.0),
            (Landmark::LeftKnee, 200.0, 300.0),
            (Landmark::LeftAnkle, 200.0, 400.0),
        ])
    }

    /// Kneeling pose: right knee bent to ~80°, inside the sweep windows.
    fn sweep_pose() -> Pose {
        pose_with(&[
            (Landmark::RightHip, 100.0, 200.0),
            (Landmark::RightKnee, 100.0, 300.0),
            (Landmark::RightAnkle, 198.0, 283.0),
        ])
    }

    #[test]
    fn test_straight_drive_detected() {
        assert_eq!(classify_shot(&straight_drive_pose(), &[]), Some(ShotType::StraightDrive));
    }

    #[test]
    fn test_sweep_from_kneel() {
        assert_eq!(classify_shot(&sweep_pose(), &[]), Some(ShotType::SweepShot));
    }

    #[test]
    fn test_empty_pose_defaults_to_upright_straight_drive() {
        // A pose with no usable features still infers an upright posture,
        // and the posture match alone reaches the detection threshold for
        // the first upright entry in the catalog.
        assert_eq!(classify_shot(&Pose::default(), &[]), Some(ShotType::StraightDrive));
    }

    #[test]
    fn test_deterministic() {
        let pose = straight_drive_pose();
        let first = classify_shot(&pose, &[]);
        for _ in 0..5 {
            assert_eq!(classify_shot(&pose, &[]), first);
        }
    }

    #[test]
    fn test_upright_tie_breaks_to_first_catalog_entry() {
        // Upright posture with no usable angles: straight drive, cut shot,
        // defensive shot, flick shot and square drive all score 2 from the
        // posture match alone. The catalog-first shot must win.
        let pose = pose_with(&[
            (Landmark::RightHip, 100.0, 200.0),
            (Landmark::RightKnee, 100.0, 300.0),
            (Landmark::RightAnkle, 100.0, 400.0),
        ]);
        assert_eq!(classify_shot(&pose, &[]), Some(ShotType::StraightDrive));
    }

    #[test]
    fn test_swing_bonus_prefers_direction_group() {
        // Sideways oscillating wrist: the cut shot picks up the swing bonus
        // on top of the shared upright posture score.
        let mut base: Vec<(Landmark, f32, f32)> = vec![
            (Landmark::RightHip, 300.0, 200.0),
            (Landmark::RightKnee, 300.0, 300.0),
            (Landmark::RightAnkle, 300.0, 400.0),
        ];
        let history: Vec<Pose> = [(0.0, 100.0), (30.0, 100.0), (10.0, 100.0), (40.0, 100.0)]
            .iter()
            .map(|&(x, y)| {
                let mut points = base.clone();
                points.push((Landmark::RightWrist, x, y));
                pose_with(&points)
            })
            .collect();
        base.push((Landmark::RightWrist, 80.0, 100.0));
        let current = pose_with(&base);

        assert_eq!(classify_shot(&current, &history), Some(ShotType::CutShot));
    }
}
