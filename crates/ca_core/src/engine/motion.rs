//! Wrist-track motion analysis over a short pose history.

use serde::{Deserialize, Serialize};

use crate::models::{Landmark, Pose};

/// Frames of history considered by default.
pub const DEFAULT_WINDOW: usize = 5;

/// Pixel displacement below which movement is treated as noise.
const MOVEMENT_THRESHOLD: f32 = 30.0;

/// Minimum historical wrist samples needed for swing detection.
const MIN_SWING_SAMPLES: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    None,
    /// Down the pitch, toward the bowler (increasing y in image space).
    Forward,
    Backward,
    Sideways,
}

/// Displacement, dominant direction, and swing flag for the bat hand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct MotionResult {
    pub direction: Direction,
    /// (dx, dy) from the oldest windowed wrist to the current one, pixels.
    pub displacement: (f32, f32),
    pub is_swing: bool,
}

/// Analyze bat-hand motion over the most recent `window_size` poses.
///
/// Tracks the right wrist. When the current pose has no wrist, or no pose
/// in the window has one, the result is the neutral default (no direction,
/// zero displacement, no swing).
///
/// A swing is an oscillation: among the velocity vectors between
/// consecutive historical wrist samples, some adjacent pair reverses sign
/// on either axis. The scan stops at the first reversal.
pub fn calculate_motion(current: &Pose, history: &[Pose], window_size: usize) -> MotionResult {
    let start = history.len().saturating_sub(window_size);
    let window = &history[start..];

    let current_wrist = match current.point(Landmark::RightWrist) {
        Some(point) => point,
        None => return MotionResult::default(),
    };

    let prev_wrists: Vec<(f32, f32)> =
        window.iter().filter_map(|pose| pose.point(Landmark::RightWrist)).collect();
    let start_wrist = match prev_wrists.first() {
        Some(&point) => point,
        None => return MotionResult::default(),
    };

    let dx = current_wrist.0 - start_wrist.0;
    let dy = current_wrist.1 - start_wrist.1;

    let direction = if dx.abs() <= MOVEMENT_THRESHOLD && dy.abs() <= MOVEMENT_THRESHOLD {
        Direction::None
    } else if dx.abs() > dy.abs() {
        Direction::Sideways
    } else if dy > 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    };

    let mut is_swing = false;
    if prev_wrists.len() >= MIN_SWING_SAMPLES {
        let velocities: Vec<(f32, f32)> =
            prev_wrists.windows(2).map(|pair| (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1)).collect();
        for pair in velocities.windows(2) {
            if pair[0].0 * pair[1].0 < 0.0 || pair[0].1 * pair[1].1 < 0.0 {
                is_swing = true;
                break;
            }
        }
    }

    MotionResult { direction, displacement: (dx, dy), is_swing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoundingBox, Keypoint};
    use fxhash::FxHashMap;

    fn wrist_pose(x: f32, y: f32) -> Pose {
        let mut keypoints = FxHashMap::default();
        keypoints.insert(Landmark::RightWrist, Keypoint::new(x, y, 0.8));
        Pose::new(keypoints, BoundingBox::default())
    }

    fn wristless_pose() -> Pose {
        let mut keypoints = FxHashMap::default();
        keypoints.insert(Landmark::Nose, Keypoint::new(0.0, 0.0, 0.8));
        Pose::new(keypoints, BoundingBox::default())
    }

    #[test]
    fn test_no_history_wrists_is_neutral() {
        let result = calculate_motion(&wrist_pose(10.0, 10.0), &[wristless_pose()], DEFAULT_WINDOW);
        assert_eq!(result, MotionResult::default());
    }

    #[test]
    fn test_missing_current_wrist_is_neutral() {
        let result =
            calculate_motion(&wristless_pose(), &[wrist_pose(0.0, 0.0)], DEFAULT_WINDOW);
        assert_eq!(result, MotionResult::default());
    }

    #[test]
    fn test_sideways_dominant_axis() {
        let history = vec![wrist_pose(0.0, 0.0)];
        let result = calculate_motion(&wrist_pose(40.0, 5.0), &history, DEFAULT_WINDOW);
        assert_eq!(result.direction, Direction::Sideways);
        assert_eq!(result.displacement, (40.0, 5.0));
    }

    #[test]
    fn test_backward_on_upward_movement() {
        let history = vec![wrist_pose(0.0, 0.0)];
        let result = calculate_motion(&wrist_pose(5.0, -40.0), &history, DEFAULT_WINDOW);
        assert_eq!(result.direction, Direction::Backward);
    }

    #[test]
    fn test_forward_on_downward_movement() {
        let history = vec![wrist_pose(0.0, 0.0)];
        let result = calculate_motion(&wrist_pose(5.0, 40.0), &history, DEFAULT_WINDOW);
        assert_eq!(result.direction, Direction::Forward);
    }

    #[test]
    fn test_small_movement_is_none() {
        let history = vec![wrist_pose(0.0, 0.0)];
        let result = calculate_motion(&wrist_pose(5.0, 5.0), &history, DEFAULT_WINDOW);
        assert_eq!(result.direction, Direction::None);
    }

    #[test]
    fn test_swing_detects_reversal() {
        let history = vec![
            wrist_pose(0.0, 100.0),
            wrist_pose(30.0, 100.0),
            wrist_pose(10.0, 100.0),
            wrist_pose(40.0, 100.0),
        ];
        let result = calculate_motion(&wrist_pose(50.0, 100.0), &history, DEFAULT_WINDOW);
        assert!(result.is_swing);
        assert_eq!(result.direction, Direction::Sideways);
    }

    #[test]
    fn test_monotonic_track_is_not_swing() {
        let history = vec![
            wrist_pose(0.0, 0.0),
            wrist_pose(10.0, 10.0),
            wrist_pose(20.0, 20.0),
            wrist_pose(30.0, 30.0),
        ];
        let result = calculate_motion(&wrist_pose(60.0, 40.0), &history, DEFAULT_WINDOW);
        assert!(!result.is_swing);
    }

    #[test]
    fn test_two_samples_never_swing() {
        let history = vec![wrist_pose(0.0, 0.0), wrist_pose(50.0, 0.0)];
        let result = calculate_motion(&wrist_pose(10.0, 0.0), &history, DEFAULT_WINDOW);
        assert!(!result.is_swing);
    }

    #[test]
    fn test_window_clips_old_history() {
        // Oldest entry outside the 5-pose window must not feed displacement.
        let mut history = vec![wrist_pose(1000.0, 1000.0)];
        history.extend((0..5).map(|i| wrist_pose(i as f32, 0.0)));
        let result = calculate_motion(&wrist_pose(10.0, 0.0), &history, DEFAULT_WINDOW);
        assert_eq!(result.displacement, (10.0, 0.0));
        assert_eq!(result.direction, Direction::None);
    }
}
