//! Capability seams for the upstream detectors, plus the simulated
//! stand-ins used until a real computer-vision backend is wired in.

use fxhash::FxHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::models::{
    BoundaryKind, BoundingBox, DismissalKind, EventKind, Keypoint, Landmark, MatchEvent, Pose,
    ShotType,
};

/// Produces one pose per analyzed frame. Implemented by the detection
/// backend; the classifier only ever sees the resulting [`Pose`] values.
pub trait PoseSource {
    /// Pose for the given frame, or `None` when no player was detected.
    fn next_pose(&mut self, frame: u32) -> Option<Pose>;
}

/// Produces the non-shot match events (boundaries, wickets) for a clip.
pub trait EventSource {
    /// All detected events for the clip, in no particular order; the
    /// commentary composer sorts by timestamp.
    fn detect_events(&mut self) -> Vec<MatchEvent>;
}

/// Proportional offsets and confidence of the stand-in batsman skeleton,
/// expressed as fractions of the frame dimensions.
const SKELETON: [(Landmark, f32, f32, f32); 14] = [
    (Landmark::Nose, 0.5, 0.2, 0.9),
    (Landmark::Neck, 0.5, 0.25, 0.9),
    (Landmark::RightShoulder, 0.55, 0.3, 0.8),
    (Landmark::RightElbow, 0.6, 0.4, 0.8),
    (Landmark::RightWrist, 0.65, 0.5, 0.7),
    (Landmark::LeftShoulder, 0.45, 0.3, 0.8),
    (Landmark::LeftElbow, 0.4, 0.4, 0.8),
    (Landmark::LeftWrist, 0.35, 0.5, 0.7),
    (Landmark::RightHip, 0.55, 0.6, 0.7),
    (Landmark::RightKnee, 0.55, 0.75, 0.6),
    (Landmark::RightAnkle, 0.55, 0.9, 0.6),
    (Landmark::LeftHip, 0.45, 0.6, 0.7),
    (Landmark::LeftKnee, 0.45, 0.75, 0.6),
    (Landmark::LeftAnkle, 0.45, 0.9, 0.6),
];

/// Fraction of each frame dimension used as jitter sigma.
const JITTER_FRACTION: f32 = 0.05;

/// Stand-in pose detector: a fixed batsman skeleton scaled to the frame,
/// with Gaussian per-keypoint jitter so consecutive frames differ.
pub struct SimulatedPoseSource {
    width: f32,
    height: f32,
    rng: ChaCha8Rng,
}

impl SimulatedPoseSource {
    pub fn new(width: f32, height: f32, rng: ChaCha8Rng) -> Self {
        Self { width, height, rng }
    }
}

impl PoseSource for SimulatedPoseSource {
    fn next_pose(&mut self, _frame: u32) -> Option<Pose> {
        let jitter_x = Normal::new(0.0, self.width * JITTER_FRACTION).ok()?;
        let jitter_y = Normal::new(0.0, self.height * JITTER_FRACTION).ok()?;

        let mut keypoints = FxHashMap::default();
        for (landmark, fx, fy, confidence) in SKELETON {
            let x = (fx * self.width + jitter_x.sample(&mut self.rng)).clamp(0.0, self.width);
            let y = (fy * self.height + jitter_y.sample(&mut self.rng)).clamp(0.0, self.height);
            keypoints.insert(landmark, Keypoint::new(x, y, confidence));
        }

        let bbox = BoundingBox { x: 0.0, y: 0.0, width: self.width, height: self.height };
        Some(Pose::new(keypoints, bbox))
    }
}

/// Frames per second assumed when mapping timestamps to frame indices.
const FPS: f32 = 30.0;

/// Stand-in event detector: scatters boundary, wicket, and shot events
/// over the clip at random timestamps with plausible confidences.
pub struct SimulatedEventSource {
    /// Clip length in seconds.
    match_length: f32,
    rng: ChaCha8Rng,
}

impl SimulatedEventSource {
    pub fn new(match_length: f32, rng: ChaCha8Rng) -> Self {
        Self { match_length, rng }
    }

    fn push_events<T: Copy>(
        &mut self,
        events: &mut Vec<MatchEvent>,
        count: (usize, usize),
        window: (f32, f32),
        confidence: (f32, f32),
        subtypes: &[T],
        make: impl Fn(T) -> EventKind,
    ) {
        // Short clips cannot fit every category's timestamp window; an
        // empty range would panic in gen_range, so skip the category.
        if window.1 <= window.0 {
            log::debug!("clip too short for window {:?}, skipping category", window);
            return;
        }
        let n = self.rng.gen_range(count.0..=count.1);
        for _ in 0..n {
            let timestamp = self.rng.gen_range(window.0..window.1);
            let subtype = match subtypes.choose(&mut self.rng) {
                Some(&subtype) => subtype,
                None => continue,
            };
            events.push(MatchEvent::new(
                make(subtype),
                self.rng.gen_range(confidence.0..confidence.1),
                timestamp,
                (timestamp * FPS) as u32,
            ));
        }
    }
}

impl EventSource for SimulatedEventSource {
    fn detect_events(&mut self) -> Vec<MatchEvent> {
        let len = self.match_length;
        let mut events = Vec::new();

        self.push_events(
            &mut events,
            (4, 8),
            (10.0, len - 10.0),
            (0.7, 0.95),
            &[BoundaryKind::Four, BoundaryKind::Six],
            EventKind::Boundary,
        );
        self.push_events(
            &mut events,
            (1, 3),
            (30.0, len - 20.0),
            (0.6, 0.9),
            &[
                DismissalKind::Bowled,
                DismissalKind::Caught,
                DismissalKind::Lbw,
                DismissalKind::RunOut,
            ],
            EventKind::Wicket,
        );
        self.push_events(
            &mut events,
            (10, 20),
            (5.0, len - 5.0),
            (0.5, 0.85),
            &[
                ShotType::StraightDrive,
                ShotType::CoverDrive,
                ShotType::CutShot,
                ShotType::PullShot,
                ShotType::HookShot,
                ShotType::SweepShot,
                ShotType::DefensiveShot,
                ShotType::FlickShot,
            ],
            EventKind::ShotPlayed,
        );

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_simulated_pose_covers_all_landmarks() {
        let mut source = SimulatedPoseSource::new(640.0, 480.0, ChaCha8Rng::seed_from_u64(1));
        let pose = source.next_pose(0).unwrap();
        assert_eq!(pose.keypoints.len(), 14);
        for keypoint in pose.keypoints.values() {
            assert!((0.0..=640.0).contains(&keypoint.x));
            assert!((0.0..=480.0).contains(&keypoint.y));
            assert!((0.0..=1.0).contains(&keypoint.confidence));
        }
    }

    #[test]
    fn test_simulated_poses_vary_between_frames() {
        let mut source = SimulatedPoseSource::new(640.0, 480.0, ChaCha8Rng::seed_from_u64(2));
        let first = source.next_pose(0).unwrap();
        let second = source.next_pose(1).unwrap();
        assert_ne!(first.point(Landmark::RightWrist), second.point(Landmark::RightWrist));
    }

    #[test]
    fn test_simulated_events_within_clip() {
        let mut source = SimulatedEventSource::new(300.0, ChaCha8Rng::seed_from_u64(3));
        let events = source.detect_events();
        assert!(events.len() >= 15 && events.len() <= 31);
        for event in &events {
            assert!(event.timestamp >= 5.0 && event.timestamp <= 295.0);
            assert!(event.confidence >= 0.5 && event.confidence < 0.95);
            assert_eq!(event.frame, (event.timestamp * 30.0) as u32);
        }
    }

    #[test]
    fn test_short_clip_drops_unfittable_categories() {
        // At 15 seconds only the shot window (5..10) fits; boundary and
        // wicket windows are empty and must be skipped, not sampled.
        let mut source = SimulatedEventSource::new(15.0, ChaCha8Rng::seed_from_u64(4));
        let events = source.detect_events();
        assert!(!events.is_empty());
        for event in &events {
            assert!(matches!(event.kind, EventKind::ShotPlayed(_)));
            assert!(event.timestamp >= 5.0 && event.timestamp <= 10.0);
        }
    }

    #[test]
    fn test_tiny_clip_yields_no_events() {
        let mut source = SimulatedEventSource::new(8.0, ChaCha8Rng::seed_from_u64(5));
        assert!(source.detect_events().is_empty());
    }

    #[test]
    fn test_event_source_is_seed_deterministic() {
        let mut a = SimulatedEventSource::new(120.0, ChaCha8Rng::seed_from_u64(9));
        let mut b = SimulatedEventSource::new(120.0, ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a.detect_events(), b.detect_events());
    }
}
