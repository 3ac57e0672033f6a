use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Anatomical landmarks tracked per pose.
///
/// Fixed vocabulary of 14 points (simplified skeleton: no eyes/ears),
/// matching what the upstream detection backend reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    Nose,
    Neck,
    RightShoulder,
    RightElbow,
    RightWrist,
    LeftShoulder,
    LeftElbow,
    LeftWrist,
    RightHip,
    RightKnee,
    RightAnkle,
    LeftHip,
    LeftKnee,
    LeftAnkle,
}

impl Landmark {
    /// All landmarks in skeleton order (head to feet, right side first).
    pub const ALL: [Landmark; 14] = [
        Landmark::Nose,
        Landmark::Neck,
        Landmark::RightShoulder,
        Landmark::RightElbow,
        Landmark::RightWrist,
        Landmark::LeftShoulder,
        Landmark::LeftElbow,
        Landmark::LeftWrist,
        Landmark::RightHip,
        Landmark::RightKnee,
        Landmark::RightAnkle,
        Landmark::LeftHip,
        Landmark::LeftKnee,
        Landmark::LeftAnkle,
    ];
}

/// One detected landmark in image-pixel space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Detection confidence in [0, 1].
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Axis-aligned bounding box of the detected player, pixel units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One frame's detected skeleton: landmark map plus bounding box.
///
/// Produced once per analyzed frame by the detection backend and treated
/// as immutable afterwards. Landmarks the detector could not resolve are
/// simply absent from the map.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Pose {
    pub keypoints: FxHashMap<Landmark, Keypoint>,
    pub bbox: BoundingBox,
}

impl Pose {
    pub fn new(keypoints: FxHashMap<Landmark, Keypoint>, bbox: BoundingBox) -> Self {
        Self { keypoints, bbox }
    }

    /// Pixel position of a landmark, if the detector reported it.
    pub fn point(&self, landmark: Landmark) -> Option<(f32, f32)> {
        self.keypoints.get(&landmark).map(Keypoint::position)
    }

    /// Pixel positions of several landmarks; `None` unless all are present.
    pub fn points<const N: usize>(&self, landmarks: [Landmark; N]) -> Option<[(f32, f32); N]> {
        let mut out = [(0.0, 0.0); N];
        for (slot, landmark) in out.iter_mut().zip(landmarks) {
            *slot = self.point(landmark)?;
        }
        Some(out)
    }
}
