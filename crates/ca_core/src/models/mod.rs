pub mod events;
pub mod pose;

pub use events::{BoundaryKind, DismissalKind, EventKind, EventTag, MatchEvent, ShotType};
pub use pose::{BoundingBox, Keypoint, Landmark, Pose};
