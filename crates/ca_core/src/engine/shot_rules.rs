//! The fixed shot catalog: per-shot angle windows, expected posture, and
//! swing-direction affinity.

use super::features::Feature;
use super::motion::Direction;
use super::posture::Posture;
use crate::models::ShotType;

/// Constraint set defining one catalog shot.
#[derive(Debug, Clone, Copy)]
pub struct ShotRule {
    pub shot: ShotType,
    /// Inclusive (min, max) windows on joint-angle features, degrees.
    pub angle_windows: &'static [(Feature, (f32, f32))],
    pub posture: Posture,
    pub description: &'static str,
}

/// All ten shot rules, in catalog order. The classifier's tie-break follows
/// this order, so reordering entries changes results.
pub const SHOT_CATALOG: [ShotRule; 10] = [
    ShotRule {
        shot: ShotType::StraightDrive,
        angle_windows: &[
            (Feature::RightElbowAngle, (140.0, 180.0)),
            (Feature::LeftElbowAngle, (90.0, 140.0)),
        ],
        posture: Posture::Upright,
        description: "A classic shot played with a straight bat, hitting the ball back past the bowler.",
    },
    ShotRule {
        shot: ShotType::CoverDrive,
        angle_windows: &[
            (Feature::RightElbowAngle, (120.0, 160.0)),
            (Feature::LeftElbowAngle, (100.0, 150.0)),
        ],
        posture: Posture::LeaningRight,
        description: "An elegant shot played through the off side, between mid-off and point.",
    },
    ShotRule {
        shot: ShotType::CutShot,
        angle_windows: &[
            (Feature::RightElbowAngle, (90.0, 130.0)),
            (Feature::LeftElbowAngle, (100.0, 150.0)),
        ],
        posture: Posture::Upright,
        description: "A horizontal bat shot played to a short, wide delivery, cutting the ball toward point.",
    },
    ShotRule {
        shot: ShotType::PullShot,
        angle_windows: &[
            (Feature::RightElbowAngle, (80.0, 120.0)),
            (Feature::LeftElbowAngle, (70.0, 110.0)),
        ],
        posture: Posture::LeaningBack,
        description: "A shot played to a short-pitched delivery, pulling the ball to the leg side.",
    },
    ShotRule {
        shot: ShotType::HookShot,
        angle_windows: &[
            (Feature::RightElbowAngle, (70.0, 110.0)),
            (Feature::LeftElbowAngle, (60.0, 100.0)),
        ],
        posture: Posture::LeaningBack,
        description: "Similar to the pull but played to a higher bouncing ball, hooking it around to the leg side.",
    },
    ShotRule {
        shot: ShotType::SweepShot,
        angle_windows: &[
            (Feature::RightKneeAngle, (60.0, 120.0)),
            (Feature::LeftKneeAngle, (60.0, 100.0)),
        ],
        posture: Posture::Kneeling,
        description: "A shot played on one knee, sweeping the ball to the leg side, usually against spin bowling.",
    },
    ShotRule {
        shot: ShotType::DefensiveShot,
        angle_windows: &[
            (Feature::RightElbowAngle, (150.0, 180.0)),
            (Feature::LeftElbowAngle, (130.0, 170.0)),
        ],
        posture: Posture::Upright,
        description: "A defensive stroke played with a straight bat to block the ball.",
    },
    ShotRule {
        shot: ShotType::FlickShot,
        angle_windows: &[
            (Feature::RightKneeAngle, (100.0, 150.0)),
            (Feature::LeftKneeAngle, (100.0, 160.0)),
        ],
        posture: Posture::Upright,
        description: "A wristy shot played off the pads, flicking the ball to the leg side.",
    },
    ShotRule {
        shot: ShotType::SquareDrive,
        angle_windows: &[
            (Feature::RightElbowAngle, (110.0, 150.0)),
            (Feature::LeftElbowAngle, (100.0, 140.0)),
        ],
        posture: Posture::Upright,
        description: "A drive played square of the wicket on the off side.",
    },
    ShotRule {
        shot: ShotType::OnDrive,
        angle_windows: &[
            (Feature::RightElbowAngle, (130.0, 170.0)),
            (Feature::LeftElbowAngle, (100.0, 150.0)),
        ],
        posture: Posture::LeaningLeft,
        description: "A drive played through the on side, between mid-on and mid-wicket.",
    },
];

impl ShotType {
    /// Wrist-travel direction that earns this shot the swing bonus, if any.
    pub fn swing_direction(&self) -> Option<Direction> {
        match self {
            ShotType::StraightDrive | ShotType::CoverDrive | ShotType::OnDrive => {
                Some(Direction::Forward)
            }
            ShotType::CutShot | ShotType::SquareDrive => Some(Direction::Sideways),
            ShotType::PullShot | ShotType::HookShot => Some(Direction::Backward),
            ShotType::SweepShot | ShotType::DefensiveShot | ShotType::FlickShot => None,
        }
    }
}
