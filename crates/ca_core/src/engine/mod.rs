//! Pose-driven shot classification: geometry, feature extraction, posture
//! and motion inference, and the rule-based classifier itself.

pub mod classifier;
pub mod features;
pub mod geometry;
pub mod motion;
pub mod posture;
pub mod shot_rules;

pub use classifier::classify_shot;
pub use features::{extract_features, Feature, FeatureMap};
pub use geometry::angle_at;
pub use motion::{calculate_motion, Direction, MotionResult, DEFAULT_WINDOW};
pub use posture::{determine_posture, Posture};
pub use shot_rules::{ShotRule, SHOT_CATALOG};
