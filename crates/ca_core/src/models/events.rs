use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed shot catalog.
///
/// The order of `ALL` is the catalog definition order and doubles as the
/// classifier's tie-break order: when two shots score equally, the one
/// listed first wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    StraightDrive,
    CoverDrive,
    CutShot,
    PullShot,
    HookShot,
    SweepShot,
    DefensiveShot,
    FlickShot,
    SquareDrive,
    OnDrive,
}

impl ShotType {
    pub const ALL: [ShotType; 10] = [
        ShotType::StraightDrive,
        ShotType::CoverDrive,
        ShotType::CutShot,
        ShotType::PullShot,
        ShotType::HookShot,
        ShotType::SweepShot,
        ShotType::DefensiveShot,
        ShotType::FlickShot,
        ShotType::SquareDrive,
        ShotType::OnDrive,
    ];

    /// Human-readable name, as used in commentary text.
    pub fn label(&self) -> &'static str {
        match self {
            ShotType::StraightDrive => "straight drive",
            ShotType::CoverDrive => "cover drive",
            ShotType::CutShot => "cut shot",
            ShotType::PullShot => "pull shot",
            ShotType::HookShot => "hook shot",
            ShotType::SweepShot => "sweep shot",
            ShotType::DefensiveShot => "defensive shot",
            ShotType::FlickShot => "flick shot",
            ShotType::SquareDrive => "square drive",
            ShotType::OnDrive => "on drive",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    Four,
    Six,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
}

/// Event kind with subtype, adjacently tagged so the JSON shape is
/// `{"type": "boundary", "subtype": "four"}`.
///
/// `Unknown` absorbs event types this build does not recognize (forward
/// compatibility with newer detectors); the commentary composer renders
/// those with a fixed filler sentence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "subtype", rename_all = "snake_case")]
pub enum EventKind {
    ShotPlayed(ShotType),
    Boundary(BoundaryKind),
    Wicket(DismissalKind),
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// Coarse type tag, ignoring the subtype. Used by the composer to
    /// detect runs of similar events.
    pub fn tag(&self) -> EventTag {
        match self {
            EventKind::ShotPlayed(_) => EventTag::ShotPlayed,
            EventKind::Boundary(_) => EventTag::Boundary,
            EventKind::Wicket(_) => EventTag::Wicket,
            EventKind::Unknown => EventTag::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    ShotPlayed,
    Boundary,
    Wicket,
    Unknown,
}

/// An immutable, timestamped fact about the match.
///
/// `confidence` is carried through from detection but commentary does not
/// filter or phrase on it; there is no implicit confidence threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    #[serde(flatten)]
    pub kind: EventKind,
    /// Detection confidence in [0, 1].
    pub confidence: f32,
    /// Seconds from the start of the clip.
    pub timestamp: f32,
    /// Source frame index.
    pub frame: u32,
}

impl MatchEvent {
    pub fn new(kind: EventKind, confidence: f32, timestamp: f32, frame: u32) -> Self {
        Self { kind, confidence, timestamp, frame }
    }

    /// Event created from a positive shot classification.
    pub fn shot_played(shot: ShotType, confidence: f32, timestamp: f32, frame: u32) -> Self {
        Self::new(EventKind::ShotPlayed(shot), confidence, timestamp, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = MatchEvent::new(EventKind::Boundary(BoundaryKind::Four), 0.9, 12.5, 375);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "boundary");
        assert_eq!(json["subtype"], "four");
        assert_eq!(json["frame"], 375);
    }

    #[test]
    fn test_shot_subtype_roundtrip() {
        let event = MatchEvent::shot_played(ShotType::CoverDrive, 0.8, 3.0, 90);
        let json = serde_json::to_string(&event).unwrap();
        let back: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, EventKind::ShotPlayed(ShotType::CoverDrive));
    }

    #[test]
    fn test_unrecognized_type_maps_to_unknown() {
        let json = r#"{"type": "no_ball", "confidence": 0.5, "timestamp": 1.0, "frame": 30}"#;
        let event: MatchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Unknown);
    }

    #[test]
    fn test_catalog_order_is_stable() {
        assert_eq!(ShotType::ALL.len(), 10);
        assert_eq!(ShotType::ALL[0], ShotType::StraightDrive);
        assert_eq!(ShotType::ALL[9], ShotType::OnDrive);
    }
}
