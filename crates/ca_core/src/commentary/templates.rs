//! The fixed commentary template catalog.

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

use crate::models::{BoundaryKind, DismissalKind, ShotType};

/// Emitted when there are no events to narrate.
pub const WAITING_MESSAGE: &str = "The match continues. Waiting for the next delivery.";

/// Emitted for event kinds this build does not recognize.
pub const FILLER_SENTENCE: &str = "The action continues on the cricket field.";

/// Process-wide default catalog, shared by the convenience wrappers.
pub static STANDARD_TEMPLATES: Lazy<TemplateLibrary> = Lazy::new(TemplateLibrary::standard);

/// Immutable catalog of candidate sentences, transitions, and situational
/// fillers. Built once and passed by reference into composition; never
/// mutated at runtime.
pub struct TemplateLibrary {
    boundary: FxHashMap<BoundaryKind, Vec<&'static str>>,
    wicket: FxHashMap<DismissalKind, Vec<&'static str>>,
    shot: FxHashMap<ShotType, Vec<&'static str>>,
    shot_generic: Vec<&'static str>,
    transitions: Vec<&'static str>,
    situations: Vec<&'static str>,
}

impl TemplateLibrary {
    /// Candidate sentences for a boundary of the given kind.
    pub fn boundary(&self, kind: BoundaryKind) -> Option<&[&'static str]> {
        self.boundary.get(&kind).map(Vec::as_slice)
    }

    /// Candidate sentences for a wicket of the given kind.
    pub fn wicket(&self, kind: DismissalKind) -> Option<&[&'static str]> {
        self.wicket.get(&kind).map(Vec::as_slice)
    }

    /// Shot-specific sentences; shots without their own list fall back to
    /// the generic shot templates via [`TemplateLibrary::shot_generic`].
    pub fn shot(&self, shot: ShotType) -> Option<&[&'static str]> {
        self.shot.get(&shot).map(Vec::as_slice)
    }

    pub fn shot_generic(&self) -> &[&'static str] {
        &self.shot_generic
    }

    pub fn transitions(&self) -> &[&'static str] {
        &self.transitions
    }

    pub fn situations(&self) -> &[&'static str] {
        &self.situations
    }

    /// The standard catalog.
    pub fn standard() -> Self {
        let mut boundary = FxHashMap::default();
        boundary.insert(
            BoundaryKind::Four,
            vec![
                "That's a beautiful shot! The ball races away to the boundary for FOUR!",
                "What a stroke! That's FOUR runs as the ball reaches the boundary rope.",
                "Expertly placed! The fielder has no chance as the ball speeds to the boundary for FOUR.",
                "That'll be FOUR! Perfectly timed and placed to the boundary.",
                "The batsman finds the gap and gets FOUR runs for that shot.",
            ],
        );
        boundary.insert(
            BoundaryKind::Six,
            vec![
                "MASSIVE HIT! That's gone all the way for SIX!",
                "The batsman has really got hold of that one! SIX runs!",
                "Up, up, and away! That's a huge SIX over the boundary!",
                "What a strike! The ball sails over the boundary for SIX!",
                "The crowd is on their feet! That's a magnificent SIX!",
            ],
        );

        let mut wicket = FxHashMap::default();
        wicket.insert(
            DismissalKind::Bowled,
            vec![
                "BOWLED HIM! The stumps are shattered!",
                "The ball hits the timber! He's BOWLED!",
                "Clean bowled! The batsman has to go!",
                "The stumps are in disarray! That's a brilliant delivery to get the wicket!",
                "The ball sneaks through the gate and hits the stumps! He's out!",
            ],
        );
        wicket.insert(
            DismissalKind::Caught,
            vec![
                "CAUGHT! The fielder takes a good catch and the batsman has to walk!",
                "Up goes the ball... and it's CAUGHT! What a take by the fielder!",
                "That's a catch! The batsman is disappointed as he walks back to the pavilion.",
                "The ball goes straight to the fielder, who makes no mistake! CAUGHT!",
                "A simple catch but an important wicket! The batsman is out!",
            ],
        );
        wicket.insert(
            DismissalKind::Lbw,
            vec![
                "That looks plumb! The umpire raises the finger for LBW!",
                "Appeal for LBW... and he's given! The batsman has to go!",
                "Struck on the pads, and the umpire agrees with the appeal! LBW!",
                "A huge appeal for LBW, and the umpire doesn't hesitate! He's out!",
                "The ball strikes the pad in line with the stumps. LBW! He's gone!",
            ],
        );
        wicket.insert(
            DismissalKind::RunOut,
            vec![
                "The fielder hits the stumps directly! That's a RUN OUT!",
                "There was never a run there! The batsman is RUN OUT!",
                "Quick work by the fielder! The batsman is well short of his ground. RUN OUT!",
                "The throw is accurate, and the batsman is RUN OUT!",
                "Brilliant fielding! The batsman is caught short of the crease. RUN OUT!",
            ],
        );
        wicket.insert(
            DismissalKind::Stumped,
            vec![
                "The batsman is out of his crease, and the keeper whips off the bails! STUMPED!",
                "Clever work by the wicketkeeper! The batsman is STUMPED!",
                "The batsman overbalances, and the keeper is quick to remove the bails! STUMPED!",
                "Sharp stumping by the keeper! The batsman has to go!",
                "The batsman is caught short of his ground, and the keeper completes the stumping!",
            ],
        );

        let mut shot = FxHashMap::default();
        for shot_type in [
            ShotType::StraightDrive,
            ShotType::CoverDrive,
            ShotType::CutShot,
            ShotType::PullShot,
            ShotType::HookShot,
            ShotType::SweepShot,
            ShotType::DefensiveShot,
            ShotType::FlickShot,
        ] {
            shot.insert(shot_type, Self::shot_templates_for(shot_type));
        }

        Self {
            boundary,
            wicket,
            shot,
            shot_generic: vec![
                "The batsman plays a good shot there.",
                "Well played by the batsman.",
                "That's good batting technique on display.",
                "The batsman gets into position nicely to play that shot.",
                "A confident stroke from the batsman.",
            ],
            transitions: vec![
                "Meanwhile, ",
                "Now, ",
                "At this stage, ",
                "Looking at the field, ",
                "The bowler prepares again. ",
                "The batsman takes guard. ",
                "The fielders adjust their positions. ",
                "The crowd is getting excited. ",
                "There's a brief discussion in the field. ",
                "The umpire checks the ball. ",
            ],
            situations: vec![
                "The pressure is mounting on the batting side.",
                "The bowler seems confident after that delivery.",
                "The batsman needs to be more careful with those shots.",
                "The field placement is really testing the batsman's patience.",
                "The bowling side is looking for a breakthrough here.",
                "The batting team is looking to build a partnership.",
                "Both teams know how crucial this phase of play is.",
                "The run rate is slowly climbing up.",
                "The captain is considering a bowling change.",
                "The fielders are alert and ready for any chance.",
            ],
        }
    }

    fn shot_templates_for(shot: ShotType) -> Vec<&'static str> {
        match shot {
            ShotType::StraightDrive => vec![
                "That's a classic straight drive! A classic shot played with a straight bat, hitting the ball back past the bowler.",
                "The batsman plays a lovely straight drive. Well-timed and executed.",
                "Excellent execution of the straight drive!",
                "Textbook straight drive from the batsman!",
                "The batsman demonstrates a perfect straight drive. The hallmark of good technique.",
            ],
            ShotType::CoverDrive => vec![
                "That's a classic cover drive! An elegant shot played through the off side, between mid-off and point.",
                "The batsman plays a lovely cover drive. Pure elegance on display.",
                "Excellent execution of the cover drive!",
                "Textbook cover drive from the batsman!",
                "The batsman demonstrates a perfect cover drive. As elegant as they come.",
            ],
            ShotType::CutShot => vec![
                "That's a classic cut shot! A horizontal bat shot played to a short, wide delivery, cutting the ball toward point.",
                "The batsman plays a lovely cut shot. Taking advantage of the width offered.",
                "Excellent execution of the cut shot!",
                "Textbook cut shot from the batsman!",
                "The batsman demonstrates a perfect cut shot. Using the pace of the ball well.",
            ],
            ShotType::PullShot => vec![
                "That's a classic pull shot! A shot played to a short-pitched delivery, pulling the ball to the leg side.",
                "The batsman plays a lovely pull shot. Swiveling well to get on top of the bounce.",
                "Excellent execution of the pull shot!",
                "Textbook pull shot from the batsman!",
                "The batsman demonstrates a perfect pull shot. Great control against the short ball.",
            ],
            ShotType::HookShot => vec![
                "That's a classic hook shot! Similar to the pull but played to a higher bouncing ball, hooking it around to the leg side.",
                "The batsman plays a lovely hook shot. Taking on the bouncer with confidence.",
                "Excellent execution of the hook shot!",
                "Textbook hook shot from the batsman!",
                "The batsman demonstrates a perfect hook shot. Handling the short ball with aplomb.",
            ],
            ShotType::SweepShot => vec![
                "That's a classic sweep shot! A shot played on one knee, sweeping the ball to the leg side, usually against spin bowling.",
                "The batsman plays a lovely sweep shot. Good use of the feet against the spinner.",
                "Excellent execution of the sweep shot!",
                "Textbook sweep shot from the batsman!",
                "The batsman demonstrates a perfect sweep shot. Countering the spin effectively.",
            ],
            ShotType::DefensiveShot => vec![
                "That's a classic defensive shot! A defensive stroke played with a straight bat to block the ball.",
                "The batsman plays a solid defensive shot. Showing good technique.",
                "Excellent execution of the defensive shot!",
                "Textbook defensive technique from the batsman!",
                "The batsman demonstrates perfect defensive technique. Safety first.",
            ],
            ShotType::FlickShot => vec![
                "That's a classic flick shot! A wristy shot played off the pads, flicking the ball to the leg side.",
                "The batsman plays a lovely flick shot. Elegant use of the wrists.",
                "Excellent execution of the flick shot!",
                "Textbook flick shot from the batsman!",
                "The batsman demonstrates a perfect flick shot. Turning a straight ball to the leg side.",
            ],
            // Square drive and on drive narrate through the generic list.
            ShotType::SquareDrive | ShotType::OnDrive => Vec::new(),
        }
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_counts() {
        let library = TemplateLibrary::standard();
        assert_eq!(library.boundary(BoundaryKind::Four).unwrap().len(), 5);
        assert_eq!(library.boundary(BoundaryKind::Six).unwrap().len(), 5);
        for kind in [
            DismissalKind::Bowled,
            DismissalKind::Caught,
            DismissalKind::Lbw,
            DismissalKind::RunOut,
            DismissalKind::Stumped,
        ] {
            assert_eq!(library.wicket(kind).unwrap().len(), 5);
        }
        assert_eq!(library.shot_generic().len(), 5);
        assert_eq!(library.transitions().len(), 10);
        assert_eq!(library.situations().len(), 10);
    }

    #[test]
    fn test_unlisted_shots_fall_to_generic() {
        let library = TemplateLibrary::standard();
        assert!(library.shot(ShotType::SquareDrive).is_none());
        assert!(library.shot(ShotType::OnDrive).is_none());
        assert_eq!(library.shot(ShotType::SweepShot).unwrap().len(), 5);
    }
}
