//! Event list -> narrative commentary string.

use rand::seq::SliceRandom;
use rand::Rng;

use super::templates::{TemplateLibrary, FILLER_SENTENCE, STANDARD_TEMPLATES, WAITING_MESSAGE};
use crate::models::{EventKind, EventTag, MatchEvent};

/// Chance that a transition phrase is prepended between two segments.
const TRANSITION_PROBABILITY: f32 = 0.7;

/// Consecutive same-type events that trigger a match-situation sentence.
const SIMILAR_RUN_LENGTH: u32 = 2;

/// Fold state carried across the event walk: the last narrated event type
/// and how many times in a row it has repeated.
#[derive(Debug, Default)]
struct SegmentState {
    last_tag: Option<EventTag>,
    consecutive_similar: u32,
}

impl SegmentState {
    /// Advance the state for a templated segment and report whether a
    /// match-situation sentence should be appended to it.
    fn advance(&mut self, tag: EventTag) -> bool {
        let mut add_situation = false;
        if self.last_tag == Some(tag) {
            self.consecutive_similar += 1;
            if self.consecutive_similar >= SIMILAR_RUN_LENGTH {
                add_situation = true;
                self.consecutive_similar = 0;
            }
        } else {
            self.consecutive_similar = 0;
        }
        self.last_tag = Some(tag);
        add_situation
    }
}

fn pick<'a, R: Rng>(list: &[&'a str], rng: &mut R) -> Option<&'a str> {
    list.choose(rng).copied()
}

/// Compose commentary with the standard template catalog.
pub fn compose_commentary<R: Rng>(events: &[MatchEvent], rng: &mut R) -> String {
    compose_commentary_with(events, &STANDARD_TEMPLATES, rng)
}

/// Compose one narrative string from a list of match events.
///
/// Events are sorted by timestamp (stable, so ties keep their input
/// order), narrated one segment each, then joined: the first segment
/// verbatim, later ones prepended with a random transition phrase and
/// lower-cased 70% of the time. Runs of same-type events get a
/// match-situation sentence appended at the second repeat. All randomness
/// comes from `rng`, so a fixed seed reproduces the output exactly.
pub fn compose_commentary_with<R: Rng>(
    events: &[MatchEvent],
    library: &TemplateLibrary,
    rng: &mut R,
) -> String {
    if events.is_empty() {
        return WAITING_MESSAGE.to_string();
    }

    let mut sorted: Vec<&MatchEvent> = events.iter().collect();
    sorted.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    let mut state = SegmentState::default();
    let mut segments: Vec<String> = Vec::with_capacity(sorted.len());

    for event in sorted {
        if let Some(segment) = narrate_event(event, library, &mut state, rng) {
            segments.push(segment);
        }
    }

    match segments.split_first() {
        None => WAITING_MESSAGE.to_string(),
        Some((first, rest)) => {
            let mut combined = first.clone();
            for segment in rest {
                if rng.gen::<f32>() < TRANSITION_PROBABILITY {
                    let transition = pick(library.transitions(), rng).unwrap_or("");
                    combined.push(' ');
                    combined.push_str(transition);
                    combined.push_str(&segment.to_lowercase());
                } else {
                    combined.push(' ');
                    combined.push_str(segment);
                }
            }
            combined
        }
    }
}

/// Render one event into a commentary segment.
///
/// Only the specific-template path participates in the repetition
/// tracking; the generic shot fallback and the unknown-kind filler append
/// their sentence without touching the fold state.
fn narrate_event<R: Rng>(
    event: &MatchEvent,
    library: &TemplateLibrary,
    state: &mut SegmentState,
    rng: &mut R,
) -> Option<String> {
    let templates = match event.kind {
        EventKind::Boundary(kind) => library.boundary(kind),
        EventKind::Wicket(kind) => library.wicket(kind),
        EventKind::ShotPlayed(shot) => {
            let specific = library.shot(shot).filter(|list| !list.is_empty());
            if specific.is_none() {
                log::debug!("no specific templates for {}, using generic", shot);
                return pick(library.shot_generic(), rng).map(str::to_string);
            }
            specific
        }
        EventKind::Unknown => {
            log::warn!("unrecognized event kind at t={}, emitting filler", event.timestamp);
            return Some(FILLER_SENTENCE.to_string());
        }
    };

    let template = pick(templates?, rng)?;
    let mut segment = template.to_string();
    if state.advance(event.kind.tag()) {
        if let Some(situation) = pick(library.situations(), rng) {
            segment.push(' ');
            segment.push_str(situation);
        }
    }
    Some(segment)
}
