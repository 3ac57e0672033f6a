use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::commentary::compose_commentary;
use crate::engine::classify_shot;
use crate::error::{CoreError, Result};
use crate::models::{MatchEvent, Pose, ShotType};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct CommentaryRequest {
    pub schema_version: u8,
    /// Seed for template and transition selection; same seed, same output.
    pub seed: u64,
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Serialize)]
pub struct CommentaryResponse {
    pub schema_version: u8,
    pub commentary: String,
    pub event_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub schema_version: u8,
    pub pose: Pose,
    /// Earlier poses of the same clip, oldest first.
    #[serde(default)]
    pub history: Vec<Pose>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub schema_version: u8,
    /// Winning shot label, absent when no shot was detected.
    pub shot: Option<ShotType>,
    pub detected: bool,
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(CoreError::SchemaVersion { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Compose commentary from a JSON request, returning a JSON response.
pub fn compose_commentary_json(request_json: &str) -> Result<String> {
    let request: CommentaryRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let commentary = compose_commentary(&request.events, &mut rng);
    let response = CommentaryResponse {
        schema_version: SCHEMA_VERSION,
        commentary,
        event_count: request.events.len(),
    };
    Ok(serde_json::to_string(&response)?)
}

/// Classify the shot in a JSON-encoded pose (plus optional history).
pub fn classify_shot_json(request_json: &str) -> Result<String> {
    let request: ClassifyRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let shot = classify_shot(&request.pose, &request.history);
    let response =
        ClassifyResponse { schema_version: SCHEMA_VERSION, shot, detected: shot.is_some() };
    Ok(serde_json::to_string(&response)?)
}
