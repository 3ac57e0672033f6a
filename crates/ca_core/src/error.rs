use thiserror::Error;

/// Errors surfaced at the JSON API boundary.
///
/// The classification and composition paths themselves never fail: missing
/// landmarks, degenerate geometry, low scores, and unknown event kinds all
/// degrade to defined sentinel outputs.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
