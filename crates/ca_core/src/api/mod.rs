//! Seeded JSON request/response boundary for host integrations.

pub mod json_api;

pub use json_api::{
    classify_shot_json, compose_commentary_json, ClassifyRequest, ClassifyResponse,
    CommentaryRequest, CommentaryResponse, SCHEMA_VERSION,
};
