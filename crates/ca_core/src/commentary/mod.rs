//! Event-driven commentary composition.

pub mod composer;
pub mod templates;

pub use composer::{compose_commentary, compose_commentary_with};
pub use templates::{TemplateLibrary, FILLER_SENTENCE, STANDARD_TEMPLATES, WAITING_MESSAGE};
