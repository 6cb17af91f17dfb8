use std::time::Duration;

use bedtime_core::story::StoryError;

/// Failures while asking the model for a story.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("GEMINI_API_KEY is not set. Pass --api-key or export GEMINI_API_KEY")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed story response: {0}")]
    Story(#[from] StoryError),
}
