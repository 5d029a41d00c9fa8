//! Unified error handling for `llm-client`.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the Gemini client.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmError {
    /// Required API key environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingApiKey(&'static str),

    /// Endpoint was empty or not an http(s) URL.
    #[error("invalid Gemini endpoint: {0}")]
    InvalidEndpoint(String),

    /// Underlying HTTP transport error.
    #[error("transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("gemini returned {status}: {snippet}")]
    HttpStatus { status: StatusCode, snippet: String },

    /// The response body could not be decoded.
    #[error("failed to decode gemini response: {0}")]
    Decode(String),
}

/// Clamp a response body to a log-friendly snippet.
pub(crate) fn make_snippet(body: &str) -> String {
    const MAX: usize = 300;
    let trimmed = body.trim();
    if trimmed.len() <= MAX {
        return trimmed.to_string();
    }
    let mut end = MAX;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &trimmed[..end])
}
