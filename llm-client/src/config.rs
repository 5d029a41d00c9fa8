//! Environment-driven configuration for the Gemini client.

use crate::error_handler::LlmError;

/// Configuration for a Gemini `generateContent` invocation.
///
/// The model identifier and API base are deliberately config-pinned rather
/// than hard-coded: the hosted endpoint is an external contract.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Model identifier (e.g., `"gemini-2.0-flash"`).
    pub model: String,

    /// API base URL, without a trailing slash
    /// (e.g., `"https://generativelanguage.googleapis.com/v1beta"`).
    pub api_base: String,

    /// API key, sent as the `x-goog-api-key` header.
    pub api_key: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";

    /// Build the configuration from environment variables.
    ///
    /// Environment variables used:
    /// - `GEMINI_API_KEY` (required)
    /// - `GEMINI_MODEL` (default: `"gemini-2.0-flash"`)
    /// - `GEMINI_API_BASE` (default: the public Generative Language API)
    /// - `GEMINI_TIMEOUT_SECS` (default: 60)
    ///
    /// # Errors
    /// [`LlmError::MissingApiKey`] when `GEMINI_API_KEY` is absent or empty.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(LlmError::MissingApiKey("GEMINI_API_KEY"))?;

        Ok(Self {
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.into()),
            api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| Self::DEFAULT_API_BASE.into()),
            api_key,
            timeout_secs: std::env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        })
    }
}
