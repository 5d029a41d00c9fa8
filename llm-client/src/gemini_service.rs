//! Gemini (Generative Language API) service for text generation.
//!
//! Minimal, non-streaming client around the REST API:
//! - POST {api_base}/models/{model}:generateContent
//!
//! Constructor validation:
//! - `cfg.api_key` must be non-empty
//! - `cfg.api_base` must start with http:// or https://
//!
//! The completion text is returned verbatim; an empty candidate list yields
//! an empty string rather than an error, matching the "no response
//! validation" contract of this service.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::GeminiConfig;
use crate::error_handler::{LlmError, make_snippet};

/// Thin client for the Gemini `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiService {
    client: reqwest::Client,
    cfg: GeminiConfig,
    url_generate: String,
}

impl GeminiService {
    /// Creates a new [`GeminiService`] from the given config.
    ///
    /// # Errors
    /// - [`LlmError::MissingApiKey`] if the key is empty
    /// - [`LlmError::InvalidEndpoint`] if `api_base` is not http(s)
    /// - [`LlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: GeminiConfig) -> Result<Self, LlmError> {
        if cfg.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey("GEMINI_API_KEY"));
        }

        let endpoint = cfg.api_base.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(LlmError::InvalidEndpoint(cfg.api_base.clone()));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            header::HeaderValue::from_str(&cfg.api_key)
                .map_err(|e| LlmError::Decode(format!("invalid API key header: {e}")))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_generate = format!("{}/models/{}:generateContent", base, cfg.model);

        info!(
            model = %cfg.model,
            endpoint = %base,
            timeout_secs = cfg.timeout_secs,
            "GeminiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Performs a non-streaming completion request.
    ///
    /// Returns the first candidate's text parts joined together; an empty or
    /// partless candidate yields an empty string.
    ///
    /// # Errors
    /// - [`LlmError::HttpStatus`] for non-2xx responses
    /// - [`LlmError::HttpTransport`] for client/network failures
    /// - [`LlmError::Decode`] if the JSON cannot be parsed
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let started = Instant::now();
        let body = GenerateContentRequest::from_prompt(prompt);

        debug!(
            model = %self.cfg.model,
            prompt_len = prompt.len(),
            "POST {}", self.url_generate
        );

        let resp = self.client.post(&self.url_generate).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(%status, snippet = %snippet, "gemini generateContent failed");
            return Err(LlmError::HttpStatus { status, snippet });
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Decode(format!("generateContent json: {e}")))?;

        let text = parsed.first_text();

        debug!(
            model = %self.cfg.model,
            response_len = text.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "gemini generateContent ok"
        );

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<OutContent>,
}

#[derive(Debug, Deserialize)]
struct OutContent {
    #[serde(default)]
    parts: Vec<OutPart>,
}

#[derive(Debug, Deserialize)]
struct OutPart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// First candidate's text parts, concatenated. Empty when absent.
    fn first_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
