//! Minimal Gemini client for non-streaming text generation.
//!
//! One provider, one operation: [`GeminiService::generate`] posts a prompt to
//! the hosted `generateContent` endpoint and returns the completion text
//! verbatim. No retries, no streaming; transport and status failures surface
//! as [`LlmError`] for the caller to map.

mod config;
mod error_handler;
mod gemini_service;

pub use config::GeminiConfig;
pub use error_handler::LlmError;
pub use gemini_service::GeminiService;
