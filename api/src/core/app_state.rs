use history_store::HistoryStore;
use llm_client::{GeminiConfig, GeminiService};
use rag_context::{RagRetriever, structs::rag_context_config::RagContextConfig};

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Generation client for the hosted Gemini API.
    pub llm: GeminiService,
    /// Retrieval facade (embedding client + Qdrant channel, built once).
    pub retriever: RagRetriever,
    /// Handle to the process-wide conversation log.
    pub history: HistoryStore,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// Fails fast: a missing `GEMINI_API_KEY` aborts startup here instead of
    /// surfacing per-request.
    pub fn from_env() -> Result<Self, AppError> {
        let llm = GeminiService::new(GeminiConfig::from_env()?)?;
        let retriever = RagRetriever::new(RagContextConfig::from_env()?)?;

        let history_path = std::env::var("HISTORY_FILE")
            .unwrap_or_else(|_| "conversation_history.json".into());

        Ok(Self {
            llm,
            retriever,
            history: HistoryStore::new(history_path),
        })
    }
}
