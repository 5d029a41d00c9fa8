//! POST /api/gemini — retrieval-augmented chat exchange.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, error};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::{ChatRequest, ChatResponse},
};

/// Handler: POST /api/gemini
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/api/gemini \
///   -H 'content-type: application/json' \
///   -d '{"input":"Best beach in Thailand?"}'
/// ```
pub async fn gemini_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    // Validate before any downstream call or history touch.
    if body.input.is_empty() {
        return Err(AppError::InvalidInput);
    }

    debug!(input_len = body.input.len(), "gemini_chat: start");

    let history = state.history.load().await?;

    let response = rag_pipeline::generate_reply(&state.llm, &state.retriever, &body.input, &history)
        .await
        .inspect_err(|e| error!(error = %e, "gemini_chat: pipeline failed"))?;

    // History is saved only after a successful exchange.
    state.history.append_exchange(&body.input, &response).await?;

    debug!(response_len = response.len(), "gemini_chat: done");

    Ok(Json(ChatResponse {
        query: body.input,
        response,
    }))
}
