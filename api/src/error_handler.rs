use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
///
/// Request-time failures serialize as `{"error": <message>}`; startup
/// variants (`Llm` at boot, `RagConfig`, `Bind`, `Server`) abort launch and
/// never reach a client.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Request / validation ---
    #[error("Input text is required")]
    InvalidInput,

    // --- Downstream (embedding / retrieval / generation) ---
    #[error(transparent)]
    Pipeline(#[from] rag_pipeline::PipelineError),

    // --- Persistence ---
    #[error(transparent)]
    History(#[from] history_store::HistoryError),

    // --- Boot / config ---
    #[error(transparent)]
    Llm(#[from] llm_client::LlmError),

    #[error(transparent)]
    RagConfig(#[from] rag_context::errors::rag_context_error::RagContextError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput => StatusCode::BAD_REQUEST,

            // every downstream or persistence failure is a plain 500
            AppError::Pipeline(_) | AppError::History(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // startup-only
            AppError::Llm(_)
            | AppError::RagConfig(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;
