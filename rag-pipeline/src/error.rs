//! Typed error for the rag-pipeline crate.

use thiserror::Error;

/// Any downstream failure: embedding, retrieval, or generation.
///
/// The HTTP layer maps every variant to a 500; the variants exist so tests
/// and logs can tell the stages apart.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Errors from the retrieval crate (embedding or vector search).
    #[error(transparent)]
    Retrieval(#[from] rag_context::errors::rag_context_error::RagContextError),

    /// Errors from the generation client.
    #[error(transparent)]
    Generation(#[from] llm_client::LlmError),
}
