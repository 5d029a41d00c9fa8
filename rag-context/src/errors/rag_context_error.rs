//! Unified error type for the rag-context crate.

use thiserror::Error;

/// Errors produced while embedding a query or searching the vector store.
#[derive(Debug, Error)]
pub enum RagContextError {
    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: String, value: String },

    /// Configuration combination is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Transport / client error from Qdrant.
    #[error("qdrant error: {0}")]
    Qdrant(String),

    /// Embedding backend failed to initialize or to embed the query.
    #[error("embedding error: {0}")]
    Embedding(String),
}
