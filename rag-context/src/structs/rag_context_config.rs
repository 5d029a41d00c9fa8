//! Configuration layer: reads runtime settings from environment variables
//! and exposes strongly typed configs for embeddings, Qdrant, and search.

use serde::{Deserialize, Serialize};

use crate::errors::rag_context_error::RagContextError;

/// Embedding configuration (Gemini embedContent endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Embedding model identifier (e.g., "text-embedding-004").
    pub model: String,
    /// Embedding vector dimensionality (e.g., 768 for text-embedding-004).
    pub dim: usize,
    /// API base URL for the Generative Language API.
    pub api_base: String,
    /// API key, sent as the `x-goog-api-key` header.
    #[serde(default, skip_serializing)]
    pub api_key: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "text-embedding-004".to_string(),
            dim: 768,
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
        }
    }
}

/// Qdrant connectivity and collection parameters.
///
/// The collection itself is pre-built and externally owned; this crate only
/// searches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QdrantConfig {
    /// gRPC URL for Qdrant (e.g., "http://localhost:6334").
    pub url: String,
    /// Collection name holding the travel documents.
    pub collection: String,
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:6334".to_string(),
            collection: "travel_docs".to_string(),
        }
    }
}

/// Search behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of nearest neighbors to return.
    pub top_n: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

/// Top-level runtime configuration for retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagContextConfig {
    /// Embeddings backend configuration.
    pub embedding: EmbeddingConfig,
    /// Qdrant connectivity & collection settings.
    pub qdrant: QdrantConfig,
    /// Search behavior settings.
    pub search: SearchConfig,
}

impl RagContextConfig {
    /// Build configuration from environment variables.
    ///
    /// Environment variables used:
    /// - `GEMINI_API_KEY` (shared with the generation client)
    /// - `GEMINI_API_BASE` (default: the public Generative Language API)
    /// - `GEMINI_EMBED_MODEL` (default: "text-embedding-004")
    /// - `EMBEDDING_DIM` (default: 768)
    /// - `QDRANT_URL` (default: "http://localhost:6334")
    /// - `QDRANT_COLLECTION` (default: "travel_docs")
    /// - `RAG_TOP_N` (default: 5)
    pub fn from_env() -> Result<Self, RagContextError> {
        let defaults = EmbeddingConfig::default();

        let embedding = EmbeddingConfig {
            model: std::env::var("GEMINI_EMBED_MODEL").unwrap_or(defaults.model),
            dim: read_usize_env("EMBEDDING_DIM")?.unwrap_or(defaults.dim),
            api_base: std::env::var("GEMINI_API_BASE").unwrap_or(defaults.api_base),
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
        };

        let qdrant = QdrantConfig {
            url: std::env::var("QDRANT_URL").unwrap_or_else(|_| QdrantConfig::default().url),
            collection: std::env::var("QDRANT_COLLECTION")
                .unwrap_or_else(|_| QdrantConfig::default().collection),
        };

        let search = SearchConfig {
            top_n: read_usize_env("RAG_TOP_N")?.unwrap_or(SearchConfig::default().top_n),
        };

        if embedding.dim == 0 {
            return Err(RagContextError::InvalidConfig(
                "EMBEDDING_DIM must be > 0".into(),
            ));
        }
        if search.top_n == 0 {
            return Err(RagContextError::InvalidConfig("RAG_TOP_N must be > 0".into()));
        }

        Ok(Self {
            embedding,
            qdrant,
            search,
        })
    }
}

/// Read an optional `usize` from env; unset is `None`, unparsable is an error.
fn read_usize_env(key: &str) -> Result<Option<usize>, RagContextError> {
    match std::env::var(key) {
        Ok(v) => v
            .parse::<usize>()
            .map(Some)
            .map_err(|_| RagContextError::EnvParse {
                key: key.into(),
                value: v,
            }),
        Err(_) => Ok(None),
    }
}
