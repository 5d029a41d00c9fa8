//! Public API:
//! - [`RagRetriever`]: long-lived retrieval facade (embed query, vector
//!   search against the pre-built collection, context formatting).
//! - `format_context`: concatenate retrieved texts into a prompt-ready block.

mod embedding;
pub mod errors;
pub mod structs;
mod vector_db;

use std::time::Duration;

use qdrant_client::Qdrant;
use tracing::{debug, info};

use embedding::embed_query;
use errors::rag_context_error::RagContextError;
use structs::rag_context_config::RagContextConfig;
use structs::retrieved_document::RetrievedDocument;
use vector_db::{connect, search_top_n as db_search_top_n};

/// Retrieval facade owning one embedding HTTP client and one Qdrant channel,
/// built once at startup and reused across requests.
pub struct RagRetriever {
    cfg: RagContextConfig,
    http: reqwest::Client,
    qdrant: Qdrant,
}

impl RagRetriever {
    /// Build the facade from a loaded config.
    ///
    /// The Qdrant channel is lazy: nothing is contacted until the first
    /// search, so construction cannot hang on an unreachable store.
    pub fn new(cfg: RagContextConfig) -> Result<Self, RagContextError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| RagContextError::Embedding(format!("http client build: {e}")))?;
        let qdrant = connect(&cfg)?;

        Ok(Self { cfg, http, qdrant })
    }

    /// The configuration this retriever was built from.
    pub fn config(&self) -> &RagContextConfig {
        &self.cfg
    }

    /// Embed `query` and return its `n` nearest documents, best match first.
    ///
    /// Ordering is whatever the store returns (descending similarity);
    /// nothing is filtered or re-ranked here.
    pub async fn retrieve_top_n(
        &self,
        query: &str,
        n: usize,
    ) -> Result<Vec<RetrievedDocument>, RagContextError> {
        debug!(
            target: "rag_context::search",
            query_len = query.len(),
            n,
            collection = %self.cfg.qdrant.collection,
            "retrieve_top_n: start"
        );

        let query_vec = embed_query(&self.http, &self.cfg, query).await?;
        let docs = db_search_top_n(&self.qdrant, &self.cfg, query_vec, n).await?;

        info!(
            target: "rag_context::search",
            hits = docs.len(),
            "retrieve_top_n: done"
        );

        Ok(docs)
    }

    /// Embed, search and format in one call, using the configured top-N.
    pub async fn retrieve_context(&self, query: &str) -> Result<String, RagContextError> {
        let docs = self.retrieve_top_n(query, self.cfg.search.top_n).await?;
        Ok(format_context(&docs))
    }
}

/// Concatenate retrieved document texts into one human-readable block,
/// preserving the store's ranking order. Blank documents are kept verbatim.
pub fn format_context(docs: &[RetrievedDocument]) -> String {
    docs.iter()
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::rag_context_config::{EmbeddingConfig, QdrantConfig, SearchConfig};

    fn doc(score: f32, text: &str) -> RetrievedDocument {
        RetrievedDocument {
            score,
            text: text.to_string(),
        }
    }

    #[test]
    fn format_context_preserves_store_order() {
        let docs = vec![
            doc(0.91, "Railay Beach has limestone cliffs."),
            doc(0.74, "Koh Lipe is quieter in the low season."),
        ];
        assert_eq!(
            format_context(&docs),
            "Railay Beach has limestone cliffs.\n\nKoh Lipe is quieter in the low season."
        );
    }

    #[test]
    fn format_context_empty_is_empty() {
        assert_eq!(format_context(&[]), "");
    }

    #[test]
    fn format_context_keeps_low_relevance_matches() {
        let docs = vec![doc(0.02, "Visa rules for Laos.")];
        assert_eq!(format_context(&docs), "Visa rules for Laos.");
    }

    #[tokio::test]
    async fn retriever_builds_without_contacting_services() {
        let retriever = RagRetriever::new(RagContextConfig {
            embedding: EmbeddingConfig {
                api_key: "test-key".into(),
                ..EmbeddingConfig::default()
            },
            qdrant: QdrantConfig::default(),
            search: SearchConfig::default(),
        })
        .unwrap();

        assert_eq!(retriever.config().search.top_n, 5);
    }
}
