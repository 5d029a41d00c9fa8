//! Qdrant vector DB helpers: connection and top-N search using the modern
//! `qdrant_client` API.
//!
//! The collection is pre-populated and externally owned; this module only
//! runs k-NN searches against it. No ingestion, no collection lifecycle.

use qdrant_client::Qdrant;
use qdrant_client::qdrant::SearchPointsBuilder;

use crate::errors::rag_context_error::RagContextError;
use crate::structs::rag_context_config::RagContextConfig;
use crate::structs::retrieved_document::RetrievedDocument;

/// Build a lazy gRPC client for Qdrant using `cfg.qdrant.url`.
///
/// This call does not touch any collections or open the connection.
///
/// # Errors
/// Returns `RagContextError::Qdrant` if the client cannot be constructed.
pub fn connect(cfg: &RagContextConfig) -> Result<Qdrant, RagContextError> {
    Qdrant::from_url(&cfg.qdrant.url)
        .build()
        .map_err(|e| RagContextError::Qdrant(format!("client build: {e}")))
}

/// Run k-NN search for a query vector and return the matched documents in
/// the store's descending-score order.
///
/// No re-scoring, no deduplication, no relevance threshold: low-relevance
/// matches come back verbatim.
///
/// # Errors
/// - `InvalidConfig` if the query vector length mismatches `EMBEDDING_DIM`.
/// - `Qdrant` on transport/server errors.
pub async fn search_top_n(
    client: &Qdrant,
    cfg: &RagContextConfig,
    query_vec: Vec<f32>,
    n: usize,
) -> Result<Vec<RetrievedDocument>, RagContextError> {
    if query_vec.len() != cfg.embedding.dim {
        return Err(RagContextError::InvalidConfig(format!(
            "query vector length {} != EMBEDDING_DIM {}",
            query_vec.len(),
            cfg.embedding.dim
        )));
    }

    let builder = SearchPointsBuilder::new(&cfg.qdrant.collection, query_vec, n as u64)
        .with_payload(true);

    let resp = client
        .search_points(builder)
        .await
        .map_err(|e| RagContextError::Qdrant(format!("search_points: {e}")))?;

    let docs = resp
        .result
        .into_iter()
        .map(map_scored_point_to_document)
        .collect::<Vec<_>>();

    Ok(docs)
}

/// Helper: map a `ScoredPoint` into a [`RetrievedDocument`], extracting the
/// text payload best-effort. A point without a readable `text` field yields
/// an empty string rather than an error.
fn map_scored_point_to_document(
    sp: qdrant_client::qdrant::ScoredPoint,
) -> RetrievedDocument {
    let mut text = String::new();

    if !sp.payload.is_empty() {
        if let Some(v) = sp.payload.get("text") {
            if let Some(s) = v.clone().into_json().as_str() {
                text = s.to_owned();
            }
        }
    }

    RetrievedDocument {
        score: sp.score,
        text,
    }
}
