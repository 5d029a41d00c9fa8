//! Gemini-based query embedding.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::errors::rag_context_error::RagContextError;
use crate::structs::rag_context_config::RagContextConfig;

#[derive(Debug, Serialize)]
struct EmbedContentRequest<'a> {
    model: String,
    content: EmbedContent<'a>,
}

#[derive(Debug, Serialize)]
struct EmbedContent<'a> {
    parts: Vec<EmbedPart<'a>>,
}

#[derive(Debug, Serialize)]
struct EmbedPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: EmbeddingValues,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

/// Embed a query via the Gemini `embedContent` endpoint.
///
/// Takes the retriever's shared HTTP client; nothing is built per call.
/// The returned vector's dimensionality is checked against
/// `cfg.embedding.dim` so a model/collection mismatch fails loudly instead
/// of producing garbage search results.
pub async fn embed_query(
    client: &reqwest::Client,
    cfg: &RagContextConfig,
    text: &str,
) -> Result<Vec<f32>, RagContextError> {
    let base = cfg.embedding.api_base.trim_end_matches('/');
    let url = format!("{base}/models/{}:embedContent", cfg.embedding.model);

    let req = EmbedContentRequest {
        model: format!("models/{}", cfg.embedding.model),
        content: EmbedContent {
            parts: vec![EmbedPart { text }],
        },
    };

    let resp = client
        .post(&url)
        .header("x-goog-api-key", &cfg.embedding.api_key)
        .json(&req)
        .send()
        .await
        .map_err(|e| RagContextError::Embedding(format!("POST {url}: {e}")))?;

    if resp.status() != StatusCode::OK {
        let code = resp.status();
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".into());
        return Err(RagContextError::Embedding(format!(
            "gemini embedContent non-200: {code}; body: {body}"
        )));
    }

    let parsed: EmbedContentResponse = resp
        .json()
        .await
        .map_err(|e| RagContextError::Embedding(format!("parse embedContent json: {e}")))?;

    if parsed.embedding.values.len() != cfg.embedding.dim {
        return Err(RagContextError::Embedding(format!(
            "embedding dim {} != expected {} (model: {})",
            parsed.embedding.values.len(),
            cfg.embedding.dim,
            cfg.embedding.model
        )));
    }

    Ok(parsed.embedding.values)
}
