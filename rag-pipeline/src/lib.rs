//! RAG + LLM gateway.
//!
//! Public API: [`generate_reply`]. It embeds the query, retrieves the top-N
//! travel documents from the vector store, builds the travel-agent prompt
//! with the trailing conversation history, calls Gemini, and returns the
//! model answer. [`reply_with_context`] is the retrieval-free tail of that
//! flow for callers that already hold a context block. Every downstream
//! failure bubbles up as [`PipelineError`]; there is no retry and no local
//! recovery.

mod error;
pub mod prompt;

pub use error::PipelineError;

use llm_client::GeminiService;
use rag_context::RagRetriever;
use tracing::debug;

/// Run the full retrieval-augmented exchange for one query.
///
/// `history` is the stored conversation, oldest first; only its trailing
/// lines end up in the prompt (see [`prompt::HISTORY_LINES`]).
///
/// # Errors
/// Propagates [`PipelineError`] from embedding, retrieval, or generation.
pub async fn generate_reply(
    llm: &GeminiService,
    retriever: &RagRetriever,
    query: &str,
    history: &[String],
) -> Result<String, PipelineError> {
    let context = retriever.retrieve_context(query).await?;
    reply_with_context(llm, query, &context, history).await
}

/// Assemble the prompt from an already-retrieved context block and generate.
///
/// # Errors
/// Propagates [`PipelineError::Generation`].
pub async fn reply_with_context(
    llm: &GeminiService,
    query: &str,
    context: &str,
    history: &[String],
) -> Result<String, PipelineError> {
    let prompt = prompt::build_prompt(query, context, history);
    debug!(
        prompt_len = prompt.len(),
        context_len = context.len(),
        history_lines = history.len(),
        "reply_with_context: prompt assembled"
    );

    let answer = llm.generate(&prompt).await?;
    Ok(answer)
}
