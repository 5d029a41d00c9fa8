//! Data types for vector-store interaction.

use serde::{Deserialize, Serialize};

/// A single retrieved document (ranked by similarity).
///
/// The text is taken verbatim from the point payload; nothing beyond
/// "is text" is owned or validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub score: f32,
    pub text: String,
}
