use serde::{Deserialize, Serialize};

/// Request payload for /api/gemini.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Natural language query. A missing field is treated the same as an
    /// empty string and rejected by the handler.
    #[serde(default)]
    pub input: String,
}

/// Response payload for /api/gemini.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The query as received.
    pub query: String,
    /// Model answer, returned verbatim.
    pub response: String,
}
