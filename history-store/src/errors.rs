//! Typed errors for the history-store crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading or writing the conversation log.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Underlying filesystem error (read or write).
    #[error("history io error: {0}")]
    Io(#[from] std::io::Error),

    /// The history file exists but does not hold a JSON array of strings.
    #[error("history file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization failure while writing the history out.
    #[error("history serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
