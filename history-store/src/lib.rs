//! Rolling conversation log persisted as a JSON array of strings.
//!
//! One process-wide history file is shared by all callers. The store owns a
//! [`tokio::sync::Mutex`] so load/save pairs cannot interleave:
//! `append_exchange` re-reads the file under the lock before writing, which
//! makes concurrent requests merge instead of overwriting each other.
//!
//! Turns are stored as labeled lines (`"User: ..."` / `"AI: ..."`), oldest
//! first, capped at [`MAX_TURNS`] entries.

mod errors;
mod turn;

pub use errors::HistoryError;
pub use turn::ConversationTurn;

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::debug;

/// Maximum number of stored turns; older entries are dropped first.
pub const MAX_TURNS: usize = 20;

/// Handle to the shared conversation-history file.
pub struct HistoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl HistoryStore {
    /// Create a handle for the history file at `path`.
    ///
    /// The file itself is created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the underlying history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full history, oldest turn first.
    ///
    /// A missing file yields an empty history.
    ///
    /// # Errors
    /// - [`HistoryError::Io`] if the file exists but cannot be read.
    /// - [`HistoryError::Corrupt`] if the file is not a valid JSON array of
    ///   strings.
    pub async fn load(&self) -> Result<Vec<String>, HistoryError> {
        let _guard = self.lock.lock().await;
        read_history(&self.path).await
    }

    /// Overwrite the history file with `history`, pretty-printed.
    ///
    /// Non-ASCII content is written as-is, not escaped.
    pub async fn save(&self, history: &[String]) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().await;
        write_history(&self.path, history).await
    }

    /// Record one user/AI exchange.
    ///
    /// Re-reads the file under the lock, appends both turns, truncates to
    /// the most recent [`MAX_TURNS`] entries and persists the result, which
    /// is also returned.
    pub async fn append_exchange(
        &self,
        user_text: &str,
        ai_text: &str,
    ) -> Result<Vec<String>, HistoryError> {
        let _guard = self.lock.lock().await;

        let mut history = read_history(&self.path).await?;
        history.push(ConversationTurn::user(user_text).to_string());
        history.push(ConversationTurn::ai(ai_text).to_string());

        if history.len() > MAX_TURNS {
            history.drain(..history.len() - MAX_TURNS);
        }

        write_history(&self.path, &history).await?;

        debug!(turns = history.len(), path = %self.path.display(), "history persisted");
        Ok(history)
    }
}

async fn read_history(path: &Path) -> Result<Vec<String>, HistoryError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&raw).map_err(|e| HistoryError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

async fn write_history(path: &Path, history: &[String]) -> Result<(), HistoryError> {
    let json = serde_json::to_string_pretty(history)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::new(dir.path().join("conversation_history.json"))
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.load().await.unwrap().is_empty());
        // load() alone must not create the file
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let history = vec![
            "User: Best beach in Thailand?".to_string(),
            "AI: Railay Beach is hard to beat.".to_string(),
            "User: 泰國最好的海灘？".to_string(),
        ];
        store.save(&history).await.unwrap();

        assert_eq!(store.load().await.unwrap(), history);

        // Non-ASCII must survive on disk unescaped.
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("泰國最好的海灘？"));
    }

    #[tokio::test]
    async fn first_exchange_starts_from_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let persisted = store
            .append_exchange("Best beach in Thailand?", "Railay Beach.")
            .await
            .unwrap();

        assert_eq!(
            persisted,
            vec![
                "User: Best beach in Thailand?".to_string(),
                "AI: Railay Beach.".to_string(),
            ]
        );
        assert_eq!(store.load().await.unwrap(), persisted);
    }

    #[tokio::test]
    async fn append_truncates_to_most_recent_twenty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let prior: Vec<String> = (0..25).map(|i| format!("User: turn {i}")).collect();
        store.save(&prior).await.unwrap();

        let persisted = store.append_exchange("latest question", "latest answer").await.unwrap();

        assert_eq!(persisted.len(), MAX_TURNS);
        // 18 most recent prior turns survive, oldest 7 dropped.
        assert_eq!(persisted[0], "User: turn 7");
        assert_eq!(persisted[17], "User: turn 24");
        assert_eq!(persisted[18], "User: latest question");
        assert_eq!(persisted[19], "AI: latest answer");
    }

    #[tokio::test]
    async fn concurrent_exchanges_both_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(store_in(&dir));

        let first = {
            let store = store.clone();
            tokio::spawn(async move {
                store.append_exchange("first question", "first answer").await.unwrap();
            })
        };
        let second = {
            let store = store.clone();
            tokio::spawn(async move {
                store.append_exchange("second question", "second answer").await.unwrap();
            })
        };
        first.await.unwrap();
        second.await.unwrap();

        // Both exchanges survive regardless of completion order.
        let history = store.load().await.unwrap();
        assert_eq!(history.len(), 4);
        assert!(history.contains(&"User: first question".to_string()));
        assert!(history.contains(&"AI: second answer".to_string()));
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "{not json").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, HistoryError::Corrupt { .. }));
    }
}
