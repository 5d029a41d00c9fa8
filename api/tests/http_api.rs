//! HTTP contract tests against a real listener on an ephemeral port.
//!
//! Downstream services are never reached: the 400 and health paths return
//! before any outbound call, and the failure path points retrieval at an
//! unroutable local port so the request fails fast.

use std::sync::Arc;

use api::core::app_state::AppState;
use history_store::HistoryStore;
use llm_client::{GeminiConfig, GeminiService};
use rag_context::{
    RagRetriever,
    structs::rag_context_config::{EmbeddingConfig, QdrantConfig, RagContextConfig, SearchConfig},
};

struct TestApp {
    base_url: String,
    history_path: std::path::PathBuf,
    _dir: tempfile::TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("conversation_history.json");

    let llm = GeminiService::new(GeminiConfig {
        model: "gemini-2.0-flash".into(),
        api_base: "http://127.0.0.1:9".into(),
        api_key: "test-key".into(),
        timeout_secs: 2,
    })
    .unwrap();

    // Embedding endpoint on a closed local port: any downstream attempt
    // fails immediately with a connection error.
    let rag = RagContextConfig {
        embedding: EmbeddingConfig {
            api_base: "http://127.0.0.1:9".into(),
            api_key: "test-key".into(),
            ..EmbeddingConfig::default()
        },
        qdrant: QdrantConfig::default(),
        search: SearchConfig::default(),
    };

    let state = Arc::new(AppState {
        llm,
        retriever: RagRetriever::new(rag).unwrap(),
        history: HistoryStore::new(history_path.clone()),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api::router(state)).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{addr}"),
        history_path,
        _dir: dir,
    }
}

#[tokio::test]
async fn health_check_is_idempotent() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let resp = client.get(&app.base_url).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.text().await.unwrap(),
            "AI Travel Planner Backend is running!"
        );
    }
    assert!(!app.history_path.exists());
}

#[tokio::test]
async fn empty_input_is_rejected_without_side_effects() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/gemini", app.base_url))
        .json(&serde_json::json!({ "input": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Input text is required");
    assert!(!app.history_path.exists());
}

#[tokio::test]
async fn missing_input_field_is_rejected_like_empty() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/gemini", app.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Input text is required");
    assert!(!app.history_path.exists());
}

#[tokio::test]
async fn downstream_failure_returns_500_and_leaves_history_untouched() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/gemini", app.base_url))
        .json(&serde_json::json!({ "input": "Best beach in Thailand?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().map(|s| !s.is_empty()).unwrap_or(false));

    // save() must never run when the pipeline fails
    assert!(!app.history_path.exists());
}
