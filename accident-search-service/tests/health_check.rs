//! End-to-end tests against a real listener.
//!
//! Run with: cargo test -p accident-search-service --test health_check

use accident_search_service::config::{
    DatasetConfig, InferenceConfig, SearchConfig, SearchMode, SecurityConfig, DEFAULT_MODEL,
};
use accident_search_service::startup::Application;
use reqwest::Client;
use secrecy::Secret;
use std::path::PathBuf;
use std::time::Duration;

fn test_config(mode: SearchMode, dataset_path: PathBuf) -> SearchConfig {
    SearchConfig {
        common: service_core::config::Config { port: 0 }, // Random port
        mode,
        security: SecurityConfig {
            api_token: Secret::new("123".to_string()),
        },
        dataset: DatasetConfig {
            path: dataset_path,
            injury_degree_column: "degree_of_injury".to_string(),
            body_part_column: "part_of_body".to_string(),
        },
        inference: InferenceConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        },
    }
}

fn shipped_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/accidents.csv")
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app(config: SearchConfig) -> u16 {
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(test_config(SearchMode::Baseline, shipped_dataset())).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "accident-search-service");
    assert_eq!(body["mode"], "baseline");
}

#[tokio::test]
async fn readiness_reflects_dataset_load() {
    let client = Client::new();

    let loaded = spawn_app(test_config(SearchMode::DatasetBacked, shipped_dataset())).await;
    let response = client
        .get(format!("http://localhost:{}/ready", loaded))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let missing = spawn_app(test_config(
        SearchMode::DatasetBacked,
        PathBuf::from("does/not/exist.csv"),
    ))
    .await;
    let response = client
        .get(format!("http://localhost:{}/ready", missing))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 503);
}

#[tokio::test]
async fn missing_inference_key_returns_server_error() {
    let port = spawn_app(test_config(SearchMode::DatasetBacked, shipped_dataset())).await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/busca/grau-ferimento", port))
        .header("api_token", "123")
        .json(&serde_json::json!({ "pergunta": "Qual o grau de ferimento mais comum?" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Erro ao processar requisição");
}

#[tokio::test]
async fn unauthorized_over_the_wire() {
    let port = spawn_app(test_config(SearchMode::Baseline, shipped_dataset())).await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/busca/partes-corpo-afetadas", port))
        .json(&serde_json::json!({ "pergunta": "Quais partes do corpo?" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 401);
}
