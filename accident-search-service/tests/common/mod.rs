//! Common test utilities for accident-search-service integration tests.

#![allow(dead_code)]

use accident_search_service::config::{DatasetConfig, SearchMode};
use accident_search_service::services::providers::mock::MockInferenceClient;
use accident_search_service::services::{ContextProvider, Dataset, DatasetContext};
use accident_search_service::startup::{build_router, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use secrecy::Secret;
use service_core::middleware::{ApiToken, API_TOKEN_HEADER};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

pub const TOKEN: &str = "123";

/// Five rows: Severe x3, Minor x2; Hand x3, Head x1, Back x1.
pub const SAMPLE_CSV: &str = "\
summary_nr,degree_of_injury,part_of_body
1,Severe,Hand
2,Minor,Head
3,Severe,Hand
4,Minor,Back
5,Severe,Hand
";

pub fn dataset_config() -> DatasetConfig {
    DatasetConfig {
        path: PathBuf::from("unused.csv"),
        injury_degree_column: "degree_of_injury".to_string(),
        body_part_column: "part_of_body".to_string(),
    }
}

pub fn sample_context() -> Arc<dyn ContextProvider> {
    let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("sample dataset parses");
    Arc::new(DatasetContext::new(Some(Arc::new(dataset)), &dataset_config()))
}

pub fn unavailable_context() -> Arc<dyn ContextProvider> {
    Arc::new(DatasetContext::new(None, &dataset_config()))
}

/// Router wired with the given doubles and the test token.
pub fn app(
    inference: Arc<MockInferenceClient>,
    context: Option<Arc<dyn ContextProvider>>,
) -> Router {
    let mode = if context.is_some() {
        SearchMode::DatasetBacked
    } else {
        SearchMode::Baseline
    };
    let state = AppState {
        mode,
        inference,
        context,
    };
    build_router(state, ApiToken::new(Secret::new(TOKEN.to_string())))
}

/// POST a JSON body, optionally with an `api_token` header, returning the raw reply.
pub async fn post_raw(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, String) {
    post_bytes(app, uri, token, Some("application/json"), body.to_string()).await
}

/// POST an arbitrary body, optionally with a content type and an `api_token` header.
pub async fn post_bytes(
    app: Router,
    uri: &str,
    token: Option<&str>,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    if let Some(token) = token {
        builder = builder.header(API_TOKEN_HEADER, token);
    }

    let response = app
        .oneshot(builder.body(body.into()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Same as [`post_raw`], decoding the reply as JSON.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, text) = post_raw(app, uri, token, body).await;
    let json = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
    (status, json)
}
