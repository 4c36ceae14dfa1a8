mod common;

use accident_search_service::services::providers::mock::MockInferenceClient;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{app, post_json, sample_context, TOKEN};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

const ENDPOINTS: [&str; 2] = ["/busca/grau-ferimento", "/busca/partes-corpo-afetadas"];

#[tokio::test]
async fn missing_token_is_unauthorized_on_every_endpoint() {
    let inference = Arc::new(MockInferenceClient::new(true));
    for uri in ENDPOINTS {
        let (status, body) = post_json(
            app(inference.clone(), Some(sample_context())),
            uri,
            None,
            json!({ "pergunta": "Qual o grau de ferimento mais comum?" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Token inválido");
    }
    assert_eq!(inference.calls(), 0);
}

#[tokio::test]
async fn wrong_token_is_unauthorized_on_every_endpoint() {
    let inference = Arc::new(MockInferenceClient::new(true));
    for uri in ENDPOINTS {
        let (status, _) = post_json(
            app(inference.clone(), None),
            uri,
            Some("1234"),
            json!({ "pergunta": "Qual o grau de ferimento mais comum?" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(inference.calls(), 0);
}

#[tokio::test]
async fn token_is_checked_before_body() {
    let inference = Arc::new(MockInferenceClient::new(true));
    let (status, _) = post_json(
        app(inference, None),
        "/busca/grau-ferimento",
        None,
        json!({ "not": "a search" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn hyphenated_header_is_accepted() {
    let inference = Arc::new(MockInferenceClient::new(true));
    let response = app(inference.clone(), None)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/busca/grau-ferimento")
                .header("content-type", "application/json")
                .header("api-token", TOKEN)
                .body(Body::from(json!({ "pergunta": "?" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(inference.calls(), 1);
}

#[tokio::test]
async fn operational_endpoints_do_not_require_token() {
    let inference = Arc::new(MockInferenceClient::new(true));
    for uri in ["/health", "/ready", "/metrics"] {
        let response = app(inference.clone(), None)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}
