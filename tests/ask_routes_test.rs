// ABOUTME: Integration tests for the prompt proxy HTTP surface
// ABOUTME: GET/POST parity, verbatim relay from a mock upstream, uniform transport-error payload

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::routing::post;
use axum::{Json, Router};
use http::{Request, StatusCode};
use tower::ServiceExt;

use vita_server::config::LlmConfig;
use vita_server::errors::AppError;
use vita_server::llm::{GenerateBackend, GenerateClient};
use vita_server::routes::app_router;

/// Backend returning a fixed upstream body
struct FixedBackend(&'static str);

#[async_trait]
impl GenerateBackend for FixedBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Ok(self.0.to_owned())
    }
}

/// Backend simulating an unreachable inference server
struct UnreachableBackend;

#[async_trait]
impl GenerateBackend for UnreachableBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::external_service(
            "inference server",
            "connection refused",
        ))
    }
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

#[tokio::test]
async fn test_home_acknowledgement() {
    let app = app_router(Arc::new(FixedBackend("{}")));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, serde_json::json!({ "chat": "bot" }));
}

#[tokio::test]
async fn test_get_and_post_return_same_payload() {
    const UPSTREAM: &str = r#"{"model":"qwen2.5:0.5b","response":"Hello!","done":true}"#;
    let app = app_router(Arc::new(FixedBackend(UPSTREAM)));

    let get_response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/ask?prompt=hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);

    let post_response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"prompt":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(post_response.status(), StatusCode::OK);

    // Identical upstream response, identical payload shape on both routes
    let get_body = response_json(get_response).await;
    let post_body = response_json(post_response).await;
    assert_eq!(get_body, post_body);
    assert_eq!(get_body["response"], "Hello!");
}

#[tokio::test]
async fn test_transport_failure_yields_error_payload() {
    let app = app_router(Arc::new(UnreachableBackend));

    let get_response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/ask?prompt=hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);
    let get_body = response_json(get_response).await;
    assert!(get_body["error"]
        .as_str()
        .expect("error payload must carry a message")
        .contains("connection refused"));

    let post_response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"prompt":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(post_response.status(), StatusCode::OK);
    let post_body = response_json(post_response).await;
    assert!(post_body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_missing_prompt_is_a_client_error() {
    let app = app_router(Arc::new(FixedBackend("{}")));

    let response = app
        .oneshot(Request::builder().uri("/ask").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_client_relays_mock_upstream_verbatim() {
    // Stand up a mock inference server capturing the forwarded request
    let captured: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
    let captured_in_handler = captured.clone();

    let upstream = Router::new().route(
        "/api/generate",
        post(move |Json(body): Json<serde_json::Value>| {
            let captured = captured_in_handler.clone();
            async move {
                *captured.lock().unwrap() = Some(body);
                Json(serde_json::json!({ "response": "pong", "done": true }))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let client = GenerateClient::new(&LlmConfig {
        base_url: format!("http://{addr}"),
        model: "qwen2.5:0.5b".into(),
    })
    .unwrap();

    let app = app_router(Arc::new(client));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/ask?prompt=ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, serde_json::json!({ "response": "pong", "done": true }));

    // The forwarded request carries the fixed model and non-streaming mode
    let forwarded = captured.lock().unwrap().clone().expect("Upstream not hit");
    assert_eq!(
        forwarded,
        serde_json::json!({
            "model": "qwen2.5:0.5b",
            "prompt": "ping",
            "stream": false
        })
    );
}

#[tokio::test]
async fn test_client_converts_unreachable_upstream() {
    // TCP port 9 (discard) is closed in test environments; connection is refused
    let client = GenerateClient::new(&LlmConfig {
        base_url: "http://127.0.0.1:9".into(),
        model: "qwen2.5:0.5b".into(),
    })
    .unwrap();

    let app = app_router(Arc::new(client));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/ask?prompt=hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The failure is captured into the uniform payload, never propagated
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["error"].as_str().is_some());
}
