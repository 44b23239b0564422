// ABOUTME: Prompt proxy route handlers forwarding to the inference server
// ABOUTME: GET / acknowledgement, GET /ask and POST /ask passthrough with uniform error payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

//! Prompt proxy routes
//!
//! `GET /ask?prompt=...` and `POST /ask` with `{"prompt": "..."}` forward the
//! prompt to the inference server and relay the upstream body verbatim as
//! JSON. A transport failure is captured and converted into a uniform
//! `{"error": "<message>"}` payload; it is never retried and never surfaces
//! as an HTTP failure, matching the contract of both routes.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::warn;

use crate::llm::GenerateBackend;

/// Query parameters for `GET /ask`
#[derive(Debug, Deserialize)]
pub struct AskQuery {
    /// Prompt text to forward
    pub prompt: String,
}

/// Request body for `POST /ask`
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Prompt text to forward
    pub prompt: String,
}

/// Prompt proxy routes implementation
pub struct AskRoutes;

impl AskRoutes {
    /// Create the proxy routes backed by the given generate backend
    #[must_use]
    pub fn routes(backend: Arc<dyn GenerateBackend>) -> Router {
        Router::new()
            .route("/", get(home_handler))
            .route("/ask", get(ask_get_handler).post(ask_post_handler))
            .with_state(backend)
    }
}

/// Static acknowledgement payload for smoke-testing the service
async fn home_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "chat": "bot" }))
}

async fn ask_get_handler(
    State(backend): State<Arc<dyn GenerateBackend>>,
    Query(query): Query<AskQuery>,
) -> Response {
    forward_prompt(&*backend, &query.prompt).await
}

async fn ask_post_handler(
    State(backend): State<Arc<dyn GenerateBackend>>,
    Json(request): Json<AskRequest>,
) -> Response {
    forward_prompt(&*backend, &request.prompt).await
}

/// Forward a prompt and shape the response
///
/// Both routes share this path so an identical upstream response produces an
/// identical payload regardless of HTTP method.
async fn forward_prompt(backend: &dyn GenerateBackend, prompt: &str) -> Response {
    match backend.generate(prompt).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            warn!(error = %e, "inference request failed");
            Json(serde_json::json!({ "error": e.to_string() })).into_response()
        }
    }
}
