// ABOUTME: HTTP route composition for the Vita server
// ABOUTME: Merges health endpoints and the prompt proxy into one axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

//! HTTP routes

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::llm::GenerateBackend;

/// Prompt proxy routes (`/`, `/ask`)
pub mod ask;

/// Health check routes (`/health`, `/ready`)
pub mod health;

pub use ask::AskRoutes;
pub use health::HealthRoutes;

/// Build the full application router
#[must_use]
pub fn app_router(backend: Arc<dyn GenerateBackend>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AskRoutes::routes(backend))
        .layer(TraceLayer::new_for_http())
}
