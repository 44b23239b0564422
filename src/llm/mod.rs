// ABOUTME: Client layer for the external language-model inference server
// ABOUTME: Defines the GenerateBackend seam and the wire types for /api/generate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

//! # Inference Server Client
//!
//! Thin forwarding layer for a locally-hosted inference server exposing an
//! Ollama-style `/api/generate` endpoint. The server is an external
//! collaborator: one blocking call per request, non-streaming, no retries.
//!
//! The [`GenerateBackend`] trait separates route handlers from the transport
//! so tests can substitute a stub backend.

/// HTTP client for the generate endpoint
pub mod generate;

pub use generate::GenerateClient;

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppError;

/// Request body for the generate endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model identifier
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Always false; streaming is not supported by this proxy
    pub stream: bool,
}

impl GenerateRequest {
    /// Build a non-streaming request for the given model and prompt
    #[must_use]
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Backend capable of answering a prompt
///
/// The single implementation in production is [`GenerateClient`]; tests use
/// stubs to exercise the proxy routes without a live inference server.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    /// Forward a prompt and return the upstream response body verbatim
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure (unreachable server,
    /// timed-out request, unreadable body). Upstream HTTP error statuses are
    /// not errors; their bodies are relayed like any other response.
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
