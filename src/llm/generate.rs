// ABOUTME: Reqwest client for an Ollama-style /api/generate endpoint
// ABOUTME: Posts a fixed-model, non-streaming request and relays the body verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::{GenerateBackend, GenerateRequest};
use crate::config::LlmConfig;
use crate::errors::AppError;

/// Connection timeout for the local inference server
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Request timeout (local inference can be slow)
const REQUEST_TIMEOUT_SECS: u64 = 300;

/// Client for the external inference server
///
/// Issues one outbound call per prompt with no retries, no streaming, and no
/// concurrency control beyond what reqwest's pool provides.
pub struct GenerateClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GenerateClient {
    /// Create a client from inference-server settings
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
        })
    }

    /// Create a client from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is malformed or the HTTP client
    /// cannot be built.
    pub fn from_env() -> Result<Self, AppError> {
        let config = LlmConfig::from_env().map_err(AppError::from)?;
        Self::new(&config)
    }

    /// The model identifier sent with every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerateBackend for GenerateClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest::new(&self.model, prompt);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::external_service("inference server", e.to_string()))?;

        debug!(status = %response.status(), "generate response received");

        // The upstream body is relayed verbatim regardless of status; only
        // transport failures become errors
        response
            .text()
            .await
            .map_err(|e| AppError::external_service("inference server", e.to_string()))
    }
}
