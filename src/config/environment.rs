// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

//! Environment-based configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Environment variable for the HTTP port
pub const HTTP_PORT_ENV: &str = "VITA_HTTP_PORT";

/// Environment variable for the database URL
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment variable for the inference-server base URL
pub const LLM_BASE_URL_ENV: &str = "LLM_BASE_URL";

/// Environment variable for the inference model identifier
pub const LLM_MODEL_ENV: &str = "LLM_MODEL";

/// Environment variable for the deployment environment
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default database URL (file-backed SQLite, created on first run)
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/vita.db";

/// Default inference-server base URL (local Ollama)
const DEFAULT_LLM_BASE_URL: &str = "http://localhost:11434";

/// Default inference model
const DEFAULT_LLM_MODEL: &str = "qwen2.5:0.5b";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    #[default]
    Info,
    /// Debug-level detail
    Debug,
    /// Full tracing detail
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Configuration for the external inference server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the inference server
    pub base_url: String,
    /// Fixed model identifier sent with every generate request
    pub model: String,
}

impl LlmConfig {
    /// Load inference-server settings from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if `LLM_BASE_URL` is set but is not a valid URL.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var(LLM_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_owned());

        // Validate early so a typo fails at startup, not on the first request
        Url::parse(&base_url)
            .with_context(|| format!("{LLM_BASE_URL_ENV} is not a valid URL: {base_url}"))?;

        let model = env::var(LLM_MODEL_ENV).unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_owned());

        Ok(Self { base_url, model })
    }
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database connection URL
    pub database_url: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Inference-server settings
    pub llm: LlmConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables, applying defaults
    /// for anything unset
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse (non-numeric port,
    /// malformed base URL).
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var(HTTP_PORT_ENV) {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("{HTTP_PORT_ENV} is not a valid port: {value}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var(DATABASE_URL_ENV).unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let environment = Environment::from_str_or_default(
            &env::var(ENVIRONMENT_ENV).unwrap_or_default(),
        );

        let log_level =
            LogLevel::from_str_or_default(&env::var("RUST_LOG").unwrap_or_default());

        Ok(Self {
            http_port,
            database_url,
            environment,
            log_level,
            llm: LlmConfig::from_env()?,
        })
    }
}
