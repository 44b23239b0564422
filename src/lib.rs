// ABOUTME: Main library entry point for the Vita fitness tracking backend
// ABOUTME: Exposes the domain schema, storage layer, HTTP routes, and LLM proxy client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

#![deny(unsafe_code)]

//! # Vita Server
//!
//! A fitness-tracking backend built around a normalized relational schema:
//! user profiles, an exercise catalog, training routines, nutrition logs, and
//! progress tracking, persisted in SQLite. Many-to-many relationships are
//! resolved through first-class junction entities carrying their own
//! attributes (for example the muscle-activation percentage on the
//! exercise/muscle-group link).
//!
//! The HTTP surface is deliberately small: health endpoints plus a two-route
//! proxy (`/ask`) that forwards a text prompt to a locally-hosted inference
//! server and relays the response verbatim.
//!
//! ## Architecture
//!
//! - **Models**: domain entities and their string-enum vocabularies
//! - **Database**: `SqlitePool` manager with startup migrations and per-entity
//!   CRUD, enforcing cascade/set-null and uniqueness rules at the storage layer
//! - **LLM**: thin client for an Ollama-style `/api/generate` endpoint
//! - **Routes**: axum routers for health checks and the prompt proxy
//! - **Config**: environment-based configuration management
//!
//! ## Example
//!
//! ```rust,no_run
//! use vita_server::config::environment::ServerConfig;
//! use vita_server::database::Database;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let db = Database::new(&config.database_url).await?;
//!     println!("schema ready at {}", config.database_url);
//!     drop(db);
//!     Ok(())
//! }
//! ```

/// Configuration management and environment parsing
pub mod config;

/// Domain schema storage layer over SQLite
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Client for the external language-model inference server
pub mod llm;

/// Logging configuration and structured logging setup
pub mod logging;

/// Domain entity definitions
pub mod models;

/// HTTP route handlers
pub mod routes;
