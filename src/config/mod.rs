// ABOUTME: Configuration module grouping environment-based server settings
// ABOUTME: Re-exports the typed ServerConfig used by the binary and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

//! Configuration management

/// Environment-based configuration parsing
pub mod environment;

pub use environment::{Environment, LlmConfig, LogLevel, ServerConfig};
