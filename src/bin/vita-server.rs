// ABOUTME: Server binary wiring configuration, logging, storage, and HTTP routes
// ABOUTME: Starts the Vita fitness backend with its prompt proxy surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

//! # Vita Server Binary
//!
//! Starts the fitness backend: loads environment configuration, initializes
//! structured logging, opens the SQLite schema (running migrations), and
//! serves the health and prompt-proxy routes.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use vita_server::{
    config::environment::ServerConfig,
    database::Database,
    llm::GenerateClient,
    logging::LoggingConfig,
    routes::app_router,
};

#[derive(Parser)]
#[command(name = "vita-server")]
#[command(about = "Vita Fitness API - fitness tracking backend with LLM chat proxy")]
struct Args {
    /// Override the HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.http_port {
        config.http_port = port;
    }

    LoggingConfig::from_env().init()?;

    info!(
        environment = %config.environment,
        port = config.http_port,
        "starting vita-server"
    );

    // The schema is served to in-process callers; the pool stays open for
    // the lifetime of the server even though the HTTP surface is proxy-only
    let _database = Database::new(&config.database_url).await?;
    info!(database_url = %config.database_url, "database ready");

    let backend = Arc::new(GenerateClient::new(&config.llm)?);
    info!(
        base_url = %config.llm.base_url,
        model = %config.llm.model,
        "inference proxy configured"
    );

    let router = app_router(backend);

    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router).await?;

    Ok(())
}
