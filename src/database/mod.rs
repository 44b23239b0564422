// ABOUTME: Database manager over SQLite with startup migrations
// ABOUTME: Opens the pool with foreign-key enforcement and fans out per-cluster schema setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

//! # Database Management
//!
//! Storage layer for the fitness domain schema. One table per entity,
//! with foreign-key and uniqueness constraints enforcing the lifecycle
//! rules: cascade-on-parent-delete for owned rows and junction entities,
//! set-null for detachable catalog references (category, objective,
//! routine), and `CHECK` constraints for range-validated fields.
//!
//! All failure conditions (uniqueness, referential-integrity, range) are
//! reported synchronously to the caller as [`AppError`] values; nothing is
//! retried or recovered automatically.

mod exercises;
mod nutrition;
mod profiles;
mod progress;
mod training;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Database manager for the fitness domain schema
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a database connection pool and run migrations
    ///
    /// Foreign-key enforcement is switched on for every pooled connection;
    /// SQLite leaves it off by default and the cascade/set-null lifecycle
    /// rules depend on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the pool cannot connect,
    /// or schema migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(AppError::from)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// Table creation is idempotent (`CREATE TABLE IF NOT EXISTS`), so this
    /// is safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        // Profile cluster first: everything else references profiles
        self.migrate_profiles().await?;

        // Exercise catalog
        self.migrate_exercises().await?;

        // Training cluster (references profiles and exercises)
        self.migrate_training().await?;

        // Nutrition cluster
        self.migrate_nutrition().await?;

        // Progress cluster
        self.migrate_progress().await?;

        debug!("database schema up to date");

        Ok(())
    }
}
