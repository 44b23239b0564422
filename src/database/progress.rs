// ABOUTME: Progress cluster database operations
// ABOUTME: Per-session progress entries and periodic summary reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{NewProgressEntry, NewReport, ProgressEntry, Report};

impl Database {
    /// Create the progress cluster tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_progress(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS progress_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                profile_id INTEGER NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
                session_id INTEGER NOT NULL REFERENCES training_sessions(id) ON DELETE CASCADE,
                recorded_at DATETIME NOT NULL,
                body_weight_kg REAL NOT NULL,
                duration_minutes INTEGER NOT NULL,
                calories_burned INTEGER NOT NULL DEFAULT 0,
                intensity INTEGER NOT NULL CHECK (intensity BETWEEN 1 AND 10),
                completed BOOLEAN NOT NULL DEFAULT 1,
                notes TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                profile_id INTEGER NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
                report_type TEXT NOT NULL
                    CHECK (report_type IN ('weekly', 'monthly', 'quarterly', 'custom')),
                start_date DATE NOT NULL,
                end_date DATE NOT NULL,
                completed_sessions INTEGER NOT NULL DEFAULT 0,
                total_calories_burned INTEGER NOT NULL DEFAULT 0,
                start_weight_kg REAL NOT NULL,
                end_weight_kg REAL NOT NULL,
                observations TEXT NOT NULL DEFAULT '',
                generated_at DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_progress_entries_profile
             ON progress_entries(profile_id, recorded_at)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    // ========================================================================
    // Progress entries
    // ========================================================================

    /// Record progress for a session
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ValueOutOfRange`] if the
    /// intensity is outside 1-10, or a referential error if the profile or
    /// session is missing.
    pub async fn create_progress_entry(
        &self,
        entry: &NewProgressEntry,
    ) -> AppResult<ProgressEntry> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO progress_entries
                (profile_id, session_id, recorded_at, body_weight_kg, duration_minutes,
                 calories_burned, intensity, completed, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(entry.profile_id)
        .bind(entry.session_id)
        .bind(now)
        .bind(entry.body_weight_kg)
        .bind(entry.duration_minutes)
        .bind(entry.calories_burned)
        .bind(entry.intensity)
        .bind(entry.completed)
        .bind(&entry.notes)
        .execute(self.pool())
        .await?;

        Ok(ProgressEntry {
            id: result.last_insert_rowid(),
            profile_id: entry.profile_id,
            session_id: entry.session_id,
            recorded_at: now,
            body_weight_kg: entry.body_weight_kg,
            duration_minutes: entry.duration_minutes,
            calories_burned: entry.calories_burned,
            intensity: entry.intensity,
            completed: entry.completed,
            notes: entry.notes.clone(),
        })
    }

    /// Get a progress entry by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_progress_entry(&self, id: i64) -> AppResult<Option<ProgressEntry>> {
        let row = sqlx::query(
            r"
            SELECT id, profile_id, session_id, recorded_at, body_weight_kg, duration_minutes,
                   calories_burned, intensity, completed, notes
            FROM progress_entries WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_entry).transpose()
    }

    /// List a profile's progress entries, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_progress_entries(&self, profile_id: i64) -> AppResult<Vec<ProgressEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, profile_id, session_id, recorded_at, body_weight_kg, duration_minutes,
                   calories_burned, intensity, completed, notes
            FROM progress_entries
            WHERE profile_id = $1
            ORDER BY recorded_at DESC
            ",
        )
        .bind(profile_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_entry).collect()
    }

    /// Update a progress entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist or the intensity is out
    /// of range.
    pub async fn update_progress_entry(&self, entry: &ProgressEntry) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE progress_entries SET
                body_weight_kg = $2,
                duration_minutes = $3,
                calories_burned = $4,
                intensity = $5,
                completed = $6,
                notes = $7
            WHERE id = $1
            ",
        )
        .bind(entry.id)
        .bind(entry.body_weight_kg)
        .bind(entry.duration_minutes)
        .bind(entry.calories_burned)
        .bind(entry.intensity)
        .bind(entry.completed)
        .bind(&entry.notes)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("progress entry"));
        }
        Ok(())
    }

    /// Delete a progress entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist.
    pub async fn delete_progress_entry(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM progress_entries WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("progress entry"));
        }
        Ok(())
    }

    // ========================================================================
    // Reports
    // ========================================================================

    /// Store a generated report
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist.
    pub async fn create_report(&self, report: &NewReport) -> AppResult<Report> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO reports
                (profile_id, report_type, start_date, end_date, completed_sessions,
                 total_calories_burned, start_weight_kg, end_weight_kg, observations,
                 generated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(report.profile_id)
        .bind(report.report_type.as_str())
        .bind(report.start_date)
        .bind(report.end_date)
        .bind(report.completed_sessions)
        .bind(report.total_calories_burned)
        .bind(report.start_weight_kg)
        .bind(report.end_weight_kg)
        .bind(&report.observations)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(Report {
            id: result.last_insert_rowid(),
            profile_id: report.profile_id,
            report_type: report.report_type,
            start_date: report.start_date,
            end_date: report.end_date,
            completed_sessions: report.completed_sessions,
            total_calories_burned: report.total_calories_burned,
            start_weight_kg: report.start_weight_kg,
            end_weight_kg: report.end_weight_kg,
            observations: report.observations.clone(),
            generated_at: now,
        })
    }

    /// Get a report by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_report(&self, id: i64) -> AppResult<Option<Report>> {
        let row = sqlx::query(
            r"
            SELECT id, profile_id, report_type, start_date, end_date, completed_sessions,
                   total_calories_burned, start_weight_kg, end_weight_kg, observations,
                   generated_at
            FROM reports WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_report).transpose()
    }

    /// List a profile's reports, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_reports(&self, profile_id: i64) -> AppResult<Vec<Report>> {
        let rows = sqlx::query(
            r"
            SELECT id, profile_id, report_type, start_date, end_date, completed_sessions,
                   total_calories_burned, start_weight_kg, end_weight_kg, observations,
                   generated_at
            FROM reports
            WHERE profile_id = $1
            ORDER BY generated_at DESC
            ",
        )
        .bind(profile_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_report).collect()
    }

    /// Delete a report
    ///
    /// # Errors
    ///
    /// Returns an error if the report does not exist.
    pub async fn delete_report(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("report"));
        }
        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

fn row_to_entry(row: &SqliteRow) -> AppResult<ProgressEntry> {
    Ok(ProgressEntry {
        id: row.get("id"),
        profile_id: row.get("profile_id"),
        session_id: row.get("session_id"),
        recorded_at: row.get("recorded_at"),
        body_weight_kg: row.get("body_weight_kg"),
        duration_minutes: row.get("duration_minutes"),
        calories_burned: row.get("calories_burned"),
        intensity: row.get("intensity"),
        completed: row.get("completed"),
        notes: row.get("notes"),
    })
}

fn row_to_report(row: &SqliteRow) -> AppResult<Report> {
    let report_type: String = row.get("report_type");

    Ok(Report {
        id: row.get("id"),
        profile_id: row.get("profile_id"),
        report_type: report_type.parse()?,
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        completed_sessions: row.get("completed_sessions"),
        total_calories_burned: row.get("total_calories_burned"),
        start_weight_kg: row.get("start_weight_kg"),
        end_weight_kg: row.get("end_weight_kg"),
        observations: row.get("observations"),
        generated_at: row.get("generated_at"),
    })
}
