// ABOUTME: Nutrition cluster database operations
// ABOUTME: Daily nutrition logs (unique per profile/date) and attached plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{NewNutritionLog, NewNutritionPlan, NutritionLog, NutritionPlan};

impl Database {
    /// Create the nutrition cluster tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_nutrition(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                profile_id INTEGER NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                calorie_target INTEGER NOT NULL,
                calories_consumed INTEGER NOT NULL DEFAULT 0,
                protein_g REAL NOT NULL DEFAULT 0,
                carbs_g REAL NOT NULL DEFAULT 0,
                fat_g REAL NOT NULL DEFAULT 0,
                water_liters REAL NOT NULL DEFAULT 0,
                notes TEXT NOT NULL DEFAULT '',
                UNIQUE (profile_id, date)
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                log_id INTEGER NOT NULL REFERENCES nutrition_logs(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                diet_type TEXT NOT NULL CHECK (diet_type IN
                    ('cutting', 'bulking', 'maintenance', 'ketogenic', 'vegetarian', 'vegan')),
                duration_weeks INTEGER NOT NULL,
                start_date DATE NOT NULL,
                end_date DATE NOT NULL,
                active BOOLEAN NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_logs_profile
             ON nutrition_logs(profile_id, date)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    // ========================================================================
    // Nutrition logs
    // ========================================================================

    /// Create a daily nutrition log
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// profile already has a log for the date.
    pub async fn create_nutrition_log(&self, log: &NewNutritionLog) -> AppResult<NutritionLog> {
        let result = sqlx::query(
            r"
            INSERT INTO nutrition_logs
                (profile_id, date, calorie_target, calories_consumed, protein_g,
                 carbs_g, fat_g, water_liters, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(log.profile_id)
        .bind(log.date)
        .bind(log.calorie_target)
        .bind(log.calories_consumed)
        .bind(log.protein_g)
        .bind(log.carbs_g)
        .bind(log.fat_g)
        .bind(log.water_liters)
        .bind(&log.notes)
        .execute(self.pool())
        .await?;

        Ok(NutritionLog {
            id: result.last_insert_rowid(),
            profile_id: log.profile_id,
            date: log.date,
            calorie_target: log.calorie_target,
            calories_consumed: log.calories_consumed,
            protein_g: log.protein_g,
            carbs_g: log.carbs_g,
            fat_g: log.fat_g,
            water_liters: log.water_liters,
            notes: log.notes.clone(),
        })
    }

    /// Get a nutrition log by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_nutrition_log(&self, id: i64) -> AppResult<Option<NutritionLog>> {
        let row = sqlx::query(
            r"
            SELECT id, profile_id, date, calorie_target, calories_consumed, protein_g,
                   carbs_g, fat_g, water_liters, notes
            FROM nutrition_logs WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_log).transpose()
    }

    /// Get a profile's log for a specific date
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_nutrition_log_by_date(
        &self,
        profile_id: i64,
        date: NaiveDate,
    ) -> AppResult<Option<NutritionLog>> {
        let row = sqlx::query(
            r"
            SELECT id, profile_id, date, calorie_target, calories_consumed, protein_g,
                   carbs_g, fat_g, water_liters, notes
            FROM nutrition_logs WHERE profile_id = $1 AND date = $2
            ",
        )
        .bind(profile_id)
        .bind(date)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_log).transpose()
    }

    /// List a profile's nutrition logs, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_nutrition_logs(&self, profile_id: i64) -> AppResult<Vec<NutritionLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, profile_id, date, calorie_target, calories_consumed, protein_g,
                   carbs_g, fat_g, water_liters, notes
            FROM nutrition_logs
            WHERE profile_id = $1
            ORDER BY date DESC
            ",
        )
        .bind(profile_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_log).collect()
    }

    /// Update a nutrition log
    ///
    /// # Errors
    ///
    /// Returns an error if the log does not exist or the (profile, date)
    /// pair collides with another log.
    pub async fn update_nutrition_log(&self, log: &NutritionLog) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE nutrition_logs SET
                date = $2,
                calorie_target = $3,
                calories_consumed = $4,
                protein_g = $5,
                carbs_g = $6,
                fat_g = $7,
                water_liters = $8,
                notes = $9
            WHERE id = $1
            ",
        )
        .bind(log.id)
        .bind(log.date)
        .bind(log.calorie_target)
        .bind(log.calories_consumed)
        .bind(log.protein_g)
        .bind(log.carbs_g)
        .bind(log.fat_g)
        .bind(log.water_liters)
        .bind(&log.notes)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("nutrition log"));
        }
        Ok(())
    }

    /// Delete a nutrition log and its plans
    ///
    /// # Errors
    ///
    /// Returns an error if the log does not exist.
    pub async fn delete_nutrition_log(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM nutrition_logs WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("nutrition log"));
        }
        Ok(())
    }

    // ========================================================================
    // Nutrition plans
    // ========================================================================

    /// Attach a nutrition plan to a log
    ///
    /// # Errors
    ///
    /// Returns an error if the log does not exist.
    pub async fn create_nutrition_plan(&self, plan: &NewNutritionPlan) -> AppResult<NutritionPlan> {
        let result = sqlx::query(
            r"
            INSERT INTO nutrition_plans
                (log_id, name, description, diet_type, duration_weeks,
                 start_date, end_date, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(plan.log_id)
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.diet_type.as_str())
        .bind(plan.duration_weeks)
        .bind(plan.start_date)
        .bind(plan.end_date)
        .bind(plan.active)
        .execute(self.pool())
        .await?;

        Ok(NutritionPlan {
            id: result.last_insert_rowid(),
            log_id: plan.log_id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            diet_type: plan.diet_type,
            duration_weeks: plan.duration_weeks,
            start_date: plan.start_date,
            end_date: plan.end_date,
            active: plan.active,
        })
    }

    /// List the plans attached to a log
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_nutrition_plans(&self, log_id: i64) -> AppResult<Vec<NutritionPlan>> {
        let rows = sqlx::query(
            r"
            SELECT id, log_id, name, description, diet_type, duration_weeks,
                   start_date, end_date, active
            FROM nutrition_plans
            WHERE log_id = $1
            ORDER BY start_date
            ",
        )
        .bind(log_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_plan).collect()
    }

    /// Update a nutrition plan
    ///
    /// # Errors
    ///
    /// Returns an error if the plan does not exist.
    pub async fn update_nutrition_plan(&self, plan: &NutritionPlan) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE nutrition_plans SET
                name = $2,
                description = $3,
                diet_type = $4,
                duration_weeks = $5,
                start_date = $6,
                end_date = $7,
                active = $8
            WHERE id = $1
            ",
        )
        .bind(plan.id)
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.diet_type.as_str())
        .bind(plan.duration_weeks)
        .bind(plan.start_date)
        .bind(plan.end_date)
        .bind(plan.active)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("nutrition plan"));
        }
        Ok(())
    }

    /// Delete a nutrition plan
    ///
    /// # Errors
    ///
    /// Returns an error if the plan does not exist.
    pub async fn delete_nutrition_plan(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM nutrition_plans WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("nutrition plan"));
        }
        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

fn row_to_log(row: &SqliteRow) -> AppResult<NutritionLog> {
    Ok(NutritionLog {
        id: row.get("id"),
        profile_id: row.get("profile_id"),
        date: row.get("date"),
        calorie_target: row.get("calorie_target"),
        calories_consumed: row.get("calories_consumed"),
        protein_g: row.get("protein_g"),
        carbs_g: row.get("carbs_g"),
        fat_g: row.get("fat_g"),
        water_liters: row.get("water_liters"),
        notes: row.get("notes"),
    })
}

fn row_to_plan(row: &SqliteRow) -> AppResult<NutritionPlan> {
    let diet_type: String = row.get("diet_type");

    Ok(NutritionPlan {
        id: row.get("id"),
        log_id: row.get("log_id"),
        name: row.get("name"),
        description: row.get("description"),
        diet_type: diet_type.parse()?,
        duration_weeks: row.get("duration_weeks"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        active: row.get("active"),
    })
}
