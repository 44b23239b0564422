// ABOUTME: Profile cluster database operations
// ABOUTME: Objectives, physical states, profiles, state entries, settings, and injuries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Injury, NewInjury, NewProfile, NewProfileStateEntry, NewUserSettings, Objective,
    PhysicalState, Profile, ProfileStateEntry, UserSettings,
};

impl Database {
    /// Create the profile cluster tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_profiles(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS objectives (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS physical_states (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                severity_level INTEGER NOT NULL DEFAULT 1
                    CHECK (severity_level BETWEEN 1 AND 5)
            )
            ",
        )
        .execute(self.pool())
        .await?;

        // routines(id) is created by the training cluster migration; SQLite
        // resolves foreign keys at DML time, so declaration order is free
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS profiles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL UNIQUE,
                full_name TEXT NOT NULL,
                birth_date DATE NOT NULL,
                gender TEXT NOT NULL CHECK (gender IN ('male', 'female', 'other')),
                height_cm REAL NOT NULL,
                current_weight_kg REAL NOT NULL,
                objective_id INTEGER REFERENCES objectives(id) ON DELETE SET NULL,
                routine_id INTEGER REFERENCES routines(id) ON DELETE SET NULL,
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS profile_state_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                profile_id INTEGER NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
                state_id INTEGER NOT NULL REFERENCES physical_states(id) ON DELETE CASCADE,
                muscle_group TEXT NOT NULL,
                fatigue_level TEXT NOT NULL CHECK (fatigue_level IN
                    ('fresh', 'slightly_fatigued', 'fatigued', 'very_fatigued', 'exhausted')),
                recorded_at DATETIME NOT NULL,
                notes TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_settings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                profile_id INTEGER NOT NULL UNIQUE REFERENCES profiles(id) ON DELETE CASCADE,
                language TEXT NOT NULL DEFAULT 'en',
                weight_unit TEXT NOT NULL DEFAULT 'kg' CHECK (weight_unit IN ('kg', 'lb')),
                distance_unit TEXT NOT NULL DEFAULT 'km' CHECK (distance_unit IN ('km', 'mi')),
                notifications_enabled BOOLEAN NOT NULL DEFAULT 1,
                dark_theme BOOLEAN NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS injuries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                profile_id INTEGER NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                affected_muscle_group TEXT NOT NULL,
                start_date DATE NOT NULL,
                estimated_recovery_date DATE,
                active BOOLEAN NOT NULL DEFAULT 1,
                severity TEXT NOT NULL CHECK (severity IN ('mild', 'moderate', 'severe'))
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_profile_state_entries_profile
             ON profile_state_entries(profile_id)",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_injuries_profile ON injuries(profile_id)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    // ========================================================================
    // Objectives
    // ========================================================================

    /// Create a training objective
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// name is taken.
    pub async fn create_objective(&self, name: &str, description: &str) -> AppResult<Objective> {
        let result = sqlx::query("INSERT INTO objectives (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(self.pool())
            .await?;

        Ok(Objective {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            description: description.to_owned(),
        })
    }

    /// Get an objective by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_objective(&self, id: i64) -> AppResult<Option<Objective>> {
        let row = sqlx::query("SELECT id, name, description FROM objectives WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(row_to_objective).transpose()
    }

    /// List all objectives
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_objectives(&self) -> AppResult<Vec<Objective>> {
        let rows = sqlx::query("SELECT id, name, description FROM objectives ORDER BY name")
            .fetch_all(self.pool())
            .await?;

        rows.iter().map(row_to_objective).collect()
    }

    /// Update an objective
    ///
    /// # Errors
    ///
    /// Returns an error if the objective does not exist or the new name is
    /// taken.
    pub async fn update_objective(&self, objective: &Objective) -> AppResult<()> {
        let result = sqlx::query("UPDATE objectives SET name = $2, description = $3 WHERE id = $1")
            .bind(objective.id)
            .bind(&objective.name)
            .bind(&objective.description)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("objective"));
        }
        Ok(())
    }

    /// Delete an objective; referencing profiles are detached, not deleted
    ///
    /// # Errors
    ///
    /// Returns an error if the objective does not exist.
    pub async fn delete_objective(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM objectives WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("objective"));
        }
        Ok(())
    }

    // ========================================================================
    // Physical states
    // ========================================================================

    /// Create a physical state catalog entry
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ValueOutOfRange`] if
    /// `severity_level` is outside 1-5.
    pub async fn create_physical_state(
        &self,
        name: &str,
        description: &str,
        severity_level: i64,
    ) -> AppResult<PhysicalState> {
        let result = sqlx::query(
            "INSERT INTO physical_states (name, description, severity_level) VALUES ($1, $2, $3)",
        )
        .bind(name)
        .bind(description)
        .bind(severity_level)
        .execute(self.pool())
        .await?;

        Ok(PhysicalState {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            description: description.to_owned(),
            severity_level,
        })
    }

    /// Get a physical state by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_physical_state(&self, id: i64) -> AppResult<Option<PhysicalState>> {
        let row = sqlx::query(
            "SELECT id, name, description, severity_level FROM physical_states WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_physical_state).transpose()
    }

    /// List all physical states
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_physical_states(&self) -> AppResult<Vec<PhysicalState>> {
        let rows = sqlx::query(
            "SELECT id, name, description, severity_level FROM physical_states ORDER BY name",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_physical_state).collect()
    }

    /// Update a physical state
    ///
    /// # Errors
    ///
    /// Returns an error if the state does not exist or the severity is out
    /// of range.
    pub async fn update_physical_state(&self, state: &PhysicalState) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE physical_states SET name = $2, description = $3, severity_level = $4
             WHERE id = $1",
        )
        .bind(state.id)
        .bind(&state.name)
        .bind(&state.description)
        .bind(state.severity_level)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("physical state"));
        }
        Ok(())
    }

    /// Delete a physical state and its profile entries
    ///
    /// # Errors
    ///
    /// Returns an error if the state does not exist.
    pub async fn delete_physical_state(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM physical_states WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("physical state"));
        }
        Ok(())
    }

    // ========================================================================
    // Profiles
    // ========================================================================

    /// Create a profile
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if a
    /// profile already exists for the identity account.
    pub async fn create_profile(&self, profile: &NewProfile) -> AppResult<Profile> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO profiles (
                user_id, full_name, birth_date, gender, height_cm, current_weight_kg,
                objective_id, routine_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            ",
        )
        .bind(profile.user_id.to_string())
        .bind(&profile.full_name)
        .bind(profile.birth_date)
        .bind(profile.gender.as_str())
        .bind(profile.height_cm)
        .bind(profile.current_weight_kg)
        .bind(profile.objective_id)
        .bind(profile.routine_id)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(Profile {
            id: result.last_insert_rowid(),
            user_id: profile.user_id,
            full_name: profile.full_name.clone(),
            birth_date: profile.birth_date,
            gender: profile.gender,
            height_cm: profile.height_cm,
            current_weight_kg: profile.current_weight_kg,
            objective_id: profile.objective_id,
            routine_id: profile.routine_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a profile by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_profile(&self, id: i64) -> AppResult<Option<Profile>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, full_name, birth_date, gender, height_cm, current_weight_kg,
                   objective_id, routine_id, created_at, updated_at
            FROM profiles WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_profile).transpose()
    }

    /// Get the profile linked to an external identity account
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_profile_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, full_name, birth_date, gender, height_cm, current_weight_kg,
                   objective_id, routine_id, created_at, updated_at
            FROM profiles WHERE user_id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_profile).transpose()
    }

    /// List all profiles
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, full_name, birth_date, gender, height_cm, current_weight_kg,
                   objective_id, routine_id, created_at, updated_at
            FROM profiles ORDER BY id
            ",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_profile).collect()
    }

    /// Update a profile's mutable fields, refreshing `updated_at`
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist or a referenced
    /// objective/routine is missing.
    pub async fn update_profile(&self, profile: &Profile) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles SET
                full_name = $2,
                birth_date = $3,
                gender = $4,
                height_cm = $5,
                current_weight_kg = $6,
                objective_id = $7,
                routine_id = $8,
                updated_at = $9
            WHERE id = $1
            ",
        )
        .bind(profile.id)
        .bind(&profile.full_name)
        .bind(profile.birth_date)
        .bind(profile.gender.as_str())
        .bind(profile.height_cm)
        .bind(profile.current_weight_kg)
        .bind(profile.objective_id)
        .bind(profile.routine_id)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("profile"));
        }
        Ok(())
    }

    /// Delete a profile and everything it owns (settings, injuries, state
    /// entries, nutrition logs, progress entries, reports)
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist.
    pub async fn delete_profile(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("profile"));
        }
        Ok(())
    }

    // ========================================================================
    // Profile state entries
    // ========================================================================

    /// Record a physical state for a muscle group on a profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile or state does not exist.
    pub async fn record_profile_state(
        &self,
        entry: &NewProfileStateEntry,
    ) -> AppResult<ProfileStateEntry> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO profile_state_entries
                (profile_id, state_id, muscle_group, fatigue_level, recorded_at, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(entry.profile_id)
        .bind(entry.state_id)
        .bind(&entry.muscle_group)
        .bind(entry.fatigue_level.as_str())
        .bind(now)
        .bind(&entry.notes)
        .execute(self.pool())
        .await?;

        Ok(ProfileStateEntry {
            id: result.last_insert_rowid(),
            profile_id: entry.profile_id,
            state_id: entry.state_id,
            muscle_group: entry.muscle_group.clone(),
            fatigue_level: entry.fatigue_level,
            recorded_at: now,
            notes: entry.notes.clone(),
        })
    }

    /// List a profile's state entries, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_profile_state_entries(
        &self,
        profile_id: i64,
    ) -> AppResult<Vec<ProfileStateEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, profile_id, state_id, muscle_group, fatigue_level, recorded_at, notes
            FROM profile_state_entries
            WHERE profile_id = $1
            ORDER BY recorded_at DESC
            ",
        )
        .bind(profile_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_profile_state_entry).collect()
    }

    /// Delete a single profile state entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist.
    pub async fn delete_profile_state_entry(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM profile_state_entries WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("profile state entry"));
        }
        Ok(())
    }

    // ========================================================================
    // User settings
    // ========================================================================

    /// Create the settings row for a profile
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// profile already has settings.
    pub async fn create_user_settings(
        &self,
        settings: &NewUserSettings,
    ) -> AppResult<UserSettings> {
        let result = sqlx::query(
            r"
            INSERT INTO user_settings
                (profile_id, language, weight_unit, distance_unit, notifications_enabled, dark_theme)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(settings.profile_id)
        .bind(&settings.language)
        .bind(settings.weight_unit.as_str())
        .bind(settings.distance_unit.as_str())
        .bind(settings.notifications_enabled)
        .bind(settings.dark_theme)
        .execute(self.pool())
        .await?;

        Ok(UserSettings {
            id: result.last_insert_rowid(),
            profile_id: settings.profile_id,
            language: settings.language.clone(),
            weight_unit: settings.weight_unit,
            distance_unit: settings.distance_unit,
            notifications_enabled: settings.notifications_enabled,
            dark_theme: settings.dark_theme,
        })
    }

    /// Get the settings row for a profile
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_user_settings(&self, profile_id: i64) -> AppResult<Option<UserSettings>> {
        let row = sqlx::query(
            r"
            SELECT id, profile_id, language, weight_unit, distance_unit,
                   notifications_enabled, dark_theme
            FROM user_settings WHERE profile_id = $1
            ",
        )
        .bind(profile_id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_user_settings).transpose()
    }

    /// Update a settings row
    ///
    /// # Errors
    ///
    /// Returns an error if the settings row does not exist.
    pub async fn update_user_settings(&self, settings: &UserSettings) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_settings SET
                language = $2,
                weight_unit = $3,
                distance_unit = $4,
                notifications_enabled = $5,
                dark_theme = $6
            WHERE id = $1
            ",
        )
        .bind(settings.id)
        .bind(&settings.language)
        .bind(settings.weight_unit.as_str())
        .bind(settings.distance_unit.as_str())
        .bind(settings.notifications_enabled)
        .bind(settings.dark_theme)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("user settings"));
        }
        Ok(())
    }

    // ========================================================================
    // Injuries
    // ========================================================================

    /// Register an injury on a profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist.
    pub async fn create_injury(&self, injury: &NewInjury) -> AppResult<Injury> {
        let result = sqlx::query(
            r"
            INSERT INTO injuries (
                profile_id, name, description, affected_muscle_group,
                start_date, estimated_recovery_date, active, severity
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(injury.profile_id)
        .bind(&injury.name)
        .bind(&injury.description)
        .bind(&injury.affected_muscle_group)
        .bind(injury.start_date)
        .bind(injury.estimated_recovery_date)
        .bind(injury.active)
        .bind(injury.severity.as_str())
        .execute(self.pool())
        .await?;

        Ok(Injury {
            id: result.last_insert_rowid(),
            profile_id: injury.profile_id,
            name: injury.name.clone(),
            description: injury.description.clone(),
            affected_muscle_group: injury.affected_muscle_group.clone(),
            start_date: injury.start_date,
            estimated_recovery_date: injury.estimated_recovery_date,
            active: injury.active,
            severity: injury.severity,
        })
    }

    /// Get an injury by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_injury(&self, id: i64) -> AppResult<Option<Injury>> {
        let row = sqlx::query(
            r"
            SELECT id, profile_id, name, description, affected_muscle_group,
                   start_date, estimated_recovery_date, active, severity
            FROM injuries WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_injury).transpose()
    }

    /// List a profile's injuries, most recent first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_injuries(&self, profile_id: i64) -> AppResult<Vec<Injury>> {
        let rows = sqlx::query(
            r"
            SELECT id, profile_id, name, description, affected_muscle_group,
                   start_date, estimated_recovery_date, active, severity
            FROM injuries
            WHERE profile_id = $1
            ORDER BY start_date DESC
            ",
        )
        .bind(profile_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_injury).collect()
    }

    /// Update an injury
    ///
    /// # Errors
    ///
    /// Returns an error if the injury does not exist.
    pub async fn update_injury(&self, injury: &Injury) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE injuries SET
                name = $2,
                description = $3,
                affected_muscle_group = $4,
                start_date = $5,
                estimated_recovery_date = $6,
                active = $7,
                severity = $8
            WHERE id = $1
            ",
        )
        .bind(injury.id)
        .bind(&injury.name)
        .bind(&injury.description)
        .bind(&injury.affected_muscle_group)
        .bind(injury.start_date)
        .bind(injury.estimated_recovery_date)
        .bind(injury.active)
        .bind(injury.severity.as_str())
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("injury"));
        }
        Ok(())
    }

    /// Delete an injury and its session contraindications
    ///
    /// # Errors
    ///
    /// Returns an error if the injury does not exist.
    pub async fn delete_injury(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM injuries WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("injury"));
        }
        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

fn row_to_objective(row: &SqliteRow) -> AppResult<Objective> {
    Ok(Objective {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    })
}

fn row_to_physical_state(row: &SqliteRow) -> AppResult<PhysicalState> {
    Ok(PhysicalState {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        severity_level: row.get("severity_level"),
    })
}

fn row_to_profile(row: &SqliteRow) -> AppResult<Profile> {
    let user_id: String = row.get("user_id");
    let gender: String = row.get("gender");

    Ok(Profile {
        id: row.get("id"),
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| AppError::database(format!("invalid uuid in profiles.user_id: {e}")))?,
        full_name: row.get("full_name"),
        birth_date: row.get("birth_date"),
        gender: gender.parse()?,
        height_cm: row.get("height_cm"),
        current_weight_kg: row.get("current_weight_kg"),
        objective_id: row.get("objective_id"),
        routine_id: row.get("routine_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn row_to_profile_state_entry(row: &SqliteRow) -> AppResult<ProfileStateEntry> {
    let fatigue: String = row.get("fatigue_level");

    Ok(ProfileStateEntry {
        id: row.get("id"),
        profile_id: row.get("profile_id"),
        state_id: row.get("state_id"),
        muscle_group: row.get("muscle_group"),
        fatigue_level: fatigue.parse()?,
        recorded_at: row.get("recorded_at"),
        notes: row.get("notes"),
    })
}

fn row_to_user_settings(row: &SqliteRow) -> AppResult<UserSettings> {
    let weight_unit: String = row.get("weight_unit");
    let distance_unit: String = row.get("distance_unit");

    Ok(UserSettings {
        id: row.get("id"),
        profile_id: row.get("profile_id"),
        language: row.get("language"),
        weight_unit: weight_unit.parse()?,
        distance_unit: distance_unit.parse()?,
        notifications_enabled: row.get("notifications_enabled"),
        dark_theme: row.get("dark_theme"),
    })
}

fn row_to_injury(row: &SqliteRow) -> AppResult<Injury> {
    let severity: String = row.get("severity");

    Ok(Injury {
        id: row.get("id"),
        profile_id: row.get("profile_id"),
        name: row.get("name"),
        description: row.get("description"),
        affected_muscle_group: row.get("affected_muscle_group"),
        start_date: row.get("start_date"),
        estimated_recovery_date: row.get("estimated_recovery_date"),
        active: row.get("active"),
        severity: severity.parse()?,
    })
}
