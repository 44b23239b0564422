// ABOUTME: Training cluster database operations
// ABOUTME: Routines, sessions, per-session prescriptions, sets, and injury contraindications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{
    NewRoutine, NewSessionExercise, NewSessionInjury, NewTrainingSession, NewWorkoutSet, Routine,
    SessionExercise, SessionInjury, TrainingSession, WorkoutSet,
};

impl Database {
    /// Create the training cluster tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_training(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS routines (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                routine_type TEXT NOT NULL CHECK (routine_type IN
                    ('strength', 'hypertrophy', 'endurance', 'functional', 'cardio', 'mixed')),
                duration_weeks INTEGER NOT NULL,
                days_per_week INTEGER NOT NULL CHECK (days_per_week BETWEEN 1 AND 7),
                level TEXT NOT NULL CHECK (level IN ('beginner', 'intermediate', 'advanced')),
                active BOOLEAN NOT NULL DEFAULT 1,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS training_sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                routine_id INTEGER NOT NULL REFERENCES routines(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                weekday INTEGER NOT NULL CHECK (weekday BETWEEN 1 AND 7),
                estimated_duration_minutes INTEGER NOT NULL,
                display_order INTEGER NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS session_exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id INTEGER NOT NULL REFERENCES training_sessions(id) ON DELETE CASCADE,
                exercise_id INTEGER NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
                display_order INTEGER NOT NULL DEFAULT 1,
                sets INTEGER NOT NULL DEFAULT 3,
                reps INTEGER NOT NULL DEFAULT 10,
                recommended_weight_kg REAL,
                rest_seconds INTEGER NOT NULL DEFAULT 60,
                notes TEXT NOT NULL DEFAULT '',
                UNIQUE (session_id, exercise_id)
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_sets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id INTEGER NOT NULL REFERENCES training_sessions(id) ON DELETE CASCADE,
                set_number INTEGER NOT NULL,
                target_reps INTEGER NOT NULL,
                weight_kg REAL,
                rest_seconds INTEGER NOT NULL DEFAULT 60,
                completed BOOLEAN NOT NULL DEFAULT 0,
                notes TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS session_injuries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                injury_id INTEGER NOT NULL REFERENCES injuries(id) ON DELETE CASCADE,
                session_id INTEGER NOT NULL REFERENCES training_sessions(id) ON DELETE CASCADE,
                contraindication TEXT NOT NULL,
                risk_level TEXT NOT NULL
                    CHECK (risk_level IN ('low', 'medium', 'high', 'forbidden')),
                recorded_at DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_training_sessions_routine
             ON training_sessions(routine_id, display_order)",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_sets_session
             ON workout_sets(session_id, set_number)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    // ========================================================================
    // Routines
    // ========================================================================

    /// Create a routine
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ValueOutOfRange`] if
    /// `days_per_week` is outside 1-7.
    pub async fn create_routine(&self, routine: &NewRoutine) -> AppResult<Routine> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO routines
                (name, description, routine_type, duration_weeks, days_per_week,
                 level, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&routine.name)
        .bind(&routine.description)
        .bind(routine.routine_type.as_str())
        .bind(routine.duration_weeks)
        .bind(routine.days_per_week)
        .bind(routine.level.as_str())
        .bind(routine.active)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(Routine {
            id: result.last_insert_rowid(),
            name: routine.name.clone(),
            description: routine.description.clone(),
            routine_type: routine.routine_type,
            duration_weeks: routine.duration_weeks,
            days_per_week: routine.days_per_week,
            level: routine.level,
            active: routine.active,
            created_at: now,
        })
    }

    /// Get a routine by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_routine(&self, id: i64) -> AppResult<Option<Routine>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, routine_type, duration_weeks, days_per_week,
                   level, active, created_at
            FROM routines WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_routine).transpose()
    }

    /// List all routines
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_routines(&self) -> AppResult<Vec<Routine>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, routine_type, duration_weeks, days_per_week,
                   level, active, created_at
            FROM routines ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_routine).collect()
    }

    /// Update a routine
    ///
    /// # Errors
    ///
    /// Returns an error if the routine does not exist or `days_per_week` is
    /// out of range.
    pub async fn update_routine(&self, routine: &Routine) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE routines SET
                name = $2,
                description = $3,
                routine_type = $4,
                duration_weeks = $5,
                days_per_week = $6,
                level = $7,
                active = $8
            WHERE id = $1
            ",
        )
        .bind(routine.id)
        .bind(&routine.name)
        .bind(&routine.description)
        .bind(routine.routine_type.as_str())
        .bind(routine.duration_weeks)
        .bind(routine.days_per_week)
        .bind(routine.level.as_str())
        .bind(routine.active)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("routine"));
        }
        Ok(())
    }

    /// Delete a routine and its sessions; assigned profiles are detached
    ///
    /// # Errors
    ///
    /// Returns an error if the routine does not exist.
    pub async fn delete_routine(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM routines WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("routine"));
        }
        Ok(())
    }

    // ========================================================================
    // Training sessions
    // ========================================================================

    /// Create a training session within a routine
    ///
    /// # Errors
    ///
    /// Returns an error if the routine does not exist or the weekday is out
    /// of range.
    pub async fn create_training_session(
        &self,
        session: &NewTrainingSession,
    ) -> AppResult<TrainingSession> {
        let result = sqlx::query(
            r"
            INSERT INTO training_sessions
                (routine_id, name, description, weekday, estimated_duration_minutes, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(session.routine_id)
        .bind(&session.name)
        .bind(&session.description)
        .bind(session.weekday)
        .bind(session.estimated_duration_minutes)
        .bind(session.display_order)
        .execute(self.pool())
        .await?;

        Ok(TrainingSession {
            id: result.last_insert_rowid(),
            routine_id: session.routine_id,
            name: session.name.clone(),
            description: session.description.clone(),
            weekday: session.weekday,
            estimated_duration_minutes: session.estimated_duration_minutes,
            display_order: session.display_order,
        })
    }

    /// Get a training session by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_training_session(&self, id: i64) -> AppResult<Option<TrainingSession>> {
        let row = sqlx::query(
            r"
            SELECT id, routine_id, name, description, weekday,
                   estimated_duration_minutes, display_order
            FROM training_sessions WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_session).transpose()
    }

    /// List a routine's sessions in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_training_sessions(&self, routine_id: i64) -> AppResult<Vec<TrainingSession>> {
        let rows = sqlx::query(
            r"
            SELECT id, routine_id, name, description, weekday,
                   estimated_duration_minutes, display_order
            FROM training_sessions
            WHERE routine_id = $1
            ORDER BY display_order
            ",
        )
        .bind(routine_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_session).collect()
    }

    /// Update a training session
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the weekday is out
    /// of range.
    pub async fn update_training_session(&self, session: &TrainingSession) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE training_sessions SET
                name = $2,
                description = $3,
                weekday = $4,
                estimated_duration_minutes = $5,
                display_order = $6
            WHERE id = $1
            ",
        )
        .bind(session.id)
        .bind(&session.name)
        .bind(&session.description)
        .bind(session.weekday)
        .bind(session.estimated_duration_minutes)
        .bind(session.display_order)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("training session"));
        }
        Ok(())
    }

    /// Delete a session with its sets, prescriptions, and contraindications
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist.
    pub async fn delete_training_session(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM training_sessions WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("training session"));
        }
        Ok(())
    }

    // ========================================================================
    // Session exercises (prescriptions)
    // ========================================================================

    /// Prescribe an exercise within a session
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// exercise is already prescribed in this session.
    pub async fn add_session_exercise(
        &self,
        prescription: &NewSessionExercise,
    ) -> AppResult<SessionExercise> {
        let result = sqlx::query(
            r"
            INSERT INTO session_exercises
                (session_id, exercise_id, display_order, sets, reps,
                 recommended_weight_kg, rest_seconds, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(prescription.session_id)
        .bind(prescription.exercise_id)
        .bind(prescription.display_order)
        .bind(prescription.sets)
        .bind(prescription.reps)
        .bind(prescription.recommended_weight_kg)
        .bind(prescription.rest_seconds)
        .bind(&prescription.notes)
        .execute(self.pool())
        .await?;

        Ok(SessionExercise {
            id: result.last_insert_rowid(),
            session_id: prescription.session_id,
            exercise_id: prescription.exercise_id,
            display_order: prescription.display_order,
            sets: prescription.sets,
            reps: prescription.reps,
            recommended_weight_kg: prescription.recommended_weight_kg,
            rest_seconds: prescription.rest_seconds,
            notes: prescription.notes.clone(),
        })
    }

    /// List a session's prescriptions in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_session_exercises(&self, session_id: i64) -> AppResult<Vec<SessionExercise>> {
        let rows = sqlx::query(
            r"
            SELECT id, session_id, exercise_id, display_order, sets, reps,
                   recommended_weight_kg, rest_seconds, notes
            FROM session_exercises
            WHERE session_id = $1
            ORDER BY display_order
            ",
        )
        .bind(session_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_session_exercise).collect()
    }

    /// Update a prescription
    ///
    /// # Errors
    ///
    /// Returns an error if the prescription does not exist.
    pub async fn update_session_exercise(&self, prescription: &SessionExercise) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE session_exercises SET
                display_order = $2,
                sets = $3,
                reps = $4,
                recommended_weight_kg = $5,
                rest_seconds = $6,
                notes = $7
            WHERE id = $1
            ",
        )
        .bind(prescription.id)
        .bind(prescription.display_order)
        .bind(prescription.sets)
        .bind(prescription.reps)
        .bind(prescription.recommended_weight_kg)
        .bind(prescription.rest_seconds)
        .bind(&prescription.notes)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("session exercise"));
        }
        Ok(())
    }

    /// Remove a prescription from a session
    ///
    /// # Errors
    ///
    /// Returns an error if the prescription does not exist.
    pub async fn remove_session_exercise(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM session_exercises WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("session exercise"));
        }
        Ok(())
    }

    // ========================================================================
    // Workout sets
    // ========================================================================

    /// Add a set to a session
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist.
    pub async fn add_workout_set(&self, set: &NewWorkoutSet) -> AppResult<WorkoutSet> {
        let result = sqlx::query(
            r"
            INSERT INTO workout_sets
                (session_id, set_number, target_reps, weight_kg, rest_seconds, completed, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(set.session_id)
        .bind(set.set_number)
        .bind(set.target_reps)
        .bind(set.weight_kg)
        .bind(set.rest_seconds)
        .bind(set.completed)
        .bind(&set.notes)
        .execute(self.pool())
        .await?;

        Ok(WorkoutSet {
            id: result.last_insert_rowid(),
            session_id: set.session_id,
            set_number: set.set_number,
            target_reps: set.target_reps,
            weight_kg: set.weight_kg,
            rest_seconds: set.rest_seconds,
            completed: set.completed,
            notes: set.notes.clone(),
        })
    }

    /// List a session's sets in set-number order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_workout_sets(&self, session_id: i64) -> AppResult<Vec<WorkoutSet>> {
        let rows = sqlx::query(
            r"
            SELECT id, session_id, set_number, target_reps, weight_kg, rest_seconds,
                   completed, notes
            FROM workout_sets
            WHERE session_id = $1
            ORDER BY set_number
            ",
        )
        .bind(session_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_workout_set).collect()
    }

    /// Update a set (typically marking it completed)
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist.
    pub async fn update_workout_set(&self, set: &WorkoutSet) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workout_sets SET
                set_number = $2,
                target_reps = $3,
                weight_kg = $4,
                rest_seconds = $5,
                completed = $6,
                notes = $7
            WHERE id = $1
            ",
        )
        .bind(set.id)
        .bind(set.set_number)
        .bind(set.target_reps)
        .bind(set.weight_kg)
        .bind(set.rest_seconds)
        .bind(set.completed)
        .bind(&set.notes)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("workout set"));
        }
        Ok(())
    }

    /// Delete a set
    ///
    /// # Errors
    ///
    /// Returns an error if the set does not exist.
    pub async fn delete_workout_set(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM workout_sets WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("workout set"));
        }
        Ok(())
    }

    // ========================================================================
    // Session injuries (contraindications)
    // ========================================================================

    /// Record that an injury contraindicates a session
    ///
    /// # Errors
    ///
    /// Returns an error if the injury or session does not exist.
    pub async fn add_session_injury(
        &self,
        contraindication: &NewSessionInjury,
    ) -> AppResult<SessionInjury> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO session_injuries
                (injury_id, session_id, contraindication, risk_level, recorded_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(contraindication.injury_id)
        .bind(contraindication.session_id)
        .bind(&contraindication.contraindication)
        .bind(contraindication.risk_level.as_str())
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(SessionInjury {
            id: result.last_insert_rowid(),
            injury_id: contraindication.injury_id,
            session_id: contraindication.session_id,
            contraindication: contraindication.contraindication.clone(),
            risk_level: contraindication.risk_level,
            recorded_at: now,
        })
    }

    /// List the contraindications recorded against a session
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_session_injuries(&self, session_id: i64) -> AppResult<Vec<SessionInjury>> {
        let rows = sqlx::query(
            r"
            SELECT id, injury_id, session_id, contraindication, risk_level, recorded_at
            FROM session_injuries
            WHERE session_id = $1
            ORDER BY recorded_at DESC
            ",
        )
        .bind(session_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_session_injury).collect()
    }

    /// List the sessions contraindicated by an injury
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_injury_sessions(&self, injury_id: i64) -> AppResult<Vec<SessionInjury>> {
        let rows = sqlx::query(
            r"
            SELECT id, injury_id, session_id, contraindication, risk_level, recorded_at
            FROM session_injuries
            WHERE injury_id = $1
            ORDER BY recorded_at DESC
            ",
        )
        .bind(injury_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_session_injury).collect()
    }

    /// Update the text or risk level of a contraindication
    ///
    /// # Errors
    ///
    /// Returns an error if the contraindication does not exist.
    pub async fn update_session_injury(&self, contraindication: &SessionInjury) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE session_injuries SET contraindication = $2, risk_level = $3 WHERE id = $1",
        )
        .bind(contraindication.id)
        .bind(&contraindication.contraindication)
        .bind(contraindication.risk_level.as_str())
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("session injury"));
        }
        Ok(())
    }

    /// Remove a contraindication
    ///
    /// # Errors
    ///
    /// Returns an error if the contraindication does not exist.
    pub async fn remove_session_injury(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM session_injuries WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("session injury"));
        }
        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

fn row_to_routine(row: &SqliteRow) -> AppResult<Routine> {
    let routine_type: String = row.get("routine_type");
    let level: String = row.get("level");

    Ok(Routine {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        routine_type: routine_type.parse()?,
        duration_weeks: row.get("duration_weeks"),
        days_per_week: row.get("days_per_week"),
        level: level.parse()?,
        active: row.get("active"),
        created_at: row.get("created_at"),
    })
}

fn row_to_session(row: &SqliteRow) -> AppResult<TrainingSession> {
    Ok(TrainingSession {
        id: row.get("id"),
        routine_id: row.get("routine_id"),
        name: row.get("name"),
        description: row.get("description"),
        weekday: row.get("weekday"),
        estimated_duration_minutes: row.get("estimated_duration_minutes"),
        display_order: row.get("display_order"),
    })
}

fn row_to_session_exercise(row: &SqliteRow) -> AppResult<SessionExercise> {
    Ok(SessionExercise {
        id: row.get("id"),
        session_id: row.get("session_id"),
        exercise_id: row.get("exercise_id"),
        display_order: row.get("display_order"),
        sets: row.get("sets"),
        reps: row.get("reps"),
        recommended_weight_kg: row.get("recommended_weight_kg"),
        rest_seconds: row.get("rest_seconds"),
        notes: row.get("notes"),
    })
}

fn row_to_workout_set(row: &SqliteRow) -> AppResult<WorkoutSet> {
    Ok(WorkoutSet {
        id: row.get("id"),
        session_id: row.get("session_id"),
        set_number: row.get("set_number"),
        target_reps: row.get("target_reps"),
        weight_kg: row.get("weight_kg"),
        rest_seconds: row.get("rest_seconds"),
        completed: row.get("completed"),
        notes: row.get("notes"),
    })
}

fn row_to_session_injury(row: &SqliteRow) -> AppResult<SessionInjury> {
    let risk_level: String = row.get("risk_level");

    Ok(SessionInjury {
        id: row.get("id"),
        injury_id: row.get("injury_id"),
        session_id: row.get("session_id"),
        contraindication: row.get("contraindication"),
        risk_level: risk_level.parse()?,
        recorded_at: row.get("recorded_at"),
    })
}
