// ABOUTME: Exercise catalog database operations
// ABOUTME: Categories, muscle groups, equipment, attribute taxonomy, exercises, links, media
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AttributeOption, AttributeSubOption, AttributeType, BodyRegion, Equipment, Exercise,
    ExerciseAttributeLink, ExerciseCategory, ExerciseEquipmentLink, ExerciseMedia,
    ExerciseMuscleLink, MuscleGroup, NewExercise, NewExerciseEquipmentLink, NewExerciseMedia,
    NewExerciseMuscleLink,
};

impl Database {
    /// Create the exercise catalog tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_exercises(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_categories (
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
            CREATE TABLE IF NOT EXISTS muscle_groups (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL DEFAULT '',
                body_region TEXT NOT NULL
                    CHECK (body_region IN ('upper', 'lower', 'core', 'full_body'))
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS equipment (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL DEFAULT '',
                available_at_home BOOLEAN NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS attribute_types (
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
            CREATE TABLE IF NOT EXISTS attribute_options (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type_id INTEGER NOT NULL REFERENCES attribute_types(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS attribute_sub_options (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                option_id INTEGER NOT NULL REFERENCES attribute_options(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                instructions TEXT NOT NULL DEFAULT '',
                category_id INTEGER REFERENCES exercise_categories(id) ON DELETE SET NULL,
                difficulty TEXT NOT NULL
                    CHECK (difficulty IN ('beginner', 'intermediate', 'advanced')),
                estimated_calories INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_muscle_links (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                exercise_id INTEGER NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
                muscle_group_id INTEGER NOT NULL REFERENCES muscle_groups(id) ON DELETE CASCADE,
                focus_level TEXT NOT NULL CHECK (focus_level IN ('primary', 'secondary')),
                activation_percent INTEGER NOT NULL DEFAULT 50
                    CHECK (activation_percent BETWEEN 1 AND 100),
                UNIQUE (exercise_id, muscle_group_id)
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_equipment_links (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                exercise_id INTEGER NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
                equipment_id INTEGER NOT NULL REFERENCES equipment(id) ON DELETE CASCADE,
                mandatory BOOLEAN NOT NULL DEFAULT 1,
                quantity INTEGER NOT NULL DEFAULT 1,
                UNIQUE (exercise_id, equipment_id)
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_attribute_links (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                exercise_id INTEGER NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
                sub_option_id INTEGER NOT NULL
                    REFERENCES attribute_sub_options(id) ON DELETE CASCADE,
                UNIQUE (exercise_id, sub_option_id)
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_media (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                exercise_id INTEGER NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
                media_type TEXT NOT NULL CHECK (media_type IN ('image', 'video', 'gif')),
                file_reference TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                is_primary BOOLEAN NOT NULL DEFAULT 0,
                display_order INTEGER NOT NULL DEFAULT 1,
                uploaded_at DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercises_category ON exercises(category_id)",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercise_media_exercise
             ON exercise_media(exercise_id, display_order)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// Create an exercise category
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// name is taken.
    pub async fn create_exercise_category(
        &self,
        name: &str,
        description: &str,
    ) -> AppResult<ExerciseCategory> {
        let result =
            sqlx::query("INSERT INTO exercise_categories (name, description) VALUES ($1, $2)")
                .bind(name)
                .bind(description)
                .execute(self.pool())
                .await?;

        Ok(ExerciseCategory {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            description: description.to_owned(),
        })
    }

    /// Get a category by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_exercise_category(&self, id: i64) -> AppResult<Option<ExerciseCategory>> {
        let row =
            sqlx::query("SELECT id, name, description FROM exercise_categories WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool())
                .await?;

        row.as_ref().map(row_to_category).transpose()
    }

    /// List all categories
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_exercise_categories(&self) -> AppResult<Vec<ExerciseCategory>> {
        let rows =
            sqlx::query("SELECT id, name, description FROM exercise_categories ORDER BY name")
                .fetch_all(self.pool())
                .await?;

        rows.iter().map(row_to_category).collect()
    }

    /// Update a category
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist or the new name is
    /// taken.
    pub async fn update_exercise_category(&self, category: &ExerciseCategory) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE exercise_categories SET name = $2, description = $3 WHERE id = $1",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise category"));
        }
        Ok(())
    }

    /// Delete a category; referencing exercises are detached, not deleted
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist.
    pub async fn delete_exercise_category(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercise_categories WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise category"));
        }
        Ok(())
    }

    // ========================================================================
    // Muscle groups
    // ========================================================================

    /// Create a muscle group
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// name is taken.
    pub async fn create_muscle_group(
        &self,
        name: &str,
        description: &str,
        body_region: BodyRegion,
    ) -> AppResult<MuscleGroup> {
        let result = sqlx::query(
            "INSERT INTO muscle_groups (name, description, body_region) VALUES ($1, $2, $3)",
        )
        .bind(name)
        .bind(description)
        .bind(body_region.as_str())
        .execute(self.pool())
        .await?;

        Ok(MuscleGroup {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            description: description.to_owned(),
            body_region,
        })
    }

    /// Get a muscle group by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_muscle_group(&self, id: i64) -> AppResult<Option<MuscleGroup>> {
        let row = sqlx::query(
            "SELECT id, name, description, body_region FROM muscle_groups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_muscle_group).transpose()
    }

    /// List all muscle groups
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_muscle_groups(&self) -> AppResult<Vec<MuscleGroup>> {
        let rows = sqlx::query(
            "SELECT id, name, description, body_region FROM muscle_groups ORDER BY name",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_muscle_group).collect()
    }

    /// Update a muscle group
    ///
    /// # Errors
    ///
    /// Returns an error if the group does not exist or the new name is taken.
    pub async fn update_muscle_group(&self, group: &MuscleGroup) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE muscle_groups SET name = $2, description = $3, body_region = $4 WHERE id = $1",
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(&group.description)
        .bind(group.body_region.as_str())
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("muscle group"));
        }
        Ok(())
    }

    /// Delete a muscle group and its exercise links
    ///
    /// # Errors
    ///
    /// Returns an error if the group does not exist.
    pub async fn delete_muscle_group(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM muscle_groups WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("muscle group"));
        }
        Ok(())
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    /// Create an equipment entry
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// name is taken.
    pub async fn create_equipment(
        &self,
        name: &str,
        description: &str,
        available_at_home: bool,
    ) -> AppResult<Equipment> {
        let result = sqlx::query(
            "INSERT INTO equipment (name, description, available_at_home) VALUES ($1, $2, $3)",
        )
        .bind(name)
        .bind(description)
        .bind(available_at_home)
        .execute(self.pool())
        .await?;

        Ok(Equipment {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            description: description.to_owned(),
            available_at_home,
        })
    }

    /// Get an equipment entry by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_equipment(&self, id: i64) -> AppResult<Option<Equipment>> {
        let row = sqlx::query(
            "SELECT id, name, description, available_at_home FROM equipment WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_equipment).transpose()
    }

    /// List all equipment
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_equipment(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query(
            "SELECT id, name, description, available_at_home FROM equipment ORDER BY name",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_equipment).collect()
    }

    /// Update an equipment entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist or the new name is taken.
    pub async fn update_equipment(&self, equipment: &Equipment) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE equipment SET name = $2, description = $3, available_at_home = $4
             WHERE id = $1",
        )
        .bind(equipment.id)
        .bind(&equipment.name)
        .bind(&equipment.description)
        .bind(equipment.available_at_home)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("equipment"));
        }
        Ok(())
    }

    /// Delete an equipment entry and its exercise links
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist.
    pub async fn delete_equipment(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("equipment"));
        }
        Ok(())
    }

    // ========================================================================
    // Attribute taxonomy
    // ========================================================================

    /// Create an attribute type (taxonomy root)
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// name is taken.
    pub async fn create_attribute_type(
        &self,
        name: &str,
        description: &str,
    ) -> AppResult<AttributeType> {
        let result =
            sqlx::query("INSERT INTO attribute_types (name, description) VALUES ($1, $2)")
                .bind(name)
                .bind(description)
                .execute(self.pool())
                .await?;

        Ok(AttributeType {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            description: description.to_owned(),
        })
    }

    /// List all attribute types
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_attribute_types(&self) -> AppResult<Vec<AttributeType>> {
        let rows = sqlx::query("SELECT id, name, description FROM attribute_types ORDER BY name")
            .fetch_all(self.pool())
            .await?;

        rows.iter()
            .map(|row| {
                Ok(AttributeType {
                    id: row.get("id"),
                    name: row.get("name"),
                    description: row.get("description"),
                })
            })
            .collect()
    }

    /// Delete an attribute type and its whole sub-tree
    ///
    /// # Errors
    ///
    /// Returns an error if the type does not exist.
    pub async fn delete_attribute_type(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM attribute_types WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("attribute type"));
        }
        Ok(())
    }

    /// Create an attribute option under a type
    ///
    /// # Errors
    ///
    /// Returns an error if the type does not exist.
    pub async fn create_attribute_option(
        &self,
        type_id: i64,
        name: &str,
        description: &str,
    ) -> AppResult<AttributeOption> {
        let result = sqlx::query(
            "INSERT INTO attribute_options (type_id, name, description) VALUES ($1, $2, $3)",
        )
        .bind(type_id)
        .bind(name)
        .bind(description)
        .execute(self.pool())
        .await?;

        Ok(AttributeOption {
            id: result.last_insert_rowid(),
            type_id,
            name: name.to_owned(),
            description: description.to_owned(),
        })
    }

    /// List the options of an attribute type
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_attribute_options(&self, type_id: i64) -> AppResult<Vec<AttributeOption>> {
        let rows = sqlx::query(
            "SELECT id, type_id, name, description FROM attribute_options
             WHERE type_id = $1 ORDER BY name",
        )
        .bind(type_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(AttributeOption {
                    id: row.get("id"),
                    type_id: row.get("type_id"),
                    name: row.get("name"),
                    description: row.get("description"),
                })
            })
            .collect()
    }

    /// Delete an attribute option, its sub-options, and their exercise links
    ///
    /// # Errors
    ///
    /// Returns an error if the option does not exist.
    pub async fn delete_attribute_option(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM attribute_options WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("attribute option"));
        }
        Ok(())
    }

    /// Create an attribute sub-option under an option
    ///
    /// # Errors
    ///
    /// Returns an error if the option does not exist.
    pub async fn create_attribute_sub_option(
        &self,
        option_id: i64,
        name: &str,
        description: &str,
    ) -> AppResult<AttributeSubOption> {
        let result = sqlx::query(
            "INSERT INTO attribute_sub_options (option_id, name, description) VALUES ($1, $2, $3)",
        )
        .bind(option_id)
        .bind(name)
        .bind(description)
        .execute(self.pool())
        .await?;

        Ok(AttributeSubOption {
            id: result.last_insert_rowid(),
            option_id,
            name: name.to_owned(),
            description: description.to_owned(),
        })
    }

    /// List the sub-options of an attribute option
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_attribute_sub_options(
        &self,
        option_id: i64,
    ) -> AppResult<Vec<AttributeSubOption>> {
        let rows = sqlx::query(
            "SELECT id, option_id, name, description FROM attribute_sub_options
             WHERE option_id = $1 ORDER BY name",
        )
        .bind(option_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(AttributeSubOption {
                    id: row.get("id"),
                    option_id: row.get("option_id"),
                    name: row.get("name"),
                    description: row.get("description"),
                })
            })
            .collect()
    }

    /// Delete an attribute sub-option and its exercise links
    ///
    /// # Errors
    ///
    /// Returns an error if the sub-option does not exist.
    pub async fn delete_attribute_sub_option(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM attribute_sub_options WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("attribute sub-option"));
        }
        Ok(())
    }

    // ========================================================================
    // Exercises
    // ========================================================================

    /// Create an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced category is missing.
    pub async fn create_exercise(&self, exercise: &NewExercise) -> AppResult<Exercise> {
        let result = sqlx::query(
            r"
            INSERT INTO exercises
                (name, description, instructions, category_id, difficulty, estimated_calories)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&exercise.name)
        .bind(&exercise.description)
        .bind(&exercise.instructions)
        .bind(exercise.category_id)
        .bind(exercise.difficulty.as_str())
        .bind(exercise.estimated_calories)
        .execute(self.pool())
        .await?;

        Ok(Exercise {
            id: result.last_insert_rowid(),
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            instructions: exercise.instructions.clone(),
            category_id: exercise.category_id,
            difficulty: exercise.difficulty,
            estimated_calories: exercise.estimated_calories,
        })
    }

    /// Get an exercise by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_exercise(&self, id: i64) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, instructions, category_id, difficulty,
                   estimated_calories
            FROM exercises WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    /// List all exercises
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, instructions, category_id, difficulty,
                   estimated_calories
            FROM exercises ORDER BY name
            ",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Update an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise does not exist.
    pub async fn update_exercise(&self, exercise: &Exercise) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE exercises SET
                name = $2,
                description = $3,
                instructions = $4,
                category_id = $5,
                difficulty = $6,
                estimated_calories = $7
            WHERE id = $1
            ",
        )
        .bind(exercise.id)
        .bind(&exercise.name)
        .bind(&exercise.description)
        .bind(&exercise.instructions)
        .bind(exercise.category_id)
        .bind(exercise.difficulty.as_str())
        .bind(exercise.estimated_calories)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise"));
        }
        Ok(())
    }

    /// Delete an exercise with its media and all junction rows
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise does not exist.
    pub async fn delete_exercise(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise"));
        }
        Ok(())
    }

    // ========================================================================
    // Muscle / equipment / attribute links
    // ========================================================================

    /// Link an exercise to a muscle group with focus and activation data
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ValueOutOfRange`] if the
    /// activation percentage is outside 1-100, or
    /// [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the pair is
    /// already linked.
    pub async fn link_exercise_muscle(
        &self,
        link: &NewExerciseMuscleLink,
    ) -> AppResult<ExerciseMuscleLink> {
        let result = sqlx::query(
            r"
            INSERT INTO exercise_muscle_links
                (exercise_id, muscle_group_id, focus_level, activation_percent)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(link.exercise_id)
        .bind(link.muscle_group_id)
        .bind(link.focus_level.as_str())
        .bind(link.activation_percent)
        .execute(self.pool())
        .await?;

        Ok(ExerciseMuscleLink {
            id: result.last_insert_rowid(),
            exercise_id: link.exercise_id,
            muscle_group_id: link.muscle_group_id,
            focus_level: link.focus_level,
            activation_percent: link.activation_percent,
        })
    }

    /// List an exercise's muscle links
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_exercise_muscle_links(
        &self,
        exercise_id: i64,
    ) -> AppResult<Vec<ExerciseMuscleLink>> {
        let rows = sqlx::query(
            r"
            SELECT id, exercise_id, muscle_group_id, focus_level, activation_percent
            FROM exercise_muscle_links
            WHERE exercise_id = $1
            ORDER BY activation_percent DESC
            ",
        )
        .bind(exercise_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_muscle_link).collect()
    }

    /// Update the focus/activation attributes of a muscle link
    ///
    /// # Errors
    ///
    /// Returns an error if the link does not exist or the activation is out
    /// of range.
    pub async fn update_exercise_muscle_link(&self, link: &ExerciseMuscleLink) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE exercise_muscle_links SET focus_level = $2, activation_percent = $3
             WHERE id = $1",
        )
        .bind(link.id)
        .bind(link.focus_level.as_str())
        .bind(link.activation_percent)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise muscle link"));
        }
        Ok(())
    }

    /// Remove a muscle link
    ///
    /// # Errors
    ///
    /// Returns an error if the link does not exist.
    pub async fn unlink_exercise_muscle(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercise_muscle_links WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise muscle link"));
        }
        Ok(())
    }

    /// Link an exercise to a piece of equipment
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// pair is already linked.
    pub async fn link_exercise_equipment(
        &self,
        link: &NewExerciseEquipmentLink,
    ) -> AppResult<ExerciseEquipmentLink> {
        let result = sqlx::query(
            r"
            INSERT INTO exercise_equipment_links (exercise_id, equipment_id, mandatory, quantity)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(link.exercise_id)
        .bind(link.equipment_id)
        .bind(link.mandatory)
        .bind(link.quantity)
        .execute(self.pool())
        .await?;

        Ok(ExerciseEquipmentLink {
            id: result.last_insert_rowid(),
            exercise_id: link.exercise_id,
            equipment_id: link.equipment_id,
            mandatory: link.mandatory,
            quantity: link.quantity,
        })
    }

    /// List an exercise's equipment links
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_exercise_equipment_links(
        &self,
        exercise_id: i64,
    ) -> AppResult<Vec<ExerciseEquipmentLink>> {
        let rows = sqlx::query(
            r"
            SELECT id, exercise_id, equipment_id, mandatory, quantity
            FROM exercise_equipment_links
            WHERE exercise_id = $1
            ORDER BY id
            ",
        )
        .bind(exercise_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_equipment_link).collect()
    }

    /// Update the mandatory/quantity attributes of an equipment link
    ///
    /// # Errors
    ///
    /// Returns an error if the link does not exist.
    pub async fn update_exercise_equipment_link(
        &self,
        link: &ExerciseEquipmentLink,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE exercise_equipment_links SET mandatory = $2, quantity = $3 WHERE id = $1",
        )
        .bind(link.id)
        .bind(link.mandatory)
        .bind(link.quantity)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise equipment link"));
        }
        Ok(())
    }

    /// Remove an equipment link
    ///
    /// # Errors
    ///
    /// Returns an error if the link does not exist.
    pub async fn unlink_exercise_equipment(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercise_equipment_links WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise equipment link"));
        }
        Ok(())
    }

    /// Tag an exercise with an attribute sub-option
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] if the
    /// pair is already linked.
    pub async fn link_exercise_attribute(
        &self,
        exercise_id: i64,
        sub_option_id: i64,
    ) -> AppResult<ExerciseAttributeLink> {
        let result = sqlx::query(
            "INSERT INTO exercise_attribute_links (exercise_id, sub_option_id) VALUES ($1, $2)",
        )
        .bind(exercise_id)
        .bind(sub_option_id)
        .execute(self.pool())
        .await?;

        Ok(ExerciseAttributeLink {
            id: result.last_insert_rowid(),
            exercise_id,
            sub_option_id,
        })
    }

    /// List an exercise's attribute links
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_exercise_attribute_links(
        &self,
        exercise_id: i64,
    ) -> AppResult<Vec<ExerciseAttributeLink>> {
        let rows = sqlx::query(
            "SELECT id, exercise_id, sub_option_id FROM exercise_attribute_links
             WHERE exercise_id = $1 ORDER BY id",
        )
        .bind(exercise_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(ExerciseAttributeLink {
                    id: row.get("id"),
                    exercise_id: row.get("exercise_id"),
                    sub_option_id: row.get("sub_option_id"),
                })
            })
            .collect()
    }

    /// Remove an attribute link
    ///
    /// # Errors
    ///
    /// Returns an error if the link does not exist.
    pub async fn unlink_exercise_attribute(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercise_attribute_links WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise attribute link"));
        }
        Ok(())
    }

    // ========================================================================
    // Media
    // ========================================================================

    /// Attach a media file reference to an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise does not exist.
    pub async fn add_exercise_media(&self, media: &NewExerciseMedia) -> AppResult<ExerciseMedia> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO exercise_media
                (exercise_id, media_type, file_reference, title, description,
                 is_primary, display_order, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(media.exercise_id)
        .bind(media.media_type.as_str())
        .bind(&media.file_reference)
        .bind(&media.title)
        .bind(&media.description)
        .bind(media.is_primary)
        .bind(media.display_order)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(ExerciseMedia {
            id: result.last_insert_rowid(),
            exercise_id: media.exercise_id,
            media_type: media.media_type,
            file_reference: media.file_reference.clone(),
            title: media.title.clone(),
            description: media.description.clone(),
            is_primary: media.is_primary,
            display_order: media.display_order,
            uploaded_at: now,
        })
    }

    /// List an exercise's media, in gallery order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_exercise_media(&self, exercise_id: i64) -> AppResult<Vec<ExerciseMedia>> {
        let rows = sqlx::query(
            r"
            SELECT id, exercise_id, media_type, file_reference, title, description,
                   is_primary, display_order, uploaded_at
            FROM exercise_media
            WHERE exercise_id = $1
            ORDER BY display_order
            ",
        )
        .bind(exercise_id)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_media).collect()
    }

    /// Delete a media row (the underlying file lives in external storage)
    ///
    /// # Errors
    ///
    /// Returns an error if the media row does not exist.
    pub async fn delete_exercise_media(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercise_media WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("exercise media"));
        }
        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

fn row_to_category(row: &SqliteRow) -> AppResult<ExerciseCategory> {
    Ok(ExerciseCategory {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    })
}

fn row_to_muscle_group(row: &SqliteRow) -> AppResult<MuscleGroup> {
    let body_region: String = row.get("body_region");

    Ok(MuscleGroup {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        body_region: body_region.parse()?,
    })
}

fn row_to_equipment(row: &SqliteRow) -> AppResult<Equipment> {
    Ok(Equipment {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        available_at_home: row.get("available_at_home"),
    })
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    let difficulty: String = row.get("difficulty");

    Ok(Exercise {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        instructions: row.get("instructions"),
        category_id: row.get("category_id"),
        difficulty: difficulty.parse()?,
        estimated_calories: row.get("estimated_calories"),
    })
}

fn row_to_muscle_link(row: &SqliteRow) -> AppResult<ExerciseMuscleLink> {
    let focus_level: String = row.get("focus_level");

    Ok(ExerciseMuscleLink {
        id: row.get("id"),
        exercise_id: row.get("exercise_id"),
        muscle_group_id: row.get("muscle_group_id"),
        focus_level: focus_level.parse()?,
        activation_percent: row.get("activation_percent"),
    })
}

fn row_to_equipment_link(row: &SqliteRow) -> AppResult<ExerciseEquipmentLink> {
    Ok(ExerciseEquipmentLink {
        id: row.get("id"),
        exercise_id: row.get("exercise_id"),
        equipment_id: row.get("equipment_id"),
        mandatory: row.get("mandatory"),
        quantity: row.get("quantity"),
    })
}

fn row_to_media(row: &SqliteRow) -> AppResult<ExerciseMedia> {
    let media_type: String = row.get("media_type");

    Ok(ExerciseMedia {
        id: row.get("id"),
        exercise_id: row.get("exercise_id"),
        media_type: media_type.parse()?,
        file_reference: row.get("file_reference"),
        title: row.get("title"),
        description: row.get("description"),
        is_primary: row.get("is_primary"),
        display_order: row.get("display_order"),
        uploaded_at: row.get("uploaded_at"),
    })
}
