// ABOUTME: Exercise catalog models including taxonomy and junction entities
// ABOUTME: Category, MuscleGroup, Equipment, attribute hierarchy, Exercise, media definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Body region a muscle group belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    /// Upper body
    Upper,
    /// Lower body
    Lower,
    /// Core / abdomen
    Core,
    /// Whole-body
    FullBody,
}

impl BodyRegion {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Core => "core",
            Self::FullBody => "full_body",
        }
    }
}

impl FromStr for BodyRegion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "core" => Ok(Self::Core),
            "full_body" => Ok(Self::FullBody),
            _ => Err(AppError::invalid_input(format!("Invalid body region: {s}"))),
        }
    }
}

impl Display for BodyRegion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Experience level, shared by exercise difficulty and routine level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Suitable for beginners
    Beginner,
    /// Requires some training history
    Intermediate,
    /// Advanced trainees only
    Advanced,
}

impl ExperienceLevel {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(AppError::invalid_input(format!(
                "Invalid experience level: {s}"
            ))),
        }
    }
}

impl Display for ExperienceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a muscle group is the main target of an exercise or assists
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FocusLevel {
    /// Main target
    Primary,
    /// Assisting muscle
    Secondary,
}

impl FocusLevel {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl FromStr for FocusLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            _ => Err(AppError::invalid_input(format!("Invalid focus level: {s}"))),
        }
    }
}

/// Kind of media file attached to an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// Still image
    Image,
    /// Video clip
    Video,
    /// Animated GIF
    Gif,
}

impl MediaType {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Gif => "gif",
        }
    }
}

impl FromStr for MediaType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "gif" => Ok(Self::Gif),
            _ => Err(AppError::invalid_input(format!("Invalid media type: {s}"))),
        }
    }
}

/// Exercise category: strength, cardio, mobility, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCategory {
    /// Surrogate key
    pub id: i64,
    /// Unique category name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Muscle group: chest, back, legs, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGroup {
    /// Surrogate key
    pub id: i64,
    /// Unique muscle group name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Body region this group belongs to
    pub body_region: BodyRegion,
}

/// Equipment required by exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    /// Surrogate key
    pub id: i64,
    /// Unique equipment name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Whether a typical home gym has this
    pub available_at_home: bool,
}

/// Root of the exercise attribute taxonomy (e.g. "grip", "stance")
///
/// The taxonomy is hierarchical: type, option, sub-option. Exercises link to
/// the leaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeType {
    /// Surrogate key
    pub id: i64,
    /// Unique type name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Mid-level of the attribute taxonomy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeOption {
    /// Surrogate key
    pub id: i64,
    /// Owning attribute type
    pub type_id: i64,
    /// Option name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Leaf of the attribute taxonomy, linkable to exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSubOption {
    /// Surrogate key
    pub id: i64,
    /// Owning attribute option
    pub option_id: i64,
    /// Sub-option name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Catalog exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Surrogate key
    pub id: i64,
    /// Exercise name
    pub name: String,
    /// What the exercise is
    pub description: String,
    /// Step-by-step execution instructions
    pub instructions: String,
    /// Category, detached (NULL) when the category is deleted
    pub category_id: Option<i64>,
    /// Difficulty level
    pub difficulty: ExperienceLevel,
    /// Estimated calories burned per repetition/minute
    pub estimated_calories: i64,
}

/// Fields required to create an [`Exercise`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExercise {
    /// Exercise name
    pub name: String,
    /// What the exercise is
    pub description: String,
    /// Step-by-step execution instructions
    pub instructions: String,
    /// Optional category
    pub category_id: Option<i64>,
    /// Difficulty level
    pub difficulty: ExperienceLevel,
    /// Estimated calories burned per repetition/minute
    pub estimated_calories: i64,
}

/// Junction entity linking an exercise to a muscle group
///
/// Carries the focus level and the activation percentage (1-100) for that
/// muscle in this exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseMuscleLink {
    /// Surrogate key
    pub id: i64,
    /// Linked exercise
    pub exercise_id: i64,
    /// Linked muscle group
    pub muscle_group_id: i64,
    /// Primary or secondary involvement
    pub focus_level: FocusLevel,
    /// Muscle activation percentage, 1-100
    pub activation_percent: i64,
}

/// Fields required to create an [`ExerciseMuscleLink`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExerciseMuscleLink {
    /// Linked exercise
    pub exercise_id: i64,
    /// Linked muscle group
    pub muscle_group_id: i64,
    /// Primary or secondary involvement
    pub focus_level: FocusLevel,
    /// Muscle activation percentage, 1-100
    pub activation_percent: i64,
}

/// Junction entity linking an exercise to a piece of equipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEquipmentLink {
    /// Surrogate key
    pub id: i64,
    /// Linked exercise
    pub exercise_id: i64,
    /// Linked equipment
    pub equipment_id: i64,
    /// False means the equipment is optional/substitutable
    pub mandatory: bool,
    /// How many units are needed
    pub quantity: i64,
}

/// Fields required to create an [`ExerciseEquipmentLink`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExerciseEquipmentLink {
    /// Linked exercise
    pub exercise_id: i64,
    /// Linked equipment
    pub equipment_id: i64,
    /// False means the equipment is optional/substitutable
    pub mandatory: bool,
    /// How many units are needed
    pub quantity: i64,
}

/// Junction entity linking an exercise to an attribute sub-option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseAttributeLink {
    /// Surrogate key
    pub id: i64,
    /// Linked exercise
    pub exercise_id: i64,
    /// Linked taxonomy leaf
    pub sub_option_id: i64,
}

/// Media file attached to an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseMedia {
    /// Surrogate key
    pub id: i64,
    /// Owning exercise
    pub exercise_id: i64,
    /// Kind of media
    pub media_type: MediaType,
    /// Reference to the stored file (storage is external)
    pub file_reference: String,
    /// Title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Whether this is the exercise's primary media
    pub is_primary: bool,
    /// Position within the exercise's gallery
    pub display_order: i64,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
}

/// Fields required to attach [`ExerciseMedia`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExerciseMedia {
    /// Owning exercise
    pub exercise_id: i64,
    /// Kind of media
    pub media_type: MediaType,
    /// Reference to the stored file
    pub file_reference: String,
    /// Title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Whether this is the exercise's primary media
    pub is_primary: bool,
    /// Position within the exercise's gallery
    pub display_order: i64,
}
