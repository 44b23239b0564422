// ABOUTME: Training cluster models for routines, sessions, sets, and contraindications
// ABOUTME: Routine, TrainingSession, SessionExercise, WorkoutSet, SessionInjury definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::exercise::ExperienceLevel;

/// Kind of training routine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoutineType {
    /// Strength focus
    Strength,
    /// Hypertrophy focus
    Hypertrophy,
    /// Endurance focus
    Endurance,
    /// Functional training
    Functional,
    /// Cardio focus
    Cardio,
    /// Mixed goals
    Mixed,
}

impl RoutineType {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Endurance => "endurance",
            Self::Functional => "functional",
            Self::Cardio => "cardio",
            Self::Mixed => "mixed",
        }
    }
}

impl FromStr for RoutineType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "endurance" => Ok(Self::Endurance),
            "functional" => Ok(Self::Functional),
            "cardio" => Ok(Self::Cardio),
            "mixed" => Ok(Self::Mixed),
            _ => Err(AppError::invalid_input(format!("Invalid routine type: {s}"))),
        }
    }
}

impl Display for RoutineType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// How risky a training session is for a given injury
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low risk, proceed with awareness
    Low,
    /// Medium risk, adapt loads
    Medium,
    /// High risk, substitute movements
    High,
    /// Session must be skipped while the injury is active
    Forbidden,
}

impl RiskLevel {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Forbidden => "forbidden",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "forbidden" => Ok(Self::Forbidden),
            _ => Err(AppError::invalid_input(format!("Invalid risk level: {s}"))),
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Training routine, a multi-week plan of sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    /// Surrogate key
    pub id: i64,
    /// Routine name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Kind of routine
    pub routine_type: RoutineType,
    /// Planned duration in weeks
    pub duration_weeks: i64,
    /// Training days per week, 1-7
    pub days_per_week: i64,
    /// Intended experience level
    pub level: ExperienceLevel,
    /// Whether the routine is active
    pub active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a [`Routine`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoutine {
    /// Routine name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Kind of routine
    pub routine_type: RoutineType,
    /// Planned duration in weeks
    pub duration_weeks: i64,
    /// Training days per week, 1-7
    pub days_per_week: i64,
    /// Intended experience level
    pub level: ExperienceLevel,
    /// Whether the routine is active
    pub active: bool,
}

/// A single session within a routine (e.g. "push day")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Surrogate key
    pub id: i64,
    /// Owning routine
    pub routine_id: i64,
    /// Session name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Day of the week, 1 (Monday) through 7 (Sunday)
    pub weekday: i64,
    /// Estimated duration in minutes
    pub estimated_duration_minutes: i64,
    /// Position within the routine
    pub display_order: i64,
}

/// Fields required to create a [`TrainingSession`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrainingSession {
    /// Owning routine
    pub routine_id: i64,
    /// Session name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Day of the week, 1-7
    pub weekday: i64,
    /// Estimated duration in minutes
    pub estimated_duration_minutes: i64,
    /// Position within the routine
    pub display_order: i64,
}

/// Junction entity: an exercise prescribed within a session
///
/// Carries the per-session prescription: ordering, sets, reps, recommended
/// weight, and rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExercise {
    /// Surrogate key
    pub id: i64,
    /// Owning session
    pub session_id: i64,
    /// Prescribed exercise
    pub exercise_id: i64,
    /// Position within the session
    pub display_order: i64,
    /// Number of sets
    pub sets: i64,
    /// Target repetitions per set
    pub reps: i64,
    /// Recommended working weight in kilograms, if any
    pub recommended_weight_kg: Option<f64>,
    /// Rest between sets, in seconds
    pub rest_seconds: i64,
    /// Free-form notes
    pub notes: String,
}

/// Fields required to create a [`SessionExercise`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionExercise {
    /// Owning session
    pub session_id: i64,
    /// Prescribed exercise
    pub exercise_id: i64,
    /// Position within the session
    pub display_order: i64,
    /// Number of sets
    pub sets: i64,
    /// Target repetitions per set
    pub reps: i64,
    /// Recommended working weight in kilograms, if any
    pub recommended_weight_kg: Option<f64>,
    /// Rest between sets, in seconds
    pub rest_seconds: i64,
    /// Free-form notes
    pub notes: String,
}

/// A set performed (or planned) within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Surrogate key
    pub id: i64,
    /// Owning session
    pub session_id: i64,
    /// Set number within the session
    pub set_number: i64,
    /// Target repetitions
    pub target_reps: i64,
    /// Weight in kilograms, if applicable
    pub weight_kg: Option<f64>,
    /// Rest after the set, in seconds
    pub rest_seconds: i64,
    /// Whether the set was completed
    pub completed: bool,
    /// Free-form notes
    pub notes: String,
}

/// Fields required to create a [`WorkoutSet`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutSet {
    /// Owning session
    pub session_id: i64,
    /// Set number within the session
    pub set_number: i64,
    /// Target repetitions
    pub target_reps: i64,
    /// Weight in kilograms, if applicable
    pub weight_kg: Option<f64>,
    /// Rest after the set, in seconds
    pub rest_seconds: i64,
    /// Whether the set was completed
    pub completed: bool,
    /// Free-form notes
    pub notes: String,
}

/// Junction entity: a contraindication between an injury and a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInjury {
    /// Surrogate key
    pub id: i64,
    /// The injury
    pub injury_id: i64,
    /// The affected session
    pub session_id: i64,
    /// Why this injury affects this session
    pub contraindication: String,
    /// How risky the session is with this injury
    pub risk_level: RiskLevel,
    /// When the contraindication was recorded
    pub recorded_at: DateTime<Utc>,
}

/// Fields required to record a [`SessionInjury`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionInjury {
    /// The injury
    pub injury_id: i64,
    /// The affected session
    pub session_id: i64,
    /// Why this injury affects this session
    pub contraindication: String,
    /// How risky the session is with this injury
    pub risk_level: RiskLevel,
}
