// ABOUTME: Profile cluster models for user identity, objectives, and physical condition
// ABOUTME: Objective, PhysicalState, Profile, ProfileStateEntry, UserSettings, Injury definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Gender recorded on a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Gender {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Invalid gender: {s}"))),
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Per-muscle-group fatigue recorded on a profile/state entry
///
/// Mirrors the five-step scale of `PhysicalState.severity_level`, but as a
/// categorical value chosen by the user rather than a property of the state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FatigueLevel {
    /// No noticeable fatigue
    Fresh,
    /// Slight fatigue
    SlightlyFatigued,
    /// Noticeable fatigue
    Fatigued,
    /// Heavy fatigue
    VeryFatigued,
    /// Excessive fatigue, training not advisable
    Exhausted,
}

impl FatigueLevel {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::SlightlyFatigued => "slightly_fatigued",
            Self::Fatigued => "fatigued",
            Self::VeryFatigued => "very_fatigued",
            Self::Exhausted => "exhausted",
        }
    }
}

impl FromStr for FatigueLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fresh" => Ok(Self::Fresh),
            "slightly_fatigued" => Ok(Self::SlightlyFatigued),
            "fatigued" => Ok(Self::Fatigued),
            "very_fatigued" => Ok(Self::VeryFatigued),
            "exhausted" => Ok(Self::Exhausted),
            _ => Err(AppError::invalid_input(format!(
                "Invalid fatigue level: {s}"
            ))),
        }
    }
}

impl Display for FatigueLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of an injury or medical restriction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InjurySeverity {
    /// Mild, training possible with care
    Mild,
    /// Moderate, affected movements should be adapted
    Moderate,
    /// Severe, affected movements contraindicated
    Severe,
}

impl InjurySeverity {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl FromStr for InjurySeverity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            _ => Err(AppError::invalid_input(format!(
                "Invalid injury severity: {s}"
            ))),
        }
    }
}

impl Display for InjurySeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Weight display unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms (default)
    #[default]
    Kg,
    /// Pounds
    Lb,
}

impl WeightUnit {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Self::Kg),
            "lb" => Ok(Self::Lb),
            _ => Err(AppError::invalid_input(format!("Invalid weight unit: {s}"))),
        }
    }
}

/// Distance display unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometres (default)
    #[default]
    Km,
    /// Miles
    Mi,
}

impl DistanceUnit {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Mi => "mi",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "km" => Ok(Self::Km),
            "mi" => Ok(Self::Mi),
            _ => Err(AppError::invalid_input(format!(
                "Invalid distance unit: {s}"
            ))),
        }
    }
}

/// Training objective: hypertrophy, weight loss, strength, ...
///
/// Catalog entity; profiles reference it nullable so deleting an objective
/// detaches profiles rather than deleting them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    /// Surrogate key
    pub id: i64,
    /// Unique objective name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Physical state catalog entry: fine, fatigued, injured, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalState {
    /// Surrogate key
    pub id: i64,
    /// State name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Severity scale, 1 (fine) through 5 (excessively fatigued)
    pub severity_level: i64,
}

/// User profile - the central entity of the schema
///
/// Identity is delegated to an external user-identity service; `user_id` is
/// the opaque account identifier it hands us, and exactly one profile may
/// exist per account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Surrogate key
    pub id: i64,
    /// External identity account, one profile per account
    pub user_id: Uuid,
    /// Full display name
    pub full_name: String,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Gender
    pub gender: Gender,
    /// Height in centimetres
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Current training objective, detached (NULL) when the objective is deleted
    pub objective_id: Option<i64>,
    /// Currently assigned routine, detached (NULL) when the routine is deleted
    pub routine_id: Option<i64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a [`Profile`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    /// External identity account
    pub user_id: Uuid,
    /// Full display name
    pub full_name: String,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Gender
    pub gender: Gender,
    /// Height in centimetres
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Optional training objective
    pub objective_id: Option<i64>,
    /// Optional assigned routine
    pub routine_id: Option<i64>,
}

/// Junction entity linking a profile to a physical state
///
/// Carries the relationship-specific attributes: which muscle group the
/// state applies to and how fatigued it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStateEntry {
    /// Surrogate key
    pub id: i64,
    /// Owning profile
    pub profile_id: i64,
    /// Referenced physical state
    pub state_id: i64,
    /// Muscle group this entry applies to (e.g. "biceps", "shoulders")
    pub muscle_group: String,
    /// Fatigue level for that muscle group
    pub fatigue_level: FatigueLevel,
    /// When the entry was recorded
    pub recorded_at: DateTime<Utc>,
    /// Free-form notes
    pub notes: String,
}

/// Fields required to record a [`ProfileStateEntry`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfileStateEntry {
    /// Owning profile
    pub profile_id: i64,
    /// Referenced physical state
    pub state_id: i64,
    /// Muscle group this entry applies to
    pub muscle_group: String,
    /// Fatigue level for that muscle group
    pub fatigue_level: FatigueLevel,
    /// Free-form notes
    pub notes: String,
}

/// Per-user settings, exactly one row per profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Surrogate key
    pub id: i64,
    /// Owning profile (unique)
    pub profile_id: i64,
    /// UI language code
    pub language: String,
    /// Weight display unit
    pub weight_unit: WeightUnit,
    /// Distance display unit
    pub distance_unit: DistanceUnit,
    /// Whether notifications are enabled
    pub notifications_enabled: bool,
    /// Whether the dark theme is active
    pub dark_theme: bool,
}

/// Fields required to create [`UserSettings`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserSettings {
    /// Owning profile
    pub profile_id: i64,
    /// UI language code
    pub language: String,
    /// Weight display unit
    pub weight_unit: WeightUnit,
    /// Distance display unit
    pub distance_unit: DistanceUnit,
    /// Whether notifications are enabled
    pub notifications_enabled: bool,
    /// Whether the dark theme is active
    pub dark_theme: bool,
}

impl NewUserSettings {
    /// Default settings for a freshly created profile
    #[must_use]
    pub fn defaults_for(profile_id: i64) -> Self {
        Self {
            profile_id,
            language: "en".to_owned(),
            weight_unit: WeightUnit::default(),
            distance_unit: DistanceUnit::default(),
            notifications_enabled: true,
            dark_theme: false,
        }
    }
}

/// Injury or medical restriction attached to a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Injury {
    /// Surrogate key
    pub id: i64,
    /// Owning profile
    pub profile_id: i64,
    /// Injury name
    pub name: String,
    /// Description of the injury
    pub description: String,
    /// Affected muscle group
    pub affected_muscle_group: String,
    /// Date the injury started
    pub start_date: NaiveDate,
    /// Estimated recovery date, if known
    pub estimated_recovery_date: Option<NaiveDate>,
    /// Whether the injury is still active
    pub active: bool,
    /// Severity
    pub severity: InjurySeverity,
}

/// Fields required to create an [`Injury`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInjury {
    /// Owning profile
    pub profile_id: i64,
    /// Injury name
    pub name: String,
    /// Description of the injury
    pub description: String,
    /// Affected muscle group
    pub affected_muscle_group: String,
    /// Date the injury started
    pub start_date: NaiveDate,
    /// Estimated recovery date, if known
    pub estimated_recovery_date: Option<NaiveDate>,
    /// Whether the injury is still active
    pub active: bool,
    /// Severity
    pub severity: InjurySeverity,
}
