// ABOUTME: Progress cluster models for per-session tracking and periodic reports
// ABOUTME: ProgressEntry and Report definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Report period type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// One week
    Weekly,
    /// One month
    Monthly,
    /// Three months
    Quarterly,
    /// Arbitrary user-picked range
    Custom,
}

impl ReportType {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ReportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "custom" => Ok(Self::Custom),
            _ => Err(AppError::invalid_input(format!("Invalid report type: {s}"))),
        }
    }
}

impl Display for ReportType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Progress recorded for a profile after (or during) a training session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Surrogate key
    pub id: i64,
    /// Owning profile
    pub profile_id: i64,
    /// Session this entry tracks
    pub session_id: i64,
    /// When the entry was recorded
    pub recorded_at: DateTime<Utc>,
    /// Body weight at the time, kilograms
    pub body_weight_kg: f64,
    /// Actual session duration in minutes
    pub duration_minutes: i64,
    /// Calories burned
    pub calories_burned: i64,
    /// Perceived intensity, 1 (easy) through 10 (maximal)
    pub intensity: i64,
    /// Whether the session was completed
    pub completed: bool,
    /// Free-form notes
    pub notes: String,
}

/// Fields required to create a [`ProgressEntry`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProgressEntry {
    /// Owning profile
    pub profile_id: i64,
    /// Session this entry tracks
    pub session_id: i64,
    /// Body weight at the time, kilograms
    pub body_weight_kg: f64,
    /// Actual session duration in minutes
    pub duration_minutes: i64,
    /// Calories burned
    pub calories_burned: i64,
    /// Perceived intensity, 1-10
    pub intensity: i64,
    /// Whether the session was completed
    pub completed: bool,
    /// Free-form notes
    pub notes: String,
}

/// Periodic summary report generated for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Surrogate key
    pub id: i64,
    /// Owning profile
    pub profile_id: i64,
    /// Period type
    pub report_type: ReportType,
    /// Range start
    pub start_date: NaiveDate,
    /// Range end
    pub end_date: NaiveDate,
    /// Sessions completed in the range
    pub completed_sessions: i64,
    /// Total calories burned in the range
    pub total_calories_burned: i64,
    /// Body weight at range start, kilograms
    pub start_weight_kg: f64,
    /// Body weight at range end, kilograms
    pub end_weight_kg: f64,
    /// Free-form observations
    pub observations: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

/// Fields required to create a [`Report`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReport {
    /// Owning profile
    pub profile_id: i64,
    /// Period type
    pub report_type: ReportType,
    /// Range start
    pub start_date: NaiveDate,
    /// Range end
    pub end_date: NaiveDate,
    /// Sessions completed in the range
    pub completed_sessions: i64,
    /// Total calories burned in the range
    pub total_calories_burned: i64,
    /// Body weight at range start, kilograms
    pub start_weight_kg: f64,
    /// Body weight at range end, kilograms
    pub end_weight_kg: f64,
    /// Free-form observations
    pub observations: String,
}
