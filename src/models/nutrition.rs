// ABOUTME: Nutrition cluster models for daily intake logs and attached plans
// ABOUTME: NutritionLog and NutritionPlan definitions with the diet-type vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Diet type of a nutrition plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Caloric deficit
    Cutting,
    /// Caloric surplus
    Bulking,
    /// Maintenance calories
    Maintenance,
    /// Ketogenic
    Ketogenic,
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
}

impl DietType {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cutting => "cutting",
            Self::Bulking => "bulking",
            Self::Maintenance => "maintenance",
            Self::Ketogenic => "ketogenic",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        }
    }
}

impl FromStr for DietType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cutting" => Ok(Self::Cutting),
            "bulking" => Ok(Self::Bulking),
            "maintenance" => Ok(Self::Maintenance),
            "ketogenic" => Ok(Self::Ketogenic),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            _ => Err(AppError::invalid_input(format!("Invalid diet type: {s}"))),
        }
    }
}

impl Display for DietType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Daily nutrition log, unique per (profile, date)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Surrogate key
    pub id: i64,
    /// Owning profile
    pub profile_id: i64,
    /// Calendar date of the log
    pub date: NaiveDate,
    /// Daily calorie target
    pub calorie_target: i64,
    /// Calories consumed so far
    pub calories_consumed: i64,
    /// Protein consumed, grams
    pub protein_g: f64,
    /// Carbohydrates consumed, grams
    pub carbs_g: f64,
    /// Fat consumed, grams
    pub fat_g: f64,
    /// Water intake, litres
    pub water_liters: f64,
    /// Free-form notes
    pub notes: String,
}

/// Fields required to create a [`NutritionLog`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNutritionLog {
    /// Owning profile
    pub profile_id: i64,
    /// Calendar date of the log
    pub date: NaiveDate,
    /// Daily calorie target
    pub calorie_target: i64,
    /// Calories consumed so far
    pub calories_consumed: i64,
    /// Protein consumed, grams
    pub protein_g: f64,
    /// Carbohydrates consumed, grams
    pub carbs_g: f64,
    /// Fat consumed, grams
    pub fat_g: f64,
    /// Water intake, litres
    pub water_liters: f64,
    /// Free-form notes
    pub notes: String,
}

/// Nutrition plan attached to a daily log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Surrogate key
    pub id: i64,
    /// Owning nutrition log
    pub log_id: i64,
    /// Plan name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Diet type
    pub diet_type: DietType,
    /// Planned duration in weeks
    pub duration_weeks: i64,
    /// Start date
    pub start_date: NaiveDate,
    /// End date
    pub end_date: NaiveDate,
    /// Whether the plan is active
    pub active: bool,
}

/// Fields required to create a [`NutritionPlan`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNutritionPlan {
    /// Owning nutrition log
    pub log_id: i64,
    /// Plan name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Diet type
    pub diet_type: DietType,
    /// Planned duration in weeks
    pub duration_weeks: i64,
    /// Start date
    pub start_date: NaiveDate,
    /// End date
    pub end_date: NaiveDate,
    /// Whether the plan is active
    pub active: bool,
}
