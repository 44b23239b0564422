// ABOUTME: Domain entity definitions for the fitness tracking schema
// ABOUTME: Profile, exercise catalog, training, nutrition, and progress clusters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vita Fitness

//! Domain entities and their vocabularies
//!
//! Each cluster mirrors a set of relational tables. Many-to-many
//! relationships are represented by junction entities with their own
//! surrogate identity and relationship-specific attributes, never by bare
//! link tables.

/// Exercise catalog cluster (categories, muscle groups, equipment, taxonomy)
pub mod exercise;

/// Nutrition cluster (daily logs and attached plans)
pub mod nutrition;

/// Profile cluster (objectives, physical states, settings, injuries)
pub mod profile;

/// Progress cluster (per-session entries and periodic reports)
pub mod progress;

/// Training cluster (routines, sessions, sets, contraindications)
pub mod training;

pub use exercise::{
    AttributeOption, AttributeSubOption, AttributeType, BodyRegion, Equipment, Exercise,
    ExerciseAttributeLink, ExerciseCategory, ExerciseEquipmentLink, ExerciseMedia,
    ExerciseMuscleLink, ExperienceLevel, FocusLevel, MediaType, MuscleGroup, NewExercise,
    NewExerciseEquipmentLink, NewExerciseMedia, NewExerciseMuscleLink,
};
pub use nutrition::{DietType, NewNutritionLog, NewNutritionPlan, NutritionLog, NutritionPlan};
pub use profile::{
    DistanceUnit, FatigueLevel, Gender, Injury, InjurySeverity, NewInjury, NewProfile,
    NewProfileStateEntry, NewUserSettings, Objective, PhysicalState, Profile, ProfileStateEntry,
    UserSettings, WeightUnit,
};
pub use progress::{NewProgressEntry, NewReport, ProgressEntry, Report, ReportType};
pub use training::{
    NewRoutine, NewSessionExercise, NewSessionInjury, NewTrainingSession, NewWorkoutSet,
    RiskLevel, Routine, RoutineType, SessionExercise, SessionInjury, TrainingSession, WorkoutSet,
};
