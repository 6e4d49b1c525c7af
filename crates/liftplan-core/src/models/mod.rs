// ABOUTME: Core data models shared by the engine and the plan service
// ABOUTME: Profiles, catalog templates, generated exercises, plans and completion records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models derive serde so collaborators can move them across their own boundaries.

mod exercise;
mod plan;
mod profile;
mod record;

pub use exercise::{
    DifficultyTier, ExerciseCategory, ExerciseGroups, ExerciseTemplate, ExerciseType,
    GeneratedExercise, StoredExercise,
};
pub use plan::{validate_frequency, NewWorkoutPlan, WorkoutPlan};
pub use profile::{
    focus_muscle_tags, DifficultyPreference, ExperienceTier, FitnessGoal, FocusArea, Gender,
    Profile, TrainingPreferences,
};
pub use record::{RecordDraft, TrainingData, WorkoutRecord};
