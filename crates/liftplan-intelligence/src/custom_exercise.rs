// ABOUTME: Validation and normalisation of user-authored exercises added to a plan
// ABOUTME: Raw numeric fields are range-checked before conversion to a generated exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftplan_core::constants::limits;
use liftplan_core::errors::ValidationError;
use liftplan_core::models::{DifficultyTier, ExerciseCategory, ExerciseType, GeneratedExercise};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Custom exercise as submitted by the user
///
/// Numeric fields are signed so out-of-range submissions reach the validator intact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomExerciseInput {
    /// Display name
    pub name: String,
    /// Slot type
    pub exercise_type: ExerciseType,
    /// Catalog category
    pub category: ExerciseCategory,
    /// Muscle tags worked
    pub target_muscles: Vec<String>,
    /// Equipment tags needed
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Difficulty tier (1-3)
    pub difficulty: i64,
    /// Sets (1-6)
    pub sets: i64,
    /// Reps per set (1-50)
    pub reps: i64,
    /// Rest between sets in seconds (30-180)
    pub rest_time: i64,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

fn check_range(
    value: i64,
    min: i64,
    max: i64,
    err: fn(i64) -> ValidationError,
) -> Result<u32, ValidationError> {
    if (min..=max).contains(&value) {
        u32::try_from(value).map_err(|_| err(value))
    } else {
        Err(err(value))
    }
}

fn difficulty_tier(value: i64) -> Result<DifficultyTier, ValidationError> {
    u8::try_from(value)
        .map_err(|_| ValidationError::InvalidDifficulty(value))
        .and_then(DifficultyTier::try_from)
}

/// Validate a custom exercise, reporting the first failing rule
///
/// # Errors
///
/// Returns the `ValidationError` whose message describes the failing field
pub fn validate_custom_exercise(input: &CustomExerciseInput) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::EmptyExerciseName);
    }
    if input.target_muscles.is_empty() {
        return Err(ValidationError::MissingTargetMuscles);
    }
    check_range(
        input.sets,
        limits::CUSTOM_MIN_SETS,
        limits::CUSTOM_MAX_SETS,
        ValidationError::SetsOutOfRange,
    )?;
    check_range(
        input.reps,
        limits::CUSTOM_MIN_REPS,
        limits::CUSTOM_MAX_REPS,
        ValidationError::RepsOutOfRange,
    )?;
    check_range(
        input.rest_time,
        limits::CUSTOM_MIN_REST_SECONDS,
        limits::CUSTOM_MAX_REST_SECONDS,
        ValidationError::RestTimeOutOfRange,
    )?;
    difficulty_tier(input.difficulty)?;

    debug!(name = %input.name.trim(), "Custom exercise passed validation");
    Ok(())
}

impl CustomExerciseInput {
    /// Validate, then normalise into a plan exercise
    ///
    /// The name and notes are trimmed; missing notes become empty.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn into_exercise(self) -> Result<GeneratedExercise, ValidationError> {
        validate_custom_exercise(&self)?;
        Ok(GeneratedExercise {
            name: self.name.trim().to_owned(),
            exercise_type: self.exercise_type,
            category: self.category,
            sets: check_range(
                self.sets,
                limits::CUSTOM_MIN_SETS,
                limits::CUSTOM_MAX_SETS,
                ValidationError::SetsOutOfRange,
            )?,
            reps: check_range(
                self.reps,
                limits::CUSTOM_MIN_REPS,
                limits::CUSTOM_MAX_REPS,
                ValidationError::RepsOutOfRange,
            )?,
            rest_time: check_range(
                self.rest_time,
                limits::CUSTOM_MIN_REST_SECONDS,
                limits::CUSTOM_MAX_REST_SECONDS,
                ValidationError::RestTimeOutOfRange,
            )?,
            target_muscles: self.target_muscles,
            equipment: self.equipment,
            difficulty: difficulty_tier(self.difficulty)?,
            notes: self
                .notes
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_owned(),
        })
    }
}
