// ABOUTME: Per-exercise training metrics: completion rate, duration, intensity and calories
// ABOUTME: Implausible inputs degrade to zeroed training data with a warning instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Metrics
//!
//! ```text
//! completion = clamp(round(completed / sets * 100), 0, 100)
//! duration   = completed * reps * seconds_per_rep + max(0, completed - 1) * rest
//! intensity  = round(difficulty * 2 * multiplier * completion / 100, 1)
//! calories   = round(MET * (intensity / 5) * weight_kg * duration / 3600)
//! ```
//!
//! | Type | Multiplier | MET |
//! |------|------------|-----|
//! | cardio | 1.2 | 5.0 |
//! | strength | 1.1 | 3.5 |
//! | warmup | 1.0 | 2.5 |

use liftplan_core::constants::metrics;
use liftplan_core::models::{DifficultyTier, ExerciseType, GeneratedExercise, TrainingData};
use tracing::{debug, warn};

use crate::config::MetricsConfig;

/// Prescribed load of a single plan exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingLoad {
    /// Slot type
    pub exercise_type: ExerciseType,
    /// Difficulty tier
    pub difficulty: DifficultyTier,
    /// Prescribed sets
    pub sets: u32,
    /// Prescribed reps per set
    pub reps: u32,
    /// Rest between sets (seconds)
    pub rest_time: u32,
}

impl From<&GeneratedExercise> for TrainingLoad {
    fn from(exercise: &GeneratedExercise) -> Self {
        Self {
            exercise_type: exercise.exercise_type,
            difficulty: exercise.difficulty,
            sets: exercise.sets,
            reps: exercise.reps,
            rest_time: exercise.rest_time,
        }
    }
}

/// Completion percentage, 0 when nothing was prescribed and capped at 100
#[must_use]
pub fn calculate_completion_rate(total: u32, completed: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (f64::from(completed) / f64::from(total) * 100.0).round() as u32;
    rate.min(100)
}

/// Seconds spent on `sets` sets, with rest only between sets
///
/// Saturates at `u32::MAX` for out-of-range inputs.
#[must_use]
pub const fn calculate_training_duration(
    sets: u32,
    reps: u32,
    rest_time: u32,
    seconds_per_rep: u32,
) -> u32 {
    let work = sets.saturating_mul(reps).saturating_mul(seconds_per_rep);
    let rest = sets.saturating_sub(1).saturating_mul(rest_time);
    work.saturating_add(rest)
}

/// Tonnage for a set scheme; a zero weight counts as bodyweight (1)
#[must_use]
pub fn calculate_training_volume(sets: u32, reps: u32, weight_kg: f64) -> f64 {
    let load = if weight_kg > 0.0 { weight_kg } else { 1.0 };
    f64::from(sets) * f64::from(reps) * load
}

/// Maximum plausible sets and reps for a tier
#[must_use]
pub const fn plausibility_limits(difficulty: DifficultyTier) -> (u32, u32) {
    match difficulty {
        DifficultyTier::Beginner => (4, 12),
        DifficultyTier::Intermediate => (5, 15),
        DifficultyTier::Advanced => (6, 20),
    }
}

/// True when the prescribed load is plausible for its tier
#[must_use]
pub fn validate_training_params(load: &TrainingLoad) -> bool {
    if load.sets == 0 || load.reps == 0 {
        warn!(sets = load.sets, reps = load.reps, "Training parameters must be positive");
        return false;
    }
    let (max_sets, max_reps) = plausibility_limits(load.difficulty);
    if load.sets > max_sets || load.reps > max_reps {
        warn!(
            difficulty = %load.difficulty,
            sets = load.sets,
            max_sets,
            reps = load.reps,
            max_reps,
            "Training parameters exceed difficulty limits"
        );
        return false;
    }
    true
}

const fn intensity_multiplier(exercise_type: ExerciseType) -> f64 {
    match exercise_type {
        ExerciseType::Cardio => metrics::CARDIO_INTENSITY_MULTIPLIER,
        ExerciseType::Strength => metrics::STRENGTH_INTENSITY_MULTIPLIER,
        ExerciseType::Warmup => metrics::WARMUP_INTENSITY_MULTIPLIER,
    }
}

const fn base_met(exercise_type: ExerciseType) -> f64 {
    match exercise_type {
        ExerciseType::Cardio => metrics::CARDIO_MET,
        ExerciseType::Strength => metrics::STRENGTH_MET,
        ExerciseType::Warmup => metrics::WARMUP_MET,
    }
}

/// Intensity score on a 0-7.2 scale, rounded to one decimal
#[must_use]
pub fn estimate_intensity(
    exercise_type: ExerciseType,
    difficulty: DifficultyTier,
    completion_rate: u32,
) -> f64 {
    let base = f64::from(difficulty.level()) * 2.0;
    let completion = (f64::from(completion_rate) / 100.0).clamp(0.0, 1.0);
    (base * intensity_multiplier(exercise_type) * completion * 10.0).round() / 10.0
}

/// Estimated kilocalories for `duration_seconds` at `intensity`
#[must_use]
pub fn estimate_calories(
    exercise_type: ExerciseType,
    duration_seconds: u32,
    intensity: f64,
    weight_kg: f64,
) -> u32 {
    let met = base_met(exercise_type) * (intensity / metrics::REFERENCE_INTENSITY);
    let hours = f64::from(duration_seconds) / metrics::SECONDS_PER_HOUR;
    (met * weight_kg * hours).round().max(0.0) as u32
}

/// Training metrics calculator
#[derive(Debug, Clone, Default)]
pub struct TrainingMetricsCalculator {
    config: MetricsConfig,
}

impl TrainingMetricsCalculator {
    /// Calculator with default coefficients
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with explicit coefficients
    #[must_use]
    pub const fn with_config(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Coefficients in use
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Derive training data for `completed_sets` of `load`
    ///
    /// Uses the configured default body weight when `weight_kg` is absent or not positive.
    /// Returns [`TrainingData::zeroed`] when the load fails the plausibility gate.
    #[must_use]
    pub fn calculate_training_data(
        &self,
        load: &TrainingLoad,
        completed_sets: u32,
        weight_kg: Option<f64>,
    ) -> TrainingData {
        if !validate_training_params(load) {
            return TrainingData::zeroed();
        }

        let weight = weight_kg
            .filter(|weight| weight.is_finite() && *weight > 0.0)
            .unwrap_or(self.config.default_body_weight_kg);
        let completion_rate = calculate_completion_rate(load.sets, completed_sets);
        let duration = calculate_training_duration(
            completed_sets,
            load.reps,
            load.rest_time,
            self.config.seconds_per_rep,
        );
        let intensity = estimate_intensity(load.exercise_type, load.difficulty, completion_rate);
        let calories_burned = estimate_calories(load.exercise_type, duration, intensity, weight);

        debug!(
            exercise_type = %load.exercise_type,
            completed_sets,
            duration,
            intensity,
            calories_burned,
            "Calculated training data"
        );

        TrainingData {
            duration,
            intensity,
            calories_burned,
        }
    }

    /// Full-plan duration of an exercise in seconds
    #[must_use]
    pub const fn planned_duration(&self, exercise: &GeneratedExercise) -> u32 {
        calculate_training_duration(
            exercise.sets,
            exercise.reps,
            exercise.rest_time,
            self.config.seconds_per_rep,
        )
    }
}

/// Derive training data with default coefficients
#[must_use]
pub fn calculate_training_data(
    load: &TrainingLoad,
    completed_sets: u32,
    weight_kg: Option<f64>,
) -> TrainingData {
    TrainingMetricsCalculator::new().calculate_training_data(load, completed_sets, weight_kg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate_edges() {
        assert_eq!(calculate_completion_rate(0, 5), 0);
        assert_eq!(calculate_completion_rate(3, 1), 33);
        assert_eq!(calculate_completion_rate(3, 9), 100);
    }

    #[test]
    fn test_duration_has_no_trailing_rest() {
        assert_eq!(calculate_training_duration(3, 10, 90, 3), 270);
        assert_eq!(calculate_training_duration(1, 10, 90, 3), 30);
        assert_eq!(calculate_training_duration(0, 10, 90, 3), 0);
    }

    #[test]
    fn test_volume_treats_zero_weight_as_bodyweight() {
        assert!((calculate_training_volume(3, 10, 0.0) - 30.0).abs() < f64::EPSILON);
        assert!((calculate_training_volume(3, 10, 20.0) - 600.0).abs() < f64::EPSILON);
    }
}
