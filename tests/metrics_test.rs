// ABOUTME: Integration tests for per-exercise training metrics
// ABOUTME: Checks duration, intensity and calorie formulas plus zero degradation on implausible loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftplan::intelligence::metrics::{estimate_intensity, validate_training_params};
use liftplan::intelligence::{
    calculate_completion_rate, calculate_training_data, calculate_training_duration,
    MetricsConfig, TrainingLoad, TrainingMetricsCalculator,
};
use liftplan::models::{DifficultyTier, ExerciseType, TrainingData};

fn load(
    exercise_type: ExerciseType,
    difficulty: DifficultyTier,
    sets: u32,
    reps: u32,
    rest_time: u32,
) -> TrainingLoad {
    TrainingLoad {
        exercise_type,
        difficulty,
        sets,
        reps,
        rest_time,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_full_strength_completion() {
    let strength = load(ExerciseType::Strength, DifficultyTier::Intermediate, 3, 10, 90);
    let data = calculate_training_data(&strength, 3, Some(70.0));
    assert_eq!(data.duration, 270);
    assert_close(data.intensity, 4.4);
    assert_eq!(data.calories_burned, 16);
}

#[test]
fn test_partial_completion_uses_default_weight() {
    let strength = load(ExerciseType::Strength, DifficultyTier::Intermediate, 4, 10, 60);
    let data = calculate_training_data(&strength, 2, None);
    assert_eq!(data.duration, 120);
    assert_close(data.intensity, 2.2);
    assert_eq!(data.calories_burned, 4);
}

#[test]
fn test_warmup_completion() {
    let warmup = load(ExerciseType::Warmup, DifficultyTier::Beginner, 2, 10, 60);
    let data = calculate_training_data(&warmup, 2, Some(80.0));
    assert_eq!(data.duration, 120);
    assert_close(data.intensity, 2.0);
    assert_eq!(data.calories_burned, 3);
}

#[test]
fn test_type_multipliers_order_intensity() {
    let cardio = estimate_intensity(ExerciseType::Cardio, DifficultyTier::Advanced, 100);
    let strength = estimate_intensity(ExerciseType::Strength, DifficultyTier::Advanced, 100);
    let warmup = estimate_intensity(ExerciseType::Warmup, DifficultyTier::Advanced, 100);
    assert_close(cardio, 7.2);
    assert_close(strength, 6.6);
    assert_close(warmup, 6.0);
}

#[test]
fn test_implausible_sets_degrade_to_zero() {
    let too_many = load(ExerciseType::Strength, DifficultyTier::Beginner, 7, 10, 60);
    assert_eq!(calculate_training_data(&too_many, 7, Some(70.0)), TrainingData::zeroed());

    let too_many_reps = load(ExerciseType::Cardio, DifficultyTier::Intermediate, 3, 16, 60);
    assert!(calculate_training_data(&too_many_reps, 3, None).is_zeroed());

    let no_sets = load(ExerciseType::Warmup, DifficultyTier::Advanced, 0, 10, 60);
    assert!(!validate_training_params(&no_sets));
    assert!(calculate_training_data(&no_sets, 0, None).is_zeroed());
}

#[test]
fn test_tier_ceilings_are_inclusive() {
    assert!(validate_training_params(&load(
        ExerciseType::Strength,
        DifficultyTier::Beginner,
        4,
        12,
        60
    )));
    assert!(validate_training_params(&load(
        ExerciseType::Strength,
        DifficultyTier::Advanced,
        6,
        20,
        60
    )));
    assert!(!validate_training_params(&load(
        ExerciseType::Strength,
        DifficultyTier::Intermediate,
        6,
        10,
        60
    )));
}

#[test]
fn test_completion_rate_is_clamped() {
    for total in 1..=10 {
        for completed in 0..=20 {
            let rate = calculate_completion_rate(total, completed);
            assert!(rate <= 100);
            if completed >= total {
                assert_eq!(rate, 100);
            }
        }
    }
    assert_eq!(calculate_completion_rate(0, 0), 0);
}

#[test]
fn test_configured_seconds_per_rep() {
    let calculator = TrainingMetricsCalculator::with_config(MetricsConfig {
        seconds_per_rep: 4,
        default_body_weight_kg: 70.0,
    });
    let strength = load(ExerciseType::Strength, DifficultyTier::Intermediate, 3, 10, 90);
    let data = calculator.calculate_training_data(&strength, 3, None);
    assert_eq!(data.duration, 300);
}

#[test]
fn test_oversized_completion_saturates() {
    let strength = load(ExerciseType::Strength, DifficultyTier::Advanced, 4, 20, 60);
    let data = calculate_training_data(&strength, 40_000_000, Some(70.0));
    assert_eq!(data.duration, u32::MAX);
    assert_close(data.intensity, 6.6);
    assert!(data.calories_burned > 0);

    assert_eq!(calculate_training_duration(u32::MAX, 2, 1, 3), u32::MAX);
}
