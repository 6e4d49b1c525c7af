// ABOUTME: Workout generation and progression engine for LiftPlan
// ABOUTME: Pure, synchronous algorithms with injected randomness and no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftPlan Intelligence
//!
//! Leaf-first component order:
//!
//! - `parameters` - goal/role/difficulty/experience parameter table and session scaling
//! - `difficulty` - tier resolution from age and explicit preference
//! - `pool` - catalog filtering, focus ranking and shuffling
//! - `assembler` - goal-specific plan assembly
//! - `metrics` - per-exercise duration, intensity and calories
//! - `progress` - streaks, completion rate and the completion toggle
//! - `custom_exercise` - validation of user-authored exercises
//! - `health` - BMI helpers
//!
//! Every function that needs randomness takes `&mut R where R: rand::Rng + ?Sized`.

/// Plan assembly
pub mod assembler;
/// Engine configuration
pub mod config;
/// Custom exercise validation
pub mod custom_exercise;
/// Difficulty tier resolution
pub mod difficulty;
/// Body composition helpers
pub mod health;
/// Per-exercise training metrics
pub mod metrics;
/// Training parameter table
pub mod parameters;
/// Candidate filtering and ranking
pub mod pool;
/// Multi-day progress aggregation
pub mod progress;

pub use assembler::{assemble_plan, PlanGenerator};
pub use config::{ConfigError, EngineConfig, MetricsConfig};
pub use custom_exercise::{validate_custom_exercise, CustomExerciseInput};
pub use difficulty::resolve_difficulty;
pub use health::{calculate_bmi, BmiCategory, BodyMetrics};
pub use metrics::{
    calculate_completion_rate, calculate_training_data, calculate_training_duration,
    calculate_training_volume, TrainingLoad, TrainingMetricsCalculator,
};
pub use parameters::{training_params, ExerciseRole, TrainingParams};
pub use pool::filter_candidates;
pub use progress::{
    calculate_streaks, resolve_completion, CompletionAction, RecordWindow, StreakSummary,
    WorkoutMetrics,
};
