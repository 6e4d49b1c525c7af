// ABOUTME: Parameter table mapping goal, role, difficulty and experience to sets, reps and rest
// ABOUTME: Includes the goal-dependent role lookup and session-length scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Parameter Table
//!
//! The same exercise category plays a different role depending on the goal: cardio is
//! the main work of a fat-loss plan but only a warm-up in a muscle-gain plan. The role
//! is resolved once through [`ExerciseRole::for_goal`] and then selects a table.
//!
//! Primary tables vary by difficulty tier and experience tier. Warm-up and support
//! tables vary by experience only.

use liftplan_core::constants::scaling;
use liftplan_core::models::{DifficultyTier, ExerciseCategory, ExperienceTier, FitnessGoal};
use serde::{Deserialize, Serialize};

/// Concrete training parameters for one exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingParams {
    /// Sets to perform
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Rest between sets (seconds)
    pub rest_time: u32,
}

impl TrainingParams {
    const fn new(sets: u32, reps: u32, rest_time: u32) -> Self {
        Self {
            sets,
            reps,
            rest_time,
        }
    }

    /// Scale sets and rest to a session length, keeping reps
    ///
    /// Sets are capped at 6 and never drop below 1. Rest never drops below 30 seconds.
    #[must_use]
    pub fn scaled_to_session(self, session_minutes: u32) -> Self {
        let factor = f64::from(session_minutes) / scaling::BASELINE_SESSION_MINUTES;
        let sets = (f64::from(self.sets) * factor).round() as u32;
        let rest_time = (f64::from(self.rest_time) * factor).round() as u32;
        Self {
            sets: sets.clamp(1, scaling::MAX_SCALED_SETS),
            reps: self.reps,
            rest_time: rest_time.max(scaling::MIN_SCALED_REST_SECONDS),
        }
    }
}

/// Role an exercise category plays within a goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseRole {
    /// Main work of the plan
    Primary,
    /// Light preparation before the main work
    Warmup,
    /// Secondary work complementing the primary category
    Support,
}

impl ExerciseRole {
    /// Role of `category` inside a plan for `goal`
    #[must_use]
    pub const fn for_goal(goal: FitnessGoal, category: ExerciseCategory) -> Self {
        match (goal, category) {
            (FitnessGoal::MuscleGain, ExerciseCategory::Strength)
            | (FitnessGoal::FatLoss, ExerciseCategory::Cardio) => Self::Primary,
            (FitnessGoal::MuscleGain, ExerciseCategory::Cardio) => Self::Warmup,
            (FitnessGoal::FatLoss, ExerciseCategory::Strength) => Self::Support,
        }
    }
}

/// Row of three experience columns
type ExperienceRow = [TrainingParams; 3];

const fn row(
    beginner: (u32, u32, u32),
    intermediate: (u32, u32, u32),
    advanced: (u32, u32, u32),
) -> ExperienceRow {
    [
        TrainingParams::new(beginner.0, beginner.1, beginner.2),
        TrainingParams::new(intermediate.0, intermediate.1, intermediate.2),
        TrainingParams::new(advanced.0, advanced.1, advanced.2),
    ]
}

// Primary rows are indexed by tier - 1.
const MUSCLE_GAIN_PRIMARY: [ExperienceRow; 3] = [
    row((2, 6, 120), (3, 6, 120), (3, 8, 90)),
    row((3, 6, 120), (3, 8, 90), (4, 10, 90)),
    row((3, 8, 120), (4, 10, 90), (5, 12, 60)),
];
const MUSCLE_GAIN_WARMUP: ExperienceRow = row((2, 20, 60), (2, 25, 45), (2, 30, 30));

const FAT_LOSS_PRIMARY: [ExperienceRow; 3] = [
    row((2, 20, 90), (3, 20, 60), (3, 25, 45)),
    row((3, 25, 60), (3, 30, 45), (4, 30, 30)),
    row((3, 30, 45), (4, 30, 30), (5, 30, 20)),
];
const FAT_LOSS_SUPPORT: ExperienceRow = row((2, 12, 60), (3, 15, 45), (3, 15, 30));

const fn experience_index(experience: ExperienceTier) -> usize {
    match experience {
        ExperienceTier::Beginner => 0,
        ExperienceTier::Intermediate => 1,
        ExperienceTier::Advanced => 2,
    }
}

const fn tier_index(difficulty: DifficultyTier) -> usize {
    difficulty.level() as usize - 1
}

/// Base parameters before session scaling
#[must_use]
pub const fn base_params(
    goal: FitnessGoal,
    role: ExerciseRole,
    difficulty: DifficultyTier,
    experience: ExperienceTier,
) -> TrainingParams {
    let column = experience_index(experience);
    match (goal, role) {
        (FitnessGoal::MuscleGain, ExerciseRole::Primary) => {
            MUSCLE_GAIN_PRIMARY[tier_index(difficulty)][column]
        }
        (FitnessGoal::FatLoss, ExerciseRole::Primary) => {
            FAT_LOSS_PRIMARY[tier_index(difficulty)][column]
        }
        (FitnessGoal::MuscleGain, _) => MUSCLE_GAIN_WARMUP[column],
        (FitnessGoal::FatLoss, _) => FAT_LOSS_SUPPORT[column],
    }
}

/// Parameters for an exercise of `category` in a `goal` plan
///
/// `session_minutes` scales the base values when the user set a session length.
#[must_use]
pub fn training_params(
    category: ExerciseCategory,
    goal: FitnessGoal,
    difficulty: DifficultyTier,
    experience: ExperienceTier,
    session_minutes: Option<u32>,
) -> TrainingParams {
    let role = ExerciseRole::for_goal(goal, category);
    let params = base_params(goal, role, difficulty, experience);
    session_minutes.map_or(params, |minutes| params.scaled_to_session(minutes))
}
