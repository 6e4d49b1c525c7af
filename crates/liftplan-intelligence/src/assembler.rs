// ABOUTME: Plan assembler turning a profile and catalog into an ordered exercise list
// ABOUTME: Applies goal-specific slot counts, parameter lookup and session scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Assembly
//!
//! Slot layout per goal:
//!
//! | Goal | Warm-up | Strength | Cardio |
//! |------|---------|----------|--------|
//! | `MUSCLE_GAIN` | 1 (cardio template) | up to 4 | - |
//! | `FAT_LOSS` | - | up to 2 | up to 3 |
//!
//! Shortages shrink a slot group instead of failing. Session length scales parameters
//! but never slot counts.

use liftplan_core::constants::labels;
use liftplan_core::errors::{PlannerResult, ValidationError};
use liftplan_core::models::{
    DifficultyTier, ExerciseCategory, ExerciseTemplate, ExerciseType, ExperienceTier,
    FitnessGoal, GeneratedExercise, Profile, TrainingPreferences,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::difficulty::resolve_difficulty;
use crate::parameters::training_params;
use crate::pool::filter_candidates;

/// Warm-up slots in a muscle-gain plan
pub const MUSCLE_GAIN_WARMUP_SLOTS: usize = 1;
/// Strength slots in a muscle-gain plan
pub const MUSCLE_GAIN_STRENGTH_SLOTS: usize = 4;
/// Cardio slots in a fat-loss plan
pub const FAT_LOSS_CARDIO_SLOTS: usize = 3;
/// Strength slots in a fat-loss plan
pub const FAT_LOSS_STRENGTH_SLOTS: usize = 2;

/// Plan generator carrying the configured defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerator {
    default_experience: ExperienceTier,
}

/// Inputs resolved once per generation
struct SlotContext {
    goal: FitnessGoal,
    difficulty: DifficultyTier,
    experience: ExperienceTier,
    session_minutes: Option<u32>,
}

impl PlanGenerator {
    /// Generator using `default_experience` when preferences name none
    #[must_use]
    pub const fn new(default_experience: ExperienceTier) -> Self {
        Self { default_experience }
    }

    /// Generate an ordered exercise list
    ///
    /// `preferences` overrides the profile's stored preferences when given.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the profile lacks age or goal or the preferences
    /// are out of range, and `DomainEmpty` when the catalog has nothing usable
    pub fn generate<R>(
        &self,
        profile: &Profile,
        catalog: &[ExerciseTemplate],
        preferences: Option<&TrainingPreferences>,
        rng: &mut R,
    ) -> PlannerResult<Vec<GeneratedExercise>>
    where
        R: Rng + ?Sized,
    {
        let (age, goal) = profile
            .generation_inputs()
            .ok_or(ValidationError::MissingProfileFields)?;
        let preferences = preferences.or(profile.training_preferences.as_ref());
        if let Some(preferences) = preferences {
            preferences.validate()?;
        }

        let difficulty = resolve_difficulty(age, preferences.and_then(|p| p.difficulty));
        let focus_areas = preferences.map_or(&[][..], |p| p.focus_areas.as_slice());
        let ranked = filter_candidates(catalog, difficulty, focus_areas, rng)?;

        let (strength, cardio): (Vec<_>, Vec<_>) = ranked
            .iter()
            .partition(|template| template.category == ExerciseCategory::Strength);

        let context = SlotContext {
            goal,
            difficulty,
            experience: preferences
                .and_then(|p| p.experience)
                .unwrap_or(self.default_experience),
            session_minutes: preferences.and_then(|p| p.time_per_session),
        };

        let mut exercises = match goal {
            FitnessGoal::MuscleGain => {
                let warmups = cardio
                    .iter()
                    .take(MUSCLE_GAIN_WARMUP_SLOTS)
                    .map(|template| context.warmup(template));
                let lifts = strength
                    .iter()
                    .take(MUSCLE_GAIN_STRENGTH_SLOTS)
                    .map(|template| context.exercise(template));
                warmups.chain(lifts).collect::<Vec<_>>()
            }
            FitnessGoal::FatLoss => {
                let conditioning = cardio
                    .iter()
                    .take(FAT_LOSS_CARDIO_SLOTS)
                    .map(|template| context.exercise(template));
                let support = strength
                    .iter()
                    .take(FAT_LOSS_STRENGTH_SLOTS)
                    .map(|template| context.exercise(template));
                conditioning.chain(support).collect::<Vec<_>>()
            }
        };

        debug!(
            goal = %goal,
            difficulty = %difficulty,
            strength_candidates = strength.len(),
            cardio_candidates = cardio.len(),
            "Filled plan slots"
        );

        exercises.shuffle(rng);
        info!(
            user_id = %profile.id,
            goal = %goal,
            exercises = exercises.len(),
            "Generated workout plan"
        );
        Ok(exercises)
    }
}

impl SlotContext {
    fn exercise(&self, template: &ExerciseTemplate) -> GeneratedExercise {
        let params = training_params(
            template.category,
            self.goal,
            self.difficulty,
            self.experience,
            self.session_minutes,
        );
        GeneratedExercise {
            name: template.name.trim().to_owned(),
            exercise_type: ExerciseType::from(template.category),
            category: template.category,
            sets: params.sets,
            reps: params.reps,
            rest_time: params.rest_time,
            target_muscles: template.target_muscles.clone(),
            equipment: template.equipment.clone(),
            difficulty: template.difficulty,
            notes: template.notes.clone().unwrap_or_default(),
        }
    }

    fn warmup(&self, template: &ExerciseTemplate) -> GeneratedExercise {
        let mut exercise = self.exercise(template);
        exercise.exercise_type = ExerciseType::Warmup;
        exercise.notes = format!(
            "{}{}",
            labels::WARMUP_NOTES_PREFIX,
            template.notes.as_deref().unwrap_or_default()
        );
        exercise
    }
}

/// Generate a plan with the default experience tier
///
/// # Errors
///
/// See [`PlanGenerator::generate`]
pub fn assemble_plan<R>(
    profile: &Profile,
    catalog: &[ExerciseTemplate],
    preferences: Option<&TrainingPreferences>,
    rng: &mut R,
) -> PlannerResult<Vec<GeneratedExercise>>
where
    R: Rng + ?Sized,
{
    PlanGenerator::default().generate(profile, catalog, preferences, rng)
}
