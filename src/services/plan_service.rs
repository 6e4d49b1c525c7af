// ABOUTME: Plan service orchestrating generation, persistence and completion tracking
// ABOUTME: Enforces rollback on partial plan writes, per-user regeneration locking and record toggling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Service
//!
//! Business rules enforced on top of [`WorkoutStore`]:
//!
//! - A plan and its exercises are written together. When the exercise insert fails the
//!   plan row is deleted again and the caller gets a storage error.
//! - A user has one active plan. Creating or regenerating a plan writes the new plan
//!   first and removes the previous one only after the write succeeded.
//! - Plan replacement is serialised per user. Lock entries are dropped once idle.
//! - Completions follow the per-day toggle from [`resolve_completion`].

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use liftplan_core::errors::{PlannerError, PlannerResult, ValidationError};
use liftplan_core::models::{
    validate_frequency, GeneratedExercise, NewWorkoutPlan, Profile, RecordDraft, StoredExercise,
    TrainingPreferences, WorkoutPlan, WorkoutRecord,
};
use liftplan_intelligence::config::EngineConfig;
use liftplan_intelligence::{
    resolve_completion, CompletionAction, CustomExerciseInput, PlanGenerator, RecordWindow,
    TrainingLoad, TrainingMetricsCalculator, WorkoutMetrics,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::store::WorkoutStore;

fn storage_error(err: anyhow::Error) -> PlannerError {
    PlannerError::storage(format!("{err:#}"))
}

/// A plan together with its stored exercises
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanWithExercises {
    /// Plan row
    pub plan: WorkoutPlan,
    /// Exercises in insertion order
    pub exercises: Vec<StoredExercise>,
}

/// Completion submitted for one plan exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionSubmission {
    /// Stored exercise being completed
    pub exercise_id: Uuid,
    /// Sets completed
    pub completed_sets: u32,
    /// Reps completed per set
    pub completed_reps: u32,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// What happened to the day's record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// A new record was stored
    Created(WorkoutRecord),
    /// The existing record was overwritten
    Updated(WorkoutRecord),
    /// The existing record was removed
    Deleted(Uuid),
    /// Nothing was stored
    Unchanged,
}

/// Collaborator-facing service over a [`WorkoutStore`]
///
/// Randomness is injected per call. The source must be `Send` so service futures can
/// be spawned; use `rand::rngs::StdRng::from_entropy()` rather than `thread_rng()`.
pub struct PlanService<S> {
    store: S,
    generator: PlanGenerator,
    calculator: TrainingMetricsCalculator,
    default_frequency: u8,
    user_locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl<S: WorkoutStore> PlanService<S> {
    /// Create a service with explicit engine configuration
    #[must_use]
    pub fn new(store: S, config: &EngineConfig) -> Self {
        Self {
            store,
            generator: PlanGenerator::new(config.default_experience),
            calculator: TrainingMetricsCalculator::with_config(config.metrics.clone()),
            default_frequency: config.default_frequency,
            user_locks: DashMap::new(),
        }
    }

    /// Create a service using the global planner configuration
    #[must_use]
    pub fn with_global_config(store: S) -> Self {
        Self::new(store, &crate::config::PlannerConfig::global().engine)
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Users with a plan replacement in flight
    #[must_use]
    pub fn locked_user_count(&self) -> usize {
        self.user_locks.len()
    }

    fn user_lock(&self, user_id: Uuid) -> Arc<Mutex<()>> {
        self.user_locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the user's lock entry once no other task holds or awaits it
    fn release_user_lock(&self, user_id: Uuid, lock: Arc<Mutex<()>>) {
        drop(lock);
        self.user_locks
            .remove_if(&user_id, |_, entry| Arc::strong_count(entry) == 1);
    }

    async fn load_profile(&self, user_id: Uuid) -> PlannerResult<Profile> {
        self.store
            .get_profile(user_id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| PlannerError::not_found("Profile"))
    }

    /// Generate and store a new plan for a user, replacing any current plan
    ///
    /// # Errors
    ///
    /// Returns a validation error for incomplete profiles or invalid drafts,
    /// `DomainEmpty` when the catalog has nothing usable, and a storage error when
    /// the write fails (the partial plan is rolled back)
    pub async fn create_plan<R>(
        &self,
        user_id: Uuid,
        preferences: Option<TrainingPreferences>,
        frequency: u8,
        rng: &mut R,
    ) -> PlannerResult<PlanWithExercises>
    where
        R: Rng + Send + ?Sized,
    {
        let lock = self.user_lock(user_id);
        let result = {
            let _guard = lock.lock().await;
            match self.store.get_current_plan(user_id).await {
                Ok(previous) => {
                    self.replace_plan(user_id, previous, preferences, frequency, rng)
                        .await
                }
                Err(e) => Err(storage_error(e)),
            }
        };
        self.release_user_lock(user_id, lock);
        result
    }

    /// Generate a fresh plan, keeping only the current plan's frequency
    ///
    /// Without a current plan the configured default frequency is used.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_plan`]
    pub async fn regenerate_plan<R>(
        &self,
        user_id: Uuid,
        preferences: Option<TrainingPreferences>,
        rng: &mut R,
    ) -> PlannerResult<PlanWithExercises>
    where
        R: Rng + Send + ?Sized,
    {
        let lock = self.user_lock(user_id);
        let result = {
            let _guard = lock.lock().await;
            match self.store.get_current_plan(user_id).await {
                Ok(previous) => {
                    let frequency = previous
                        .as_ref()
                        .map_or(self.default_frequency, |plan| plan.frequency);
                    debug!(user_id = %user_id, frequency, "Regenerating plan");
                    self.replace_plan(user_id, previous, preferences, frequency, rng)
                        .await
                }
                Err(e) => Err(storage_error(e)),
            }
        };
        self.release_user_lock(user_id, lock);
        result
    }

    async fn replace_plan<R>(
        &self,
        user_id: Uuid,
        previous: Option<WorkoutPlan>,
        preferences: Option<TrainingPreferences>,
        frequency: u8,
        rng: &mut R,
    ) -> PlannerResult<PlanWithExercises>
    where
        R: Rng + Send + ?Sized,
    {
        let profile = self.load_profile(user_id).await?;
        let (_, goal) = profile
            .generation_inputs()
            .ok_or(ValidationError::MissingProfileFields)?;
        let draft = NewWorkoutPlan::for_goal(user_id, goal)
            .with_frequency(frequency)
            .with_preferences(preferences);
        draft.validate()?;

        let catalog = self
            .store
            .list_exercise_templates()
            .await
            .map_err(storage_error)?;
        let exercises =
            self.generator
                .generate(&profile, &catalog, draft.preferences.as_ref(), rng)?;

        let created = self.persist_plan(&draft, &exercises).await?;

        if let Some(previous) = previous {
            match self.store.delete_plan(previous.id).await {
                Ok(_) => debug!(plan_id = %previous.id, "Removed previous plan"),
                Err(e) => warn!(
                    plan_id = %previous.id,
                    error = %e,
                    "Failed to remove previous plan"
                ),
            }
        }

        info!(
            user_id = %user_id,
            plan_id = %created.plan.id,
            exercises = created.exercises.len(),
            "Stored workout plan"
        );
        Ok(created)
    }

    async fn persist_plan(
        &self,
        draft: &NewWorkoutPlan,
        exercises: &[GeneratedExercise],
    ) -> PlannerResult<PlanWithExercises> {
        let plan = self
            .store
            .create_plan(draft)
            .await
            .map_err(storage_error)?;

        match self.store.insert_exercises(plan.id, exercises).await {
            Ok(stored) => Ok(PlanWithExercises {
                plan,
                exercises: stored,
            }),
            Err(insert_err) => {
                if let Err(rollback_err) = self.store.delete_plan(plan.id).await {
                    error!(
                        plan_id = %plan.id,
                        error = %rollback_err,
                        "Failed to roll back plan after exercise insert failure"
                    );
                }
                Err(storage_error(
                    insert_err.context("failed to store plan exercises"),
                ))
            }
        }
    }

    /// The user's current plan with its exercises
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store fails
    pub async fn current_plan(&self, user_id: Uuid) -> PlannerResult<Option<PlanWithExercises>> {
        let Some(plan) = self
            .store
            .get_current_plan(user_id)
            .await
            .map_err(storage_error)?
        else {
            return Ok(None);
        };
        let exercises = self
            .store
            .list_exercises(plan.id)
            .await
            .map_err(storage_error)?;
        Ok(Some(PlanWithExercises { plan, exercises }))
    }

    /// Delete a plan and its exercises
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown plans and a storage error when the store fails
    pub async fn delete_plan(&self, plan_id: Uuid) -> PlannerResult<()> {
        if self
            .store
            .delete_plan(plan_id)
            .await
            .map_err(storage_error)?
        {
            info!(plan_id = %plan_id, "Deleted workout plan");
            Ok(())
        } else {
            Err(PlannerError::not_found("Workout plan"))
        }
    }

    /// Change a plan's weekly frequency
    ///
    /// # Errors
    ///
    /// Returns `InvalidFrequency` outside 1-7, `NotFound` for unknown plans
    pub async fn update_frequency(&self, plan_id: Uuid, frequency: u8) -> PlannerResult<WorkoutPlan> {
        validate_frequency(frequency)?;
        self.store
            .update_plan_frequency(plan_id, frequency)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| PlannerError::not_found("Workout plan"))
    }

    /// Validate a custom exercise and append it to a plan
    ///
    /// # Errors
    ///
    /// Returns the validation failure, `NotFound` for unknown plans, or a storage error
    pub async fn add_custom_exercise(
        &self,
        plan_id: Uuid,
        input: CustomExerciseInput,
    ) -> PlannerResult<StoredExercise> {
        let exercise = input.into_exercise()?;
        if self
            .store
            .get_plan(plan_id)
            .await
            .map_err(storage_error)?
            .is_none()
        {
            return Err(PlannerError::not_found("Workout plan"));
        }

        let stored = self
            .store
            .insert_exercises(plan_id, std::slice::from_ref(&exercise))
            .await
            .map_err(storage_error)?;
        stored
            .into_iter()
            .next()
            .ok_or_else(|| PlannerError::storage("store returned no exercise for insert"))
    }

    /// Remove an exercise from its plan
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown exercises and a storage error when the store fails
    pub async fn remove_exercise(&self, exercise_id: Uuid) -> PlannerResult<()> {
        if self
            .store
            .delete_exercise(exercise_id)
            .await
            .map_err(storage_error)?
        {
            Ok(())
        } else {
            Err(PlannerError::not_found("Exercise"))
        }
    }

    /// Record a completion for today, applying the per-day toggle
    ///
    /// Training data is computed from the exercise's prescription and the profile
    /// weight (configured default when unknown).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown exercises and a storage error when the store fails
    pub async fn record_completion(
        &self,
        user_id: Uuid,
        submission: CompletionSubmission,
        now: DateTime<Utc>,
    ) -> PlannerResult<RecordOutcome> {
        let exercise = self
            .store
            .get_exercise(submission.exercise_id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| PlannerError::not_found("Exercise"))?;
        let weight = self
            .store
            .get_profile(user_id)
            .await
            .map_err(storage_error)?
            .and_then(|profile| profile.weight_kg);

        let training_data = self.calculator.calculate_training_data(
            &TrainingLoad::from(&exercise.exercise),
            submission.completed_sets,
            weight,
        );

        let existing = self
            .store
            .find_record(user_id, exercise.id, RecordWindow::day(now.date_naive()))
            .await
            .map_err(storage_error)?;

        let draft = RecordDraft {
            user_id,
            exercise_id: exercise.id,
            completed_sets: submission.completed_sets,
            completed_reps: submission.completed_reps,
            date: now,
            training_data: Some(training_data),
            notes: submission.notes,
        };

        let outcome = match resolve_completion(existing.as_ref(), submission.completed_sets) {
            CompletionAction::Insert => RecordOutcome::Created(
                self.store
                    .insert_record(&draft)
                    .await
                    .map_err(storage_error)?,
            ),
            CompletionAction::Update(record_id) => RecordOutcome::Updated(
                self.store
                    .update_record(record_id, &draft)
                    .await
                    .map_err(storage_error)?,
            ),
            CompletionAction::Delete(record_id) => {
                self.store
                    .delete_record(record_id)
                    .await
                    .map_err(storage_error)?;
                RecordOutcome::Deleted(record_id)
            }
            CompletionAction::Ignore => RecordOutcome::Unchanged,
        };

        debug!(
            user_id = %user_id,
            exercise_id = %exercise.id,
            completed_sets = submission.completed_sets,
            outcome = outcome_label(&outcome),
            "Recorded completion"
        );
        Ok(outcome)
    }

    /// Metrics for the current plan over one calendar month (1-12)
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` for bad months and a storage error when the store fails
    pub async fn monthly_metrics(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> PlannerResult<WorkoutMetrics> {
        let window = RecordWindow::month(year, month)?;
        let exercises = self
            .current_plan(user_id)
            .await?
            .map(|current| current.exercises)
            .unwrap_or_default();
        let records = self
            .store
            .list_records(user_id, window)
            .await
            .map_err(storage_error)?;
        Ok(self.calculator.workout_metrics(&exercises, &records, today))
    }
}

const fn outcome_label(outcome: &RecordOutcome) -> &'static str {
    match outcome {
        RecordOutcome::Created(_) => "created",
        RecordOutcome::Updated(_) => "updated",
        RecordOutcome::Deleted(_) => "deleted",
        RecordOutcome::Unchanged => "unchanged",
    }
}
