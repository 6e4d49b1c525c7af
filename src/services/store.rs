// ABOUTME: Persistence abstraction the plan service runs against
// ABOUTME: Profiles, catalog, plans, plan exercises and completion records behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use async_trait::async_trait;
use liftplan_core::models::{
    ExerciseTemplate, GeneratedExercise, NewWorkoutPlan, Profile, RecordDraft, StoredExercise,
    WorkoutPlan, WorkoutRecord,
};
use liftplan_intelligence::progress::RecordWindow;
use uuid::Uuid;

/// Storage abstraction trait
///
/// Implementations provide persistence only. Business rules (validation, rollback,
/// one active plan per user, completion toggling) live in `PlanService`.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    // ================================
    // Profiles and Catalog
    // ================================

    /// Get a user's profile
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>>;

    /// Get every catalog template
    async fn list_exercise_templates(&self) -> Result<Vec<ExerciseTemplate>>;

    // ================================
    // Plans
    // ================================

    /// Insert a plan row, assigning its id and creation time
    async fn create_plan(&self, plan: &NewWorkoutPlan) -> Result<WorkoutPlan>;

    /// Get a plan by id
    async fn get_plan(&self, plan_id: Uuid) -> Result<Option<WorkoutPlan>>;

    /// Get the user's most recently created plan
    async fn get_current_plan(&self, user_id: Uuid) -> Result<Option<WorkoutPlan>>;

    /// Change a plan's weekly frequency, returning the updated row
    async fn update_plan_frequency(&self, plan_id: Uuid, frequency: u8)
        -> Result<Option<WorkoutPlan>>;

    /// Delete a plan and its exercises; returns false when no such plan exists
    async fn delete_plan(&self, plan_id: Uuid) -> Result<bool>;

    // ================================
    // Plan Exercises
    // ================================

    /// Insert exercises for a plan in order, all or nothing
    async fn insert_exercises(
        &self,
        plan_id: Uuid,
        exercises: &[GeneratedExercise],
    ) -> Result<Vec<StoredExercise>>;

    /// List a plan's exercises in insertion order
    async fn list_exercises(&self, plan_id: Uuid) -> Result<Vec<StoredExercise>>;

    /// Get an exercise by id
    async fn get_exercise(&self, exercise_id: Uuid) -> Result<Option<StoredExercise>>;

    /// Delete an exercise; returns false when no such exercise exists
    async fn delete_exercise(&self, exercise_id: Uuid) -> Result<bool>;

    // ================================
    // Completion Records
    // ================================

    /// Records of a user inside a time window
    async fn list_records(&self, user_id: Uuid, window: RecordWindow)
        -> Result<Vec<WorkoutRecord>>;

    /// The user's record for an exercise inside a time window, if any
    async fn find_record(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        window: RecordWindow,
    ) -> Result<Option<WorkoutRecord>>;

    /// Insert a record
    async fn insert_record(&self, record: &RecordDraft) -> Result<WorkoutRecord>;

    /// Overwrite an existing record
    async fn update_record(&self, record_id: Uuid, record: &RecordDraft) -> Result<WorkoutRecord>;

    /// Delete a record
    async fn delete_record(&self, record_id: Uuid) -> Result<()>;
}
