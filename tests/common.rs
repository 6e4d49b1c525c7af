// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Catalog and profile fixtures plus an in-memory WorkoutStore with fault injection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `liftplan`

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use liftplan::intelligence::RecordWindow;
use liftplan::models::{
    DifficultyTier, ExerciseCategory, ExerciseTemplate, FitnessGoal, GeneratedExercise,
    NewWorkoutPlan, Profile, RecordDraft, StoredExercise, WorkoutPlan, WorkoutRecord,
};
use liftplan::WorkoutStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Deterministic random source
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Catalog template with the given category, tier and muscles
pub fn template(
    name: &str,
    category: ExerciseCategory,
    difficulty: DifficultyTier,
    muscles: &[&str],
) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.to_owned(),
        category,
        difficulty,
        target_muscles: muscles.iter().map(|m| (*m).to_owned()).collect(),
        equipment: Vec::new(),
        description: format!("{name} description"),
        notes: Some(format!("{name} cues")),
    }
}

pub fn strength(name: &str, difficulty: DifficultyTier, muscles: &[&str]) -> ExerciseTemplate {
    template(name, ExerciseCategory::Strength, difficulty, muscles)
}

pub fn cardio(name: &str, difficulty: DifficultyTier) -> ExerciseTemplate {
    template(name, ExerciseCategory::Cardio, difficulty, &["full_body"])
}

/// Catalog with enough tier-1 entries to fill every slot for both goals
pub fn full_catalog() -> Vec<ExerciseTemplate> {
    vec![
        strength("Push-up", DifficultyTier::Beginner, &["chest", "triceps"]),
        strength("Bent-over Row", DifficultyTier::Beginner, &["back", "biceps"]),
        strength("Goblet Squat", DifficultyTier::Beginner, &["thighs", "glutes"]),
        strength("Plank", DifficultyTier::Beginner, &["core"]),
        strength("Overhead Press", DifficultyTier::Beginner, &["shoulders"]),
        strength("Barbell Curl", DifficultyTier::Beginner, &["biceps"]),
        cardio("Jumping Jacks", DifficultyTier::Beginner),
        cardio("Jump Rope", DifficultyTier::Beginner),
        cardio("Brisk Walk", DifficultyTier::Beginner),
        cardio("Rowing Machine", DifficultyTier::Beginner),
        strength("Deadlift", DifficultyTier::Advanced, &["back", "glutes"]),
        cardio("Sprint Intervals", DifficultyTier::Advanced),
    ]
}

/// Profile with age and goal set
pub fn profile(age: u32, goal: FitnessGoal) -> Profile {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.age = Some(age);
    profile.fitness_goal = Some(goal);
    profile.weight_kg = Some(70.0);
    profile.height_cm = Some(175.0);
    profile
}

#[derive(Default)]
struct StoreState {
    profiles: Vec<Profile>,
    templates: Vec<ExerciseTemplate>,
    plans: Vec<WorkoutPlan>,
    exercises: Vec<StoredExercise>,
    records: Vec<WorkoutRecord>,
}

/// In-memory store for service tests
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    fail_exercise_insert: AtomicBool,
}

impl InMemoryStore {
    pub fn new(templates: Vec<ExerciseTemplate>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                templates,
                ..StoreState::default()
            }),
            fail_exercise_insert: AtomicBool::new(false),
        }
    }

    pub async fn add_profile(&self, profile: Profile) {
        self.state.lock().await.profiles.push(profile);
    }

    pub fn fail_exercise_inserts(&self, fail: bool) {
        self.fail_exercise_insert.store(fail, Ordering::SeqCst);
    }

    pub async fn plan_count(&self) -> usize {
        self.state.lock().await.plans.len()
    }

    pub async fn exercise_count(&self) -> usize {
        self.state.lock().await.exercises.len()
    }

    pub async fn records(&self) -> Vec<WorkoutRecord> {
        self.state.lock().await.records.clone()
    }

    pub async fn push_record(&self, record: WorkoutRecord) {
        self.state.lock().await.records.push(record);
    }
}

#[async_trait]
impl WorkoutStore for InMemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let state = self.state.lock().await;
        Ok(state.profiles.iter().find(|p| p.id == user_id).cloned())
    }

    async fn list_exercise_templates(&self) -> Result<Vec<ExerciseTemplate>> {
        Ok(self.state.lock().await.templates.clone())
    }

    async fn create_plan(&self, plan: &NewWorkoutPlan) -> Result<WorkoutPlan> {
        let stored = WorkoutPlan {
            id: Uuid::new_v4(),
            user_id: plan.user_id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            frequency: plan.frequency,
            preferences: plan.preferences.clone(),
            created_at: Utc::now(),
        };
        self.state.lock().await.plans.push(stored.clone());
        Ok(stored)
    }

    async fn get_plan(&self, plan_id: Uuid) -> Result<Option<WorkoutPlan>> {
        let state = self.state.lock().await;
        Ok(state.plans.iter().find(|p| p.id == plan_id).cloned())
    }

    async fn get_current_plan(&self, user_id: Uuid) -> Result<Option<WorkoutPlan>> {
        let state = self.state.lock().await;
        Ok(state.plans.iter().rev().find(|p| p.user_id == user_id).cloned())
    }

    async fn update_plan_frequency(
        &self,
        plan_id: Uuid,
        frequency: u8,
    ) -> Result<Option<WorkoutPlan>> {
        let mut state = self.state.lock().await;
        Ok(state.plans.iter_mut().find(|p| p.id == plan_id).map(|plan| {
            plan.frequency = frequency;
            plan.clone()
        }))
    }

    async fn delete_plan(&self, plan_id: Uuid) -> Result<bool> {
        let mut state = self.state.lock().await;
        let before = state.plans.len();
        state.plans.retain(|p| p.id != plan_id);
        state.exercises.retain(|e| e.plan_id != plan_id);
        Ok(state.plans.len() != before)
    }

    async fn insert_exercises(
        &self,
        plan_id: Uuid,
        exercises: &[GeneratedExercise],
    ) -> Result<Vec<StoredExercise>> {
        if self.fail_exercise_insert.load(Ordering::SeqCst) {
            return Err(anyhow!("exercise table unavailable"));
        }
        let stored: Vec<StoredExercise> = exercises
            .iter()
            .map(|exercise| StoredExercise {
                id: Uuid::new_v4(),
                plan_id,
                exercise: exercise.clone(),
            })
            .collect();
        self.state
            .lock()
            .await
            .exercises
            .extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn list_exercises(&self, plan_id: Uuid) -> Result<Vec<StoredExercise>> {
        let state = self.state.lock().await;
        Ok(state
            .exercises
            .iter()
            .filter(|e| e.plan_id == plan_id)
            .cloned()
            .collect())
    }

    async fn get_exercise(&self, exercise_id: Uuid) -> Result<Option<StoredExercise>> {
        let state = self.state.lock().await;
        Ok(state.exercises.iter().find(|e| e.id == exercise_id).cloned())
    }

    async fn delete_exercise(&self, exercise_id: Uuid) -> Result<bool> {
        let mut state = self.state.lock().await;
        let before = state.exercises.len();
        state.exercises.retain(|e| e.id != exercise_id);
        Ok(state.exercises.len() != before)
    }

    async fn list_records(&self, user_id: Uuid, window: RecordWindow) -> Result<Vec<WorkoutRecord>> {
        let state = self.state.lock().await;
        Ok(state
            .records
            .iter()
            .filter(|r| r.user_id == user_id && window.contains(r.date))
            .cloned()
            .collect())
    }

    async fn find_record(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        window: RecordWindow,
    ) -> Result<Option<WorkoutRecord>> {
        let state = self.state.lock().await;
        Ok(state
            .records
            .iter()
            .find(|r| r.user_id == user_id && r.exercise_id == exercise_id && window.contains(r.date))
            .cloned())
    }

    async fn insert_record(&self, record: &RecordDraft) -> Result<WorkoutRecord> {
        let stored = WorkoutRecord {
            id: Uuid::new_v4(),
            user_id: record.user_id,
            exercise_id: record.exercise_id,
            completed_sets: record.completed_sets,
            completed_reps: record.completed_reps,
            date: record.date,
            training_data: record.training_data,
            notes: record.notes.clone(),
        };
        self.state.lock().await.records.push(stored.clone());
        Ok(stored)
    }

    async fn update_record(&self, record_id: Uuid, record: &RecordDraft) -> Result<WorkoutRecord> {
        let mut state = self.state.lock().await;
        let existing = state
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| anyhow!("record {record_id} missing"))?;
        existing.completed_sets = record.completed_sets;
        existing.completed_reps = record.completed_reps;
        existing.date = record.date;
        existing.training_data = record.training_data;
        existing.notes.clone_from(&record.notes);
        Ok(existing.clone())
    }

    async fn delete_record(&self, record_id: Uuid) -> Result<()> {
        self.state.lock().await.records.retain(|r| r.id != record_id);
        Ok(())
    }
}
