// ABOUTME: Criterion benchmarks for plan assembly and progress aggregation
// ABOUTME: Measures generation over growing catalogs and monthly metrics over record batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the planning engine.
//!
//! Measures plan assembly against catalogs of increasing size and
//! workout metrics over a month of completion records.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftplan::intelligence::{assemble_plan, TrainingMetricsCalculator};
use liftplan::models::{
    DifficultyTier, ExerciseCategory, ExerciseTemplate, ExerciseType, FitnessGoal, FocusArea,
    GeneratedExercise, Profile, StoredExercise, TrainingPreferences, WorkoutRecord,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

const MUSCLES: [&str; 6] = ["chest", "back", "thighs", "core", "shoulders", "biceps"];

fn generate_catalog(count: usize) -> Vec<ExerciseTemplate> {
    (0..count)
        .map(|index| {
            let category = if index % 3 == 0 {
                ExerciseCategory::Cardio
            } else {
                ExerciseCategory::Strength
            };
            let difficulty = DifficultyTier::ALL[index % DifficultyTier::ALL.len()];
            ExerciseTemplate {
                name: format!("Bench Exercise {index}"),
                category,
                difficulty,
                target_muscles: vec![MUSCLES[index % MUSCLES.len()].to_owned()],
                equipment: vec!["dumbbell".to_owned()],
                description: format!("Benchmark exercise {index}"),
                notes: None,
            }
        })
        .collect()
}

fn bench_profile(goal: FitnessGoal) -> Profile {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.age = Some(32);
    profile.fitness_goal = Some(goal);
    profile.weight_kg = Some(78.0);
    profile
}

/// Benchmark plan assembly with varying catalog sizes
fn bench_assemble_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_plan");
    let focused = TrainingPreferences {
        focus_areas: vec![FocusArea::Legs, FocusArea::Core],
        time_per_session: Some(45),
        ..TrainingPreferences::default()
    };

    for size in [12_usize, 120, 1200] {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("muscle_gain", size),
            &catalog,
            |b, catalog| {
                let profile = bench_profile(FitnessGoal::MuscleGain);
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                b.iter(|| assemble_plan(black_box(&profile), black_box(catalog), None, &mut rng));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fat_loss_focused", size),
            &catalog,
            |b, catalog| {
                let profile = bench_profile(FitnessGoal::FatLoss);
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                b.iter(|| {
                    assemble_plan(
                        black_box(&profile),
                        black_box(catalog),
                        Some(&focused),
                        &mut rng,
                    )
                });
            },
        );
    }

    group.finish();
}

fn plan_exercises() -> Vec<StoredExercise> {
    let plan_id = Uuid::new_v4();
    (0..5_u32)
        .map(|index| StoredExercise {
            id: Uuid::new_v4(),
            plan_id,
            exercise: GeneratedExercise {
                name: format!("Planned {index}"),
                exercise_type: ExerciseType::Strength,
                category: ExerciseCategory::Strength,
                sets: 3 + index % 2,
                reps: 8 + index,
                rest_time: 90,
                target_muscles: vec!["back".to_owned()],
                equipment: Vec::new(),
                difficulty: DifficultyTier::Intermediate,
                notes: String::new(),
            },
        })
        .collect()
}

#[allow(clippy::cast_possible_wrap)]
fn month_of_records(exercises: &[StoredExercise], start: NaiveDate) -> Vec<WorkoutRecord> {
    (0..30_usize)
        .filter(|day| day % 7 != 6)
        .flat_map(|day| {
            exercises.iter().enumerate().map(move |(slot, stored)| {
                let date = start + Duration::days(day as i64);
                WorkoutRecord {
                    id: Uuid::new_v4(),
                    user_id: Uuid::nil(),
                    exercise_id: stored.id,
                    completed_sets: ((day + slot) % 4) as u32,
                    completed_reps: stored.exercise.reps,
                    date: Utc.from_utc_datetime(&date.and_hms_opt(7, 0, 0).unwrap_or_default()),
                    training_data: None,
                    notes: None,
                }
            })
        })
        .collect()
}

/// Benchmark monthly workout metrics aggregation
fn bench_workout_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_metrics");
    let Some(start) = NaiveDate::from_ymd_opt(2024, 5, 1) else {
        return;
    };
    let exercises = plan_exercises();
    let records = month_of_records(&exercises, start);
    let today = start + Duration::days(29);
    let calculator = TrainingMetricsCalculator::new();

    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("monthly", |b| {
        b.iter(|| {
            calculator.workout_metrics(black_box(&exercises), black_box(&records), black_box(today))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_assemble_plan, bench_workout_metrics);
criterion_main!(benches);
