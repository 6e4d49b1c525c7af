// ABOUTME: Domain service layer sitting between collaborators and the pure engine
// ABOUTME: Defines the storage abstraction and the plan service enforcing persistence rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! The engine crates are pure. This layer adds the rules that need storage: atomic plan
//! writes, one active plan per user, and the completion toggle.

/// Plan lifecycle and completion tracking
pub mod plan_service;

/// Storage abstraction
pub mod store;

pub use plan_service::{CompletionSubmission, PlanService, PlanWithExercises, RecordOutcome};
pub use store::WorkoutStore;
