// ABOUTME: Main library entry point for the LiftPlan workout engine
// ABOUTME: Re-exports the engine crates and adds configuration, logging and the plan service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftPlan
//!
//! Rule-based workout plan generation and progression tracking.
//!
//! ## Architecture
//!
//! - **`liftplan-core`**: data models, error taxonomy, constants
//! - **`liftplan-intelligence`**: the pure engine (parameter table, difficulty resolver,
//!   pool filter, plan assembler, metrics and progress)
//! - **this crate**: environment configuration, structured logging, and [`PlanService`],
//!   which applies persistence rules over an abstract [`WorkoutStore`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftplan::intelligence::assemble_plan;
//! use liftplan::models::{ExerciseTemplate, FitnessGoal, Profile};
//! use uuid::Uuid;
//!
//! let mut profile = Profile::new(Uuid::new_v4());
//! profile.age = Some(30);
//! profile.fitness_goal = Some(FitnessGoal::MuscleGain);
//!
//! let catalog: Vec<ExerciseTemplate> = Vec::new();
//! let plan = assemble_plan(&profile, &catalog, None, &mut rand::thread_rng());
//! assert!(plan.is_err());
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Plan service and storage abstraction
pub mod services;

pub use liftplan_core::{constants, errors, models};
pub use liftplan_intelligence as intelligence;

pub use errors::{ErrorCode, PlannerError, PlannerResult, ValidationError};
pub use services::{PlanService, WorkoutStore};
