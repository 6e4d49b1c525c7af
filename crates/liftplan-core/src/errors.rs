// ABOUTME: Error taxonomy for the workout engine: validation, empty pools, lookups, storage
// ABOUTME: Maps every failure to a stable ErrorCode so the UI layer can render specific messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planner Error Types
//!
//! - `ValidationError` - malformed or out-of-domain caller input, one variant per
//!   user-facing message
//! - `PlannerError` - everything an engine or service call can fail with
//! - `ErrorCode` - stable machine-readable codes for the presentation layer
//!
//! Degraded metric computations are not errors; they return zeroed training data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::limits;

/// Standard error codes surfaced to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input is malformed
    InvalidInput,
    /// A required field is absent
    MissingRequiredField,
    /// A numeric value is outside its allowed range
    ValueOutOfRange,
    /// The catalog yields no usable exercise after filtering
    NoSuitableExercises,
    /// A referenced plan, exercise or record does not exist
    ResourceNotFound,
    /// The persistence collaborator failed
    StorageError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::NoSuitableExercises => {
                "No suitable exercises are available - contact support or expand the catalog"
            }
            Self::ResourceNotFound => "The requested resource was not found",
            Self::StorageError => "Storage operation failed",
        }
    }
}

/// Caller-input failures, each carrying the message shown next to the offending control
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Plan generation needs both age and fitness goal on the profile
    #[error("Missing required profile fields: age and fitness goal")]
    MissingProfileFields,

    /// Custom exercise name is blank after trimming
    #[error("Exercise name must not be empty")]
    EmptyExerciseName,

    /// Custom exercise lists no target muscle
    #[error("Select at least one target muscle group")]
    MissingTargetMuscles,

    /// Custom exercise sets outside the allowed range
    #[error(
        "Sets must be between {min} and {max}",
        min = limits::CUSTOM_MIN_SETS,
        max = limits::CUSTOM_MAX_SETS
    )]
    SetsOutOfRange(i64),

    /// Custom exercise reps outside the allowed range
    #[error(
        "Reps per set must be between {min} and {max}",
        min = limits::CUSTOM_MIN_REPS,
        max = limits::CUSTOM_MAX_REPS
    )]
    RepsOutOfRange(i64),

    /// Custom exercise rest outside the allowed range
    #[error(
        "Rest time must be between {min} and {max} seconds",
        min = limits::CUSTOM_MIN_REST_SECONDS,
        max = limits::CUSTOM_MAX_REST_SECONDS
    )]
    RestTimeOutOfRange(i64),

    /// Difficulty tier outside 1-3
    #[error("Difficulty must be between 1 and 3")]
    InvalidDifficulty(i64),

    /// Unknown fitness goal string
    #[error("Unknown fitness goal: {0}")]
    UnknownFitnessGoal(String),

    /// Plan frequency outside 1-7 days per week
    #[error(
        "Training frequency must be between {min} and {max} days per week",
        min = limits::MIN_FREQUENCY,
        max = limits::MAX_FREQUENCY
    )]
    InvalidFrequency(i64),

    /// Plan name is blank
    #[error("Plan name must not be empty")]
    EmptyPlanName,

    /// Preferred session length outside the supported window
    #[error(
        "Session length must be between {min} and {max} minutes",
        min = limits::MIN_SESSION_MINUTES,
        max = limits::MAX_SESSION_MINUTES
    )]
    SessionLengthOutOfRange(u32),

    /// Calendar month outside 1-12
    #[error("Month must be between 1 and 12")]
    InvalidMonth(u32),
}

impl ValidationError {
    /// Error code for this validation failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingProfileFields | Self::EmptyExerciseName | Self::EmptyPlanName => {
                ErrorCode::MissingRequiredField
            }
            Self::MissingTargetMuscles | Self::UnknownFitnessGoal(_) => ErrorCode::InvalidInput,
            Self::SetsOutOfRange(_)
            | Self::RepsOutOfRange(_)
            | Self::RestTimeOutOfRange(_)
            | Self::InvalidDifficulty(_)
            | Self::InvalidFrequency(_)
            | Self::SessionLengthOutOfRange(_)
            | Self::InvalidMonth(_) => ErrorCode::ValueOutOfRange,
        }
    }
}

/// Unified error type for engine and service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// Caller input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No usable candidates survived catalog filtering
    #[error("No suitable exercises available: {0}")]
    DomainEmpty(String),

    /// Referenced plan, exercise or record is missing
    #[error("{0} not found")]
    NotFound(String),

    /// Persistence collaborator failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PlannerError {
    /// Create a domain-empty error
    #[must_use]
    pub fn domain_empty(reason: impl Into<String>) -> Self {
        Self::DomainEmpty(reason.into())
    }

    /// Create a not-found error for the named resource
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a storage error
    #[must_use]
    pub fn storage(details: impl Into<String>) -> Self {
        Self::Storage(details.into())
    }

    /// Error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => err.code(),
            Self::DomainEmpty(_) => ErrorCode::NoSuitableExercises,
            Self::NotFound(_) => ErrorCode::ResourceNotFound,
            Self::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// True for caller-input failures
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
