// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Training limits, metric coefficients, and focus-area tag mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Input limits for plans, preferences and custom exercises
pub mod limits {
    /// Minimum training days per week
    pub const MIN_FREQUENCY: u8 = 1;
    /// Maximum training days per week
    pub const MAX_FREQUENCY: u8 = 7;
    /// Frequency used for new plans and regenerations without a prior plan
    pub const DEFAULT_FREQUENCY: u8 = 3;

    /// Custom exercise: minimum sets
    pub const CUSTOM_MIN_SETS: i64 = 1;
    /// Custom exercise: maximum sets
    pub const CUSTOM_MAX_SETS: i64 = 6;
    /// Custom exercise: minimum reps per set
    pub const CUSTOM_MIN_REPS: i64 = 1;
    /// Custom exercise: maximum reps per set
    pub const CUSTOM_MAX_REPS: i64 = 50;
    /// Custom exercise: minimum rest between sets (seconds)
    pub const CUSTOM_MIN_REST_SECONDS: i64 = 30;
    /// Custom exercise: maximum rest between sets (seconds)
    pub const CUSTOM_MAX_REST_SECONDS: i64 = 180;

    /// Shortest supported preferred session (minutes)
    pub const MIN_SESSION_MINUTES: u32 = 15;
    /// Longest supported preferred session (minutes)
    pub const MAX_SESSION_MINUTES: u32 = 180;
}

/// Session-length scaling of base training parameters
pub mod scaling {
    /// Reference session length the parameter table is calibrated for
    pub const BASELINE_SESSION_MINUTES: f64 = 45.0;
    /// Hard ceiling on sets after scaling
    pub const MAX_SCALED_SETS: u32 = 6;
    /// Floor on rest after scaling (seconds)
    pub const MIN_SCALED_REST_SECONDS: u32 = 30;
}

/// Coefficients for duration, intensity and calorie estimation
pub mod metrics {
    /// Seconds spent on a single repetition
    pub const DEFAULT_SECONDS_PER_REP: u32 = 3;
    /// Body weight assumed when the profile has none (kg)
    pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;

    /// Intensity multiplier for cardio work
    pub const CARDIO_INTENSITY_MULTIPLIER: f64 = 1.2;
    /// Intensity multiplier for strength work
    pub const STRENGTH_INTENSITY_MULTIPLIER: f64 = 1.1;
    /// Intensity multiplier for warm-ups
    pub const WARMUP_INTENSITY_MULTIPLIER: f64 = 1.0;

    /// Base MET for cardio
    pub const CARDIO_MET: f64 = 5.0;
    /// Base MET for strength
    pub const STRENGTH_MET: f64 = 3.5;
    /// Base MET for warm-ups
    pub const WARMUP_MET: f64 = 2.5;

    /// Intensity value that leaves the base MET unchanged
    pub const REFERENCE_INTENSITY: f64 = 5.0;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

/// Muscle tags used by the catalog for each focus area
pub mod muscle_tags {
    /// Chest focus
    pub const CHEST: &[&str] = &["chest"];
    /// Back focus
    pub const BACK: &[&str] = &["back"];
    /// Legs focus
    pub const LEGS: &[&str] = &["thighs", "glutes"];
    /// Core focus
    pub const CORE: &[&str] = &["core"];
    /// Arms focus
    pub const ARMS: &[&str] = &["biceps", "triceps"];
    /// Shoulders focus
    pub const SHOULDERS: &[&str] = &["shoulders"];
}

/// Display strings attached to generated plans and exercises
pub mod labels {
    /// Prefix for notes on the muscle-gain warm-up slot
    pub const WARMUP_NOTES_PREFIX: &str = "Warm-up: ";
    /// Default muscle gain plan name
    pub const MUSCLE_GAIN_PLAN_NAME: &str = "Muscle Gain Plan";
    /// Default fat loss plan name
    pub const FAT_LOSS_PLAN_NAME: &str = "Fat Loss Plan";
    /// Default muscle gain plan description
    pub const MUSCLE_GAIN_PLAN_DESCRIPTION: &str =
        "Strength-focused plan tailored to your profile, with a cardio warm-up";
    /// Default fat loss plan description
    pub const FAT_LOSS_PLAN_DESCRIPTION: &str =
        "Cardio-focused plan tailored to your profile, with supporting strength work";
}
