// ABOUTME: Difficulty resolver mapping age and explicit preference to a tier
// ABOUTME: Explicit preference always wins; otherwise younger users get harder tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftplan_core::models::{DifficultyPreference, DifficultyTier};

/// Age below which the hardest tier is assigned
pub const YOUNG_ADULT_AGE_LIMIT: u32 = 25;
/// Age below which the middle tier is assigned
pub const ADULT_AGE_LIMIT: u32 = 40;

/// Resolve the difficulty tier for a user
///
/// An explicit preference maps directly (easy 1, medium 2, hard 3). Without one the
/// tier falls with age: under 25 is 3, 25 to 39 is 2, 40 and over is 1.
#[must_use]
pub const fn resolve_difficulty(
    age: u32,
    preference: Option<DifficultyPreference>,
) -> DifficultyTier {
    match preference {
        Some(DifficultyPreference::Easy) => DifficultyTier::Beginner,
        Some(DifficultyPreference::Medium) => DifficultyTier::Intermediate,
        Some(DifficultyPreference::Hard) => DifficultyTier::Advanced,
        None if age < YOUNG_ADULT_AGE_LIMIT => DifficultyTier::Advanced,
        None if age < ADULT_AGE_LIMIT => DifficultyTier::Intermediate,
        None => DifficultyTier::Beginner,
    }
}
