// ABOUTME: Exercise catalog templates, generated plan line items, and their classification enums
// ABOUTME: DifficultyTier is a checked 1-3 newtype-style enum serialised as its integer value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Catalog category of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Resistance work
    Strength,
    /// Conditioning work
    Cardio,
}

impl ExerciseCategory {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot an exercise fills inside a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Cardio slot preceding a strength session
    Warmup,
    /// Strength slot
    Strength,
    /// Cardio slot
    Cardio,
}

impl ExerciseType {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Strength => "strength",
            Self::Cardio => "cardio",
        }
    }
}

impl From<ExerciseCategory> for ExerciseType {
    fn from(category: ExerciseCategory) -> Self {
        match category {
            ExerciseCategory::Strength => Self::Strength,
            ExerciseCategory::Cardio => Self::Cardio,
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tier, 1 (easiest) to 3 (hardest)
///
/// Tiers gate catalog eligibility (a template is eligible when its tier is at or
/// below the resolved tier) and select rows of the parameter table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum DifficultyTier {
    /// Tier 1
    Beginner = 1,
    /// Tier 2
    Intermediate = 2,
    /// Tier 3
    Advanced = 3,
}

impl DifficultyTier {
    /// All tiers in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Numeric tier value
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DifficultyTier {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Beginner),
            2 => Ok(Self::Intermediate),
            3 => Ok(Self::Advanced),
            other => Err(ValidationError::InvalidDifficulty(i64::from(other))),
        }
    }
}

impl From<DifficultyTier> for u8 {
    fn from(tier: DifficultyTier) -> Self {
        tier.level()
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

impl FromStr for DifficultyTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidDifficulty(0))?;
        u8::try_from(value)
            .map_err(|_| ValidationError::InvalidDifficulty(value))
            .and_then(Self::try_from)
    }
}

/// Read-only catalog entry supplied by the catalog collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseTemplate {
    /// Display name
    pub name: String,
    /// Strength or cardio
    pub category: ExerciseCategory,
    /// Tier required to be eligible
    pub difficulty: DifficultyTier,
    /// Muscle tags worked by the exercise
    pub target_muscles: Vec<String>,
    /// Equipment tags needed
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Long-form description
    #[serde(default)]
    pub description: String,
    /// Coaching notes copied onto generated exercises
    #[serde(default)]
    pub notes: Option<String>,
}

impl ExerciseTemplate {
    /// True when the entry carries everything plan generation needs
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.target_muscles.is_empty()
    }

    /// True when any of the given tags appears in `target_muscles` (ASCII case-insensitive)
    #[must_use]
    pub fn targets_any(&self, tags: &[&str]) -> bool {
        self.target_muscles
            .iter()
            .any(|muscle| tags.iter().any(|tag| muscle.eq_ignore_ascii_case(tag)))
    }
}

/// Plan line item with concrete training parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedExercise {
    /// Display name
    pub name: String,
    /// Slot filled in the plan
    pub exercise_type: ExerciseType,
    /// Catalog category
    pub category: ExerciseCategory,
    /// Sets to perform
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Rest between sets (seconds)
    pub rest_time: u32,
    /// Muscle tags worked
    pub target_muscles: Vec<String>,
    /// Equipment tags needed
    pub equipment: Vec<String>,
    /// Tier of the source template
    pub difficulty: DifficultyTier,
    /// Free-form notes
    pub notes: String,
}

/// Generated exercise as persisted by the store collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredExercise {
    /// Identifier assigned by the store
    pub id: Uuid,
    /// Owning plan
    pub plan_id: Uuid,
    /// Exercise payload
    #[serde(flatten)]
    pub exercise: GeneratedExercise,
}

/// Plan exercises split by slot type for display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseGroups<'a> {
    /// Warm-up slots
    pub warmup: Vec<&'a GeneratedExercise>,
    /// Strength slots
    pub strength: Vec<&'a GeneratedExercise>,
    /// Cardio slots
    pub cardio: Vec<&'a GeneratedExercise>,
}

impl<'a> ExerciseGroups<'a> {
    /// Group exercises by their slot type, preserving input order inside each group
    #[must_use]
    pub fn from_exercises<I>(exercises: I) -> Self
    where
        I: IntoIterator<Item = &'a GeneratedExercise>,
    {
        let mut groups = Self::default();
        for exercise in exercises {
            match exercise.exercise_type {
                ExerciseType::Warmup => groups.warmup.push(exercise),
                ExerciseType::Strength => groups.strength.push(exercise),
                ExerciseType::Cardio => groups.cardio.push(exercise),
            }
        }
        groups
    }

    /// Total number of grouped exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.warmup.len() + self.strength.len() + self.cardio.len()
    }

    /// True when no exercise was grouped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_tier_bounds() {
        assert_eq!(DifficultyTier::try_from(1), Ok(DifficultyTier::Beginner));
        assert_eq!(DifficultyTier::try_from(3), Ok(DifficultyTier::Advanced));
        assert_eq!(
            DifficultyTier::try_from(0),
            Err(ValidationError::InvalidDifficulty(0))
        );
        assert_eq!(
            DifficultyTier::try_from(4),
            Err(ValidationError::InvalidDifficulty(4))
        );
        assert_eq!("2".parse::<DifficultyTier>(), Ok(DifficultyTier::Intermediate));
        assert!("-1".parse::<DifficultyTier>().is_err());
    }

    #[test]
    fn test_difficulty_tier_serializes_as_integer() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&DifficultyTier::Advanced)?, "3");
        let parsed: DifficultyTier = serde_json::from_str("1")?;
        assert_eq!(parsed, DifficultyTier::Beginner);
        assert!(serde_json::from_str::<DifficultyTier>("5").is_err());
        Ok(())
    }
}
