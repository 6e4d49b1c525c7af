// ABOUTME: User profile and training preference models consumed by plan generation
// ABOUTME: Includes fitness goal parsing, focus-area tag mapping and preference validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{limits, muscle_tags};
use crate::errors::ValidationError;

/// Primary training objective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitnessGoal {
    /// Hypertrophy and strength
    MuscleGain,
    /// Conditioning and energy expenditure
    FatLoss,
}

impl FitnessGoal {
    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MuscleGain => "MUSCLE_GAIN",
            Self::FatLoss => "FAT_LOSS",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MUSCLE_GAIN" => Ok(Self::MuscleGain),
            "FAT_LOSS" => Ok(Self::FatLoss),
            _ => Err(ValidationError::UnknownFitnessGoal(s.to_owned())),
        }
    }
}

/// Self-reported gender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

/// Explicit difficulty override chosen in preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyPreference {
    /// Maps to tier 1
    Easy,
    /// Maps to tier 2
    Medium,
    /// Maps to tier 3
    Hard,
}

/// Training experience column of the parameter table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// Less than a year of consistent training
    Beginner,
    /// Default column
    #[default]
    Intermediate,
    /// Several years of structured training
    Advanced,
}

impl ExperienceTier {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown experience tier: {other}")),
        }
    }
}

/// Muscle-group preference that biases exercise selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    /// Chest
    Chest,
    /// Back
    Back,
    /// Legs
    Legs,
    /// Core
    Core,
    /// Arms
    Arms,
    /// Shoulders
    Shoulders,
}

impl FocusArea {
    /// Catalog muscle tags that count as hitting this focus area
    #[must_use]
    pub const fn muscle_tags(self) -> &'static [&'static str] {
        match self {
            Self::Chest => muscle_tags::CHEST,
            Self::Back => muscle_tags::BACK,
            Self::Legs => muscle_tags::LEGS,
            Self::Core => muscle_tags::CORE,
            Self::Arms => muscle_tags::ARMS,
            Self::Shoulders => muscle_tags::SHOULDERS,
        }
    }
}

/// Per-plan training preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingPreferences {
    /// Explicit difficulty override
    #[serde(default)]
    pub difficulty: Option<DifficultyPreference>,
    /// Muscle groups to favour
    #[serde(default)]
    pub focus_areas: Vec<FocusArea>,
    /// Preferred session length in minutes
    #[serde(default)]
    pub time_per_session: Option<u32>,
    /// Experience column override
    #[serde(default)]
    pub experience: Option<ExperienceTier>,
}

impl TrainingPreferences {
    /// Check the session length window
    ///
    /// # Errors
    ///
    /// Returns `SessionLengthOutOfRange` when `time_per_session` is outside the supported window
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.time_per_session {
            Some(minutes)
                if !(limits::MIN_SESSION_MINUTES..=limits::MAX_SESSION_MINUTES)
                    .contains(&minutes) =>
            {
                Err(ValidationError::SessionLengthOutOfRange(minutes))
            }
            _ => Ok(()),
        }
    }
}

/// Distinct muscle tags covered by `areas`, in first-seen order
#[must_use]
pub fn focus_muscle_tags(areas: &[FocusArea]) -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for tag in areas.iter().flat_map(|area| area.muscle_tags().iter().copied()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// User profile fields relevant to plan generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// User identifier
    pub id: Uuid,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Height in centimetres
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Primary objective
    #[serde(default)]
    pub fitness_goal: Option<FitnessGoal>,
    /// Stored default preferences
    #[serde(default)]
    pub training_preferences: Option<TrainingPreferences>,
}

impl Profile {
    /// Profile with only an identifier
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self {
            id,
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            fitness_goal: None,
            training_preferences: None,
        }
    }

    /// Age and goal, when both are usable for plan generation
    ///
    /// An age of zero counts as missing.
    #[must_use]
    pub fn generation_inputs(&self) -> Option<(u32, FitnessGoal)> {
        let age = self.age.filter(|age| *age > 0)?;
        self.fitness_goal.map(|goal| (age, goal))
    }
}
