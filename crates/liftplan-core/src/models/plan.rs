// ABOUTME: Workout plan models: the persisted plan and the insert draft
// ABOUTME: Drafts carry goal-specific default names and validate name and weekly frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FitnessGoal, TrainingPreferences};
use crate::constants::{labels, limits};
use crate::errors::ValidationError;

/// Persisted workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Training days per week (1-7)
    pub frequency: u8,
    /// Preferences the plan was generated with
    #[serde(default)]
    pub preferences: Option<TrainingPreferences>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Plan row before the store assigns identity and timestamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewWorkoutPlan {
    /// Owner
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Training days per week (1-7)
    pub frequency: u8,
    /// Preferences the plan is generated with
    #[serde(default)]
    pub preferences: Option<TrainingPreferences>,
}

impl NewWorkoutPlan {
    /// Draft with the default name and description for `goal`
    #[must_use]
    pub fn for_goal(user_id: Uuid, goal: FitnessGoal) -> Self {
        let (name, description) = match goal {
            FitnessGoal::MuscleGain => (
                labels::MUSCLE_GAIN_PLAN_NAME,
                labels::MUSCLE_GAIN_PLAN_DESCRIPTION,
            ),
            FitnessGoal::FatLoss => (
                labels::FAT_LOSS_PLAN_NAME,
                labels::FAT_LOSS_PLAN_DESCRIPTION,
            ),
        };
        Self {
            user_id,
            name: name.to_owned(),
            description: description.to_owned(),
            frequency: limits::DEFAULT_FREQUENCY,
            preferences: None,
        }
    }

    /// Set the weekly frequency
    #[must_use]
    pub const fn with_frequency(mut self, frequency: u8) -> Self {
        self.frequency = frequency;
        self
    }

    /// Attach preferences
    #[must_use]
    pub fn with_preferences(mut self, preferences: Option<TrainingPreferences>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Validate name, frequency and attached preferences
    ///
    /// # Errors
    ///
    /// Returns the first failing rule
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyPlanName);
        }
        validate_frequency(self.frequency)?;
        if let Some(preferences) = &self.preferences {
            preferences.validate()?;
        }
        Ok(())
    }
}

/// Check a weekly frequency against the 1-7 window
///
/// # Errors
///
/// Returns `InvalidFrequency` when outside the window
pub fn validate_frequency(frequency: u8) -> Result<(), ValidationError> {
    if (limits::MIN_FREQUENCY..=limits::MAX_FREQUENCY).contains(&frequency) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFrequency(i64::from(frequency)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_default_names() {
        let user = Uuid::new_v4();
        let draft = NewWorkoutPlan::for_goal(user, FitnessGoal::FatLoss);
        assert_eq!(draft.name, "Fat Loss Plan");
        assert_eq!(draft.frequency, 3);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_frequency_bounds() {
        let draft = NewWorkoutPlan::for_goal(Uuid::new_v4(), FitnessGoal::MuscleGain);
        assert!(draft.clone().with_frequency(7).validate().is_ok());
        assert_eq!(
            draft.clone().with_frequency(0).validate(),
            Err(ValidationError::InvalidFrequency(0))
        );
        assert_eq!(
            draft.with_frequency(8).validate(),
            Err(ValidationError::InvalidFrequency(8))
        );
    }
}
