// ABOUTME: Completion records and the training data derived from them
// ABOUTME: A record captures sets completed for one plan exercise on one calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Duration, intensity and energy estimate for one completion
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingData {
    /// Seconds spent, including rest between completed sets
    pub duration: u32,
    /// Intensity score rounded to one decimal
    pub intensity: f64,
    /// Estimated kilocalories
    pub calories_burned: u32,
}

impl TrainingData {
    /// Degraded result returned when inputs fail the plausibility gate
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            duration: 0,
            intensity: 0.0,
            calories_burned: 0,
        }
    }

    /// True for the degraded result
    #[must_use]
    pub fn is_zeroed(&self) -> bool {
        self.duration == 0 && self.calories_burned == 0 && self.intensity == 0.0
    }
}

/// Completion record for a plan exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    /// Record identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Stored exercise the record refers to
    pub exercise_id: Uuid,
    /// Sets completed
    pub completed_sets: u32,
    /// Reps completed per set
    pub completed_reps: u32,
    /// Completion timestamp
    pub date: DateTime<Utc>,
    /// Derived metrics
    #[serde(default)]
    pub training_data: Option<TrainingData>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutRecord {
    /// Calendar day (UTC) the record belongs to
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Record fields supplied on insert or update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordDraft {
    /// Owner
    pub user_id: Uuid,
    /// Stored exercise the record refers to
    pub exercise_id: Uuid,
    /// Sets completed
    pub completed_sets: u32,
    /// Reps completed per set
    pub completed_reps: u32,
    /// Completion timestamp
    pub date: DateTime<Utc>,
    /// Derived metrics
    pub training_data: Option<TrainingData>,
    /// Free-form notes
    pub notes: Option<String>,
}
