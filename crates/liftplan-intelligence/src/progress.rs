// ABOUTME: Multi-day progress aggregation: streaks, completion rate and monthly totals
// ABOUTME: Also resolves the per-day completion toggle and monthly record query windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use liftplan_core::errors::ValidationError;
use liftplan_core::models::{StoredExercise, WorkoutRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::{calculate_completion_rate, TrainingMetricsCalculator};

/// Consecutive-day statistics
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakSummary {
    /// Streak still alive today (last active day is today or yesterday)
    pub current: u32,
    /// Longest run of consecutive active days
    pub best: u32,
    /// Distinct active days
    pub active_days: u32,
}

/// Compute streaks from the days on which records exist
///
/// Days are deduplicated and sorted. Days after `today` are ignored.
#[must_use]
pub fn calculate_streaks<I>(days: I, today: NaiveDate) -> StreakSummary
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut dates: Vec<NaiveDate> = days.into_iter().filter(|day| *day <= today).collect();
    dates.sort_unstable();
    dates.dedup();

    let Some(last) = dates.last().copied() else {
        return StreakSummary::default();
    };

    let mut running = 1u32;
    let mut best = 1u32;
    for window in dates.windows(2) {
        if window[1].signed_duration_since(window[0]).num_days() == 1 {
            running += 1;
            best = best.max(running);
        } else {
            running = 1;
        }
    }

    let current = if today.signed_duration_since(last).num_days() <= 1 {
        running
    } else {
        0
    };

    StreakSummary {
        current,
        best,
        active_days: u32::try_from(dates.len()).unwrap_or(u32::MAX),
    }
}

/// Aggregated progress for a plan over a set of records
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutMetrics {
    /// Seconds needed to perform every plan exercise in full
    pub total_time: u32,
    /// Fully completed exercises over exercises times active days (0-100)
    pub completion_rate: u32,
    /// Current streak
    pub streak: u32,
    /// Best streak
    pub best_streak: u32,
    /// Distinct active days
    pub total_workouts: u32,
}

impl WorkoutMetrics {
    /// Aggregate with default metric coefficients
    #[must_use]
    pub fn calculate(
        exercises: &[StoredExercise],
        records: &[WorkoutRecord],
        today: NaiveDate,
    ) -> Self {
        TrainingMetricsCalculator::new().workout_metrics(exercises, records, today)
    }
}

impl TrainingMetricsCalculator {
    /// Aggregate plan exercises and their completion records
    ///
    /// A record counts as complete when its `completed_sets` equals the prescribed sets
    /// of the exercise it references. Records for unknown exercises still count as
    /// activity for streaks.
    #[must_use]
    pub fn workout_metrics(
        &self,
        exercises: &[StoredExercise],
        records: &[WorkoutRecord],
        today: NaiveDate,
    ) -> WorkoutMetrics {
        let total_time = exercises
            .iter()
            .map(|stored| self.planned_duration(&stored.exercise))
            .fold(0_u32, u32::saturating_add);

        let prescribed: HashMap<Uuid, u32> = exercises
            .iter()
            .map(|stored| (stored.id, stored.exercise.sets))
            .collect();
        let completed = records
            .iter()
            .filter(|record| prescribed.get(&record.exercise_id) == Some(&record.completed_sets))
            .count();

        let streaks = calculate_streaks(records.iter().map(WorkoutRecord::day), today);
        let expected = exercises.len().saturating_mul(streaks.active_days as usize);

        WorkoutMetrics {
            total_time,
            completion_rate: calculate_completion_rate(
                u32::try_from(expected).unwrap_or(u32::MAX),
                u32::try_from(completed).unwrap_or(u32::MAX),
            ),
            streak: streaks.current,
            best_streak: streaks.best,
            total_workouts: streaks.active_days,
        }
    }
}

/// What to do with today's record when a completion is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionAction {
    /// Create a new record
    Insert,
    /// Overwrite the existing record
    Update(Uuid),
    /// Remove the existing record (identical resubmission)
    Delete(Uuid),
    /// Nothing recorded and nothing to record
    Ignore,
}

/// Resolve the completion toggle for one exercise on one day
///
/// Resubmitting the stored value deletes the record, a different value updates it, and
/// with no record a positive value inserts while zero is ignored.
#[must_use]
pub fn resolve_completion(existing: Option<&WorkoutRecord>, completed_sets: u32) -> CompletionAction {
    match existing {
        Some(record) if record.completed_sets == completed_sets => {
            CompletionAction::Delete(record.id)
        }
        Some(record) => CompletionAction::Update(record.id),
        None if completed_sets > 0 => CompletionAction::Insert,
        None => CompletionAction::Ignore,
    }
}

/// Inclusive UTC time window for record queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordWindow {
    /// First instant of the window
    pub start: DateTime<Utc>,
    /// Last instant of the window
    pub end: DateTime<Utc>,
}

impl RecordWindow {
    /// Window covering one calendar day
    #[must_use]
    pub fn day(date: NaiveDate) -> Self {
        let start = Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN));
        Self {
            start,
            end: start + Duration::days(1) - Duration::milliseconds(1),
        }
    }

    /// Window covering calendar `month` (1-12) of `year`
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` when `month` is outside 1-12 or the date is unrepresentable
    pub fn month(year: i32, month: u32) -> Result<Self, ValidationError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ValidationError::InvalidMonth(month))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or(ValidationError::InvalidMonth(month))?;
        let start = Utc.from_utc_datetime(&first.and_time(chrono::NaiveTime::MIN));
        let next_start = Utc.from_utc_datetime(&next.and_time(chrono::NaiveTime::MIN));
        Ok(Self {
            start,
            end: next_start - Duration::milliseconds(1),
        })
    }

    /// True when `instant` falls inside the window
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
