// ABOUTME: Exercise pool filter: difficulty eligibility, catalog validation and focus ranking
// ABOUTME: Shuffles with an injected RNG so selection is reproducible under a seeded source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftplan_core::errors::{PlannerError, PlannerResult};
use liftplan_core::models::{focus_muscle_tags, DifficultyTier, ExerciseTemplate, FocusArea};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Filter and rank catalog templates for plan assembly
///
/// Templates above `max_difficulty` are dropped, then incomplete entries (blank name or
/// no target muscles). With focus areas the survivors are split into matching and other
/// templates, each half shuffled independently, matching first. Without focus areas the
/// whole pool is shuffled uniformly.
///
/// # Errors
///
/// Returns `DomainEmpty` when no template is eligible or none survives validation
pub fn filter_candidates<R>(
    catalog: &[ExerciseTemplate],
    max_difficulty: DifficultyTier,
    focus_areas: &[FocusArea],
    rng: &mut R,
) -> PlannerResult<Vec<ExerciseTemplate>>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&ExerciseTemplate> = catalog
        .iter()
        .filter(|template| template.difficulty <= max_difficulty)
        .collect();
    if eligible.is_empty() {
        return Err(PlannerError::domain_empty(format!(
            "no exercises at difficulty {max_difficulty} or below"
        )));
    }

    let eligible_count = eligible.len();
    let mut valid: Vec<ExerciseTemplate> = eligible
        .into_iter()
        .filter(|template| template.is_complete())
        .cloned()
        .collect();
    if valid.len() < eligible_count {
        warn!(
            dropped = eligible_count - valid.len(),
            "Skipping incomplete catalog entries"
        );
    }
    if valid.is_empty() {
        return Err(PlannerError::domain_empty(
            "catalog entries are missing names or target muscles",
        ));
    }

    if focus_areas.is_empty() {
        valid.shuffle(rng);
        return Ok(valid);
    }

    let tags = focus_muscle_tags(focus_areas);
    let (mut matching, mut other): (Vec<_>, Vec<_>) = valid
        .into_iter()
        .partition(|template| template.targets_any(&tags));
    debug!(
        matching = matching.len(),
        other = other.len(),
        "Ranked candidates by focus area"
    );
    matching.shuffle(rng);
    other.shuffle(rng);
    matching.extend(other);
    Ok(matching)
}
