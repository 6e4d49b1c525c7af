// ABOUTME: Engine configuration: metric coefficients and generation defaults
// ABOUTME: Plain value types with defaults and validation, loaded by the service crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! The engine never reads the environment itself. The root crate builds an
//! `EngineConfig` from defaults plus overrides and hands it to the calculators.

mod error;

pub use error::ConfigError;

use liftplan_core::constants::{limits, metrics};
use liftplan_core::models::ExperienceTier;
use serde::{Deserialize, Serialize};

/// Coefficients used when deriving training data from completions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsConfig {
    /// Seconds attributed to one repetition
    pub seconds_per_rep: u32,
    /// Body weight used when the profile has none (kg)
    pub default_body_weight_kg: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            seconds_per_rep: metrics::DEFAULT_SECONDS_PER_REP,
            default_body_weight_kg: metrics::DEFAULT_BODY_WEIGHT_KG,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Metric coefficients
    pub metrics: MetricsConfig,
    /// Experience column used when preferences do not name one
    pub default_experience: ExperienceTier,
    /// Frequency for new plans and for regenerations without a prior plan
    pub default_frequency: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            metrics: MetricsConfig::default(),
            default_experience: ExperienceTier::default(),
            default_frequency: limits::DEFAULT_FREQUENCY,
        }
    }
}

impl EngineConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is outside its usable range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metrics.seconds_per_rep == 0 || self.metrics.seconds_per_rep > 60 {
            return Err(ConfigError::InvalidRange(
                "seconds_per_rep must be between 1 and 60",
            ));
        }
        let weight = self.metrics.default_body_weight_kg;
        if !weight.is_finite() || weight <= 0.0 || weight > 500.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_body_weight_kg must be greater than 0 and at most 500",
            ));
        }
        if !(limits::MIN_FREQUENCY..=limits::MAX_FREQUENCY).contains(&self.default_frequency) {
            return Err(ConfigError::InvalidRange(
                "default_frequency must be between 1 and 7",
            ));
        }
        Ok(())
    }
}
