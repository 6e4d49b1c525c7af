// ABOUTME: Planner configuration loaded from defaults and environment variable overrides
// ABOUTME: Provides a process-wide singleton that falls back to defaults on invalid input
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Planner Configuration
//!
//! | Variable | Field |
//! |----------|-------|
//! | `LIFTPLAN_SECONDS_PER_REP` | `engine.metrics.seconds_per_rep` |
//! | `LIFTPLAN_DEFAULT_BODY_WEIGHT_KG` | `engine.metrics.default_body_weight_kg` |
//! | `LIFTPLAN_DEFAULT_EXPERIENCE` | `engine.default_experience` |
//! | `LIFTPLAN_DEFAULT_FREQUENCY` | `engine.default_frequency` |

use std::env;
use std::sync::OnceLock;

use liftplan_intelligence::config::{ConfigError, EngineConfig};
use serde::{Deserialize, Serialize};

/// Environment variable overriding seconds per repetition
pub const ENV_SECONDS_PER_REP: &str = "LIFTPLAN_SECONDS_PER_REP";
/// Environment variable overriding the fallback body weight
pub const ENV_DEFAULT_BODY_WEIGHT_KG: &str = "LIFTPLAN_DEFAULT_BODY_WEIGHT_KG";
/// Environment variable overriding the default experience tier
pub const ENV_DEFAULT_EXPERIENCE: &str = "LIFTPLAN_DEFAULT_EXPERIENCE";
/// Environment variable overriding the default weekly frequency
pub const ENV_DEFAULT_FREQUENCY: &str = "LIFTPLAN_DEFAULT_FREQUENCY";

static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Top-level planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Engine coefficients and defaults
    pub engine: EngineConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    ///
    /// Loads once from the environment; invalid values fall back to defaults.
    #[must_use]
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any engine value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override(ENV_SECONDS_PER_REP)? {
            self.engine.metrics.seconds_per_rep = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {ENV_SECONDS_PER_REP}")))?;
        }

        if let Some(val) = env_override(ENV_DEFAULT_BODY_WEIGHT_KG)? {
            self.engine.metrics.default_body_weight_kg = val.trim().parse().map_err(|_| {
                ConfigError::Parse(format!("Invalid {ENV_DEFAULT_BODY_WEIGHT_KG}"))
            })?;
        }

        if let Some(val) = env_override(ENV_DEFAULT_EXPERIENCE)? {
            self.engine.default_experience = val
                .parse()
                .map_err(|e| ConfigError::Parse(format!("Invalid {ENV_DEFAULT_EXPERIENCE}: {e}")))?;
        }

        if let Some(val) = env_override(ENV_DEFAULT_FREQUENCY)? {
            self.engine.default_frequency = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {ENV_DEFAULT_FREQUENCY}")))?;
        }

        Ok(self)
    }
}

/// Read an override variable; unset means no override
fn env_override(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::EnvVar { name, source }),
    }
}
