// ABOUTME: Error type for engine configuration loading and validation
// ABOUTME: Separates unreadable environment overrides, unparseable values and out-of-range settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use thiserror::Error;

/// Why an engine configuration was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An integer setting is outside its allowed range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An override variable is set but cannot be read as unicode
    #[error("Cannot read {name}: {source}")]
    EnvVar {
        /// Variable name
        name: &'static str,
        /// Underlying lookup failure
        #[source]
        source: env::VarError,
    },

    /// An override value does not parse as the expected type
    #[error("Parse error: {0}")]
    Parse(String),

    /// A measurement setting is outside its plausible range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
