// ABOUTME: Logging configuration and structured logging setup for the plan service
// ABOUTME: Configures log level, output format and location details from the environment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging configuration
//!
//! The engine emits `tracing` events unconditionally; nothing is printed until a host
//! installs a subscriber, typically through [`init_from_env`].

use std::env;
use std::fmt;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::{info, Subscriber};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Default service name reported in startup logs
pub const DEFAULT_SERVICE_NAME: &str = "liftplan";

/// Subscriber settings for hosts embedding the planner
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Base `EnvFilter` directive
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Emit file and line of each event
    pub include_location: bool,
    /// Emit thread ids and names
    pub include_thread: bool,
    /// Name reported at startup
    pub service_name: String,
    /// Version reported at startup
    pub service_version: String,
    /// Deployment environment; `production` turns on location and thread output
    pub environment: String,
}

/// Event line format selected by `LOG_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One `JSON` object per event
    Json,
    /// Human-readable multi-field lines
    Pretty,
    /// Single-line events without targets
    Compact,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to pretty
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: DEFAULT_SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Read the configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map(|value| LogFormat::from_env_value(&value))
            .unwrap_or(LogFormat::Pretty);
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let production = environment == "production";

        Self {
            level,
            format,
            include_location: production || env_flag("LOG_INCLUDE_LOCATION"),
            include_thread: production || env_flag("LOG_INCLUDE_THREAD"),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Filter directives applied on top of the configured level
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
            .add_directive(
                format!("liftplan={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
            .add_directive(
                format!("liftplan_intelligence={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
    }

    fn fmt_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let layer = tracing_fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_writer(io::stdout);
        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(self.fmt_layer())
            .try_init()?;

        let summary = json!({
            "service": self.service_name,
            "version": self.service_version,
            "environment": self.environment,
            "level": self.level,
            "format": self.format.to_string(),
        });
        info!(config = %summary, "LiftPlan logging initialized");
        Ok(())
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|value| !matches!(value.trim(), "" | "0" | "false"))
}

/// Install a subscriber with default settings
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Install a subscriber configured from the environment
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
