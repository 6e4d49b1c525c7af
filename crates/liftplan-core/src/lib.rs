// ABOUTME: Core types for LiftPlan shared by the engine and the service crate
// ABOUTME: Data models, error taxonomy and domain constants with no engine logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftPlan Core
//!
//! Foundation crate for the workout engine. Holds the types every other crate agrees on:
//!
//! - `models` - profiles, exercise templates, generated exercises, plans, records
//! - `errors` - `ValidationError`, `PlannerError` and stable `ErrorCode`s
//! - `constants` - limits, metric coefficients and focus-area tag mapping

/// Domain constants grouped by concern
pub mod constants;

/// Error types and error codes
pub mod errors;

/// Data models
pub mod models;
