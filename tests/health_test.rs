// ABOUTME: Integration tests for BMI helpers
// ABOUTME: Covers rounding, invalid inputs and category bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftplan::intelligence::{calculate_bmi, BmiCategory, BodyMetrics};
use liftplan::models::Profile;
use uuid::Uuid;

#[test]
fn test_bmi_rounds_to_one_decimal() {
    let bmi = calculate_bmi(180.0, 81.0).unwrap();
    assert!((bmi - 25.0).abs() < 1e-9);
    let bmi = calculate_bmi(165.0, 60.0).unwrap();
    assert!((bmi - 22.0).abs() < 1e-9);
}

#[test]
fn test_bmi_rejects_non_positive_inputs() {
    assert_eq!(calculate_bmi(0.0, 70.0), None);
    assert_eq!(calculate_bmi(175.0, -1.0), None);
    assert_eq!(calculate_bmi(f64::NAN, 70.0), None);
}

#[test]
fn test_bmi_category_bands() {
    assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    assert_eq!(BmiCategory::Normal.label(), "Normal weight");
}

#[test]
fn test_profile_bmi_needs_both_measurements() {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.height_cm = Some(170.0);
    assert_eq!(profile.bmi(), None);
    profile.weight_kg = Some(95.0);
    assert_eq!(profile.bmi_category(), Some(BmiCategory::Obese));
}
