// ABOUTME: Body-composition helpers derived from profile height and weight
// ABOUTME: BMI with one-decimal rounding and the standard four-band classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftplan_core::models::Profile;
use serde::{Deserialize, Serialize};

/// BMI upper bound for underweight
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
/// BMI upper bound for normal weight
pub const NORMAL_LIMIT: f64 = 25.0;
/// BMI upper bound for overweight
pub const OVERWEIGHT_LIMIT: f64 = 30.0;

/// Body mass index rounded to one decimal, `None` for non-positive inputs
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !height_cm.is_finite() || !weight_kg.is_finite() || height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some((weight_kg / (height_m * height_m) * 10.0).round() / 10.0)
}

/// BMI classification band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            Self::Underweight
        } else if bmi < NORMAL_LIMIT {
            Self::Normal
        } else if bmi < OVERWEIGHT_LIMIT {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Body metrics derived from a profile
pub trait BodyMetrics {
    /// BMI when height and weight are both known
    fn bmi(&self) -> Option<f64>;

    /// BMI band when height and weight are both known
    fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }
}

impl BodyMetrics for Profile {
    fn bmi(&self) -> Option<f64> {
        calculate_bmi(self.height_cm?, self.weight_kg?)
    }
}
