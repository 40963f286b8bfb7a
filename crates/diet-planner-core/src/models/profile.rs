// ABOUTME: User biometrics and weight goal models for calorie estimation
// ABOUTME: Defines Gender, WeightGoal, and UserProfile with range checks for callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile_limits::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used to select the base metabolic formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male formula
    Male,
    /// Female formula
    Female,
}

impl Gender {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected Male or Female"
            ))),
        }
    }
}

/// Weight goal that scales the daily calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl WeightGoal {
    /// Human-readable label as shown on the planner form
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lose => "Lose Weight",
            Self::Maintain => "Maintain",
            Self::Gain => "Gain Weight",
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeightGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "lose" | "lose weight" => Ok(Self::Lose),
            "maintain" | "maintain weight" => Ok(Self::Maintain),
            "gain" | "gain weight" => Ok(Self::Gain),
            _ => Err(AppError::invalid_input(format!(
                "Unknown goal '{s}', expected lose, maintain or gain"
            ))),
        }
    }
}

/// Biometrics and goal for a single recommendation request
///
/// Profiles are ephemeral. Range checks are the caller's responsibility: the
/// engine computes on whatever it is given, and [`UserProfile::validate_ranges`]
/// is available for front ends that accept free input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years (10-100)
    pub age: u32,
    /// Gender for formula selection
    pub gender: Gender,
    /// Height in centimeters (120-220)
    pub height_cm: f64,
    /// Weight in kilograms (30-200)
    pub weight_kg: f64,
    /// Weight goal
    pub goal: WeightGoal,
}

impl UserProfile {
    /// Create a new profile
    #[must_use]
    pub const fn new(
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        goal: WeightGoal,
    ) -> Self {
        Self {
            age,
            gender,
            height_cm,
            weight_kg,
            goal,
        }
    }

    /// Check that every biometric lies within the accepted form ranges
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error naming the first offending field
    pub fn validate_ranges(&self) -> AppResult<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::out_of_range("age", MIN_AGE, MAX_AGE));
        }
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&self.height_cm) {
            return Err(AppError::out_of_range(
                "height (cm)",
                MIN_HEIGHT_CM,
                MAX_HEIGHT_CM,
            ));
        }
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(AppError::out_of_range(
                "weight (kg)",
                MIN_WEIGHT_KG,
                MAX_WEIGHT_KG,
            ));
        }
        Ok(())
    }
}
