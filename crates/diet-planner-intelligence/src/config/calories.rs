// ABOUTME: Coefficients for the base metabolic rate formulas and goal scaling
// ABOUTME: Defaults reproduce the revised Harris-Benedict equations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::{ensure_non_negative, ensure_positive, ConfigError};
use diet_planner_core::models::{Gender, WeightGoal};
use serde::{Deserialize, Serialize};

/// Linear BMR formula: `intercept + weight*kg + height*cm - age*years`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrFormula {
    /// Constant term (kcal)
    pub intercept: f64,
    /// Coefficient per kilogram of body weight
    pub weight_coefficient: f64,
    /// Coefficient per centimeter of height
    pub height_coefficient: f64,
    /// Coefficient per year of age, subtracted
    pub age_coefficient: f64,
}

impl BmrFormula {
    /// Revised Harris-Benedict coefficients for men
    pub const MALE: Self = Self {
        intercept: 88.36,
        weight_coefficient: 13.4,
        height_coefficient: 4.8,
        age_coefficient: 5.7,
    };

    /// Revised Harris-Benedict coefficients for women
    pub const FEMALE: Self = Self {
        intercept: 447.6,
        weight_coefficient: 9.2,
        height_coefficient: 3.1,
        age_coefficient: 4.3,
    };

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        ensure_non_negative(self.intercept, field)?;
        ensure_non_negative(self.weight_coefficient, field)?;
        ensure_non_negative(self.height_coefficient, field)?;
        ensure_non_negative(self.age_coefficient, field)
    }
}

/// Multipliers applied to the BMR for each weight goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalFactors {
    /// Deficit multiplier
    pub lose: f64,
    /// Balance multiplier
    pub maintain: f64,
    /// Surplus multiplier
    pub gain: f64,
}

impl GoalFactors {
    /// Factor for a goal
    #[must_use]
    pub const fn factor(&self, goal: WeightGoal) -> f64 {
        match goal {
            WeightGoal::Lose => self.lose,
            WeightGoal::Maintain => self.maintain,
            WeightGoal::Gain => self.gain,
        }
    }
}

impl Default for GoalFactors {
    fn default() -> Self {
        Self {
            lose: 0.8,
            maintain: 1.0,
            gain: 1.2,
        }
    }
}

/// Calorie estimation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieConfig {
    /// Formula for [`Gender::Male`]
    pub male: BmrFormula,
    /// Formula for [`Gender::Female`]
    pub female: BmrFormula,
    /// Goal multipliers
    pub goal_factors: GoalFactors,
}

impl CalorieConfig {
    /// Formula for a gender
    #[must_use]
    pub const fn formula(&self, gender: Gender) -> &BmrFormula {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Validate coefficients and factors
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is negative or any factor is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.male.validate("male BMR coefficients")?;
        self.female.validate("female BMR coefficients")?;
        ensure_positive(self.goal_factors.lose, "lose goal factor")?;
        ensure_positive(self.goal_factors.maintain, "maintain goal factor")?;
        ensure_positive(self.goal_factors.gain, "gain goal factor")
    }
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            male: BmrFormula::MALE,
            female: BmrFormula::FEMALE,
            goal_factors: GoalFactors::default(),
        }
    }
}
