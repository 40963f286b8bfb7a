// ABOUTME: Per-condition nutrient ceilings used by the eligibility filter
// ABOUTME: One rule per health condition, each a set of four upper bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Disease Rule Configuration
//!
//! Each [`HealthCondition`] maps to exactly one [`DiseaseRule`]. A recipe is
//! eligible for a condition when every constrained nutrient is less than or
//! equal to its ceiling. The table is total over the closed condition set, so
//! lookups cannot fail.

use super::error::{ensure_non_negative, ConfigError};
use diet_planner_core::models::{HealthCondition, Nutrient, NutrientProfile};
use serde::{Deserialize, Serialize};

/// Upper bounds on the four constrained nutrients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRule {
    /// Maximum total fat (g)
    pub max_fat_g: f64,
    /// Maximum sugar (g)
    pub max_sugar_g: f64,
    /// Maximum sodium (mg)
    pub max_sodium_mg: f64,
    /// Maximum cholesterol (mg)
    pub max_cholesterol_mg: f64,
}

impl DiseaseRule {
    /// Create a rule from its four ceilings
    #[must_use]
    pub const fn new(
        max_fat_g: f64,
        max_sugar_g: f64,
        max_sodium_mg: f64,
        max_cholesterol_mg: f64,
    ) -> Self {
        Self {
            max_fat_g,
            max_sugar_g,
            max_sodium_mg,
            max_cholesterol_mg,
        }
    }

    /// Ceilings paired with the nutrient they bound
    #[must_use]
    pub const fn ceilings(&self) -> [(Nutrient, f64); 4] {
        [
            (Nutrient::Fat, self.max_fat_g),
            (Nutrient::Sugar, self.max_sugar_g),
            (Nutrient::Sodium, self.max_sodium_mg),
            (Nutrient::Cholesterol, self.max_cholesterol_mg),
        ]
    }

    /// Whether a recipe's nutrients are within every ceiling (inclusive)
    #[must_use]
    pub fn admits(&self, nutrients: &NutrientProfile) -> bool {
        self.ceilings()
            .iter()
            .all(|&(nutrient, ceiling)| nutrients.get(nutrient) <= ceiling)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        for (_, ceiling) in self.ceilings() {
            ensure_non_negative(ceiling, field)?;
        }
        Ok(())
    }
}

/// Rule table covering every health condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRules {
    /// Diabetes ceilings
    pub diabetes: DiseaseRule,
    /// Blood pressure ceilings
    pub bp: DiseaseRule,
    /// Heart disease ceilings
    pub heart: DiseaseRule,
    /// Obesity ceilings
    pub obesity: DiseaseRule,
    /// Fitness ceilings
    pub fitness: DiseaseRule,
}

impl DiseaseRules {
    /// Rule for a condition
    #[must_use]
    pub const fn rule_for(&self, condition: HealthCondition) -> &DiseaseRule {
        match condition {
            HealthCondition::Diabetes => &self.diabetes,
            HealthCondition::Bp => &self.bp,
            HealthCondition::Heart => &self.heart,
            HealthCondition::Obesity => &self.obesity,
            HealthCondition::Fitness => &self.fitness,
        }
    }

    /// Validate that every ceiling is a finite non-negative number
    ///
    /// # Errors
    ///
    /// Returns an error naming the first condition with an invalid ceiling
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.diabetes.validate("Diabetes rule ceiling")?;
        self.bp.validate("BP rule ceiling")?;
        self.heart.validate("Heart rule ceiling")?;
        self.obesity.validate("Obesity rule ceiling")?;
        self.fitness.validate("Fitness rule ceiling")
    }
}

impl Default for DiseaseRules {
    fn default() -> Self {
        Self {
            diabetes: DiseaseRule::new(25.0, 25.0, 1500.0, 200.0),
            bp: DiseaseRule::new(30.0, 30.0, 1200.0, 200.0),
            heart: DiseaseRule::new(25.0, 25.0, 1200.0, 150.0),
            obesity: DiseaseRule::new(20.0, 20.0, 1000.0, 150.0),
            fitness: DiseaseRule::new(40.0, 40.0, 2000.0, 300.0),
        }
    }
}
