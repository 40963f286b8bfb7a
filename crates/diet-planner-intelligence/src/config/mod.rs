// ABOUTME: Configuration tables injected into the recommendation engine
// ABOUTME: Groups calorie formulas, disease rules, target baseline, and scoring parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Configuration
//!
//! All numeric tables the pipeline reads live here rather than inside the
//! algorithms. Defaults reproduce the reference behavior exactly; callers
//! may override any table and should run [`RecommendationConfig::validate`]
//! before handing it to the engine.

mod calories;
mod disease_rules;
mod error;
mod similarity;

pub use calories::{BmrFormula, CalorieConfig, GoalFactors};
pub use disease_rules::{DiseaseRule, DiseaseRules};
pub use error::ConfigError;
pub use similarity::{SimilarityConfig, TargetBaseline};

use serde::{Deserialize, Serialize};

/// Complete recommendation engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Calorie estimation formulas and goal factors
    pub calories: CalorieConfig,
    /// Per-condition nutrient ceilings
    pub disease_rules: DiseaseRules,
    /// Fixed nutrient values of the target vector
    pub target_baseline: TargetBaseline,
    /// Similarity scoring parameters
    pub similarity: SimilarityConfig,
}

impl RecommendationConfig {
    /// Validate every table
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calories.validate()?;
        self.disease_rules.validate()?;
        self.target_baseline.validate()?;
        self.similarity.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RecommendationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_goal_factor_rejected() {
        let mut config = RecommendationConfig::default();
        config.calories.goal_factors.gain = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive("gain goal factor"))
        ));
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_value(RecommendationConfig::default()).unwrap();
        assert_eq!(json["disease_rules"]["bp"]["max_sodium_mg"], 1200.0);
        assert_eq!(json["target_baseline"]["protein_g"], 100.0);
    }
}
