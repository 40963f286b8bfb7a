// ABOUTME: Target nutrient baseline and similarity scoring parameters
// ABOUTME: Fixed per-meal reference values for every nutrient except calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::{ensure_non_negative, ensure_positive, ConfigError};
use serde::{Deserialize, Serialize};

/// Fixed nutrient values paired with the user's calorie target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBaseline {
    /// Total fat (g)
    pub fat_g: f64,
    /// Saturated fat (g)
    pub saturated_fat_g: f64,
    /// Cholesterol (mg)
    pub cholesterol_mg: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Carbohydrate (g)
    pub carbohydrate_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
    /// Sugar (g)
    pub sugar_g: f64,
    /// Protein (g)
    pub protein_g: f64,
}

impl Default for TargetBaseline {
    fn default() -> Self {
        Self {
            fat_g: 30.0,
            saturated_fat_g: 10.0,
            cholesterol_mg: 150.0,
            sodium_mg: 1500.0,
            carbohydrate_g: 250.0,
            fiber_g: 30.0,
            sugar_g: 25.0,
            protein_g: 100.0,
        }
    }
}

impl TargetBaseline {
    /// Validate that every baseline value is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns an error if any value is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        for value in [
            self.fat_g,
            self.saturated_fat_g,
            self.cholesterol_mg,
            self.sodium_mg,
            self.carbohydrate_g,
            self.fiber_g,
            self.sugar_g,
            self.protein_g,
        ] {
            ensure_non_negative(value, "target baseline value")?;
        }
        Ok(())
    }
}

/// Scoring parameters for the similarity ranker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Added to each standard deviation before dividing
    pub epsilon: f64,
    /// Candidate count at which scoring switches to the rayon pool
    pub parallel_threshold: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            parallel_threshold: 2048,
        }
    }
}

impl SimilarityConfig {
    /// Validate scoring parameters
    ///
    /// # Errors
    ///
    /// Returns an error if epsilon is not a finite positive number
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(self.epsilon, "similarity epsilon")
    }
}
