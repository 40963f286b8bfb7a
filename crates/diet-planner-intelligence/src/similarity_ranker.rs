// ABOUTME: Ranks candidate recipes by cosine similarity to a target nutrient vector
// ABOUTME: Standardizes all nine nutrients over the candidate set before scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Similarity Ranker
//!
//! 1. Fit per-nutrient mean and population standard deviation over the
//!    candidate set (never the full catalog).
//! 2. Map every candidate and the target to `(x - mean) / (std + epsilon)`.
//! 3. Score each candidate by cosine similarity with the target.
//! 4. Stable sort descending and keep the first `k`, so equal scores keep
//!    catalog order.

#![allow(clippy::cast_precision_loss)] // candidate counts are far below 2^52

use crate::config::{SimilarityConfig, TargetBaseline};
use diet_planner_core::models::{Nutrient, NutrientVector, Recipe};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Nutrient vector the ranker compares candidates against
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetVector(NutrientVector);

impl TargetVector {
    /// Personalized calories followed by the fixed baseline values
    #[must_use]
    pub fn from_calories(calories: u32, baseline: &TargetBaseline) -> Self {
        Self([
            f64::from(calories),
            baseline.fat_g,
            baseline.saturated_fat_g,
            baseline.cholesterol_mg,
            baseline.sodium_mg,
            baseline.carbohydrate_g,
            baseline.fiber_g,
            baseline.sugar_g,
            baseline.protein_g,
        ])
    }

    /// Raw values in canonical nutrient order
    #[must_use]
    pub const fn values(&self) -> &NutrientVector {
        &self.0
    }

    /// Value for one nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        self.0[nutrient.index()]
    }
}

/// Per-nutrient z-score transform fitted on a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureScaler {
    means: NutrientVector,
    std_devs: NutrientVector,
    epsilon: f64,
}

impl FeatureScaler {
    /// Fit means and population standard deviations
    ///
    /// Returns `None` for an empty candidate set.
    #[must_use]
    pub fn fit(candidates: &[&Recipe], epsilon: f64) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        let count = candidates.len() as f64;

        let mut means = [0.0; Nutrient::COUNT];
        for recipe in candidates {
            for (sum, value) in means.iter_mut().zip(recipe.nutrients.to_vector()) {
                *sum += value;
            }
        }
        for mean in &mut means {
            *mean /= count;
        }

        let mut std_devs = [0.0; Nutrient::COUNT];
        for recipe in candidates {
            for ((acc, value), mean) in std_devs
                .iter_mut()
                .zip(recipe.nutrients.to_vector())
                .zip(means)
            {
                let diff = value - mean;
                *acc += diff * diff;
            }
        }
        for std_dev in &mut std_devs {
            *std_dev = (*std_dev / count).sqrt();
        }

        Some(Self {
            means,
            std_devs,
            epsilon,
        })
    }

    /// Column means
    #[must_use]
    pub const fn means(&self) -> &NutrientVector {
        &self.means
    }

    /// Column population standard deviations
    #[must_use]
    pub const fn std_devs(&self) -> &NutrientVector {
        &self.std_devs
    }

    /// Standardize a vector
    #[must_use]
    pub fn transform(&self, values: &NutrientVector) -> NutrientVector {
        let mut scaled = [0.0; Nutrient::COUNT];
        for (i, out) in scaled.iter_mut().enumerate() {
            *out = (values[i] - self.means[i]) / (self.std_devs[i] + self.epsilon);
        }
        scaled
    }
}

/// Cosine similarity between two vectors, 0 when either has zero norm
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let magnitude_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a > 0.0 && magnitude_b > 0.0 {
        dot_product / (magnitude_a * magnitude_b)
    } else {
        0.0
    }
}

/// A candidate with its similarity score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedRecipe<'a> {
    /// The recipe
    pub recipe: &'a Recipe,
    /// Cosine similarity to the target in `[-1, 1]`
    pub similarity: f64,
}

/// Nearest-recipe search over standardized nutrient vectors
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker {
    config: SimilarityConfig,
}

impl SimilarityRanker {
    /// Create a ranker with the given scoring parameters
    #[must_use]
    pub const fn new(config: SimilarityConfig) -> Self {
        Self { config }
    }

    /// Return at most `k` candidates, most similar first
    ///
    /// Exactly `k` are returned when `candidates.len() >= k`. Candidates with
    /// equal scores keep their input order.
    #[must_use]
    pub fn rank<'a>(
        &self,
        candidates: &[&'a Recipe],
        target: &TargetVector,
        k: usize,
    ) -> Vec<RankedRecipe<'a>> {
        let Some(scaler) = FeatureScaler::fit(candidates, self.config.epsilon) else {
            return Vec::new();
        };
        let scaled_target = scaler.transform(target.values());

        let score = |recipe: &&'a Recipe| RankedRecipe {
            recipe: *recipe,
            similarity: cosine_similarity(
                &scaler.transform(&recipe.nutrients.to_vector()),
                &scaled_target,
            ),
        };

        let mut ranked: Vec<RankedRecipe<'a>> =
            if candidates.len() >= self.config.parallel_threshold {
                candidates.par_iter().map(score).collect()
            } else {
                candidates.iter().map(score).collect()
            };

        ranked.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(k);

        debug!(
            candidates = candidates.len(),
            selected = ranked.len(),
            best = ranked.first().map(|r| r.similarity),
            "Ranked candidates by nutrient similarity"
        );
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diet_planner_core::models::{NutrientProfile, RecipeId};

    fn recipe(id: u64, values: NutrientVector) -> Recipe {
        Recipe::new(
            RecipeId(id),
            format!("Recipe {id}"),
            NutrientProfile::from_vector(values),
            "",
        )
    }

    #[test]
    fn test_cosine_similarity_basics() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-12);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-12);
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-12);
        assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).abs() < f64::EPSILON);
        assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaler_uses_population_std() {
        let a = recipe(1, [1.0; Nutrient::COUNT]);
        let b = recipe(2, [3.0; Nutrient::COUNT]);
        let scaler = FeatureScaler::fit(&[&a, &b], 1e-9).unwrap();
        assert!((scaler.means()[0] - 2.0).abs() < 1e-12);
        assert!((scaler.std_devs()[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_does_not_divide_by_zero() {
        let a = recipe(1, [5.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let b = recipe(2, [5.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let scaler = FeatureScaler::fit(&[&a, &b], 1e-9).unwrap();
        let scaled = scaler.transform(&a.nutrients.to_vector());
        assert!(scaled.iter().all(|v| v.is_finite()));
        assert!(scaled[0].abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_candidates_return_empty() {
        let ranker = SimilarityRanker::default();
        let target = TargetVector::from_calories(2000, &TargetBaseline::default());
        assert!(ranker.rank(&[], &target, 4).is_empty());
    }

    #[test]
    fn test_identical_candidates_keep_input_order() {
        let recipes: Vec<Recipe> = (0..6)
            .map(|id| recipe(id, [100.0; Nutrient::COUNT]))
            .collect();
        let refs: Vec<&Recipe> = recipes.iter().collect();
        let target = TargetVector::from_calories(2000, &TargetBaseline::default());

        let ranked = SimilarityRanker::default().rank(&refs, &target, 4);
        let ids: Vec<u64> = ranked.iter().map(|r| r.recipe.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    fn spread_recipes(count: u64) -> Vec<Recipe> {
        (0..count)
            .map(|id| {
                let x = id as f64;
                recipe(
                    id,
                    [
                        x * 37.0 % 900.0,
                        x % 13.0,
                        x % 5.0,
                        x * 7.0 % 200.0,
                        x * 31.0 % 2000.0,
                        x * 3.0 % 90.0,
                        x % 9.0,
                        x * 11.0 % 40.0,
                        x * 5.0 % 60.0,
                    ],
                )
            })
            .collect()
    }

    fn ids(ranked: &[RankedRecipe<'_>]) -> Vec<RecipeId> {
        ranked.iter().map(|r| r.recipe.id).collect()
    }

    #[test]
    fn test_returns_k_sorted_descending() {
        let recipes = spread_recipes(12);
        let refs: Vec<&Recipe> = recipes.iter().collect();
        let target = TargetVector::from_calories(1359, &TargetBaseline::default());

        let ranked = SimilarityRanker::default().rank(&refs, &target, 4);
        assert_eq!(ranked.len(), 4);
        for pair in ranked.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }

        let all = SimilarityRanker::default().rank(&refs[..4], &target, 4);
        let mut selected = ids(&all);
        selected.sort_unstable();
        assert_eq!(selected, refs[..4].iter().map(|r| r.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_selection_ignores_candidate_order() {
        let recipes = spread_recipes(8);
        let forward: Vec<&Recipe> = recipes.iter().collect();
        let reversed: Vec<&Recipe> = recipes.iter().rev().collect();
        let target = TargetVector::from_calories(1359, &TargetBaseline::default());
        let ranker = SimilarityRanker::default();

        let mut a = ids(&ranker.rank(&forward, &target, 4));
        let mut b = ids(&ranker.rank(&reversed, &target, 4));
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_scoring_matches_sequential() {
        let recipes = spread_recipes(64);
        let refs: Vec<&Recipe> = recipes.iter().collect();
        let target = TargetVector::from_calories(1800, &TargetBaseline::default());

        let sequential = SimilarityRanker::default().rank(&refs, &target, 4);
        let parallel = SimilarityRanker::new(SimilarityConfig {
            parallel_threshold: 1,
            ..SimilarityConfig::default()
        })
        .rank(&refs, &target, 4);

        assert_eq!(ids(&sequential), ids(&parallel));
    }
}
