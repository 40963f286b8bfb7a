// ABOUTME: Composes calorie estimation, eligibility filtering, and similarity ranking
// ABOUTME: Assigns the top ranked recipes to Breakfast, Lunch, Snack, and Dinner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calorie_estimator::estimate_daily_calories;
use crate::config::RecommendationConfig;
use crate::eligibility_filter::filter_eligible;
use crate::similarity_ranker::{SimilarityRanker, TargetVector};
use diet_planner_core::constants::meal_plan::MEALS_PER_DAY;
use diet_planner_core::errors::AppResult;
use diet_planner_core::models::{HealthCondition, MealSlot, Recipe, UserProfile};
use serde::Serialize;
use tracing::{info, instrument};

/// A recipe assigned to a meal slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    /// Meal of the day
    pub slot: MealSlot,
    /// Assigned recipe
    pub recipe: Recipe,
    /// Cosine similarity of the recipe to the target vector
    pub similarity: f64,
}

/// One day's meal plan for a profile and condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Daily calorie target (kcal)
    pub calories: u32,
    /// Condition the plan was filtered for
    pub condition: HealthCondition,
    /// Target vector the recipes were ranked against
    pub target: TargetVector,
    /// Number of catalog recipes within the condition's ceilings
    pub eligible_count: usize,
    /// Whether ranking ran over the full catalog because too few recipes qualified
    pub fallback_applied: bool,
    /// Meals in slot order, at most [`MEALS_PER_DAY`]
    pub meals: Vec<PlannedMeal>,
}

/// Recommendation orchestrator
///
/// Holds only immutable configuration, so a single engine can serve any
/// number of concurrent requests against a shared catalog.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
    ranker: SimilarityRanker,
}

impl RecommendationEngine {
    /// Create an engine after validating its configuration
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error if any configuration table is invalid
    pub fn new(config: RecommendationConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            ranker: SimilarityRanker::new(config.similarity),
            config,
        })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Plan a day of meals
    ///
    /// Never fails: too few eligible recipes falls back to the full catalog,
    /// and a catalog smaller than [`MEALS_PER_DAY`] yields correspondingly
    /// fewer meals.
    #[instrument(
        skip(self, profile, catalog),
        fields(catalog_size = catalog.len(), goal = %profile.goal)
    )]
    pub fn recommend(
        &self,
        profile: &UserProfile,
        condition: HealthCondition,
        catalog: &[Recipe],
    ) -> Recommendation {
        let calories = estimate_daily_calories(profile, &self.config.calories);
        let candidates = filter_eligible(catalog, condition, &self.config.disease_rules);
        let target = TargetVector::from_calories(calories, &self.config.target_baseline);
        let ranked = self
            .ranker
            .rank(&candidates.recipes, &target, MEALS_PER_DAY);

        let meals: Vec<PlannedMeal> = MealSlot::ORDER
            .into_iter()
            .zip(ranked)
            .map(|(slot, ranked)| PlannedMeal {
                slot,
                recipe: ranked.recipe.clone(),
                similarity: ranked.similarity,
            })
            .collect();

        info!(
            calories,
            eligible = candidates.matched,
            fallback = candidates.fallback_applied,
            meals = meals.len(),
            "Generated meal plan"
        );

        Recommendation {
            calories,
            condition,
            target,
            eligible_count: candidates.matched,
            fallback_applied: candidates.fallback_applied,
            meals,
        }
    }
}
