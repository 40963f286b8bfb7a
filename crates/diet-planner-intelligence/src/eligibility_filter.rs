// ABOUTME: Filters the recipe catalog down to recipes within a health condition's ceilings
// ABOUTME: Falls back to the whole catalog when too few recipes qualify
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::DiseaseRules;
use diet_planner_core::constants::meal_plan::MEALS_PER_DAY;
use diet_planner_core::models::{HealthCondition, Recipe};
use tracing::{debug, warn};

/// Fewer matches than this triggers the full-catalog fallback
pub const MIN_ELIGIBLE_RECIPES: usize = MEALS_PER_DAY;

/// Recipes handed to the similarity ranker
#[derive(Debug, Clone)]
pub struct EligibleCandidates<'a> {
    /// Candidates in catalog order
    pub recipes: Vec<&'a Recipe>,
    /// Number of catalog recipes that satisfied every ceiling
    pub matched: usize,
    /// True when `matched` was too small and `recipes` is the whole catalog
    pub fallback_applied: bool,
}

impl EligibleCandidates<'_> {
    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether there are no candidates at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Keep the recipes whose fat, sugar, sodium and cholesterol are all at or
/// below the condition's ceilings.
///
/// The result is a subsequence of `catalog` in its original order. When fewer
/// than [`MIN_ELIGIBLE_RECIPES`] recipes qualify, the entire catalog is
/// returned instead and `fallback_applied` is set.
#[must_use]
pub fn filter_eligible<'a>(
    catalog: &'a [Recipe],
    condition: HealthCondition,
    rules: &DiseaseRules,
) -> EligibleCandidates<'a> {
    let rule = rules.rule_for(condition);
    let matching: Vec<&Recipe> = catalog
        .iter()
        .filter(|recipe| rule.admits(&recipe.nutrients))
        .collect();
    let matched = matching.len();

    if matched < MIN_ELIGIBLE_RECIPES {
        warn!(
            condition = %condition,
            matched,
            catalog_size = catalog.len(),
            "Too few recipes within condition ceilings, using full catalog"
        );
        return EligibleCandidates {
            recipes: catalog.iter().collect(),
            matched,
            fallback_applied: true,
        };
    }

    debug!(condition = %condition, matched, catalog_size = catalog.len(), "Filtered catalog");
    EligibleCandidates {
        recipes: matching,
        matched,
        fallback_applied: false,
    }
}
