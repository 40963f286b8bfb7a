// ABOUTME: Meal recommendation engine composed of pure, synchronous algorithms
// ABOUTME: Calorie estimation, eligibility filtering, similarity ranking, and orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Planner Intelligence
//!
//! The recommendation pipeline, leaf first:
//!
//! 1. [`calorie_estimator`] maps biometrics and a weight goal to a daily calorie target
//! 2. [`eligibility_filter`] keeps recipes under the health condition's nutrient ceilings
//! 3. [`similarity_ranker`] standardizes nutrient vectors and ranks by cosine similarity
//! 4. [`recommendation_engine`] composes the three and assigns the top recipes to meal slots
//!
//! Every function here is pure over immutable inputs. The catalog can be shared
//! between concurrent callers without coordination.

/// Injected configuration tables (formula coefficients, disease rules, target baseline)
pub mod config;

/// Daily calorie target from biometrics and weight goal
pub mod calorie_estimator;

/// Condition-based nutrient ceiling filter with full-catalog fallback
pub mod eligibility_filter;

/// Z-score standardization and cosine similarity ranking
pub mod similarity_ranker;

/// Orchestration of the full recommendation pipeline
pub mod recommendation_engine;

pub use calorie_estimator::estimate_daily_calories;
pub use config::RecommendationConfig;
pub use eligibility_filter::{filter_eligible, EligibleCandidates};
pub use recommendation_engine::{PlannedMeal, Recommendation, RecommendationEngine};
pub use similarity_ranker::{RankedRecipe, SimilarityRanker, TargetVector};
