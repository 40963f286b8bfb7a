// ABOUTME: Runtime composition of catalog, recommendation engine and motivation provider
// ABOUTME: Runs the ranking on the blocking pool concurrently with the motivation request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diet Planner
//!
//! Entry point used by the CLI. The catalog and engine are immutable and
//! shared; each call to [`DietPlanner::plan`] is independent.

use crate::catalog::RecipeCatalog;
use crate::config::PlannerConfig;
use crate::errors::{AppError, AppResult};
use crate::motivation::{Motivation, MotivationProvider};
use diet_planner_core::models::{HealthCondition, UserProfile};
use diet_planner_intelligence::{Recommendation, RecommendationConfig, RecommendationEngine};
use serde::Serialize;
use tokio::task;
use tracing::{debug, instrument};

/// A complete answer for one request
#[derive(Debug, Clone, Serialize)]
pub struct DailyPlan {
    /// Profile the plan was computed for
    pub profile: UserProfile,
    /// Calorie target and the meals
    #[serde(flatten)]
    pub recommendation: Recommendation,
    /// Motivational message and its source
    pub motivation: Motivation,
}

/// Catalog, engine and motivation provider wired together
#[derive(Debug, Clone)]
pub struct DietPlanner {
    catalog: RecipeCatalog,
    engine: RecommendationEngine,
    motivation: MotivationProvider,
}

impl DietPlanner {
    /// Assemble a planner from its parts
    #[must_use]
    pub const fn new(
        catalog: RecipeCatalog,
        engine: RecommendationEngine,
        motivation: MotivationProvider,
    ) -> Self {
        Self {
            catalog,
            engine,
            motivation,
        }
    }

    /// Load the catalog and build the default engine and provider
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the catalog cannot be loaded
    pub fn from_config(config: &PlannerConfig) -> AppResult<Self> {
        config.validate()?;
        let catalog = RecipeCatalog::load(&config.catalog_path)?;
        let engine = RecommendationEngine::new(RecommendationConfig::default())?;
        let motivation = MotivationProvider::from_planner_config(config)?;
        Ok(Self::new(catalog, engine, motivation))
    }

    /// Replace the motivation provider
    #[must_use]
    pub fn with_motivation(mut self, motivation: MotivationProvider) -> Self {
        self.motivation = motivation;
        self
    }

    /// Loaded catalog
    #[must_use]
    pub const fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Motivation provider in use
    #[must_use]
    pub const fn motivation(&self) -> &MotivationProvider {
        &self.motivation
    }

    /// Compute the meal plan synchronously, without motivation
    #[must_use]
    pub fn recommend(&self, profile: &UserProfile, condition: HealthCondition) -> Recommendation {
        self.engine.recommend(profile, condition, self.catalog.recipes())
    }

    /// Compute the meal plan and fetch a motivational message concurrently
    ///
    /// # Errors
    ///
    /// Returns an error if the ranking task panics or the condition has no
    /// fallback messages; remote motivation failures are not errors
    #[instrument(skip(self, profile))]
    pub async fn plan(
        &self,
        profile: UserProfile,
        condition: HealthCondition,
    ) -> AppResult<DailyPlan> {
        let recipes = self.catalog.shared();
        let engine = self.engine.clone();
        let ranking = task::spawn_blocking(move || engine.recommend(&profile, condition, &recipes));

        let (recommendation, motivation) =
            tokio::join!(ranking, self.motivation.motivate(condition));

        let recommendation = recommendation.map_err(|e| {
            AppError::internal(format!("Recommendation task failed: {e}")).with_source(e)
        })?;
        let motivation = motivation?;
        debug!(
            meals = recommendation.meals.len(),
            generated = motivation.is_generated(),
            "Daily plan ready"
        );

        Ok(DailyPlan {
            profile,
            recommendation,
            motivation,
        })
    }
}
