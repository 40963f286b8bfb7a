// ABOUTME: Main library entry point for the condition-aware diet planner
// ABOUTME: Catalog loading, dataset cleaning, motivation provider, and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Planner
//!
//! Recommends four meals (breakfast, lunch, snack, dinner) from a fixed recipe
//! table, personalized by biometrics, a weight goal, and a declared health
//! condition.
//!
//! ## Architecture
//!
//! - **`diet_planner_core`**: errors, constants, and domain models
//! - **`diet_planner_intelligence`**: calorie estimation, eligibility
//!   filtering, similarity ranking, and the recommendation engine
//! - **this crate**: the recipe catalog, dataset cleaning, environment
//!   configuration, logging, the Groq-backed motivation provider, output
//!   formatting, and the `diet-planner` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use diet_planner::config::PlannerConfig;
//! use diet_planner::errors::AppResult;
//! use diet_planner::models::{Gender, HealthCondition, UserProfile, WeightGoal};
//! use diet_planner::planner::DietPlanner;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let planner = DietPlanner::from_config(&PlannerConfig::from_env()?)?;
//!     let profile = UserProfile::new(25, Gender::Male, 170.0, 70.0, WeightGoal::Lose);
//!     let plan = planner.plan(profile, HealthCondition::Diabetes).await?;
//!
//!     println!("{} kcal, {} meals", plan.recommendation.calories, plan.recommendation.meals.len());
//!     Ok(())
//! }
//! ```

/// Immutable recipe catalog loaded from the cleaned CSV
pub mod catalog;

/// Environment configuration and motivation tables
pub mod config;

/// Application constants
pub mod constants;

/// Offline dataset cleaning
pub mod dataset;

/// Unified error handling, re-exported from the core crate
pub mod errors;

/// Output formats for plans and condition tables
pub mod formatters;

/// Chat completion provider abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Motivational messages with remote generation and fallback
pub mod motivation;

/// Runtime composition used by the CLI
pub mod planner;

pub use diet_planner_core::models;
pub use diet_planner_intelligence as intelligence;
