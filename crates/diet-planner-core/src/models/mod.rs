// ABOUTME: Core data models for the diet planner
// ABOUTME: Re-exports recipe, profile, condition, and meal slot types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Core Models
//!
//! - `Recipe` / `NutrientProfile`: immutable catalog rows and their nine nutrient fields
//! - `UserProfile`: biometrics and weight goal of a single request
//! - `HealthCondition`: closed set of conditions keyed to eligibility rules
//! - `MealSlot`: the four meals of a day, in assignment order

mod condition;
mod meal;
mod profile;
mod recipe;

pub use condition::HealthCondition;
pub use meal::MealSlot;
pub use profile::{Gender, UserProfile, WeightGoal};
pub use recipe::{Nutrient, NutrientProfile, NutrientVector, Recipe, RecipeId};
