// ABOUTME: Core types and constants for the diet planner
// ABOUTME: Foundation crate with error handling, domain models, and nutrient constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Diet Planner Core
//!
//! Foundation crate providing shared types and constants for the diet planner.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Nutrient column order, profile limits, and meal plan sizes
//! - **models**: Recipes, nutrient profiles, user profiles, health conditions, meal slots

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `UserProfile`, `HealthCondition`, `MealSlot`)
pub mod models;
