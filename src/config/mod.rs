// ABOUTME: Configuration management for the diet planner application
// ABOUTME: Environment-driven runtime settings and the motivation fallback tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: catalog location, Groq credential and model, timeouts
//! - **Motivation**: per-condition fallback messages and request limits
//!
//! Engine tables (disease rules, calorie coefficients, target baseline) live
//! in `diet_planner_intelligence::config`.

/// Environment-driven runtime configuration
pub mod environment;
/// Motivation provider configuration and fallback message sets
pub mod motivation;

pub use environment::{Environment, LlmConfig, PlannerConfig};
pub use motivation::{MotivationConfig, MotivationSets};
