// ABOUTME: Output formats for meal plans and condition tables
// ABOUTME: Supports plain text for terminals and JSON for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, the calorie target, the motivational line and
//!   one block per meal
//! - **JSON**: The full [`DailyPlan`], including similarity scores and the
//!   motivation source

use crate::planner::DailyPlan;
use diet_planner_core::models::HealthCondition;
use diet_planner_intelligence::config::DiseaseRules;
use serde::Serialize;
use std::error::Error;
use std::fmt::{self, Write as _};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive), `None` when unrecognized
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

/// Render a daily plan
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_plan(plan: &DailyPlan, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(render_plan_text(plan)),
        OutputFormat::Json => to_json(plan, format),
    }
}

/// Render the condition ceilings table
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_conditions(rules: &DiseaseRules, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(render_conditions_text(rules)),
        OutputFormat::Json => to_json(rules, format),
    }
}

fn to_json<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

/// Text layout of a plan
///
/// Gram amounts keep their decimal point (`5.0g`), calories are truncated.
#[must_use]
pub fn render_plan_text(plan: &DailyPlan) -> String {
    let recommendation = &plan.recommendation;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Your daily calories: {} kcal", recommendation.calories);
    let _ = writeln!(out, "{}", plan.motivation.text);

    for meal in &recommendation.meals {
        let nutrients = &meal.recipe.nutrients;
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}", meal.slot, meal.recipe.name);
        let _ = writeln!(out, "Calories: {} kcal", nutrients.calories.trunc() as u64);
        let _ = writeln!(
            out,
            "Protein: {:?}g | Fat: {:?}g | Sugar: {:?}g",
            nutrients.protein_g, nutrients.fat_g, nutrients.sugar_g
        );
        let _ = writeln!(out, "{}", meal.recipe.instructions);
    }

    out
}

fn render_conditions_text(rules: &DiseaseRules) -> String {
    let mut out = format!(
        "{:<10} {:>8} {:>10} {:>11} {:>17}\n",
        "Condition", "Fat (g)", "Sugar (g)", "Sodium (mg)", "Cholesterol (mg)"
    );
    for condition in HealthCondition::ALL {
        let rule = rules.rule_for(condition);
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>10} {:>11} {:>17}",
            condition.as_str(),
            rule.max_fat_g,
            rule.max_sugar_g,
            rule.max_sodium_mg,
            rule.max_cholesterol_mg
        );
    }
    out
}
