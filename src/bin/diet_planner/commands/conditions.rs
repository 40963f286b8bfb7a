// ABOUTME: conditions subcommand - prints the nutrient ceilings of every health condition
// ABOUTME: Reads the same default tables the recommendation engine is built with
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use diet_planner::formatters::{format_conditions, OutputFormat};
use diet_planner::intelligence::RecommendationConfig;

/// Run the conditions subcommand
pub fn run(format: OutputFormat) -> Result<()> {
    let config = RecommendationConfig::default();
    config.validate()?;
    let output = format_conditions(&config.disease_rules, format)?;
    println!("{}", output.trim_end());
    Ok(())
}
