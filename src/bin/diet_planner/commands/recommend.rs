// ABOUTME: recommend subcommand - validates the profile, loads the catalog, prints the plan
// ABOUTME: Ranking and the motivation request run concurrently inside the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use clap::Args;
use diet_planner::config::PlannerConfig;
use diet_planner::errors::AppResult;
use diet_planner::formatters::format_plan;
use diet_planner::models::{Gender, HealthCondition, UserProfile, WeightGoal};
use diet_planner::planner::DietPlanner;
use std::path::PathBuf;
use tracing::info;

use crate::FormatArg;

/// Arguments of `diet-planner recommend`
#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Age in years (10-100)
    #[arg(long)]
    pub age: u32,

    /// Gender: male or female
    #[arg(long)]
    pub gender: String,

    /// Height in centimeters (120-220)
    #[arg(long)]
    pub height: f64,

    /// Weight in kilograms (30-200)
    #[arg(long)]
    pub weight: f64,

    /// Goal: lose, maintain, gain (or "Lose Weight", "Maintain", "Gain Weight")
    #[arg(long)]
    pub goal: String,

    /// Health condition: Diabetes, BP, Heart, Obesity, Fitness
    #[arg(long)]
    pub condition: String,

    /// Cleaned recipe catalog (overrides the catalog path from the environment)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Use the built-in motivational messages instead of the text generation service
    #[arg(long)]
    pub no_motivation: bool,
}

impl RecommendArgs {
    fn profile(&self) -> AppResult<UserProfile> {
        let profile = UserProfile::new(
            self.age,
            self.gender.parse::<Gender>()?,
            self.height,
            self.weight,
            self.goal.parse::<WeightGoal>()?,
        );
        profile.validate_ranges()?;
        Ok(profile)
    }
}

/// Run the recommend subcommand
pub async fn run(args: &RecommendArgs) -> Result<()> {
    let profile = args.profile()?;
    let condition = args.condition.parse::<HealthCondition>()?;

    let mut config = PlannerConfig::from_env()?;
    if let Some(path) = &args.catalog {
        config.catalog_path.clone_from(path);
    }
    info!(config = %config.summary(), "Loaded configuration");

    let mut planner = DietPlanner::from_config(&config).with_context(|| {
        format!(
            "Cannot plan meals without the recipe catalog at {}",
            config.catalog_path.display()
        )
    })?;
    if args.no_motivation {
        let motivation = planner.motivation().clone().disable_remote();
        planner = planner.with_motivation(motivation);
    }

    let plan = planner.plan(profile, condition).await?;
    let output = format_plan(&plan, args.format.into())?;
    println!("{}", output.trim_end());
    Ok(())
}
