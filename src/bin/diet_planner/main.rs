// ABOUTME: diet-planner CLI - daily meal plans for a profile and health condition
// ABOUTME: Subcommands for recommendations, dataset cleaning, and listing condition ceilings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan a day of meals
//! diet-planner recommend --age 25 --gender male --height 170 --weight 70 \
//!     --goal "Lose Weight" --condition Diabetes
//!
//! # Same plan as JSON, without calling the text generation service
//! diet-planner recommend --age 25 --gender male --height 170 --weight 70 \
//!     --goal lose --condition BP --format json --no-motivation
//!
//! # Prepare the catalog from a raw recipe export
//! diet-planner clean-dataset --input recipes.csv --output clean_recipes_10k.csv
//!
//! # Show the nutrient ceilings per condition
//! diet-planner conditions
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use diet_planner::errors::AppError;
use diet_planner::formatters::OutputFormat;
use diet_planner::logging::LoggingConfig;
use std::process::ExitCode;
use tracing::debug;

use commands::clean::CleanArgs;
use commands::recommend::RecommendArgs;

#[derive(Parser)]
#[command(
    name = "diet-planner",
    version,
    about = "Condition-aware daily meal planner",
    long_about = "Recommends breakfast, lunch, snack and dinner from a recipe catalog, \
                  personalized by biometrics, weight goal and health condition."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend four meals for a profile and health condition
    Recommend(RecommendArgs),

    /// Clean a raw recipe CSV into a catalog
    CleanDataset(CleanArgs),

    /// List the health conditions and their nutrient ceilings
    Conditions {
        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },
}

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Plain text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;
    debug!("Parsed command line");

    match cli.command {
        Command::Recommend(args) => commands::recommend::run(&args).await,
        Command::CleanDataset(args) => commands::clean::run(&args),
        Command::Conditions { format } => commands::conditions::run(format.into()),
    }
}
