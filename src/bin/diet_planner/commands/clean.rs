// ABOUTME: clean-dataset subcommand - turns a raw recipe export into the catalog CSV
// ABOUTME: Prints the cleaning report after the output file is written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use clap::Args;
use diet_planner::constants::dataset::{DEFAULT_CHUNK_SIZE, DEFAULT_TARGET_ROWS};
use diet_planner::dataset::{CleaningOptions, DatasetCleaner};
use std::path::PathBuf;

/// Arguments of `diet-planner clean-dataset`
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Raw recipe CSV
    #[arg(long)]
    pub input: PathBuf,

    /// Destination of the cleaned CSV
    #[arg(long)]
    pub output: PathBuf,

    /// Number of rows to keep
    #[arg(long, default_value_t = DEFAULT_TARGET_ROWS)]
    pub target_rows: usize,

    /// Rows read per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

/// Run the clean-dataset subcommand
pub fn run(args: &CleanArgs) -> Result<()> {
    let cleaner = DatasetCleaner::new(CleaningOptions {
        target_rows: args.target_rows,
        chunk_size: args.chunk_size,
    })?;

    println!("Starting dataset cleaning...");
    let report = cleaner
        .clean_file(&args.input, &args.output)
        .with_context(|| format!("Failed to clean {}", args.input.display()))?;

    println!("Chunks processed: {}", report.chunks_processed);
    println!("Rows read: {}", report.rows_read);
    println!(
        "Rows dropped: {} missing, {} duplicate, {} negative",
        report.dropped_missing, report.dropped_duplicate, report.dropped_negative
    );
    println!("Final clean dataset saved at: {}", args.output.display());
    println!("Total rows: {}", report.rows_written);
    if !report.target_reached {
        println!("Source ran out before reaching {} rows", args.target_rows);
    }
    Ok(())
}
