// ABOUTME: Integration tests for the offline dataset cleaner
// ABOUTME: File-based cleaning, idempotence on clean input, and catalog compatibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{catalog_csv, diabetes_recipes, init_test_logging};
use diet_planner::catalog::RecipeCatalog;
use diet_planner::dataset::{CleaningOptions, DatasetCleaner};
use diet_planner::errors::ErrorCode;
use std::fs;
use tempfile::TempDir;

fn cleaner(target_rows: usize, chunk_size: usize) -> DatasetCleaner {
    DatasetCleaner::new(CleaningOptions {
        target_rows,
        chunk_size,
    })
    .unwrap()
}

#[test]
fn test_clean_input_of_target_size_is_unchanged() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("clean.csv");
    let output = dir.path().join("again.csv");
    let source = catalog_csv(&diabetes_recipes());
    fs::write(&input, &source).unwrap();

    let report = cleaner(8, 3).clean_file(&input, &output).unwrap();

    assert_eq!(report.rows_read, 8);
    assert_eq!(report.rows_written, 8);
    assert_eq!(report.chunks_processed, 3);
    assert_eq!(
        report.dropped_missing + report.dropped_duplicate + report.dropped_negative,
        0
    );
    assert!(report.target_reached);
    assert_eq!(fs::read_to_string(&output).unwrap(), source);
}

#[test]
fn test_cleaned_output_loads_as_catalog() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.csv");
    let output = dir.path().join("clean.csv");

    let mut raw = catalog_csv(&diabetes_recipes());
    raw.push_str("9,Mystery Stew,Stir.,NA,1,1,1,1,1,1,1,1\n");
    raw.push_str("10,Salt Block,Lick.,10,1,1,1,-40,1,1,1,1\n");
    raw.push_str("1,Oat Porridge,Prepare Oat Porridge.,320,6,1,5,120,55,8,9,11\n");
    fs::write(&input, raw).unwrap();

    let report = cleaner(100, 4).clean_file(&input, &output).unwrap();
    assert_eq!(report.rows_read, 11);
    assert_eq!(report.dropped_missing, 1);
    assert_eq!(report.dropped_negative, 1);
    assert_eq!(report.dropped_duplicate, 1);
    assert_eq!(report.rows_written, 8);
    assert!(!report.target_reached);

    let catalog = RecipeCatalog::load(&output).unwrap();
    assert_eq!(catalog.recipes(), diabetes_recipes().as_slice());
}

#[test]
fn test_same_input_and_output_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "Name\nx\n").unwrap();

    let err = cleaner(10, 10).clean_file(&path, &path).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_missing_input_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = cleaner(10, 10)
        .clean_file(&dir.path().join("nope.csv"), &dir.path().join("out.csv"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
