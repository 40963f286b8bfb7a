// ABOUTME: Offline dataset preparation for the recipe catalog
// ABOUTME: Turns a large raw recipe export into the cleaned table the catalog loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dataset Preparation
//!
//! A one-time step run before serving recommendations; nothing on the
//! recommendation path depends on it.

mod cleaner;

pub use cleaner::{CleaningOptions, CleaningReport, DatasetCleaner};
