// ABOUTME: Error types for the diet planner application crate
// ABOUTME: Re-exports the shared AppError, ErrorCode, and AppResult from the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! All fallible operations in this crate return [`AppResult`]. The types live in
//! `diet-planner-core` so the engine and the application share one taxonomy.

pub use diet_planner_core::errors::{AppError, AppResult, ErrorCode};
