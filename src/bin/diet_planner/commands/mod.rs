// ABOUTME: Subcommand implementations for the diet-planner CLI
// ABOUTME: One module per subcommand, each exposing an argument struct and run()
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod clean;
pub mod conditions;
pub mod recommend;
