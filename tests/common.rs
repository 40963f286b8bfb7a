// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, recipe builders, and catalog CSV fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `diet_planner`

use diet_planner::catalog::RecipeCatalog;
use diet_planner::models::{NutrientProfile, Recipe, RecipeId};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Catalog CSV header in the cleaned-table column order
pub const CATALOG_HEADER: &str = "RecipeId,Name,RecipeInstructions,Calories,FatContent,SaturatedFatContent,CholesterolContent,SodiumContent,CarbohydrateContent,FiberContent,SugarContent,ProteinContent";

/// Build a recipe from nutrient values in canonical order
pub fn recipe(id: u64, name: &str, values: [f64; 9]) -> Recipe {
    Recipe::new(
        RecipeId(id),
        name,
        NutrientProfile::from_vector(values),
        format!("Prepare {name}."),
    )
}

/// Six recipes within the Diabetes ceilings followed by two that exceed them
pub fn diabetes_recipes() -> Vec<Recipe> {
    vec![
        recipe(1, "Oat Porridge", [320.0, 6.0, 1.0, 5.0, 120.0, 55.0, 8.0, 9.0, 11.0]),
        recipe(2, "Lentil Soup", [410.0, 9.0, 1.5, 0.0, 780.0, 60.0, 16.0, 6.0, 22.0]),
        recipe(3, "Greek Yogurt Bowl", [250.0, 5.0, 3.0, 15.0, 90.0, 30.0, 3.0, 20.0, 18.0]),
        recipe(4, "Grilled Chicken Salad", [380.0, 14.0, 3.0, 85.0, 640.0, 18.0, 6.0, 7.0, 42.0]),
        recipe(5, "Baked Salmon", [460.0, 22.0, 4.0, 95.0, 510.0, 12.0, 2.0, 3.0, 39.0]),
        recipe(6, "Vegetable Stir Fry", [300.0, 11.0, 1.5, 0.0, 900.0, 40.0, 7.0, 12.0, 10.0]),
        recipe(7, "Cheesecake", [520.0, 34.0, 19.0, 140.0, 330.0, 45.0, 0.5, 38.0, 8.0]),
        recipe(8, "Pepperoni Pizza", [780.0, 38.0, 16.0, 75.0, 1900.0, 80.0, 4.0, 9.0, 30.0]),
    ]
}

/// Render recipes as catalog CSV text
pub fn catalog_csv(recipes: &[Recipe]) -> String {
    let mut out = String::from(CATALOG_HEADER);
    out.push('\n');
    for r in recipes {
        let n = &r.nutrients;
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            r.id,
            r.name,
            r.instructions,
            n.calories,
            n.fat_g,
            n.saturated_fat_g,
            n.cholesterol_mg,
            n.sodium_mg,
            n.carbohydrate_g,
            n.fiber_g,
            n.sugar_g,
            n.protein_g
        );
    }
    out
}

/// Write recipes as a catalog CSV under `dir`
pub fn write_catalog(dir: &Path, recipes: &[Recipe]) -> PathBuf {
    let path = dir.join("catalog.csv");
    fs::write(&path, catalog_csv(recipes)).unwrap();
    path
}

/// In-memory catalog of [`diabetes_recipes`]
pub fn diabetes_catalog() -> RecipeCatalog {
    RecipeCatalog::from_recipes(diabetes_recipes()).unwrap()
}
