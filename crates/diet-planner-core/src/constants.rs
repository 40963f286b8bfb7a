// ABOUTME: Application-wide constants for nutrient columns, profile limits, and meal plans
// ABOUTME: Shared by the catalog loader, the recommendation engine, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Column names of the cleaned recipe table
pub mod columns {
    /// Optional identifier column
    pub const RECIPE_ID: &str = "RecipeId";
    /// Recipe display name
    pub const NAME: &str = "Name";
    /// Free-text cooking instructions
    pub const RECIPE_INSTRUCTIONS: &str = "RecipeInstructions";
    /// Energy (kcal)
    pub const CALORIES: &str = "Calories";
    /// Total fat (g)
    pub const FAT: &str = "FatContent";
    /// Saturated fat (g)
    pub const SATURATED_FAT: &str = "SaturatedFatContent";
    /// Cholesterol (mg)
    pub const CHOLESTEROL: &str = "CholesterolContent";
    /// Sodium (mg)
    pub const SODIUM: &str = "SodiumContent";
    /// Carbohydrate (g)
    pub const CARBOHYDRATE: &str = "CarbohydrateContent";
    /// Fiber (g)
    pub const FIBER: &str = "FiberContent";
    /// Sugar (g)
    pub const SUGAR: &str = "SugarContent";
    /// Protein (g)
    pub const PROTEIN: &str = "ProteinContent";
}

/// Valid ranges for user-provided biometrics
pub mod profile_limits {
    /// Minimum age in years
    pub const MIN_AGE: u32 = 10;
    /// Maximum age in years
    pub const MAX_AGE: u32 = 100;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 120.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 220.0;
    /// Minimum weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 200.0;
}

/// Meal plan shape
pub mod meal_plan {
    /// Number of meals recommended per day (one per meal slot)
    pub const MEALS_PER_DAY: usize = 4;
}

/// Dataset preparation defaults
pub mod dataset {
    /// Default file name of the cleaned catalog
    pub const DEFAULT_CATALOG_FILE: &str = "clean_recipes_10k.csv";
    /// Number of rows kept by the cleaning step
    pub const DEFAULT_TARGET_ROWS: usize = 10_000;
    /// Rows read per chunk while cleaning
    pub const DEFAULT_CHUNK_SIZE: usize = 50_000;
}
