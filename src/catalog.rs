// ABOUTME: Immutable recipe catalog loaded once from the cleaned recipe CSV
// ABOUTME: Validates every nutrient at load and shares the rows read-only via Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog
//!
//! The catalog is read from a CSV with at least `Name`, `RecipeInstructions`
//! and the nine nutrient columns. An optional `RecipeId` column supplies
//! identifiers; without it, the zero-based row position is used. When the
//! column exists every row must fill it. Extra columns are ignored.
//!
//! Any violation (missing column, unparsable number, negative or non-finite
//! nutrient, blank or duplicate identifier, empty table) fails the whole load
//! with a diagnostic naming the line and column.

use crate::errors::{AppError, AppResult};
use csv::{ErrorKind as CsvErrorKind, ReaderBuilder, StringRecord, Trim};
use diet_planner_core::models::{NutrientProfile, Recipe, RecipeId};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// One row of the cleaned recipe table
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CatalogRow {
    #[serde(default)]
    recipe_id: Option<u64>,
    name: String,
    recipe_instructions: String,
    calories: f64,
    fat_content: f64,
    saturated_fat_content: f64,
    cholesterol_content: f64,
    sodium_content: f64,
    carbohydrate_content: f64,
    fiber_content: f64,
    sugar_content: f64,
    protein_content: f64,
}

impl CatalogRow {
    fn into_recipe(self, position: usize) -> Recipe {
        let id = self.recipe_id.unwrap_or(position as u64);
        let nutrients = NutrientProfile {
            calories: self.calories,
            fat_g: self.fat_content,
            saturated_fat_g: self.saturated_fat_content,
            cholesterol_mg: self.cholesterol_content,
            sodium_mg: self.sodium_content,
            carbohydrate_g: self.carbohydrate_content,
            fiber_g: self.fiber_content,
            sugar_g: self.sugar_content,
            protein_g: self.protein_content,
        };
        Recipe::new(RecipeId(id), self.name, nutrients, self.recipe_instructions)
    }
}

/// Optional identifier column
const ID_COLUMN: &str = "RecipeId";

/// Line number in the source file of a zero-based data row (header is line 1)
const fn source_line(position: usize) -> usize {
    position + 2
}

/// Read-only recipe table shared by every recommendation
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Arc<[Recipe]>,
}

impl RecipeCatalog {
    /// Load and validate the catalog at `path`
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the file does not exist, `STORAGE_ERROR`
    /// if it cannot be opened, and `INVALID_FORMAT` for any malformed row
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Recipe catalog '{}'", path.display())).with_source(e)
            } else {
                AppError::storage(format!(
                    "Failed to open recipe catalog '{}': {e}",
                    path.display()
                ))
                .with_source(e)
            }
        })?;

        let catalog = Self::from_reader(file).map_err(|e| AppError {
            message: format!("{}: {}", path.display(), e.message),
            ..e
        })?;
        info!(recipes = catalog.len(), "Loaded recipe catalog");
        Ok(catalog)
    }

    /// Parse and validate a catalog from any CSV source
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` for missing columns, unparsable values,
    /// invalid nutrients, duplicate identifiers, or an empty table
    pub fn from_reader<R: io::Read>(reader: R) -> AppResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|e| {
                AppError::invalid_format(format!("Unreadable catalog header: {e}")).with_source(e)
            })?
            .clone();

        let has_id_column = headers.iter().any(|header| header == ID_COLUMN);

        let mut recipes = Vec::new();
        for (position, row) in reader.deserialize::<CatalogRow>().enumerate() {
            let row = row.map_err(|e| {
                AppError::invalid_format(format!(
                    "line {}: {}",
                    source_line(position),
                    describe_csv_error(&e, &headers)
                ))
                .with_source(e)
            })?;
            if has_id_column && row.recipe_id.is_none() {
                return Err(AppError::invalid_format(format!(
                    "line {}: column {ID_COLUMN} is blank",
                    source_line(position)
                )));
            }
            recipes.push(row.into_recipe(position));
        }

        Self::from_recipes(recipes)
    }

    /// Build a catalog from already-constructed recipes
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` if the list is empty, a nutrient is negative
    /// or not finite, or two recipes share an identifier
    pub fn from_recipes(recipes: Vec<Recipe>) -> AppResult<Self> {
        if recipes.is_empty() {
            return Err(AppError::invalid_format("Recipe catalog contains no recipes"));
        }

        let mut seen = HashSet::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if let Some((nutrient, value)) = recipe.nutrients.first_invalid() {
                return Err(AppError::invalid_format(format!(
                    "line {}: column {} has invalid value {value} for recipe '{}'",
                    source_line(position),
                    nutrient.column_name(),
                    recipe.name
                )));
            }
            if !seen.insert(recipe.id) {
                return Err(AppError::invalid_format(format!(
                    "line {}: duplicate RecipeId {}",
                    source_line(position),
                    recipe.id
                )));
            }
        }

        Ok(Self {
            recipes: recipes.into(),
        })
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Shared handle to the rows, for use across threads
    #[must_use]
    pub fn shared(&self) -> Arc<[Recipe]> {
        Arc::clone(&self.recipes)
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Always false for a loaded catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by identifier
    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}

fn describe_csv_error(error: &csv::Error, headers: &StringRecord) -> String {
    match error.kind() {
        CsvErrorKind::Deserialize { err, .. } => err
            .field()
            .and_then(|field| headers.get(field as usize))
            .map_or_else(
                || err.kind().to_string(),
                |column| format!("column {column}: {}", err.kind()),
            ),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    const HEADER: &str = "Name,RecipeInstructions,Calories,FatContent,SaturatedFatContent,CholesterolContent,SodiumContent,CarbohydrateContent,FiberContent,SugarContent,ProteinContent";

    #[test]
    fn test_row_position_used_when_id_missing() {
        let csv = format!(
            "{HEADER}\nOats,Boil.,300,5,1,0,100,50,8,10,12\nSalad,Toss.,150,7,1,0,200,10,4,5,3\n"
        );
        let catalog = RecipeCatalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.recipes()[1].id, RecipeId(1));
        assert_eq!(catalog.get(RecipeId(0)).unwrap().name, "Oats");
        assert!((catalog.recipes()[0].nutrients.protein_g - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_nutrient_names_line_and_column() {
        let csv = format!("{HEADER}\nOats,Boil.,300,5,1,0,100,50,8,10,12\nBad,Mix.,150,7,1,0,-2,10,4,5,3\n");
        let err = RecipeCatalog::from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.contains("line 3"));
        assert!(err.message.contains("SodiumContent"));
    }

    #[test]
    fn test_unparsable_value_names_column() {
        let csv = format!("{HEADER}\nOats,Boil.,lots,5,1,0,100,50,8,10,12\n");
        let err = RecipeCatalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.message.contains("line 2"));
        assert!(err.message.contains("column Calories"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let csv = "RecipeId,Name,RecipeInstructions,Calories,FatContent,SaturatedFatContent,CholesterolContent,SodiumContent,CarbohydrateContent,FiberContent,SugarContent,ProteinContent\n7,A,x,1,1,1,1,1,1,1,1,1\n7,B,y,1,1,1,1,1,1,1,1,1\n";
        let err = RecipeCatalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.message.contains("duplicate RecipeId 7"));
    }

    #[test]
    fn test_blank_id_rejected_when_column_present() {
        let csv = "RecipeId,Name,RecipeInstructions,Calories,FatContent,SaturatedFatContent,CholesterolContent,SodiumContent,CarbohydrateContent,FiberContent,SugarContent,ProteinContent\n1,A,x,1,1,1,1,1,1,1,1,1\n,B,y,1,1,1,1,1,1,1,1,1\n";
        let err = RecipeCatalog::from_reader(csv.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.contains("line 3: column RecipeId is blank"));
        assert!(!err.message.contains("duplicate"));
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = RecipeCatalog::from_reader(format!("{HEADER}\n").as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
