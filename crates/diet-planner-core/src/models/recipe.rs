// ABOUTME: Recipe catalog models with the nine-field nutrient profile
// ABOUTME: Defines Nutrient, NutrientProfile, RecipeId, and Recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::columns;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine nutrient columns of the recipe table
///
/// The declaration order is the canonical feature order used for every
/// nutrient vector in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Total fat (g)
    Fat,
    /// Saturated fat (g)
    SaturatedFat,
    /// Cholesterol (mg)
    Cholesterol,
    /// Sodium (mg)
    Sodium,
    /// Carbohydrate (g)
    Carbohydrate,
    /// Fiber (g)
    Fiber,
    /// Sugar (g)
    Sugar,
    /// Protein (g)
    Protein,
}

impl Nutrient {
    /// Number of nutrient features
    pub const COUNT: usize = 9;

    /// All nutrients in canonical feature order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Calories,
        Self::Fat,
        Self::SaturatedFat,
        Self::Cholesterol,
        Self::Sodium,
        Self::Carbohydrate,
        Self::Fiber,
        Self::Sugar,
        Self::Protein,
    ];

    /// Column name in the recipe table
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Calories => columns::CALORIES,
            Self::Fat => columns::FAT,
            Self::SaturatedFat => columns::SATURATED_FAT,
            Self::Cholesterol => columns::CHOLESTEROL,
            Self::Sodium => columns::SODIUM,
            Self::Carbohydrate => columns::CARBOHYDRATE,
            Self::Fiber => columns::FIBER,
            Self::Sugar => columns::SUGAR,
            Self::Protein => columns::PROTEIN,
        }
    }

    /// Measurement unit abbreviation for display
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Cholesterol | Self::Sodium => "mg",
            Self::Fat
            | Self::SaturatedFat
            | Self::Carbohydrate
            | Self::Fiber
            | Self::Sugar
            | Self::Protein => "g",
        }
    }

    /// Position of this nutrient in a [`NutrientVector`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Dense nutrient vector in canonical [`Nutrient::ALL`] order
pub type NutrientVector = [f64; Nutrient::COUNT];

/// Nutritional content of a single recipe
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy (kcal)
    pub calories: f64,
    /// Total fat (g)
    pub fat_g: f64,
    /// Saturated fat (g)
    pub saturated_fat_g: f64,
    /// Cholesterol (mg)
    pub cholesterol_mg: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Carbohydrate (g)
    pub carbohydrate_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
    /// Sugar (g)
    pub sugar_g: f64,
    /// Protein (g)
    pub protein_g: f64,
}

impl NutrientProfile {
    /// Value of a single nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Fat => self.fat_g,
            Nutrient::SaturatedFat => self.saturated_fat_g,
            Nutrient::Cholesterol => self.cholesterol_mg,
            Nutrient::Sodium => self.sodium_mg,
            Nutrient::Carbohydrate => self.carbohydrate_g,
            Nutrient::Fiber => self.fiber_g,
            Nutrient::Sugar => self.sugar_g,
            Nutrient::Protein => self.protein_g,
        }
    }

    /// Convert to a feature vector in canonical order
    #[must_use]
    pub const fn to_vector(&self) -> NutrientVector {
        [
            self.calories,
            self.fat_g,
            self.saturated_fat_g,
            self.cholesterol_mg,
            self.sodium_mg,
            self.carbohydrate_g,
            self.fiber_g,
            self.sugar_g,
            self.protein_g,
        ]
    }

    /// Build a profile from a feature vector in canonical order
    #[must_use]
    pub const fn from_vector(values: NutrientVector) -> Self {
        Self {
            calories: values[0],
            fat_g: values[1],
            saturated_fat_g: values[2],
            cholesterol_mg: values[3],
            sodium_mg: values[4],
            carbohydrate_g: values[5],
            fiber_g: values[6],
            sugar_g: values[7],
            protein_g: values[8],
        }
    }

    /// First nutrient that is negative or not a finite number, if any
    #[must_use]
    pub fn first_invalid(&self) -> Option<(Nutrient, f64)> {
        Nutrient::ALL
            .into_iter()
            .map(|nutrient| (nutrient, self.get(nutrient)))
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
    }
}

/// Stable identifier of a recipe within the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recipe from the catalog
///
/// Recipes are created once when the catalog is loaded and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Nutritional content per serving
    pub nutrients: NutrientProfile,
    /// Free-text cooking instructions
    pub instructions: String,
}

impl Recipe {
    /// Create a new recipe
    #[must_use]
    pub fn new(
        id: RecipeId,
        name: impl Into<String>,
        nutrients: NutrientProfile,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            nutrients,
            instructions: instructions.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_order_matches_nutrient_index() {
        let profile = NutrientProfile::from_vector([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let vector = profile.to_vector();
        for nutrient in Nutrient::ALL {
            assert!((vector[nutrient.index()] - profile.get(nutrient)).abs() < f64::EPSILON);
        }
        assert!((profile.sodium_mg - 5.0).abs() < f64::EPSILON);
        assert!((profile.protein_g - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_invalid_detects_negative_and_nan() {
        let mut profile = NutrientProfile::default();
        assert!(profile.first_invalid().is_none());

        profile.sugar_g = -1.0;
        assert_eq!(profile.first_invalid().map(|(n, _)| n), Some(Nutrient::Sugar));

        profile.sugar_g = 0.0;
        profile.fat_g = f64::NAN;
        assert_eq!(profile.first_invalid().map(|(n, _)| n), Some(Nutrient::Fat));
    }

    #[test]
    fn test_column_names() {
        assert_eq!(Nutrient::SaturatedFat.column_name(), "SaturatedFatContent");
        assert_eq!(Nutrient::Calories.to_string(), "Calories");
        assert_eq!(Nutrient::Sodium.unit(), "mg");
    }
}
