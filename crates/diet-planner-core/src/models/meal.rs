// ABOUTME: Meal slot model for assigning ranked recipes to the day's meals
// ABOUTME: Breakfast, Lunch, Snack, Dinner in fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::meal_plan::MEALS_PER_DAY;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal of the day a recipe is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Snack between meals
    Snack,
    /// Dinner meal
    Dinner,
}

impl MealSlot {
    /// Slots in the order ranked recipes are assigned to them
    pub const ORDER: [Self; MEALS_PER_DAY] =
        [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
