// ABOUTME: Daily calorie target from biometrics using gender-specific linear BMR formulas
// ABOUTME: Scales the base rate by weight goal and truncates to whole kilocalories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Estimator
//!
//! `base = intercept + w*weight_kg + h*height_cm - a*age`, with coefficients
//! picked by gender, then multiplied by the goal factor and truncated toward
//! zero. Terms are evaluated left to right so results match the reference
//! figures bit for bit (a fused multiply-add would shift some `.999` cases).
//!
//! Inputs are taken as given. Range checks belong to the caller, see
//! [`UserProfile::validate_ranges`].

use crate::config::CalorieConfig;
use diet_planner_core::models::UserProfile;

/// Base metabolic rate in kcal/day before goal scaling
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn base_metabolic_rate(profile: &UserProfile, config: &CalorieConfig) -> f64 {
    let formula = config.formula(profile.gender);
    formula.intercept + formula.weight_coefficient * profile.weight_kg
        + formula.height_coefficient * profile.height_cm
        - formula.age_coefficient * f64::from(profile.age)
}

/// Estimate the daily calorie target in whole kilocalories
///
/// # Examples
///
/// ```
/// use diet_planner_core::models::{Gender, UserProfile, WeightGoal};
/// use diet_planner_intelligence::config::CalorieConfig;
/// use diet_planner_intelligence::estimate_daily_calories;
///
/// let profile = UserProfile::new(25, Gender::Male, 170.0, 70.0, WeightGoal::Lose);
/// assert_eq!(estimate_daily_calories(&profile, &CalorieConfig::default()), 1359);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // truncation is the contract; negatives saturate to 0
pub fn estimate_daily_calories(profile: &UserProfile, config: &CalorieConfig) -> u32 {
    let scaled = base_metabolic_rate(profile, config) * config.goal_factors.factor(profile.goal);
    scaled.trunc() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use diet_planner_core::models::{Gender, WeightGoal};

    #[test]
    fn test_male_base_rate() {
        let profile = UserProfile::new(25, Gender::Male, 170.0, 70.0, WeightGoal::Maintain);
        let bmr = base_metabolic_rate(&profile, &CalorieConfig::default());
        assert!((bmr - 1699.86).abs() < 1e-9);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 1699.86 * 0.8 = 1359.888
        let profile = UserProfile::new(25, Gender::Male, 170.0, 70.0, WeightGoal::Lose);
        assert_eq!(
            estimate_daily_calories(&profile, &CalorieConfig::default()),
            1359
        );
    }

    #[test]
    fn test_female_formula_selected() {
        // 447.6 + 552 + 496 - 129 = 1366.6
        let profile = UserProfile::new(30, Gender::Female, 160.0, 60.0, WeightGoal::Maintain);
        assert_eq!(
            estimate_daily_calories(&profile, &CalorieConfig::default()),
            1366
        );
    }

    #[test]
    fn test_gain_goal_scales_up() {
        // (88.36 + 1072 + 864 - 228) * 1.2 = 2155.632
        let profile = UserProfile::new(40, Gender::Male, 180.0, 80.0, WeightGoal::Gain);
        assert_eq!(
            estimate_daily_calories(&profile, &CalorieConfig::default()),
            2155
        );
    }

    #[test]
    fn test_goal_ordering_for_same_biometrics() {
        let config = CalorieConfig::default();
        let calories = |goal| {
            estimate_daily_calories(
                &UserProfile::new(50, Gender::Female, 165.0, 72.0, goal),
                &config,
            )
        };
        assert!(calories(WeightGoal::Lose) < calories(WeightGoal::Maintain));
        assert!(calories(WeightGoal::Maintain) < calories(WeightGoal::Gain));
    }
}
