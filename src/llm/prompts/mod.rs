// ABOUTME: Prompt templates for text-generation requests
// ABOUTME: Builds the one-line motivational message prompt for a health condition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_planner_core::models::HealthCondition;

/// Prompt asking for a single motivational line for a condition
#[must_use]
pub fn motivation_prompt(condition: HealthCondition) -> String {
    format!("Give one motivational health message for a {condition} patient.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_condition_label() {
        assert_eq!(
            motivation_prompt(HealthCondition::Bp),
            "Give one motivational health message for a BP patient."
        );
    }
}
