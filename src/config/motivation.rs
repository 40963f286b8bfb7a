// ABOUTME: Motivation provider settings and per-condition fallback message sets
// ABOUTME: Fallback sets are fixed tables injected into the provider and validated non-empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::PlannerConfig;
use crate::constants::motivation;
use crate::errors::{AppError, AppResult};
use diet_planner_core::models::HealthCondition;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fallback messages for each health condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationSets {
    /// Diabetes messages
    pub diabetes: Vec<String>,
    /// Blood pressure messages
    pub bp: Vec<String>,
    /// Heart disease messages
    pub heart: Vec<String>,
    /// Obesity messages
    pub obesity: Vec<String>,
    /// Fitness messages
    pub fitness: Vec<String>,
}

impl MotivationSets {
    /// Messages for a condition
    #[must_use]
    pub fn for_condition(&self, condition: HealthCondition) -> &[String] {
        match condition {
            HealthCondition::Diabetes => &self.diabetes,
            HealthCondition::Bp => &self.bp,
            HealthCondition::Heart => &self.heart,
            HealthCondition::Obesity => &self.obesity,
            HealthCondition::Fitness => &self.fitness,
        }
    }

    /// Ensure every condition has at least one non-blank message
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error naming the first condition without messages
    pub fn validate(&self) -> AppResult<()> {
        for condition in HealthCondition::ALL {
            let set = self.for_condition(condition);
            if set.is_empty() || set.iter().any(|message| message.trim().is_empty()) {
                return Err(AppError::config_invalid(format!(
                    "Motivation set for {condition} must contain only non-empty messages and at least one"
                )));
            }
        }
        Ok(())
    }
}

fn messages(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

impl Default for MotivationSets {
    fn default() -> Self {
        Self {
            diabetes: messages(&[
                "Low sugar eating is self-care.",
                "Every meal heals your body.",
            ]),
            bp: messages(&[
                "Low salt = strong heart.",
                "Choose food that calms your heart.",
            ]),
            heart: messages(&[
                "Food is your daily medicine.",
                "Your heart loves your choices.",
            ]),
            obesity: messages(&[
                "You are redesigning your life.",
                "Small steps make big change.",
            ]),
            fitness: messages(&[
                "Strong body starts with smart food.",
                "Champions eat smart.",
            ]),
        }
    }
}

/// Motivation provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotivationConfig {
    /// Fallback tables
    pub sets: MotivationSets,
    /// Bound on the remote request, timeouts fall back
    pub timeout: Duration,
    /// Maximum tokens requested from the model
    pub max_tokens: u32,
}

impl Default for MotivationConfig {
    fn default() -> Self {
        Self {
            sets: MotivationSets::default(),
            timeout: Duration::from_secs(motivation::DEFAULT_TIMEOUT_SECS),
            max_tokens: motivation::MAX_TOKENS,
        }
    }
}

impl MotivationConfig {
    /// Default tables with the timeout taken from runtime configuration
    #[must_use]
    pub fn from_planner_config(config: &PlannerConfig) -> Self {
        Self {
            timeout: config.motivation_timeout,
            ..Self::default()
        }
    }

    /// Validate the tables and limits
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error for empty sets, a zero timeout, or zero tokens
    pub fn validate(&self) -> AppResult<()> {
        self.sets.validate()?;
        if self.timeout.is_zero() {
            return Err(AppError::config_invalid(
                "Motivation timeout must be greater than zero",
            ));
        }
        if self.max_tokens == 0 {
            return Err(AppError::config_invalid(
                "Motivation max_tokens must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_default_sets_cover_every_condition() {
        let sets = MotivationSets::default();
        assert!(sets.validate().is_ok());
        for condition in HealthCondition::ALL {
            assert_eq!(sets.for_condition(condition).len(), 2);
        }
        assert_eq!(sets.for_condition(HealthCondition::Bp)[0], "Low salt = strong heart.");
    }

    #[test]
    fn test_empty_set_rejected() {
        let mut config = MotivationConfig::default();
        config.sets.heart.clear();
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains("Heart"));
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut sets = MotivationSets::default();
        sets.fitness.push("   ".to_owned());
        assert!(sets.validate().is_err());
    }

    #[test]
    fn test_timeout_follows_planner_config() {
        let planner = PlannerConfig {
            motivation_timeout: Duration::from_secs(4),
            ..PlannerConfig::default()
        };
        assert_eq!(
            MotivationConfig::from_planner_config(&planner).timeout,
            Duration::from_secs(4)
        );
    }
}
