// ABOUTME: Health condition enumeration driving eligibility rules and motivation text
// ABOUTME: Closed set of Diabetes, BP, Heart, Obesity, and Fitness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared health condition of the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthCondition {
    /// Diabetes
    Diabetes,
    /// High blood pressure
    #[serde(rename = "BP")]
    Bp,
    /// Heart disease
    Heart,
    /// Obesity
    Obesity,
    /// General fitness
    Fitness,
}

impl HealthCondition {
    /// All conditions in presentation order
    pub const ALL: [Self; 5] = [
        Self::Diabetes,
        Self::Bp,
        Self::Heart,
        Self::Obesity,
        Self::Fitness,
    ];

    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Bp => "BP",
            Self::Heart => "Heart",
            Self::Obesity => "Obesity",
            Self::Fitness => "Fitness",
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthCondition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diabetes" => Ok(Self::Diabetes),
            "bp" | "blood pressure" | "blood-pressure" => Ok(Self::Bp),
            "heart" => Ok(Self::Heart),
            "obesity" => Ok(Self::Obesity),
            "fitness" => Ok(Self::Fitness),
            _ => Err(AppError::invalid_input(format!(
                "Unknown health condition '{s}', expected one of Diabetes, BP, Heart, Obesity, Fitness"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_labels_roundtrip_through_from_str() {
        for condition in HealthCondition::ALL {
            assert_eq!(condition.as_str().parse::<HealthCondition>().unwrap(), condition);
        }
    }

    #[test]
    fn test_condition_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&HealthCondition::Bp).unwrap(), "\"BP\"");
        let parsed: HealthCondition = serde_json::from_str("\"Heart\"").unwrap();
        assert_eq!(parsed, HealthCondition::Heart);
    }

    #[test]
    fn test_unknown_condition_rejected() {
        assert!("asthma".parse::<HealthCondition>().is_err());
    }
}
