// ABOUTME: Validation errors for recommendation configuration tables
// ABOUTME: Converts into the shared AppError as a CONFIG_INVALID failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_planner_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value must be finite and strictly positive
    #[error("{0} must be a finite positive number")]
    NotPositive(&'static str),

    /// Numeric value must be finite and not negative
    #[error("{0} must be a finite non-negative number")]
    Negative(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::config_invalid(err.to_string()).with_source(err)
    }
}

/// Reject NaN, infinities and values `<= 0`
pub(crate) fn ensure_positive(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(field))
    }
}

/// Reject NaN, infinities and values `< 0`
pub(crate) fn ensure_non_negative(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diet_planner_core::errors::ErrorCode;

    #[test]
    fn test_validators_reject_non_finite_values() {
        assert!(ensure_positive(0.8, "lose goal factor").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "lose goal factor"),
            Err(ConfigError::NotPositive("lose goal factor"))
        ));
        assert!(ensure_positive(f64::NAN, "epsilon").is_err());
        assert!(ensure_non_negative(0.0, "fat ceiling").is_ok());
        assert!(matches!(
            ensure_non_negative(f64::INFINITY, "fat ceiling"),
            Err(ConfigError::Negative("fat ceiling"))
        ));
    }

    #[test]
    fn test_converts_to_config_invalid() {
        let err = AppError::from(ConfigError::Negative("sugar ceiling"));
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert_eq!(err.message, "sugar ceiling must be a finite non-negative number");
    }
}
