// ABOUTME: Unified error type and error codes shared by every diet planner crate
// ABOUTME: Maps error categories to descriptions and process exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! This module provides the centralized error type for the diet planner.
//! It defines standard error codes, human-readable descriptions and the exit
//! code the command-line front end reports for each category.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Data could not be parsed in the expected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A value is outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// A file or record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// An external service returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// An external service could not be reached in time
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// Credentials were rejected by an external service
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// An external service rate limited the request
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,

    // Configuration (6000-6999)
    /// Required configuration is absent
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// File system read or write failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
}

impl ErrorCode {
    /// Process exit code reported by the CLI (sysexits conventions)
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            // EX_USAGE
            Self::InvalidInput | Self::ValueOutOfRange => 64,
            // EX_DATAERR
            Self::InvalidFormat => 65,
            // EX_NOINPUT
            Self::ResourceNotFound => 66,
            // EX_UNAVAILABLE
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ExternalAuthFailed
            | Self::ExternalRateLimited => 69,
            // EX_SOFTWARE
            Self::InternalError => 70,
            // EX_IOERR
            Self::StorageError => 74,
            // EX_CONFIG
            Self::ConfigMissing | Self::ConfigInvalid => 78,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    #[must_use]
    pub fn out_of_range(field: &str, min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}"),
        )
    }

    /// Malformed data
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Invalid configuration value
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Missing configuration value
    #[must_use]
    pub fn config_missing(key: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("{} is not set", key.into()),
        )
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service did not answer in time
    #[must_use]
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service rejected the credentials
    #[must_use]
    pub fn external_auth(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalAuthFailed,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service rate limited the request
    #[must_use]
    pub fn external_rate_limited(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalRateLimited,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_codes() {
        assert_eq!(ErrorCode::InvalidInput.exit_code(), 64);
        assert_eq!(ErrorCode::InvalidFormat.exit_code(), 65);
        assert_eq!(ErrorCode::ResourceNotFound.exit_code(), 66);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::ConfigMissing.exit_code(), 78);
        assert_eq!(ErrorCode::ExternalAuthFailed.exit_code(), 69);
        assert_eq!(ErrorCode::StorageError.exit_code(), 74);
    }

    #[test]
    fn test_config_missing_names_the_key() {
        let error = AppError::config_missing("GROQ_API_KEY");
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert_eq!(error.message, "GROQ_API_KEY is not set");
        assert_eq!(
            serde_json::to_value(error.code).unwrap(),
            serde_json::json!("CONFIG_MISSING")
        );
    }

    #[test]
    fn test_app_error_display_includes_description() {
        let error = AppError::not_found("Recipe catalog 'missing.csv'");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Recipe catalog 'missing.csv' not found"
        );
    }

    #[test]
    fn test_app_error_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = AppError::storage("Failed to open catalog").with_source(io);
        let source = StdError::source(&error).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("denied"));
    }

    #[test]
    fn test_out_of_range_message() {
        let error = AppError::out_of_range("age", 10, 100);
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.message, "age must be between 10 and 100");
    }
}
