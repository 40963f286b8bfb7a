// ABOUTME: Environment configuration for catalog location, LLM credentials, and timeouts
// ABOUTME: Parses and validates DIET_PLANNER_* and GROQ_* variables into PlannerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{dataset, env_keys, motivation};
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Read `ENVIRONMENT`, defaulting to development when unset
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read `ENVIRONMENT` through a key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(env_keys::ENVIRONMENT)
            .map_or_else(Self::default, |value| Self::from_str_or_default(&value))
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Text-generation endpoint settings
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Bearer credential, `None` when unset or blank
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Chat completions base URL without trailing slash
    pub base_url: String,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: motivation::DEFAULT_GROQ_MODEL.to_owned(),
            base_url: motivation::DEFAULT_GROQ_BASE_URL.to_owned(),
        }
    }
}

/// Runtime configuration of the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Cleaned recipe catalog to load at startup
    pub catalog_path: PathBuf,
    /// Deployment environment
    pub environment: Environment,
    /// Text-generation settings for the motivation provider
    pub llm: LlmConfig,
    /// Upper bound on the motivation request
    pub motivation_timeout: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(dataset::DEFAULT_CATALOG_FILE),
            environment: Environment::default(),
            llm: LlmConfig::default(),
            motivation_timeout: Duration::from_secs(motivation::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is present but invalid
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a value is present but invalid
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let timeout_raw = value_or(
            env_keys::MOTIVATION_TIMEOUT_SECS,
            &motivation::DEFAULT_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs: u64 = timeout_raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!(
                "{} must be a whole number of seconds, got '{timeout_raw}'",
                env_keys::MOTIVATION_TIMEOUT_SECS
            ))
            .with_source(e)
        })?;

        let config = Self {
            catalog_path: PathBuf::from(value_or(
                env_keys::CATALOG_PATH,
                dataset::DEFAULT_CATALOG_FILE,
            )),
            environment: Environment::from_lookup(&lookup),
            llm: LlmConfig {
                api_key: lookup(env_keys::GROQ_API_KEY)
                    .map(|key| key.trim().to_owned())
                    .filter(|key| !key.is_empty()),
                model: value_or(env_keys::GROQ_MODEL, motivation::DEFAULT_GROQ_MODEL),
                base_url: value_or(env_keys::GROQ_API_BASE_URL, motivation::DEFAULT_GROQ_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
            },
            motivation_timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;

        debug!(
            catalog = %config.catalog_path.display(),
            environment = %config.environment,
            credential = config.llm.api_key.is_some(),
            "Loaded planner configuration"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is out of range or the base URL is not HTTP(S)
    pub fn validate(&self) -> AppResult<()> {
        let secs = self.motivation_timeout.as_secs();
        if !(motivation::MIN_TIMEOUT_SECS..=motivation::MAX_TIMEOUT_SECS).contains(&secs) {
            return Err(AppError::config_invalid(format!(
                "{} must be between {} and {} seconds, got {secs}",
                env_keys::MOTIVATION_TIMEOUT_SECS,
                motivation::MIN_TIMEOUT_SECS,
                motivation::MAX_TIMEOUT_SECS
            )));
        }
        if !(self.llm.base_url.starts_with("http://") || self.llm.base_url.starts_with("https://")) {
            return Err(AppError::config_invalid(format!(
                "{} must be an http(s) URL, got '{}'",
                env_keys::GROQ_API_BASE_URL,
                self.llm.base_url
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(AppError::config_missing(env_keys::GROQ_MODEL));
        }
        Ok(())
    }

    /// Human-readable configuration summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Diet Planner Configuration:\n\
             - Environment: {}\n\
             - Catalog: {}\n\
             - Motivation: {}\n\
             - Model: {}\n\
             - Endpoint: {}\n\
             - Timeout: {}s",
            self.environment,
            self.catalog_path.display(),
            if self.llm.api_key.is_some() {
                "Groq"
            } else {
                "Fallback messages only"
            },
            self.llm.model,
            self.llm.base_url,
            self.motivation_timeout.as_secs()
        )
    }
}
