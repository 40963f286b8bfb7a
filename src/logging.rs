// ABOUTME: Logging configuration and tracing subscriber setup for the diet planner
// ABOUTME: Reads level and format from the environment and writes structured logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs always go to stderr. Stdout is reserved for the meal plan so that
//! `diet-planner recommend --format json | jq` keeps working with logging on.

use crate::config::Environment;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt as std_fmt;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shipping
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to [`LogFormat::Compact`]
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

/// Crates whose level `level` and `--verbose` control
const PLANNER_TARGETS: [&str; 2] = ["diet_planner", "diet_planner_intelligence"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level for the planner crates when `RUST_LOG` is unset
    pub level: String,
    /// Raw `RUST_LOG` directives, taking precedence over `level`
    pub rust_log: Option<String>,
    /// Force the planner crates to `debug` on top of `RUST_LOG`
    pub verbose: bool,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            rust_log: None,
            verbose: false,
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::DIET_PLANNER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = Environment::from_env();

        Self {
            level: defaults.level,
            rust_log: env::var("RUST_LOG").ok().filter(|value| !value.trim().is_empty()),
            verbose: false,
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: defaults.service_name,
            service_version: defaults.service_version,
            environment,
        }
    }

    /// Raise the planner crates to `debug`, used by `--verbose`
    ///
    /// Applies on top of `RUST_LOG` as well as the default level.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".into();
        self.verbose = true;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let filter = self.rust_log.as_deref().map_or_else(
            || {
                let crates: Vec<String> = PLANNER_TARGETS
                    .iter()
                    .map(|target| format!("{target}={}", self.level))
                    .collect();
                EnvFilter::new(format!("warn,{}", crates.join(",")))
            },
            EnvFilter::new,
        );

        let filter = if self.verbose {
            PLANNER_TARGETS.iter().fold(filter, |filter, target| {
                filter.add_directive(parse_directive(&format!("{target}=debug"), Level::DEBUG))
            })
        } else {
            filter
        };

        // Keep HTTP client internals quiet even when RUST_LOG is broad
        ["hyper=warn", "hyper_util=warn", "reqwest=warn", "rustls=warn"]
            .into_iter()
            .fold(filter, |filter, directive| {
                filter.add_directive(parse_directive(directive, Level::WARN))
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
        };
        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = %self.format,
            "Diet planner starting up"
        );
    }
}

fn parse_directive(directive: &str, fallback: Level) -> Directive {
    directive.parse().unwrap_or_else(|_| fallback.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
    }

    #[test]
    fn test_verbose_raises_level() {
        let config = LoggingConfig::default().verbose();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(
            config.env_filter().max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_rust_log_takes_precedence_over_level() {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            rust_log: Some("error".to_owned()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.env_filter().max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_verbose_applies_on_top_of_rust_log() {
        let config = LoggingConfig {
            rust_log: Some("error".to_owned()),
            ..LoggingConfig::default()
        }
        .verbose();
        assert_eq!(
            config.env_filter().max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
