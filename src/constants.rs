// ABOUTME: Application-wide constants for the diet planner
// ABOUTME: Service identity, environment variable names, and runtime defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use diet_planner_core::constants::{columns, dataset, meal_plan, profile_limits};

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const DIET_PLANNER: &str = "diet-planner";
}

/// Environment variable names
pub mod env_keys {
    /// Path of the cleaned recipe catalog
    pub const CATALOG_PATH: &str = "DIET_PLANNER_CATALOG";
    /// Groq API credential
    pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
    /// Groq model override
    pub const GROQ_MODEL: &str = "GROQ_MODEL";
    /// Groq API base URL override
    pub const GROQ_API_BASE_URL: &str = "GROQ_API_BASE_URL";
    /// Timeout for the motivation request in seconds
    pub const MOTIVATION_TIMEOUT_SECS: &str = "MOTIVATION_TIMEOUT_SECS";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Motivation provider defaults
pub mod motivation {
    /// Groq model used when `GROQ_MODEL` is unset
    pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";
    /// Groq chat completions endpoint
    pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
    /// Seconds to wait for generated text
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    /// Smallest accepted timeout
    pub const MIN_TIMEOUT_SECS: u64 = 1;
    /// Largest accepted timeout
    pub const MAX_TIMEOUT_SECS: u64 = 120;
    /// Upper bound on generated tokens for a one-line message
    pub const MAX_TOKENS: u32 = 80;
}
