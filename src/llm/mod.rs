// ABOUTME: Text generation provider abstraction used by the motivation provider
// ABOUTME: A single-prompt completion request, its reply, and the async provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Text Generation Providers
//!
//! A request carries one user prompt and an optional token cap; the reply is
//! the generated text and the model that produced it.
//!
//! ```rust,no_run
//! use diet_planner::config::PlannerConfig;
//! use diet_planner::errors::AppError;
//! use diet_planner::llm::{motivation_prompt, ChatRequest, GroqProvider, LlmProvider};
//! use diet_planner::models::HealthCondition;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = PlannerConfig::from_env()?;
//!     let provider = GroqProvider::from_config(&config.llm, config.motivation_timeout)?;
//!     let request = ChatRequest::user(motivation_prompt(HealthCondition::Heart));
//!     println!("{}", provider.complete(&request).await?.content);
//!     Ok(())
//! }
//! ```

mod groq;
pub mod prompts;

pub use groq::GroqProvider;
pub use prompts::motivation_prompt;

use crate::errors::AppResult;
use async_trait::async_trait;

/// One user prompt to complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// Text sent as the user message
    pub prompt: String,
    /// Maximum tokens to generate, provider default when `None`
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Request a completion of a user prompt
    #[must_use]
    pub fn user(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: None,
        }
    }

    /// Cap the reply length
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Generated reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    /// Generated text, possibly empty
    pub content: String,
    /// Model that produced the text
    pub model: String,
}

/// Remote text generation service
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider identifier recorded in generated motivations (e.g. "groq")
    fn name(&self) -> &'static str;

    /// Complete a single prompt
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse>;
}
