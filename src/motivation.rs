// ABOUTME: Motivational message provider with remote generation and static fallback
// ABOUTME: Reports which path produced the text so callers and tests can tell them apart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Motivation Provider
//!
//! Asks the configured [`LlmProvider`] for one motivational line, bounded by a
//! timeout. Any remote problem (missing credential, transport or HTTP error,
//! malformed or empty reply, timeout) is recovered locally by picking a random
//! message from the condition's fallback set. The outcome records which path
//! ran and why.
//!
//! Only a broken fallback table is surfaced as an error; it cannot be hidden
//! behind the remote failure handling.

use crate::config::{MotivationConfig, PlannerConfig};
use crate::errors::{AppError, AppResult};
use crate::llm::{motivation_prompt, ChatRequest, GroqProvider, LlmProvider};
use diet_planner_core::models::HealthCondition;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

/// Why the fallback set was used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// No credential configured, no request was made
    MissingCredential,
    /// Remote generation disabled by the caller
    Disabled,
    /// The request did not finish within the timeout
    Timeout,
    /// The request failed (transport, HTTP status, or malformed reply)
    RequestFailed(String),
    /// The reply contained no text
    EmptyResponse,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => f.write_str("no API credential configured"),
            Self::Disabled => f.write_str("remote generation disabled"),
            Self::Timeout => f.write_str("request timed out"),
            Self::RequestFailed(detail) => write!(f, "request failed: {detail}"),
            Self::EmptyResponse => f.write_str("empty response"),
        }
    }
}

/// Which path produced a motivational message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum MotivationSource {
    /// Text generated by the remote provider
    Generated {
        /// Provider identifier
        provider: String,
    },
    /// Text picked from the fallback set
    Fallback {
        /// Why the remote path was not used
        reason: FallbackReason,
    },
}

/// A motivational message and its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Motivation {
    /// Message text, never empty
    pub text: String,
    /// How the text was obtained
    #[serde(flatten)]
    pub source: MotivationSource,
}

impl Motivation {
    /// Whether the text came from the remote provider
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self.source, MotivationSource::Generated { .. })
    }

    /// Fallback reason, if the fallback path ran
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<&FallbackReason> {
        match &self.source {
            MotivationSource::Fallback { reason } => Some(reason),
            MotivationSource::Generated { .. } => None,
        }
    }
}

/// Produces motivational messages for health conditions
///
/// Cheap to clone; clones share the provider and configuration.
#[derive(Clone)]
pub struct MotivationProvider {
    llm: Option<Arc<dyn LlmProvider>>,
    config: Arc<MotivationConfig>,
    disabled: bool,
}

impl fmt::Debug for MotivationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotivationProvider")
            .field("llm", &self.llm.as_ref().map(|llm| llm.name()))
            .field("timeout", &self.config.timeout)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl MotivationProvider {
    /// Create a provider; `None` means every call uses the fallback set
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error if the configuration is invalid
    pub fn new(llm: Option<Arc<dyn LlmProvider>>, config: MotivationConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            llm,
            config: Arc::new(config),
            disabled: false,
        })
    }

    /// Turn off remote generation; every call uses the fallback set
    #[must_use]
    pub fn disable_remote(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Create a provider that never makes remote calls
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error if the configuration is invalid
    pub fn offline(config: MotivationConfig) -> AppResult<Self> {
        Self::new(None, config)
    }

    /// Build from runtime configuration, using Groq when a credential is set
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be built
    pub fn from_planner_config(config: &PlannerConfig) -> AppResult<Self> {
        let llm: Option<Arc<dyn LlmProvider>> = if config.llm.api_key.is_some() {
            Some(Arc::new(GroqProvider::from_config(
                &config.llm,
                config.motivation_timeout,
            )?))
        } else {
            info!("No Groq credential configured, using fallback motivation messages");
            None
        };
        Self::new(llm, MotivationConfig::from_planner_config(config))
    }

    /// Whether a remote provider is configured
    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.llm.is_some() && !self.disabled
    }

    /// Produce a motivational message for a condition
    ///
    /// Remote failures never surface; they select the fallback path.
    ///
    /// # Errors
    ///
    /// Returns an internal error only if the condition's fallback set is empty
    #[instrument(skip(self), fields(remote = self.has_remote()))]
    pub async fn motivate(&self, condition: HealthCondition) -> AppResult<Motivation> {
        if self.disabled {
            return self.fallback(condition, FallbackReason::Disabled);
        }
        let Some(llm) = &self.llm else {
            return self.fallback(condition, FallbackReason::MissingCredential);
        };

        let request = ChatRequest::user(motivation_prompt(condition))
            .with_max_tokens(self.config.max_tokens);

        match timeout(self.config.timeout, llm.complete(&request)).await {
            Ok(Ok(response)) => {
                let text = response.content.trim();
                if text.is_empty() {
                    warn!(provider = llm.name(), "Motivation reply was empty");
                    return self.fallback(condition, FallbackReason::EmptyResponse);
                }
                debug!(provider = llm.name(), model = %response.model, "Generated motivation");
                Ok(Motivation {
                    text: text.to_owned(),
                    source: MotivationSource::Generated {
                        provider: llm.name().to_owned(),
                    },
                })
            }
            Ok(Err(err)) => {
                warn!(provider = llm.name(), error = %err, "Motivation request failed");
                self.fallback(condition, FallbackReason::RequestFailed(err.to_string()))
            }
            Err(_) => {
                warn!(
                    provider = llm.name(),
                    timeout_ms = self.config.timeout.as_millis(),
                    "Motivation request timed out"
                );
                self.fallback(condition, FallbackReason::Timeout)
            }
        }
    }

    /// Pick a random message from the condition's fallback set
    ///
    /// # Errors
    ///
    /// Returns an internal error if the set is empty
    pub fn fallback(
        &self,
        condition: HealthCondition,
        reason: FallbackReason,
    ) -> AppResult<Motivation> {
        let text = self
            .config
            .sets
            .for_condition(condition)
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| {
                AppError::internal(format!("No fallback motivation messages for {condition}"))
            })?;
        debug!(%condition, %reason, "Using fallback motivation");
        Ok(Motivation {
            text: text.clone(),
            source: MotivationSource::Fallback { reason },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_provider_uses_fallback_set() {
        let provider = MotivationProvider::offline(MotivationConfig::default()).unwrap();
        assert!(!provider.has_remote());

        for condition in HealthCondition::ALL {
            let motivation = provider.motivate(condition).await.unwrap();
            let set = MotivationConfig::default().sets;
            assert!(set.for_condition(condition).contains(&motivation.text));
            assert_eq!(
                motivation.fallback_reason(),
                Some(&FallbackReason::MissingCredential)
            );
        }
    }

    #[tokio::test]
    async fn test_disabled_provider_reports_disabled() {
        let provider = MotivationProvider::offline(MotivationConfig::default())
            .unwrap()
            .disable_remote();
        let motivation = provider.motivate(HealthCondition::Fitness).await.unwrap();
        assert_eq!(motivation.fallback_reason(), Some(&FallbackReason::Disabled));
        assert!(!motivation.is_generated());
    }

    #[test]
    fn test_motivation_serializes_source() {
        let motivation = Motivation {
            text: "Champions eat smart.".to_owned(),
            source: MotivationSource::Fallback {
                reason: FallbackReason::Timeout,
            },
        };
        let json = serde_json::to_value(&motivation).unwrap();
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["reason"]["kind"], "timeout");
        assert_eq!(json["text"], "Champions eat smart.");
    }
}
