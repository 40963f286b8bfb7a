// ABOUTME: Groq text generation over its chat completions HTTP endpoint
// ABOUTME: Sends the prompt as one user message with a bearer token and a bounded client timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Groq Provider
//!
//! Built from [`LlmConfig`]: `GROQ_API_KEY` is required, `GROQ_MODEL` and
//! `GROQ_API_BASE_URL` override the model and endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{ChatRequest, ChatResponse, LlmProvider};
use crate::config::LlmConfig;
use crate::constants::env_keys;
use crate::errors::{AppError, AppResult};

/// Service label used in error messages
const SERVICE: &str = "Groq";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GroqRequest<'a> {
    model: &'a str,
    messages: [GroqMessage<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct GroqMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
}

#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqErrorResponse {
    error: GroqErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GroqErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Groq LLM provider
pub struct GroqProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqProvider {
    /// Create a provider with explicit settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn with_settings(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e)
        })?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    /// Create a provider from runtime configuration
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if no API key is configured
    pub fn from_config(config: &LlmConfig, timeout: Duration) -> AppResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::config_missing(env_keys::GROQ_API_KEY))?;
        Self::with_settings(api_key, &config.model, &config.base_url, timeout)
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let Ok(error_response) = serde_json::from_str::<GroqErrorResponse>(body) else {
            return AppError::external_service(
                SERVICE,
                format!(
                    "API error ({status}): {}",
                    body.chars().take(200).collect::<String>()
                ),
            );
        };
        let detail = error_response.error.message;

        match status.as_u16() {
            401 | 403 => AppError::external_auth(SERVICE, format!("Authentication failed: {detail}")),
            429 => AppError::external_rate_limited(SERVICE, format!("Rate limit exceeded: {detail}")),
            400 => AppError::invalid_input(format!("Groq API validation error: {detail}")),
            _ => {
                let error_type = error_response
                    .error
                    .error_type
                    .unwrap_or_else(|| "unknown".to_owned());
                AppError::external_service(SERVICE, format!("{error_type} - {detail}"))
            }
        }
    }

    fn send_error(e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::external_unavailable(SERVICE, format!("Request timed out: {e}")).with_source(e)
        } else {
            AppError::external_service(SERVICE, format!("Failed to connect: {e}")).with_source(e)
        }
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        debug!("Sending chat completion request to Groq");

        let groq_request = GroqRequest {
            model: &self.model,
            messages: [GroqMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&groq_request)
            .send()
            .await
            .map_err(Self::send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::send_error)?;

        if !status.is_success() {
            warn!(%status, "Groq API returned an error status");
            return Err(Self::parse_error_response(status, &body));
        }

        let groq_response: GroqResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
                .with_source(e)
        })?;

        let choice = groq_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(chars = content.len(), "Received response from Groq");

        Ok(ChatResponse {
            content,
            model: groq_response
                .model
                .unwrap_or_else(|| self.model.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_error_status_mapping() {
        let body = r#"{"error":{"message":"bad key","type":"invalid_request_error"}}"#;
        assert_eq!(
            GroqProvider::parse_error_response(StatusCode::UNAUTHORIZED, body).code,
            ErrorCode::ExternalAuthFailed
        );
        assert_eq!(
            GroqProvider::parse_error_response(StatusCode::TOO_MANY_REQUESTS, body).code,
            ErrorCode::ExternalRateLimited
        );
        assert_eq!(
            GroqProvider::parse_error_response(StatusCode::BAD_REQUEST, body).code,
            ErrorCode::InvalidInput
        );
        let other = GroqProvider::parse_error_response(StatusCode::BAD_GATEWAY, body);
        assert_eq!(other.code, ErrorCode::ExternalServiceError);
        assert!(other.message.contains("invalid_request_error - bad key"));
    }

    #[test]
    fn test_unstructured_error_body_truncated() {
        let body = "x".repeat(500);
        let err = GroqProvider::parse_error_response(StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(err.message.len() < 300);
    }

    #[test]
    fn test_from_config_requires_key() {
        let err = GroqProvider::from_config(&LlmConfig::default(), Duration::from_secs(1))
            .err()
            .unwrap();
        assert_eq!(err.code, ErrorCode::ConfigMissing);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = GroqProvider::with_settings(
            "key",
            "model-x",
            "http://localhost:1234/v1/",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            provider.api_url("chat/completions"),
            "http://localhost:1234/v1/chat/completions"
        );
        assert_eq!(provider.model, "model-x");
    }
}
