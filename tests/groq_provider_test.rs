// ABOUTME: Integration tests for the Groq provider against a mock HTTP server
// ABOUTME: Verifies the request shape, response parsing, and status code mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use diet_planner::config::MotivationConfig;
use diet_planner::errors::ErrorCode;
use diet_planner::llm::{motivation_prompt, ChatRequest, GroqProvider, LlmProvider};
use diet_planner::models::HealthCondition;
use diet_planner::motivation::{FallbackReason, MotivationProvider};
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn provider_for(server: &Server) -> GroqProvider {
    GroqProvider::with_settings(
        "test-key",
        "test-model",
        server.url(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_completion_request_and_response() {
    init_test_logging();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "test-model",
            "messages": [{
                "role": "user",
                "content": "Give one motivational health message for a Diabetes patient."
            }],
            "max_tokens": 60
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "model": "test-model",
                "choices": [{
                    "message": {"role": "assistant", "content": "Every bite counts."},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 14, "completion_tokens": 5, "total_tokens": 19}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let request =
        ChatRequest::user(motivation_prompt(HealthCondition::Diabetes)).with_max_tokens(60);
    let response = provider.complete(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content, "Every bite counts.");
    assert_eq!(response.model, "test-model");
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#)
        .create_async()
        .await;

    let err = provider_for(&server)
        .complete(&ChatRequest::user("hi"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
    assert!(err.message.contains("Invalid API Key"));
}

#[tokio::test]
async fn test_no_choices_is_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let err = provider_for(&server)
        .complete(&ChatRequest::user("hi"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_server_error_recovered_by_motivation_provider() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let provider = MotivationProvider::new(
        Some(Arc::new(provider_for(&server))),
        MotivationConfig::default(),
    )
    .unwrap();
    let motivation = provider.motivate(HealthCondition::Heart).await.unwrap();

    assert!(!motivation.is_generated());
    assert!(matches!(
        motivation.fallback_reason(),
        Some(FallbackReason::RequestFailed(_))
    ));
}

#[tokio::test]
async fn test_malformed_body_recovered_by_motivation_provider() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let provider = MotivationProvider::new(
        Some(Arc::new(provider_for(&server))),
        MotivationConfig::default(),
    )
    .unwrap();
    let motivation = provider.motivate(HealthCondition::Obesity).await.unwrap();

    assert!(matches!(
        motivation.fallback_reason(),
        Some(FallbackReason::RequestFailed(_))
    ));
}
