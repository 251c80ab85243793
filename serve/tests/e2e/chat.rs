use learnpath::{system_prompt, MockGateway, Mode};
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_chat_uses_course_prompt_and_returns_reply() {
    let mock = MockGateway::replying("Module 1: Ownership");
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, body) = common::post_json(
        &url,
        "/api/chat",
        json!({ "message": "Teach me Rust", "mode": "course" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["response"], "Module 1: Ownership");
    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].system, system_prompt(Mode::Course));
    assert_eq!(calls[0].user, "Teach me Rust");

    server.abort();
}

#[tokio::test]
async fn e2e_chat_unrecognized_mode_falls_back_to_query_prompt() {
    let mock = MockGateway::replying("Sure.");
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, _) = common::post_json(
        &url,
        "/api/chat",
        json!({ "message": "hi", "mode": "cooking" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(mock.calls()[0].system, system_prompt(Mode::Query));

    server.abort();
}

#[tokio::test]
async fn e2e_chat_gateway_failure_returns_500_with_error_field() {
    let mock = MockGateway::failing();
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, body) = common::post_json(
        &url,
        "/api/chat",
        json!({ "message": "hi", "mode": "query" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to get response from AI");

    server.abort();
}
