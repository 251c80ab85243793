use learnpath::MockGateway;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_explainer_composes_user_message_around_concept() {
    let mock = MockGateway::replying("An explainer.");
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, body) = common::post_json(
        &url,
        "/api/explainer",
        json!({ "concept": "Recursion" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["response"], "An explainer.");
    let calls = mock.calls();
    assert_eq!(calls[0].user, "Create an engaging explainer for: Recursion");
    assert!(calls[0].system.contains("expert educational explainer"));

    server.abort();
}

#[tokio::test]
async fn e2e_mentor_failure_returns_fixed_error_string() {
    let mock = MockGateway::failing();
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, body) = common::post_json(
        &url,
        "/api/mentor",
        json!({ "question": "How do I focus?" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to connect with mentor");

    server.abort();
}

#[tokio::test]
async fn e2e_evaluation_interpolates_difficulty_into_both_prompts() {
    let mock = MockGateway::replying("Q1 ...");
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, _) = common::post_json(
        &url,
        "/api/evaluation",
        json!({ "topic": "SQL", "difficulty": "advanced" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    let calls = mock.calls();
    assert!(calls[0].system.contains("at the advanced level"));
    assert_eq!(calls[0].user, "Create a advanced level test for: SQL");

    server.abort();
}

/// Difficulty is a closed enum at the wire: unknown values are rejected before
/// any gateway call, not defaulted.
#[tokio::test]
async fn e2e_evaluation_rejects_unknown_difficulty() {
    let mock = MockGateway::replying("never sent");
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, _) = common::post_json(
        &url,
        "/api/evaluation",
        json!({ "topic": "SQL", "difficulty": "expert" }),
    )
    .await;

    assert!(status.is_client_error(), "got {}", status);
    assert_eq!(mock.call_count(), 0);

    server.abort();
}
