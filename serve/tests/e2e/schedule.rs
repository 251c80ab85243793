use learnpath::{MockGateway, SCHEDULE_USER_MESSAGE};
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_schedule_interpolates_plan_and_replies_with_schedule_field() {
    let mock = MockGateway::replying("<div class=\"week\">Week 1</div>");
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, body) = common::post_json(
        &url,
        "/api/schedule",
        json!({
            "learningPlan": "Module 1: Basics",
            "hoursPerWeek": 10,
            "startDate": "2025-06-02",
            "preferredDays": ["Monday", "Thursday"]
        }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["schedule"], "<div class=\"week\">Week 1</div>");
    assert!(body.get("response").is_none());
    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].system.contains("\"Module 1: Basics\""));
    assert!(calls[0].system.contains("10 hours per week"));
    assert!(calls[0].system.contains("starting from 2025-06-02"));
    assert!(calls[0].system.contains("these days: Monday, Thursday."));
    assert_eq!(calls[0].user, SCHEDULE_USER_MESSAGE);

    server.abort();
}

#[tokio::test]
async fn e2e_schedule_gateway_failure_returns_500_with_error_field() {
    let mock = MockGateway::failing();
    let (url, server) = common::spawn_with_mock(&mock).await;

    let (status, body) = common::post_json(
        &url,
        "/api/schedule",
        json!({
            "learningPlan": "Module 1",
            "hoursPerWeek": 5,
            "startDate": "2025-06-02",
            "preferredDays": ["Friday"]
        }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to create schedule");

    server.abort();
}
