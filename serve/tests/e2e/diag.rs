use std::sync::Arc;

use learnpath::MockGateway;

use super::common;

/// GET /api/test reports key presence and length, never the key itself.
/// Both env states are checked inside one test to avoid races on the
/// process-wide variable.
#[tokio::test]
async fn e2e_api_test_reports_key_presence_and_length() {
    let prev = std::env::var("GROQ_API_KEY").ok();
    let (url, server) = common::spawn_server(Arc::new(MockGateway::replying("unused"))).await;
    let client = reqwest::Client::new();

    std::env::remove_var("GROQ_API_KEY");
    let body = client
        .get(format!("{}/api/test", url))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap();
    assert_eq!(body["keyPresent"], false);
    assert_eq!(body["keyLength"], 0);
    assert_eq!(body["message"], "API test endpoint is working");

    std::env::set_var("GROQ_API_KEY", "test-key-123");
    let body = client
        .get(format!("{}/api/test", url))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap();
    assert_eq!(body["keyPresent"], true);
    assert_eq!(body["keyLength"], 12);

    match prev {
        Some(v) => std::env::set_var("GROQ_API_KEY", v),
        None => std::env::remove_var("GROQ_API_KEY"),
    }
    server.abort();
}
