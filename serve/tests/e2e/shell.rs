use std::sync::Arc;

use learnpath::MockGateway;

use super::common;

/// Unmatched routes serve the single-page client shell.
#[tokio::test]
async fn e2e_unmatched_routes_serve_the_client_shell() {
    let (url, server) = common::spawn_server(Arc::new(MockGateway::replying("unused"))).await;
    let client = reqwest::Client::new();

    for path in ["/", "/learn/rust", "/deep/nested/route"] {
        let resp = client.get(format!("{}{}", url, path)).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "path {}", path);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"), "path {}", path);
        let body = resp.text().await.unwrap();
        assert!(body.contains("LearnPath"), "path {}", path);
        assert!(body.contains("chat-messages"), "path {}", path);
    }

    server.abort();
}
