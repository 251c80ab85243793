use std::sync::Arc;

use learnpath::{CompletionGateway, GroqChat};
use serde_json::json;

use super::common;

/// Full round trip against the real Groq API.
#[tokio::test]
#[ignore = "Requires GROQ_API_KEY; run with: cargo test -p serve e2e_real_chat -- --ignored"]
async fn e2e_real_chat_round_trip() {
    common::load_dotenv();
    std::env::var("GROQ_API_KEY").expect("GROQ_API_KEY must be set for this test");

    let gateway: Arc<dyn CompletionGateway> = Arc::new(GroqChat::from_env());
    let (url, server) = common::spawn_server(gateway).await;

    let (status, body) = common::post_json(
        &url,
        "/api/chat",
        json!({ "message": "Say exactly: ok", "mode": "query" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    let reply = body["response"].as_str().unwrap_or_default();
    assert!(!reply.is_empty(), "real API should return text");

    server.abort();
}
