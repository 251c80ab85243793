//! Shared helpers for e2e tests: spawn the server on a random port and talk
//! JSON to it with reqwest.

use std::sync::Arc;

use learnpath::{CompletionGateway, MockGateway};
use tokio::net::TcpListener;

pub type ServerHandle =
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>;

/// Loads .env so real-API tests see GROQ_API_KEY when run via `cargo test`.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Bind to a random port and spawn the server with the given gateway.
/// Returns (base_url, server_handle); abort the handle when done.
pub async fn spawn_server(gateway: Arc<dyn CompletionGateway>) -> (String, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);
    let handle = tokio::spawn(serve::run_serve_on_listener(listener, gateway));
    (url, handle)
}

/// Spawn with a clone of the given mock so the test keeps the call log.
pub async fn spawn_with_mock(mock: &MockGateway) -> (String, ServerHandle) {
    spawn_server(Arc::new(mock.clone())).await
}

/// POST a JSON body and return (status, parsed JSON body).
pub async fn post_json(
    url: &str,
    path: &str,
    body: serde_json::Value,
) -> (reqwest::StatusCode, serde_json::Value) {
    let resp = reqwest::Client::new()
        .post(format!("{}{}", url, path))
        .json(&body)
        .send()
        .await
        .expect("request should reach the test server");
    let status = resp.status();
    let json = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    (status, json)
}
