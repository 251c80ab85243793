//! Axum app: state, router, diagnostic endpoint, and the client-shell fallback.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use learnpath::CompletionGateway;
use serde::Serialize;

use super::{chat, features, schedule};

/// Embedded single-page client shell, served for every non-API route.
const CLIENT_SHELL: &str = include_str!("../static/index.html");

/// Shared state for the HTTP server.
///
/// Injected into the router and cloned per request so handlers reach the
/// gateway without passing it through every layer.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) gateway: Arc<dyn CompletionGateway>,
}

/// Builds the router: five JSON POST endpoints, the GET diagnostic, and the
/// shell fallback for everything else.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/explainer", post(features::handle_explainer))
        .route("/api/mentor", post(features::handle_mentor))
        .route("/api/evaluation", post(features::handle_evaluation))
        .route("/api/schedule", post(schedule::handle_schedule))
        .route("/api/test", get(handle_test))
        .fallback(shell)
        .with_state(state)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TestReply {
    key_present: bool,
    key_length: usize,
    message: String,
}

/// `GET /api/test`: reports whether the Groq key is configured (never the key itself).
async fn handle_test(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    let key = std::env::var("GROQ_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());
    Json(TestReply {
        key_present: key.is_some(),
        key_length: key.map(|k| k.len()).unwrap_or(0),
        message: "API test endpoint is working".to_string(),
    })
}

/// Fallback: serve the single-page client shell for any non-API path.
async fn shell() -> impl IntoResponse {
    Html(CLIENT_SHELL)
}
