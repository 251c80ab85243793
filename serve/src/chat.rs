//! `POST /api/chat`: one chat turn framed by the selected mode's system prompt.

use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use learnpath::{system_prompt, Message, Mode};
use serde::Deserialize;
use tracing::error;

use super::app::AppState;
use super::response::{completion_reply, gateway_failure};

#[derive(Deserialize)]
pub(crate) struct ChatRequest {
    message: String,
    /// Wire mode string; unrecognized values fall back to the query persona.
    mode: String,
}

pub(crate) async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let mode = Mode::parse(&req.mode);
    let system = system_prompt(mode);
    match state
        .gateway
        .complete(&[Message::system(system), Message::user(req.message)])
        .await
    {
        Ok(response) => completion_reply(response),
        Err(e) => {
            error!(mode = %mode.as_str(), "chat completion failed: {}", e);
            gateway_failure("Failed to get response from AI")
        }
    }
}
