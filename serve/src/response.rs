//! JSON reply helpers shared by the API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Success body for the chat and feature endpoints.
#[derive(Serialize)]
pub(crate) struct CompletionReply {
    pub(crate) response: String,
}

/// Failure body for every endpoint.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

pub(crate) fn completion_reply(response: String) -> Response {
    Json(CompletionReply { response }).into_response()
}

/// HTTP 500 with the endpoint's fixed user-facing error string.
pub(crate) fn gateway_failure(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
