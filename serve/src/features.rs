//! Feature endpoints: `POST /api/{explainer,mentor,evaluation}`.
//!
//! Stateless pass-throughs — the per-session credit accounting lives in the
//! client session, not here.

use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use learnpath::{feature_prompt, Difficulty, FeatureRequest, Message};
use serde::Deserialize;
use tracing::error;

use super::app::AppState;
use super::response::{completion_reply, gateway_failure};

#[derive(Deserialize)]
pub(crate) struct ExplainerRequest {
    concept: String,
}

#[derive(Deserialize)]
pub(crate) struct MentorRequest {
    question: String,
}

#[derive(Deserialize)]
pub(crate) struct EvaluationRequest {
    topic: String,
    /// Closed enum at the wire: unknown difficulty strings are rejected by
    /// deserialization, never defaulted.
    difficulty: Difficulty,
}

async fn run_feature(state: &AppState, request: FeatureRequest, failure: &str) -> Response {
    let (system, user) = feature_prompt(&request);
    match state
        .gateway
        .complete(&[Message::system(system), Message::user(user)])
        .await
    {
        Ok(response) => completion_reply(response),
        Err(e) => {
            error!(feature = ?request.kind(), "feature completion failed: {}", e);
            gateway_failure(failure)
        }
    }
}

pub(crate) async fn handle_explainer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExplainerRequest>,
) -> Response {
    run_feature(
        &state,
        FeatureRequest::Explainer {
            concept: req.concept,
        },
        "Failed to create explainer",
    )
    .await
}

pub(crate) async fn handle_mentor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MentorRequest>,
) -> Response {
    run_feature(
        &state,
        FeatureRequest::Mentor {
            question: req.question,
        },
        "Failed to connect with mentor",
    )
    .await
}

pub(crate) async fn handle_evaluation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EvaluationRequest>,
) -> Response {
    run_feature(
        &state,
        FeatureRequest::Evaluation {
            topic: req.topic,
            difficulty: req.difficulty,
        },
        "Failed to create evaluation",
    )
    .await
}
