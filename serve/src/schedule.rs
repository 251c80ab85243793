//! `POST /api/schedule`: turn a learning plan into a week-by-week schedule.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use learnpath::{schedule_prompt, Message, ScheduleRequest};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::app::AppState;
use super::response::gateway_failure;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduleBody {
    learning_plan: String,
    hours_per_week: u32,
    start_date: String,
    #[serde(default)]
    preferred_days: Vec<String>,
}

/// Success body; the schedule endpoint replies with `schedule`, not `response`.
#[derive(Serialize)]
pub(crate) struct ScheduleReply {
    schedule: String,
}

pub(crate) async fn handle_schedule(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ScheduleBody>,
) -> Response {
    let request = ScheduleRequest {
        learning_plan: body.learning_plan,
        hours_per_week: body.hours_per_week,
        start_date: body.start_date,
        preferred_days: body.preferred_days,
    };
    let (system, user) = schedule_prompt(&request);
    match state
        .gateway
        .complete(&[Message::system(system), Message::user(user)])
        .await
    {
        Ok(schedule) => Json(ScheduleReply { schedule }).into_response(),
        Err(e) => {
            error!("schedule completion failed: {}", e);
            gateway_failure("Failed to create schedule")
        }
    }
}
