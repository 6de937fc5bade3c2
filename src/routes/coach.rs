//! Same-origin relay to the upstream coaching API.
//!
//! The widget posts here so the upstream URL stays server-side configuration.
//! Upstream failure detail is logged and reduced to a stable error code; the
//! widget shows its own fallback message regardless of which code it gets.

#[cfg(test)]
#[path = "coach_test.rs"]
mod coach_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use conversation::CoachReply;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoachBody {
    pub user_input: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayError {
    pub error: String,
}

const E_BLANK_INPUT: &str = "E_BLANK_INPUT";

/// `POST /api/coach` — forward `user_input` upstream and return `{ "answer" }`.
pub async fn relay(State(state): State<AppState>, Json(body): Json<CoachBody>) -> Response {
    if body.user_input.trim().is_empty() {
        return relay_error(StatusCode::BAD_REQUEST, E_BLANK_INPUT);
    }

    match state.coach.ask(&body.user_input).await {
        Ok(answer) => Json(CoachReply { answer }).into_response(),
        Err(e) => {
            let code = e.kind().code();
            tracing::warn!(code, error = %e, "upstream coach request failed");
            relay_error(StatusCode::BAD_GATEWAY, code)
        }
    }
}

fn relay_error(status: StatusCode, code: &str) -> Response {
    (status, Json(RelayError { error: code.to_owned() })).into_response()
}
