//! REST helpers for the coaching relay.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub that fails as a transport error, since submissions
//! are only triggered by browser events.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a `CoachError` so the widget can hand it straight to
//! `ConversationState::settle`, which turns failures into the fallback message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use conversation::CoachError;

/// Same-origin relay path served by the host.
pub const COACH_ENDPOINT: &str = "/api/coach";

/// Browser-side bound on one request; `fetch` has no timeout of its own.
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

#[cfg(any(test, feature = "hydrate"))]
fn timeout_message(ms: u32) -> String {
    format!("timed out after {ms} ms")
}

/// Send one coaching request via `POST /api/coach` and return the answer text.
///
/// # Errors
///
/// Network failures and timeouts map to `CoachError::Transport`; status and
/// body are checked by `conversation::decode_answer`.
pub async fn post_coach(user_input: &str) -> Result<String, CoachError> {
    #[cfg(feature = "hydrate")]
    {
        use conversation::{CoachRequest, decode_answer};
        use futures::future::{Either, select};

        let request = gloo_net::http::Request::post(COACH_ENDPOINT)
            .json(&CoachRequest { user_input })
            .map_err(|e| CoachError::Transport(e.to_string()))?;

        let send = Box::pin(request.send());
        let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
        let response = match select(send, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| CoachError::Transport(e.to_string()))?,
            Either::Right(((), _)) => return Err(CoachError::Transport(timeout_message(REQUEST_TIMEOUT_MS))),
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoachError::Transport(e.to_string()))?;
        decode_answer(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_input;
        Err(CoachError::Transport("not available on server".to_owned()))
    }
}
