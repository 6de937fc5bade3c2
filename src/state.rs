//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries the upstream coach behind the `CoachApi` trait so tests can
//! swap in a scripted double.

use std::sync::Arc;

use conversation::CoachApi;

/// Clone is required by Axum; the coach is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub coach: Arc<dyn CoachApi>,
}

impl AppState {
    #[must_use]
    pub fn new(coach: Arc<dyn CoachApi>) -> Self {
        Self { coach }
    }
}
