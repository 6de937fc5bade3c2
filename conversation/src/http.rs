//! Native coaching API client.
//!
//! Thin `reqwest` wrapper for the single `POST` the pipeline needs. Status and
//! body interpretation is delegated to [`decode_answer`] so the browser
//! transport applies the same schema check.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use crate::config::CoachConfig;
use crate::error::CoachError;
use crate::pipeline::CoachApi;
use crate::wire::{CoachRequest, decode_answer};

pub struct HttpCoachClient {
    http: reqwest::Client,
    api_url: String,
}

impl HttpCoachClient {
    /// # Errors
    ///
    /// Returns [`CoachError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &CoachConfig) -> Result<Self, CoachError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CoachError::Transport(format!("HTTP client build failed: {e}")))?;
        Ok(Self { http, api_url: config.api_url.clone() })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Issue one coaching request. No retries.
    ///
    /// # Errors
    ///
    /// Connection failures and timeouts map to [`CoachError::Transport`];
    /// everything after the response arrives goes through [`decode_answer`].
    pub async fn coach(&self, user_input: &str) -> Result<String, CoachError> {
        let response = self
            .http
            .post(&self.api_url)
            .json(&CoachRequest { user_input })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        decode_answer(status, &body)
    }
}

#[async_trait::async_trait]
impl CoachApi for HttpCoachClient {
    async fn ask(&self, user_input: &str) -> Result<String, CoachError> {
        self.coach(user_input).await
    }
}

fn transport_error(e: reqwest::Error) -> CoachError {
    if e.is_timeout() {
        CoachError::Transport(format!("timed out: {e}"))
    } else {
        CoachError::Transport(e.to_string())
    }
}
