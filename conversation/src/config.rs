//! Coaching API configuration parsed from environment variables.

pub const DEFAULT_COACH_API_URL: &str = "https://project-sys-j.onrender.com/api/coach";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading configuration. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid coach API URL '{0}': expected http:// or https://")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoachTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for CoachTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachConfig {
    pub api_url: String,
    pub timeouts: CoachTimeouts,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_COACH_API_URL.to_owned(), timeouts: CoachTimeouts::default() }
    }
}

impl CoachConfig {
    /// Build config for `api_url` with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] unless the URL is http(s).
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { api_url: normalize_url(api_url)?, timeouts: CoachTimeouts::default() })
    }

    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `COACH_API_URL`: upstream coaching endpoint
    /// - `COACH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `COACH_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `COACH_API_URL` is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("COACH_API_URL").unwrap_or_else(|_| DEFAULT_COACH_API_URL.to_owned());
        let timeouts = CoachTimeouts {
            request_secs: env_parse_u64("COACH_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("COACH_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { api_url: normalize_url(&api_url)?, timeouts })
    }

    #[must_use]
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.timeouts.request_secs = secs;
        self
    }
}

fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidUrl(raw.to_owned()))
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
