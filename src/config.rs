//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so local development can keep
//! `PORT` and the `COACH_*` variables in a file.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use conversation::{CoachConfig, ConfigError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error(transparent)]
    Coach(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub coach: CoachConfig,
}

impl ServerConfig {
    /// Read `PORT` (default 3000) plus the upstream coach settings.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let coach = CoachConfig::from_env()?;
        Ok(Self { port, coach })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ServerConfigError::InvalidPort(value.to_owned())),
    }
}
