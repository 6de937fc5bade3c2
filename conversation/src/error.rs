//! Submission failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recovered locally by the pipeline and surfaces to the user
//! as the same fallback message. The variants only differ in diagnostics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Longest slice of a server body kept in diagnostics.
const MAX_BODY_CHARS: usize = 200;

/// Errors produced by a single coaching request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoachError {
    /// The request never completed normally (unreachable host, reset, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The coaching API answered with a non-success status.
    #[error("server failure: status {status}")]
    Server { status: u16, body: String },

    /// The response body did not carry a usable `answer` string.
    #[error("decode failure: {0}")]
    Decode(String),
}

/// Coarse classification of a [`CoachError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TransportFailure,
    ServerFailure,
    DecodeFailure,
}

impl ErrorKind {
    /// Stable code used in logs and relay responses.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::TransportFailure => "E_TRANSPORT",
            Self::ServerFailure => "E_SERVER",
            Self::DecodeFailure => "E_DECODE",
        }
    }
}

impl CoachError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::TransportFailure,
            Self::Server { .. } => ErrorKind::ServerFailure,
            Self::Decode(_) => ErrorKind::DecodeFailure,
        }
    }

    /// Build a [`CoachError::Server`], keeping only a prefix of the body.
    #[must_use]
    pub fn server(status: u16, body: &str) -> Self {
        Self::Server { status, body: truncate_body(body) }
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_owned(),
    }
}
