//! Conversation core for the Job-Navigator coaching widget.
//!
//! This crate owns the client-side chat state machine shared by the Leptos
//! widget (`client`), the host relay, and the terminal front end (`cli`).
//! It has no rendering concerns: the store holds the message log plus the
//! draft/open/pending flags, and the pipeline turns one draft into exactly
//! one request/response cycle against a [`CoachApi`].
//!
//! DESIGN
//! ======
//! The pipeline is split into `begin_submit` / `settle` so reactive callers
//! that cannot hold `&mut ConversationState` across an await can drive it
//! from signal updates, while async callers use [`submit`] end to end.

pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod message;
pub mod pipeline;
pub mod state;
pub mod strings;
pub mod wire;

pub use config::{CoachConfig, CoachTimeouts, ConfigError};
pub use error::{CoachError, ErrorKind};
#[cfg(feature = "http")]
pub use http::HttpCoachClient;
pub use message::{Message, Role};
pub use pipeline::{CoachApi, Ignored, Settled, Submission, Submitted, submit};
pub use state::{ConversationState, Phase, Visibility};
pub use strings::{Locale, Strings};
pub use wire::{CoachReply, CoachRequest, decode_answer};
