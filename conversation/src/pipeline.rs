//! Submission pipeline: one draft in, one request/response cycle out.
//!
//! Effect order for an accepted draft:
//! 1. append the user message (text as typed, not trimmed)
//! 2. clear the draft
//! 3. mark pending
//! 4. issue exactly one request carrying the submitted text
//! 5. append the answer, or the fixed fallback on any failure (logged)
//! 6. clear pending, on every exit path
//!
//! Steps 1-3 are [`ConversationState::begin_submit`], steps 5-6 are
//! [`ConversationState::settle`]. [`submit`] runs the whole sequence against a
//! [`CoachApi`] and guarantees step 6 even if its future is dropped mid-flight.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use crate::error::{CoachError, ErrorKind};
use crate::message::Message;
use crate::state::ConversationState;

/// Remote coaching endpoint.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait::async_trait]
pub trait CoachApi: Send + Sync {
    /// Send `user_input` and return the coach's answer text.
    async fn ask(&self, user_input: &str) -> Result<String, CoachError>;
}

/// Ticket for an accepted draft that has not been answered yet.
///
/// Consumed by [`ConversationState::settle`], so each accepted draft produces
/// exactly one assistant message.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an unsettled submission leaves the conversation pending"]
pub struct Submission {
    text: String,
}

impl Submission {
    /// Text to send upstream.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Why a submit call did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// The draft was empty or whitespace only.
    Blank,
    /// Another submission is still in flight.
    Busy,
}

/// How an accepted submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Answered,
    FellBack(ErrorKind),
}

/// Result of [`submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Ignored(Ignored),
    Answered,
    FellBack(ErrorKind),
}

impl From<Settled> for Submitted {
    fn from(settled: Settled) -> Self {
        match settled {
            Settled::Answered => Self::Answered,
            Settled::FellBack(kind) => Self::FellBack(kind),
        }
    }
}

impl ConversationState {
    /// Validate the draft and, if accepted, record it optimistically.
    ///
    /// # Errors
    ///
    /// Returns [`Ignored`] without touching any state when the draft is blank
    /// or a submission is already pending.
    pub fn begin_submit(&mut self) -> Result<Submission, Ignored> {
        if self.is_pending() {
            return Err(Ignored::Busy);
        }
        if self.draft_input().trim().is_empty() {
            return Err(Ignored::Blank);
        }

        let text = self.take_draft();
        self.append_message(Message::user(text.clone()));
        self.set_pending(true);
        tracing::debug!(chars = text.chars().count(), "coach submission issued");
        Ok(Submission { text })
    }

    /// Record the outcome of `submission` and release the pending flag.
    pub fn settle(&mut self, submission: Submission, outcome: Result<String, CoachError>) -> Settled {
        let settled = match outcome {
            Ok(answer) => {
                tracing::debug!(chars = answer.chars().count(), "coach answer received");
                self.append_message(Message::assistant(answer));
                Settled::Answered
            }
            Err(e) => {
                let kind = e.kind();
                tracing::warn!(
                    code = kind.code(),
                    error = %e,
                    submitted_chars = submission.text.chars().count(),
                    "coach request failed; showing fallback"
                );
                self.append_message(Message::assistant(self.strings().fallback));
                Settled::FellBack(kind)
            }
        };
        self.set_pending(false);
        settled
    }
}

/// Run one full submission of the current draft against `coach`.
///
/// Errors never escape: failures become the fallback message and are reported
/// as [`Submitted::FellBack`].
pub async fn submit<C>(state: &mut ConversationState, coach: &C) -> Submitted
where
    C: CoachApi + ?Sized,
{
    let submission = match state.begin_submit() {
        Ok(submission) => submission,
        Err(ignored) => return Submitted::Ignored(ignored),
    };

    let mut in_flight = InFlight { state, submission: Some(submission) };
    let outcome = coach.ask(in_flight.text()).await;
    in_flight.finish(outcome).into()
}

/// Holds the conversation while a request is outstanding.
///
/// Dropping it unsettled (future cancelled, caller-side timeout, panic in the
/// transport) still appends the fallback and clears pending.
struct InFlight<'a> {
    state: &'a mut ConversationState,
    submission: Option<Submission>,
}

impl InFlight<'_> {
    fn text(&self) -> &str {
        self.submission.as_ref().map_or("", Submission::text)
    }

    fn finish(mut self, outcome: Result<String, CoachError>) -> Settled {
        let Some(submission) = self.submission.take() else {
            unreachable!("in-flight submission settled twice");
        };
        self.state.settle(submission, outcome)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(submission) = self.submission.take() {
            tracing::warn!("coach request abandoned before it settled");
            let abandoned = CoachError::Transport("request abandoned before it settled".to_owned());
            self.state.settle(submission, Err(abandoned));
        }
    }
}
