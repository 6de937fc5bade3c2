//! Conversation store.
//!
//! DESIGN
//! ======
//! A plain state container: it exposes the current snapshot and raw mutators
//! and performs no validation. Submission rules live in `pipeline`, which
//! drives these mutators in a fixed order.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::message::Message;
use crate::strings::{Locale, Strings};

/// Widget visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Submission phase. `AwaitingResponse` is exactly `is_pending() == true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Message log plus the transient input, visibility and pending flags.
///
/// Created with one seeded assistant greeting; lives for one UI session and
/// is never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    draft_input: String,
    is_open: bool,
    is_pending: bool,
    strings: &'static Strings,
}

impl ConversationState {
    /// New closed, idle conversation greeting the user in the default locale.
    #[must_use]
    pub fn new() -> Self {
        Self::with_locale(Locale::default())
    }

    #[must_use]
    pub fn with_locale(locale: Locale) -> Self {
        let strings = locale.strings();
        Self {
            messages: vec![Message::assistant(strings.greeting)],
            draft_input: String::new(),
            is_open: false,
            is_pending: false,
            strings,
        }
    }

    // =========================================================================
    // SNAPSHOT
    // =========================================================================

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[must_use]
    pub fn draft_input(&self) -> &str {
        &self.draft_input
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.is_pending
    }

    /// Localized fixed strings for this conversation.
    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        self.strings
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        if self.is_open { Visibility::Open } else { Visibility::Closed }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_pending { Phase::AwaitingResponse } else { Phase::Idle }
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_input = text.into();
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Hide the widget (header close button).
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.is_pending = pending;
    }

    /// Take the draft, leaving it empty.
    pub(crate) fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft_input)
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
