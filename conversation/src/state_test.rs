use super::*;
use crate::message::Role;

// =============================================================
// Construction
// =============================================================

#[test]
fn new_seeds_single_greeting() {
    let state = ConversationState::new();
    assert_eq!(state.messages(), &[Message::assistant(Strings::KO.greeting)]);
}

#[test]
fn new_is_closed_idle_and_empty_draft() {
    let state = ConversationState::new();
    assert!(!state.is_open());
    assert!(!state.is_pending());
    assert_eq!(state.draft_input(), "");
    assert_eq!(state.visibility(), Visibility::Closed);
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn with_locale_seeds_localized_greeting() {
    let state = ConversationState::with_locale(Locale::En);
    assert_eq!(state.last_message().map(|m| m.text.as_str()), Some(Strings::EN.greeting));
    assert_eq!(state.strings(), &Strings::EN);
}

#[test]
fn default_matches_new() {
    assert_eq!(ConversationState::default(), ConversationState::new());
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn toggle_open_flips_visibility() {
    let mut state = ConversationState::new();
    state.toggle_open();
    assert_eq!(state.visibility(), Visibility::Open);
    state.toggle_open();
    assert_eq!(state.visibility(), Visibility::Closed);
}

#[test]
fn toggle_open_leaves_messages_and_draft_alone() {
    let mut state = ConversationState::new();
    state.set_draft("half-written thought");
    state.append_message(Message::user("earlier"));
    let before_messages = state.messages().to_vec();

    state.toggle_open();
    state.toggle_open();
    state.toggle_open();

    assert_eq!(state.messages(), before_messages.as_slice());
    assert_eq!(state.draft_input(), "half-written thought");
}

#[test]
fn close_is_idempotent() {
    let mut state = ConversationState::new();
    state.toggle_open();
    state.close();
    state.close();
    assert!(!state.is_open());
}

// =============================================================
// Raw mutators
// =============================================================

#[test]
fn set_draft_replaces_text() {
    let mut state = ConversationState::new();
    state.set_draft("first");
    state.set_draft("second");
    assert_eq!(state.draft_input(), "second");
}

#[test]
fn append_message_preserves_order() {
    let mut state = ConversationState::new();
    state.append_message(Message::user("q"));
    state.append_message(Message::assistant("a"));
    let roles: Vec<Role> = state.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
}

#[test]
fn set_pending_drives_phase() {
    let mut state = ConversationState::new();
    state.set_pending(true);
    assert_eq!(state.phase(), Phase::AwaitingResponse);
    state.set_pending(false);
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn take_draft_clears_draft() {
    let mut state = ConversationState::new();
    state.set_draft("  hello  ");
    assert_eq!(state.take_draft(), "  hello  ");
    assert_eq!(state.draft_input(), "");
}
