//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render widget chrome and drive the `conversation` store held in
//! their own signals.

pub mod chat_widget;
