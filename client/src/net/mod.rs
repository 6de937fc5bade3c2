//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the coaching request from the browser. The wire schema itself
//! lives in `conversation::wire` so the native and browser transports agree.

pub mod api;
