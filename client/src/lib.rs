//! # client
//!
//! Leptos + WASM frontend for the Job-Navigator coaching widget.
//!
//! This crate renders the floating chat widget on top of the `conversation`
//! core: the component owns a `ConversationState` signal, and the browser
//! transport in `net::api` answers submissions through the host relay.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
