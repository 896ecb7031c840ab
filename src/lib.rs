//! # trivia-client
//!
//! Leptos + WASM frontend for the trivia quiz product.
//!
//! The interesting part is the session-gated router: an in-memory session
//! flag, an ordered route table and a navigator that renders the matched
//! page or redirects to a fallback when a guarded page is visited without
//! a session. Pages themselves are thin placeholders for the question,
//! submission and quiz views.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routing;
pub mod state;

/// WASM entry point. Refuses to mount when the router configuration is
/// invalid.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger already installed: {err}");
    }

    match app::startup() {
        Ok(routing) => leptos::mount::hydrate_body(move || view! { <App routing/> }),
        Err(err) => log::error!("refusing to start: {err}"),
    }
}
