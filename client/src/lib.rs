//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, the chat widget and its identification
//! modal, theme/menu chrome, cookie-consent gating, and lazy image loading.
//! Chat behavior itself lives in the `chatbot` crate; components here hold a
//! `ChatController` in a signal and perform the browser side effects it asks
//! for.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
