//! # authform-client
//!
//! Leptos + WASM login/signup frontend.
//!
//! The form validates credentials locally, calls `POST /api/sign-up` or
//! `POST /api/log-in`, and maps each reply to exactly one user-facing result.
//! Framework-free logic lives in `controller`, `state`, `net` and `util` so it
//! can be unit tested natively; `components` and `pages` are thin views.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
