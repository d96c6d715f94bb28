//! # fitpulse
//!
//! Leptos + WASM frontend for the FitPulse fitness platform: marketing
//! pages, auth-gated member/trainer/admin dashboards, class and trainer
//! browsing, a community forum with voting, and newsletter signup.
//!
//! All durable data lives behind the backend REST service (`net::api`);
//! identity comes from an external provider (`auth::identity`). The auth
//! store (`auth::store`) is the single owner of the session and the only
//! thing that writes it.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
