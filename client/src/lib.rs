//! # client
//!
//! Leptos + WASM frontend for the chatbot launch page.
//!
//! The page logic lives in `launchpad`; this crate renders its state and
//! supplies the browser pieces it needs: `gloo-timers` for scheduling, the
//! JS clock, and a toast layer for notices. Server-side rendering builds the
//! same components with inert timers, and hydration starts them for real.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("launch page hydrating");
    leptos::mount::hydrate_body(app::App);
}
