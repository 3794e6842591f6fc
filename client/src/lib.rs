//! # client
//!
//! Leptos + WASM frontend that keeps the dark mode preference consistent
//! between the server render and the hydrated page.
//!
//! The preference rules live in the `theme` crate; this crate hosts them in
//! reactive state, wires the browser cookie jar and `prefers-color-scheme`
//! media queries in as adapters, and exposes the result through context.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
