//! # musea-client
//!
//! Leptos frontend for the Musea art museum site. Server-rendered by
//! `musea-server` (`ssr` feature) and hydrated in the browser as WASM
//! (`hydrate` feature).
//!
//! This crate contains the pages, presentation components, hardcoded
//! museum content, UI state models, and design tokens.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating musea client");
    leptos::mount::hydrate_body(app::App);
}
