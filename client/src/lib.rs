//! # client
//!
//! Leptos + WASM frontend for the Lifeline emergency-alert coordinator.
//!
//! This crate contains pages, components, application state, record types,
//! and the REST clients for the hosted auth/database provider and the
//! geocoder. Map geometry comes from the `mapview` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
