//! # minemind-client
//!
//! Leptos + WASM frontend for the mining operations co-pilot dashboard.
//!
//! This crate contains the page, components, application state, and the
//! HTTP client for the co-pilot backend. It integrates with the `charts`
//! crate for canvas rendering via the `ChartHost` bridge component.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod shell;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
