//! # client
//!
//! Leptos + WASM frontend for the event ticketing dashboard.
//!
//! This crate contains the single dashboard page, its panel components,
//! reactive state, and the network layer that reads contract state through
//! the host's RPC proxy and submits transactions through the browser wallet.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
