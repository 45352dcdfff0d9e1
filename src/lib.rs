//! # signal402
//!
//! Leptos + WASM frontend for the Signal402 alpha-signal dashboard.
//!
//! This crate contains pages, components, application state, backend and
//! chain network types, the injected-wallet bridge, and the payment-gated
//! reveal flow that ties them together. The `server/` crate hosts it for
//! SSR; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod reveal;
pub mod solana;
pub mod state;
pub mod util;
pub mod wallet;

/// Browser entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
