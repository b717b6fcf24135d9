//! # notenest-client
//!
//! Leptos + WASM browser client for the NoteNest knowledge base. Server
//! rendered by `notenest-web`, then hydrated in the browser where all REST
//! calls to the backend are made.
//!
//! This crate contains pages, components, view state, the REST client and
//! wire types, and small formatting helpers.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
