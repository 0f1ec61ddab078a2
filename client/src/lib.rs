//! # client
//!
//! Leptos + WASM frontend for the agency marketing site.
//!
//! The page is static marketing content plus one interactive surface: the
//! "Get a Quote" modal, whose state machine lives in the `quote-flow` crate. This
//! crate supplies the browser halves of that flow: the EmailJS HTTP
//! transport, the `<body>` scroll lock, and the timer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
