//! Chatflow landing site
//!
//! Marketing pages for a WhatsApp auto-reply service. Visitors leave their
//! details through lead forms that land in a hosted table; the server also
//! sends the waitlist welcome email. Built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
