//! Gravity Box landing page: Leptos components rendered on the server and
//! hydrated in the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds typed view state, `components` and `pages` project it into
//! markup, `util` isolates browser glue, and `net` talks to the server's
//! lead proxy. Everything that touches the DOM is gated on `hydrate`.

pub mod app;
pub mod components;
#[cfg(feature = "hydrate")]
pub mod exports;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
