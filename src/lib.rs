//! Copy-as-Markdown button for the VelaDocs documentation site.
//!
//! Injected into documentation pages, the crate adds a button that maps the
//! current location to the page's Markdown source on the raw mirror, fetches
//! it, and places it on the clipboard. A mutation observer re-inserts the
//! button when the site's client-side router replaces the page chrome.
//!
//! [`core`] is pure and runs in native tests; the DOM, network, and
//! clipboard touchpoints live in [`utils`] and [`components`].

pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point, invoked by the loader after instantiation.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    components::controller::install();
}
