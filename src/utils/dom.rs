//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, Element, Window};

use crate::config;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the browser document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the current location pathname.
pub fn current_pathname() -> Option<String> {
    window()?.location().pathname().ok()
}

/// Query the document with each selector in turn, returning the first match.
pub fn query_first(selectors: &[&str]) -> Option<Element> {
    let document = document()?;
    selectors
        .iter()
        .find_map(|selector| document.query_selector(selector).ok().flatten())
}

/// Look up an element by id.
pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Locate the host theme's main content container, if the page has one.
#[inline]
pub fn main_content() -> Option<Element> {
    query_first(config::MAIN_CONTENT_SELECTORS)
}
