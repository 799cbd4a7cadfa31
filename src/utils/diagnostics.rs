//! Structured console diagnostics.
//!
//! Failures never reach the user as text, only as the button's failure
//! state, so every degraded path writes a structured record to the console
//! for operator troubleshooting. Records are plain serializable structs
//! converted through `serde_wasm_bindgen` so the console renders them as
//! inspectable objects rather than preformatted strings.

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::core::error::{CopyError, InsertError};
use crate::core::resolver::Resolution;

/// Tag prepended to every record so operators can filter the console.
const TAG: &str = "vela-docs-copier";

#[derive(Debug, Serialize)]
struct ResolutionFallbackRecord<'a> {
    event: &'static str,
    path: &'a str,
    url: &'a str,
    rule: &'static str,
}

#[derive(Debug, Serialize)]
struct CopyFailureRecord<'a> {
    event: &'static str,
    path: &'a str,
    url: &'a str,
    stage: &'static str,
    detail: String,
}

#[derive(Debug, Serialize)]
struct InsertionFailureRecord {
    event: &'static str,
    detail: String,
}

/// Record that a path missed the site mount and degraded to the home
/// document.
pub fn resolution_fallback(path: &str, resolution: &Resolution) {
    warn(&ResolutionFallbackRecord {
        event: "resolution-fallback",
        path,
        url: &resolution.url,
        rule: resolution.rule,
    });
}

/// Record a failed copy action with everything needed to reproduce it.
pub fn copy_failure(path: &str, url: &str, error: &CopyError) {
    error_record(&CopyFailureRecord {
        event: "copy-failure",
        path,
        url,
        stage: error.stage(),
        detail: error.to_string(),
    });
}

/// Record a button insertion that found an anchor but could not attach.
pub fn insertion_failed(error: &InsertError) {
    warn(&InsertionFailureRecord {
        event: "insertion-failed",
        detail: error.to_string(),
    });
}

fn warn<T: Serialize>(record: &T) {
    match serde_wasm_bindgen::to_value(record) {
        Ok(value) => console::warn_2(&JsValue::from_str(TAG), &value),
        Err(_) => console::warn_1(&JsValue::from_str(TAG)),
    }
}

fn error_record<T: Serialize>(record: &T) {
    match serde_wasm_bindgen::to_value(record) {
        Ok(value) => console::error_2(&JsValue::from_str(TAG), &value),
        Err(_) => console::error_1(&JsValue::from_str(TAG)),
    }
}
