//! JS rejection inspection.

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human-readable message for a rejected JS value.
///
/// `Error` objects report through their `message` property, plain-string
/// rejections pass through unchanged, and anything else gets a fixed
/// placeholder so diagnostics never end up empty.
pub fn error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}
