//! Async clipboard access.

use wasm_bindgen_futures::JsFuture;

use crate::core::error::ClipboardError;
use crate::utils::{dom, js};

/// Write `text` to the system clipboard.
///
/// The underlying promise rejects when the platform withholds clipboard
/// permission or the document loses focus mid-write; both surface as
/// [`ClipboardError::WriteRejected`].
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = dom::window().ok_or(ClipboardError::NoWindow)?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|err| ClipboardError::WriteRejected(js::error_message(&err)))?;

    Ok(())
}
