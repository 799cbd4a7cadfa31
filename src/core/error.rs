//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for mirror requests
//! - [`ClipboardError`] - Async clipboard write errors
//! - [`InsertError`] - Button insertion into the host page
//! - [`CopyError`] - Umbrella error for a full copy action

use std::fmt;

/// Network/fetch-related errors for mirror requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (DNS, CORS, connection reset, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    Http { status: u16, status_text: String },
    /// Failed to read response body
    ResponseReadFailed,
    /// Response body was not text
    InvalidContent,
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::Http {
                status,
                status_text,
            } => write!(f, "HTTP error: {} {}", status, status_text),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Async clipboard write errors.
#[derive(Debug, Clone)]
pub enum ClipboardError {
    /// Browser window not available
    NoWindow,
    /// The clipboard write promise rejected (permissions, focus loss, etc.)
    WriteRejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::WriteRejected(msg) => write!(f, "Clipboard write rejected: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Button insertion errors.
///
/// These never surface in the page; the controller logs them and leaves
/// the host DOM untouched until the observer reports a better layout.
#[derive(Debug, Clone)]
pub enum InsertError {
    /// Browser window or document not available
    NoDocument,
    /// Neither a page title nor a navigation bar matched
    NoAnchor,
    /// A DOM attach call failed
    AttachFailed(String),
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "Browser document not available"),
            Self::NoAnchor => write!(f, "No insertion anchor found in page"),
            Self::AttachFailed(msg) => write!(f, "Failed to attach button: {}", msg),
        }
    }
}

impl std::error::Error for InsertError {}

/// Umbrella error for a full copy action.
///
/// A copy action fetches from the mirror and then writes to the clipboard;
/// either half failing fails the action.
#[derive(Debug, Clone)]
pub enum CopyError {
    Fetch(FetchError),
    Clipboard(ClipboardError),
}

impl CopyError {
    /// Short stage tag for diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Clipboard(_) => "clipboard",
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{}", err),
            Self::Clipboard(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CopyError {}

impl From<FetchError> for CopyError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

impl From<ClipboardError> for CopyError {
    fn from(err: ClipboardError) -> Self {
        Self::Clipboard(err)
    }
}
