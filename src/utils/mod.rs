//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_text`] - Network fetching with timeout
//! - [`clipboard`] - Async clipboard writes
//! - [`diagnostics`] - Structured console records for degraded paths
//! - [`dom`] - Window/document/selector lookups
//! - [`js`] - JS rejection inspection

pub mod clipboard;
pub mod diagnostics;
pub mod dom;
pub mod fetch;
pub mod js;

pub use fetch::{fetch_text, race_with_timeout, RaceResult};
