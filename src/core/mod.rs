//! Core logic of the copier.
//!
//! This module provides:
//! - [`resolver`] - pure browser-path to mirror-URL mapping
//! - [`anchor`] - insertion-anchor fallback order
//! - [`mutation`] - the re-insertion predicate over observed DOM changes
//! - [`error`] - error types for fetch, clipboard, and insertion
//!
//! Everything here is side-effect free and runs in native tests; the DOM
//! and network touchpoints live in [`crate::utils`] and
//! [`crate::components`].

pub mod anchor;
pub mod error;
pub mod mutation;
pub mod resolver;

pub use anchor::{select_anchor, AnchorStrategy, Placement, ANCHOR_STRATEGIES};
pub use error::{ClipboardError, CopyError, FetchError, InsertError};
pub use mutation::{should_reinsert, MutationSummary};
pub use resolver::{resolve, resolve_doc_url, Resolution};
