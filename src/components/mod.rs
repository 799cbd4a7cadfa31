//! UI components built with Leptos.
//!
//! - [`controller`] - Button lifecycle and copy action (main entry point)
//! - [`copy_button`] - The injected button component
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod controller;
pub mod copy_button;
pub mod icons;

pub use controller::{install, CopyController};
pub use copy_button::CopyButton;
