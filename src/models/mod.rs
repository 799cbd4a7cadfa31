//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ButtonState`] - The copy button's visual and interaction state

mod button;

pub use button::ButtonState;
