//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Copied, LuClipboard as Document, LuHourglass as Fetching, LuX as Failed,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckLg as Copied, BsClipboard as Document, BsHourglassSplit as Fetching,
        BsXLg as Failed,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(DOCUMENT, Document);
themed_icon!(FETCHING, Fetching);
themed_icon!(COPIED, Copied);
themed_icon!(FAILED, Failed);
