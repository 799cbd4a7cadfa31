//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the copier:
//! the mirror location, the host page's structural selectors, timing
//! values, and the user-facing button strings.

// =============================================================================
// Mirror Configuration
// =============================================================================

/// Base URL of the raw Markdown mirror of the documentation tree.
pub const MIRROR_BASE_URL: &str =
    "https://raw.githubusercontent.com/CheongSzesuen/VelaDocs/refs/heads/main/docs";

/// Path prefix under which the documentation site is mounted.
pub const SITE_MOUNT_PREFIX: &str = "/vela/quickapp";

/// Relative prefix of the guide sub-tree, which carries its own mapping rules.
pub const GUIDE_PREFIX: &str = "zh/guide/";

/// Mirror-side directory the guide sub-tree is re-rooted under.
pub const GUIDE_MOUNT: &str = "guide/";

/// Extension served by the documentation site for rendered pages.
pub const PAGE_EXTENSION: &str = ".html";

/// Extension of the source documents on the mirror.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Document name fetched for directory paths and for the site root.
pub const INDEX_DOC: &str = "index.md";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10_000;

// =============================================================================
// Button Configuration
// =============================================================================

/// DOM id of the injected button element, doubling as the duplicate guard.
pub const BUTTON_ID: &str = "vela-docs-copy-btn";

/// Tooltip shown on the button.
pub const BUTTON_TOOLTIP: &str = "把当前页面复制为Markdown";

/// Button labels per state.
pub const IDLE_LABEL: &str = "复制文档";
pub const LOADING_LABEL: &str = "获取中...";
pub const SUCCESS_LABEL: &str = "已复制";
pub const FAILURE_LABEL: &str = "失败";

/// How long the success/failure state stays visible before the button
/// returns to idle, in milliseconds.
pub const RESET_DELAY_MS: u32 = 1_200;

// =============================================================================
// Host Page Selectors
// =============================================================================

/// Selectors for the page-title anchor, in preference order.
pub const TITLE_SELECTORS: &[&str] = &["h1"];

/// Selectors for the navigation-links fallback anchor, in preference order.
pub const NAV_SELECTORS: &[&str] = &[".navbar .nav-links", ".navbar .links"];

/// Class added to the container when the button lands in the navigation bar,
/// so the host theme styles it as a regular nav entry.
pub const NAV_ITEM_CLASS: &str = "nav-item";

/// Selectors locating the main content container of the host theme.
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[".page", ".theme-default-content", "main"];

/// Classes on a mutation target that mark it as part of the navigation bar.
pub const QUALIFYING_CLASSES: &[&str] = &["navbar", "nav-links"];

/// Tag names of mutation targets that qualify on their own.
pub const QUALIFYING_TAGS: &[&str] = &["h1"];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used for the button glyphs.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
