//! Insertion-anchor selection.
//!
//! The button needs a host element to attach to. Candidates are tried in a
//! fixed fallback order: next to the page title first, then appended to the
//! navigation-links container. The order is data, not control flow, so tests
//! can exercise it without a DOM.

use crate::config;

/// How the button container attaches relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Insert as the anchor's next sibling.
    AfterAnchor,
    /// Append as the anchor's last child.
    AppendChild,
}

/// One entry of the anchor fallback order.
#[derive(Debug)]
pub struct AnchorStrategy {
    /// Strategy name, recorded in diagnostics.
    pub name: &'static str,
    /// Selectors tried in order for this strategy.
    pub selectors: &'static [&'static str],
    pub placement: Placement,
}

/// Fallback order for the insertion anchor.
pub const ANCHOR_STRATEGIES: &[AnchorStrategy] = &[
    AnchorStrategy {
        name: "page-title",
        selectors: config::TITLE_SELECTORS,
        placement: Placement::AfterAnchor,
    },
    AnchorStrategy {
        name: "nav-links",
        selectors: config::NAV_SELECTORS,
        placement: Placement::AppendChild,
    },
];

/// Picks the first strategy for which `lookup` yields a handle.
///
/// `lookup` abstracts `Document::query_selector`, which keeps the fallback
/// order testable without a browser.
pub fn select_anchor<T, F>(mut lookup: F) -> Option<(&'static AnchorStrategy, T)>
where
    F: FnMut(&str) -> Option<T>,
{
    for strategy in ANCHOR_STRATEGIES {
        for selector in strategy.selectors {
            if let Some(handle) = lookup(selector) {
                return Some((strategy, handle));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_in<'a>(present: &'a [&'a str]) -> impl FnMut(&str) -> Option<&'a str> {
        move |selector| present.iter().copied().find(|s| *s == selector)
    }

    #[test]
    fn title_wins_over_navigation() {
        let found = select_anchor(lookup_in(&["h1", ".navbar .nav-links"]));
        let (strategy, handle) = found.expect("anchor");
        assert_eq!(strategy.name, "page-title");
        assert_eq!(strategy.placement, Placement::AfterAnchor);
        assert_eq!(handle, "h1");
    }

    #[test]
    fn navigation_is_the_fallback() {
        let found = select_anchor(lookup_in(&[".navbar .nav-links"]));
        let (strategy, handle) = found.expect("anchor");
        assert_eq!(strategy.name, "nav-links");
        assert_eq!(strategy.placement, Placement::AppendChild);
        assert_eq!(handle, ".navbar .nav-links");
    }

    #[test]
    fn nav_selectors_keep_their_order() {
        let found = select_anchor(lookup_in(&[".navbar .links", ".navbar .nav-links"]));
        let (_, handle) = found.expect("anchor");
        assert_eq!(handle, ".navbar .nav-links");
    }

    #[test]
    fn no_anchor_yields_none() {
        assert!(select_anchor(lookup_in(&[])).is_none());
    }
}
