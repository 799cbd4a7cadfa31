//! Re-insertion predicate for observed DOM mutations.
//!
//! The mutation observer reduces each record to a [`MutationSummary`] and
//! asks [`should_reinsert`] whether the batch touched the navigation bar,
//! the page title, or the main content container. Keeping the decision a
//! pure function over summaries separates it from the observer wiring and
//! lets it run in native tests.

use crate::config;

/// Digest of one mutation record, reduced to the fields the predicate reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationSummary {
    /// Tag name of the mutation target, as the DOM reports it (uppercase).
    pub target_tag: String,
    /// Class attribute of the mutation target, whitespace separated.
    pub target_classes: String,
    /// Whether the target is, or encloses, the main content container.
    pub encloses_main_content: bool,
}

impl MutationSummary {
    fn qualifies(&self) -> bool {
        if self.encloses_main_content {
            return true;
        }
        if config::QUALIFYING_TAGS
            .iter()
            .any(|tag| self.target_tag.eq_ignore_ascii_case(tag))
        {
            return true;
        }
        self.target_classes
            .split_whitespace()
            .any(|class| config::QUALIFYING_CLASSES.contains(&class))
    }
}

/// Decides whether a batch of mutations warrants re-running the insertion
/// policy.
///
/// Must stay cheap: the observer can deliver large batches during bulk DOM
/// swaps on route changes.
pub fn should_reinsert(summaries: &[MutationSummary]) -> bool {
    summaries.iter().any(MutationSummary::qualifies)
}
