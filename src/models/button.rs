//! Button lifecycle state.

use crate::config;

/// Lifecycle state of the copy button.
///
/// The button walks `Idle -> Loading -> Success | Failure -> Idle`; the
/// terminal states decay back to [`ButtonState::Idle`] after a short delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Ready for a click.
    #[default]
    Idle,
    /// A copy action is in flight.
    Loading,
    /// The document text landed on the clipboard.
    Success,
    /// Resolution, fetch, or clipboard write failed.
    Failure,
}

impl ButtonState {
    /// User-facing label for this state.
    pub fn label(self) -> &'static str {
        match self {
            ButtonState::Idle => config::IDLE_LABEL,
            ButtonState::Loading => config::LOADING_LABEL,
            ButtonState::Success => config::SUCCESS_LABEL,
            ButtonState::Failure => config::FAILURE_LABEL,
        }
    }

    /// Whether a click in this state should start a copy action.
    ///
    /// Only [`ButtonState::Idle`] accepts clicks; `Loading` ignores them so
    /// a double-click cannot start overlapping fetches, and the terminal
    /// states ignore them while their reset timer runs.
    pub fn is_interactive(self) -> bool {
        matches!(self, ButtonState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(ButtonState::default(), ButtonState::Idle);
    }

    #[test]
    fn only_idle_is_interactive() {
        assert!(ButtonState::Idle.is_interactive());
        assert!(!ButtonState::Loading.is_interactive());
        assert!(!ButtonState::Success.is_interactive());
        assert!(!ButtonState::Failure.is_interactive());
    }

    #[test]
    fn labels_are_distinct() {
        let labels = [
            ButtonState::Idle.label(),
            ButtonState::Loading.label(),
            ButtonState::Success.label(),
            ButtonState::Failure.label(),
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
