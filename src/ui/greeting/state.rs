//! View state for the greeting screen.

use crate::ui::mvi::UiState;

/// Everything the greeting screen needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GreetingViewState {
    /// Text shown in the label.
    pub hello_message: String,
}

impl UiState for GreetingViewState {}

impl GreetingViewState {
    /// State before any result has been folded.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Copy of this state with a new label text.
    pub fn with_hello_message(self, hello_message: impl Into<String>) -> Self {
        Self {
            hello_message: hello_message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_empty_message() {
        let state = GreetingViewState::idle();
        assert_eq!(state.hello_message, "");
        assert_eq!(state, GreetingViewState::default());
    }

    #[test]
    fn with_hello_message_replaces_label() {
        let state = GreetingViewState::idle().with_hello_message("Hello A");
        assert_eq!(state.hello_message, "Hello A");
        assert_ne!(state, GreetingViewState::idle());
    }
}
