//! Reducer trait for MVI architecture.

use super::result::TaskResult;
use super::state::UiState;

/// Reducer folds results into state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Result) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The result type this reducer folds.
    type Result: TaskResult;

    /// Fold one result into the previous state and return the next state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, result: Self::Result) -> Self::State;
}
