//! Results of executing greeting actions.

use thiserror::Error;

use crate::ui::mvi::TaskResult;

/// Why a greeting could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    #[error("Name is empty!")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingResult {
    Created { message: String },
    /// Modeled failure. Its display text becomes the label.
    Failed { error: GreetingError },
}

impl TaskResult for GreetingResult {}

impl GreetingResult {
    /// Text the screen shows for this result.
    pub fn display_text(&self) -> String {
        match self {
            GreetingResult::Created { message } => message.clone(),
            GreetingResult::Failed { error } => error.to_string(),
        }
    }
}
