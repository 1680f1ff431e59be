//! Intents for the greeting screen.

use crate::ui::mvi::Intent;

/// Intents emitted by the greeting screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingIntent {
    /// Screen was created. Emitted once by the view before any tap.
    Initial,

    /// Button was tapped with the current text-field contents.
    Submit { text: String },
}

impl Intent for GreetingIntent {}
