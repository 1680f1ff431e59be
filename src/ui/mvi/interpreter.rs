//! Interpreter trait for MVI architecture.

use super::action::Action;
use super::intent::Intent;

/// Maps each intent to exactly one action.
pub trait Interpreter {
    type Intent: Intent;
    type Action: Action;

    fn interpret(intent: Self::Intent) -> Self::Action;
}
