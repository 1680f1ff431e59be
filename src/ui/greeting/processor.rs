//! Executes greeting actions.

use crate::ui::mvi::Processor;

use super::action::GreetingAction;
use super::result::{GreetingError, GreetingResult};

/// Pure, synchronous executor for [`GreetingAction`].
///
/// An empty name is not an error of the pipeline; it becomes
/// [`GreetingResult::Failed`] and is displayed like any other result.
pub struct GreetingProcessor;

impl Processor for GreetingProcessor {
    type Action = GreetingAction;
    type Result = GreetingResult;

    fn process(action: Self::Action) -> Self::Result {
        match action {
            GreetingAction::CreateGreeting { name } if name.is_empty() => GreetingResult::Failed {
                error: GreetingError::EmptyName,
            },
            GreetingAction::CreateGreeting { name } => GreetingResult::Created {
                message: format!("Hello {name}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str) -> GreetingResult {
        GreetingProcessor::process(GreetingAction::CreateGreeting {
            name: name.to_string(),
        })
    }

    #[test]
    fn non_empty_name_creates_greeting() {
        assert_eq!(
            create("World"),
            GreetingResult::Created {
                message: "Hello World".to_string()
            }
        );
    }

    #[test]
    fn empty_name_fails() {
        assert_eq!(
            create(""),
            GreetingResult::Failed {
                error: GreetingError::EmptyName
            }
        );
    }

    #[test]
    fn whitespace_only_name_is_not_empty() {
        assert_eq!(
            create(" "),
            GreetingResult::Created {
                message: "Hello  ".to_string()
            }
        );
    }
}
