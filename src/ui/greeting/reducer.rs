use crate::ui::mvi::Reducer;

use super::result::GreetingResult;
use super::state::GreetingViewState;

pub struct GreetingReducer;

impl Reducer for GreetingReducer {
    type State = GreetingViewState;
    type Result = GreetingResult;

    fn reduce(state: Self::State, result: Self::Result) -> Self::State {
        state.with_hello_message(result.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::greeting::GreetingError;

    #[test]
    fn created_replaces_message() {
        let state = GreetingReducer::reduce(
            GreetingViewState::idle(),
            GreetingResult::Created {
                message: "Hello A".to_string(),
            },
        );
        assert_eq!(state.hello_message, "Hello A");
    }

    #[test]
    fn failed_shows_error_message() {
        let previous = GreetingViewState::idle().with_hello_message("Hello A");
        let state = GreetingReducer::reduce(
            previous,
            GreetingResult::Failed {
                error: GreetingError::EmptyName,
            },
        );
        assert_eq!(state.hello_message, "Name is empty!");
    }

    #[test]
    fn label_is_display_text_of_result() {
        for result in [
            GreetingResult::Created {
                message: "Hello Kai".to_string(),
            },
            GreetingResult::Failed {
                error: GreetingError::EmptyName,
            },
        ] {
            let expected = result.display_text();
            let state = GreetingReducer::reduce(GreetingViewState::idle(), result);
            assert_eq!(state.hello_message, expected);
        }
    }

    #[test]
    fn fold_depends_only_on_last_result() {
        let results = vec![
            GreetingResult::Created {
                message: "Hello A".to_string(),
            },
            GreetingResult::Failed {
                error: GreetingError::EmptyName,
            },
            GreetingResult::Created {
                message: "Hello B".to_string(),
            },
        ];
        let state = results
            .into_iter()
            .fold(GreetingViewState::idle(), GreetingReducer::reduce);
        assert_eq!(state.hello_message, "Hello B");
    }
}
