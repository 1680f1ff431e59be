use crate::ui::mvi::Interpreter;

use super::action::GreetingAction;
use super::intent::GreetingIntent;

/// Name greeted when the screen starts.
pub const DEFAULT_NAME: &str = "DroidKaigi";

pub struct GreetingInterpreter;

impl Interpreter for GreetingInterpreter {
    type Intent = GreetingIntent;
    type Action = GreetingAction;

    fn interpret(intent: Self::Intent) -> Self::Action {
        match intent {
            GreetingIntent::Initial => GreetingAction::CreateGreeting {
                name: DEFAULT_NAME.to_string(),
            },
            GreetingIntent::Submit { text } => GreetingAction::CreateGreeting { name: text },
        }
    }
}
