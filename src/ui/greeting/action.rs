use crate::ui::mvi::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingAction {
    CreateGreeting { name: String },
}

impl Action for GreetingAction {}
