//! Intent gating.

use super::intent::GreetingIntent;

/// Admits the first `Initial` intent and every `Submit`.
///
/// Later `Initial` intents are dropped for the lifetime of the gate, so the
/// default greeting is computed at most once.
#[derive(Debug, Default)]
pub struct IntentGate {
    initial_admitted: bool,
}

impl IntentGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the intent if it may proceed, `None` if it is dropped.
    pub fn admit(&mut self, intent: GreetingIntent) -> Option<GreetingIntent> {
        match intent {
            GreetingIntent::Initial if self.initial_admitted => None,
            GreetingIntent::Initial => {
                self.initial_admitted = true;
                Some(GreetingIntent::Initial)
            }
            submit @ GreetingIntent::Submit { .. } => Some(submit),
        }
    }

    pub fn initial_admitted(&self) -> bool {
        self.initial_admitted
    }
}
