use tokio::sync::mpsc;

use crate::ui::greeting::{
    GreetingIntent, GreetingViewModel, GreetingViewState, IntentSender, IntentStream,
    StateSubscription,
};
use crate::ui::text_field::TextField;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    TextField,
    Button,
}

/// View/controller of the greeting screen.
///
/// Owns the text field, the button focus and the label. It does no
/// validation: taps are forwarded as intents and the label only ever shows
/// what the view model publishes.
pub struct App {
    should_quit: bool,
    focus: Focus,
    text_field: TextField,
    label: String,
    /// Tap source of the intent stream handed out by [`App::intents`].
    taps: Option<IntentSender>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::TextField,
            text_field: TextField::new(),
            label: String::new(),
            taps: None,
        }
    }

    /// Bind the screen to a view model.
    ///
    /// Subscribes to its states first, then connects this screen's intents.
    /// The returned subscription feeds [`App::render`]; dropping it detaches
    /// the screen.
    pub fn start(&mut self, view_model: &GreetingViewModel) -> StateSubscription {
        let states = view_model.state();
        view_model.process_intents(self.intents());
        tracing::info!(
            subscribers = view_model.subscriber_count(),
            "Greeting screen bound to view model"
        );
        states
    }

    /// Intents produced by this screen.
    ///
    /// Yields `Initial` immediately, then one `Submit` per button tap for as
    /// long as the screen lives.
    pub fn intents(&mut self) -> IntentStream {
        let (tx, rx) = mpsc::unbounded_channel();
        if tx.send(GreetingIntent::Initial).is_err() {
            tracing::warn!("Intent stream closed before the initial intent");
        }
        self.taps = Some(tx);
        rx
    }

    /// Show the latest view state.
    pub fn render(&mut self, state: &GreetingViewState) {
        self.label.clone_from(&state.hello_message);
    }

    /// Button tap: submit the text field contents as they are right now.
    pub fn tap_button(&mut self) {
        let Some(taps) = &self.taps else {
            tracing::warn!("Button tapped before the screen was started");
            return;
        };
        let intent = GreetingIntent::Submit {
            text: self.text_field.text().to_string(),
        };
        if taps.send(intent).is_err() {
            tracing::warn!("Intent stream closed, tap dropped");
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text_field(&self) -> &TextField {
        &self.text_field
    }

    pub fn text_field_mut(&mut self) -> &mut TextField {
        &mut self.text_field
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::TextField => Focus::Button,
            Focus::Button => Focus::TextField,
        };
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.focus == Focus::TextField {
            self.text_field.insert_str(text);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_start_with_initial() {
        let mut app = App::new();
        let mut intents = app.intents();
        assert_eq!(intents.try_recv().ok(), Some(GreetingIntent::Initial));
        assert!(intents.try_recv().is_err());
    }

    #[test]
    fn tap_reads_text_field_at_tap_time() {
        let mut app = App::new();
        let mut intents = app.intents();
        let _ = intents.try_recv();

        app.text_field_mut().insert_str("A");
        app.tap_button();
        app.text_field_mut().insert_str("B");
        app.tap_button();

        assert_eq!(
            intents.try_recv().ok(),
            Some(GreetingIntent::Submit {
                text: "A".to_string()
            })
        );
        assert_eq!(
            intents.try_recv().ok(),
            Some(GreetingIntent::Submit {
                text: "AB".to_string()
            })
        );
    }

    #[test]
    fn tap_before_start_is_ignored() {
        let mut app = App::new();
        app.tap_button();
        assert_eq!(app.label(), "");
    }

    #[test]
    fn render_sets_label() {
        let mut app = App::new();
        app.render(&GreetingViewState::idle().with_hello_message("Hello X"));
        assert_eq!(app.label(), "Hello X");
    }

    #[test]
    fn focus_cycles_and_paste_only_into_text_field() {
        let mut app = App::new();
        assert_eq!(app.focus(), Focus::TextField);
        app.on_paste("hi");
        app.focus_next();
        assert_eq!(app.focus(), Focus::Button);
        app.on_paste("ignored");
        assert_eq!(app.text_field().text(), "hi");
        app.focus_next();
        assert_eq!(app.focus(), Focus::TextField);
    }
}
