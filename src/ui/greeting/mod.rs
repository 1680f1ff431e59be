//! Greeting screen feature module.
//!
//! Turns button taps into a greeting label.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `intent.rs` - Screen events (Initial, Submit)
//! - `action.rs` - Work requests (CreateGreeting)
//! - `result.rs` - Outcomes (Created, Failed)
//! - `state.rs` - The view state rendered by the screen
//! - `gate.rs` - Admits only the first Initial intent
//! - `interpreter.rs`, `processor.rs`, `reducer.rs` - Pure pipeline stages
//! - `view_model.rs` - Runs the stages on one task and republishes the latest state

mod action;
mod gate;
mod intent;
mod interpreter;
mod processor;
mod reducer;
mod result;
mod state;
mod view_model;

pub use action::GreetingAction;
pub use gate::IntentGate;
pub use intent::GreetingIntent;
pub use interpreter::{GreetingInterpreter, DEFAULT_NAME};
pub use processor::GreetingProcessor;
pub use reducer::GreetingReducer;
pub use result::{GreetingError, GreetingResult};
pub use state::GreetingViewState;
pub use view_model::{GreetingViewModel, IntentSender, IntentStream, StateSubscription};
