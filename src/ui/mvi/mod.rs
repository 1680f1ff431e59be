//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Interpreter ──→ Action ──→ Processor ──→ Result ──→ Reducer ──→ State ──→ View
//!    ↑                                                                                  │
//!    └──────────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Intent**: User actions or system events
//! - **Action**: Pure request derived from an intent
//! - **Result**: Outcome of executing exactly one action
//! - **State**: Immutable representation of UI state, folded from results
//! - **ReplayLatest**: Latest-state cell that replays the current value to new subscribers

mod action;
mod intent;
mod interpreter;
mod processor;
mod reducer;
mod replay;
mod result;
mod state;

pub use action::Action;
pub use intent::Intent;
pub use interpreter::Interpreter;
pub use processor::Processor;
pub use reducer::Reducer;
pub use replay::{ReplayLatest, Subscription};
pub use result::TaskResult;
pub use state::UiState;
