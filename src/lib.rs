//! hello-mvi: a Model-View-Intent greeting screen for the terminal.
//!
//! A text field, a button and a label. Tapping the button produces an
//! intent that flows through `intent → action → result → state`; the
//! screen re-renders from the latest state.
//!
//! - [`ui::mvi`] - MVI primitives shared by features
//! - [`ui::greeting`] - the greeting feature and its view model
//! - [`ui::app`] - the view/controller bound to the view model
//! - [`config`], [`logging`], [`shutdown`] - process plumbing

pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
