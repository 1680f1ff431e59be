//! Base trait for intents (user/system events) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button taps, key presses)
/// - Lifecycle events (screen start)
///
/// Intents are interpreted into actions; they are never stored.
pub trait Intent: Send + 'static {}
