//! Base trait for actions in MVI architecture.

/// Marker trait for action objects.
///
/// An action is a request to compute something. It carries its inputs
/// but never its outcome.
pub trait Action: Send + 'static {}
