//! Base trait for action outcomes in MVI architecture.

/// Marker trait for the outcome of executing one action.
///
/// Failures are modeled as ordinary variants of the implementing type,
/// so they flow through the reducer like any other result.
pub trait TaskResult: Send + 'static {}
