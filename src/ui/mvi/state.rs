//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Idle by default (Default is the value before any result is folded)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
