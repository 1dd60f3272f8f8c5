//! Base trait for reducer-owned state.

/// Marker trait for state objects.
///
/// States should be:
/// - Cheap to clone (views render from clones)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
