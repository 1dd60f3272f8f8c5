//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (form edits, submit, delete)
/// - System events (an API call resolving or failing)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
