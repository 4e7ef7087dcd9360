//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, text edits)
/// - Completion events (API responses re-entering the reducer)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
