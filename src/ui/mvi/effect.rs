//! Base trait for effects (requested side effects) in MVI architecture.

/// Marker trait for effect objects.
///
/// An effect describes work the reducer cannot do itself (a network
/// call, for example). Reducers stay pure: they only *request* the
/// effect; an owner executes it and dispatches the outcome back as a
/// completion intent.
pub trait Effect: Send + 'static {}
