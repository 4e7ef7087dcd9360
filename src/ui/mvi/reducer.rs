//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Option<Effect>).
/// The optional effect is a description of async work for the caller to
/// run; the reducer itself performs no I/O.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The side-effect type a reduction may request.
    type Effect: Effect;

    /// Process an intent and return the new state plus any requested effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
