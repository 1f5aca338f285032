use super::intent::Intent;
use super::state::UiState;

/// The single place where state transitions happen. `reduce` must be a
/// pure function of `(state, intent)` with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
