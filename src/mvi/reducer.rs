use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `reduce` must be total: an intent with no meaning in the current state
/// returns the state unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
