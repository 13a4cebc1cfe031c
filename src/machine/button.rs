use crate::machine::intent::ButtonIntent;
use crate::machine::reducer::ButtonReducer;
use crate::machine::state::ButtonState;
use crate::machine::transition::Transition;
use crate::mvi::Reducer;

/// Holds the current [`ButtonState`] and reports what each intent did.
#[derive(Debug, Default)]
pub struct ButtonMachine {
    state: ButtonState,
}

impl ButtonMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ButtonState {
        &self.state
    }

    /// Runs the reducer and returns the transition taken, if any.
    pub fn dispatch(&mut self, intent: ButtonIntent) -> Option<Transition> {
        let next = ButtonReducer::reduce(self.state, intent);
        let transition = Transition::between(&self.state, &next);
        self.state = next;
        transition
    }
}
