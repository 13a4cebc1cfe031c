use crate::machine::intent::ButtonIntent;
use crate::machine::state::{ButtonState, Countdown};
use crate::mvi::Reducer;

pub struct ButtonReducer;

impl Reducer for ButtonReducer {
    type State = ButtonState;
    type Intent = ButtonIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (ButtonState::Initial, ButtonIntent::Activate) => ButtonState::Countdown {
                remaining: Countdown::full(),
            },
            (ButtonState::Countdown { remaining }, ButtonIntent::Elapsed) => {
                match remaining.next() {
                    Some(remaining) => ButtonState::Countdown { remaining },
                    None => ButtonState::Explosion,
                }
            }
            (ButtonState::Explosion, ButtonIntent::Activate | ButtonIntent::Reset) => {
                ButtonState::Initial
            }
            (other, _) => other,
        }
    }
}
