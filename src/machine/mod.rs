//! Countdown/explosion state machine.
//!
//! `Initial → Countdown[3] → … → Countdown[0] → Explosion → Initial`.
//! The reducer is pure; [`ButtonMachine`] wraps it and reports each move as a
//! [`Transition`] so timers and animations can react without touching state.

mod button;
mod intent;
mod reducer;
mod state;
mod transition;

pub use button::ButtonMachine;
pub use intent::ButtonIntent;
pub use reducer::ButtonReducer;
pub use state::{ButtonState, Countdown, Phase};
pub use transition::Transition;
