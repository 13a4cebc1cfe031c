use crate::machine::state::{ButtonState, Countdown};

/// A state change reported by [`ButtonMachine`](super::ButtonMachine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `Initial → Countdown[3]`.
    Started,
    /// `Countdown[n] → Countdown[n - 1]`.
    Ticked { remaining: Countdown },
    /// `Countdown[0] → Explosion`.
    Exploded,
    /// `Explosion → Initial`.
    Reset,
}

impl Transition {
    /// Classifies the move from `old` to `new`; `None` if nothing changed.
    pub fn between(old: &ButtonState, new: &ButtonState) -> Option<Self> {
        match (old, new) {
            (ButtonState::Initial, ButtonState::Countdown { .. }) => Some(Transition::Started),
            (ButtonState::Countdown { remaining: before }, ButtonState::Countdown { remaining })
                if before != remaining =>
            {
                Some(Transition::Ticked {
                    remaining: *remaining,
                })
            }
            (ButtonState::Countdown { .. }, ButtonState::Explosion) => Some(Transition::Exploded),
            (ButtonState::Explosion, ButtonState::Initial) => Some(Transition::Reset),
            _ => None,
        }
    }

    /// True when the new state waits on another timer period.
    pub fn keeps_timer_armed(&self) -> bool {
        matches!(self, Transition::Started | Transition::Ticked { .. })
    }
}
