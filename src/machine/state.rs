use crate::mvi::UiState;
use std::fmt;

/// Seconds left on the countdown, always in `0..=Countdown::FULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Countdown(u8);

impl Countdown {
    /// Value the countdown starts from.
    pub const FULL: u8 = 3;

    pub const fn full() -> Self {
        Self(Self::FULL)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns `None` for values above [`Countdown::FULL`].
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::FULL).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// One second less, or `None` once the countdown has hit zero.
    pub fn next(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Initial,
    Countdown,
    Explosion,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Initial => "initial",
            Phase::Countdown => "countdown",
            Phase::Explosion => "explosion",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application state owned by the button machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Waiting for the first press.
    #[default]
    Initial,
    /// Counting down; one timer period per step.
    Countdown { remaining: Countdown },
    /// Countdown finished; only a reset leaves this state.
    Explosion,
}

impl UiState for ButtonState {}

impl ButtonState {
    pub fn phase(&self) -> Phase {
        match self {
            ButtonState::Initial => Phase::Initial,
            ButtonState::Countdown { .. } => Phase::Countdown,
            ButtonState::Explosion => Phase::Explosion,
        }
    }

    /// Countdown value as the screen would show it.
    ///
    /// Full before the countdown starts and zero after it has run out.
    pub fn countdown(&self) -> Countdown {
        match self {
            ButtonState::Initial => Countdown::full(),
            ButtonState::Countdown { remaining } => *remaining,
            ButtonState::Explosion => Countdown::zero(),
        }
    }

    pub fn is_counting_down(&self) -> bool {
        matches!(self, ButtonState::Countdown { .. })
    }

    /// Caption under the big number while counting down.
    pub fn countdown_label(&self) -> Option<&'static str> {
        match self {
            ButtonState::Countdown { remaining } if remaining.value() == 1 => Some("BOOM!"),
            ButtonState::Countdown { .. } => Some("Get ready..."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initial_with_full_countdown() {
        let state = ButtonState::default();
        assert_eq!(state.phase(), Phase::Initial);
        assert_eq!(state.countdown().value(), Countdown::FULL);
    }

    #[test]
    fn countdown_rejects_out_of_range() {
        assert!(Countdown::new(4).is_none());
        assert_eq!(Countdown::new(3), Some(Countdown::full()));
        assert_eq!(Countdown::new(0), Some(Countdown::zero()));
    }

    #[test]
    fn next_stops_at_zero() {
        let mut countdown = Countdown::full();
        let mut seen = vec![countdown.value()];
        while let Some(next) = countdown.next() {
            countdown = next;
            seen.push(countdown.value());
        }
        assert_eq!(seen, vec![3, 2, 1, 0]);
        assert!(countdown.is_zero());
    }

    #[test]
    fn label_says_boom_at_one() {
        let at = |v| ButtonState::Countdown {
            remaining: Countdown::new(v).unwrap(),
        };
        assert_eq!(at(3).countdown_label(), Some("Get ready..."));
        assert_eq!(at(1).countdown_label(), Some("BOOM!"));
        assert_eq!(at(0).countdown_label(), Some("Get ready..."));
        assert_eq!(ButtonState::Explosion.countdown_label(), None);
    }

    #[test]
    fn explosion_reports_zero() {
        assert!(ButtonState::Explosion.countdown().is_zero());
    }
}
