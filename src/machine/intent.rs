use crate::mvi::Intent;

/// Intents understood by [`ButtonReducer`](super::ButtonReducer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonIntent {
    /// Primary control pressed. Starts the countdown from `Initial`, resets
    /// from `Explosion`, ignored while counting down.
    Activate,

    /// Dedicated reset control. Only meaningful in `Explosion`.
    Reset,

    /// One timer period elapsed.
    Elapsed,
}

impl Intent for ButtonIntent {}
