/// Marker trait for intents fed into a [`Reducer`](super::Reducer).
///
/// Intents are produced by key presses and by the countdown timer.
pub trait Intent: Send + 'static {}
