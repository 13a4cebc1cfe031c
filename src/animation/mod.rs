//! Presentation-only animation.
//!
//! Nothing here reads or writes [`ButtonState`](crate::machine::ButtonState).
//! The [`Presenter`] reacts to [`Transition`](crate::machine::Transition)s and
//! is sampled once per frame by the renderer.

mod effects;
mod presenter;
mod tween;

pub use effects::{ExplosionEffect, ParticleFrame, PressFeedback};
pub use presenter::{AnimationFrame, Presenter};
pub use tween::{Easing, Track};
