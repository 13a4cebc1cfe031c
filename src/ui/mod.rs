//! Terminal front end.
//!
//! [`runtime::run`] owns the terminal and the event loop; [`app::App`] glues
//! the state machine, the countdown timer and the animation presenter.

pub mod app;
pub mod big_digits;
pub mod events;
pub mod explosion;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
