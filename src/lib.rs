//! Big Red Button: press it, watch a three second countdown, enjoy the boom.
//!
//! The behavioral core lives in [`machine`] and [`timer`] and has no
//! knowledge of rendering. The [`animation`] presenter subscribes to the
//! transitions the machine emits, and [`ui`] draws both into a terminal.

pub mod animation;
pub mod config;
pub mod logging;
pub mod machine;
pub mod mvi;
pub mod timer;
pub mod ui;
