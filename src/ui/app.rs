use std::time::Instant;
use tracing::{debug, info};

use crate::animation::{AnimationFrame, Presenter};
use crate::config::AnimationConfig;
use crate::machine::{ButtonIntent, ButtonMachine, ButtonState, Transition};
use crate::timer::{CountdownTimer, TickToken};

pub struct App {
    should_quit: bool,
    machine: ButtonMachine,
    /// Countdown wait (resource, managed outside the reducer).
    timer: CountdownTimer,
    presenter: Presenter,
    last_transition: Option<Transition>,
}

impl App {
    pub fn new(timer: CountdownTimer, animation: AnimationConfig) -> Self {
        Self {
            should_quit: false,
            machine: ButtonMachine::new(),
            timer,
            presenter: Presenter::new(animation),
            last_transition: None,
        }
    }

    pub fn state(&self) -> &ButtonState {
        self.machine.state()
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stops the loop. Any pending countdown wait is dropped immediately.
    pub fn request_quit(&mut self) {
        self.timer.cancel();
        self.should_quit = true;
    }

    /// Primary control: starts the countdown or, after the explosion, resets.
    pub fn activate(&mut self, now: Instant) -> Option<Transition> {
        self.dispatch(ButtonIntent::Activate, now)
    }

    pub fn reset(&mut self, now: Instant) -> Option<Transition> {
        self.dispatch(ButtonIntent::Reset, now)
    }

    /// Timer firing. Tokens that are no longer armed are discarded.
    pub fn on_timer(&mut self, token: TickToken, now: Instant) -> Option<Transition> {
        if !self.timer.accept(token) {
            debug!(%token, "stale countdown tick ignored");
            return None;
        }
        self.dispatch(ButtonIntent::Elapsed, now)
    }

    pub fn dispatch(&mut self, intent: ButtonIntent, now: Instant) -> Option<Transition> {
        let Some(transition) = self.machine.dispatch(intent) else {
            debug!(?intent, phase = %self.state().phase(), "intent ignored");
            return None;
        };

        if transition.keeps_timer_armed() {
            let token = self.timer.arm();
            debug!(%token, "countdown tick armed");
        } else {
            self.timer.cancel();
        }

        let state = self.machine.state();
        info!(
            ?transition,
            phase = %state.phase(),
            countdown = state.countdown().value(),
            "state changed"
        );

        self.presenter.on_transition(transition, now);
        self.last_transition = Some(transition);
        Some(transition)
    }

    pub fn frame(&self, now: Instant) -> AnimationFrame {
        self.presenter.frame(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.presenter.is_animating(now)
    }
}
