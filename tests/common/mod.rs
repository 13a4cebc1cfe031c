//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use big_red_button::config::{AnimationConfig, Config};
use big_red_button::machine::{ButtonState, Countdown};
use big_red_button::timer::{CountdownTimer, TickScheduler, TickToken};
use big_red_button::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// What the app asked the scheduler to do.
#[derive(Debug, Default)]
pub struct SchedulerLog {
    pub scheduled: Vec<(TickToken, Duration)>,
    pub cancels: usize,
}

impl SchedulerLog {
    pub fn last_token(&self) -> Option<TickToken> {
        self.scheduled.last().map(|(token, _)| *token)
    }
}

pub type SharedLog = Arc<Mutex<SchedulerLog>>;

/// Scheduler that never fires on its own; tests deliver tokens by hand.
pub struct ManualScheduler {
    log: SharedLog,
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, token: TickToken, after: Duration) {
        self.log.lock().scheduled.push((token, after));
    }

    fn cancel(&mut self) {
        self.log.lock().cancels += 1;
    }
}

pub fn manual_timer() -> (CountdownTimer, SharedLog) {
    let log = SharedLog::default();
    let scheduler = ManualScheduler {
        log: Arc::clone(&log),
    };
    (
        CountdownTimer::new(Box::new(scheduler), Duration::from_secs(1)),
        log,
    )
}

pub fn make_app() -> (App, SharedLog) {
    let (timer, log) = manual_timer();
    (App::new(timer, AnimationConfig::default()), log)
}

/// Fires whatever token the app armed last.
pub fn fire_pending(app: &mut App, log: &SharedLog) -> Option<big_red_button::machine::Transition> {
    let token = log.lock().last_token().expect("nothing was scheduled");
    app.on_timer(token, std::time::Instant::now())
}

pub fn counting(value: u8) -> ButtonState {
    ButtonState::Countdown {
        remaining: Countdown::new(value).expect("countdown in range"),
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Writes `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn default_config() -> Config {
    Config::default()
}
