use crate::config::Config;
use crate::timer::{CountdownTimer, TokioTickScheduler};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;
use tokio::runtime::Handle;
use tracing::info;

/// Runs the UI on the calling thread until the user quits.
///
/// `handle` drives the countdown waits; everything else stays on this thread.
pub fn run(config: &Config, handle: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let frame_rate = config.timing.frame();
    let events = EventHandler::new(frame_rate);
    let scheduler = TokioTickScheduler::new(handle, events.tick_sink());
    let timer = CountdownTimer::new(Box::new(scheduler), config.timing.tick());
    let mut app = App::new(timer, config.animation.clone());
    info!(
        tick_ms = config.timing.tick_ms,
        frame_ms = config.timing.frame_ms,
        "ui started"
    );

    loop {
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() {
            break;
        }

        match events.next(frame_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            // Layout is taken from the frame area on every draw
            Ok(AppEvent::Frame) => {}
            Ok(AppEvent::CountdownElapsed(token)) => {
                app.on_timer(token, Instant::now());
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Timer first, so no wait outlives the UI
    drop(app);
    drop(events);
    drop(guard);
    info!("ui stopped");
    Ok(())
}
