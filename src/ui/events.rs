use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::error;

use crate::timer::{TickSink, TickToken};

/// Upper bound on one crossterm poll, so the pump notices `stop` promptly.
const POLL_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Redraw interval elapsed. Terminal resizes are reported as this too.
    Frame,
    /// Countdown wait finished. Tagged so stale firings can be dropped.
    CountdownElapsed(TickToken),
}

/// Sink that turns countdown firings into [`AppEvent::CountdownElapsed`].
pub fn countdown_sink(tx: Sender<AppEvent>) -> TickSink {
    Arc::new(move |token| {
        let _ = tx.send(AppEvent::CountdownElapsed(token));
    })
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    stop: Arc<AtomicBool>,
    pump: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(frame_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let pump = thread::spawn(move || {
            let mut last_frame = Instant::now();
            while !thread_stop.load(Ordering::Relaxed) {
                let timeout = frame_rate
                    .saturating_sub(last_frame.elapsed())
                    .min(POLL_SLICE);

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        // Layout comes from the frame area, so a redraw is enough
                        Ok(Event::Resize(..)) => {
                            if event_tx.send(AppEvent::Frame).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            error!(%err, "failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        error!(%err, "failed to poll terminal events");
                        break;
                    }
                }

                if last_frame.elapsed() >= frame_rate {
                    if event_tx.send(AppEvent::Frame).is_err() {
                        break;
                    }
                    last_frame = Instant::now();
                }
            }
        });

        Self {
            rx,
            tx,
            stop,
            pump: Some(pump),
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sink that feeds countdown firings into this event queue.
    pub fn tick_sink(&self) -> TickSink {
        countdown_sink(self.tx.clone())
    }

    /// Signals the input pump and waits for it to exit. Idempotent.
    pub fn stop_pump(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(pump) = self.pump.take() {
            if pump.join().is_err() {
                error!("input pump panicked");
            }
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop_pump();
    }
}
