//! One-shot countdown timer with stale-firing protection.
//!
//! Every [`CountdownTimer::arm`] issues a fresh [`TickToken`]. A firing is
//! only honored if its token is still the armed one, so a callback that was
//! already in flight when the timer was cancelled or re-armed is dropped.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Identifies one armed wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

impl fmt::Display for TickToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick#{}", self.0)
    }
}

/// Delivers a token back to the event loop once its wait is over.
pub type TickSink = Arc<dyn Fn(TickToken) + Send + Sync + 'static>;

/// Backend that performs the actual wait.
///
/// At most one wait is outstanding: `schedule` replaces any earlier one.
pub trait TickScheduler: Send {
    fn schedule(&mut self, token: TickToken, after: Duration);
    fn cancel(&mut self);
}

/// Waits with `tokio::time::sleep` on a runtime handle.
pub struct TokioTickScheduler {
    handle: Handle,
    sink: TickSink,
    task: Option<JoinHandle<()>>,
}

impl TokioTickScheduler {
    pub fn new(handle: Handle, sink: TickSink) -> Self {
        Self {
            handle,
            sink,
            task: None,
        }
    }
}

impl TickScheduler for TokioTickScheduler {
    fn schedule(&mut self, token: TickToken, after: Duration) {
        self.cancel();
        let sink = Arc::clone(&self.sink);
        self.task = Some(self.handle.spawn(async move {
            tokio::time::sleep(after).await;
            sink(token);
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioTickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub struct CountdownTimer {
    scheduler: Box<dyn TickScheduler>,
    period: Duration,
    generation: u64,
    armed: Option<TickToken>,
}

impl CountdownTimer {
    pub fn new(scheduler: Box<dyn TickScheduler>, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            generation: 0,
            armed: None,
        }
    }

    pub fn armed(&self) -> Option<TickToken> {
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Schedules one period from now, superseding any pending wait.
    pub fn arm(&mut self) -> TickToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TickToken(self.generation);
        self.armed = Some(token);
        self.scheduler.schedule(token, self.period);
        token
    }

    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            self.scheduler.cancel();
        }
    }

    /// Consumes a firing. Returns false for tokens that are no longer armed.
    pub fn accept(&mut self, token: TickToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::mpsc;

    #[derive(Default)]
    struct Calls {
        scheduled: Vec<TickToken>,
        cancels: usize,
    }

    struct Recording(Arc<Mutex<Calls>>);

    impl TickScheduler for Recording {
        fn schedule(&mut self, token: TickToken, _after: Duration) {
            self.0.lock().scheduled.push(token);
        }

        fn cancel(&mut self) {
            self.0.lock().cancels += 1;
        }
    }

    fn recording_timer() -> (CountdownTimer, Arc<Mutex<Calls>>) {
        let calls = Arc::new(Mutex::new(Calls::default()));
        let timer = CountdownTimer::new(
            Box::new(Recording(Arc::clone(&calls))),
            Duration::from_secs(1),
        );
        (timer, calls)
    }

    #[test]
    fn each_arm_gets_a_new_token() {
        let (mut timer, calls) = recording_timer();
        let first = timer.arm();
        let second = timer.arm();
        assert_ne!(first, second);
        assert_eq!(calls.lock().scheduled, vec![first, second]);
        assert_eq!(timer.armed(), Some(second));
    }

    #[test]
    fn superseded_token_is_rejected() {
        let (mut timer, _) = recording_timer();
        let stale = timer.arm();
        let current = timer.arm();
        assert!(!timer.accept(stale));
        assert!(timer.accept(current));
        assert!(!timer.is_armed());
    }

    #[test]
    fn token_is_accepted_once() {
        let (mut timer, _) = recording_timer();
        let token = timer.arm();
        assert!(timer.accept(token));
        assert!(!timer.accept(token));
    }

    #[test]
    fn cancel_rejects_pending_token() {
        let (mut timer, calls) = recording_timer();
        let token = timer.arm();
        timer.cancel();
        assert!(!timer.accept(token));
        assert_eq!(calls.lock().cancels, 1);
    }

    #[test]
    fn cancel_when_idle_does_not_touch_scheduler() {
        let (mut timer, calls) = recording_timer();
        timer.cancel();
        assert_eq!(calls.lock().cancels, 0);
    }

    #[test]
    fn drop_cancels_pending_wait() {
        let (mut timer, calls) = recording_timer();
        timer.arm();
        drop(timer);
        assert_eq!(calls.lock().cancels, 1);
    }

    fn channel_sink() -> (TickSink, mpsc::Receiver<TickToken>) {
        let (tx, rx) = mpsc::channel();
        let sink: TickSink = Arc::new(move |token| {
            let _ = tx.send(token);
        });
        (sink, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_fires_after_period() {
        let (sink, rx) = channel_sink();
        let scheduler = TokioTickScheduler::new(Handle::current(), sink);
        let mut timer = CountdownTimer::new(Box::new(scheduler), Duration::from_millis(1000));
        let token = timer.arm();

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv().ok(), Some(token));
        assert!(timer.accept(token));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_cancel_prevents_firing() {
        let (sink, rx) = channel_sink();
        let scheduler = TokioTickScheduler::new(Handle::current(), sink);
        let mut timer = CountdownTimer::new(Box::new(scheduler), Duration::from_millis(1000));
        timer.arm();
        timer.cancel();

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_rearm_replaces_pending_wait() {
        let (sink, rx) = channel_sink();
        let scheduler = TokioTickScheduler::new(Handle::current(), sink);
        let mut timer = CountdownTimer::new(Box::new(scheduler), Duration::from_millis(1000));
        timer.arm();
        tokio::time::sleep(Duration::from_millis(500)).await;
        let second = timer.arm();

        tokio::time::sleep(Duration::from_millis(1100)).await;
        let fired: Vec<TickToken> = rx.try_iter().collect();
        assert_eq!(fired, vec![second]);
    }
}
