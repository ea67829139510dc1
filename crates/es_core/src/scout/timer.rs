//! Wall-clock tick scheduling for the match clock.
//!
//! The clock itself is synchronous; this module supplies the one autonomous
//! activity in the system, a repeating 1-second tick applied to a shared
//! session. Starting yields a [`TickDriver`] handle; dropping or stopping it
//! cancels the schedule. Cancellation is acknowledged synchronously: `stop`
//! joins the timer thread, so once it returns no further tick can apply.
//!
//! A tick that fires while cancellation is in flight re-checks
//! `clock.is_running()` under the session lock before applying, so a paused
//! or reset session never advances.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::scout::session::ScoutSession;

/// Fixed tick period: one second of wall-clock time per tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Shared handle to session state, as seen by the timer thread.
pub type SharedSession = Arc<Mutex<ScoutSession>>;

/// Cancellable handle to a running tick schedule.
pub struct TickDriver {
    stop_tx: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl TickDriver {
    /// Spawn a timer thread ticking `session` at [`TICK_INTERVAL`].
    pub fn spawn(session: SharedSession) -> Self {
        Self::spawn_with_interval(session, TICK_INTERVAL)
    }

    /// Spawn with an explicit period. Production uses [`TICK_INTERVAL`];
    /// tests shrink it to keep wall-clock time down.
    pub fn spawn_with_interval(session: SharedSession, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let thread = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    let mut state = match session.lock() {
                        Ok(state) => state,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    // Running flag is re-checked here so a tick racing a
                    // pause/reset never applies.
                    if state.clock.is_running() {
                        state.clock.tick();
                        log::trace!("tick -> {}", state.clock.display());
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self { stop_tx, thread: Some(thread) }
    }

    /// Cancel the schedule and wait for the timer thread to exit. After this
    /// returns, no further tick will be applied.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// A scout session paired with its tick schedule.
///
/// Owns the shared state plus the driver handle, so `start`/`pause`/`reset`
/// keep the running flag and the scheduled task in lockstep.
#[derive(Default)]
pub struct LiveSession {
    state: SharedSession,
    driver: Option<TickDriver>,
    interval: Option<Duration>,
}

impl LiveSession {
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(ScoutSession::new())), driver: None, interval: None }
    }

    /// Override the tick period (test hook).
    pub fn with_interval(interval: Duration) -> Self {
        let mut session = Self::new();
        session.interval = Some(interval);
        session
    }

    /// Clone of the shared state handle for callers that need direct access.
    pub fn state(&self) -> SharedSession {
        Arc::clone(&self.state)
    }

    /// Lock the session state for a synchronous mutation or read.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, ScoutSession> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Start the clock and the repeating tick. No-op if already running.
    pub fn start_clock(&mut self) {
        self.lock().clock.start();
        if self.driver.is_none() {
            let interval = self.interval.unwrap_or(TICK_INTERVAL);
            self.driver = Some(TickDriver::spawn_with_interval(self.state(), interval));
        }
    }

    /// Pause the clock and cancel the scheduled tick. No-op if paused.
    pub fn pause_clock(&mut self) {
        self.lock().clock.pause();
        if let Some(driver) = self.driver.take() {
            driver.stop();
        }
    }

    /// Stop the schedule and restore the clock to zero.
    pub fn reset_clock(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.stop();
        }
        self.lock().clock.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: Duration = Duration::from_millis(5);

    fn settle() {
        // Generous headroom over the 5ms tick so counts are stable even on
        // a loaded test machine.
        thread::sleep(Duration::from_millis(120));
    }

    #[test]
    fn ticks_accumulate_while_running() {
        let mut live = LiveSession::with_interval(FAST);
        live.start_clock();
        settle();
        live.pause_clock();
        let seconds = {
            let state = live.lock();
            state.clock.minutes() * 60 + state.clock.seconds()
        };
        assert!(seconds >= 2, "expected at least 2 ticks, got {seconds}");
    }

    #[test]
    fn no_tick_applies_after_pause() {
        let mut live = LiveSession::with_interval(FAST);
        live.start_clock();
        settle();
        live.pause_clock();
        let frozen = live.lock().clock;
        settle();
        assert_eq!(live.lock().clock, frozen);
        assert!(!frozen.is_running());
    }

    #[test]
    fn reset_stops_schedule_and_zeroes_clock() {
        let mut live = LiveSession::with_interval(FAST);
        live.start_clock();
        settle();
        live.reset_clock();
        let clock = live.lock().clock;
        assert_eq!(clock.minutes(), 0);
        assert_eq!(clock.seconds(), 0);
        assert!(!clock.is_running());
        settle();
        assert_eq!(live.lock().clock.seconds(), 0);
    }

    #[test]
    fn start_is_idempotent() {
        let mut live = LiveSession::with_interval(FAST);
        live.start_clock();
        live.start_clock();
        settle();
        live.pause_clock();
        // A second start must not have spawned a second driver; after pause
        // the clock stays frozen.
        let frozen = live.lock().clock;
        settle();
        assert_eq!(live.lock().clock, frozen);
    }

    #[test]
    fn driver_ignores_paused_clock() {
        let live = LiveSession::with_interval(FAST);
        // Spawn a driver without starting the clock: ticks must not apply.
        let _driver = TickDriver::spawn_with_interval(live.state(), FAST);
        settle();
        assert_eq!(live.lock().clock.seconds(), 0);
    }
}
