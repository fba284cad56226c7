//! Timing module - clock capability and the game stopwatch
//!
//! The engine never reads system time directly. It asks a [`Clock`], which is
//! [`SystemClock`] in the terminal app and [`ManualClock`] in tests, so timing
//! behavior can be exercised with simulated time instead of real delays.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::types::{ElapsedTime, DISPLAY_SAMPLE_MS};

/// Source of monotonic and wall-clock time.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never decreases.
    fn now_ms(&self) -> u64;

    /// Current local date and time, used to stamp history entries.
    fn local_now(&self) -> DateTime<Local>;
}

/// Real time: `Instant` for durations, `chrono::Local` for timestamps.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn local_now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Simulated clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the engine.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: Rc<Cell<u64>>,
    wall_origin: DateTime<Local>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::with_wall_origin(Local::now())
    }

    /// Start at `0ms`, with `local_now()` reporting `wall_origin` plus elapsed time.
    pub fn with_wall_origin(wall_origin: DateTime<Local>) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(0)),
            wall_origin,
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }

    /// Jump to an absolute time. Moving backwards is ignored.
    pub fn set(&self, ms: u64) {
        if ms > self.now_ms.get() {
            self.now_ms.set(ms);
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    fn local_now(&self) -> DateTime<Local> {
        self.wall_origin + chrono::Duration::milliseconds(self.now_ms.get() as i64)
    }
}

/// Stopwatch with a once-per-second display sample.
///
/// `displayed()` only changes when [`Timer::sample`] crosses a whole-second
/// boundary, mirroring a display refreshed on a fixed interval. `stop()`
/// always recomputes from the start instant so the final time is exact
/// rather than the last sampled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timer {
    started_at: Option<u64>,
    next_sample_at: u64,
    displayed: ElapsedTime,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) from zero at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.started_at = Some(now_ms);
        self.next_sample_at = now_ms + DISPLAY_SAMPLE_MS;
        self.displayed = ElapsedTime::ZERO;
    }

    /// Stop and return the exact elapsed time, or `None` if not running.
    ///
    /// The displayed value keeps the final time until [`Timer::reset`].
    pub fn stop(&mut self, now_ms: u64) -> Option<ElapsedTime> {
        let elapsed = self.elapsed(now_ms)?;
        self.started_at = None;
        self.displayed = elapsed;
        Some(elapsed)
    }

    /// Stop without keeping any reading and show `00:00`.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.next_sample_at = 0;
        self.displayed = ElapsedTime::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Exact elapsed time, or `None` if not running.
    pub fn elapsed(&self, now_ms: u64) -> Option<ElapsedTime> {
        self.started_at
            .map(|start| ElapsedTime::from_millis(now_ms.saturating_sub(start)))
    }

    /// Last sampled value, as the display shows it.
    pub fn displayed(&self) -> ElapsedTime {
        self.displayed
    }

    /// Refresh the displayed value if a sample is due.
    ///
    /// Returns true when the displayed value changed. Late calls catch up to
    /// the current second and schedule the next sample on the following
    /// whole-second boundary.
    pub fn sample(&mut self, now_ms: u64) -> bool {
        let Some(start) = self.started_at else {
            return false;
        };
        if now_ms < self.next_sample_at {
            return false;
        }

        let elapsed_ms = now_ms.saturating_sub(start);
        let next_boundary = (elapsed_ms / DISPLAY_SAMPLE_MS + 1) * DISPLAY_SAMPLE_MS;
        self.next_sample_at = start + next_boundary;

        let sampled = ElapsedTime::from_millis(elapsed_ms);
        let changed = sampled != self.displayed;
        self.displayed = sampled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(1500);
        assert_eq!(clock.now_ms(), 1500);

        clock.set(1000);
        assert_eq!(handle.now_ms(), 1500, "set never moves backwards");
    }

    #[test]
    fn manual_clock_wall_time_follows_elapsed() {
        let origin = Local::now();
        let clock = ManualClock::with_wall_origin(origin);
        clock.advance(90_000);
        assert_eq!(clock.local_now() - origin, chrono::Duration::seconds(90));
    }

    #[test]
    fn display_updates_only_on_whole_seconds() {
        let mut timer = Timer::new();
        timer.start(10_000);
        assert!(!timer.sample(10_999));
        assert_eq!(timer.displayed(), ElapsedTime::ZERO);

        assert!(timer.sample(11_000));
        assert_eq!(timer.displayed().to_string(), "00:01");

        assert!(!timer.sample(11_500));
        assert_eq!(timer.displayed().to_string(), "00:01");
    }

    #[test]
    fn late_sample_catches_up() {
        let mut timer = Timer::new();
        timer.start(0);
        assert!(timer.sample(4_200));
        assert_eq!(timer.displayed().to_string(), "00:04");
        assert!(!timer.sample(4_900));
        assert!(timer.sample(5_000));
        assert_eq!(timer.displayed().to_string(), "00:05");
    }

    #[test]
    fn stop_recomputes_exact_time() {
        let mut timer = Timer::new();
        timer.start(0);
        timer.sample(2_000);
        assert_eq!(timer.displayed().to_string(), "00:02");

        // No sample at 2.9s; the final reading must not lag behind.
        let final_time = timer.stop(62_900).unwrap();
        assert_eq!(final_time.to_string(), "01:02");
        assert!(!timer.is_running());
        assert_eq!(timer.displayed(), final_time);
    }

    #[test]
    fn stopped_timer_ignores_samples() {
        let mut timer = Timer::new();
        assert!(!timer.sample(5_000));
        assert_eq!(timer.stop(5_000), None);

        timer.start(0);
        timer.reset();
        assert!(!timer.sample(5_000));
        assert_eq!(timer.displayed(), ElapsedTime::ZERO);
    }
}
