//! Clock sources.
//!
//! Widgets never read the system clock themselves; the adapter reads a
//! [`Clock`] once per frame and hands the instants to every widget. Tests
//! substitute a [`ManualClock`] and advance it by hand.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    /// Monotonic instant, used for elapsed-time accounting.
    fn now(&self) -> Instant;

    /// Wall-clock time, used for display-only widgets.
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    state: Mutex<(Instant, DateTime<Utc>)>,
}

impl ManualClock {
    pub fn new(start_utc: DateTime<Utc>) -> Self {
        Self {
            state: Mutex::new((Instant::now(), start_utc)),
        }
    }

    /// Moves both the monotonic and the wall clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.0 += step;
        match chrono::Duration::from_std(step) {
            Ok(delta) => state.1 = state.1 + delta,
            Err(err) => log::warn!("Manual clock step {:?} out of range: {}", step, err),
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).0
    }

    fn utc_now(&self) -> DateTime<Utc> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).1
    }
}
