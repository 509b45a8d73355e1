//! Stopwatch with lap recording.
//!
//! Elapsed time is never accumulated tick by tick. While running, the
//! stopwatch keeps an anchor instant (`now - accumulated` at start) and every
//! tick recomputes `accumulated = now - anchor`, so a late or dropped tick
//! costs display freshness, never accuracy.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::services::scheduler::Ticker;
use crate::utils::duration::format_duration;

const TICK_PERIOD: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwatchStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

/// A snapshot taken with the lap button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    /// 1-based, in the order laps were taken
    pub number: u32,
    pub elapsed_ms: u64,
}

impl Lap {
    pub fn display(&self) -> String {
        format_duration(self.elapsed_ms, true)
    }
}

#[derive(Debug, Clone)]
pub struct Stopwatch {
    anchor: Option<Instant>,
    accumulated_ms: u64,
    status: StopwatchStatus,
    /// Most recent lap first
    laps: VecDeque<Lap>,
    ticker: Ticker,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            anchor: None,
            accumulated_ms: 0,
            status: StopwatchStatus::Idle,
            laps: VecDeque::new(),
            ticker: Ticker::new(TICK_PERIOD),
        }
    }

    pub fn status(&self) -> StopwatchStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == StopwatchStatus::Running
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    pub fn display(&self) -> String {
        format_duration(self.accumulated_ms, true)
    }

    /// Laps, most recent first.
    pub fn laps(&self) -> impl Iterator<Item = &Lap> {
        self.laps.iter()
    }

    pub fn lap_count(&self) -> usize {
        self.laps.len()
    }

    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }

        let frozen = Duration::from_millis(self.accumulated_ms);
        let anchor = match now.checked_sub(frozen) {
            Some(anchor) => anchor,
            None => {
                // Anchor would precede the monotonic clock's origin.
                log::warn!("Stopwatch anchor underflow, elapsed time restarts from now");
                self.accumulated_ms = 0;
                now
            }
        };
        self.anchor = Some(anchor);
        self.status = StopwatchStatus::Running;
        self.ticker.start(now);
    }

    /// Recomputes elapsed time from the anchor.
    pub fn tick(&mut self, now: Instant) {
        let Some(anchor) = self.anchor else {
            return;
        };
        if !self.is_running() {
            return;
        }

        let elapsed = now.saturating_duration_since(anchor).as_millis();
        let elapsed = u64::try_from(elapsed).unwrap_or(u64::MAX);
        self.accumulated_ms = self.accumulated_ms.max(elapsed);
    }

    /// Ticks when the 10 ms schedule is due. Returns whether a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.ticker.take_due(now) == 0 {
            return false;
        }
        self.tick(now);
        true
    }

    /// Freezes elapsed time at `now`.
    pub fn pause(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }

        self.tick(now);
        self.status = StopwatchStatus::Paused;
        self.anchor = None;
        self.ticker.cancel();
    }

    /// Records the currently displayed elapsed time. Only valid while running.
    pub fn lap(&mut self) -> Option<Lap> {
        if !self.is_running() {
            return None;
        }

        let lap = Lap {
            number: self.laps.len() as u32 + 1,
            elapsed_ms: self.accumulated_ms,
        };
        self.laps.push_front(lap);
        Some(lap)
    }

    pub fn reset(&mut self) {
        self.anchor = None;
        self.accumulated_ms = 0;
        self.status = StopwatchStatus::Idle;
        self.laps.clear();
        self.ticker.cancel();
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }
}
