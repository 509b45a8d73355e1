//! Recurring tick schedule owned by a single widget.
//!
//! A [`Ticker`] replaces the page's interval handles: it holds at most one
//! pending schedule, so starting it again can never produce overlapping
//! timers, and cancelling it affects nobody else.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    /// Begins a fresh schedule whose first tick is one period after `now`.
    /// Any previous schedule is dropped.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks that fell due up to and including `now`. The schedule
    /// advances past them, keeping its original phase.
    pub fn take_due(&mut self, now: Instant) -> u64 {
        let Some(next_due) = self.next_due else {
            return 0;
        };
        if now < next_due {
            return 0;
        }

        let overdue = now.duration_since(next_due);
        let period_ns = self.period.as_nanos();
        let count = (overdue.as_nanos() / period_ns) as u64 + 1;

        let advance = self
            .period
            .checked_mul(u32::try_from(count).unwrap_or(u32::MAX))
            .unwrap_or(overdue + self.period);
        self.next_due = Some(next_due + advance);
        count
    }

    /// Time left until the next tick, if one is scheduled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}
