use std::time::{Duration, Instant};

use super::models::{TimerEvent, TimerStatus, COMPLETION_MESSAGE};
use crate::services::notification::Notifier;
use crate::services::scheduler::Ticker;
use crate::utils::duration::{format_duration, MS_PER_SECOND};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Countdown timer counting down whole seconds.
///
/// The timer owns its own [`Ticker`]; the caller drives it with [`poll`]
/// (or [`tick`] directly in tests) and never shares the schedule with
/// another widget.
///
/// [`poll`]: CountdownTimer::poll
/// [`tick`]: CountdownTimer::tick
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    remaining_ms: u64,
    status: TimerStatus,
    ticker: Ticker,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            remaining_ms: 0,
            status: TimerStatus::Idle,
            ticker: Ticker::new(TICK_PERIOD),
        }
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn display(&self) -> String {
        format_duration(self.remaining_ms, false)
    }

    /// Replaces the remaining time. Ignored while running; returns whether the
    /// new value was applied.
    pub fn set_remaining(&mut self, seconds: u64) -> bool {
        if self.is_running() {
            log::debug!("Ignoring set_remaining({}) while the timer is running", seconds);
            return false;
        }

        self.remaining_ms = seconds.saturating_mul(MS_PER_SECOND);
        self.status = TimerStatus::Idle;
        self.ticker.cancel();
        true
    }

    /// Starts or resumes counting. Does nothing when no time is set or the
    /// timer is already running.
    pub fn start(&mut self, now: Instant) {
        if self.remaining_ms == 0 || self.is_running() {
            return;
        }

        self.status = TimerStatus::Running;
        self.ticker.start(now);
        log::debug!("Timer started with {} remaining", self.display());
    }

    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }

        self.status = TimerStatus::Paused;
        self.ticker.cancel();
        log::debug!("Timer paused at {}", self.display());
    }

    pub fn reset(&mut self) {
        self.remaining_ms = 0;
        self.status = TimerStatus::Idle;
        self.ticker.cancel();
    }

    /// One second elapses. Returns the completion event when this tick
    /// brought the timer to zero.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.is_running() {
            return None;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(MS_PER_SECOND);
        if self.remaining_ms > 0 {
            return None;
        }

        self.ticker.cancel();
        self.status = TimerStatus::Idle;
        log::info!("Countdown timer completed");
        Some(TimerEvent::Completed)
    }

    /// Runs every tick that fell due up to `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerEvent> {
        let due = self.ticker.take_due(now);
        let mut events = Vec::new();
        for _ in 0..due {
            if let Some(event) = self.tick() {
                events.push(event);
            }
            if !self.is_running() {
                break;
            }
        }
        events
    }

    /// Polls and forwards completions to `notifier`. Notification failures
    /// are logged and otherwise ignored.
    pub fn poll_and_notify(&mut self, now: Instant, notifier: &dyn Notifier) -> Vec<TimerEvent> {
        let events = self.poll(now);
        for event in &events {
            match event {
                TimerEvent::Completed => {
                    if let Err(err) = notifier.timer_completed(COMPLETION_MESSAGE) {
                        log::warn!("Failed to deliver timer notification: {}", err);
                    }
                }
            }
        }
        events
    }

    /// Time until the next scheduled tick, used to plan repaints.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notification::MockNotifier;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn starts_idle_with_nothing_remaining() {
        let timer = CountdownTimer::new();
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.remaining_ms(), 0);
        assert_eq!(timer.display(), "00:00:00");
    }

    #[test]
    fn start_with_zero_remaining_is_a_no_op() {
        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.start(t0);

        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.time_until_tick(t0), None);
        assert!(timer.poll(t0 + ms(5_000)).is_empty());
    }

    #[test]
    fn five_ticks_then_exactly_one_completion() {
        let mut timer = CountdownTimer::new();
        timer.set_remaining(5);
        timer.start(Instant::now());

        for _ in 0..4 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.tick(), Some(TimerEvent::Completed));
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.remaining_ms(), 0);
    }

    #[test]
    fn poll_counts_whole_seconds_only() {
        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.set_remaining(10);
        timer.start(t0);

        assert!(timer.poll(t0 + ms(999)).is_empty());
        assert_eq!(timer.remaining_ms(), 10_000);
        timer.poll(t0 + ms(2_500));
        assert_eq!(timer.remaining_ms(), 8_000);
    }

    #[test]
    fn poll_stops_at_completion_even_when_far_overdue() {
        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.set_remaining(2);
        timer.start(t0);

        let events = timer.poll(t0 + ms(60_000));
        assert_eq!(events, vec![TimerEvent::Completed]);
        assert_eq!(timer.remaining_ms(), 0);
        assert!(timer.poll(t0 + ms(120_000)).is_empty());
    }

    #[test]
    fn pause_and_resume_neither_skip_nor_duplicate() {
        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.set_remaining(5);
        timer.start(t0);
        timer.poll(t0 + ms(1_000));
        assert_eq!(timer.remaining_ms(), 4_000);

        timer.pause();
        assert_eq!(timer.status(), TimerStatus::Paused);
        assert!(timer.poll(t0 + ms(10_000)).is_empty());
        assert_eq!(timer.remaining_ms(), 4_000);

        let resumed_at = t0 + ms(10_000);
        timer.start(resumed_at);
        assert!(timer.poll(resumed_at + ms(999)).is_empty());
        timer.poll(resumed_at + ms(1_000));
        assert_eq!(timer.remaining_ms(), 3_000);
    }

    #[test]
    fn pause_is_idempotent_when_not_running() {
        let mut timer = CountdownTimer::new();
        timer.set_remaining(3);
        timer.pause();
        assert_eq!(timer.status(), TimerStatus::Idle);
    }

    #[test]
    fn set_remaining_is_ignored_while_running() {
        let mut timer = CountdownTimer::new();
        timer.set_remaining(30);
        timer.start(Instant::now());

        assert!(!timer.set_remaining(5));
        assert_eq!(timer.remaining_ms(), 30_000);
        assert_eq!(timer.status(), TimerStatus::Running);
    }

    #[test]
    fn set_remaining_while_paused_returns_to_idle() {
        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.set_remaining(30);
        timer.start(t0);
        timer.pause();

        assert!(timer.set_remaining(90));
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.display(), "00:01:30");
        assert_eq!(timer.time_until_tick(t0), None);
    }

    #[test]
    fn reset_cancels_everything() {
        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.set_remaining(3);
        timer.start(t0);
        timer.reset();

        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.remaining_ms(), 0);
        assert!(timer.poll(t0 + ms(5_000)).is_empty());
    }

    #[test]
    fn starting_twice_does_not_double_tick() {
        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.set_remaining(10);
        timer.start(t0);
        timer.start(t0 + ms(500));

        timer.poll(t0 + ms(1_000));
        assert_eq!(timer.remaining_ms(), 9_000);
    }

    #[test]
    fn completion_is_forwarded_to_the_notifier_once() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_timer_completed()
            .withf(|message| message == COMPLETION_MESSAGE)
            .times(1)
            .returning(|_| Ok(()));

        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.set_remaining(3);
        timer.start(t0);
        for step in 1..=6 {
            timer.poll_and_notify(t0 + ms(step * 1_000), &notifier);
        }
    }

    #[test]
    fn notifier_failure_does_not_break_the_timer() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_timer_completed()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("no notification daemon")));

        let mut timer = CountdownTimer::new();
        let t0 = Instant::now();
        timer.set_remaining(1);
        timer.start(t0);

        let events = timer.poll_and_notify(t0 + ms(1_000), &notifier);
        assert_eq!(events, vec![TimerEvent::Completed]);
        assert_eq!(timer.status(), TimerStatus::Idle);
    }
}
