// Countdown and stopwatch driven through a manual clock

mod fixtures;

use std::time::Duration;

use fixtures::{init_logging, instants, manual_clock};
use pretty_assertions::assert_eq;
use time_tools::services::clock::Clock;
use time_tools::services::notification::Notifier;
use time_tools::services::stopwatch::{Stopwatch, StopwatchStatus};
use time_tools::services::timer::{
    custom_seconds, CountdownTimer, TimerEvent, TimerStatus, COMPLETION_MESSAGE, PRESETS,
};

mockall::mock! {
    pub Alerts {}
    impl Notifier for Alerts {
        fn timer_completed(&self, message: &str) -> anyhow::Result<()>;
    }
}

#[test]
fn three_second_countdown_completes_once() {
    init_logging();
    let clock = manual_clock(instants::jan_15_2024());
    let mut timer = CountdownTimer::new();

    assert!(timer.set_remaining(3));
    timer.start(clock.now());
    assert_eq!(timer.display(), "00:00:03");

    let mut seen = Vec::new();
    for _ in 0..3 {
        clock.advance_ms(1_000);
        timer.poll(clock.now());
        seen.push(timer.display());
    }

    assert_eq!(seen, vec!["00:00:02", "00:00:01", "00:00:00"]);
    assert_eq!(timer.status(), TimerStatus::Idle);

    // Nothing ticks once the countdown has finished
    clock.advance(Duration::from_secs(10));
    assert!(timer.poll(clock.now()).is_empty());
    assert_eq!(timer.remaining_ms(), 0);
}

#[test]
fn completion_is_announced_to_the_notifier() {
    let clock = manual_clock(instants::jan_15_2024());
    let mut alerts = MockAlerts::new();
    alerts
        .expect_timer_completed()
        .withf(|message| message == COMPLETION_MESSAGE)
        .times(1)
        .returning(|_| Ok(()));

    let mut timer = CountdownTimer::new();
    timer.set_remaining(2);
    timer.start(clock.now());

    // A stalled frame catches up on both ticks at once
    clock.advance_ms(2_500);
    let events = timer.poll_and_notify(clock.now(), &alerts);
    assert_eq!(events, vec![TimerEvent::Completed]);
}

#[test]
fn notifier_failure_does_not_stop_completion() {
    let clock = manual_clock(instants::jan_15_2024());
    let mut alerts = MockAlerts::new();
    alerts
        .expect_timer_completed()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("no notification daemon")));

    let mut timer = CountdownTimer::new();
    timer.set_remaining(1);
    timer.start(clock.now());
    clock.advance_ms(1_000);

    let events = timer.poll_and_notify(clock.now(), &alerts);
    assert_eq!(events.len(), 1);
    assert_eq!(timer.status(), TimerStatus::Idle);
}

#[test]
fn pause_then_resume_keeps_remaining_time() {
    let clock = manual_clock(instants::jan_15_2024());
    let mut timer = CountdownTimer::new();
    timer.set_remaining(PRESETS[0].seconds());
    timer.start(clock.now());

    clock.advance_ms(5_000);
    timer.poll(clock.now());
    timer.pause();
    assert_eq!(timer.display(), "00:00:55");

    clock.advance(Duration::from_secs(30));
    assert!(timer.poll(clock.now()).is_empty());
    assert_eq!(timer.display(), "00:00:55");

    // Starting twice must not double the tick rate
    timer.start(clock.now());
    timer.start(clock.now());
    clock.advance_ms(1_000);
    timer.poll(clock.now());
    assert_eq!(timer.display(), "00:00:54");
}

#[test]
fn custom_entry_feeds_the_countdown() {
    let mut timer = CountdownTimer::new();
    timer.set_remaining(custom_seconds("2", "30"));
    assert_eq!(timer.display(), "00:02:30");

    timer.set_remaining(custom_seconds("", "abc"));
    assert_eq!(timer.remaining_ms(), 0);
}

#[test]
fn stopwatch_laps_follow_the_clock() {
    let clock = manual_clock(instants::jan_15_2024());
    let mut stopwatch = Stopwatch::new();

    stopwatch.start(clock.now());
    clock.advance_ms(1_230);
    assert!(stopwatch.poll(clock.now()));
    let first = stopwatch.lap().unwrap();
    assert_eq!(first.number, 1);
    assert_eq!(first.display(), "00:00:01.23");

    clock.advance_ms(2_000);
    stopwatch.poll(clock.now());
    stopwatch.lap();

    let laps: Vec<(u32, String)> = stopwatch
        .laps()
        .map(|lap| (lap.number, lap.display()))
        .collect();
    assert_eq!(
        laps,
        vec![(2, "00:00:03.23".to_string()), (1, "00:00:01.23".to_string())]
    );

    stopwatch.pause(clock.now());
    assert_eq!(stopwatch.status(), StopwatchStatus::Paused);
    assert!(stopwatch.lap().is_none());

    clock.advance(Duration::from_secs(60));
    stopwatch.start(clock.now());
    clock.advance_ms(770);
    stopwatch.poll(clock.now());
    assert_eq!(stopwatch.display(), "00:00:04.00");

    stopwatch.reset();
    assert_eq!(stopwatch.display(), "00:00:00.00");
    assert_eq!(stopwatch.lap_count(), 0);
}
