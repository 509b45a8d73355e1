/// Lifecycle of the countdown timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    /// Remaining time is set but nothing is counting
    #[default]
    Idle,
    Running,
    Paused,
}

/// Events emitted by the countdown timer's tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown reached zero. Emitted once per run-to-zero.
    Completed,
}

pub const COMPLETION_MESSAGE: &str = "Timer completed!";

/// One of the quick-select buttons above the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerPreset {
    pub minutes: u64,
}

impl TimerPreset {
    pub fn seconds(&self) -> u64 {
        self.minutes * 60
    }

    pub fn label(&self) -> String {
        if self.minutes >= 60 && self.minutes % 60 == 0 {
            format!("{}h", self.minutes / 60)
        } else {
            format!("{}m", self.minutes)
        }
    }
}

pub const PRESETS: [TimerPreset; 6] = [
    TimerPreset { minutes: 1 },
    TimerPreset { minutes: 5 },
    TimerPreset { minutes: 10 },
    TimerPreset { minutes: 15 },
    TimerPreset { minutes: 30 },
    TimerPreset { minutes: 60 },
];

/// Total seconds described by the custom minutes/seconds inputs.
///
/// Each field is read like a browser number input: leading digits count,
/// anything blank, malformed or negative counts as zero.
pub fn custom_seconds(minutes: &str, seconds: &str) -> u64 {
    leading_number(minutes)
        .saturating_mul(60)
        .saturating_add(leading_number(seconds))
}

fn leading_number(text: &str) -> u64 {
    let text = text.trim_start();
    let digits = text.strip_prefix('+').unwrap_or(text);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<u64>().unwrap_or(0)
}
