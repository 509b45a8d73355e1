use anyhow::Result;
use notify_rust::{Notification, Timeout};

/// Freedesktop sound theme name played with the completion alert.
pub const ALARM_SOUND: &str = "alarm-clock-elapsed";

const ALARM_TIMEOUT_MS: u32 = 10_000;

/// Receives the countdown timer's completion alert.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn timer_completed(&self, message: &str) -> Result<()>;
}

/// Service for displaying system notifications
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Check if notifications are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable notifications
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Show an audible notification that stays up for ten seconds
    pub fn show_alarm(&self, title: &str, body: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        alarm_notification(title, body)
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

fn alarm_notification(title: &str, body: &str) -> Notification {
    let mut notification = Notification::new();
    notification
        .summary(title)
        .body(body)
        .sound_name(ALARM_SOUND)
        .timeout(Timeout::Milliseconds(ALARM_TIMEOUT_MS));
    notification
}

impl Notifier for NotificationService {
    fn timer_completed(&self, message: &str) -> Result<()> {
        self.show_alarm("Timer", message)
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}
