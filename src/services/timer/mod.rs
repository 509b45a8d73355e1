mod models;
mod service;

pub use models::{custom_seconds, TimerEvent, TimerPreset, TimerStatus, COMPLETION_MESSAGE, PRESETS};
pub use service::CountdownTimer;
