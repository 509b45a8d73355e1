use std::sync::mpsc::Receiver;
use std::sync::Arc;

use chrono_tz::Tz;

use crate::models::holiday::HolidayLookup;
use crate::services::holiday::{HolidayService, NagerHolidayClient, DEFAULT_COUNTRY};

/// Text inputs and dialogs of the countdown section
#[derive(Default)]
pub struct TimerPanelState {
    pub custom_minutes: String,
    pub custom_seconds: String,
    pub show_completion_alert: bool,
}

/// Input and last result of the epoch converter
#[derive(Default)]
pub struct EpochPanelState {
    pub input: String,
    /// Rendered result or the invalid-input placeholder
    pub output: Option<String>,
    /// Local IANA zone, resolved once at startup
    pub zone: Option<Tz>,
}

/// Zone picker selection
#[derive(Default)]
pub struct TimezonePanelState {
    pub selected_zone: Option<&'static str>,
}

pub type SharedHolidayService = Arc<HolidayService<NagerHolidayClient>>;

pub struct HolidayPanelState {
    pub selected_country: String,
    /// None when the HTTP client could not be built; lookups go straight to
    /// the fallback table
    pub service: Option<SharedHolidayService>,
    pub pending: Option<Receiver<HolidayLookup>>,
    pub current: Option<HolidayLookup>,
}

impl HolidayPanelState {
    pub fn new(service: Option<SharedHolidayService>) -> Self {
        Self {
            selected_country: DEFAULT_COUNTRY.to_string(),
            service,
            pending: None,
            current: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
