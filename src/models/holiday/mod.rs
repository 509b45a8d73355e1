//! Public holiday entries shown by the holiday panel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    pub name: String,
    pub date: NaiveDate,
}

impl HolidayEntry {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }

    /// Date in the panel's `Jan 1, 2024` style.
    pub fn display_date(&self) -> String {
        format_holiday_date(self.date)
    }
}

pub fn format_holiday_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Where a lookup's entries came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidaySourceKind {
    Remote,
    /// The remote lookup failed; entries come from the built-in table
    Fallback { reason: String },
}

/// Result of loading holidays for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayLookup {
    pub country: String,
    pub year: i32,
    pub entries: Vec<HolidayEntry>,
    pub source: HolidaySourceKind,
}

impl HolidayLookup {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, HolidaySourceKind::Fallback { .. })
    }

    /// Informational line shown above the list, if any.
    pub fn headline(&self) -> Option<String> {
        match &self.source {
            HolidaySourceKind::Fallback { .. } => Some(format!(
                "Unable to load holidays. Here are some common holidays for {}:",
                self.country
            )),
            HolidaySourceKind::Remote if self.entries.is_empty() => {
                Some("No holidays found for this country.".to_string())
            }
            HolidaySourceKind::Remote => None,
        }
    }
}
