//! Public holiday lookup with an offline fallback.
//!
//! The remote source is tried first; any failure (network, HTTP status,
//! undecodable body, bad country code) is logged and answered with the
//! built-in table instead. A lookup therefore never fails.

mod fallback;
mod fetcher;

pub use fallback::{fallback_holidays, FALLBACK_YEAR};
pub use fetcher::{normalize_country_code, NagerHolidayClient, NAGER_BASE_URL};

use crate::error::Result;
use crate::models::holiday::{HolidayEntry, HolidayLookup, HolidaySourceKind};

/// Country loaded when the panel first opens.
pub const DEFAULT_COUNTRY: &str = "US";

/// Countries offered by the panel's picker.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("NL", "Netherlands"),
    ("JP", "Japan"),
    ("BR", "Brazil"),
    ("MX", "Mexico"),
    ("IN", "India"),
    ("ZA", "South Africa"),
    ("NZ", "New Zealand"),
];

/// Remote collaborator returning the public holidays of a country and year.
#[cfg_attr(test, mockall::automock)]
pub trait HolidaySource {
    fn fetch_holidays(&self, country: &str, year: i32) -> Result<Vec<HolidayEntry>>;
}

pub struct HolidayService<S> {
    source: S,
}

impl<S: HolidaySource> HolidayService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn lookup(&self, country: &str, year: i32) -> HolidayLookup {
        let country = country.trim().to_ascii_uppercase();

        match self.source.fetch_holidays(&country, year) {
            Ok(entries) => {
                log::info!("Loaded {} holidays for {} {}", entries.len(), country, year);
                HolidayLookup {
                    country,
                    year,
                    entries,
                    source: HolidaySourceKind::Remote,
                }
            }
            Err(err) => {
                log::error!("Error loading holidays for {}: {}", country, err);
                fallback_lookup(&country, err.to_string())
            }
        }
    }
}

/// A lookup answered entirely from the built-in tables.
pub fn fallback_lookup(country: &str, reason: impl Into<String>) -> HolidayLookup {
    HolidayLookup {
        country: country.to_string(),
        year: FALLBACK_YEAR,
        entries: fallback_holidays(country),
        source: HolidaySourceKind::Fallback {
            reason: reason.into(),
        },
    }
}
