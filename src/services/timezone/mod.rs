//! World clock board.
//!
//! Cards are rendered through a [`ZoneFormatter`]. A card whose zone cannot
//! be formatted keeps its last successful text and records the error; the
//! rest of the board refreshes regardless.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Result, TimeToolsError};
use crate::models::timezone::{CardId, TimezoneCard, DEFAULT_ZONES};
use crate::services::scheduler::Ticker;

const REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// Renders instants as wall-clock text for a named zone.
#[cfg_attr(test, mockall::automock)]
pub trait ZoneFormatter {
    /// 24-hour time of day, e.g. `14:05:09`.
    fn format_time(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<String>;

    /// Short weekday, month and day, e.g. `Mon, Jan 15`.
    fn format_date(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<String>;
}

/// [`ZoneFormatter`] backed by the IANA database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzFormatter;

impl ChronoTzFormatter {
    pub fn new() -> Self {
        Self
    }

    fn zone(zone_id: &str) -> Result<Tz> {
        zone_id
            .parse::<Tz>()
            .map_err(|_| TimeToolsError::UnknownZone(zone_id.to_string()))
    }
}

impl ZoneFormatter for ChronoTzFormatter {
    fn format_time(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<String> {
        let tz = Self::zone(zone_id)?;
        Ok(instant.with_timezone(&tz).format("%H:%M:%S").to_string())
    }

    fn format_date(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<String> {
        let tz = Self::zone(zone_id)?;
        Ok(instant.with_timezone(&tz).format("%a, %b %-d").to_string())
    }
}

/// Outcome of one board refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub updated: Vec<CardId>,
    pub failed: Vec<(CardId, String)>,
}

impl RefreshReport {
    pub fn attempted_count(&self) -> usize {
        self.updated.len() + self.failed.len()
    }
}

#[derive(Debug, Clone)]
pub struct TimezoneBoard {
    cards: Vec<TimezoneCard>,
    next_id: u64,
    ticker: Ticker,
}

impl TimezoneBoard {
    /// An empty board whose shared refresh tick starts at `now`.
    pub fn new(now: Instant) -> Self {
        let mut ticker = Ticker::new(REFRESH_PERIOD);
        ticker.start(now);
        Self {
            cards: Vec::new(),
            next_id: 1,
            ticker,
        }
    }

    /// A board holding the New York, London and Tokyo cards.
    pub fn with_defaults(
        now: Instant,
        now_utc: DateTime<Utc>,
        formatter: &dyn ZoneFormatter,
    ) -> Self {
        let mut board = Self::new(now);
        for option in DEFAULT_ZONES {
            board.add_card(option.zone_id, option.label, now_utc, formatter);
        }
        board
    }

    pub fn cards(&self) -> &[TimezoneCard] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&TimezoneCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends a card and renders it straight away. Duplicate zones are
    /// allowed; an unknown zone still produces a card, left on placeholders.
    pub fn add_card(
        &mut self,
        zone_id: &str,
        label: &str,
        now_utc: DateTime<Utc>,
        formatter: &dyn ZoneFormatter,
    ) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;

        let mut card = TimezoneCard::new(id, zone_id, label);
        if let Err(err) = render_card(&mut card, now_utc, formatter) {
            log::warn!("Failed to render new timezone card '{}': {}", zone_id, err);
        }
        self.cards.push(card);
        id
    }

    /// Removes exactly the referenced card. Returns false when it was
    /// already gone.
    pub fn remove_card(&mut self, id: CardId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        self.cards.len() != before
    }

    /// Re-renders every card, isolating failures per card.
    pub fn refresh_all(
        &mut self,
        now_utc: DateTime<Utc>,
        formatter: &dyn ZoneFormatter,
    ) -> RefreshReport {
        let mut report = RefreshReport::default();

        for card in &mut self.cards {
            match render_card(card, now_utc, formatter) {
                Ok(()) => report.updated.push(card.id),
                Err(err) => {
                    log::warn!("Error updating timezone '{}': {}", card.zone_id, err);
                    report.failed.push((card.id, err.to_string()));
                }
            }
        }

        report
    }

    /// Refreshes the board when its one-second tick is due.
    pub fn poll(
        &mut self,
        now: Instant,
        now_utc: DateTime<Utc>,
        formatter: &dyn ZoneFormatter,
    ) -> Option<RefreshReport> {
        if self.ticker.take_due(now) == 0 {
            return None;
        }
        Some(self.refresh_all(now_utc, formatter))
    }

    pub fn time_until_refresh(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }
}

fn render_card(
    card: &mut TimezoneCard,
    now_utc: DateTime<Utc>,
    formatter: &dyn ZoneFormatter,
) -> Result<()> {
    let rendered = formatter
        .format_time(now_utc, &card.zone_id)
        .and_then(|time| Ok((time, formatter.format_date(now_utc, &card.zone_id)?)));

    match rendered {
        Ok((time, date)) => {
            card.time_text = time;
            card.date_text = date;
            card.last_error = None;
            Ok(())
        }
        Err(err) => {
            card.last_error = Some(err.to_string());
            Err(err)
        }
    }
}
