//! Unix timestamp conversion.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, TimeToolsError};

/// Timestamps below this are read as seconds, everything else as milliseconds.
pub const SECONDS_THRESHOLD: i64 = 10_000_000_000;

/// Shown in place of a conversion result for unusable input.
pub const INVALID_TIMESTAMP: &str = "Invalid timestamp";

const LONG_FORMAT: &str = "%B %-d, %Y at %I:%M:%S %p %Z";

/// Parses a typed timestamp into an instant, accepting seconds or milliseconds.
pub fn parse_epoch(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    let timestamp = trimmed
        .parse::<i64>()
        .map_err(|_| TimeToolsError::invalid_input(format!("'{}' is not a timestamp", trimmed)))?;

    let millis = if timestamp < SECONDS_THRESHOLD {
        timestamp.checked_mul(1_000).ok_or_else(|| {
            TimeToolsError::invalid_input(format!("{} is out of range", timestamp))
        })?
    } else {
        timestamp
    };

    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| TimeToolsError::invalid_input(format!("{} is out of range", timestamp)))
}

/// Converts a typed timestamp into long-form text in `tz`, e.g.
/// `January 15, 2024 at 03:20:00 PM UTC`.
pub fn convert_epoch<Tz>(input: &str, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let instant = parse_epoch(input)?;
    Ok(instant.with_timezone(tz).format(LONG_FORMAT).to_string())
}

/// Whether the converter should run on every keystroke: only for numeric text.
pub fn should_auto_convert(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && trimmed.parse::<i64>().is_ok()
}

pub fn current_epoch_seconds(now_utc: DateTime<Utc>) -> i64 {
    now_utc.timestamp()
}

/// Looks up an IANA zone name such as `America/New_York`.
pub fn resolve_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// The machine's IANA zone, so `%Z` renders an abbreviation like `EST`
/// rather than a bare offset. None when the platform does not report one.
pub fn local_zone() -> Option<Tz> {
    match iana_time_zone::get_timezone() {
        Ok(name) => {
            let zone = resolve_zone(&name);
            if zone.is_none() {
                log::warn!("Local timezone '{}' is not in the zone database", name);
            }
            zone
        }
        Err(e) => {
            log::warn!("Could not determine the local timezone: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use test_case::test_case;

    #[test]
    fn seconds_and_milliseconds_reach_the_same_instant() {
        assert_eq!(
            parse_epoch("1700000000").unwrap(),
            parse_epoch("1700000000000").unwrap()
        );
    }

    #[test]
    fn renders_long_form_in_utc() {
        assert_eq!(
            convert_epoch("1705332000", &Utc).unwrap(),
            "January 15, 2024 at 03:20:00 PM UTC"
        );
    }

    #[test]
    fn renders_in_a_named_zone() {
        assert_eq!(
            convert_epoch("1705332000000", &New_York).unwrap(),
            "January 15, 2024 at 10:20:00 AM EST"
        );
    }

    #[test]
    fn negative_values_are_seconds_before_the_epoch() {
        assert_eq!(
            convert_epoch("-86400", &Utc).unwrap(),
            "December 31, 1969 at 12:00:00 AM UTC"
        );
    }

    #[test_case("abc" ; "letters")]
    #[test_case("" ; "empty")]
    #[test_case("12.5" ; "fraction")]
    #[test_case("9223372036854775807" ; "beyond representable dates")]
    fn rejects_unusable_input(input: &str) {
        assert!(matches!(
            convert_epoch(input, &Utc),
            Err(TimeToolsError::InvalidInput(_))
        ));
    }

    #[test]
    fn resolved_zones_render_abbreviations() {
        let utc = resolve_zone("UTC").unwrap();
        assert_eq!(
            convert_epoch("1705332000", &utc).unwrap(),
            "January 15, 2024 at 03:20:00 PM UTC"
        );

        let new_york = resolve_zone(" America/New_York ").unwrap();
        assert!(convert_epoch("1705332000", &new_york)
            .unwrap()
            .ends_with("AM EST"));
    }

    #[test]
    fn unknown_zone_names_do_not_resolve() {
        assert_eq!(resolve_zone("Not/AZone"), None);
        assert_eq!(resolve_zone(""), None);
    }

    #[test]
    fn auto_convert_only_for_numbers() {
        assert!(should_auto_convert(" 1700000000 "));
        assert!(!should_auto_convert("17000x"));
        assert!(!should_auto_convert(""));
    }

    #[test]
    fn current_epoch_truncates_to_seconds() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_999).unwrap();
        assert_eq!(current_epoch_seconds(now), 1_700_000_000);
    }
}
