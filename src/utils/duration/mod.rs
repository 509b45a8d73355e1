//! Clock-face formatting for elapsed and remaining durations.

use crate::error::{Result, TimeToolsError};

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Renders `ms` as `HH:MM:SS`, or `HH:MM:SS.CC` when `with_centiseconds` is set.
///
/// The hours field grows past two digits instead of wrapping.
pub fn format_duration(ms: u64, with_centiseconds: bool) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    if with_centiseconds {
        let centiseconds = (ms % MS_PER_SECOND) / 10;
        format!("{hours:02}:{minutes:02}:{seconds:02}.{centiseconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Reads a `HH:MM:SS` or `HH:MM:SS.CC` clock face back into milliseconds.
pub fn parse_hms(text: &str) -> Result<u64> {
    let (clock, centis) = match text.split_once('.') {
        Some((clock, centis)) => (clock, Some(centis)),
        None => (text, None),
    };

    let fields: Vec<&str> = clock.split(':').collect();
    if fields.len() != 3 {
        return Err(TimeToolsError::invalid_input(format!(
            "expected HH:MM:SS, got '{}'",
            text
        )));
    }

    let hours = parse_field(fields[0], text)?;
    let minutes = parse_field(fields[1], text)?;
    let seconds = parse_field(fields[2], text)?;
    if fields[0].len() < 2 || fields[1].len() != 2 || fields[2].len() != 2 {
        return Err(TimeToolsError::invalid_input(format!(
            "fields must be zero-padded in '{}'",
            text
        )));
    }
    if minutes > 59 || seconds > 59 {
        return Err(TimeToolsError::invalid_input(format!(
            "minutes and seconds must be below 60 in '{}'",
            text
        )));
    }

    let centiseconds = match centis {
        Some(c) if c.len() == 2 => parse_field(c, text)?,
        Some(_) => {
            return Err(TimeToolsError::invalid_input(format!(
                "centiseconds must have two digits in '{}'",
                text
            )))
        }
        None => 0,
    };

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|h| h.checked_add(minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND))
        .and_then(|total| total.checked_add(centiseconds * 10))
        .ok_or_else(|| TimeToolsError::invalid_input(format!("'{}' is out of range", text)))
}

fn parse_field(field: &str, whole: &str) -> Result<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeToolsError::invalid_input(format!(
            "non-numeric field '{}' in '{}'",
            field, whole
        )));
    }
    field
        .parse::<u64>()
        .map_err(|e| TimeToolsError::invalid_input(format!("{} in '{}'", e, whole)))
}
