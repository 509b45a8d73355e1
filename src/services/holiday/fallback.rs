use chrono::NaiveDate;

use crate::models::holiday::HolidayEntry;

/// Year the built-in tables describe.
pub const FALLBACK_YEAR: i32 = 2024;

const US_HOLIDAYS: &[(&str, u32, u32)] = &[
    ("New Year's Day", 1, 1),
    ("Martin Luther King Jr. Day", 1, 15),
    ("Presidents' Day", 2, 19),
    ("Memorial Day", 5, 27),
    ("Independence Day", 7, 4),
    ("Labor Day", 9, 2),
    ("Columbus Day", 10, 14),
    ("Veterans Day", 11, 11),
    ("Thanksgiving Day", 11, 28),
    ("Christmas Day", 12, 25),
];

const GB_HOLIDAYS: &[(&str, u32, u32)] = &[
    ("New Year's Day", 1, 1),
    ("Good Friday", 3, 29),
    ("Easter Monday", 4, 1),
    ("Early May Bank Holiday", 5, 6),
    ("Spring Bank Holiday", 5, 27),
    ("Summer Bank Holiday", 8, 26),
    ("Boxing Day", 12, 26),
];

/// Built-in holidays for `country`. Countries without their own table get
/// the US one.
pub fn fallback_holidays(country: &str) -> Vec<HolidayEntry> {
    let table = match country.trim().to_ascii_uppercase().as_str() {
        "GB" => GB_HOLIDAYS,
        _ => US_HOLIDAYS,
    };

    table
        .iter()
        .filter_map(|&(name, month, day)| {
            NaiveDate::from_ymd_opt(FALLBACK_YEAR, month, day)
                .map(|date| HolidayEntry::new(name, date))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_table_has_ten_entries() {
        let us = fallback_holidays("US");
        assert_eq!(us.len(), 10);
        assert_eq!(us[4].name, "Independence Day");
        assert_eq!(us[4].display_date(), "Jul 4, 2024");
    }

    #[test]
    fn gb_has_its_own_table() {
        let gb = fallback_holidays("gb");
        assert_eq!(gb.len(), 7);
        assert_eq!(gb[6].name, "Boxing Day");
    }

    #[test]
    fn unknown_countries_default_to_us() {
        assert_eq!(fallback_holidays("FR"), fallback_holidays("US"));
    }
}
