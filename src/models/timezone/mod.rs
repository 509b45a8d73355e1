//! Timezone card model and the zone picker catalog.

/// Text shown on a card before its first successful render.
pub const TIME_PLACEHOLDER: &str = "--:--:--";
pub const DATE_PLACEHOLDER: &str = "--";

/// Identifier of a card on the timezone board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u64);

/// A clock card bound to one zone identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneCard {
    pub id: CardId,
    /// IANA identifier, e.g. "Asia/Tokyo"
    pub zone_id: String,
    pub label: String,
    /// 24-hour wall-clock time from the last successful render
    pub time_text: String,
    /// Short weekday, month and day from the last successful render
    pub date_text: String,
    /// Why the most recent render failed, cleared on success
    pub last_error: Option<String>,
}

impl TimezoneCard {
    pub fn new(id: CardId, zone_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            zone_id: zone_id.into(),
            label: label.into(),
            time_text: TIME_PLACEHOLDER.to_string(),
            date_text: DATE_PLACEHOLDER.to_string(),
            last_error: None,
        }
    }

    pub fn has_rendered(&self) -> bool {
        self.time_text != TIME_PLACEHOLDER
    }
}

/// An entry in the zone picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneOption {
    pub zone_id: &'static str,
    pub label: &'static str,
}

const fn zone(zone_id: &'static str, label: &'static str) -> ZoneOption {
    ZoneOption { zone_id, label }
}

/// Cards placed on a fresh board.
pub const DEFAULT_ZONES: [ZoneOption; 3] = [
    zone("America/New_York", "New York"),
    zone("Europe/London", "London"),
    zone("Asia/Tokyo", "Tokyo"),
];

const ZONE_CATALOG: &[ZoneOption] = &[
    // Americas
    zone("America/New_York", "New York (EST/EDT)"),
    zone("America/Los_Angeles", "Los Angeles (PST/PDT)"),
    zone("America/Chicago", "Chicago (CST/CDT)"),
    zone("America/Denver", "Denver (MST/MDT)"),
    zone("America/Phoenix", "Phoenix (MST)"),
    zone("America/Anchorage", "Anchorage (AKST/AKDT)"),
    zone("Pacific/Honolulu", "Honolulu (HST)"),
    zone("America/Toronto", "Toronto (EST/EDT)"),
    zone("America/Vancouver", "Vancouver (PST/PDT)"),
    zone("America/Mexico_City", "Mexico City (CST)"),
    zone("America/Sao_Paulo", "São Paulo (BRT)"),
    zone("America/Argentina/Buenos_Aires", "Buenos Aires (ART)"),
    zone("America/Santiago", "Santiago (CLT)"),
    zone("America/Lima", "Lima (PET)"),
    zone("America/Bogota", "Bogotá (COT)"),
    zone("America/Caracas", "Caracas (VET)"),
    // Europe
    zone("Europe/London", "London (GMT/BST)"),
    zone("Europe/Dublin", "Dublin (GMT/IST)"),
    zone("Europe/Lisbon", "Lisbon (WET/WEST)"),
    zone("Europe/Paris", "Paris (CET/CEST)"),
    zone("Europe/Berlin", "Berlin (CET/CEST)"),
    zone("Europe/Rome", "Rome (CET/CEST)"),
    zone("Europe/Madrid", "Madrid (CET/CEST)"),
    zone("Europe/Amsterdam", "Amsterdam (CET/CEST)"),
    zone("Europe/Brussels", "Brussels (CET/CEST)"),
    zone("Europe/Zurich", "Zurich (CET/CEST)"),
    zone("Europe/Vienna", "Vienna (CET/CEST)"),
    zone("Europe/Stockholm", "Stockholm (CET/CEST)"),
    zone("Europe/Oslo", "Oslo (CET/CEST)"),
    zone("Europe/Copenhagen", "Copenhagen (CET/CEST)"),
    zone("Europe/Warsaw", "Warsaw (CET/CEST)"),
    zone("Europe/Prague", "Prague (CET/CEST)"),
    zone("Europe/Budapest", "Budapest (CET/CEST)"),
    zone("Europe/Helsinki", "Helsinki (EET/EEST)"),
    zone("Europe/Bucharest", "Bucharest (EET/EEST)"),
    zone("Europe/Sofia", "Sofia (EET/EEST)"),
    zone("Europe/Athens", "Athens (EET/EEST)"),
    zone("Europe/Istanbul", "Istanbul (TRT)"),
    zone("Europe/Moscow", "Moscow (MSK)"),
    // Asia
    zone("Asia/Tokyo", "Tokyo (JST)"),
    zone("Asia/Seoul", "Seoul (KST)"),
    zone("Asia/Shanghai", "Shanghai (CST)"),
    zone("Asia/Hong_Kong", "Hong Kong (HKT)"),
    zone("Asia/Taipei", "Taipei (CST)"),
    zone("Asia/Singapore", "Singapore (SGT)"),
    zone("Asia/Manila", "Manila (PHT)"),
    zone("Asia/Bangkok", "Bangkok (ICT)"),
    zone("Asia/Ho_Chi_Minh", "Ho Chi Minh City (ICT)"),
    zone("Asia/Jakarta", "Jakarta (WIB)"),
    zone("Asia/Kuala_Lumpur", "Kuala Lumpur (MYT)"),
    zone("Asia/Kolkata", "Mumbai (IST)"),
    zone("Asia/Kathmandu", "Kathmandu (NPT)"),
    zone("Asia/Dhaka", "Dhaka (BST)"),
    zone("Asia/Karachi", "Karachi (PKT)"),
    zone("Asia/Tashkent", "Tashkent (UZT)"),
    zone("Asia/Dubai", "Dubai (GST)"),
    zone("Asia/Tehran", "Tehran (IRST)"),
    zone("Asia/Riyadh", "Riyadh (AST)"),
    zone("Asia/Jerusalem", "Jerusalem (IST/IDT)"),
    zone("Asia/Vladivostok", "Vladivostok (VLAT)"),
    // Africa
    zone("Africa/Cairo", "Cairo (EET)"),
    zone("Africa/Johannesburg", "Johannesburg (SAST)"),
    zone("Africa/Lagos", "Lagos (WAT)"),
    zone("Africa/Nairobi", "Nairobi (EAT)"),
    zone("Africa/Casablanca", "Casablanca (WET)"),
    zone("Africa/Accra", "Accra (GMT)"),
    // Australia & Pacific
    zone("Australia/Sydney", "Sydney (AEST/AEDT)"),
    zone("Australia/Melbourne", "Melbourne (AEST/AEDT)"),
    zone("Australia/Brisbane", "Brisbane (AEST)"),
    zone("Australia/Adelaide", "Adelaide (ACST/ACDT)"),
    zone("Australia/Darwin", "Darwin (ACST)"),
    zone("Australia/Perth", "Perth (AWST)"),
    zone("Pacific/Auckland", "Auckland (NZST/NZDT)"),
    zone("Pacific/Chatham", "Chatham Islands (CHAST)"),
    zone("Pacific/Fiji", "Suva (FJT)"),
    zone("Pacific/Guam", "Guam (ChST)"),
    zone("Pacific/Tongatapu", "Nuku'alofa (TOT)"),
    zone("Pacific/Kiritimati", "Kiritimati (LINT)"),
];

/// Zones offered by the picker, grouped by region.
pub fn zone_catalog() -> &'static [ZoneOption] {
    ZONE_CATALOG
}
