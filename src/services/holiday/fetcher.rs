use anyhow::{Context, Result as AnyResult};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::io::Read;
use std::time::Duration;

use super::HolidaySource;
use crate::error::{Result, TimeToolsError};
use crate::models::holiday::HolidayEntry;

pub const NAGER_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Client for the public Nager.Date holiday API.
pub struct NagerHolidayClient {
    client: Client,
    base_url: String,
    max_response_bytes: usize,
}

/// Subset of the API's holiday record the panel needs.
#[derive(Debug, Deserialize)]
struct NagerHoliday {
    date: NaiveDate,
    name: String,
}

impl NagerHolidayClient {
    pub fn new() -> AnyResult<Self> {
        Self::with_base_url(NAGER_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> AnyResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build holiday lookup HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_response_bytes: 1024 * 1024,
        })
    }

    fn holidays_url(&self, country: &str, year: i32) -> String {
        format!("{}/PublicHolidays/{}/{}", self.base_url, year, country)
    }

    fn parse_body(body: &[u8]) -> Result<Vec<HolidayEntry>> {
        let holidays: Vec<NagerHoliday> = serde_json::from_slice(body)
            .map_err(|e| TimeToolsError::BadResponse(format!("undecodable holiday list: {}", e)))?;

        Ok(holidays
            .into_iter()
            .map(|holiday| HolidayEntry::new(holiday.name, holiday.date))
            .collect())
    }
}

impl HolidaySource for NagerHolidayClient {
    fn fetch_holidays(&self, country: &str, year: i32) -> Result<Vec<HolidayEntry>> {
        let country = normalize_country_code(country)?;
        let url = self.holidays_url(&country, year);
        log::debug!("Fetching holidays from {}", url);

        let response = self.client.get(&url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TimeToolsError::BadResponse(format!(
                "holiday lookup failed with HTTP status {}",
                status
            )));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_response_bytes as u64 {
                return Err(TimeToolsError::BadResponse(format!(
                    "holiday response too large ({} bytes > {} bytes)",
                    content_length, self.max_response_bytes
                )));
            }
        }

        // Chunked bodies carry no length header, so the read itself is capped
        let mut body = Vec::new();
        response
            .take(self.max_response_bytes as u64 + 1)
            .read_to_end(&mut body)
            .map_err(|e| {
                TimeToolsError::BadResponse(format!("failed to read holiday response: {}", e))
            })?;

        if body.len() > self.max_response_bytes {
            return Err(TimeToolsError::BadResponse(format!(
                "holiday response too large (more than {} bytes)",
                self.max_response_bytes
            )));
        }

        Self::parse_body(&body)
    }
}

/// Two ASCII letters, upper-cased. Anything else never reaches the network.
pub fn normalize_country_code(country: &str) -> Result<String> {
    let code = country.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(TimeToolsError::invalid_input(format!(
            "'{}' is not a two-letter country code",
            country
        )));
    }
    Ok(code.to_ascii_uppercase())
}
