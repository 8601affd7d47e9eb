use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use chrono_english::{parse_date_string, Dialect};
use cyclecal_core::recurrence::iso_weekday;

/// Parses an absolute (`2024-01-31`, RFC 3339) or natural-language date.
pub fn parse_date(date_str: &str) -> Result<DateTime<Utc>> {
    let trimmed = date_str.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    parse_date_string(trimmed, Utc::now(), Dialect::Us)
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", date_str, e))
}

/// Parses a comma-separated weekday list; accepts names ("tue", "Thursday")
/// and ISO numbers (1 = Monday .. 7 = Sunday).
pub fn parse_weekdays(list: &str) -> Result<Vec<Weekday>> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            if let Ok(number) = part.parse::<i64>() {
                iso_weekday(number).ok_or_else(|| anyhow!("Weekday number must be 1-7, got {}", number))
            } else {
                part.parse::<Weekday>()
                    .map_err(|_| anyhow!("Unknown weekday '{}'", part))
            }
        })
        .collect()
}
