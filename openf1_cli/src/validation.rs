//! Validation of command line input before any request is sent.

use std::fmt::Display;

use anyhow::{bail, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use openf1_api::{DateFilter, FilterOperator, IdFilter, NumberFilter};

pub const MAX_TEXT_LENGTH: usize = 100;

/// Parses `latest` or a positive meeting/session key.
pub fn parse_id_filter(input: &str) -> Result<IdFilter> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("latest") {
        return Ok(IdFilter::latest());
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(IdFilter::id(id)),
        _ => bail!("invalid key '{}': expected a positive number or 'latest'", input),
    }
}

/// Parses a numeric comparison: `>N`, `<N` or plain `N`.
pub fn parse_number_filter(input: &str) -> Result<NumberFilter> {
    let trimmed = input.trim();
    let (operator, rest) = if let Some(rest) = trimmed.strip_prefix('>') {
        (FilterOperator::GreaterThan, rest)
    } else if let Some(rest) = trimmed.strip_prefix('<') {
        (FilterOperator::LessThan, rest)
    } else {
        (FilterOperator::Equal, trimmed.strip_prefix('=').unwrap_or(trimmed))
    };
    match rest.trim().parse::<f64>().map(|v| NumberFilter::try_new(v, operator)) {
        Ok(Ok(filter)) => Ok(filter),
        _ => bail!("invalid comparison '{}': expected >N, <N or N", input),
    }
}

pub fn validate_driver_number(number: i64) -> Result<i64> {
    if (1..=99).contains(&number) {
        Ok(number)
    } else {
        bail!("driver number must be between 1 and 99, got {}", number)
    }
}

/// Seasons covered by the API start in 2018.
pub fn validate_year(year: i64) -> Result<i64> {
    if (2018..=2100).contains(&year) {
        Ok(year)
    } else {
        bail!("year must be 2018 or later, got {}", year)
    }
}

pub fn validate_lap_number(lap: i64) -> Result<i64> {
    if lap >= 1 {
        Ok(lap)
    } else {
        bail!("lap number must be at least 1, got {}", lap)
    }
}

/// Accepts RFC 3339 (`2023-09-16T13:00:00+00:00`) or a bare date, taken as
/// midnight UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight).into());
        }
    }
    bail!(
        "invalid date '{}': expected YYYY-MM-DD or RFC 3339 (2023-09-16T13:00:00+00:00)",
        input
    )
}

/// Builds a date filter from optional `--after`/`--before` values.
pub fn parse_date_range(after: Option<&str>, before: Option<&str>) -> Result<Option<DateFilter>> {
    let after = after.map(parse_timestamp).transpose()?;
    let before = before.map(parse_timestamp).transpose()?;
    match (after, before) {
        (None, None) => Ok(None),
        (Some(after), Some(before)) => {
            if after >= before {
                bail!("--after must be earlier than --before");
            }
            Ok(Some(DateFilter::between(after, before)))
        }
        (Some(after), None) => Ok(Some(DateFilter::after(after))),
        (None, Some(before)) => Ok(Some(DateFilter::before(before))),
    }
}

/// Strips ASCII control characters, trims, and enforces a byte-length limit.
pub fn sanitize_text(input: &str) -> Result<String> {
    if input.len() > MAX_TEXT_LENGTH {
        bail!("input exceeds maximum length of {} bytes", MAX_TEXT_LENGTH);
    }
    let sanitized = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        bail!("input is empty after sanitization");
    }
    Ok(sanitized)
}

/// Matches user input against an enum's wire values, ignoring case and
/// treating spaces, hyphens and underscores alike (`double-yellow` matches
/// `DOUBLE YELLOW`).
pub fn parse_choice<T: Copy + Display>(input: &str, choices: &[T], what: &str) -> Result<T> {
    let wanted = normalize(input);
    if let Some(choice) = choices.iter().find(|c| normalize(&c.to_string()) == wanted) {
        return Ok(*choice);
    }
    let valid: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
    bail!(
        "unknown {} '{}'. Valid values: {}",
        what,
        input,
        valid.join(", ")
    )
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
