//! Timestamp parsing for API responses.
//!
//! The API is inconsistent: telemetry resources send microsecond timestamps
//! (`2023-09-16T13:03:35.200000+00:00`) while meetings and sessions send plain
//! RFC 3339 (`2023-09-16T13:00:00+00:00`). Both are accepted and normalised to
//! UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::Error;

const FRACTIONAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Parses an API timestamp into UTC.
pub fn parse_api_timestamp(raw: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_str(raw, FRACTIONAL_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            Error::malformed(format!(
                "timestamp `{}` is not in a supported ISO 8601 format",
                raw
            ))
        })
}

/// `deserialize_with` helper for required timestamp fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_api_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// `deserialize_with` helper for nullable timestamp fields.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_api_timestamp(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
