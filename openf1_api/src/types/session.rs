use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A single session within a meeting, from `/sessions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub circuit_key: i64,

    pub circuit_short_name: String,

    pub country_code: String,

    pub country_key: i64,

    pub country_name: String,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_end: DateTime<Utc>,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_start: DateTime<Utc>,

    pub gmt_offset: String,

    pub location: String,

    pub meeting_key: i64,

    pub session_key: i64,

    /// e.g. `Practice 1`, `Sprint Shootout`, `Race`.
    pub session_name: String,

    pub session_type: SessionType,

    pub year: i64,
}

wire_enum! {
    SessionType {
        Practice => "Practice",
        Qualifying => "Qualifying",
        Race => "Race",
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn session_type_parsing() {
        assert_eq!(SessionType::from_str("Race").unwrap(), SessionType::Race);
        assert!(SessionType::from_str("Sprint").is_err());
        assert_eq!(SessionType::Qualifying.to_string(), "Qualifying");
    }
}
