use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A Grand Prix or testing weekend, from `/meetings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub circuit_key: i64,

    pub circuit_short_name: String,

    pub country_code: String,

    pub country_key: i64,

    pub country_name: String,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_start: DateTime<Utc>,

    /// Offset of local time from GMT, formatted `hh:mm:ss`.
    pub gmt_offset: String,

    pub location: String,

    pub meeting_key: i64,

    pub meeting_name: String,

    pub meeting_official_name: String,

    pub year: i64,
}
