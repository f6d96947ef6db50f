use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A pit lane visit, from `/pit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pit {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    pub driver_number: i64,

    pub lap_number: i64,

    pub meeting_key: i64,

    /// Seconds from pit entry to pit exit.
    pub pit_duration: f64,

    pub session_key: i64,
}
