use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A recorded radio exchange between a driver and the team, from `/team_radio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRadio {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    pub driver_number: i64,

    pub meeting_key: i64,

    /// Link to the audio file.
    pub recording_url: String,

    pub session_key: i64,
}
