use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A change in running order, from `/position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    pub driver_number: i64,

    pub meeting_key: i64,

    pub position: i64,

    pub session_key: i64,
}
