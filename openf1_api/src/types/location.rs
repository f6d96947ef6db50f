use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Approximate position of a car on the circuit, from `/location`.
///
/// Coordinates are in an arbitrary circuit-local frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    pub driver_number: i64,

    pub meeting_key: i64,

    pub session_key: i64,

    pub x: i64,

    pub y: i64,

    pub z: i64,
}
