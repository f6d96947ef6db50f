use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Track-side weather, sampled every minute, from `/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// °C
    pub air_temperature: f64,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    /// Relative humidity in percent.
    pub humidity: f64,

    pub meeting_key: i64,

    /// mbar
    pub pressure: f64,

    /// 1 when it is raining, 0 otherwise.
    pub rainfall: i64,

    pub session_key: i64,

    /// °C
    pub track_temperature: f64,

    /// Degrees, 0 to 359.
    pub wind_direction: i64,

    /// m/s
    pub wind_speed: f64,
}

impl Weather {
    pub fn is_raining(&self) -> bool {
        self.rainfall != 0
    }
}
