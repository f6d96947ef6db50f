//! Car telemetry returned by `/car_data`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

use super::timestamp;

/// One telemetry sample for one car, taken at about 3.7 Hz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarData {
    pub brake: Brake,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    pub driver_number: i64,

    pub drs: Drs,

    pub meeting_key: i64,

    /// Gear, 1 to 8. 0 is neutral.
    pub n_gear: i64,

    pub rpm: i64,

    pub session_key: i64,

    /// km/h
    pub speed: i64,

    /// Percentage of full throttle.
    pub throttle: i64,
}

/// Brake pedal state. The API reports 100 when pressed and 0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Brake {
    Engaged,
    Disengaged,
}

impl Brake {
    pub fn raw_value(&self) -> i64 {
        match self {
            Brake::Engaged => 100,
            Brake::Disengaged => 0,
        }
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self, Brake::Engaged)
    }
}

impl TryFrom<i64> for Brake {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            100 => Ok(Brake::Engaged),
            0 => Ok(Brake::Disengaged),
            other => Err(Error::malformed(format!(
                "{} is not a valid brake value",
                other
            ))),
        }
    }
}

impl From<Brake> for i64 {
    fn from(brake: Brake) -> Self {
        brake.raw_value()
    }
}

impl fmt::Display for Brake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Brake::Engaged => "engaged",
                Brake::Disengaged => "disengaged",
            }
        )
    }
}

/// Drag Reduction System state.
///
/// Several raw codes map to the same state, and unknown codes decode to
/// [`Drs::Unknown`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64")]
pub enum Drs {
    Off,
    /// Within one second of the car ahead in a DRS zone, not yet opened.
    Detected,
    On,
    Unknown,
}

impl Drs {
    pub fn from_int(raw: i64) -> Self {
        match raw {
            0 | 1 => Drs::Off,
            8 => Drs::Detected,
            10 | 12 | 14 => Drs::On,
            _ => Drs::Unknown,
        }
    }
}

impl From<i64> for Drs {
    fn from(raw: i64) -> Self {
        Drs::from_int(raw)
    }
}

impl fmt::Display for Drs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Drs::Off => "off",
                Drs::Detected => "detected",
                Drs::On => "on",
                Drs::Unknown => "unknown",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drs_mapping() {
        assert_eq!(Drs::from_int(0), Drs::Off);
        assert_eq!(Drs::from_int(1), Drs::Off);
        assert_eq!(Drs::from_int(8), Drs::Detected);
        assert_eq!(Drs::from_int(10), Drs::On);
        assert_eq!(Drs::from_int(12), Drs::On);
        assert_eq!(Drs::from_int(14), Drs::On);
        assert_eq!(Drs::from_int(99), Drs::Unknown);
        assert_eq!(Drs::from_int(-1), Drs::Unknown);
    }

    #[test]
    fn brake_is_strict() {
        assert_eq!(Brake::try_from(100).unwrap(), Brake::Engaged);
        assert_eq!(Brake::try_from(0).unwrap(), Brake::Disengaged);
        assert!(matches!(
            Brake::try_from(50),
            Err(Error::MalformedResponse { .. })
        ));
        assert_eq!(i64::from(Brake::Engaged), 100);
    }

    #[test]
    fn decode_sample() {
        let json = r#"{
            "brake": 100,
            "date": "2023-09-16T13:03:35.292000+00:00",
            "driver_number": 55,
            "drs": 12,
            "meeting_key": 1219,
            "n_gear": 8,
            "rpm": 11141,
            "session_key": 9159,
            "speed": 315,
            "throttle": 99
        }"#;
        let sample: CarData = serde_json::from_str(json).unwrap();
        assert_eq!(sample.brake, Brake::Engaged);
        assert_eq!(sample.drs, Drs::On);
        assert_eq!(sample.speed, 315);
    }

    #[test]
    fn unknown_brake_value_fails_decoding() {
        let json = r#"{
            "brake": 7,
            "date": "2023-09-16T13:03:35.292000+00:00",
            "driver_number": 55,
            "drs": 12,
            "meeting_key": 1219,
            "n_gear": 8,
            "rpm": 11141,
            "session_key": 9159,
            "speed": 315,
            "throttle": 99
        }"#;
        let err = serde_json::from_str::<CarData>(json).unwrap_err();
        assert!(err.to_string().contains("brake"));
    }
}
