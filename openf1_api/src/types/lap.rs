use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A completed lap, from `/laps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date_start: DateTime<Utc>,

    pub driver_number: i64,

    pub duration_sector_1: f64,

    pub duration_sector_2: f64,

    pub duration_sector_3: f64,

    /// Speed at the first intermediate point, km/h.
    pub i1_speed: i64,

    /// Speed at the second intermediate point, km/h.
    pub i2_speed: i64,

    pub is_pit_out_lap: bool,

    /// Seconds.
    pub lap_duration: f64,

    pub lap_number: i64,

    pub meeting_key: i64,

    pub segments_sector_1: Vec<SegmentSector>,

    pub segments_sector_2: Vec<SegmentSector>,

    pub segments_sector_3: Vec<SegmentSector>,

    pub session_key: i64,

    /// Speed at the speed trap, km/h.
    pub st_speed: i64,
}

impl Lap {
    /// All mini-sectors of the lap in track order.
    pub fn segments(&self) -> impl Iterator<Item = &SegmentSector> {
        self.segments_sector_1
            .iter()
            .chain(&self.segments_sector_2)
            .chain(&self.segments_sector_3)
    }
}

/// Live-timing colour of a mini-sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64")]
pub enum SegmentSector {
    #[default]
    Unknown,
    Yellow,
    Green,
    Purple,
    Pitlane,
}

impl SegmentSector {
    pub fn from_int(raw: i64) -> Self {
        match raw {
            2048 => SegmentSector::Yellow,
            2049 => SegmentSector::Green,
            2051 => SegmentSector::Purple,
            2064 => SegmentSector::Pitlane,
            _ => SegmentSector::Unknown,
        }
    }
}

impl From<i64> for SegmentSector {
    fn from(raw: i64) -> Self {
        SegmentSector::from_int(raw)
    }
}

impl fmt::Display for SegmentSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SegmentSector::Unknown => "unknown",
                SegmentSector::Yellow => "yellow",
                SegmentSector::Green => "green",
                SegmentSector::Purple => "purple",
                SegmentSector::Pitlane => "pitlane",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_mapping() {
        assert_eq!(SegmentSector::from_int(2048), SegmentSector::Yellow);
        assert_eq!(SegmentSector::from_int(2049), SegmentSector::Green);
        assert_eq!(SegmentSector::from_int(2051), SegmentSector::Purple);
        assert_eq!(SegmentSector::from_int(2064), SegmentSector::Pitlane);
        assert_eq!(SegmentSector::from_int(1), SegmentSector::Unknown);
        assert_eq!(SegmentSector::from_int(0), SegmentSector::Unknown);
    }

    #[test]
    fn decode_lap_segments() {
        let json = r#"{
            "date_start": "2023-09-16T13:59:07.606000+00:00",
            "driver_number": 63,
            "duration_sector_1": 26.966,
            "duration_sector_2": 38.657,
            "duration_sector_3": 26.12,
            "i1_speed": 307,
            "i2_speed": 277,
            "is_pit_out_lap": false,
            "lap_duration": 91.743,
            "lap_number": 8,
            "meeting_key": 1219,
            "segments_sector_1": [2049, 2049, 2051],
            "segments_sector_2": [2048, 0],
            "segments_sector_3": [2064],
            "session_key": 9161,
            "st_speed": 298
        }"#;
        let lap: Lap = serde_json::from_str(json).unwrap();
        assert_eq!(
            lap.segments_sector_1,
            vec![
                SegmentSector::Green,
                SegmentSector::Green,
                SegmentSector::Purple
            ]
        );
        assert_eq!(
            lap.segments_sector_2,
            vec![SegmentSector::Yellow, SegmentSector::Unknown]
        );
        assert_eq!(lap.segments().count(), 6);
    }
}
