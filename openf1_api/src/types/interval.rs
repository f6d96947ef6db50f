use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

use super::timestamp;

const LAPPED_SUFFIX: &str = " LAP";

/// Gaps between cars during a race, from `/intervals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    pub date: DateTime<Utc>,

    pub driver_number: i64,

    /// Gap to the race leader.
    pub gap_to_leader: TimeGap,

    /// Gap to the car directly ahead.
    pub interval: TimeGap,

    pub meeting_key: i64,

    pub session_key: i64,
}

/// Wire shape of an interval record, before the gap values are interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawInterval {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    pub driver_number: i64,

    #[serde(default)]
    pub gap_to_leader: Option<RawGap>,

    #[serde(default)]
    pub interval: Option<RawGap>,

    pub meeting_key: i64,

    pub session_key: i64,
}

/// A raw gap value: seconds, or text such as `+1 LAP`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawGap {
    Seconds(f64),
    Text(String),
}

impl TryFrom<RawInterval> for Interval {
    type Error = Error;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Ok(Interval {
            date: raw.date,
            driver_number: raw.driver_number,
            gap_to_leader: TimeGap::from_raw(raw.gap_to_leader)?,
            interval: TimeGap::from_raw(raw.interval)?,
            meeting_key: raw.meeting_key,
            session_key: raw.session_key,
        })
    }
}

/// A time gap that may instead be expressed in laps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeGap {
    /// True for the leader, whose gap is `0.0` or null.
    pub is_leader: bool,

    pub is_lapped: bool,

    /// Laps behind, only set when lapped.
    pub lapped_count: Option<u32>,

    /// Seconds, only set when strictly positive.
    pub gap: Option<f64>,
}

impl TimeGap {
    pub fn from_raw(raw: Option<RawGap>) -> Result<Self, Error> {
        match raw {
            None => Ok(Self::leader()),
            Some(RawGap::Seconds(seconds)) => Ok(Self::from_seconds(seconds)),
            Some(RawGap::Text(text)) => Self::parse(&text),
        }
    }

    pub fn from_seconds(seconds: f64) -> Self {
        TimeGap {
            is_leader: seconds == 0.0,
            is_lapped: false,
            lapped_count: None,
            gap: (seconds > 0.0).then_some(seconds),
        }
    }

    /// Parses the textual form, `N LAP` or `+N LAP`.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let count = text
            .strip_suffix(LAPPED_SUFFIX)
            .map(|n| n.trim().trim_start_matches('+'))
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(|| {
                Error::invalid_argument(format!("Value for gap ({}) is not valid", text))
            })?;

        Ok(TimeGap {
            is_leader: false,
            is_lapped: true,
            lapped_count: Some(count),
            gap: None,
        })
    }

    fn leader() -> Self {
        TimeGap {
            is_leader: true,
            is_lapped: false,
            lapped_count: None,
            gap: None,
        }
    }
}

impl fmt::Display for TimeGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.gap, self.lapped_count) {
            (_, Some(laps)) => write!(f, "+{} LAP", laps),
            (Some(gap), None) => write!(f, "+{:.3}", gap),
            (None, None) => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_leader() {
        let gap = TimeGap::from_seconds(0.0);
        assert!(gap.is_leader);
        assert!(!gap.is_lapped);
        assert!(gap.gap.is_none());
    }

    #[test]
    fn null_is_leader() {
        let gap = TimeGap::from_raw(None).unwrap();
        assert!(gap.is_leader);
        assert!(gap.gap.is_none());
        assert!(gap.lapped_count.is_none());
    }

    #[test]
    fn positive_seconds() {
        let gap = TimeGap::from_raw(Some(RawGap::Seconds(1.234))).unwrap();
        assert!(!gap.is_leader);
        assert_eq!(gap.gap, Some(1.234));
        assert!(!gap.is_lapped);
    }

    #[test]
    fn lapped() {
        let gap = TimeGap::parse("2 LAP").unwrap();
        assert!(gap.is_lapped);
        assert_eq!(gap.lapped_count, Some(2));
        assert!(gap.gap.is_none());
        assert!(!gap.is_leader);

        let gap = TimeGap::from_raw(Some(RawGap::Text("+1 LAP".into()))).unwrap();
        assert_eq!(gap.lapped_count, Some(1));
    }

    #[test]
    fn garbage_is_invalid_argument() {
        assert!(matches!(
            TimeGap::parse("garbage"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(TimeGap::parse("many LAP").is_err());
        assert!(matches!(
            TimeGap::parse("+2 LAPS"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(TimeGap::from_seconds(0.0).to_string(), "-");
        assert_eq!(TimeGap::from_seconds(1.5).to_string(), "+1.500");
        assert_eq!(TimeGap::parse("2 LAP").unwrap().to_string(), "+2 LAP");
    }

    #[test]
    fn raw_gap_accepts_integers_and_strings() {
        let raw: RawGap = serde_json::from_str("0").unwrap();
        assert_eq!(raw, RawGap::Seconds(0.0));
        let raw: RawGap = serde_json::from_str("\"+3 LAP\"").unwrap();
        assert_eq!(raw, RawGap::Text("+3 LAP".into()));
    }

    #[test]
    fn decode_interval() {
        let json = r#"{
            "date": "2023-09-17T13:31:02.395000+00:00",
            "driver_number": 1,
            "gap_to_leader": 41.019,
            "interval": "+1 LAP",
            "meeting_key": 1219,
            "session_key": 9165
        }"#;
        let interval: Interval = serde_json::from_str(json).unwrap();
        assert_eq!(interval.gap_to_leader.gap, Some(41.019));
        assert!(interval.interval.is_lapped);
    }
}
