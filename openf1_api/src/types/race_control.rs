use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A message from race control, from `/race_control`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceControl {
    pub category: RaceControlCategory,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub driver_number: Option<i64>,

    #[serde(default)]
    pub flag: Option<Flag>,

    #[serde(default)]
    pub lap_number: Option<i64>,

    pub meeting_key: i64,

    pub message: String,

    #[serde(default)]
    pub scope: Option<RaceControlScope>,

    /// Mini-sector number, when the scope is a sector.
    #[serde(default)]
    pub sector: Option<i64>,

    pub session_key: i64,
}

wire_enum! {
    /// Flag shown by race control.
    Flag {
        Green => "GREEN",
        Yellow => "YELLOW",
        Red => "RED",
        Blue => "BLUE",
        DoubleYellow => "DOUBLE YELLOW",
        Chequered => "CHEQUERED",
        Clear => "CLEAR",
        BlackAndWhite => "BLACK AND WHITE",
    }
}

wire_enum! {
    RaceControlCategory {
        CarEvent => "CarEvent",
        Drs => "Drs",
        Flag => "Flag",
        SafetyCar => "SafetyCar",
        Other => "Other",
    }
}

wire_enum! {
    /// What a race control message applies to.
    RaceControlScope {
        Track => "Track",
        Driver => "Driver",
        Sector => "Sector",
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    #[test]
    fn flag_wire_values() {
        assert_eq!(Flag::DoubleYellow.as_str(), "DOUBLE YELLOW");
        assert_eq!(Flag::BlackAndWhite.to_string(), "BLACK AND WHITE");
        assert_eq!(Flag::from_str("CHEQUERED").unwrap(), Flag::Chequered);
        assert_eq!(Flag::ALL.len(), 8);
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        assert!(matches!(
            Flag::from_str("yellow"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(RaceControlScope::from_str("Pitlane").is_err());
    }

    #[test]
    fn category_round_trips_through_wire_value() {
        for category in RaceControlCategory::ALL {
            assert_eq!(
                RaceControlCategory::from_str(category.as_str()).unwrap(),
                *category
            );
        }
    }

    #[test]
    fn decode_message_with_nulls() {
        let json = r#"{
            "category": "SafetyCar",
            "date": "2023-09-17T12:47:22+00:00",
            "driver_number": null,
            "flag": null,
            "lap_number": 19,
            "meeting_key": 1219,
            "message": "SAFETY CAR DEPLOYED",
            "scope": "Track",
            "sector": null,
            "session_key": 9165
        }"#;
        let message: RaceControl = serde_json::from_str(json).unwrap();
        assert_eq!(message.category, RaceControlCategory::SafetyCar);
        assert_eq!(message.scope, Some(RaceControlScope::Track));
        assert!(message.flag.is_none());
        assert!(message.driver_number.is_none());
        assert_eq!(message.lap_number, Some(19));
    }

    #[test]
    fn unknown_flag_fails_decoding() {
        let json = r#"{
            "category": "Flag",
            "date": "2023-09-17T12:47:22+00:00",
            "flag": "PURPLE",
            "meeting_key": 1219,
            "message": "?",
            "session_key": 9165
        }"#;
        let err = serde_json::from_str::<RaceControl>(json).unwrap_err();
        assert!(err.to_string().contains("PURPLE"));
    }
}
