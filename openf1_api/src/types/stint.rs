use serde::{Deserialize, Serialize};

/// A run of consecutive laps on one set of tyres, from `/stints`.
///
/// Most fields are nullable upstream while a stint is still in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stint {
    #[serde(default)]
    pub compound: Option<TyreCompound>,

    #[serde(default)]
    pub driver_number: Option<i64>,

    #[serde(default)]
    pub lap_end: Option<i64>,

    #[serde(default)]
    pub lap_start: Option<i64>,

    pub meeting_key: i64,

    pub session_key: i64,

    #[serde(default)]
    pub stint_number: Option<i64>,

    /// Laps already driven on the set when the stint began.
    #[serde(default)]
    pub tyre_age_at_start: Option<i64>,
}

impl Stint {
    /// Number of laps in the stint, when both ends are known.
    pub fn lap_count(&self) -> Option<i64> {
        match (self.lap_start, self.lap_end) {
            (Some(start), Some(end)) if end >= start => Some(end - start + 1),
            _ => None,
        }
    }
}

wire_enum! {
    TyreCompound {
        Soft => "SOFT",
        Medium => "MEDIUM",
        Hard => "HARD",
        Intermediate => "INTERMEDIATE",
        Wet => "WET",
        TestUnknown => "TEST_UNKNOWN",
        Unknown => "UNKNOWN",
    }
}
