//! Per-resource query builders.
//!
//! Each builder holds one optional field per filterable upstream parameter. The
//! field name is the wire name, so `raw_params` is derived directly from the
//! struct definition.

use chrono::{DateTime, FixedOffset};

use crate::types::{Flag, RaceControlCategory, RaceControlScope, SessionType, TyreCompound};

use super::common::{ParamValue, Query};
use super::filter::{DateFilter, IdFilter, NumberFilter};

macro_rules! define_query {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $field:ident / $setter:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: Option<$ty>, )*
        }

        impl $name {
            $(
                pub fn $setter(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl Query for $name {
            fn raw_params(&self) -> Vec<(&'static str, Option<ParamValue>)> {
                vec![
                    $( (stringify!($field), self.$field.clone().map(ParamValue::from)), )*
                ]
            }
        }
    };
}

define_query! {
    /// Filters for `/car_data`: per-car telemetry sampled at about 3.7 Hz.
    CarDataQuery {
        date / with_date: DateFilter,
        driver_number / with_driver_number: i64,
        meeting_key / with_meeting_key: IdFilter,
        /// Gear selection, 1 to 8; 0 is neutral.
        n_gear / with_n_gear: NumberFilter,
        rpm / with_rpm: NumberFilter,
        session_key / with_session_key: IdFilter,
        /// Speed in km/h.
        speed / with_speed: NumberFilter,
        /// Throttle position as a percentage.
        throttle / with_throttle: NumberFilter,
    }
}

define_query! {
    /// Filters for `/drivers`.
    DriversQuery {
        broadcast_name / with_broadcast_name: String,
        country_code / with_country_code: String,
        driver_number / with_driver_number: i64,
        first_name / with_first_name: String,
        full_name / with_full_name: String,
        headshot_url / with_headshot_url: String,
        last_name / with_last_name: String,
        meeting_key / with_meeting_key: IdFilter,
        name_acronym / with_name_acronym: String,
        session_key / with_session_key: IdFilter,
        /// Team colour as `RRGGBB`.
        team_colour / with_team_colour: String,
        team_name / with_team_name: String,
    }
}

define_query! {
    /// Filters for `/intervals`. Only available during races.
    IntervalsQuery {
        date / with_date: DateFilter,
        driver_number / with_driver_number: i64,
        /// Gap to the race leader in seconds.
        gap_to_leader / with_gap_to_leader: NumberFilter,
        /// Gap to the car ahead in seconds.
        interval / with_interval: NumberFilter,
        meeting_key / with_meeting_key: IdFilter,
        session_key / with_session_key: IdFilter,
    }
}

define_query! {
    /// Filters for `/laps`.
    LapsQuery {
        driver_number / with_driver_number: i64,
        duration_sector_1 / with_duration_sector_1: NumberFilter,
        duration_sector_2 / with_duration_sector_2: NumberFilter,
        duration_sector_3 / with_duration_sector_3: NumberFilter,
        i1_speed / with_i1_speed: NumberFilter,
        i2_speed / with_i2_speed: NumberFilter,
        is_pit_out_lap / with_is_pit_out_lap: bool,
        lap_duration / with_lap_duration: NumberFilter,
        lap_number / with_lap_number: i64,
        meeting_key / with_meeting_key: IdFilter,
        session_key / with_session_key: IdFilter,
        /// Speed at the speed trap in km/h.
        st_speed / with_st_speed: NumberFilter,
    }
}

define_query! {
    /// Filters for `/location`.
    LocationQuery {
        date / with_date: DateFilter,
        driver_number / with_driver_number: i64,
        meeting_key / with_meeting_key: IdFilter,
        session_key / with_session_key: IdFilter,
        x / with_x: i64,
        y / with_y: i64,
        z / with_z: i64,
    }
}

define_query! {
    /// Filters for `/meetings`.
    MeetingsQuery {
        circuit_key / with_circuit_key: i64,
        circuit_short_name / with_circuit_short_name: String,
        country_code / with_country_code: String,
        country_key / with_country_key: i64,
        country_name / with_country_name: String,
        date_start / with_date_start: DateTime<FixedOffset>,
        /// Offset from GMT as `hh:mm:ss`.
        gmt_offset / with_gmt_offset: String,
        location / with_location: String,
        meeting_key / with_meeting_key: IdFilter,
        meeting_name / with_meeting_name: String,
        meeting_official_name / with_meeting_official_name: String,
        year / with_year: i64,
    }
}

define_query! {
    /// Filters for `/pit`.
    PitQuery {
        date / with_date: DateFilter,
        driver_number / with_driver_number: i64,
        lap_number / with_lap_number: i64,
        meeting_key / with_meeting_key: IdFilter,
        /// Time from pit entry to pit exit in seconds.
        pit_duration / with_pit_duration: NumberFilter,
        session_key / with_session_key: IdFilter,
    }
}

define_query! {
    /// Filters for `/position`.
    PositionQuery {
        date / with_date: DateFilter,
        driver_number / with_driver_number: i64,
        meeting_key / with_meeting_key: IdFilter,
        position / with_position: NumberFilter,
        session_key / with_session_key: IdFilter,
    }
}

define_query! {
    /// Filters for `/race_control`.
    RaceControlQuery {
        category / with_category: RaceControlCategory,
        date / with_date: DateFilter,
        driver_number / with_driver_number: i64,
        flag / with_flag: Flag,
        lap_number / with_lap_number: NumberFilter,
        meeting_key / with_meeting_key: IdFilter,
        message / with_message: String,
        scope / with_scope: RaceControlScope,
        sector / with_sector: NumberFilter,
        session_key / with_session_key: IdFilter,
    }
}

define_query! {
    /// Filters for `/sessions`.
    SessionsQuery {
        circuit_key / with_circuit_key: i64,
        circuit_short_name / with_circuit_short_name: String,
        country_code / with_country_code: String,
        country_key / with_country_key: i64,
        country_name / with_country_name: String,
        date_end / with_date_end: DateTime<FixedOffset>,
        date_start / with_date_start: DateTime<FixedOffset>,
        gmt_offset / with_gmt_offset: String,
        location / with_location: String,
        meeting_key / with_meeting_key: IdFilter,
        session_key / with_session_key: IdFilter,
        session_name / with_session_name: String,
        session_type / with_session_type: SessionType,
        year / with_year: i64,
    }
}

define_query! {
    /// Filters for `/stints`.
    StintsQuery {
        compound / with_compound: TyreCompound,
        driver_number / with_driver_number: i64,
        lap_end / with_lap_end: NumberFilter,
        lap_start / with_lap_start: NumberFilter,
        meeting_key / with_meeting_key: IdFilter,
        session_key / with_session_key: IdFilter,
        stint_number / with_stint_number: NumberFilter,
        /// Tyre age in laps when the stint began.
        tyre_age_at_start / with_tyre_age_at_start: NumberFilter,
    }
}

define_query! {
    /// Filters for `/team_radio`.
    TeamRadioQuery {
        date / with_date: DateFilter,
        driver_number / with_driver_number: i64,
        meeting_key / with_meeting_key: IdFilter,
        session_key / with_session_key: IdFilter,
    }
}

define_query! {
    /// Filters for `/weather`, sampled once a minute.
    WeatherQuery {
        air_temperature / with_air_temperature: NumberFilter,
        date / with_date: DateFilter,
        humidity / with_humidity: NumberFilter,
        meeting_key / with_meeting_key: IdFilter,
        pressure / with_pressure: NumberFilter,
        rainfall / with_rainfall: NumberFilter,
        session_key / with_session_key: IdFilter,
        track_temperature / with_track_temperature: NumberFilter,
        /// Degrees, 0 to 359.
        wind_direction / with_wind_direction: NumberFilter,
        wind_speed / with_wind_speed: NumberFilter,
    }
}
