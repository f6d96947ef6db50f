mod common;
pub use self::common::{encode, to_query_string, ParamValue, Query};

mod filter;
pub use self::filter::{DateFilter, FilterOperator, IdFilter, NumberFilter};

mod resources;
pub use self::resources::{
    CarDataQuery, DriversQuery, IntervalsQuery, LapsQuery, LocationQuery, MeetingsQuery,
    PitQuery, PositionQuery, RaceControlQuery, SessionsQuery, StintsQuery, TeamRadioQuery,
    WeatherQuery,
};
