use chrono::{FixedOffset, TimeZone, Utc};
use openf1_api::query::{encode, ParamValue};
use openf1_api::types::{Flag, RaceControlCategory, RaceControlScope, SessionType, TyreCompound};
use openf1_api::{
    CarDataQuery, DateFilter, DriversQuery, IdFilter, IntervalsQuery, LapsQuery, LocationQuery,
    MeetingsQuery, NumberFilter, PitQuery, PositionQuery, Query, RaceControlQuery, SessionsQuery,
    StintsQuery, TeamRadioQuery, WeatherQuery,
};

#[test]
fn every_default_query_is_empty() {
    let queries: Vec<Box<dyn Query>> = vec![
        Box::new(CarDataQuery::default()),
        Box::new(DriversQuery::default()),
        Box::new(IntervalsQuery::default()),
        Box::new(LapsQuery::default()),
        Box::new(LocationQuery::default()),
        Box::new(MeetingsQuery::default()),
        Box::new(PitQuery::default()),
        Box::new(PositionQuery::default()),
        Box::new(RaceControlQuery::default()),
        Box::new(SessionsQuery::default()),
        Box::new(StintsQuery::default()),
        Box::new(TeamRadioQuery::default()),
        Box::new(WeatherQuery::default()),
    ];
    for query in queries {
        assert_eq!(query.to_query_string(), "");
    }
}

#[test]
fn car_data_query() {
    let start = Utc.with_ymd_and_hms(2023, 9, 16, 13, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 9, 16, 13, 5, 0).unwrap();

    insta::assert_snapshot!(
        CarDataQuery::default()
            .with_driver_number(55)
            .with_session_key(IdFilter::id(9159))
            .with_speed(NumberFilter::greater_than(315))
            .to_query_string(),
        @"driver_number=55&session_key=9159&speed>=315"
    );

    insta::assert_snapshot!(
        CarDataQuery::default()
            .with_date(DateFilter::between(start, end))
            .with_n_gear(NumberFilter::equal(8))
            .to_query_string(),
        @"date_start>=2023-09-16T13%3A00%3A00%2B00%3A00&date_end<=2023-09-16T13%3A05%3A00%2B00%3A00&n_gear=8"
    );
}

#[test]
fn drivers_query_encodes_spaces() {
    insta::assert_snapshot!(
        DriversQuery::default()
            .with_team_name("Red Bull Racing")
            .with_session_key(IdFilter::latest())
            .to_query_string(),
        @"session_key=latest&team_name=Red+Bull+Racing"
    );
}

#[test]
fn intervals_query() {
    insta::assert_snapshot!(
        IntervalsQuery::default()
            .with_interval(NumberFilter::less_than(0.005))
            .with_session_key(IdFilter::latest())
            .to_query_string(),
        @"interval<=0.005&session_key=latest"
    );
}

#[test]
fn laps_query() {
    insta::assert_snapshot!(
        LapsQuery::default()
            .with_driver_number(63)
            .with_is_pit_out_lap(false)
            .with_lap_duration(NumberFilter::less_than(92.5))
            .with_session_key(IdFilter::id(9161))
            .to_query_string(),
        @"driver_number=63&is_pit_out_lap=false&lap_duration<=92.5&session_key=9161"
    );
}

#[test]
fn location_query() {
    let exact = Utc.with_ymd_and_hms(2023, 9, 16, 13, 3, 35).unwrap();
    insta::assert_snapshot!(
        LocationQuery::default()
            .with_date(DateFilter::exact(exact))
            .with_driver_number(81)
            .to_query_string(),
        @"date=2023-09-16T13%3A03%3A35%2B00%3A00&driver_number=81"
    );
}

#[test]
fn meetings_query_with_offset_date() {
    let singapore = FixedOffset::east_opt(8 * 3600).unwrap();
    let start = singapore.with_ymd_and_hms(2023, 9, 15, 17, 30, 0).unwrap();
    insta::assert_snapshot!(
        MeetingsQuery::default()
            .with_country_name("Singapore")
            .with_date_start(start)
            .with_year(2023)
            .to_query_string(),
        @"country_name=Singapore&date_start=2023-09-15T17%3A30%3A00%2B08%3A00&year=2023"
    );
}

#[test]
fn pit_and_position_queries() {
    insta::assert_snapshot!(
        PitQuery::default()
            .with_pit_duration(NumberFilter::less_than(31))
            .with_meeting_key(IdFilter::latest())
            .to_query_string(),
        @"meeting_key=latest&pit_duration<=31"
    );

    insta::assert_snapshot!(
        PositionQuery::default()
            .with_position(NumberFilter::less_than(4))
            .with_meeting_key(IdFilter::id(1217))
            .to_query_string(),
        @"meeting_key=1217&position<=4"
    );
}

#[test]
fn race_control_query() {
    insta::assert_snapshot!(
        RaceControlQuery::default()
            .with_category(RaceControlCategory::Flag)
            .with_flag(Flag::DoubleYellow)
            .with_scope(RaceControlScope::Sector)
            .with_sector(NumberFilter::greater_than(10))
            .to_query_string(),
        @"category=Flag&flag=DOUBLE+YELLOW&scope=Sector&sector>=10"
    );
}

#[test]
fn sessions_query() {
    insta::assert_snapshot!(
        SessionsQuery::default()
            .with_country_name("Belgium")
            .with_session_name("Sprint")
            .with_session_type(SessionType::Race)
            .with_year(2023)
            .to_query_string(),
        @"country_name=Belgium&session_name=Sprint&session_type=Race&year=2023"
    );
}

#[test]
fn stints_and_team_radio_queries() {
    insta::assert_snapshot!(
        StintsQuery::default()
            .with_compound(TyreCompound::TestUnknown)
            .with_tyre_age_at_start(NumberFilter::greater_than(3))
            .to_query_string(),
        @"compound=TEST_UNKNOWN&tyre_age_at_start>=3"
    );

    insta::assert_snapshot!(
        TeamRadioQuery::default()
            .with_driver_number(11)
            .with_session_key(IdFilter::id(9158))
            .to_query_string(),
        @"driver_number=11&session_key=9158"
    );
}

#[test]
fn weather_query() {
    insta::assert_snapshot!(
        WeatherQuery::default()
            .with_air_temperature(NumberFilter::greater_than(27.5))
            .with_rainfall(NumberFilter::equal(1))
            .with_track_temperature(NumberFilter::less_than(55))
            .to_query_string(),
        @"air_temperature>=27.5&rainfall=1&track_temperature<=55"
    );
}

#[test]
fn encode_pairs_directly() {
    let pairs = encode(&[
        ("driver_number", Some(ParamValue::from(1))),
        ("speed", Some(ParamValue::from(NumberFilter::greater_than(320)))),
        ("flag", Some(ParamValue::from(Flag::Yellow))),
        ("lap_number", None),
    ]);
    assert_eq!(
        pairs,
        vec![
            ("driver_number".to_string(), "1".to_string()),
            ("speed>".to_string(), "320".to_string()),
            ("flag".to_string(), "YELLOW".to_string()),
        ]
    );
}
