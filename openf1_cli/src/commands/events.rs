//! Session events: `race-control`, `team-radio`, `weather`.

use anyhow::Result;
use clap::Args;
use openf1_api::types::{Flag, RaceControlCategory, RaceControlScope};
use openf1_api::{Client, RaceControlQuery, TeamRadioQuery, WeatherQuery};

use super::{driver_number, number_filter, parse_opt, KeyArgs, WindowArgs};
use crate::output::{print_records, OutputFormat};
use crate::validation;

#[derive(Args, Debug)]
pub struct RaceControlArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,

    /// Flag: green, yellow, double-yellow, red, blue, chequered, clear, black-and-white
    #[arg(long)]
    pub flag: Option<String>,

    /// Category: car-event, drs, flag, safety-car, other
    #[arg(long)]
    pub category: Option<String>,

    /// Scope: track, driver, sector
    #[arg(long)]
    pub scope: Option<String>,

    /// Lap number: >N, <N or N
    #[arg(long)]
    pub lap_number: Option<String>,
}

pub async fn run_race_control(
    args: &RaceControlArgs,
    client: &Client,
    format: OutputFormat,
) -> Result<()> {
    let query = RaceControlQuery {
        category: parse_opt(&args.category, |c| {
            validation::parse_choice(c, RaceControlCategory::ALL, "category")
        })?,
        date: args.window.date_filter()?,
        driver_number: driver_number(args.driver_number)?,
        flag: parse_opt(&args.flag, |f| validation::parse_choice(f, Flag::ALL, "flag"))?,
        lap_number: number_filter(&args.lap_number)?,
        meeting_key: args.keys.meeting_key()?,
        scope: parse_opt(&args.scope, |s| {
            validation::parse_choice(s, RaceControlScope::ALL, "scope")
        })?,
        session_key: args.keys.session_key()?,
        ..RaceControlQuery::default()
    };
    let messages = client.race_control(&query).await?;
    print_records(&messages, format)
}

#[derive(Args, Debug)]
pub struct TeamRadioArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,
}

pub async fn run_team_radio(
    args: &TeamRadioArgs,
    client: &Client,
    format: OutputFormat,
) -> Result<()> {
    let query = TeamRadioQuery {
        date: args.window.date_filter()?,
        driver_number: driver_number(args.driver_number)?,
        meeting_key: args.keys.meeting_key()?,
        session_key: args.keys.session_key()?,
    };
    let radios = client.team_radio(&query).await?;
    print_records(&radios, format)
}

#[derive(Args, Debug)]
pub struct WeatherArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Air temperature in °C: >N, <N or N
    #[arg(long)]
    pub air_temperature: Option<String>,

    /// Track temperature in °C: >N, <N or N
    #[arg(long)]
    pub track_temperature: Option<String>,

    /// Only samples where it was raining
    #[arg(long)]
    pub raining: bool,
}

pub async fn run_weather(args: &WeatherArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = WeatherQuery {
        air_temperature: number_filter(&args.air_temperature)?,
        date: args.window.date_filter()?,
        meeting_key: args.keys.meeting_key()?,
        rainfall: args.raining.then(|| openf1_api::NumberFilter::equal(1)),
        session_key: args.keys.session_key()?,
        track_temperature: number_filter(&args.track_temperature)?,
        ..WeatherQuery::default()
    };
    let weather = client.weather(&query).await?;
    print_records(&weather, format)
}
