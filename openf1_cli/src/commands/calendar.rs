//! Calendar and entry lists: `meetings`, `sessions`, `drivers`.

use anyhow::Result;
use clap::Args;
use openf1_api::types::SessionType;
use openf1_api::{Client, DriversQuery, MeetingsQuery, SessionsQuery};

use super::{driver_number, parse_opt, text, KeyArgs};
use crate::output::{print_records, OutputFormat};
use crate::validation;

#[derive(Args, Debug)]
pub struct MeetingsArgs {
    /// Meeting key, or 'latest'
    #[arg(long)]
    pub meeting_key: Option<String>,

    /// Season, e.g. 2023
    #[arg(long)]
    pub year: Option<i64>,

    /// Country, e.g. "Singapore"
    #[arg(long)]
    pub country_name: Option<String>,

    /// Circuit short name, e.g. "Spa-Francorchamps"
    #[arg(long)]
    pub circuit: Option<String>,
}

pub async fn run_meetings(args: &MeetingsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = MeetingsQuery {
        circuit_short_name: text(&args.circuit)?,
        country_name: text(&args.country_name)?,
        meeting_key: parse_opt(&args.meeting_key, validation::parse_id_filter)?,
        year: args.year.map(validation::validate_year).transpose()?,
        ..MeetingsQuery::default()
    };
    let meetings = client.meetings(&query).await?;
    print_records(&meetings, format)
}

#[derive(Args, Debug)]
pub struct SessionsArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    /// Season, e.g. 2023
    #[arg(long)]
    pub year: Option<i64>,

    /// Country, e.g. "Belgium"
    #[arg(long)]
    pub country_name: Option<String>,

    /// Session type: practice, qualifying, race
    #[arg(long)]
    pub session_type: Option<String>,

    /// Session name, e.g. "Sprint" or "Practice 1"
    #[arg(long)]
    pub session_name: Option<String>,
}

pub async fn run_sessions(args: &SessionsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = SessionsQuery {
        country_name: text(&args.country_name)?,
        meeting_key: args.keys.meeting_key()?,
        session_key: args.keys.session_key()?,
        session_name: text(&args.session_name)?,
        session_type: parse_opt(&args.session_type, |t| {
            validation::parse_choice(t, SessionType::ALL, "session type")
        })?,
        year: args.year.map(validation::validate_year).transpose()?,
        ..SessionsQuery::default()
    };
    let sessions = client.sessions(&query).await?;
    print_records(&sessions, format)
}

#[derive(Args, Debug)]
pub struct DriversArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,

    /// Three-letter acronym, e.g. VER
    #[arg(long)]
    pub acronym: Option<String>,

    /// Team, e.g. "Red Bull Racing"
    #[arg(long)]
    pub team_name: Option<String>,
}

pub async fn run_drivers(args: &DriversArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = DriversQuery {
        driver_number: driver_number(args.driver_number)?,
        meeting_key: args.keys.meeting_key()?,
        name_acronym: text(&args.acronym)?.map(|a| a.to_uppercase()),
        session_key: args.keys.session_key()?,
        team_name: text(&args.team_name)?,
        ..DriversQuery::default()
    };
    let drivers = client.drivers(&query).await?;
    print_records(&drivers, format)
}
