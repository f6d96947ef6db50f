//! Lap-level timing: `laps`, `pit`, `stints`.

use anyhow::Result;
use clap::Args;
use openf1_api::types::TyreCompound;
use openf1_api::{Client, LapsQuery, PitQuery, StintsQuery};

use super::{driver_number, number_filter, parse_opt, KeyArgs, WindowArgs};
use crate::output::{print_records, OutputFormat};
use crate::validation;

#[derive(Args, Debug)]
pub struct LapsArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,

    /// Lap number
    #[arg(long)]
    pub lap_number: Option<i64>,

    /// Lap time in seconds: >N, <N or N
    #[arg(long)]
    pub lap_duration: Option<String>,

    /// Only out-laps from the pit lane
    #[arg(long)]
    pub pit_out_lap: bool,
}

pub async fn run_laps(args: &LapsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = LapsQuery {
        driver_number: driver_number(args.driver_number)?,
        is_pit_out_lap: args.pit_out_lap.then_some(true),
        lap_duration: number_filter(&args.lap_duration)?,
        lap_number: args
            .lap_number
            .map(validation::validate_lap_number)
            .transpose()?,
        meeting_key: args.keys.meeting_key()?,
        session_key: args.keys.session_key()?,
        ..LapsQuery::default()
    };
    let laps = client.laps(&query).await?;
    print_records(&laps, format)
}

#[derive(Args, Debug)]
pub struct PitArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,

    /// Lap number
    #[arg(long)]
    pub lap_number: Option<i64>,

    /// Seconds spent in the pit lane: >N, <N or N
    #[arg(long)]
    pub pit_duration: Option<String>,
}

pub async fn run_pit(args: &PitArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = PitQuery {
        date: args.window.date_filter()?,
        driver_number: driver_number(args.driver_number)?,
        lap_number: args
            .lap_number
            .map(validation::validate_lap_number)
            .transpose()?,
        meeting_key: args.keys.meeting_key()?,
        pit_duration: number_filter(&args.pit_duration)?,
        session_key: args.keys.session_key()?,
    };
    let stops = client.pit(&query).await?;
    print_records(&stops, format)
}

#[derive(Args, Debug)]
pub struct StintsArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,

    /// Tyre compound: soft, medium, hard, intermediate, wet
    #[arg(long)]
    pub compound: Option<String>,

    /// Stint number: >N, <N or N
    #[arg(long)]
    pub stint_number: Option<String>,
}

pub async fn run_stints(args: &StintsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = StintsQuery {
        compound: parse_opt(&args.compound, |c| {
            validation::parse_choice(c, TyreCompound::ALL, "compound")
        })?,
        driver_number: driver_number(args.driver_number)?,
        meeting_key: args.keys.meeting_key()?,
        session_key: args.keys.session_key()?,
        stint_number: number_filter(&args.stint_number)?,
        ..StintsQuery::default()
    };
    let stints = client.stints(&query).await?;
    print_records(&stints, format)
}
