//! High-frequency per-car data: `car-data`, `location`, `position`, `intervals`.

use anyhow::Result;
use clap::Args;
use openf1_api::{CarDataQuery, Client, IntervalsQuery, LocationQuery, PositionQuery};

use super::{driver_number, number_filter, KeyArgs, WindowArgs};
use crate::output::{print_intervals, print_records, OutputFormat};

#[derive(Args, Debug)]
pub struct CarDataArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,

    /// Speed in km/h: >N, <N or N
    #[arg(long)]
    pub speed: Option<String>,

    /// Engine RPM: >N, <N or N
    #[arg(long)]
    pub rpm: Option<String>,

    /// Gear (0 is neutral): >N, <N or N
    #[arg(long)]
    pub gear: Option<String>,

    /// Throttle percentage: >N, <N or N
    #[arg(long)]
    pub throttle: Option<String>,
}

pub async fn run_car_data(args: &CarDataArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = CarDataQuery {
        date: args.window.date_filter()?,
        driver_number: driver_number(args.driver_number)?,
        meeting_key: args.keys.meeting_key()?,
        n_gear: number_filter(&args.gear)?,
        rpm: number_filter(&args.rpm)?,
        session_key: args.keys.session_key()?,
        speed: number_filter(&args.speed)?,
        throttle: number_filter(&args.throttle)?,
    };
    let samples = client.car_data(&query).await?;
    print_records(&samples, format)
}

#[derive(Args, Debug)]
pub struct LocationArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,
}

pub async fn run_location(args: &LocationArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = LocationQuery {
        date: args.window.date_filter()?,
        driver_number: driver_number(args.driver_number)?,
        meeting_key: args.keys.meeting_key()?,
        session_key: args.keys.session_key()?,
        ..LocationQuery::default()
    };
    let locations = client.location(&query).await?;
    print_records(&locations, format)
}

#[derive(Args, Debug)]
pub struct PositionArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,

    /// Running position: >N, <N or N
    #[arg(long)]
    pub position: Option<String>,
}

pub async fn run_position(args: &PositionArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = PositionQuery {
        date: args.window.date_filter()?,
        driver_number: driver_number(args.driver_number)?,
        meeting_key: args.keys.meeting_key()?,
        position: number_filter(&args.position)?,
        session_key: args.keys.session_key()?,
    };
    let positions = client.position(&query).await?;
    print_records(&positions, format)
}

#[derive(Args, Debug)]
pub struct IntervalsArgs {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Car number (1-99)
    #[arg(long)]
    pub driver_number: Option<i64>,

    /// Seconds to the leader: >N, <N or N
    #[arg(long)]
    pub gap_to_leader: Option<String>,

    /// Seconds to the car ahead: >N, <N or N
    #[arg(long)]
    pub interval: Option<String>,
}

pub async fn run_intervals(
    args: &IntervalsArgs,
    client: &Client,
    format: OutputFormat,
) -> Result<()> {
    let query = IntervalsQuery {
        date: args.window.date_filter()?,
        driver_number: driver_number(args.driver_number)?,
        gap_to_leader: number_filter(&args.gap_to_leader)?,
        interval: number_filter(&args.interval)?,
        meeting_key: args.keys.meeting_key()?,
        session_key: args.keys.session_key()?,
    };
    let intervals = client.intervals(&query).await?;
    print_intervals(&intervals, format)
}
