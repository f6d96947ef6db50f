mod commands;
mod output;
mod validation;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use openf1_api::{Client, ClientConfig, DEFAULT_BASE_URL};

use crate::commands::{calendar, events, telemetry, timing};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "openf1")]
#[command(about = "Query Formula 1 timing and telemetry data from the OpenF1 API")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// API root, including the version segment
    #[arg(long, env = "OPENF1_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "OPENF1_TIMEOUT_SECS", default_value_t = 30, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Car telemetry samples (speed, rpm, gear, throttle, brake, DRS)
    CarData(telemetry::CarDataArgs),
    /// Drivers entered in a session
    Drivers(calendar::DriversArgs),
    /// Gaps to the leader and to the car ahead (race only)
    Intervals(telemetry::IntervalsArgs),
    /// Lap times, sector times and speed traps
    Laps(timing::LapsArgs),
    /// Car positions on track (x, y, z)
    Location(telemetry::LocationArgs),
    /// Grand Prix weekends and test events
    Meetings(calendar::MeetingsArgs),
    /// Pit lane visits
    Pit(timing::PitArgs),
    /// Running order changes
    Position(telemetry::PositionArgs),
    /// Flags, safety car and incident messages
    RaceControl(Box<events::RaceControlArgs>),
    /// Practice, qualifying, sprint and race sessions
    Sessions(calendar::SessionsArgs),
    /// Tyre stints
    Stints(timing::StintsArgs),
    /// Team radio recordings
    TeamRadio(events::TeamRadioArgs),
    /// Track weather, sampled every minute
    Weather(events::WeatherArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("openf1=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = Client::from_config(&ClientConfig {
        base_url: cli.base_url.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    })?;
    tracing::debug!(base_url = %client.base_url(), timeout_secs = cli.timeout_secs, "client ready");
    let format = cli.output;

    match &cli.command {
        Commands::CarData(args) => telemetry::run_car_data(args, &client, format).await?,
        Commands::Drivers(args) => calendar::run_drivers(args, &client, format).await?,
        Commands::Intervals(args) => telemetry::run_intervals(args, &client, format).await?,
        Commands::Laps(args) => timing::run_laps(args, &client, format).await?,
        Commands::Location(args) => telemetry::run_location(args, &client, format).await?,
        Commands::Meetings(args) => calendar::run_meetings(args, &client, format).await?,
        Commands::Pit(args) => timing::run_pit(args, &client, format).await?,
        Commands::Position(args) => telemetry::run_position(args, &client, format).await?,
        Commands::RaceControl(args) => {
            events::run_race_control(args.as_ref(), &client, format).await?
        }
        Commands::Sessions(args) => calendar::run_sessions(args, &client, format).await?,
        Commands::Stints(args) => timing::run_stints(args, &client, format).await?,
        Commands::TeamRadio(args) => events::run_team_radio(args, &client, format).await?,
        Commands::Weather(args) => events::run_weather(args, &client, format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_car_data_with_comparisons() {
        let cli = Cli::try_parse_from([
            "openf1",
            "car-data",
            "--session-key",
            "9159",
            "--driver-number",
            "55",
            "--speed",
            ">315",
        ])
        .unwrap();
        let Commands::CarData(args) = cli.command else {
            panic!("expected car-data");
        };
        assert_eq!(args.keys.session_key.as_deref(), Some("9159"));
        assert_eq!(args.driver_number, Some(55));
        assert_eq!(args.speed.as_deref(), Some(">315"));
    }

    #[test]
    fn global_output_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["openf1", "meetings", "--year", "2023", "--output", "json"])
            .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn output_defaults_to_table() {
        let cli = Cli::try_parse_from(["openf1", "weather"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Table);
        assert_eq!(cli.timeout_secs, 30);
    }

    #[test]
    fn rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["openf1", "laps", "--output", "xml"]).is_err());
    }

    #[test]
    fn race_control_accepts_flag_text() {
        let cli = Cli::try_parse_from([
            "openf1",
            "race-control",
            "--flag",
            "double-yellow",
            "--scope",
            "sector",
        ])
        .unwrap();
        let Commands::RaceControl(args) = cli.command else {
            panic!("expected race-control");
        };
        assert_eq!(args.flag.as_deref(), Some("double-yellow"));
        assert_eq!(args.scope.as_deref(), Some("sector"));
    }
}
