use anyhow::Result;
use openf1_api::types::Interval;
use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Prints records in the requested format, with a count on stderr.
pub fn print_records<T: Serialize>(records: &[T], format: OutputFormat) -> Result<()> {
    eprintln!("{} record(s)", records.len());
    match format {
        OutputFormat::Table => println!("{}", build_table(records)?),
        OutputFormat::Json => print_json(&records),
    }
    Ok(())
}

/// Intervals flatten their two gaps into display strings before tabulating.
pub fn print_intervals(intervals: &[Interval], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_records(intervals, format),
        OutputFormat::Table => print_records(&build_interval_rows(intervals), format),
    }
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[derive(Serialize)]
struct IntervalRow {
    date: String,
    driver_number: i64,
    gap_to_leader: String,
    interval: String,
    meeting_key: i64,
    session_key: i64,
}

fn build_interval_rows(intervals: &[Interval]) -> Vec<IntervalRow> {
    intervals
        .iter()
        .map(|i| IntervalRow {
            date: i.date.to_rfc3339(),
            driver_number: i.driver_number,
            gap_to_leader: i.gap_to_leader.to_string(),
            interval: i.interval.to_string(),
            meeting_key: i.meeting_key,
            session_key: i.session_key,
        })
        .collect()
}

/// Builds a table whose columns are the serialized field names of `T`.
fn build_table<T: Serialize>(records: &[T]) -> Result<Table> {
    let mut builder = Builder::default();
    let mut has_header = false;

    for record in records {
        let Value::Object(fields) = serde_json::to_value(record)? else {
            anyhow::bail!("record did not serialize to an object");
        };
        if !has_header {
            builder.push_record(fields.keys().cloned().collect::<Vec<String>>());
            has_header = true;
        }
        builder.push_record(fields.values().map(format_cell).collect::<Vec<String>>());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    Ok(table)
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(format_cell)
            .collect::<Vec<String>>()
            .join(" "),
        other => other.to_string(),
    }
}
