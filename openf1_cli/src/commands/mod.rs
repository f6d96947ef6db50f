//! CLI subcommand implementations, one per API resource.

pub mod calendar;
pub mod events;
pub mod telemetry;
pub mod timing;

use anyhow::Result;
use clap::Args;
use openf1_api::{DateFilter, IdFilter, NumberFilter};

use crate::validation;

/// `--session-key` / `--meeting-key`, shared by every session-scoped resource.
#[derive(Args, Debug, Default)]
pub struct KeyArgs {
    /// Session key, or 'latest' for the current/most recent session
    #[arg(long)]
    pub session_key: Option<String>,

    /// Meeting key, or 'latest' for the current/most recent meeting
    #[arg(long)]
    pub meeting_key: Option<String>,
}

impl KeyArgs {
    pub fn session_key(&self) -> Result<Option<IdFilter>> {
        parse_opt(&self.session_key, validation::parse_id_filter)
    }

    pub fn meeting_key(&self) -> Result<Option<IdFilter>> {
        parse_opt(&self.meeting_key, validation::parse_id_filter)
    }
}

/// `--after` / `--before` for time-series resources.
#[derive(Args, Debug, Default)]
pub struct WindowArgs {
    /// Only samples after this instant (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub after: Option<String>,

    /// Only samples before this instant (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub before: Option<String>,
}

impl WindowArgs {
    pub fn date_filter(&self) -> Result<Option<DateFilter>> {
        validation::parse_date_range(self.after.as_deref(), self.before.as_deref())
    }
}

pub(crate) fn parse_opt<T>(
    value: &Option<String>,
    parse: impl Fn(&str) -> Result<T>,
) -> Result<Option<T>> {
    value.as_deref().map(parse).transpose()
}

pub(crate) fn number_filter(value: &Option<String>) -> Result<Option<NumberFilter>> {
    parse_opt(value, validation::parse_number_filter)
}

pub(crate) fn driver_number(value: Option<i64>) -> Result<Option<i64>> {
    value.map(validation::validate_driver_number).transpose()
}

pub(crate) fn text(value: &Option<String>) -> Result<Option<String>> {
    parse_opt(value, validation::sanitize_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_args_accept_latest_and_numbers() {
        let keys = KeyArgs {
            session_key: Some("LATEST".into()),
            meeting_key: Some("1219".into()),
        };
        assert!(keys.session_key().unwrap().unwrap().is_latest());
        assert_eq!(keys.meeting_key().unwrap(), Some(IdFilter::id(1219)));
    }

    #[test]
    fn key_args_reject_garbage() {
        let keys = KeyArgs {
            session_key: Some("last".into()),
            meeting_key: None,
        };
        assert!(keys.session_key().is_err());
        assert_eq!(keys.meeting_key().unwrap(), None);
    }

    #[test]
    fn empty_window_has_no_filter() {
        assert_eq!(WindowArgs::default().date_filter().unwrap(), None);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let window = WindowArgs {
            after: Some("2023-09-17".into()),
            before: Some("2023-09-16".into()),
        };
        assert!(window.date_filter().is_err());
    }

    #[test]
    fn driver_number_is_range_checked() {
        assert_eq!(driver_number(Some(44)).unwrap(), Some(44));
        assert!(driver_number(Some(0)).is_err());
        assert_eq!(driver_number(None).unwrap(), None);
    }
}
