//! Shared query infrastructure: the [`Query`] trait, the [`ParamValue`] sum type
//! and the encoder that turns raw parameters into query-string pairs.

use chrono::{DateTime, FixedOffset, Utc};
use url::form_urlencoded;

use crate::types::{Flag, RaceControlCategory, RaceControlScope, SessionType, TyreCompound};

use super::filter::{DateFilter, IdFilter, NumberFilter};

/// Every kind of value a query parameter can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Id(IdFilter),
    Number(NumberFilter),
    Date(DateFilter),
    Instant(DateTime<FixedOffset>),
    /// Wire value of an enum, e.g. `"DOUBLE YELLOW"`.
    Enum(&'static str),
    Int(i64),
    Bool(bool),
    Text(String),
}

/// Trait implemented by all query builders.
pub trait Query {
    /// Parameter mapping keyed by upstream wire names. Unset fields are `None`.
    fn raw_params(&self) -> Vec<(&'static str, Option<ParamValue>)>;

    /// Encoded `(key, value)` pairs for this query.
    fn encode(&self) -> Vec<(String, String)> {
        encode(&self.raw_params())
    }

    /// The query string (without the leading `?`).
    fn to_query_string(&self) -> String {
        to_query_string(&self.encode())
    }
}

/// Converts named raw parameters into query-string pairs, preserving order.
///
/// `None` values are skipped. Filters with a `>`/`<` operator append it to the
/// key; a [`DateFilter`] expands to `date`, or to `date_start>` and/or
/// `date_end<`, regardless of the name it was passed under.
pub fn encode(params: &[(&str, Option<ParamValue>)]) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (name, value) in params {
        let Some(value) = value else {
            continue;
        };
        match value {
            ParamValue::Id(filter) => {
                pairs.push((name.to_string(), filter.value_string()));
            }
            ParamValue::Number(filter) => {
                pairs.push((
                    format!("{}{}", name, filter.operator().key_suffix()),
                    filter.value_string(),
                ));
            }
            ParamValue::Date(filter) => encode_date_filter(filter, &mut pairs),
            ParamValue::Instant(instant) => {
                pairs.push((name.to_string(), format_instant(instant)));
            }
            ParamValue::Enum(wire) => pairs.push((name.to_string(), wire.to_string())),
            ParamValue::Int(v) => pairs.push((name.to_string(), v.to_string())),
            ParamValue::Bool(v) => pairs.push((name.to_string(), v.to_string())),
            ParamValue::Text(v) => pairs.push((name.to_string(), v.clone())),
        }
    }
    pairs
}

fn encode_date_filter(filter: &DateFilter, pairs: &mut Vec<(String, String)>) {
    if let Some(exact) = filter.exact_date() {
        pairs.push(("date".to_string(), format_instant(&exact)));
        return;
    }
    if let Some(after) = filter.after_date() {
        pairs.push(("date_start>".to_string(), format_instant(&after)));
    }
    if let Some(before) = filter.before_date() {
        pairs.push(("date_end<".to_string(), format_instant(&before)));
    }
}

/// RFC 3339 at second precision with an explicit offset: `2020-01-01T00:00:00+00:00`.
pub(crate) fn format_instant(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Joins encoded pairs into a query string.
///
/// Values are form-urlencoded; keys are written as-is because the API expects
/// a literal `>` or `<` at the end of a parameter name.
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            let value: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
            format!("{}={}", key, value)
        })
        .collect::<Vec<_>>()
        .join("&")
}

impl From<IdFilter> for ParamValue {
    fn from(v: IdFilter) -> Self {
        ParamValue::Id(v)
    }
}

impl From<NumberFilter> for ParamValue {
    fn from(v: NumberFilter) -> Self {
        ParamValue::Number(v)
    }
}

impl From<DateFilter> for ParamValue {
    fn from(v: DateFilter) -> Self {
        ParamValue::Date(v)
    }
}

impl From<DateTime<FixedOffset>> for ParamValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        ParamValue::Instant(v)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(v: DateTime<Utc>) -> Self {
        ParamValue::Instant(v.into())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<Flag> for ParamValue {
    fn from(v: Flag) -> Self {
        ParamValue::Enum(v.as_str())
    }
}

impl From<RaceControlCategory> for ParamValue {
    fn from(v: RaceControlCategory) -> Self {
        ParamValue::Enum(v.as_str())
    }
}

impl From<RaceControlScope> for ParamValue {
    fn from(v: RaceControlScope) -> Self {
        ParamValue::Enum(v.as_str())
    }
}

impl From<SessionType> for ParamValue {
    fn from(v: SessionType) -> Self {
        ParamValue::Enum(v.as_str())
    }
}

impl From<TyreCompound> for ParamValue {
    fn from(v: TyreCompound) -> Self {
        ParamValue::Enum(v.as_str())
    }
}
