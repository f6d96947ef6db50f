//! Filter value objects accepted by the query builders.
//!
//! Filters are validated when they are built, so an invalid combination never
//! reaches the encoder or the network.

use chrono::{DateTime, FixedOffset};

use crate::Error;

/// Relational operator applied to a filterable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterOperator {
    #[default]
    Equal,
    GreaterThan,
    LessThan,
}

impl FilterOperator {
    /// The operator symbol: `=`, `>` or `<`.
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
        }
    }

    /// What gets appended to the parameter name. Equality uses the bare name.
    pub(crate) fn key_suffix(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "",
            other => other.symbol(),
        }
    }
}

/// Selects a meeting or session either by its key or as the most recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFilter {
    /// An explicit meeting/session key.
    Id(i64),
    /// The latest (or currently running) meeting/session.
    Latest,
}

impl IdFilter {
    /// Checked constructor mirroring the two independent inputs a caller may
    /// hold: exactly one of `id` and `latest` must be set.
    pub fn new(id: Option<i64>, latest: bool) -> Result<Self, Error> {
        match (id, latest) {
            (Some(_), true) => Err(Error::invalid_argument(
                "Exact and latest cannot be set at the same time",
            )),
            (None, false) => Err(Error::invalid_argument(
                "Exact and latest cannot be unset at the same time",
            )),
            (Some(id), false) => Ok(IdFilter::Id(id)),
            (None, true) => Ok(IdFilter::Latest),
        }
    }

    pub fn id(id: i64) -> Self {
        IdFilter::Id(id)
    }

    pub fn latest() -> Self {
        IdFilter::Latest
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, IdFilter::Latest)
    }

    /// ID filters only ever compare for equality.
    pub fn operator(&self) -> FilterOperator {
        FilterOperator::Equal
    }

    /// The query-string value: the key itself, or `latest`.
    pub fn value_string(&self) -> String {
        match self {
            IdFilter::Id(id) => id.to_string(),
            IdFilter::Latest => "latest".to_string(),
        }
    }
}

impl From<i64> for IdFilter {
    fn from(id: i64) -> Self {
        IdFilter::Id(id)
    }
}

/// A numeric comparison such as `speed>320`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFilter {
    value: f64,
    operator: FilterOperator,
}

impl NumberFilter {
    /// Unchecked constructor. A non-finite value is encoded as is (`NaN`,
    /// `inf`); use [`NumberFilter::try_new`] for values from untrusted input.
    pub fn new(value: impl Into<f64>, operator: FilterOperator) -> Self {
        Self {
            value: value.into(),
            operator,
        }
    }

    /// Rejects NaN and infinities with [`Error::InvalidArgument`].
    pub fn try_new(value: f64, operator: FilterOperator) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::invalid_argument(format!(
                "Number filter value must be finite, got {}",
                value
            )));
        }
        Ok(Self::new(value, operator))
    }

    pub fn equal(value: impl Into<f64>) -> Self {
        Self::new(value, FilterOperator::Equal)
    }

    pub fn greater_than(value: impl Into<f64>) -> Self {
        Self::new(value, FilterOperator::GreaterThan)
    }

    pub fn less_than(value: impl Into<f64>) -> Self {
        Self::new(value, FilterOperator::LessThan)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    /// Whole numbers render without a fractional part (`320`, not `320.0`).
    pub fn value_string(&self) -> String {
        self.value.to_string()
    }
}

/// Equality on an integer value, matching the plain `i64` setters.
impl From<i64> for NumberFilter {
    fn from(value: i64) -> Self {
        Self::new(value as f64, FilterOperator::Equal)
    }
}

/// Restricts results by date: an exact instant, or a window bounded on one
/// or both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateFilter {
    exact: Option<DateTime<FixedOffset>>,
    after: Option<DateTime<FixedOffset>>,
    before: Option<DateTime<FixedOffset>>,
}

impl DateFilter {
    /// Checked constructor. At least one date must be given, and `exact`
    /// cannot be combined with `after` or `before`.
    pub fn new(
        exact: Option<DateTime<FixedOffset>>,
        after: Option<DateTime<FixedOffset>>,
        before: Option<DateTime<FixedOffset>>,
    ) -> Result<Self, Error> {
        if exact.is_none() && after.is_none() && before.is_none() {
            return Err(Error::invalid_argument(
                "Either one of exactDate, afterDate or beforeDate must be set",
            ));
        }
        if exact.is_some() && (after.is_some() || before.is_some()) {
            return Err(Error::invalid_argument(
                "exactDate cannot be used in combination with afterDate and beforeDate",
            ));
        }
        Ok(Self {
            exact,
            after,
            before,
        })
    }

    pub fn exact(date: impl Into<DateTime<FixedOffset>>) -> Self {
        Self {
            exact: Some(date.into()),
            after: None,
            before: None,
        }
    }

    pub fn after(date: impl Into<DateTime<FixedOffset>>) -> Self {
        Self {
            exact: None,
            after: Some(date.into()),
            before: None,
        }
    }

    pub fn before(date: impl Into<DateTime<FixedOffset>>) -> Self {
        Self {
            exact: None,
            after: None,
            before: Some(date.into()),
        }
    }

    pub fn between(
        after: impl Into<DateTime<FixedOffset>>,
        before: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            exact: None,
            after: Some(after.into()),
            before: Some(before.into()),
        }
    }

    pub fn exact_date(&self) -> Option<DateTime<FixedOffset>> {
        self.exact
    }

    pub fn after_date(&self) -> Option<DateTime<FixedOffset>> {
        self.after
    }

    pub fn before_date(&self) -> Option<DateTime<FixedOffset>> {
        self.before
    }
}
