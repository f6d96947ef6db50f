//! HTTP client for the OpenF1 API.

use std::time::Duration;

use url::Url;

use crate::{
    query::{
        CarDataQuery, DriversQuery, IntervalsQuery, LapsQuery, LocationQuery, MeetingsQuery,
        PitQuery, PositionQuery, Query, RaceControlQuery, SessionsQuery, StintsQuery,
        TeamRadioQuery, WeatherQuery,
    },
    resource::{self, decode_response, Resource},
    transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT},
    types::{
        CarData, Driver, Interval, Lap, Location, Meeting, Pit, Position, RaceControl, Session,
        Stint, TeamRadio, Weather,
    },
    Error,
};

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";

/// Settings used to build a [`Client`] with the default transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the OpenF1 API.
///
/// One method per resource. Each call performs exactly one GET through the
/// configured [`Transport`] and either returns every record of the response
/// or an error; there are no retries and nothing is cached.
pub struct Client {
    /// Base URL without a trailing slash. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    transport: Box<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(&ClientConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::from_config(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestTransport::with_timeout(config.timeout).map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::TransportUnavailable(e)
        })?;
        Self::with_transport(&config.base_url, transport)
    }

    /// Creates a client that sends every request through `transport`.
    pub fn with_transport(base_url: &str, transport: impl Transport + 'static) -> Result<Self, Error> {
        Ok(Self {
            base_api_url: validate_base_url(base_url)?,
            transport: Box::new(transport),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    async fn fetch<R, Q>(&self, resource: &Resource<R>, query: &Q) -> Result<Vec<R>, Error>
    where
        Q: Query,
    {
        let url = format!("{}{}", self.base_api_url, resource.path);
        let query = query.to_query_string();
        tracing::debug!(url = %url, query = %query, "GET");

        let resp = self.transport.get(&url, &query).await.map_err(|e| {
            tracing::error!("Failed to get {}: {}", resource.path, e);
            Error::TransportUnavailable(e)
        })?;

        if !resp.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&resp.body));
            tracing::error!("Request failed with status {}: {}", resp.status, snippet);
            return Err(Error::malformed(format!(
                "Request failed with status {}",
                resp.status
            ))
            .with_response(resp.status, snippet));
        }

        let records = decode_response(resource, &resp.body).map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(&resp.body));
            tracing::error!("Failed to decode {}: {} | body: {}", resource.path, e, snippet);
            e.with_response(resp.status, snippet)
        })?;

        tracing::debug!(count = records.len(), "decoded {}", resource.path);
        Ok(records)
    }

    /// Car telemetry.
    pub async fn car_data(&self, query: &CarDataQuery) -> Result<Vec<CarData>, Error> {
        self.fetch(&resource::CAR_DATA, query).await
    }

    pub async fn drivers(&self, query: &DriversQuery) -> Result<Vec<Driver>, Error> {
        self.fetch(&resource::DRIVERS, query).await
    }

    /// Gaps to the leader and to the car ahead. Race sessions only.
    ///
    /// Fails with [`Error::InvalidArgument`] when a gap has an unrecognised shape.
    pub async fn intervals(&self, query: &IntervalsQuery) -> Result<Vec<Interval>, Error> {
        self.fetch(&resource::INTERVALS, query).await
    }

    pub async fn laps(&self, query: &LapsQuery) -> Result<Vec<Lap>, Error> {
        self.fetch(&resource::LAPS, query).await
    }

    pub async fn location(&self, query: &LocationQuery) -> Result<Vec<Location>, Error> {
        self.fetch(&resource::LOCATION, query).await
    }

    pub async fn meetings(&self, query: &MeetingsQuery) -> Result<Vec<Meeting>, Error> {
        self.fetch(&resource::MEETINGS, query).await
    }

    pub async fn pit(&self, query: &PitQuery) -> Result<Vec<Pit>, Error> {
        self.fetch(&resource::PIT, query).await
    }

    pub async fn position(&self, query: &PositionQuery) -> Result<Vec<Position>, Error> {
        self.fetch(&resource::POSITION, query).await
    }

    pub async fn race_control(&self, query: &RaceControlQuery) -> Result<Vec<RaceControl>, Error> {
        self.fetch(&resource::RACE_CONTROL, query).await
    }

    pub async fn sessions(&self, query: &SessionsQuery) -> Result<Vec<Session>, Error> {
        self.fetch(&resource::SESSIONS, query).await
    }

    pub async fn stints(&self, query: &StintsQuery) -> Result<Vec<Stint>, Error> {
        self.fetch(&resource::STINTS, query).await
    }

    pub async fn team_radio(&self, query: &TeamRadioQuery) -> Result<Vec<TeamRadio>, Error> {
        self.fetch(&resource::TEAM_RADIO, query).await
    }

    pub async fn weather(&self, query: &WeatherQuery) -> Result<Vec<Weather>, Error> {
        self.fetch(&resource::WEATHER, query).await
    }
}

fn validate_base_url(base_url: &str) -> Result<String, Error> {
    let parsed = Url::parse(base_url)
        .map_err(|e| Error::invalid_argument(format!("Invalid base URL `{}`: {}", base_url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::invalid_argument(format!(
            "Invalid base URL `{}`: unsupported scheme",
            base_url
        )));
    }
    Ok(base_url.trim_end_matches('/').to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
