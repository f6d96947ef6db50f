//! Typed async client for the OpenF1 motorsport telemetry API.
//!
//! ```no_run
//! use openf1_api::{query::IdFilter, CarDataQuery, Client, NumberFilter};
//!
//! # async fn run() -> Result<(), openf1_api::Error> {
//! let client = Client::new()?;
//! let query = CarDataQuery::default()
//!     .with_session_key(IdFilter::latest())
//!     .with_driver_number(55)
//!     .with_speed(NumberFilter::greater_than(315));
//! for sample in client.car_data(&query).await? {
//!     println!("{} {} km/h", sample.date, sample.speed);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
pub mod query;
pub mod resource;
pub mod transport;
pub mod types;
pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    CarDataQuery, DateFilter, DriversQuery, FilterOperator, IdFilter, IntervalsQuery, LapsQuery,
    LocationQuery, MeetingsQuery, NumberFilter, PitQuery, PositionQuery, Query, RaceControlQuery,
    SessionsQuery, StintsQuery, TeamRadioQuery, WeatherQuery,
};
pub use self::transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
