//! Resource definitions and the response decoder.
//!
//! Every API resource is described by a [`Resource`]: the path it lives at and
//! a function decoding one JSON item into its record type. The client drives
//! all of them through one generic request function.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    types::{
        CarData, Driver, Interval, Lap, Location, Meeting, Pit, Position, RaceControl,
        RawInterval, Session, Stint, TeamRadio, Weather,
    },
    Error,
};

/// A fetchable resource producing records of type `R`.
pub struct Resource<R> {
    /// Path relative to the base URL, with a leading slash.
    pub path: &'static str,
    pub decode: fn(Value) -> Result<R, Error>,
}

impl<R> Clone for Resource<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Resource<R> {}

impl<R> std::fmt::Debug for Resource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource").field("path", &self.path).finish()
    }
}

pub const CAR_DATA: Resource<CarData> = Resource {
    path: "/car_data",
    decode: decode_item,
};

pub const DRIVERS: Resource<Driver> = Resource {
    path: "/drivers",
    decode: decode_item,
};

pub const INTERVALS: Resource<Interval> = Resource {
    path: "/intervals",
    decode: decode_interval,
};

pub const LAPS: Resource<Lap> = Resource {
    path: "/laps",
    decode: decode_item,
};

pub const LOCATION: Resource<Location> = Resource {
    path: "/location",
    decode: decode_item,
};

pub const MEETINGS: Resource<Meeting> = Resource {
    path: "/meetings",
    decode: decode_item,
};

pub const PIT: Resource<Pit> = Resource {
    path: "/pit",
    decode: decode_item,
};

pub const POSITION: Resource<Position> = Resource {
    path: "/position",
    decode: decode_item,
};

pub const RACE_CONTROL: Resource<RaceControl> = Resource {
    path: "/race_control",
    decode: decode_item,
};

pub const SESSIONS: Resource<Session> = Resource {
    path: "/sessions",
    decode: decode_item,
};

pub const STINTS: Resource<Stint> = Resource {
    path: "/stints",
    decode: decode_item,
};

pub const TEAM_RADIO: Resource<TeamRadio> = Resource {
    path: "/team_radio",
    decode: decode_item,
};

pub const WEATHER: Resource<Weather> = Resource {
    path: "/weather",
    decode: decode_item,
};

/// Decodes one item through its serde implementation.
pub fn decode_item<R: DeserializeOwned>(value: Value) -> Result<R, Error> {
    serde_json::from_value(value).map_err(|e| Error::malformed(e.to_string()))
}

/// Interval items decode in two steps so that an unrecognised gap surfaces
/// as [`Error::InvalidArgument`] rather than a serde error.
pub fn decode_interval(value: Value) -> Result<Interval, Error> {
    let raw: RawInterval = decode_item(value)?;
    Interval::try_from(raw)
}

/// Decodes a whole response body. Fails on the first bad item.
pub fn decode_response<R>(resource: &Resource<R>, body: &[u8]) -> Result<Vec<R>, Error> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| Error::malformed(format!("Invalid json response: {}", e)))?;

    let Value::Array(items) = json else {
        return Err(Error::malformed("Array response was expected"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            (resource.decode)(item).map_err(|e| match e {
                Error::MalformedResponse { reason, .. } => Error::malformed(format!(
                    "{} item {}: {}",
                    resource.path, index, reason
                )),
                other => other,
            })
        })
        .collect()
}
