//! Error types for the API client.

use crate::transport::TransportError;

/// Errors that can occur when building requests or talking to the OpenF1 API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP call failed at the network layer (DNS, refused connection, timeout).
    #[error("OpenF1 API unavailable: {0}")]
    TransportUnavailable(#[source] TransportError),

    /// The API answered with a non-success status, or the body was not valid
    /// JSON, not an array, or an item could not be decoded.
    #[error("Unexpected response: {reason}")]
    MalformedResponse {
        reason: String,
        status: Option<u16>,
        body: Option<String>,
    },

    /// A filter or value object was built from an invalid combination of inputs.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedResponse {
            reason: reason.into(),
            status: None,
            body: None,
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument(reason.into())
    }

    /// Attaches the HTTP status and body to a [`Error::MalformedResponse`].
    /// Other variants are returned unchanged.
    pub(crate) fn with_response(self, status: u16, body: String) -> Self {
        match self {
            Error::MalformedResponse { reason, .. } => Error::MalformedResponse {
                reason,
                status: Some(status),
                body: Some(body),
            },
            other => other,
        }
    }
}
