//! HTTP transport used by [`crate::Client`].
//!
//! The client never talks to `reqwest` directly: it hands a fully built URL and
//! a pre-encoded query string to a [`Transport`]. This keeps the `>`/`<`
//! operator suffixes produced by the query encoder intact and lets tests swap
//! in a stub.

use std::time::Duration;

use async_trait::async_trait;

/// Boxed error returned by a transport when the request never produced a response.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Request timeout used by [`ReqwestTransport::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("openf1-rs/", env!("CARGO_PKG_VERSION"));

/// Raw response handed back by a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A capability to perform one HTTP GET.
///
/// Implementations must return `Err` only for network-level failures; any
/// response that arrives, whatever its status, is an `Ok(HttpResponse)`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `query` arrives already encoded: values are form-urlencoded while the
    /// `>`/`<` operator suffixes on keys stay literal (`speed>=315`). Append it
    /// to `url` after a `?` without encoding it again. An HTTP stack may still
    /// escape the operators on the wire (`speed%3E=315`); the API reads both.
    async fn get(&self, url: &str, query: &str) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with the default 30-second timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, query: &str) -> Result<HttpResponse, TransportError> {
        let target = if query.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, query)
        };

        let resp = self
            .client
            .get(target)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let ok = HttpResponse {
            status: 204,
            body: Vec::new(),
        };
        assert!(ok.is_success());

        let not_found = HttpResponse {
            status: 404,
            body: Vec::new(),
        };
        assert!(!not_found.is_success());
    }

    #[test]
    fn reqwest_transport_builds() {
        assert!(ReqwestTransport::new().is_ok());
        assert!(ReqwestTransport::with_timeout(Duration::from_secs(1)).is_ok());
    }
}
