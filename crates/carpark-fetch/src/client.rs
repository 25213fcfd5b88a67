//! HTTP client for the availability endpoint.

use carpark_types::{CarparkError, RawApiResponse};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::url::AVAILABILITY_URL;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint to request.
    pub endpoint: String,
    /// Deadline for the whole request, body included.
    pub timeout: Duration,
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: AVAILABILITY_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("carpark/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching availability data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The client or request could not be built.
    #[error("Invalid request: {0}")]
    Request(#[source] reqwest::Error),

    /// Transport failure, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Server answered with something other than 200 OK.
    #[error("Unexpected status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Body was not a valid availability payload.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request(err)
        } else {
            Self::Http(err)
        }
    }
}

impl From<FetchError> for CarparkError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Request(_) => Self::RequestConstruction(err.to_string()),
            FetchError::Http(_) | FetchError::Status { .. } => Self::Network(err.to_string()),
            FetchError::Decode(e) => Self::Decode(e.to_string()),
        }
    }
}

/// Single-shot HTTP client for the availability endpoint.
///
/// No retries: any failure is returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(FetchError::Request)?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Requests the endpoint once and decodes the body.
    ///
    /// The response is consumed by the body read and released before decoding.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, on any status other than 200,
    /// or if the body does not decode.
    pub async fn fetch(&self) -> Result<RawApiResponse, FetchError> {
        debug!(endpoint = %self.config.endpoint, "requesting carpark availability");

        let response = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::from_reqwest)?;
        debug!(bytes = body.len(), "received response body");

        let decoded: RawApiResponse = serde_json::from_slice(&body)?;
        info!(
            api_status = decoded.status(),
            snapshots = decoded.snapshots.len(),
            "decoded availability response"
        );
        Ok(decoded)
    }
}
