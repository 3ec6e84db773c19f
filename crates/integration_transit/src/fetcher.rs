//! HTTP GET + JSON decode shared by the geocoding and transit clients
//!
//! Every failure comes back as a typed [`FetchError`] and is logged together
//! with the (redacted) URL. Nothing in here panics.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

const USER_AGENT: &str = concat!("stopfinder/", env!("CARGO_PKG_VERSION"));

/// Query parameters whose values must never reach the logs
const SECRET_QUERY_PARAMS: &[&str] = &["access_token", "api_key"];

/// Reasons a JSON fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or transport failure
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// The body was not valid JSON
    #[error("Invalid JSON: {0}")]
    Decode(String),
}

/// Performs GET requests and decodes the body into a generic JSON value
#[derive(Debug, Clone)]
pub struct JsonFetcher {
    client: Client,
    timeout_secs: u64,
}

impl JsonFetcher {
    /// Create a fetcher whose requests time out after `timeout_secs`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// GET `url` and parse the response body as JSON
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why no JSON could be obtained.
    #[instrument(skip_all, fields(url = %redact_url(url)))]
    pub async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        match self.fetch(url).await {
            Ok(value) => {
                debug!("JSON fetched");
                Ok(value)
            },
            Err(e) => {
                warn!(url = %redact_url(url), error = %e, "Error fetching JSON");
                Err(e)
            },
        }
    }

    async fn fetch(&self, url: &Url) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    // the URL carries credentials
                    FetchError::Connection(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                FetchError::Connection(e.without_url().to_string())
            }
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Render `url` with secret query parameter values replaced
#[must_use]
pub fn redact_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if SECRET_QUERY_PARAMS.contains(&key.as_ref()) {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
