//! Mapbox forward geocoding client
//!
//! Converts free-form place names to coordinates using the
//! [Mapbox Geocoding API](https://docs.mapbox.com/api/search/geocoding/).
//! Only the single best match is requested.

use std::fmt;

use async_trait::async_trait;
use domain::value_objects::Coordinates;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::fetcher::{FetchError, JsonFetcher};
use crate::models::{CoordinateValue, RawFeature, first_match};

/// Everything but RFC 3986 unreserved characters is escaped in the place segment
const PLACE_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Configuration for the Mapbox geocoding service
#[derive(Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the forward geocoding endpoint
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Mapbox access token
    #[serde(default, skip_serializing)]
    pub access_token: String,
}

fn default_geocoding_base_url() -> String {
    "https://api.mapbox.com/geocoding/v5/mapbox.places".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            access_token: String::new(),
        }
    }
}

impl fmt::Debug for GeocodingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodingConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            access_token: "test-token".to_string(),
        }
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The access token or base URL is missing or unusable
    #[error("Geocoding configuration error: {0}")]
    Configuration(String),

    /// No match for the place name
    #[error("{0}")]
    NotFound(String),

    /// The request could not be completed
    #[error("Geocoding request failed: {0}")]
    Fetch(#[from] FetchError),

    /// The best match has no usable coordinate pair
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a place name to the coordinates of its best match
    async fn resolve_place(&self, place_name: &str) -> Result<Coordinates, GeocodingError>;
}

/// Mapbox-based geocoding client
#[derive(Debug)]
pub struct MapboxGeocodingClient {
    fetcher: JsonFetcher,
    config: GeocodingConfig,
}

impl MapboxGeocodingClient {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let fetcher = JsonFetcher::new(config.timeout_secs)?;
        Ok(Self {
            fetcher,
            config: config.clone(),
        })
    }

    /// The configured access token, or a configuration error when unset
    fn access_token(&self) -> Result<&str, GeocodingError> {
        if self.config.access_token.is_empty() {
            return Err(GeocodingError::Configuration(
                "geocoder access token is not configured".to_string(),
            ));
        }
        Ok(&self.config.access_token)
    }

    /// Build `{base}/{place}.json?access_token=..&limit=1`
    fn build_url(&self, place_name: &str) -> Result<Url, GeocodingError> {
        let access_token = self.access_token()?;

        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            GeocodingError::Configuration(format!("invalid geocoding base_url: {e}"))
        })?;

        if url.cannot_be_a_base() {
            return Err(GeocodingError::Configuration(format!(
                "geocoding base_url cannot take a path: {}",
                self.config.base_url
            )));
        }

        // `;` separates batch queries upstream, so the segment is encoded here
        // rather than by `push`, which leaves sub-delimiters raw
        let segment = utf8_percent_encode(place_name, PLACE_SEGMENT);
        let path = format!("{}/{segment}.json", url.path().trim_end_matches('/'));
        url.set_path(&path);

        url.query_pairs_mut()
            .append_pair("access_token", access_token)
            .append_pair("limit", "1");

        Ok(url)
    }

    /// Turn a geocoding payload into coordinates
    fn parse_response(
        payload: &serde_json::Value,
        place_name: &str,
    ) -> Result<Coordinates, GeocodingError> {
        let first = first_match(payload, "features").ok_or_else(|| {
            GeocodingError::NotFound(format!("no location found for {place_name}"))
        })?;

        let feature: RawFeature = serde_json::from_value(first.clone())
            .map_err(|e| GeocodingError::MalformedResponse(e.to_string()))?;

        if let Some(ref matched) = feature.place_name {
            debug!(%matched, "Best geocoding match");
        }

        let mut parts = feature
            .geometry
            .coordinates
            .into_iter()
            .map(CoordinateValue::into_decimal);

        let (Some(longitude), Some(latitude)) = (parts.next(), parts.next()) else {
            return Err(GeocodingError::MalformedResponse(
                "coordinate pair is incomplete".to_string(),
            ));
        };

        Coordinates::from_lng_lat(longitude, latitude)
            .map_err(|e| GeocodingError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for MapboxGeocodingClient {
    #[instrument(skip(self))]
    async fn resolve_place(&self, place_name: &str) -> Result<Coordinates, GeocodingError> {
        self.access_token()?;

        let place_name = place_name.trim();
        if place_name.is_empty() {
            return Err(GeocodingError::NotFound(
                "no location found for an empty place name".to_string(),
            ));
        }

        let url = self.build_url(place_name)?;

        debug!(%place_name, "Geocoding place");

        let payload = self.fetcher.get_json(&url).await?;
        let coordinates = Self::parse_response(&payload, place_name)?;

        debug!(%place_name, %coordinates, "Geocoded place");
        Ok(coordinates)
    }
}
