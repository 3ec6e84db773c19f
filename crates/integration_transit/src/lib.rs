//! Upstream API clients for stopfinder
//!
//! Provides forward geocoding via the
//! [Mapbox Geocoding API](https://docs.mapbox.com/api/search/geocoding/) and
//! nearest-stop lookup via the [MBTA v3 API](https://api-v3.mbta.com).
//!
//! # Architecture
//!
//! Both clients share a [`JsonFetcher`] that performs the GET, enforces the
//! timeout and decodes the body into generic JSON. [`GeocodingClient`] is
//! implemented by [`MapboxGeocodingClient`]; [`TransitClient`] by
//! [`MbtaTransitClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{
//!     GeocodingClient, GeocodingConfig, MapboxGeocodingClient, MbtaTransitClient, TransitClient,
//!     TransitConfig,
//! };
//!
//! let geocoder = MapboxGeocodingClient::new(&GeocodingConfig {
//!     access_token: token,
//!     ..Default::default()
//! })?;
//! let transit = MbtaTransitClient::new(&TransitConfig::default())?;
//!
//! let coordinates = geocoder.resolve_place("Boston Common").await?;
//! let stop = transit.nearest_stop(&coordinates).await?;
//! ```

mod client;
mod config;
mod error;
mod fetcher;
mod geocoding;
mod models;

pub use client::{MbtaTransitClient, TransitClient};
pub use config::TransitConfig;
pub use error::TransitError;
pub use fetcher::{FetchError, JsonFetcher, redact_url};
pub use geocoding::{GeocodingClient, GeocodingConfig, GeocodingError, MapboxGeocodingClient};
