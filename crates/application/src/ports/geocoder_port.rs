//! Geocoding port
//!
//! Resolves a free-text place name to coordinates. Adapters in the
//! infrastructure layer implement this port on top of a geocoding API.

use async_trait::async_trait;
use domain::value_objects::Coordinates;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve a place name to the coordinates of its best match
    ///
    /// Fails with `NotFound` when the service has no match for the name.
    async fn resolve_place(&self, place_name: &str) -> Result<Coordinates, ApplicationError>;
}
