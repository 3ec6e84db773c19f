//! Stop locator port
//!
//! Finds the transit stop closest to a pair of coordinates.

use async_trait::async_trait;
use domain::value_objects::{Coordinates, StopResult};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for nearest-stop lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StopLocatorPort: Send + Sync {
    /// Find the stop nearest to `coordinates`
    ///
    /// Fails with `NotFound` when the service lists no stops near the point.
    async fn nearest_stop(&self, coordinates: &Coordinates)
    -> Result<StopResult, ApplicationError>;
}
