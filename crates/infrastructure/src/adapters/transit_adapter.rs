//! Transit adapter - Implements StopLocatorPort using integration_transit

use application::error::ApplicationError;
use application::ports::StopLocatorPort;
use async_trait::async_trait;
use domain::value_objects::{Coordinates, StopResult};
use integration_transit::{MbtaTransitClient, TransitClient, TransitConfig, TransitError};
use tracing::{debug, instrument};

/// Adapter for nearest-stop lookup backed by the MBTA v3 API
pub struct TransitAdapter {
    client: Box<dyn TransitClient>,
}

impl std::fmt::Debug for TransitAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitAdapter")
            .field("client", &"dyn TransitClient")
            .finish()
    }
}

impl TransitAdapter {
    /// Wrap an existing transit client
    pub fn new(client: impl TransitClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Create an adapter with an MBTA client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &TransitConfig) -> Result<Self, ApplicationError> {
        let client = MbtaTransitClient::new(config).map_err(map_transit_error)?;
        Ok(Self::new(client))
    }
}

fn map_transit_error(error: TransitError) -> ApplicationError {
    match error {
        TransitError::Configuration(msg) => ApplicationError::Configuration(msg),
        TransitError::NotFound(msg) => ApplicationError::NotFound(msg),
        e @ (TransitError::Fetch(_) | TransitError::MalformedResponse(_)) => {
            ApplicationError::Fetch(e.to_string())
        },
    }
}

#[async_trait]
impl StopLocatorPort for TransitAdapter {
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    async fn nearest_stop(&self, coordinates: &Coordinates) -> Result<StopResult, ApplicationError> {
        let stop = self
            .client
            .nearest_stop(coordinates)
            .await
            .map_err(map_transit_error)?;

        debug!(stop = %stop.stop_name(), "Transit adapter found stop");
        Ok(stop)
    }
}
