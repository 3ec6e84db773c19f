//! Geocoding adapter - Implements GeocoderPort using integration_transit

use application::error::ApplicationError;
use application::ports::GeocoderPort;
use async_trait::async_trait;
use domain::value_objects::Coordinates;
use integration_transit::{GeocodingClient, GeocodingConfig, GeocodingError, MapboxGeocodingClient};
use tracing::{debug, instrument};

/// Adapter for forward geocoding backed by Mapbox
pub struct GeocodingAdapter {
    client: Box<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"dyn GeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Wrap an existing geocoding client
    pub fn new(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Create an adapter with a Mapbox client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = MapboxGeocodingClient::new(config).map_err(map_geocoding_error)?;
        Ok(Self::new(client))
    }
}

/// Collapse integration errors into the application taxonomy
fn map_geocoding_error(error: GeocodingError) -> ApplicationError {
    match error {
        GeocodingError::Configuration(msg) => ApplicationError::Configuration(msg),
        GeocodingError::NotFound(msg) => ApplicationError::NotFound(msg),
        e @ (GeocodingError::Fetch(_) | GeocodingError::MalformedResponse(_)) => {
            ApplicationError::Fetch(e.to_string())
        },
    }
}

#[async_trait]
impl GeocoderPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve_place(&self, place_name: &str) -> Result<Coordinates, ApplicationError> {
        let coordinates = self
            .client
            .resolve_place(place_name)
            .await
            .map_err(map_geocoding_error)?;

        debug!(%coordinates, "Geocoding adapter resolved place");
        Ok(coordinates)
    }
}
