//! Application state shared across handlers

use std::sync::Arc;

use application::{ApplicationError, GeocoderPort, LookupService, StopLocatorPort};
use infrastructure::{AppConfig, GeocodingAdapter, TemplateEngine, TemplateError, TransitAdapter};
use thiserror::Error;

/// Failures while wiring the state at startup
#[derive(Debug, Error)]
pub enum StateError {
    /// An adapter could not be built
    #[error(transparent)]
    Adapter(#[from] ApplicationError),

    /// The embedded templates failed to compile
    #[error(transparent)]
    Templates(#[from] TemplateError),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Place name to nearest stop lookup
    pub lookup_service: Arc<LookupService>,
    /// HTML page renderer
    pub templates: Arc<TemplateEngine>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state from already-built parts
    pub fn new(lookup_service: Arc<LookupService>, templates: Arc<TemplateEngine>) -> Self {
        Self {
            lookup_service,
            templates,
        }
    }

    /// Wire the Mapbox and MBTA adapters described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self, StateError> {
        let geocoder: Arc<dyn GeocoderPort> = Arc::new(GeocodingAdapter::from_config(
            &config.geocoding.to_geocoding_config(&config.credentials),
        )?);
        let stop_locator: Arc<dyn StopLocatorPort> = Arc::new(TransitAdapter::from_config(
            &config.transit.to_transit_config(&config.credentials),
        )?);

        Ok(Self::new(
            Arc::new(LookupService::new(geocoder, stop_locator)),
            Arc::new(TemplateEngine::new()?),
        ))
    }
}
