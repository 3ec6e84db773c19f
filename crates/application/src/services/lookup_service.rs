//! Lookup service - place name to nearest transit stop

use std::{fmt, sync::Arc, time::Instant};

use domain::value_objects::StopResult;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{ApplicationError, ErrorKind},
    ports::{GeocoderPort, StopLocatorPort},
};

/// Failure of a complete lookup, tagged with the place that was asked for
#[derive(Debug, Error)]
#[error("Error finding stop near '{place_name}': {source}")]
pub struct LookupError {
    place_name: String,
    #[source]
    source: ApplicationError,
}

impl LookupError {
    /// Wrap a stage failure for `place_name`
    pub fn new(place_name: impl Into<String>, source: ApplicationError) -> Self {
        Self {
            place_name: place_name.into(),
            source,
        }
    }

    /// The place name as entered by the caller
    #[must_use]
    pub fn place_name(&self) -> &str {
        &self.place_name
    }

    /// The tag of the underlying failure
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// The underlying stage failure
    #[must_use]
    pub const fn cause(&self) -> &ApplicationError {
        &self.source
    }
}

/// Chains geocoding and the nearest-stop query
///
/// The two calls run strictly in sequence: the stop query needs the
/// geocoded coordinates. Either stage failing fails the whole lookup.
pub struct LookupService {
    geocoder: Arc<dyn GeocoderPort>,
    stop_locator: Arc<dyn StopLocatorPort>,
}

impl fmt::Debug for LookupService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupService").finish_non_exhaustive()
    }
}

impl LookupService {
    /// Create a new lookup service
    pub fn new(geocoder: Arc<dyn GeocoderPort>, stop_locator: Arc<dyn StopLocatorPort>) -> Self {
        Self {
            geocoder,
            stop_locator,
        }
    }

    /// Find the transit stop nearest to a free-text place name
    #[instrument(skip(self))]
    pub async fn find_stop_near(&self, place_name: &str) -> Result<StopResult, LookupError> {
        let start = Instant::now();

        let coordinates = self
            .geocoder
            .resolve_place(place_name)
            .await
            .map_err(|e| {
                warn!(error = %e, kind = ?e.kind(), "Geocoding stage failed");
                LookupError::new(place_name, e)
            })?;

        debug!(%coordinates, "Place resolved");

        let stop = self
            .stop_locator
            .nearest_stop(&coordinates)
            .await
            .map_err(|e| {
                warn!(error = %e, kind = ?e.kind(), %coordinates, "Stop lookup stage failed");
                LookupError::new(place_name, e)
            })?;

        info!(
            stop = %stop.stop_name(),
            accessible = stop.wheelchair_accessible(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Nearest stop found"
        );

        Ok(stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockGeocoderPort, MockStopLocatorPort};
    use domain::value_objects::{Coordinates, WheelchairBoarding};

    fn boston_common() -> Coordinates {
        Coordinates::new("42.3551", "-71.0656").unwrap()
    }

    fn service(geocoder: MockGeocoderPort, stop_locator: MockStopLocatorPort) -> LookupService {
        LookupService::new(Arc::new(geocoder), Arc::new(stop_locator))
    }

    #[tokio::test]
    async fn find_stop_near_chains_both_stages() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve_place()
            .withf(|place: &str| place == "Boston Common")
            .times(1)
            .returning(|_| Ok(boston_common()));

        let mut stop_locator = MockStopLocatorPort::new();
        stop_locator
            .expect_nearest_stop()
            .withf(|coords: &Coordinates| {
                coords.latitude() == "42.3551" && coords.longitude() == "-71.0656"
            })
            .times(1)
            .returning(|_| Ok(StopResult::new("Park Street", WheelchairBoarding::Accessible)));

        let stop = service(geocoder, stop_locator)
            .find_stop_near("Boston Common")
            .await
            .unwrap();

        assert_eq!(stop.stop_name(), "Park Street");
        assert!(stop.wheelchair_accessible());
    }

    #[tokio::test]
    async fn geocoding_failure_skips_stop_lookup() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder.expect_resolve_place().returning(|place| {
            Err(ApplicationError::NotFound(format!(
                "no location found for {place}"
            )))
        });

        let mut stop_locator = MockStopLocatorPort::new();
        stop_locator.expect_nearest_stop().never();

        let err = service(geocoder, stop_locator)
            .find_stop_near("Nonexistent Place XYZ")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.place_name(), "Nonexistent Place XYZ");
        assert!(err.to_string().contains("Nonexistent Place XYZ"));
    }

    #[tokio::test]
    async fn stop_lookup_failure_is_wrapped() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve_place()
            .returning(|_| Ok(boston_common()));

        let mut stop_locator = MockStopLocatorPort::new();
        stop_locator.expect_nearest_stop().returning(|coords| {
            Err(ApplicationError::NotFound(format!(
                "no stations found near {coords}"
            )))
        });

        let err = service(geocoder, stop_locator)
            .find_stop_near("Boston Common")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        let message = err.to_string();
        assert!(message.contains("Boston Common"));
        assert!(message.contains("no stations found near 42.3551,-71.0656"));
    }

    #[tokio::test]
    async fn configuration_failure_keeps_its_tag() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder.expect_resolve_place().returning(|_| {
            Err(ApplicationError::Configuration(
                "geocoder token is not configured".to_string(),
            ))
        });

        let err = service(geocoder, MockStopLocatorPort::new())
            .find_stop_near("Boston Common")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(!err.cause().is_user_correctable());
    }

    #[tokio::test]
    async fn fetch_failure_keeps_its_tag() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve_place()
            .returning(|_| Ok(boston_common()));

        let mut stop_locator = MockStopLocatorPort::new();
        stop_locator
            .expect_nearest_stop()
            .returning(|_| Err(ApplicationError::Fetch("HTTP 503".to_string())));

        let err = service(geocoder, stop_locator)
            .find_stop_near("Boston Common")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn lookup_error_display() {
        let err = LookupError::new(
            "Fenway",
            ApplicationError::NotFound("no location found for Fenway".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Error finding stop near 'Fenway': no location found for Fenway"
        );
    }
}
