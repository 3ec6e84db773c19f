//! MBTA nearest-stop client
//!
//! Queries the [MBTA v3 API](https://api-v3.mbta.com/docs/swagger/index.html)
//! `/stops` endpoint sorted by distance and keeps only the closest stop.

use async_trait::async_trait;
use domain::value_objects::{Coordinates, StopResult, WheelchairBoarding};
use tracing::{debug, instrument};
use url::Url;

use crate::config::TransitConfig;
use crate::error::TransitError;
use crate::fetcher::JsonFetcher;
use crate::models::{RawStop, first_match};

/// Trait for transit service clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Find the stop closest to `coordinates`
    async fn nearest_stop(&self, coordinates: &Coordinates) -> Result<StopResult, TransitError>;
}

/// MBTA-based transit client
#[derive(Debug)]
pub struct MbtaTransitClient {
    fetcher: JsonFetcher,
    config: TransitConfig,
}

impl MbtaTransitClient {
    /// Create a new MBTA transit client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &TransitConfig) -> Result<Self, TransitError> {
        let fetcher = JsonFetcher::new(config.timeout_secs)?;
        Ok(Self {
            fetcher,
            config: config.clone(),
        })
    }

    fn build_url(&self, coordinates: &Coordinates) -> Result<Url, TransitError> {
        if self.config.api_key.is_empty() {
            return Err(TransitError::Configuration(
                "transit API key is not configured".to_string(),
            ));
        }

        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| TransitError::Configuration(format!("invalid transit base_url: {e}")))?;

        url.query_pairs_mut()
            .append_pair("api_key", &self.config.api_key)
            .append_pair("sort", "distance")
            .append_pair("filter[latitude]", coordinates.latitude())
            .append_pair("filter[longitude]", coordinates.longitude());

        Ok(url)
    }

    fn parse_response(
        payload: &serde_json::Value,
        coordinates: &Coordinates,
    ) -> Result<StopResult, TransitError> {
        let first = first_match(payload, "data").ok_or_else(|| {
            TransitError::NotFound(format!("no stations found near {coordinates}"))
        })?;

        let stop: RawStop = serde_json::from_value(first.clone())
            .map_err(|e| TransitError::MalformedResponse(e.to_string()))?;

        let boarding = WheelchairBoarding::from(stop.attributes.wheelchair_code());
        debug!(
            stop_id = stop.id.as_deref().unwrap_or("-"),
            %boarding,
            "Nearest stop entry"
        );

        Ok(StopResult::new(stop.attributes.name, boarding))
    }
}

#[async_trait]
impl TransitClient for MbtaTransitClient {
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    async fn nearest_stop(&self, coordinates: &Coordinates) -> Result<StopResult, TransitError> {
        let url = self.build_url(coordinates)?;
        let payload = self.fetcher.get_json(&url).await?;
        let stop = Self::parse_response(&payload, coordinates)?;

        debug!(stop = %stop.stop_name(), "Nearest stop resolved");
        Ok(stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn boston_common() -> Coordinates {
        Coordinates::new("42.3551", "-71.0656").unwrap()
    }

    #[test]
    fn test_build_url() {
        let client = MbtaTransitClient::new(&TransitConfig {
            api_key: "abc".to_string(),
            ..TransitConfig::default()
        })
        .unwrap();
        let url = client.build_url(&boston_common()).unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(url.path(), "/stops");
        assert_eq!(
            pairs,
            vec![
                ("api_key".to_string(), "abc".to_string()),
                ("sort".to_string(), "distance".to_string()),
                ("filter[latitude]".to_string(), "42.3551".to_string()),
                ("filter[longitude]".to_string(), "-71.0656".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let client = MbtaTransitClient::new(&TransitConfig::default()).unwrap();
        assert!(matches!(
            client.build_url(&boston_common()),
            Err(TransitError::Configuration(_))
        ));
    }

    #[test]
    fn test_parse_accessible_stop() {
        let payload = json!({
            "data": [
                { "id": "place-pktrm", "attributes": { "name": "Park Street", "wheelchair_boarding": 1 } },
                { "id": "place-boyls", "attributes": { "name": "Boylston", "wheelchair_boarding": 2 } }
            ]
        });
        let stop = MbtaTransitClient::parse_response(&payload, &boston_common()).unwrap();
        assert_eq!(stop.stop_name(), "Park Street");
        assert!(stop.wheelchair_accessible());
    }

    #[test]
    fn test_parse_unknown_boarding() {
        let payload = json!({
            "data": [{ "attributes": { "name": "Boylston", "wheelchair_boarding": 0 } }]
        });
        let stop = MbtaTransitClient::parse_response(&payload, &boston_common()).unwrap();
        assert!(!stop.wheelchair_accessible());
        assert_eq!(stop.wheelchair_boarding(), WheelchairBoarding::NoInformation);
    }

    #[test]
    fn test_parse_missing_boarding_field() {
        let payload = json!({ "data": [{ "attributes": { "name": "Boylston" } }] });
        let stop = MbtaTransitClient::parse_response(&payload, &boston_common()).unwrap();
        assert!(!stop.wheelchair_accessible());
    }

    #[test]
    fn test_parse_empty_data() {
        let err =
            MbtaTransitClient::parse_response(&json!({ "data": [] }), &boston_common()).unwrap_err();
        assert!(matches!(err, TransitError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "no stations found near 42.3551,-71.0656"
        );
    }

    #[test]
    fn test_parse_missing_name() {
        let payload = json!({ "data": [{ "attributes": { "wheelchair_boarding": 1 } }] });
        let err = MbtaTransitClient::parse_response(&payload, &boston_common()).unwrap_err();
        assert!(matches!(err, TransitError::MalformedResponse(_)));
    }
}
