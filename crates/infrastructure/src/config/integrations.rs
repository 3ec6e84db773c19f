//! Upstream API configurations: geocoding and transit.
//!
//! Credentials live in [`ApiCredentials`] and are joined in when the
//! integration-level configs are built.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::ApiCredentials;

// ==============================
// Geocoding Configuration
// ==============================

/// Mapbox geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Forward geocoding endpoint (default: Mapbox `mapbox.places`)
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocoding_base_url() -> String {
    integration_transit::GeocodingConfig::default().base_url
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to `integration_transit::GeocodingConfig`
    #[must_use]
    pub fn to_geocoding_config(
        &self,
        credentials: &ApiCredentials,
    ) -> integration_transit::GeocodingConfig {
        integration_transit::GeocodingConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            access_token: credentials
                .geocoder_token
                .as_ref()
                .map(|t| t.expose_secret().to_string())
                .unwrap_or_default(),
        }
    }
}

// ==============================
// Transit Configuration
// ==============================

/// MBTA stops configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitAppConfig {
    /// Stops endpoint (default: `https://api-v3.mbta.com/stops`)
    #[serde(default = "default_transit_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_transit_base_url() -> String {
    integration_transit::TransitConfig::default().base_url
}

impl Default for TransitAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_transit_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TransitAppConfig {
    /// Convert to `integration_transit::TransitConfig`
    #[must_use]
    pub fn to_transit_config(
        &self,
        credentials: &ApiCredentials,
    ) -> integration_transit::TransitConfig {
        integration_transit::TransitConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            api_key: credentials
                .transit_api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn credentials() -> ApiCredentials {
        ApiCredentials {
            geocoder_token: Some(SecretString::from("pk.abc".to_string())),
            transit_api_key: Some(SecretString::from("mbta-key".to_string())),
        }
    }

    #[test]
    fn test_geocoding_defaults() {
        let config = GeocodingAppConfig::default();
        assert_eq!(
            config.base_url,
            "https://api.mapbox.com/geocoding/v5/mapbox.places"
        );
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_transit_defaults() {
        let config = TransitAppConfig::default();
        assert_eq!(config.base_url, "https://api-v3.mbta.com/stops");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_to_geocoding_config_joins_token() {
        let config = GeocodingAppConfig {
            timeout_secs: 3,
            ..GeocodingAppConfig::default()
        };
        let out = config.to_geocoding_config(&credentials());
        assert_eq!(out.access_token, "pk.abc");
        assert_eq!(out.timeout_secs, 3);
    }

    #[test]
    fn test_to_transit_config_without_key() {
        let out = TransitAppConfig::default().to_transit_config(&ApiCredentials::default());
        assert!(out.api_key.is_empty());
    }

    #[test]
    fn test_to_transit_config_joins_key() {
        let out = TransitAppConfig::default().to_transit_config(&credentials());
        assert_eq!(out.api_key, "mbta-key");
    }
}
