//! Upstream API credentials.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Environment variable holding the Mapbox access token
pub const GEOCODER_TOKEN_ENV: &str = "MAPBOX_TOKEN";

/// Environment variable holding the MBTA v3 API key
pub const TRANSIT_API_KEY_ENV: &str = "MBTA_API_KEY";

/// API credentials for the geocoding and transit services
///
/// Loaded once at startup and read-only afterwards. Values never appear in
/// `Debug` output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCredentials {
    /// Mapbox access token
    #[serde(default)]
    pub geocoder_token: Option<SecretString>,

    /// MBTA v3 API key
    #[serde(default)]
    pub transit_api_key: Option<SecretString>,
}

impl ApiCredentials {
    /// Fill unset credentials from `MAPBOX_TOKEN` / `MBTA_API_KEY`
    ///
    /// Values that are already present are never overridden.
    pub fn fill_from_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if !is_set(self.geocoder_token.as_ref()) {
            if let Some(token) = lookup(GEOCODER_TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
                self.geocoder_token = Some(SecretString::from(token));
            }
        }
        if !is_set(self.transit_api_key.as_ref()) {
            if let Some(key) = lookup(TRANSIT_API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
                self.transit_api_key = Some(SecretString::from(key));
            }
        }
    }

    /// Whether a non-blank geocoder token is configured
    #[must_use]
    pub fn has_geocoder_token(&self) -> bool {
        is_set(self.geocoder_token.as_ref())
    }

    /// Whether a non-blank transit API key is configured
    #[must_use]
    pub fn has_transit_api_key(&self) -> bool {
        is_set(self.transit_api_key.as_ref())
    }
}

fn is_set(secret: Option<&SecretString>) -> bool {
    secret.is_some_and(|s| !s.expose_secret().trim().is_empty())
}
