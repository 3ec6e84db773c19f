//! Transit service configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the MBTA v3 stops endpoint
#[derive(Clone, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Base URL of the stops endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// MBTA v3 API key
    #[serde(default, skip_serializing)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "https://api-v3.mbta.com/stops".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: String::new(),
        }
    }
}

impl fmt::Debug for TransitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl TransitConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            api_key: "test-key".to_string(),
        }
    }

    /// Validate the configuration
    ///
    /// The API key is checked per request, so a missing key is not a
    /// validation failure here.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
