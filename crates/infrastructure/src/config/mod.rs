//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `integrations`: geocoding and transit endpoints
//! - `credentials`: API token and key
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, then `STOPFINDER_*` environment variables (nested keys use
//! `__`, e.g. `STOPFINDER_SERVER__PORT`). Credentials that are still unset
//! afterwards are taken from `MAPBOX_TOKEN` and `MBTA_API_KEY`.

mod credentials;
mod integrations;
mod server;

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub use credentials::{ApiCredentials, GEOCODER_TOKEN_ENV, TRANSIT_API_KEY_ENV};
pub use integrations::{GeocodingAppConfig, TransitAppConfig};
pub use server::{LogFormat, ServerConfig};

/// Prefix of the environment variables read into [`AppConfig`]
pub const ENV_PREFIX: &str = "STOPFINDER";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A required credential is missing
    #[error("credentials.{field} is not configured (set {env_var})")]
    MissingCredential {
        /// Config key below `credentials`
        field: &'static str,
        /// Fallback environment variable
        env_var: &'static str,
    },

    /// A value is out of range or unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Transit configuration
    #[serde(default)]
    pub transit: TransitAppConfig,

    /// API credentials
    #[serde(default)]
    pub credentials: ApiCredentials,
}

impl AppConfig {
    /// Load configuration from `.env`, `config.toml` and the environment
    pub fn load() -> Result<Self, AppConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }

        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(Some("config"), env)
    }

    /// Load configuration from an optional config file and an explicit
    /// environment map
    pub fn load_from(
        config_file: Option<&str>,
        env: HashMap<String, String>,
    ) -> Result<Self, AppConfigError> {
        let mut builder = config::Config::builder();

        if let Some(name) = config_file {
            builder = builder.add_source(config::File::with_name(name).required(false));
        }

        let builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone())),
        );

        let mut app_config: Self = builder.build()?.try_deserialize()?;
        app_config
            .credentials
            .fill_from_env(|key| env.get(key).cloned());

        Ok(app_config)
    }

    /// Check that the configuration can serve lookups
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a missing credential, an empty base
    /// URL or a zero timeout.
    pub fn validate(&self) -> Result<(), AppConfigError> {
        if !self.credentials.has_geocoder_token() {
            return Err(AppConfigError::MissingCredential {
                field: "geocoder_token",
                env_var: GEOCODER_TOKEN_ENV,
            });
        }
        if !self.credentials.has_transit_api_key() {
            return Err(AppConfigError::MissingCredential {
                field: "transit_api_key",
                env_var: TRANSIT_API_KEY_ENV,
            });
        }

        if self.geocoding.base_url.trim().is_empty() {
            return Err(AppConfigError::Invalid(
                "geocoding.base_url must not be empty".to_string(),
            ));
        }
        if self.geocoding.timeout_secs == 0 {
            return Err(AppConfigError::Invalid(
                "geocoding.timeout_secs must be greater than 0".to_string(),
            ));
        }

        self.transit
            .to_transit_config(&self.credentials)
            .validate()
            .map_err(|e| AppConfigError::Invalid(format!("transit: {e}")))?;

        Ok(())
    }
}
