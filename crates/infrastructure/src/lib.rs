//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! geocoding and transit clients, and owns configuration loading, logging
//! setup and HTML templates.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{
    ApiCredentials, AppConfig, AppConfigError, GeocodingAppConfig, LogFormat, ServerConfig,
    TransitAppConfig,
};
pub use telemetry::{TelemetryError, init_logging};
pub use templates::{StopPageData, TemplateEngine, TemplateError};
