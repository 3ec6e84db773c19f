//! Logging infrastructure
//!
//! Structured logging through `tracing`, rendered as text or JSON.

mod logging;

pub use logging::{TelemetryError, build_env_filter, init_logging};
