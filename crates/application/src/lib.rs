//! Application layer - Use cases and orchestration
//!
//! Defines the geocoding and stop-locator ports and the lookup service that
//! chains them into a single place-name → nearest-stop operation.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ErrorKind};
pub use ports::*;
pub use services::*;
