//! stopfinder HTTP presentation layer
//!
//! Serves the search form, the result page, a JSON lookup endpoint and a
//! health check.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, RequestId};
pub use routes::create_router;
pub use state::{AppState, StateError};
