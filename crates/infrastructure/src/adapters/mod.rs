//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod transit_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use transit_adapter::TransitAdapter;
