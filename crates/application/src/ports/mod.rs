//! Port definitions (interfaces for adapters)

mod geocoder_port;
mod stop_locator_port;

pub use geocoder_port::GeocoderPort;
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
pub use stop_locator_port::StopLocatorPort;
#[cfg(test)]
pub use stop_locator_port::MockStopLocatorPort;
