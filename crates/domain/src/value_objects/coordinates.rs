//! Geographic coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A latitude/longitude pair kept in its original decimal text form
///
/// Upstream payloads are passed along verbatim so the values never take a
/// float round-trip between the geocoder and the stop lookup. Both parts are
/// validated on construction, so a `Coordinates` value is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    latitude: String,
    /// Longitude in degrees (-180 to 180)
    longitude: String,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude strings
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either part is not a
    /// finite decimal number, latitude is not in [-90, 90] or longitude is
    /// not in [-180, 180].
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let latitude = latitude.into().trim().to_string();
        let longitude = longitude.into().trim().to_string();

        let lat = parse_degrees(&latitude, "latitude")?;
        let lng = parse_degrees(&longitude, "longitude")?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinates(format!(
                "latitude must be -90 to 90, got {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinates(format!(
                "longitude must be -180 to 180, got {longitude}"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create coordinates from a (longitude, latitude) pair
    ///
    /// GeoJSON orders positions as `[lng, lat]`; this flips them into the
    /// latitude-first convention used everywhere else.
    pub fn from_lng_lat(
        longitude: impl Into<String>,
        latitude: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(latitude, longitude)
    }

    /// Get the latitude as decimal text
    #[must_use]
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Get the longitude as decimal text
    #[must_use]
    pub fn longitude(&self) -> &str {
        &self.longitude
    }

}

/// Unchecked wire form; deserialization goes through [`Coordinates::new`]
#[derive(Deserialize)]
struct RawCoordinates {
    latitude: String,
    longitude: String,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DomainError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

fn parse_degrees(value: &str, field: &str) -> Result<f64, DomainError> {
    let parsed: f64 = value.parse().map_err(|_| {
        DomainError::InvalidCoordinates(format!("{field} is not a decimal number: '{value}'"))
    })?;

    if !parsed.is_finite() {
        return Err(DomainError::InvalidCoordinates(format!(
            "{field} must be finite, got {value}"
        )));
    }

    Ok(parsed)
}
