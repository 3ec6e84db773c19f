//! Raw upstream payload shapes
//!
//! Only the fields the lookups read are modelled. Both APIs are navigated
//! as generic JSON first (to tell "no matches" apart from a malformed
//! match), then the first match is decoded into these types.

use serde::Deserialize;
use serde_json::{Number, Value};

/// A GeoJSON feature from the Mapbox forward geocoding response
#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    pub geometry: RawGeometry,
    #[serde(default)]
    pub place_name: Option<String>,
}

/// GeoJSON point geometry; `coordinates` is ordered `[lng, lat]`
#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    pub coordinates: Vec<CoordinateValue>,
}

/// A coordinate component, numeric or already textual
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CoordinateValue {
    Number(Number),
    Text(String),
}

impl CoordinateValue {
    /// Decimal text of this component without a float round-trip
    pub fn into_decimal(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// An entry of the MBTA `/stops` JSON:API `data` array
#[derive(Debug, Deserialize)]
pub(crate) struct RawStop {
    #[serde(default)]
    pub id: Option<String>,
    pub attributes: RawStopAttributes,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStopAttributes {
    pub name: String,
    #[serde(default)]
    pub wheelchair_boarding: Option<Value>,
}

impl RawStopAttributes {
    /// Integer boarding code, `None` when absent or not an integer
    pub fn wheelchair_code(&self) -> Option<i64> {
        self.wheelchair_boarding.as_ref().and_then(Value::as_i64)
    }
}

/// First element of a non-empty array under `key`, if any
pub(crate) fn first_match<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .and_then(|items| items.first())
}
