//! Text and JSON renderings of command results

use domain::{Coordinates, StopResult, WheelchairBoarding};
use serde::Serialize;

/// Result of `lookup`
#[derive(Debug, Serialize)]
pub struct LookupOutput {
    pub place_name: String,
    pub stop_name: String,
    pub wheelchair_accessible: bool,
    pub wheelchair_boarding: WheelchairBoarding,
}

impl LookupOutput {
    pub fn new(place_name: &str, stop: &StopResult) -> Self {
        Self {
            place_name: place_name.to_string(),
            stop_name: stop.stop_name().to_string(),
            wheelchair_accessible: stop.wheelchair_accessible(),
            wheelchair_boarding: stop.wheelchair_boarding(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Nearest stop to {}: {}\nWheelchair accessible: {} ({})",
            self.place_name,
            self.stop_name,
            yes_no(self.wheelchair_accessible),
            self.wheelchair_boarding.label(),
        )
    }
}

/// Result of `geocode`
#[derive(Debug, Serialize)]
pub struct GeocodeOutput {
    pub place_name: String,
    pub latitude: String,
    pub longitude: String,
}

impl GeocodeOutput {
    pub fn new(place_name: &str, coordinates: &Coordinates) -> Self {
        Self {
            place_name: place_name.to_string(),
            latitude: coordinates.latitude().to_string(),
            longitude: coordinates.longitude().to_string(),
        }
    }

    pub fn to_text(&self) -> String {
        format!("{}: {}, {}", self.place_name, self.latitude, self.longitude)
    }
}

/// Result of `nearest-stop`
#[derive(Debug, Serialize)]
pub struct StopOutput {
    pub stop_name: String,
    pub wheelchair_accessible: bool,
    pub wheelchair_boarding: WheelchairBoarding,
}

impl From<&StopResult> for StopOutput {
    fn from(stop: &StopResult) -> Self {
        Self {
            stop_name: stop.stop_name().to_string(),
            wheelchair_accessible: stop.wheelchair_accessible(),
            wheelchair_boarding: stop.wheelchair_boarding(),
        }
    }
}

impl StopOutput {
    pub fn to_text(&self) -> String {
        format!(
            "Nearest stop: {}\nWheelchair accessible: {} ({})",
            self.stop_name,
            yes_no(self.wheelchair_accessible),
            self.wheelchair_boarding.label(),
        )
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_text() {
        let stop = StopResult::new("Park Street", WheelchairBoarding::Accessible);
        let out = LookupOutput::new("Boston Common", &stop);
        assert_eq!(
            out.to_text(),
            "Nearest stop to Boston Common: Park Street\nWheelchair accessible: yes (Accessible)"
        );
    }

    #[test]
    fn lookup_json_shape() {
        let stop = StopResult::new("Kenmore", WheelchairBoarding::NoInformation);
        let json = serde_json::to_value(LookupOutput::new("Fenway Park", &stop)).unwrap();
        assert_eq!(json["place_name"], "Fenway Park");
        assert_eq!(json["stop_name"], "Kenmore");
        assert_eq!(json["wheelchair_accessible"], false);
        assert_eq!(json["wheelchair_boarding"], "no_information");
    }

    #[test]
    fn geocode_text() {
        let coords = Coordinates::new("42.3551", "-71.0656").unwrap();
        let out = GeocodeOutput::new("Boston Common", &coords);
        assert_eq!(out.to_text(), "Boston Common: 42.3551, -71.0656");
    }

    #[test]
    fn stop_text_for_inaccessible_stop() {
        let stop = StopResult::new("Symphony", WheelchairBoarding::NotAccessible);
        let out = StopOutput::from(&stop);
        assert_eq!(
            out.to_text(),
            "Nearest stop: Symphony\nWheelchair accessible: no (Not accessible)"
        );
    }
}
