//! Nearest-stop lookup result

use serde::Serialize;

use super::WheelchairBoarding;

/// The nearest transit stop and its accessibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopResult {
    stop_name: String,
    wheelchair_accessible: bool,
    wheelchair_boarding: WheelchairBoarding,
}

impl StopResult {
    /// Create a result; the accessibility flag is derived from the boarding code
    #[must_use]
    pub fn new(stop_name: impl Into<String>, wheelchair_boarding: WheelchairBoarding) -> Self {
        Self {
            stop_name: stop_name.into(),
            wheelchair_accessible: wheelchair_boarding.is_accessible(),
            wheelchair_boarding,
        }
    }

    /// Name of the stop
    #[must_use]
    pub fn stop_name(&self) -> &str {
        &self.stop_name
    }

    /// Whether the stop is known to be wheelchair accessible
    #[must_use]
    pub const fn wheelchair_accessible(&self) -> bool {
        self.wheelchair_accessible
    }

    /// Full three-valued boarding status
    #[must_use]
    pub const fn wheelchair_boarding(&self) -> WheelchairBoarding {
        self.wheelchair_boarding
    }
}
