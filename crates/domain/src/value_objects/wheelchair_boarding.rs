//! Wheelchair boarding status of a transit stop

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream wheelchair boarding code (GTFS `wheelchair_boarding`)
///
/// Kept three-valued so callers can tell "unknown" apart from
/// "not accessible". [`Self::is_accessible`] performs the lossy collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelchairBoarding {
    /// No accessibility information (code 0, or any unrecognised code)
    #[default]
    NoInformation,
    /// Boarding is possible for wheelchair users (code 1)
    Accessible,
    /// Wheelchair boarding is not possible (code 2)
    NotAccessible,
}

impl WheelchairBoarding {
    /// Map an upstream integer code to a boarding status
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Accessible,
            2 => Self::NotAccessible,
            _ => Self::NoInformation,
        }
    }

    /// Only an explicit "accessible" code counts; unknown maps to `false`
    #[must_use]
    pub const fn is_accessible(&self) -> bool {
        matches!(self, Self::Accessible)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NoInformation => "No information",
            Self::Accessible => "Accessible",
            Self::NotAccessible => "Not accessible",
        }
    }
}

impl fmt::Display for WheelchairBoarding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<Option<i64>> for WheelchairBoarding {
    fn from(code: Option<i64>) -> Self {
        code.map_or(Self::NoInformation, Self::from_code)
    }
}
