//! Application-level errors

use serde::Serialize;
use thiserror::Error;

/// Errors raised by the lookup ports
///
/// Every adapter failure is classified into one of three tags so callers can
/// tell a missing credential from "no match" from a broken upstream.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A required credential or setting is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream service returned no usable match
    #[error("{0}")]
    NotFound(String),

    /// The upstream service could not be reached or returned unusable data
    #[error("Upstream request failed: {0}")]
    Fetch(String),
}

/// Classification of an [`ApplicationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing credential or setting
    Configuration,
    /// No usable match upstream
    NotFound,
    /// Network, status or payload failure upstream
    Fetch,
}

impl ApplicationError {
    /// The tag of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Fetch(_) => ErrorKind::Fetch,
        }
    }

    /// Whether rephrasing the input could fix this error
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
