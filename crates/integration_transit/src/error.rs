//! Transit error types

use thiserror::Error;

use crate::fetcher::FetchError;

/// Errors that can occur during the nearest-stop lookup
#[derive(Debug, Error)]
pub enum TransitError {
    /// The API key or base URL is missing or unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The stop query returned no stops
    #[error("{0}")]
    NotFound(String),

    /// The request could not be completed
    #[error("Stop request failed: {0}")]
    Fetch(#[from] FetchError),

    /// The nearest stop entry lacks required fields
    #[error("Malformed stop response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransitError::NotFound("no stations found near 42.3551,-71.0656".to_string());
        assert_eq!(err.to_string(), "no stations found near 42.3551,-71.0656");

        let err = TransitError::from(FetchError::Status(503));
        assert_eq!(err.to_string(), "Stop request failed: HTTP 503");
    }
}
