//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates are missing, non-numeric or out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_error_message() {
        let err = DomainError::InvalidCoordinates("latitude must be -90 to 90".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid coordinates: latitude must be -90 to 90"
        );
    }
}
