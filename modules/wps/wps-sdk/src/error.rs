//! Public error types for the `wps` module.

use thiserror::Error;

/// Errors raised while loading or storing the WPS service configuration.
///
/// Normalization and discovery never fail; these come from the persistence
/// side only.
#[derive(Error, Debug, Clone)]
pub enum WpsError {
    /// The configuration document could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The configuration document exists but could not be parsed.
    #[error("Malformed service document: {0}")]
    MalformedDocument(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WpsError {
    /// Creates a `Persistence` error.
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    /// Creates a `MalformedDocument` error.
    #[must_use]
    pub fn malformed_document(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns `true` if this is a persistence error.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Returns `true` if this is a malformed document error.
    #[must_use]
    pub const fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = WpsError::persistence("disk full");
        assert!(err.is_persistence());
        assert!(err.to_string().contains("disk full"));

        let err = WpsError::malformed_document("expected mapping");
        assert!(err.is_malformed_document());

        let err = WpsError::internal("unexpected");
        assert!(matches!(err, WpsError::Internal(_)));
    }

    #[test]
    fn test_error_display() {
        let err = WpsError::Persistence("permission denied".to_owned());
        assert_eq!(err.to_string(), "Persistence error: permission denied");

        let err = WpsError::MalformedDocument("bad indent".to_owned());
        assert_eq!(err.to_string(), "Malformed service document: bad indent");
    }
}
