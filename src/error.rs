//! Error handling for the Bookcase application
//!
//! This module defines the custom error type and a Result alias used by the
//! ambient surfaces (preference loading and saving). The catalog reducer
//! itself never fails; see [`crate::catalog::transition`].

use thiserror::Error;

/// Main error type for Bookcase operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Bookcase operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Config("missing data directory".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: missing data directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CatalogError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
