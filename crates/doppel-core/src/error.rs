//! Error types for Doppel

use thiserror::Error;

/// Main error type for Doppel operations.
///
/// Store mutations never produce one of these: an unknown account id is a
/// silent no-op. Errors only arise while loading fixtures and configuration.
#[derive(Error, Debug)]
pub enum DoppelError {
    /// The mock dataset fixture could not be parsed
    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    /// The mock dataset parsed but violates one of its invariants
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Configuration file is malformed or holds out-of-range values
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DoppelError
pub type DoppelResult<T> = Result<T, DoppelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DoppelError::InvalidDataset("edge you -> nobody".to_string());
        assert_eq!(format!("{}", err), "Invalid dataset: edge you -> nobody");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DoppelError = io_err.into();
        assert!(matches!(err, DoppelError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DoppelError = json_err.into();
        assert!(matches!(err, DoppelError::Dataset(_)));
    }
}
