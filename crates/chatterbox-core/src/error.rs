use thiserror::Error;

/// Top-level error type for the Chatterbox system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for
/// ChatterboxError` so that the `?` operator works seamlessly across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatterboxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Response table error: {0}")]
    Table(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ChatterboxError {
    fn from(err: toml::de::Error) -> Self {
        ChatterboxError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ChatterboxError {
    fn from(err: toml::ser::Error) -> Self {
        ChatterboxError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Chatterbox operations.
pub type Result<T> = std::result::Result<T, ChatterboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChatterboxError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = ChatterboxError::Table("empty pool".to_string());
        assert_eq!(err.to_string(), "Response table error: empty pool");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChatterboxError = io_err.into();
        assert!(matches!(err, ChatterboxError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: ChatterboxError = toml_err.into();
        assert!(matches!(err, ChatterboxError::Config(_)));
    }
}
