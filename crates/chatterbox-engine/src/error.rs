//! Error types for response table validation.

use chatterbox_core::ChatterboxError;
use thiserror::Error;

/// Errors detected when validating a response table.
///
/// All variants are construction-time failures; a validated table never
/// fails at lookup time.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("category at index {0} has an empty name")]
    UnnamedCategory(usize),
    #[error("category '{0}' has no patterns")]
    EmptyPatterns(String),
    #[error("category '{0}' has no responses")]
    EmptyResponses(String),
    #[error("duplicate category name '{0}'")]
    DuplicateCategory(String),
    #[error("pattern '{pattern}' in category '{category}' must be non-empty lowercase")]
    InvalidPattern { category: String, pattern: String },
    #[error("default response pool is empty")]
    EmptyDefaultPool,
}

impl From<TableError> for ChatterboxError {
    fn from(err: TableError) -> Self {
        ChatterboxError::Table(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        let err = TableError::EmptyResponses("jokes".to_string());
        assert_eq!(err.to_string(), "category 'jokes' has no responses");

        let err = TableError::EmptyDefaultPool;
        assert_eq!(err.to_string(), "default response pool is empty");

        let err = TableError::InvalidPattern {
            category: "greetings".to_string(),
            pattern: "Hello".to_string(),
        };
        assert!(err.to_string().contains("greetings"));
        assert!(err.to_string().contains("Hello"));
    }

    #[test]
    fn test_table_error_converts_to_top_level() {
        let err: ChatterboxError = TableError::DuplicateCategory("jokes".to_string()).into();
        assert!(matches!(err, ChatterboxError::Table(_)));
        assert!(err.to_string().contains("jokes"));
    }
}
