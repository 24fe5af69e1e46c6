//! Error types for the Stratus core crate.
//!
//! All errors implement the standard `std::error::Error` trait via
//! `thiserror`. Functions that can fail return `Result<T, ConfigError>`;
//! errors are values, handled at the appropriate boundary. Transport and
//! retry failures live in the client crate, not here.

use thiserror::Error;

/// Error type for core configuration operations.
///
/// # Example
///
/// ```
/// use stratus_core::ConfigError;
///
/// let error = ConfigError::property_not_found("database.url");
/// assert!(error.is_property_not_found());
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required property was not found.
    #[error("Property '{key}' not found in configuration")]
    PropertyNotFound {
        /// The key that was requested
        key: String,
    },

    /// Error parsing configuration content.
    #[error("Failed to parse configuration from '{source_name}': {message}")]
    ParseError {
        /// Source of the configuration (filename, URL, etc.)
        source_name: String,
        /// Description of the parse error
        message: String,
        /// Underlying error, if any
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConfigError {
    /// Creates a PropertyNotFound error.
    pub fn property_not_found(key: impl Into<String>) -> Self {
        Self::PropertyNotFound { key: key.into() }
    }

    /// Creates a ParseError without a cause.
    pub fn parse_error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a ParseError with a cause.
    pub fn parse_error_with_cause<E>(
        source: impl Into<String>,
        message: impl Into<String>,
        cause: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this error indicates a missing property.
    pub fn is_property_not_found(&self) -> bool {
        matches!(self, Self::PropertyNotFound { .. })
    }

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }
}

/// Type alias for Results with ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_not_found() {
        let error = ConfigError::property_not_found("database.url");

        assert!(error.is_property_not_found());
        assert!(format!("{}", error).contains("database.url"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let parse_error =
            ConfigError::parse_error_with_cause("config.json", "Could not read payload", io_error);

        // Verificar que source() esta implementado
        use std::error::Error;
        assert!(parse_error.source().is_some());
        assert!(parse_error.is_parse_error());
    }

    #[test]
    fn test_result_with_question_mark() {
        fn inner() -> Result<()> {
            Err(ConfigError::internal("test"))
        }

        fn outer() -> Result<String> {
            inner()?; // Propaga el error
            Ok("success".into())
        }

        assert!(outer().is_err());
    }
}
