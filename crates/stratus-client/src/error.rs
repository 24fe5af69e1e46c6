//! Error types for the Stratus client.

use thiserror::Error;

/// Errors surfaced by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A request failed at the transport level (network failure, timeout,
    /// or a non-success HTTP status).
    #[error("transport error for '{url}': {message}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code, when a response was received.
        status: Option<u16>,
        /// Description of what went wrong.
        message: String,
        /// Underlying error, if any.
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Every attempt within the retry budget failed.
    #[error("all {attempts} attempts failed: {source}")]
    ExhaustedRetries {
        /// Total number of attempts made.
        attempts: u32,
        /// The last underlying failure.
        #[source]
        source: Box<ClientError>,
    },

    /// `load()` was invoked with an empty application list.
    #[error("no applications configured")]
    NoApplicationsConfigured,

    /// A text-format load was requested with an unrecognized format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The server responded with a body that is not a valid config payload.
    #[error("failed to decode response from '{url}'")]
    Decode {
        /// The URL that produced the body.
        url: String,
        /// The JSON decoding failure.
        #[source]
        cause: serde_json::Error,
    },

    /// Invalid client configuration (bad header, unusable endpoint).
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Creates a Transport error from an underlying cause (no status).
    pub fn transport<E>(url: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            url: url.into(),
            status: None,
            message: cause.to_string(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates a Transport error for a non-success HTTP status.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Transport {
            url: url.into(),
            status: Some(status),
            message: format!("unexpected status {}", status),
            cause: None,
        }
    }

    /// Creates an ExhaustedRetries error wrapping the last failure.
    pub fn exhausted(attempts: u32, last: ClientError) -> Self {
        Self::ExhaustedRetries {
            attempts,
            source: Box::new(last),
        }
    }

    /// Creates a Decode error.
    pub fn decode(url: impl Into<String>, cause: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            cause,
        }
    }

    /// Creates an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns the HTTP status code, walking through retry wrappers.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::ExhaustedRetries { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Returns true if this is a transport-level failure (directly or
    /// wrapped by an exhausted retry budget).
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::ExhaustedRetries { source, .. } => source.is_transport(),
            _ => false,
        }
    }
}

/// Type alias for Results with ClientError.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ClientError::status("http://config/myapp/default/main", 503);

        let msg = err.to_string();
        assert!(msg.contains("http://config/myapp/default/main"));
        assert!(msg.contains("503"));
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_exhausted_wraps_last_error() {
        let last = ClientError::status("http://config/x", 500);
        let err = ClientError::exhausted(4, last);

        assert!(err.to_string().contains("all 4 attempts failed"));
        assert!(err.is_transport());
        assert_eq!(err.status_code(), Some(500));

        use std::error::Error;
        assert!(err.source().is_some());
    }

    #[test]
    fn test_non_transport_kinds() {
        assert!(!ClientError::NoApplicationsConfigured.is_transport());
        assert_eq!(
            ClientError::UnsupportedFormat("toml".into()).to_string(),
            "unsupported format: toml"
        );
    }
}
