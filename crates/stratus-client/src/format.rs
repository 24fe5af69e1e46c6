//! Text formats served by the raw-content endpoint.

use std::str::FromStr;

use crate::error::ClientError;

/// Formats a config server can render a single application's
/// configuration in, via `GET /{application}-{profile}.{ext}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// Java Properties format (.properties)
    Properties,
    /// JSON format (.json)
    Json,
}

impl TextFormat {
    /// Detects the format from a file extension string.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "properties" => Some(Self::Properties),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Returns the extension used in the request URL.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yml",
            Self::Properties => "properties",
            Self::Json => "json",
        }
    }

    /// Returns the MIME type of the returned body.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Yaml => "application/x-yaml",
            Self::Properties => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Returns all supported formats.
    pub fn all() -> &'static [Self] {
        &[Self::Yaml, Self::Properties, Self::Json]
    }
}

impl FromStr for TextFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| ClientError::UnsupportedFormat(s.to_string()))
    }
}

impl std::fmt::Display for TextFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Properties => write!(f, "Properties"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(TextFormat::from_extension("yml"), Some(TextFormat::Yaml));
        assert_eq!(TextFormat::from_extension("YAML"), Some(TextFormat::Yaml));
        assert_eq!(
            TextFormat::from_extension("properties"),
            Some(TextFormat::Properties)
        );
        assert_eq!(TextFormat::from_extension("json"), Some(TextFormat::Json));
        assert_eq!(TextFormat::from_extension("toml"), None);
    }

    #[test]
    fn test_parse_unsupported() {
        let err = "xml".parse::<TextFormat>().unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedFormat(_)));
        assert_eq!(err.to_string(), "unsupported format: xml");
    }

    #[test]
    fn test_extensions_roundtrip() {
        for format in TextFormat::all() {
            assert_eq!(TextFormat::from_extension(format.extension()), Some(*format));
        }
    }
}
