#![allow(dead_code)]
use indexmap::IndexMap;
use stratus_core::{ConfigResponse, ConfigValue, PropertySource};

/// Helper to create a flat source map from a JSON object string.
/// Panics if the JSON is invalid (intended for tests).
pub fn flat_map(json: &str) -> IndexMap<String, ConfigValue> {
    serde_json::from_str(json).expect("Failed to create test source map from JSON")
}

/// Helper to create a PropertySource from a JSON object string.
pub fn source(name: &str, json: &str) -> PropertySource {
    PropertySource::new(name, flat_map(json))
}

/// Helper to create a ConfigResponse with the given sources
/// (highest priority first).
pub fn response(name: &str, sources: Vec<PropertySource>) -> ConfigResponse {
    let mut r = ConfigResponse::new(name, vec!["default".to_string()]);
    r.property_sources = sources;
    r
}

/// A realistic aggregated fixture: profile overrides on top of defaults.
pub fn layered_response() -> ConfigResponse {
    response(
        "myapp",
        vec![
            source(
                "git:main:myapp-prod.yml",
                r#"{"server.port": 80, "logging.level": "WARN"}"#,
            ),
            source(
                "git:main:myapp.yml",
                r#"{"server.port": 8080, "server.host": "localhost", "logging.level": "INFO", "logging.file": "app.log"}"#,
            ),
        ],
    )
}
