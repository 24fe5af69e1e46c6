//! Stratus Core - Domain types and merge algorithms
//!
//! This crate provides the foundational types for the Stratus Config
//! client: the dynamic value model, property sources as served by Spring
//! Cloud Config compatible servers, the precedence-honoring merge, and the
//! read-only [`MergedConfig`] accessor over the result.

pub mod config;
pub mod error;
pub mod merge;
pub mod response;
pub mod types;

pub use config::{ConfigMap, ConfigValue, MergedConfig, PropertySource};
pub use error::{ConfigError, Result};
pub use response::ConfigResponse;
pub use types::{Application, Label, Profile};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_defined() {
        assert!(!version().is_empty());
    }

    #[test]
    fn version_is_semver() {
        let v = version();
        assert_eq!(v.split('.').count(), 3, "Version should be semver");
    }
}
