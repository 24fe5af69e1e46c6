use crate::config::PropertySource;
use serde::{Deserialize, Serialize};

/// One server payload, as returned by `GET /{application}/{profiles}/{label}`.
///
/// This is a Data Transfer Object matching the Spring Cloud Config Server
/// v2 wire format exactly, so any compatible server can be consumed.
///
/// # Invariant
///
/// Within `property_sources`, index 0 has the *highest* merge priority and
/// priority strictly decreases with index. The merge step relies on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub name: String,
    pub profiles: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(rename = "propertySources", default)]
    pub property_sources: Vec<PropertySource>,
}

impl ConfigResponse {
    /// Creates a new response with no property sources.
    pub fn new(name: impl Into<String>, profiles: Vec<String>) -> Self {
        Self {
            name: name.into(),
            profiles,
            label: None,
            version: None,
            state: None,
            property_sources: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Appends a property source. Sources added first have higher precedence.
    pub fn add_source(mut self, source: PropertySource) -> Self {
        self.property_sources.push(source);
        self
    }

    /// Returns true if there are no property sources.
    pub fn is_empty(&self) -> bool {
        self.property_sources.is_empty()
    }

    /// Returns the number of property sources.
    pub fn len(&self) -> usize {
        self.property_sources.len()
    }
}
