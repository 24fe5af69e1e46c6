use crate::config::value::ConfigValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One named origin of configuration properties, as served by the server.
///
/// A property source usually corresponds to a single file on the server
/// side (e.g., `git:main:myapp-prod.yml`). Its `source` map holds the
/// already-flattened dotted keys the server emits (`"server.port": 8080`).
/// Sources are immutable once received; precedence between them is decided
/// by their position in the response, never by anything stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySource {
    /// The name of the property source (e.g., "myapp-prod.yml").
    pub name: String,

    /// The flattened properties contributed by this source.
    pub source: IndexMap<String, ConfigValue>,
}

impl PropertySource {
    /// Creates a new PropertySource.
    pub fn new(name: impl Into<String>, source: IndexMap<String, ConfigValue>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Returns true if this source contributes no properties.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Returns the number of properties in this source.
    pub fn len(&self) -> usize {
        self.source.len()
    }
}
