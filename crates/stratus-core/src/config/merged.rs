use crate::config::{ConfigMap, ConfigValue, PropertySource};
use crate::merge;
use crate::response::ConfigResponse;
use indexmap::IndexMap;

/// The merged, read-only view over a set of property sources.
///
/// Built once from a fully-received response; immutable afterwards. Holds
/// both derived views of the same data: the flat dotted-key map (merge
/// result, precedence already applied) and the nested tree rebuilt from it.
///
/// # Example
///
/// ```
/// use stratus_core::{ConfigResponse, MergedConfig, PropertySource};
/// use indexmap::IndexMap;
///
/// let mut source = IndexMap::new();
/// source.insert("server.port".to_string(), 8080.into());
///
/// let response = ConfigResponse::new("myapp", vec!["default".into()])
///     .add_source(PropertySource::new("myapp.yml", source));
///
/// let config = MergedConfig::from_response(response);
/// assert_eq!(config.get("server.port").unwrap().as_i64(), Some(8080));
/// assert!(config.has("server.port"));
/// ```
#[derive(Debug, Clone)]
pub struct MergedConfig {
    name: String,
    profiles: Vec<String>,
    label: Option<String>,
    version: Option<String>,
    state: Option<String>,
    sources: Vec<PropertySource>,
    flat: IndexMap<String, ConfigValue>,
    tree: ConfigMap,
}

impl MergedConfig {
    /// Builds the merged view from a (possibly aggregated) server response.
    pub fn from_response(response: ConfigResponse) -> Self {
        let flat = merge::flatten_sources(&response.property_sources);
        let tree = merge::unflatten(&flat);

        Self {
            name: response.name,
            profiles: response.profiles,
            label: response.label,
            version: response.version,
            state: response.state,
            sources: response.property_sources,
            flat,
            tree,
        }
    }

    /// Builds a merged view directly from an ordered property source list.
    ///
    /// Index 0 has the highest priority. Useful when the response metadata
    /// is not of interest.
    pub fn from_sources(name: impl Into<String>, sources: Vec<PropertySource>) -> Self {
        let flat = merge::flatten_sources(&sources);
        let tree = merge::unflatten(&flat);

        Self {
            name: name.into(),
            profiles: Vec::new(),
            label: None,
            version: None,
            state: None,
            sources,
            flat,
            tree,
        }
    }

    /// Looks up a value by dotted key.
    ///
    /// The flat map is consulted first (exact dotted-key match); on a miss
    /// the nested tree is walked segment by segment. A key present verbatim
    /// in the flat map therefore takes precedence over any differently
    /// shaped nested structure at the same path. Designed behavior.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        if let Some(value) = self.flat.get(key) {
            return Some(value);
        }
        self.tree.get(key)
    }

    /// Looks up a value by dotted key, falling back to `default`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a ConfigValue) -> &'a ConfigValue {
        self.get(key).unwrap_or(default)
    }

    /// Typed lookup: string value at `key`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// Typed lookup: integer value at `key`.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_i64)
    }

    /// Typed lookup: float value at `key` (accepts integers).
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ConfigValue::as_f64)
    }

    /// Typed lookup: boolean value at `key`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    /// Returns true iff [`get`](Self::get) would return a value for `key`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates the flat entries in their merge order (highest-priority
    /// definitions first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.flat.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns an independent copy of the flat view.
    pub fn to_flat_map(&self) -> IndexMap<String, ConfigValue> {
        self.flat.clone()
    }

    /// Returns an independent deep copy of the nested tree view.
    pub fn to_tree(&self) -> ConfigMap {
        self.tree.clone()
    }

    /// Returns the number of distinct flat keys.
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    /// Returns true if no source contributed any property.
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    // ============================================
    // Response metadata
    // ============================================

    /// The application name (comma-joined when aggregated).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The active profiles reported by the server.
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// The resolved label, if the server reported one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The configuration version (e.g., commit hash), if reported.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Opaque server state, if reported.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// The contributing property sources, highest priority first.
    pub fn property_sources(&self) -> &[PropertySource] {
        &self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, json: &str) -> PropertySource {
        let map: IndexMap<String, ConfigValue> = serde_json::from_str(json).unwrap();
        PropertySource::new(name, map)
    }

    fn sample() -> MergedConfig {
        MergedConfig::from_sources(
            "myapp",
            vec![
                source(
                    "dev",
                    r#"{"database.host": "dev-host", "database.port": 5432, "database.enabled": true}"#,
                ),
                source(
                    "defaults",
                    r#"{"database.host": "default-host", "app.name": "My Application"}"#,
                ),
            ],
        )
    }

    #[test]
    fn test_precedence_and_fallthrough() {
        let config = sample();

        assert_eq!(config.get_str("database.host"), Some("dev-host"));
        assert_eq!(config.get_str("app.name"), Some("My Application"));
        assert_eq!(config.get_i64("database.port"), Some(5432));
    }

    #[test]
    fn test_tree_view() {
        let config = sample();
        let tree = config.to_tree();

        let database = tree.get("database").unwrap().as_object().unwrap();
        assert_eq!(database.get("host").unwrap().as_str(), Some("dev-host"));
        assert_eq!(database.get("port").unwrap().as_i64(), Some(5432));
        assert_eq!(database.get("enabled").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_get_missing_and_default() {
        let config = sample();
        let fallback = ConfigValue::String("fallback".into());

        assert_eq!(config.get("missing.key"), None);
        assert_eq!(config.get_or("missing.key", &fallback), &fallback);
        assert_eq!(
            config.get_or("database.host", &fallback).as_str(),
            Some("dev-host")
        );
    }

    #[test]
    fn test_has_matches_get() {
        let config = sample();

        for key in ["database.host", "database", "app.name", "missing", "a.b.c"] {
            assert_eq!(config.has(key), config.get(key).is_some(), "key {}", key);
        }
    }

    #[test]
    fn test_flat_key_beats_nested_shape() {
        // "a.b" exists verbatim in the flat map AND "a.b.c" builds a
        // subtree at the same prefix; get("a.b") must return the flat leaf.
        let config = MergedConfig::from_sources(
            "app",
            vec![source("s", r#"{"a.b": "leaf", "a.b.c": 1}"#)],
        );

        assert_eq!(config.get_str("a.b"), Some("leaf"));
        // The tree view still resolves the deeper path
        assert_eq!(config.get_i64("a.b.c"), Some(1));
    }

    #[test]
    fn test_iter_and_copies_are_independent(){
        let config = sample();

        let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), config.len());
        assert!(keys.contains(&"database.host"));

        let mut flat = config.to_flat_map();
        flat.insert("injected".into(), ConfigValue::Integer(1));
        assert!(!config.has("injected"));

        let mut tree = config.to_tree();
        tree.insert("injected", 1);
        assert!(!config.has("injected"));
    }
}
