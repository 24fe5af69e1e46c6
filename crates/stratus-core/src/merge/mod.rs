//! Property source merging and flat/nested view construction.
//!
//! A config server response carries an ordered list of property sources,
//! index 0 holding the highest priority. The functions here collapse that
//! list into a single flat dotted-key map honoring precedence, and rebuild
//! the equivalent nested tree from it.

use crate::config::{ConfigMap, ConfigValue, PropertySource};
use indexmap::IndexMap;
use tracing::debug;

pub mod aggregate;
pub use aggregate::aggregate_responses;

/// Merges an ordered property source list into one flat dotted-key map.
///
/// # Rules
///
/// 1. Sources are visited from index 0 (highest priority) onwards.
/// 2. A key is assigned the value from the first source that defines it;
///    later (lower priority) definitions of the same key are skipped.
/// 3. Each source's internal key order is preserved, so the resulting map
///    iterates highest-priority definitions first.
pub fn flatten_sources(sources: &[PropertySource]) -> IndexMap<String, ConfigValue> {
    let mut flat = IndexMap::new();

    for source in sources {
        for (key, value) in &source.source {
            if !flat.contains_key(key) {
                flat.insert(key.clone(), value.clone());
            }
        }
    }

    flat
}

/// Rebuilds the nested tree from a flat dotted-key map.
///
/// Every key is split on `.` and its path is materialized segment by
/// segment. If an intermediate segment holds anything other than an object
/// (a scalar, an array, or null), that value is discarded and replaced by
/// a fresh object so the deeper path can be assigned. Deeper paths winning
/// over shallower scalar leaves sharing a prefix is the documented
/// collision policy; the discard is logged at debug level.
///
/// The result is the same for any processing order of the flat keys: each
/// key's full path ends up materialized with its leaf value, regardless of
/// map iteration order.
pub fn unflatten(flat: &IndexMap<String, ConfigValue>) -> ConfigMap {
    let mut root: IndexMap<String, ConfigValue> = IndexMap::new();

    for (key, value) in flat {
        insert_path(&mut root, key, value.clone());
    }

    ConfigMap::from_inner(root)
}

fn insert_path(root: &mut IndexMap<String, ConfigValue>, path: &str, value: ConfigValue) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let Some(leaf) = segments.pop() else {
        return;
    };

    let mut node = root;
    for segment in segments {
        let slot = node
            .entry(segment.to_string())
            .or_insert_with(|| ConfigValue::Object(IndexMap::new()));

        if slot.as_object().is_none() {
            debug!(
                "replacing non-object value at '{}' while materializing '{}'",
                segment, path
            );
            *slot = ConfigValue::Object(IndexMap::new());
        }

        node = match slot {
            ConfigValue::Object(map) => map,
            _ => return,
        };
    }

    node.insert(leaf.to_string(), value);
}
