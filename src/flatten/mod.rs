//! Flattening of nested documents into leaf-path mappings.

use crate::value::Value;
use std::collections::BTreeMap;

/// FlatMap maps a dot-delimited leaf path to its scalar value.
///
/// List indices appear as decimal segments, e.g. `spec.containers.0.image`.
/// A top-level scalar records under the empty path.
pub type FlatMap = BTreeMap<String, Value>;

/// Flattens a document tree into a mapping from leaf path to scalar value.
///
/// Maps recurse per key and lists per index; anything else (including null)
/// is a leaf. Empty maps and lists contribute no entries.
pub fn flatten(value: &Value) -> FlatMap {
    let mut out = FlatMap::new();
    flatten_into(value, None, &mut out);
    out
}

fn flatten_into(value: &Value, base: Option<&str>, out: &mut FlatMap) {
    match value {
        Value::Map(map) => {
            for (key, child) in map.iter() {
                flatten_into(child, Some(&join(base, key)), out);
            }
        }
        Value::List(list) => {
            for (index, child) in list.iter().enumerate() {
                flatten_into(child, Some(&join(base, &index.to_string())), out);
            }
        }
        leaf => {
            out.insert(base.unwrap_or_default().to_string(), leaf.clone());
        }
    }
}

fn join(base: Option<&str>, segment: &str) -> String {
    match base {
        Some(base) => format!("{}.{}", base, segment),
        None => segment.to_string(),
    }
}
