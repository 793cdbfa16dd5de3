//! Name-keyed rewriting of named-array fields.

use crate::error::Error;
use crate::value::{Map, Value};

/// NamedArrayMode selects how the fields besides `name` are carried into
/// the resulting map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedArrayMode {
    /// The single remaining field's value becomes the entry's value directly.
    /// Used for container env vars, where each entry is `name` plus exactly
    /// one of `value`/`valueFrom`.
    Collapse,
    /// All remaining fields are kept as a sub-map. Used for volumes and
    /// volume mounts.
    Preserve,
}

/// Rewrites `container[field]` from a sequence of `name`-discriminated maps
/// into a map keyed by name, so entry order stops registering as a diff.
///
/// No-op when the field is absent or not a sequence (it may already have
/// been normalized). Entries without a string `name`, duplicate names, and
/// collapse-mode entries without exactly one non-name field are rejected.
pub fn normalize_named_field(
    container: &mut Map,
    field: &str,
    mode: NamedArrayMode,
    parent_path: &str,
) -> Result<(), Error> {
    let field_path = format!("{}.{}", parent_path, field);
    let entries = match container.get(field).and_then(Value::as_list) {
        Some(entries) => entries.clone(),
        None => return Ok(()),
    };

    let normalized = normalize_named_array(&entries, mode, &field_path)?;
    container.set(field.to_string(), Value::Map(normalized));
    Ok(())
}

/// Converts a sequence of `name`-discriminated maps into a name-keyed map.
pub fn normalize_named_array(
    entries: &[Value],
    mode: NamedArrayMode,
    path: &str,
) -> Result<Map, Error> {
    let mut out = Map::new();

    for (index, entry) in entries.iter().enumerate() {
        let entry_path = format!("{}.{}", path, index);
        let entry = entry
            .as_map()
            .ok_or_else(|| Error::malformed_named_array(&entry_path, "entry is not a map"))?;
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::malformed_named_array(&entry_path, "entry has no string name"))?;
        if out.has(name) {
            return Err(Error::malformed_named_array(
                &entry_path,
                format!("duplicate name {:?}", name),
            ));
        }

        let rest: Vec<(&String, &Value)> =
            entry.iter().filter(|(key, _)| key.as_str() != "name").collect();

        let value = match mode {
            NamedArrayMode::Collapse => match rest.as_slice() {
                [(_, value)] => (*value).clone(),
                [] => {
                    return Err(Error::malformed_named_array(
                        &entry_path,
                        format!("entry {:?} has no field besides name", name),
                    ))
                }
                _ => {
                    return Err(Error::malformed_named_array(
                        &entry_path,
                        format!(
                            "entry {:?} has {} fields besides name, expected exactly one",
                            name,
                            rest.len()
                        ),
                    ))
                }
            },
            NamedArrayMode::Preserve => {
                let mut sub = Map::new();
                for (key, value) in rest {
                    sub.set(key.clone(), value.clone());
                }
                Value::Map(sub)
            }
        };

        out.set(name.to_string(), value);
    }

    Ok(out)
}
