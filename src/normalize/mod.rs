//! Document normalization ahead of flattening.
//!
//! Normalization rewrites representations that differ structurally but not
//! semantically, so they stop showing up as diffs: named arrays become
//! name-keyed maps and the required-env annotation becomes a token set.
//! All entrypoints are value-returning; the input document is never mutated,
//! which lets the orchestrator reuse one loaded document across pairs.

mod named_array;
mod required_env;

pub use named_array::{normalize_named_array, normalize_named_field, NamedArrayMode};
pub use required_env::{normalize_required_env, REQUIRED_ENV_ANNOTATION};

use crate::error::Error;
use crate::template::Kind;
use crate::value::Value;

/// Returns a normalized copy of the document, ready for flattening.
///
/// Within the document's template anchor: each container's `env` collapses
/// to a name-keyed map, `volumeMounts` and the pod-level `volumes` become
/// name-keyed sub-maps, and the required-env annotation becomes a token set.
/// Every step is a no-op where the relevant field is absent. A `PodTemplate`
/// without a `template` key is a data error.
pub fn normalize_document(doc: &Value) -> Result<Value, Error> {
    let kind = Kind::of(doc);
    let mut normalized = doc.clone();

    let Some(anchor) = normalized.get_path_mut(kind.anchor_keys()) else {
        return match kind {
            Kind::PodTemplate => Err(Error::missing_structure(
                "template",
                "PodTemplate without a template key",
            )),
            // no template anchor means nothing pod-shaped to normalize
            _ => Ok(normalized),
        };
    };
    normalize_anchor(anchor)?;

    Ok(normalized)
}

fn normalize_anchor(anchor: &mut Value) -> Result<(), Error> {
    if let Some(containers) = anchor
        .get_path_mut(&["spec", "containers"])
        .and_then(Value::as_list_mut)
    {
        for (index, container) in containers.iter_mut().enumerate() {
            let Some(container) = container.as_map_mut() else {
                continue;
            };
            let path = format!("spec.containers.{}", index);
            normalize_named_field(container, "env", NamedArrayMode::Collapse, &path)?;
            normalize_named_field(container, "volumeMounts", NamedArrayMode::Preserve, &path)?;
        }
    }

    if let Some(spec) = anchor.get_path_mut(&["spec"]).and_then(Value::as_map_mut) {
        normalize_named_field(spec, "volumes", NamedArrayMode::Preserve, "spec")?;
    }

    normalize_required_env(anchor);
    Ok(())
}
