//! Pod template location and path-frame alignment.
//!
//! A bare `Pod` carries its pod fields at the document root, a `PodTemplate`
//! under `template`, and every controller kind (Deployment, StatefulSet, ...)
//! under `spec.template`. The two components here put heterogeneous kinds
//! into a single reference frame: [`locate_template`] picks the substructure
//! that counts as "the pod template", and [`align_pod_frame`] re-roots an
//! already-flattened path mapping onto the bare pod's path space.

use crate::error::Error;
use crate::flatten::FlatMap;
use crate::value::{Map, Value};
use std::borrow::Cow;

/// Kind is the resource-kind discriminator the locator and the frame
/// alignment both dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Pod,
    PodTemplate,
    /// Any other declared kind, or no kind at all. Assumed to wrap its pod
    /// template under `spec.template` like the built-in controllers do.
    Other,
}

impl Kind {
    /// Reads the document's declared `kind` field. Absent or non-string
    /// kinds classify as [`Kind::Other`].
    pub fn of(doc: &Value) -> Kind {
        match doc.get_path(&["kind"]).and_then(Value::as_str) {
            Some("Pod") => Kind::Pod,
            Some("PodTemplate") => Kind::PodTemplate,
            _ => Kind::Other,
        }
    }

    /// Key chain from the document root to its template anchor.
    pub fn anchor_keys(self) -> &'static [&'static str] {
        match self {
            Kind::Pod => &[],
            Kind::PodTemplate => &["template"],
            Kind::Other => &["spec", "template"],
        }
    }
}

/// Returns the substructure that serves as the document's pod template.
///
/// A `Pod` is its own anchor. A `PodTemplate` must carry a `template` key;
/// its absence is a data error. Everything else anchors at `spec.template`,
/// defaulting to an empty map when either level is missing.
pub fn locate_template(doc: &Value) -> Result<Cow<'_, Value>, Error> {
    match Kind::of(doc) {
        Kind::Pod => Ok(Cow::Borrowed(doc)),
        Kind::PodTemplate => doc
            .get_path(&["template"])
            .map(Cow::Borrowed)
            .ok_or_else(|| Error::missing_structure("template", "PodTemplate without a template key")),
        Kind::Other => Ok(doc
            .get_path(&["spec", "template"])
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(Value::Map(Map::new())))),
    }
}

/// Whether a comparison pair needs its path frames re-rooted before diffing.
///
/// Alignment only applies when the kinds differ and at least one side is a
/// bare pod or a reusable pod template; two documents of the same kind
/// already share a path space.
pub fn needs_alignment(a: Kind, b: Kind) -> bool {
    a != b && (is_pod_like(a) || is_pod_like(b))
}

fn is_pod_like(kind: Kind) -> bool {
    matches!(kind, Kind::Pod | Kind::PodTemplate)
}

/// Re-roots a flattened mapping onto the bare pod's path space.
///
/// The bare pod is the reference frame and passes through untouched. For
/// wrapper kinds, only paths under the template anchor survive, with the
/// anchor prefix stripped.
pub fn align_pod_frame(flat: FlatMap, kind: Kind) -> FlatMap {
    let prefix = match kind {
        Kind::Pod => return flat,
        Kind::PodTemplate => "template.",
        Kind::Other => "spec.template.",
    };

    flat.into_iter()
        .filter_map(|(path, value)| {
            path.strip_prefix(prefix)
                .map(|stripped| (stripped.to_string(), value))
        })
        .collect()
}
