//! Comparison orchestration.

use crate::diff::engine::{different_keys, symmetric_difference};
use crate::error::Error;
use crate::flatten::flatten;
use crate::loader::load_first;
use crate::normalize::normalize_document;
use crate::template::{align_pod_frame, needs_alignment, Kind};
use crate::value::Value;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Options controlling one comparison run. `Default` turns everything off.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Paths matching this pattern are removed from every pair's result.
    pub ignore: Option<Regex>,
    /// Re-root path frames when bare pods or pod templates are compared
    /// against wrapper kinds.
    pub align_pod_frames: bool,
    /// Acknowledged differences per pair label, reconciled against the
    /// computed result via symmetric difference.
    pub expected: BTreeMap<String, BTreeSet<String>>,
}

/// DiffReport maps a pair label (`"<base>-<other>"`) to its sorted
/// differing paths.
pub type DiffReport = BTreeMap<String, Vec<String>>;

/// Compares the first source against every subsequent one.
///
/// Each source is loaded (first document only), normalized, and flattened;
/// flattenings are derived fresh per pair so frame alignment never leaks
/// between pairs. A pair with a declared expectation is reduced to the
/// symmetric difference against it and dropped when that is empty; a pair
/// without one keeps its computed result, even when empty.
pub fn compare<S: AsRef<str>>(sources: &[S], options: &CompareOptions) -> Result<DiffReport, Error> {
    if sources.len() < 2 {
        return Err(Error::InvalidInput {
            count: sources.len(),
        });
    }

    let base_id = sources[0].as_ref();
    let base_doc = load_normalized(base_id)?;
    let base_kind = Kind::of(&base_doc);

    let mut report = DiffReport::new();
    for other in &sources[1..] {
        let other_id = other.as_ref();
        let other_doc = load_normalized(other_id)?;
        let other_kind = Kind::of(&other_doc);

        let mut base_flat = flatten(&base_doc);
        let mut other_flat = flatten(&other_doc);
        if options.align_pod_frames && needs_alignment(base_kind, other_kind) {
            base_flat = align_pod_frame(base_flat, base_kind);
            other_flat = align_pod_frame(other_flat, other_kind);
        }

        let mut paths = different_keys(&base_flat, &other_flat);
        if let Some(pattern) = &options.ignore {
            paths.retain(|path| !pattern.is_match(path));
        }
        report.insert(format!("{}-{}", base_id, other_id), paths);
    }

    // Reconciliation walks the declared expectations, not the computed
    // pairs: an expectation for a label no pair produced still surfaces,
    // since the caller believes something differs that does not.
    for (label, expected) in &options.expected {
        let computed = report.remove(label).unwrap_or_default();
        let remaining = symmetric_difference(&computed, expected);
        if !remaining.is_empty() {
            report.insert(label.clone(), remaining);
        }
    }

    Ok(report)
}

fn load_normalized(source_id: &str) -> Result<Value, Error> {
    let doc = load_first(source_id)?;
    normalize_document(&doc)
}
