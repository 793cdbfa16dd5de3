//! Leaf-path set comparison.

use crate::flatten::FlatMap;
use std::collections::BTreeSet;

/// Returns the sorted paths whose values differ between the two mappings.
///
/// A path present on only one side always differs; absence is distinct from
/// any present value, including null.
pub fn different_keys(a: &FlatMap, b: &FlatMap) -> Vec<String> {
    a.keys()
        .chain(b.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|key| a.get(*key) != b.get(*key))
        .cloned()
        .collect()
}

/// Returns the sorted paths present in exactly one of the two collections.
pub fn symmetric_difference<'a>(
    a: impl IntoIterator<Item = &'a String>,
    b: impl IntoIterator<Item = &'a String>,
) -> Vec<String> {
    let a: BTreeSet<&String> = a.into_iter().collect();
    let b: BTreeSet<&String> = b.into_iter().collect();
    a.symmetric_difference(&b).map(|s| (*s).clone()).collect()
}
