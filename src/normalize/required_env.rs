//! Required-env annotation normalization.

use crate::value::{Map, Value};

/// Annotation listing the environment variables a deploy must provide.
pub const REQUIRED_ENV_ANNOTATION: &str = "samson/required_env";

/// Rewrites the required-env annotation under the template anchor's
/// `metadata.annotations` from a delimiter-separated string into a map from
/// token to `true`, so token order, delimiter runs, and surrounding
/// whitespace stop registering as diffs. A string with no tokens at all
/// becomes an empty map, which contributes no leaves and so compares equal
/// to an absent annotation. Absent or non-string values are left untouched.
pub fn normalize_required_env(anchor: &mut Value) {
    let Some(annotations) = anchor
        .get_path_mut(&["metadata", "annotations"])
        .and_then(Value::as_map_mut)
    else {
        return;
    };
    let Some(raw) = annotations.get(REQUIRED_ENV_ANNOTATION).and_then(Value::as_str) else {
        return;
    };

    let mut tokens = Map::new();
    for token in raw.trim().split(|c: char| c.is_whitespace() || c == ',') {
        if !token.is_empty() {
            tokens.set(token.to_string(), Value::Bool(true));
        }
    }

    annotations.set(REQUIRED_ENV_ANNOTATION.to_string(), Value::Map(tokens));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_yaml;
    use pretty_assertions::assert_eq;

    fn anchor_with(raw: &str) -> Value {
        let mut anchor = from_yaml("metadata:\n  annotations: {}\n").unwrap();
        anchor
            .get_path_mut(&["metadata", "annotations"])
            .unwrap()
            .as_map_mut()
            .unwrap()
            .set(REQUIRED_ENV_ANNOTATION.to_string(), Value::String(raw.into()));
        anchor
    }

    fn annotation(anchor: &Value) -> &Value {
        anchor
            .get_path(&["metadata", "annotations", REQUIRED_ENV_ANNOTATION])
            .unwrap()
    }

    #[test]
    fn test_tokenizes_mixed_delimiters() {
        let mut anchor = anchor_with("  a\nb,c d  ");
        normalize_required_env(&mut anchor);

        let map = annotation(&anchor).as_map().unwrap();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
        assert!(map.iter().all(|(_, v)| v == &Value::Bool(true)));
    }

    #[test]
    fn test_delimiter_runs_produce_no_empty_tokens() {
        let mut anchor = anchor_with("a,,b");
        normalize_required_env(&mut anchor);

        let map = annotation(&anchor).as_map().unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.has("a") && map.has("b"));
    }

    #[test]
    fn test_tokenless_annotation_becomes_empty_map() {
        for raw in ["", "   ", " , ,"] {
            let mut anchor = anchor_with(raw);
            normalize_required_env(&mut anchor);
            assert_eq!(annotation(&anchor), &Value::Map(Map::new()), "raw {:?}", raw);
        }
    }

    #[test]
    fn test_whitespace_only_annotations_compare_equal() {
        use crate::diff::different_keys;
        use crate::flatten::flatten;

        let mut a = anchor_with("   ");
        let mut b = anchor_with("\t");
        normalize_required_env(&mut a);
        normalize_required_env(&mut b);
        assert_eq!(different_keys(&flatten(&a), &flatten(&b)), Vec::<String>::new());
    }

    #[test]
    fn test_absent_annotation_is_untouched() {
        let mut anchor = from_yaml("metadata:\n  annotations:\n    other: x\n").unwrap();
        let before = anchor.clone();
        normalize_required_env(&mut anchor);
        assert_eq!(anchor, before);
    }

    #[test]
    fn test_missing_metadata_is_untouched() {
        let mut anchor = from_yaml("spec: {}\n").unwrap();
        let before = anchor.clone();
        normalize_required_env(&mut anchor);
        assert_eq!(anchor, before);
    }
}
