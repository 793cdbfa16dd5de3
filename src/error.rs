//! Error taxonomy for manifest comparison.

use thiserror::Error;

/// Error represents any failure while loading, normalizing, or comparing
/// manifests. All variants are fatal for the whole comparison; nothing is
/// retried or swallowed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("need at least two sources to compare, got {count}")]
    InvalidInput { count: usize },

    #[error("unsupported document format in {source_id}")]
    UnsupportedFormat { source_id: String },

    #[error("failed to read {source_id}: {err}")]
    Io {
        source_id: String,
        #[source]
        err: std::io::Error,
    },

    #[error("failed to parse {source_id}: {message}")]
    Parse { source_id: String, message: String },

    #[error("{path}: missing required structure: {what}")]
    MissingStructure { path: String, what: String },

    #[error("{path}: malformed named-array entry: {message}")]
    MalformedNamedArray { path: String, message: String },

    #[error("invalid ignore pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl Error {
    /// Creates a missing structure error.
    pub fn missing_structure(path: impl Into<String>, what: impl Into<String>) -> Self {
        Error::MissingStructure {
            path: path.into(),
            what: what.into(),
        }
    }

    /// Creates a malformed named-array error.
    pub fn malformed_named_array(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedNamedArray {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a parse error for the given source. The message keeps the
    /// underlying parser's location information where it provides any.
    pub fn parse(source_id: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Error::Parse {
            source_id: source_id.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_source() {
        let err = Error::UnsupportedFormat {
            source_id: "a.json5".into(),
        };
        assert_eq!(format!("{}", err), "unsupported document format in a.json5");
    }

    #[test]
    fn test_missing_structure_display() {
        let err = Error::missing_structure("template", "PodTemplate has no template key");
        assert!(format!("{}", err).contains("template"));
        assert!(format!("{}", err).contains("missing required structure"));
    }
}
