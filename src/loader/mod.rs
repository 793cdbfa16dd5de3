//! Document loading from disk.

use crate::error::Error;
use crate::value::Value;
use serde::Deserialize;
use std::fs;

/// Loads the first document from a YAML or JSON source.
///
/// YAML sources may carry a multi-document stream; only the first document
/// is consumed. The format is chosen by file extension; anything other than
/// `.yml`, `.yaml`, or `.json` is unsupported.
pub fn load_first(source_id: &str) -> Result<Value, Error> {
    if source_id.ends_with(".yml") || source_id.ends_with(".yaml") {
        let content = read(source_id)?;
        // bound to a local so the stream drops before `content` does
        let first = serde_yaml::Deserializer::from_str(&content).next();
        match first {
            Some(document) => {
                Value::deserialize(document).map_err(|err| Error::parse(source_id, err))
            }
            None => Ok(Value::Null),
        }
    } else if source_id.ends_with(".json") {
        let content = read(source_id)?;
        serde_json::from_str(&content).map_err(|err| Error::parse(source_id, err))
    } else {
        Err(Error::UnsupportedFormat {
            source_id: source_id.to_string(),
        })
    }
}

fn read(source_id: &str) -> Result<String, Error> {
    fs::read_to_string(source_id).map_err(|err| Error::Io {
        source_id: source_id.to_string(),
        err,
    })
}
