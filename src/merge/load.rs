//! Loading merge results from JSON, YAML, or files on disk

use super::types::MergeResult;
use crate::error::{PactumError, PactumResult};
use serde_json::Value;
use std::path::Path;

impl MergeResult {
    /// Build from an already-decoded JSON value.
    ///
    /// Anything other than an object is rejected; that is the one structural
    /// failure the extraction core cannot fold into "no data".
    pub fn from_value(value: Value) -> PactumResult<Self> {
        if value.is_object() {
            return Ok(serde_json::from_value(value)?);
        }

        let kind = match value {
            Value::Object(_) => "an object",
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
        };
        Err(PactumError::NotAnObject(kind))
    }

    pub fn from_json_str(json: &str) -> PactumResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_yaml_str(yaml: &str) -> PactumResult<Self> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Load from a `.json`, `.yaml`, or `.yml` file
    pub fn from_path(path: &Path) -> PactumResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PactumError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            other => Err(PactumError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
