//! Response projection
//!
//! Applies the configured `resolve` path to a raw response before type
//! inference. Dot-notation paths (with optional array indices) walk the
//! tree directly; paths containing wildcards go through JSONPath.

use crate::error::{Error, Result};
use serde_json::Value;

/// Apply a projection path to a response value.
///
/// `None` is the identity projection. A path that matches nothing is a
/// projection error, so the resource fails loudly instead of inferring
/// declarations from the wrong value.
pub fn project(response: &Value, path: Option<&str>) -> Result<Value> {
    let Some(path) = path else {
        return Ok(response.clone());
    };

    if path.contains('*') {
        return project_with_jsonpath(response, path);
    }

    walk_simple_path(response, path)
        .ok_or_else(|| Error::projection(path, "no value at that path"))
}

/// Walk a dot-notation path, optionally with array indexing like
/// `items[0]` or `items[-1]`
fn walk_simple_path(value: &Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        if let Some(bracket) = part.find('[') {
            if !part.ends_with(']') {
                return None;
            }
            let name = &part[..bracket];
            let index_str = part.get(bracket + 1..part.len() - 1)?;

            if !name.is_empty() {
                current = current.get(name)?;
            }

            let index: i64 = index_str.parse().ok()?;
            let Value::Array(arr) = current else {
                return None;
            };
            let idx = if index < 0 {
                usize::try_from(arr.len() as i64 + index).ok()?
            } else {
                usize::try_from(index).ok()?
            };
            current = arr.get(idx)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current.clone())
}

/// Extract with jsonpath-rust for wildcard patterns
fn project_with_jsonpath(value: &Value, path: &str) -> Result<Value> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path).map_err(|e| Error::JsonPath {
        message: format!("Invalid JSONPath: {e}"),
    })?;

    match jp.find(value) {
        Value::Null => Err(Error::projection(path, "no value at that path")),
        Value::Array(items) if items.is_empty() => {
            Err(Error::projection(path, "no value at that path"))
        }
        found => Ok(found),
    }
}
