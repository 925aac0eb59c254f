//! Probe ordering.
//!
//! Fields are visited depth-first. An object-valued field is descended into
//! completely before the field itself is listed, so nested fields come before
//! their parent and siblings keep their declared order:
//!
//! ```text
//! {"a": {"b": 1, "c": 2}, "d": 3}   =>   a/b, a/c, a, d
//! ```
//!
//! Arrays and scalars are leaves; their contents are never listed.

use serde_json::{Map, Value};

use crate::error::{ProbeError, Result};

use super::path::{FieldPath, FieldTarget};

/// List every probe target of `document` in probe order.
///
/// # Errors
///
/// Returns `InvalidDocument` if the root is not an object.
pub fn plan_targets(document: &Value) -> Result<Vec<FieldTarget>> {
    let root = document
        .as_object()
        .ok_or_else(|| ProbeError::InvalidDocument {
            message: format!("root must be a JSON object, found {}", kind_name(document)),
        })?;

    let mut targets = Vec::new();
    collect(root, &FieldPath::root(), &mut targets);
    Ok(targets)
}

fn collect(object: &Map<String, Value>, path: &FieldPath, out: &mut Vec<FieldTarget>) {
    for (name, value) in object {
        if let Value::Object(nested) = value {
            collect(nested, &path.child(name), out);
        }
        out.push(FieldTarget::new(path.clone(), name.as_str()));
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
