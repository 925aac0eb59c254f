//! Field addressing within a JSON document.

use serde::Serialize;
use std::fmt;

/// Ancestor chain of object keys, root-relative.
///
/// The path never includes the name of the field it locates; an empty path
/// means the field lives directly on the root object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// The root path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path extended by `key`.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    /// Keys from the root down.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// A single field to omit: the ancestor path plus the field's own name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldTarget {
    /// Ancestor object keys.
    pub path: FieldPath,
    /// Name of the field within the object at `path`.
    pub name: String,
}

impl FieldTarget {
    /// Create a target for `name` inside the object at `path`.
    pub fn new(path: FieldPath, name: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
        }
    }

    /// Human-readable label, e.g. `address/city` or `name`.
    pub fn label(&self) -> String {
        if self.path.is_root() {
            self.name.clone()
        } else {
            format!("{}/{}", self.path, self.name)
        }
    }
}

impl fmt::Display for FieldTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_empty() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert!(path.segments().is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn child_extends_without_mutating_parent() {
        let parent = FieldPath::root().child("address");
        let child = parent.child("geo");
        assert_eq!(parent.segments(), ["address"]);
        assert_eq!(child.segments(), ["address", "geo"]);
        assert_eq!(child.to_string(), "address/geo");
    }

    #[test]
    fn path_from_iterator() {
        let path: FieldPath = ["a", "b"].into_iter().collect();
        assert_eq!(path.to_string(), "a/b");
    }

    #[test]
    fn top_level_label_is_field_name() {
        let target = FieldTarget::new(FieldPath::root(), "name");
        assert_eq!(target.label(), "name");
    }

    #[test]
    fn nested_label_joins_with_slash() {
        let target = FieldTarget::new(FieldPath::root().child("address"), "city");
        assert_eq!(target.label(), "address/city");
        assert_eq!(target.to_string(), "address/city");
    }

    #[test]
    fn target_serializes_path_as_array() {
        let target = FieldTarget::new(FieldPath::root().child("address"), "zip");
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["path"], serde_json::json!(["address"]));
        assert_eq!(json["name"], "zip");
    }
}
