//! Probe variant construction.

use serde_json::{Map, Value};

use super::path::{FieldPath, FieldTarget};

/// Build a deep copy of `baseline` with exactly `target` removed.
///
/// The baseline is never modified, and every call starts from a fresh copy,
/// so no two variants share structure. Remaining keys keep their order. If
/// the path does not lead to an object the copy is returned unchanged.
pub fn build_variant(baseline: &Value, target: &FieldTarget) -> Value {
    let mut body = baseline.clone();

    if let Some(object) = object_at(&mut body, &target.path) {
        object.shift_remove(target.name.as_str());
    }

    body
}

fn object_at<'a>(root: &'a mut Value, path: &FieldPath) -> Option<&'a mut Map<String, Value>> {
    path.segments()
        .iter()
        .try_fold(root, |node, key| node.get_mut(key.as_str()))?
        .as_object_mut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario() -> Value {
        json!({"name": "x", "address": {"city": "y", "zip": null}})
    }

    #[test]
    fn removes_top_level_field() {
        let variant = build_variant(&scenario(), &FieldTarget::new(FieldPath::root(), "name"));
        assert_eq!(variant, json!({"address": {"city": "y", "zip": null}}));
    }

    #[test]
    fn removes_nested_field_but_keeps_parent() {
        let target = FieldTarget::new(FieldPath::root().child("address"), "city");
        let variant = build_variant(&scenario(), &target);
        assert_eq!(variant, json!({"name": "x", "address": {"zip": null}}));
    }

    #[test]
    fn null_valued_field_is_removable() {
        let target = FieldTarget::new(FieldPath::root().child("address"), "zip");
        let variant = build_variant(&scenario(), &target);
        assert!(variant["address"].as_object().unwrap().get("zip").is_none());
        assert_eq!(variant["address"]["city"], "y");
    }

    #[test]
    fn removing_whole_object_field() {
        let variant = build_variant(&scenario(), &FieldTarget::new(FieldPath::root(), "address"));
        assert_eq!(variant, json!({"name": "x"}));
    }

    #[test]
    fn baseline_is_untouched() {
        let baseline = scenario();
        let _ = build_variant(&baseline, &FieldTarget::new(FieldPath::root(), "name"));
        assert_eq!(baseline, scenario());
    }

    #[test]
    fn sibling_variants_are_independent() {
        let baseline = scenario();
        let path = FieldPath::root().child("address");
        let a = build_variant(&baseline, &FieldTarget::new(path.clone(), "city"));
        let b = build_variant(&baseline, &FieldTarget::new(path, "zip"));

        assert!(a["address"].get("city").is_none());
        assert_eq!(b["address"]["city"], "y");
        assert!(b["address"].get("zip").is_none());
        assert!(a["address"].as_object().unwrap().contains_key("zip"));
    }

    #[test]
    fn remaining_keys_keep_order() {
        let baseline = json!({"a": 1, "b": 2, "c": 3, "d": 4});
        let variant = build_variant(&baseline, &FieldTarget::new(FieldPath::root(), "b"));
        let keys: Vec<&String> = variant.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "c", "d"]);
    }

    #[test]
    fn unknown_path_returns_unchanged_copy() {
        let target = FieldTarget::new(FieldPath::root().child("missing"), "x");
        assert_eq!(build_variant(&scenario(), &target), scenario());
    }
}
