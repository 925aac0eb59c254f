//! Deep merge of YAML configuration layers.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences and scalars in the overlay replace the base
//! - `null` in the overlay deletes the key from the base

use serde_yaml::Value;

/// Deep merge `overlay` onto `base`; the overlay wins at every conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                    continue;
                }
                let merged = match base_map.get(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value.clone(),
                };
                result.insert(key.clone(), merged);
            }

            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_scalar_wins() {
        let result = deep_merge(&yaml("url: http://a\nconcurrency: 2"), &yaml("url: http://b"));
        assert_eq!(result["url"], "http://b");
        assert_eq!(result["concurrency"], 2);
    }

    #[test]
    fn headers_merge_recursively() {
        let base = yaml(
            r#"
headers:
  X-Api-Key: base
  X-Trace: "1"
"#,
        );
        let overlay = yaml(
            r#"
headers:
  X-Api-Key: local
"#,
        );

        let result = deep_merge(&base, &overlay);
        assert_eq!(result["headers"]["X-Api-Key"], "local");
        assert_eq!(result["headers"]["X-Trace"], "1");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml("headers:\n  X-Trace: \"1\"\n  X-Api-Key: k\n");
        let overlay = yaml("headers:\n  X-Trace: null\n");

        let result = deep_merge(&base, &overlay);
        assert!(result["headers"].get("X-Trace").is_none());
        assert_eq!(result["headers"]["X-Api-Key"], "k");
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let result = merge_configs(&[
            yaml("url: http://first\ntimeout_secs: 5"),
            yaml("url: http://second"),
            yaml("concurrency: 3"),
        ]);
        assert_eq!(result["url"], "http://second");
        assert_eq!(result["timeout_secs"], 5);
        assert_eq!(result["concurrency"], 3);
    }

    #[test]
    fn merge_of_nothing_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}
