//! Field-by-field merging of settings tiers.

use serde_json::Value;

/// Merge `overlay` into `base` in place.
///
/// Objects merge key by key. A `null` in the overlay leaves the base value
/// alone. Everything else, arrays included, is replaced.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Merge tiers lowest-first; later tiers win.
pub fn merge_tiers(tiers: impl IntoIterator<Item = Value>) -> Value {
    let mut merged = Value::Null;
    for tier in tiers {
        merge_into(&mut merged, tier);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overlay_keeps_unset_fields() {
        let mut base = json!({"paths": {"config_path": ".", "device_dir": "deviceconfig"}});
        merge_into(&mut base, json!({"paths": {"config_path": "/srv/tal"}}));
        assert_eq!(
            base,
            json!({"paths": {"config_path": "/srv/tal", "device_dir": "deviceconfig"}})
        );
    }

    #[test]
    fn test_null_does_not_clear() {
        let mut base = json!({"paths": {"strategies_dir": "/opt/strategies"}});
        merge_into(&mut base, json!({"paths": {"strategies_dir": null}}));
        assert_eq!(base, json!({"paths": {"strategies_dir": "/opt/strategies"}}));
    }

    #[test]
    fn test_scalars_and_arrays_replace() {
        let mut base = json!({"format": "json", "tags": ["a", "b"]});
        merge_into(&mut base, json!({"format": "markdown", "tags": ["c"]}));
        assert_eq!(base, json!({"format": "markdown", "tags": ["c"]}));
    }

    #[test]
    fn test_merge_tiers_in_order() {
        let merged = merge_tiers(vec![
            json!({"format": "json", "paths": {"device_dir": "deviceconfig"}}),
            json!({"paths": {"device_dir": "devices"}}),
            json!({"format": "markdown"}),
        ]);
        assert_eq!(
            merged,
            json!({"format": "markdown", "paths": {"device_dir": "devices"}})
        );
    }
}
