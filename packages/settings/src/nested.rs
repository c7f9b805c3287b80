// ABOUTME: Dot-notation key access into settings documents
// ABOUTME: Reads follow existing objects; writes create intermediate objects as needed

use serde_json::{Map, Value};

use crate::error::SettingsError;

/// Split `a.b.c` into segments, rejecting empty keys and empty segments
pub fn parse_key(key: &str) -> Result<Vec<&str>, SettingsError> {
    let segments: Vec<&str> = key.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(SettingsError::InvalidKey(key.to_string()));
    }
    Ok(segments)
}

/// Get a nested value using dot notation (e.g. `model.name`)
pub fn get_nested<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    parse_key(key)
        .ok()?
        .into_iter()
        .try_fold(json, |current, segment| current.get(segment))
}

/// Set a nested value using dot notation. Non-object values on the way are replaced.
pub fn set_nested(json: &mut Value, key: &str, value: Value) -> Result<(), SettingsError> {
    let segments = parse_key(key)?;
    let Some((last, parents)) = segments.split_last() else {
        return Err(SettingsError::InvalidKey(key.to_string()));
    };

    let mut current = json;
    for segment in parents {
        current = as_object(current)
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    as_object(current).insert(last.to_string(), value);
    Ok(())
}

fn as_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was replaced with an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_get_nested() {
        let doc = json!({ "model": { "name": "gemini-2.5-pro" }, "general": { "previewFeatures": true } });
        assert_eq!(get_nested(&doc, "model.name"), Some(&json!("gemini-2.5-pro")));
        assert_eq!(get_nested(&doc, "general.previewFeatures"), Some(&json!(true)));
        assert_eq!(get_nested(&doc, "model.missing"), None);
        assert_eq!(get_nested(&doc, "model.name.deeper"), None);
        assert_eq!(get_nested(&doc, ""), None);
    }

    #[test]
    fn test_set_nested_creates_intermediate_objects() {
        let mut doc = json!({ "theme": "dark" });
        set_nested(&mut doc, "model.name", json!("auto-gemini-3")).unwrap();
        assert_eq!(doc, json!({ "theme": "dark", "model": { "name": "auto-gemini-3" } }));
    }

    #[test]
    fn test_set_nested_replaces_non_object_intermediate() {
        let mut doc = json!({ "model": "gemini-2.5-pro" });
        set_nested(&mut doc, "model.name", json!("gemini-2.5-flash")).unwrap();
        assert_eq!(doc, json!({ "model": { "name": "gemini-2.5-flash" } }));
    }

    #[test]
    fn test_set_nested_on_non_object_root() {
        let mut doc = json!([1, 2, 3]);
        set_nested(&mut doc, "model", json!("opus")).unwrap();
        assert_eq!(doc, json!({ "model": "opus" }));
    }

    #[test]
    fn test_invalid_keys_are_rejected() {
        let mut doc = json!({});
        for key in ["", ".model", "model.", "model..name"] {
            assert!(
                matches!(set_nested(&mut doc, key, json!(1)), Err(SettingsError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
        assert_eq!(doc, json!({}));
    }
}
