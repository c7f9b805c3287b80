// ABOUTME: Settings file formats and conversion to a common JSON value tree
// ABOUTME: TOML documents are edited as JSON values and converted back on write

use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::error::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Toml,
}

impl SettingsFormat {
    /// TOML when the file ends in `.toml`, JSON otherwise
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("toml") => SettingsFormat::Toml,
            _ => SettingsFormat::Json,
        }
    }

    /// Parse file content into a JSON value tree. Blank content is an empty document.
    pub fn parse(self, path: &Path, content: &str) -> Result<Value, SettingsError> {
        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        match self {
            SettingsFormat::Json => {
                serde_json::from_str(content).map_err(|source| SettingsError::ParseJson {
                    path: path.to_path_buf(),
                    source,
                })
            }
            SettingsFormat::Toml => {
                let table: toml::Table =
                    toml::from_str(content).map_err(|source| SettingsError::ParseToml {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Ok(toml_to_json(toml::Value::Table(table)))
            }
        }
    }

    /// Pretty-print a document. The root must be an object for TOML.
    pub fn serialize(self, document: Value) -> Result<String, SettingsError> {
        match self {
            SettingsFormat::Json => {
                serde_json::to_string_pretty(&document).map_err(SettingsError::SerializeJson)
            }
            SettingsFormat::Toml => {
                let table = match json_to_toml(document) {
                    Some(toml::Value::Table(table)) => table,
                    _ => toml::Table::new(),
                };
                Ok(toml::to_string_pretty(&table)?)
            }
        }
    }
}

/// Convert a TOML value to JSON. Datetimes become strings.
pub fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(Number::from(i)),
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert a JSON value to TOML. TOML has no null, so nulls are dropped.
pub fn json_to_toml(value: Value) -> Option<toml::Value> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(toml::Value::Boolean(b)),
        Value::Number(n) => Some(if let Some(i) = n.as_i64() {
            toml::Value::Integer(i)
        } else if let Some(f) = n.as_f64() {
            toml::Value::Float(f)
        } else {
            toml::Value::String(n.to_string())
        }),
        Value::String(s) => Some(toml::Value::String(s)),
        Value::Array(arr) => Some(toml::Value::Array(
            arr.into_iter().filter_map(json_to_toml).collect(),
        )),
        Value::Object(obj) => Some(toml::Value::Table(
            obj.into_iter()
                .filter_map(|(k, v)| json_to_toml(v).map(|v| (k, v)))
                .collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SettingsFormat::from_path(".codex/config.toml"), SettingsFormat::Toml);
        assert_eq!(SettingsFormat::from_path(".gemini/settings.json"), SettingsFormat::Json);
        assert_eq!(SettingsFormat::from_path(".agent/settings"), SettingsFormat::Json);
    }

    #[test]
    fn test_blank_content_is_empty_document() {
        let path = Path::new("config.toml");
        assert_eq!(SettingsFormat::Toml.parse(path, "  \n").unwrap(), json!({}));
        assert_eq!(SettingsFormat::Json.parse(path, "").unwrap(), json!({}));
    }

    #[test]
    fn test_toml_parses_to_json_tree() {
        let content = r#"
model = "gpt-5.2-codex"
approval_policy = "on-request"

[profiles.fast]
model = "gpt-5.1-codex-mini"
retries = 3
temperature = 0.5
"#;
        let value = SettingsFormat::Toml
            .parse(Path::new("config.toml"), content)
            .unwrap();

        assert_eq!(
            value,
            json!({
                "model": "gpt-5.2-codex",
                "approval_policy": "on-request",
                "profiles": {
                    "fast": { "model": "gpt-5.1-codex-mini", "retries": 3, "temperature": 0.5 }
                }
            })
        );
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let err = SettingsFormat::Toml
            .parse(Path::new("/tmp/config.toml"), "model = ")
            .unwrap_err();
        assert!(matches!(err, SettingsError::ParseToml { .. }));
        assert!(err.to_string().contains("/tmp/config.toml"));
    }

    #[test]
    fn test_nulls_are_dropped_for_toml() {
        let document = json!({ "model": "gpt-5.2", "profile": null, "list": [1, null, 2] });
        let output = SettingsFormat::Toml.serialize(document).unwrap();

        let table: toml::Table = toml::from_str(&output).unwrap();
        assert_eq!(table.get("model").and_then(|v| v.as_str()), Some("gpt-5.2"));
        assert!(table.get("profile").is_none());
        assert_eq!(table.get("list").and_then(|v| v.as_array()).map(Vec::len), Some(2));
    }

    #[test]
    fn test_json_output_is_pretty() {
        let output = SettingsFormat::Json
            .serialize(json!({ "model": { "name": "gemini-2.5-pro" } }))
            .unwrap();
        assert!(output.contains('\n'));
        assert!(output.contains("\"name\": \"gemini-2.5-pro\""));
    }
}
