use serde::Deserialize;
use serde_json::Value;

/// Text form of any JSON value: booleans become `"True"`/`"False"`, numbers
/// their decimal text, `null` the empty string and structures their compact
/// JSON.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accepts strings, numbers, booleans or null and keeps them as a string.
pub(crate) fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(value_to_string(&Value::deserialize(deserializer)?))
}

/// Like [`string_from_any`] but maps `null` to `None`.
pub(crate) fn optional_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => Ok(Some(value_to_string(&other))),
    }
}
