use serde_json::{Map, Value};

use super::TranslationSourceParser;
use crate::core::{LocaleDict, SourceParseError};

/// Parser for files wrapping a JSON object in other text.
///
/// The object is located by the first `{` and the last `}` of the content, so
/// `export default { ... };` and plain `.json` files are both accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedObjectParser;

impl TranslationSourceParser for EmbeddedObjectParser {
    fn parse(&self, raw: &str) -> Result<LocaleDict, SourceParseError> {
        let object = extract_object(raw).ok_or(SourceParseError::MissingObject)?;
        let object: Map<String, Value> = serde_json::from_str(object)?;

        let mut dict = LocaleDict::new();
        for (key, value) in &object {
            flatten_value(value, key.clone(), &mut dict);
        }
        Ok(dict)
    }
}

/// Slice between the first `{` and the last `}` (inclusive).
fn extract_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}

fn flatten_value(value: &Value, prefix: String, result: &mut LocaleDict) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_value(val, join_path(&prefix, key), result);
            }
        }
        Value::Array(arr) => {
            for (index, val) in arr.iter().enumerate() {
                flatten_value(val, join_path(&prefix, &index.to_string()), result);
            }
        }
        Value::String(s) => {
            result.insert(prefix, s.clone());
        }
        // Untranslated placeholder
        Value::Null => {
            result.insert(prefix, String::new());
        }
        Value::Bool(_) | Value::Number(_) => {
            result.insert(prefix, value.to_string());
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}
