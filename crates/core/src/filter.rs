//! Response field projection (`?fields=name,hair_color`).

use serde_json::{Map, Value};

use crate::character::APPEARANCE_FIELDS;

/// Split a comma-separated field list into trimmed, non-empty names.
pub fn parse_field_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Project a character (or array of characters) in JSON form down to
/// `fields`.
///
/// A field present at the top level is copied verbatim. An appearance
/// sub-field is copied under a nested `appearance` object, created on first
/// use. Unknown names are skipped. Arrays are filtered element-wise.
pub fn filter_fields(value: &Value, fields: &[String]) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| filter_fields(item, fields))
                .collect(),
        ),
        Value::Object(source) => Value::Object(project(source, fields)),
        other => other.clone(),
    }
}

fn project(source: &Map<String, Value>, fields: &[String]) -> Map<String, Value> {
    let mut out = Map::new();
    for field in fields {
        if let Some(v) = source.get(field) {
            out.insert(field.clone(), v.clone());
            continue;
        }
        if !APPEARANCE_FIELDS.contains(&field.as_str()) {
            continue;
        }
        let Some(v) = source.get("appearance").and_then(|a| a.get(field)) else {
            continue;
        };
        let appearance = out
            .entry("appearance")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(nested) = appearance {
            nested.insert(field.clone(), v.clone());
        }
    }
    out
}
