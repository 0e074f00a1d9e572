//! Canonical ordering for display.
//!
//! Object member order carries no meaning in JSON, but with `preserve_order`
//! it survives parsing. Two logically identical documents should render the
//! same, so objects are rebuilt with their keys in lexicographic order.
//! Arrays keep their positions.

use serde_json::{Map, Value};

/// Return a copy of `value` with every object's keys sorted, at every depth.
///
/// The input is left untouched.
///
/// # Examples
///
/// ```
/// use jsondiff_core::sort_value;
/// use serde_json::json;
///
/// let sorted = sort_value(&json!({"b": 1, "a": [{"d": 0, "c": 0}]}));
/// assert_eq!(serde_json::to_string(&sorted).unwrap(), r#"{"a":[{"c":0,"d":0}],"b":1}"#);
/// ```
pub fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(x, _), (y, _)| x.cmp(y));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(key, child)| (key.clone(), sort_value(child)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_value).collect()),
        other => other.clone(),
    }
}
