//! Loose value access for hand-edited documents.
//!
//! Descriptor entries are read through these helpers so that a missing or
//! oddly typed field degrades to a default instead of failing the whole
//! parse.

use serde_json::{Map, Value};

/// Target type for [`get_array_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    #[default]
    String,
    Integer,
    Float,
    Bool,
    Array,
}

/// Value at `key`, or the type's default when the key is missing, coerced
/// to `kind`.
///
/// Returns `None` when the value cannot be coerced, which only happens for
/// arrays and objects requested as a scalar type.
pub fn get_array_value(map: &Map<String, Value>, key: &str, kind: ValueType) -> Option<Value> {
    let value = map.get(key).unwrap_or(&Value::Null);
    coerce(value, kind)
}

/// Coerce a single value to `kind`.
fn coerce(value: &Value, kind: ValueType) -> Option<Value> {
    match kind {
        ValueType::String => value_to_text(value).map(Value::String),
        ValueType::Integer => value_to_integer(value).map(Value::from),
        ValueType::Float => value_to_float(value).map(Value::from),
        ValueType::Bool => Some(Value::Bool(is_truthy(value))),
        ValueType::Array => Some(match value {
            Value::Null => Value::Array(Vec::new()),
            Value::Array(_) | Value::Object(_) => value.clone(),
            scalar => Value::Array(vec![scalar.clone()]),
        }),
    }
}

/// Textual form of a scalar: strings verbatim, numbers in decimal, `true`
/// as `"1"`, `false` and null as `""`.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn value_to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Null => Some(0),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            Some(
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or(0),
            )
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn value_to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(s.trim().parse::<f64>().unwrap_or(0.0)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
