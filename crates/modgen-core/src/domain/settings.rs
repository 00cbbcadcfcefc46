//! Conversion between a descriptor setting's typed value and the text shown
//! in the module form.
//!
//! `display_value` is used when reading a descriptor, `typed_value` when
//! writing one. For the list-like types the two are inverses on text they
//! produced themselves.

use serde_json::{Map, Value};

use crate::domain::{
    coerce::{ValueType, get_array_value, value_to_text},
    value_objects::SettingKind,
};

/// Line separator used by the form text areas.
pub const LINE_SEPARATOR: &str = "\n";

/// Separator between `select` options in the descriptor's `constrains`.
pub const OPTION_SEPARATOR: &str = "|";

/// Display text for a raw descriptor setting entry.
///
/// - `bool`, `str`, `num`: the value as text.
/// - `arr`: one item per line.
/// - `aarr`: one `key => value` line per entry, each line terminated.
/// - `select`: the `constrains` options, one per line.
pub fn display_value(kind: SettingKind, entry: &Map<String, Value>) -> String {
    match kind {
        SettingKind::Bool | SettingKind::Str | SettingKind::Num => scalar_text(entry),
        SettingKind::Arr => list_text(entry),
        SettingKind::Aarr => mapping_text(entry),
        SettingKind::Select => get_array_value(entry, "constrains", ValueType::String)
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default()
            .replace(OPTION_SEPARATOR, LINE_SEPARATOR),
    }
}

/// A setting value ready to be written to the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub constrains: Option<String>,
}

/// Typed descriptor value for the display text of a setting.
pub fn typed_value(kind: SettingKind, text: &str) -> TypedValue {
    let value = match kind {
        SettingKind::Bool => Value::Bool(matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        )),
        SettingKind::Str => Value::String(text.to_string()),
        SettingKind::Num => number_value(text),
        SettingKind::Arr => Value::Array(
            non_empty_lines(text)
                .map(|line| Value::String(line.to_string()))
                .collect(),
        ),
        SettingKind::Aarr => Value::Object(
            non_empty_lines(text)
                .filter_map(|line| line.split_once("=>"))
                .map(|(key, value)| (key.trim().to_string(), Value::String(value.trim().to_string())))
                .collect(),
        ),
        SettingKind::Select => {
            let options: Vec<&str> = non_empty_lines(text).collect();
            return TypedValue {
                value: Value::String(options.first().copied().unwrap_or_default().to_string()),
                constrains: Some(options.join(OPTION_SEPARATOR)),
            };
        }
    };

    TypedValue {
        value,
        constrains: None,
    }
}

fn scalar_text(entry: &Map<String, Value>) -> String {
    match entry.get("value") {
        Some(value @ (Value::Array(_) | Value::Object(_))) => value.to_string(),
        _ => get_array_value(entry, "value", ValueType::String)
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default(),
    }
}

fn list_text(entry: &Map<String, Value>) -> String {
    let items: Vec<String> = match get_array_value(entry, "value", ValueType::Array) {
        Some(Value::Array(items)) => items.iter().map(item_text).collect(),
        Some(Value::Object(fields)) => fields.values().map(item_text).collect(),
        _ => Vec::new(),
    };
    items.join(LINE_SEPARATOR)
}

fn mapping_text(entry: &Map<String, Value>) -> String {
    let mut text = String::new();
    match get_array_value(entry, "value", ValueType::Array) {
        Some(Value::Object(fields)) => {
            for (key, value) in &fields {
                text.push_str(&format!("{key} => {}{LINE_SEPARATOR}", item_text(value)));
            }
        }
        Some(Value::Array(items)) => {
            for (index, value) in items.iter().enumerate() {
                text.push_str(&format!("{index} => {}{LINE_SEPARATOR}", item_text(value)));
            }
        }
        _ => {}
    }
    text
}

fn item_text(value: &Value) -> String {
    value_to_text(value).unwrap_or_else(|| value.to_string())
}

fn number_value(text: &str) -> Value {
    let trimmed = text.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    match trimmed.parse::<f64>() {
        Ok(float) if float.is_finite() => Value::from(float),
        _ => Value::String(text.to_string()),
    }
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}
