//! Value resolution helpers for template rendering

use crate::template::error::TemplateError;
use serde_json::{Map, Value};

/// Resolve a dotted key against JSON data
pub(crate) fn resolve_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = data;
    for part in key.split('.') {
        current = match current {
            Value::Object(map) => map.get(part)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Stringify a scalar JSON value for template output
///
/// `null` renders as the empty string; arrays and objects in scalar
/// position are errors.
pub(crate) fn stringify_value(
    value: &Value,
    key: &str,
    line: usize,
) -> Result<String, TemplateError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) => Err(TemplateError::ArrayInScalarPosition {
            key: key.to_string(),
            line,
        }),
        Value::Object(_) => Err(TemplateError::ObjectInScalarPosition {
            key: key.to_string(),
            line,
        }),
    }
}

/// Truthiness for `{{if}}`: null, false, zero, and empty
/// strings/arrays/objects are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Build a loop scope: the base object with the loop variable bound on
/// top (shadowing any field of the same name).
pub(crate) fn loop_scope(base: &Value, var: &str, item: Value) -> Value {
    let mut map = match base {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    map.insert(var.to_string(), item);
    Value::Object(map)
}
