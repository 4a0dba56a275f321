//! Collection coercions: string lists, generic lists and maps.

use crate::{CoerceError, FieldMut};
use serde_json::Value;
use std::collections::HashMap;

/// Sets a list of strings into a destination field.
///
/// - string: elements joined with a comma
/// - `Vec<String>`: moved in
/// - `Vec<Value>`: wrapped elementwise
/// - generic-any: reassigned only when the current value is already an
///   all-string array, preserving the declared shape for later re-reads
///
/// On failure the untouched list is handed back alongside the error.
pub(crate) fn set_str_slice(
    field: FieldMut<'_>,
    values: Vec<String>,
) -> Result<(), (Vec<String>, CoerceError)> {
    match field {
        FieldMut::Str(slot) => *slot = values.join(","),
        FieldMut::StrList(slot) => *slot = values,
        FieldMut::AnyList(slot) => {
            *slot = values.into_iter().map(Value::String).collect();
        }
        FieldMut::Any(slot) => {
            if !is_string_array(slot) {
                let err = CoerceError::unsupported("string list", "Value");
                return Err((values, err));
            }
            *slot = Value::Array(values.into_iter().map(Value::String).collect());
        }
        other => {
            let err = CoerceError::unsupported("string list", other.kind_name());
            return Err((values, err));
        }
    }
    Ok(())
}

/// Sets a generic list of JSON values into a destination field.
pub(crate) fn set_list(
    field: FieldMut<'_>,
    values: Vec<Value>,
) -> Result<(), (Vec<Value>, CoerceError)> {
    match field {
        FieldMut::AnyList(slot) => *slot = values,
        FieldMut::Any(slot) => *slot = Value::Array(values),
        other => {
            let err = CoerceError::unsupported("list", other.kind_name());
            return Err((values, err));
        }
    }
    Ok(())
}

/// Sets a generic map of JSON values into a destination field.
pub(crate) fn set_map(
    field: FieldMut<'_>,
    map: serde_json::Map<String, Value>,
) -> Result<(), (serde_json::Map<String, Value>, CoerceError)> {
    match field {
        FieldMut::Any(slot) => *slot = Value::Object(map),
        FieldMut::StrMap(slot) => {
            // All-or-nothing: reject before mutating.
            if !map.values().all(Value::is_string) {
                let err = CoerceError::unsupported("map", "HashMap<String, String>");
                return Err((map, err));
            }
            *slot = map
                .into_iter()
                .map(|(k, v)| match v {
                    Value::String(s) => (k, s),
                    _ => unreachable!("checked above"),
                })
                .collect::<HashMap<_, _>>();
        }
        other => {
            let err = CoerceError::unsupported("map", other.kind_name());
            return Err((map, err));
        }
    }
    Ok(())
}

fn is_string_array(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(Value::is_string),
        _ => false,
    }
}
