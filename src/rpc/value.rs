//! Channel payload values and explicit coercions.
//!
//! Payloads crossing the channel are [`serde_json::Value`]s, a closed
//! tagged variant of null, bool, number, string, array and object. The
//! helpers below turn a value into the shape a handler expects, failing
//! with a typed [`CoercionError`] instead of an unchecked cast.

pub use serde_json::{Map, Value};

use crate::error::CoercionError;

/// Name of the variant a value carries, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

fn mismatch(expected: &'static str, value: &Value) -> CoercionError {
    CoercionError {
        expected,
        found: kind_of(value),
    }
}

pub fn expect_bool(value: &Value) -> Result<bool, CoercionError> {
    value.as_bool().ok_or_else(|| mismatch("bool", value))
}

pub fn expect_string(value: &Value) -> Result<&str, CoercionError> {
    value.as_str().ok_or_else(|| mismatch("string", value))
}

/// A string or null.
pub fn expect_optional_string(value: &Value) -> Result<Option<&str>, CoercionError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(mismatch("string or null", other)),
    }
}

pub fn expect_map(value: &Value) -> Result<&Map<String, Value>, CoercionError> {
    value.as_object().ok_or_else(|| mismatch("map", value))
}
