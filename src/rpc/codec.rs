//! Message codec: domain value objects to channel payloads.
//!
//! Every encoder yields a `Value::Object`:
//! ```text
//! Profile ──▶ { firstName, lastName, gender, [optional…], [address: {…}] }
//! Address ──▶ { line1, city, zip, countryCode, [line2], [line3] }
//! Push    ──▶ { [data: {…}], notification: { [title], [body] } }
//! ```
//! Optional fields appear only when supplied; nested values stay nested.
//! There is no decoding direction.

use serde::Serialize;

use super::value::{self, Map, Value};
use crate::error::{CoercionError, Result};
use crate::model::{Address, Environment, Profile, PushNotification};

fn encode_map<T: Serialize>(item: &T) -> Result<Value> {
    let value = serde_json::to_value(item)?;
    debug_assert!(value.is_object(), "domain encoders must produce a map");
    Ok(value)
}

pub fn profile_to_value(profile: &Profile) -> Result<Value> {
    encode_map(profile)
}

pub fn address_to_value(address: &Address) -> Result<Value> {
    encode_map(address)
}

pub fn push_to_value(push: &PushNotification) -> Result<Value> {
    encode_map(push)
}

pub fn environment_to_value(env: Environment) -> Value {
    Value::String(env.as_str().to_owned())
}

/// Convenience for callers that want the map itself.
pub fn profile_to_map(profile: &Profile) -> Result<Map<String, Value>> {
    into_map(profile_to_value(profile)?)
}

fn into_map(encoded: Value) -> Result<Map<String, Value>> {
    match encoded {
        Value::Object(map) => Ok(map),
        other => Err(CoercionError {
            expected: "map",
            found: value::kind_of(&other),
        }
        .into()),
    }
}
