//! Lenient field accessors over `serde_json::Value`.
//!
//! A field of the wrong JSON type reads as absent, the same as a missing
//! field. Unknown fields are never looked at, which keeps decoding
//! forward-compatible with newer clang dumps.

use clast_common::TypeDesc;
use serde::Deserialize;
use serde_json::Value;

#[inline]
pub(crate) fn get_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

#[inline]
pub(crate) fn get_string(value: &Value, key: &str) -> String {
    get_str(value, key).to_string()
}

#[inline]
pub(crate) fn get_bool(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

#[inline]
pub(crate) fn get_u32(value: &Value, key: &str) -> Option<u32> {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

#[inline]
pub(crate) fn get_i64(value: &Value, key: &str) -> i64 {
    value.get(key).and_then(Value::as_i64).unwrap_or(0)
}

#[inline]
pub(crate) fn get_u64(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(0)
}

/// Every string element of an array field, in order.
pub(crate) fn get_string_array(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Decode a `type` object; a missing or malformed one is the empty descriptor.
pub(crate) fn get_type(value: &Value, key: &str) -> TypeDesc {
    value
        .get(key)
        .filter(|v| v.is_object())
        .and_then(|v| TypeDesc::deserialize(v).ok())
        .unwrap_or_default()
}
