//! Strategies for JSON primitives.

use proptest::collection::SizeRange;
use proptest::prelude::*;
use serde_json::Value;

use crate::types::primitive::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};

/// `true` or `false`.
pub fn boolean() -> impl Strategy<Value = Value> {
    any::<bool>().prop_map(Value::Bool)
}

/// Integers exactly representable as doubles.
pub fn safe_integer() -> impl Strategy<Value = Value> {
    (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).prop_map(Value::from)
}

/// Short identifier-like strings, possibly empty.
pub fn short_string() -> impl Strategy<Value = Value> {
    "[A-Za-z0-9_]{0,16}".prop_map(Value::String)
}

/// Arrays of `element` values with a length in `len`.
pub fn array_of<S>(element: S, len: impl Into<SizeRange>) -> impl Strategy<Value = Value>
where
    S: Strategy<Value = Value>,
{
    prop::collection::vec(element, len).prop_map(Value::Array)
}
