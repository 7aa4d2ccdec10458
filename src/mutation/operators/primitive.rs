//! Operators for JSON primitives.

use serde_json::Value;

use super::{MutationOperator, as_int, int_value};
use crate::types::primitive::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use crate::types::{ArrayType, BooleanType, NumberType, StringType, TypeDescriptor};

/// Logical negation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanMutator;

impl MutationOperator for BooleanMutator {
    fn name(&self) -> &str {
        "boolean"
    }

    fn value_type(&self) -> &dyn TypeDescriptor {
        &BooleanType
    }

    fn mutate(&self, seed: &Value) -> Vec<Value> {
        vec![Value::Bool(!seed.as_bool().unwrap_or(false))]
    }
}

/// Arithmetic neighbours and safe-integer bounds.
///
/// Integer seeds are mutated exactly; float seeds in `f64`, where an overflow becomes `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberMutator;

impl MutationOperator for NumberMutator {
    fn name(&self) -> &str {
        "number"
    }

    fn value_type(&self) -> &dyn TypeDescriptor {
        &NumberType
    }

    fn mutate(&self, seed: &Value) -> Vec<Value> {
        let mut out = match as_int(seed) {
            Some(n) => vec![
                int_value(0),
                int_value(n + 1),
                int_value(n - 1),
                int_value(-n),
                int_value(n * 2),
                int_value(n.div_euclid(2)),
            ],
            None => {
                let v = seed.as_f64().unwrap_or(0.0);
                vec![
                    int_value(0),
                    float_value(v + 1.0),
                    float_value(v - 1.0),
                    float_value(-v),
                    float_value(v * 2.0),
                    float_value((v / 2.0).floor()),
                ]
            }
        };
        out.push(Value::from(MAX_SAFE_INTEGER));
        out.push(Value::from(MIN_SAFE_INTEGER));
        out
    }
}

/// Overflow saturates at `±f64::MAX`; JSON has no infinities.
fn float_value(v: f64) -> Value {
    Value::from(v.clamp(-f64::MAX, f64::MAX))
}

/// Empty, one longer, one shorter, upper-cased, lower-cased, reversed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMutator;

impl MutationOperator for StringMutator {
    fn name(&self) -> &str {
        "string"
    }

    fn value_type(&self) -> &dyn TypeDescriptor {
        &StringType
    }

    fn mutate(&self, seed: &Value) -> Vec<Value> {
        let text = seed.as_str().unwrap_or_default();
        let mut shortened = text.to_string();
        shortened.pop();

        vec![
            Value::String(String::new()),
            Value::String(format!("{text}a")),
            Value::String(shortened),
            Value::String(text.to_uppercase()),
            Value::String(text.to_lowercase()),
            Value::String(text.chars().rev().collect()),
        ]
    }
}

/// Structural array edits.
///
/// A non-empty seed yields: empty, without first, without last, first appended, reversed,
/// first alone. An empty seed yields only `[null]`.
#[derive(Debug, Clone, Default)]
pub struct ArrayMutator {
    value_type: ArrayType,
}

impl ArrayMutator {
    /// Operator bound to a specific array descriptor.
    pub fn new(value_type: ArrayType) -> Self {
        Self { value_type }
    }
}

impl MutationOperator for ArrayMutator {
    fn name(&self) -> &str {
        "array"
    }

    fn value_type(&self) -> &dyn TypeDescriptor {
        &self.value_type
    }

    fn mutate(&self, seed: &Value) -> Vec<Value> {
        let items = seed.as_array().map(Vec::as_slice).unwrap_or_default();
        let Some((first, rest)) = items.split_first() else {
            return vec![Value::Array(vec![Value::Null])];
        };

        let mut duplicated = items.to_vec();
        duplicated.push(first.clone());

        vec![
            Value::Array(Vec::new()),
            Value::Array(rest.to_vec()),
            Value::Array(items[..items.len() - 1].to_vec()),
            Value::Array(duplicated),
            Value::Array(items.iter().rev().cloned().collect()),
            Value::Array(vec![first.clone()]),
        ]
    }
}
