//! Type-bound mutation operators.
//!
//! An operator takes one valid seed and returns a finite list of variants aimed at the failure
//! classes of its type: boundaries, malformed encodings, off-by-one values, case and format slips,
//! truncation. Variants may still be valid; deciding pass or fail is the runner's job.

use std::fmt::Debug;
use std::sync::Arc;

use serde_json::Value;

use crate::types::TypeDescriptor;

pub mod ethereum;
pub mod primitive;

pub use ethereum::{AddressMutator, BlockNumberMutator, BlockTagMutator, HashMutator};
pub use primitive::{ArrayMutator, BooleanMutator, NumberMutator, StringMutator};

/// Mutation strategy for one type.
///
/// `mutate` must depend only on its input, must not panic, and must return a finite list of new
/// values. Degenerate seeds get fallback variants instead of failures.
pub trait MutationOperator: Send + Sync + Debug {
    /// Diagnostic name.
    fn name(&self) -> &str;

    /// Descriptor this operator is registered under.
    fn value_type(&self) -> &dyn TypeDescriptor;

    /// Variants of `seed`.
    fn mutate(&self, seed: &Value) -> Vec<Value>;

    /// Whether `value` is a seed this operator understands.
    fn is_applicable(&self, value: &Value) -> bool {
        self.value_type().is_valid(value)
    }
}

/// The eight built-in operators.
pub fn builtin_operators() -> Vec<Arc<dyn MutationOperator>> {
    vec![
        Arc::new(AddressMutator),
        Arc::new(BlockTagMutator),
        Arc::new(BlockNumberMutator),
        Arc::new(HashMutator),
        Arc::new(BooleanMutator),
        Arc::new(NumberMutator),
        Arc::new(StringMutator),
        Arc::new(ArrayMutator::default()),
    ]
}

/// Integer result as the narrowest JSON number that holds it, falling back to a float.
pub(crate) fn int_value(value: i128) -> Value {
    if let Ok(v) = i64::try_from(value) {
        Value::from(v)
    } else if let Ok(v) = u64::try_from(value) {
        Value::from(v)
    } else {
        Value::from(value as f64)
    }
}

/// Seed as an exact integer, if it is one.
pub(crate) fn as_int(value: &Value) -> Option<i128> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
}

/// Replace the character at `idx` with `replacement`. Out-of-range indices leave the text as is.
pub(crate) fn replace_char_at(text: &str, idx: usize, replacement: char) -> String {
    text.chars()
        .enumerate()
        .map(|(i, ch)| if i == idx { replacement } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::json;

    use super::*;

    #[test]
    fn builtins_cover_eight_distinct_types() {
        let names: BTreeSet<String> = builtin_operators()
            .iter()
            .map(|op| op.value_type().name().to_string())
            .collect();
        assert_eq!(names.len(), 8);
        for name in [
            "Address",
            "BlockTag",
            "BlockNumber",
            "Hash",
            "Boolean",
            "Number",
            "String",
            "Array",
        ] {
            assert!(names.contains(name), "missing operator for {name}");
        }
    }

    #[test]
    fn int_value_picks_narrowest_representation() {
        assert_eq!(int_value(-1), json!(-1));
        assert_eq!(int_value(i128::from(u64::MAX)), json!(u64::MAX));
        assert!(int_value(i128::from(u64::MAX) + 1).is_f64());
    }

    #[test]
    fn replace_char_at_ignores_out_of_range() {
        assert_eq!(replace_char_at("abc", 1, 'z'), "azc");
        assert_eq!(replace_char_at("abc", 9, 'z'), "abc");
    }
}
