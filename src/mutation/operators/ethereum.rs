//! Operators for Ethereum primitives.

use serde_json::Value;

use super::{MutationOperator, as_int, int_value, replace_char_at};
use crate::types::ethereum::{ADDRESS_HEX_LEN, HASH_HEX_LEN};
use crate::types::{AddressType, BlockNumberType, BlockTag, BlockTagType, HashType, TypeDescriptor};

fn hex_digits(seed: &Value) -> &str {
    let text = seed.as_str().unwrap_or_default();
    text.strip_prefix("0x").unwrap_or(text)
}

fn zero_hex(digits: usize) -> Value {
    Value::String(format!("0x{}", "0".repeat(digits)))
}

/// Address variants: lower-cased, one digit short, `0X` prefix, zero address, non-hex digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressMutator;

impl MutationOperator for AddressMutator {
    fn name(&self) -> &str {
        "address"
    }

    fn value_type(&self) -> &dyn TypeDescriptor {
        &AddressType
    }

    fn mutate(&self, seed: &Value) -> Vec<Value> {
        let digits = hex_digits(seed);
        let shortened = digits.get(1..).unwrap_or_default();
        let corrupted = replace_char_at(digits, ADDRESS_HEX_LEN / 2, 'g');

        vec![
            Value::String(format!("0x{}", digits.to_lowercase())),
            Value::String(format!("0x{shortened}")),
            Value::String(format!("0X{digits}")),
            zero_hex(ADDRESS_HEX_LEN),
            Value::String(format!("0x{corrupted}")),
        ]
    }
}

/// Every other block tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockTagMutator;

impl MutationOperator for BlockTagMutator {
    fn name(&self) -> &str {
        "block-tag"
    }

    fn value_type(&self) -> &dyn TypeDescriptor {
        &BlockTagType
    }

    fn mutate(&self, seed: &Value) -> Vec<Value> {
        let current = seed.as_str().and_then(BlockTag::parse);
        BlockTag::ALL
            .into_iter()
            .filter(|tag| Some(*tag) != current)
            .map(|tag| Value::String(tag.as_str().to_string()))
            .collect()
    }
}

/// Block number boundaries: 0, 1, seed ± 1, `u64::MAX`, and the invalid -1.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockNumberMutator;

impl MutationOperator for BlockNumberMutator {
    fn name(&self) -> &str {
        "block-number"
    }

    fn value_type(&self) -> &dyn TypeDescriptor {
        &BlockNumberType
    }

    fn mutate(&self, seed: &Value) -> Vec<Value> {
        let n = as_int(seed).unwrap_or(0);
        vec![
            Value::from(0_u64),
            Value::from(1_u64),
            int_value(n + 1),
            int_value(n - 1),
            Value::from(u64::MAX),
            Value::from(-1_i64),
        ]
    }
}

/// Hash variants: one digit changed, `0X` prefix, zero hash, one digit short, one digit long.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashMutator;

impl MutationOperator for HashMutator {
    fn name(&self) -> &str {
        "hash"
    }

    fn value_type(&self) -> &dyn TypeDescriptor {
        &HashType
    }

    fn mutate(&self, seed: &Value) -> Vec<Value> {
        let digits = hex_digits(seed);
        let middle = HASH_HEX_LEN / 2;
        let replacement = match digits.chars().nth(middle) {
            Some('0') => '1',
            _ => '0',
        };
        let changed = replace_char_at(digits, middle, replacement);

        let mut shortened = digits.to_string();
        shortened.pop();

        vec![
            Value::String(format!("0x{changed}")),
            Value::String(format!("0X{digits}")),
            zero_hex(HASH_HEX_LEN),
            Value::String(format!("0x{shortened}")),
            Value::String(format!("0x{digits}0")),
        ]
    }
}
