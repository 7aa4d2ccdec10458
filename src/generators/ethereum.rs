//! Strategies for Ethereum primitives.

use proptest::prelude::*;
use serde_json::{Value, json};

use crate::types::{BlockTag, to_checksum_address};

pub(crate) fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// EIP-55 checksummed addresses.
pub fn address() -> impl Strategy<Value = Value> {
    prop::array::uniform20(any::<u8>()).prop_map(|bytes| {
        let lower = hex_string(&bytes);
        Value::String(to_checksum_address(&lower).unwrap_or(lower))
    })
}

/// Lower-case 32-byte hashes.
pub fn hash() -> impl Strategy<Value = Value> {
    prop::array::uniform32(any::<u8>()).prop_map(|bytes| Value::String(hex_string(&bytes)))
}

/// Block tag names.
pub fn block_tag() -> impl Strategy<Value = Value> {
    prop::sample::select(BlockTag::ALL.to_vec()).prop_map(|tag| Value::String(tag.to_string()))
}

/// Block numbers, weighted toward genesis and realistic chain heights.
pub fn block_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(0_u64),
        1 => Just(1_u64),
        4 => 2_u64..=30_000_000,
        1 => any::<u64>(),
    ]
    .prop_map(Value::from)
}

/// Hex byte strings of up to `max_len` bytes.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Value> {
    prop::collection::vec(any::<u8>(), 0..=max_len).prop_map(|b| Value::String(hex_string(&b)))
}

/// Transaction request objects; `to` is `null` for roughly one in four.
pub fn transaction() -> impl Strategy<Value = Value> {
    (
        address(),
        prop_oneof![1 => Just(Value::Null), 3 => address()],
        any::<u64>(),
        21_000_u64..=30_000_000,
        0_u64..=1_000_000,
        bytes(64),
    )
        .prop_map(|(from, to, value, gas, nonce, data)| {
            json!({
                "from": from,
                "to": to,
                "value": value,
                "gas": gas,
                "nonce": nonce,
                "data": data,
            })
        })
}
