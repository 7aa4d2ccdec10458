//! Ethereum primitive descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha3::{Digest, Keccak256};

use super::TypeDescriptor;

/// Hex digits in a 20-byte address.
pub const ADDRESS_HEX_LEN: usize = 40;
/// Hex digits in a 32-byte hash.
pub const HASH_HEX_LEN: usize = 64;

fn hex_body(value: &str) -> Option<&str> {
    value.strip_prefix("0x")
}

fn is_prefixed_hex(value: &Value, digits: usize) -> bool {
    value
        .as_str()
        .and_then(hex_body)
        .is_some_and(|body| body.len() == digits && body.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// 20-byte account address: `0x` followed by 40 hex digits of any case.
///
/// Checksum case is not enforced here; see [`is_checksum_address`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressType;

impl TypeDescriptor for AddressType {
    fn name(&self) -> &str {
        "Address"
    }

    fn is_valid(&self, value: &Value) -> bool {
        is_prefixed_hex(value, ADDRESS_HEX_LEN)
    }
}

/// 32-byte hash: `0x` followed by 64 hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashType;

impl TypeDescriptor for HashType {
    fn name(&self) -> &str {
        "Hash"
    }

    fn is_valid(&self, value: &Value) -> bool {
        is_prefixed_hex(value, HASH_HEX_LEN)
    }
}

/// Hex-encoded byte string: `0x` followed by an even number of hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BytesType;

impl TypeDescriptor for BytesType {
    fn name(&self) -> &str {
        "Bytes"
    }

    fn is_valid(&self, value: &Value) -> bool {
        value
            .as_str()
            .and_then(hex_body)
            .is_some_and(|body| body.len() % 2 == 0 && body.bytes().all(|b| b.is_ascii_hexdigit()))
    }
}

/// Named block selector accepted by JSON-RPC block parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockTag {
    /// Most recent block.
    Latest,
    /// Genesis block.
    Earliest,
    /// Pending state.
    Pending,
    /// Latest safe head.
    Safe,
    /// Latest finalized block.
    Finalized,
}

impl BlockTag {
    /// Every tag, in canonical order.
    pub const ALL: [BlockTag; 5] = [
        BlockTag::Latest,
        BlockTag::Earliest,
        BlockTag::Pending,
        BlockTag::Safe,
        BlockTag::Finalized,
    ];

    /// Wire name of the tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Earliest => "earliest",
            Self::Pending => "pending",
            Self::Safe => "safe",
            Self::Finalized => "finalized",
        }
    }

    /// Parse a wire name. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the [`BlockTag`] wire names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockTagType;

impl TypeDescriptor for BlockTagType {
    fn name(&self) -> &str {
        "BlockTag"
    }

    fn is_valid(&self, value: &Value) -> bool {
        value.as_str().and_then(BlockTag::parse).is_some()
    }
}

/// Non-negative block height that fits in `u64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockNumberType;

impl TypeDescriptor for BlockNumberType {
    fn name(&self) -> &str {
        "BlockNumber"
    }

    fn is_valid(&self, value: &Value) -> bool {
        value.as_u64().is_some()
    }
}

/// Transaction request object.
///
/// `from` is required. `to` may be an address or `null` (contract creation). `value`, `gas` and
/// `nonce` are non-negative integers, `data` is hex bytes. Unknown fields are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionType;

impl TypeDescriptor for TransactionType {
    fn name(&self) -> &str {
        "Transaction"
    }

    fn is_valid(&self, value: &Value) -> bool {
        let Some(fields) = value.as_object() else {
            return false;
        };
        if !fields.get("from").is_some_and(|from| AddressType.is_valid(from)) {
            return false;
        }
        fields.iter().all(|(key, field)| match key.as_str() {
            "from" => true,
            "to" => field.is_null() || AddressType.is_valid(field),
            "value" | "gas" | "nonce" => field.as_u64().is_some(),
            "data" => BytesType.is_valid(field),
            _ => false,
        })
    }
}

/// EIP-55 checksum encoding of a hex address, or `None` if `address` is not a valid address.
pub fn to_checksum_address(address: &str) -> Option<String> {
    if !AddressType.is_valid(&Value::String(address.to_string())) {
        return None;
    }
    let lower = address[2..].to_ascii_lowercase();
    let digest = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + ADDRESS_HEX_LEN);
    out.push_str("0x");
    for (idx, ch) in lower.chars().enumerate() {
        let byte = digest[idx / 2];
        let nibble = if idx % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    Some(out)
}

/// True if `address` is well formed and its letter case matches its EIP-55 checksum.
pub fn is_checksum_address(address: &str) -> bool {
    to_checksum_address(address).is_some_and(|expected| expected == address)
}
