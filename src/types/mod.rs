//! Type descriptors for the value model.
//!
//! Values are plain [`serde_json::Value`]s. A [`TypeDescriptor`] gives a value its semantic type:
//! a membership predicate, a compatibility check against other descriptors, and a flattening used
//! to diff composite values in reports.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use serde_json::Value;

pub mod ethereum;
pub mod primitive;

pub use ethereum::{
    AddressType, BlockNumberType, BlockTag, BlockTagType, BytesType, HashType, TransactionType,
    is_checksum_address, to_checksum_address,
};
pub use primitive::{AnyType, ArrayType, BooleanType, NumberType, StringType};

/// Root key of every flattened value.
pub const ROOT_PATH: &str = "rv";

/// Semantic type of a value.
///
/// Descriptors are stateless and shared read-only. Two descriptors with the same
/// [`name`](TypeDescriptor::name) describe the same type.
pub trait TypeDescriptor: Send + Sync + Debug {
    /// Stable type name, used as the registry key.
    fn name(&self) -> &str;

    /// Membership test. Must not panic.
    fn is_valid(&self, value: &Value) -> bool;

    /// Whether values of this type can be compared against values of `other`.
    fn mutable_to(&self, other: &dyn TypeDescriptor) -> bool {
        self.name() == other.name()
    }

    /// Decompose a value into path-keyed entries. Always contains [`ROOT_PATH`].
    fn flatten(&self, value: &Value) -> BTreeMap<String, Value> {
        flatten_value(value)
    }
}

/// Flatten a value into `rv`, `rv[i]` and `rv.field` entries, recursively.
pub fn flatten_value(value: &Value) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    flatten_into(ROOT_PATH.to_string(), value, &mut out);
    out
}

fn flatten_into(path: String, value: &Value, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                flatten_into(format!("{path}[{idx}]"), item, out);
            }
        }
        Value::Object(fields) => {
            for (key, field) in fields {
                flatten_into(format!("{path}.{key}"), field, out);
            }
        }
        _ => {}
    }
    out.insert(path, value.clone());
}

/// Paths whose flattened entries differ between `before` and `after`, sorted.
///
/// A path present on only one side counts as changed.
pub fn diff_paths(before: &BTreeMap<String, Value>, after: &BTreeMap<String, Value>) -> Vec<String> {
    let keys: BTreeSet<&String> = before.keys().chain(after.keys()).collect();
    keys.into_iter()
        .filter(|key| before.get(*key) != after.get(*key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flatten_scalar_has_only_root() {
        let flat = flatten_value(&json!("0xabc"));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.get("rv"), Some(&json!("0xabc")));
    }

    #[test]
    fn flatten_nested_uses_index_and_field_paths() {
        let value = json!({"to": "0x01", "logs": [1, {"topic": "t"}]});
        let flat = flatten_value(&value);

        assert_eq!(flat.get("rv"), Some(&value));
        assert_eq!(flat.get("rv.to"), Some(&json!("0x01")));
        assert_eq!(flat.get("rv.logs[0]"), Some(&json!(1)));
        assert_eq!(flat.get("rv.logs[1].topic"), Some(&json!("t")));
        assert_eq!(flat.len(), 6);
    }

    #[test]
    fn diff_reports_changed_and_missing_paths() {
        let before = flatten_value(&json!([1, 2, 3]));
        let after = flatten_value(&json!([1, 5]));
        assert_eq!(diff_paths(&before, &after), vec!["rv", "rv[1]", "rv[2]"]);
        assert!(diff_paths(&before, &before).is_empty());
    }

    #[test]
    fn mutable_to_compares_names() {
        assert!(AddressType.mutable_to(&AddressType));
        assert!(!AddressType.mutable_to(&HashType));
        assert!(ArrayType::any().mutable_to(&ArrayType::of(AddressType)));
    }
}
