//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used items from this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use eth_pbt::prelude::*;
//! ```

pub use proptest::prelude::*;

pub use crate::generators::{
    address, array_of, block_number, block_tag, boolean, bytes, hash, safe_integer, sample,
    short_string, transaction,
};
pub use crate::mutation::{
    MutationOperator, MutationOptions, MutationRegistry, MutationTestCase, MutationTestResult,
    MutationTester, ReportFormat, Validator, from_async_fn, from_fn, render_report, try_from_fn,
};
pub use crate::property::{PropertyOptions, PropertyRunner, PropertyTestResult};
pub use crate::types::{
    AddressType, ArrayType, BlockNumberType, BlockTag, BlockTagType, BooleanType, BytesType,
    HashType, NumberType, StringType, TransactionType, TypeDescriptor, is_checksum_address,
    to_checksum_address,
};
