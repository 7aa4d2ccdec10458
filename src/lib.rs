//! # eth-pbt
//!
//! `eth-pbt` is a testing toolkit for Ethereum-facing code, organized around:
//! - `types`: type descriptors for Ethereum primitives and JSON values
//! - `generators`: proptest strategies producing valid seed values
//! - `mutation`: type-directed mutation operators, their registry, and the mutation test runner
//! - `property`: a bounded-sampling property runner
//!
//! The code under test is reached only through a [`mutation::Validator`]: a possibly async,
//! possibly failing boolean oracle. Network clients and chain access belong to the caller.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod generators;
pub mod mutation;
pub mod prelude;
pub mod property;
pub mod types;

/// Re-export `proptest` for convenience.
pub use proptest;
