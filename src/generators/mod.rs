//! Seed value strategies.
//!
//! Every strategy produces values valid for the matching descriptor in [`crate::types`], so its
//! output can seed mutation tests directly.

use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::TestRunner;

pub mod ethereum;
pub mod values;

pub use ethereum::{address, block_number, block_tag, bytes, hash, transaction};
pub use values::{array_of, boolean, safe_integer, short_string};

/// Draw `count` values from `strategy` with a deterministic RNG.
///
/// Draws the strategy rejects are skipped, so fewer than `count` values may come back.
pub fn sample<S>(strategy: &S, count: usize) -> Vec<S::Value>
where
    S: Strategy,
{
    let mut runner = TestRunner::deterministic();
    (0..count)
        .filter_map(|_| strategy.new_tree(&mut runner).ok())
        .map(|tree| tree.current())
        .collect()
}
