//! Shared test fixtures for SortBench crates.
//!
//! This crate provides pure helper functions and fixed inputs for testing.
//! It does NOT depend on `sortbench-core`, so core can use it as a
//! dev-dependency without a cycle.
//!
//! - [`scenarios`] - Canonical inputs with known sorted results
//! - [`is_sorted`], [`same_multiset`], [`assert_sorted_permutation`] -
//!   output checks
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! sortbench-test = { workspace = true }
//! ```

pub mod scenarios;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Returns true when `data` is in non-descending order.
///
/// ```
/// use sortbench_test::is_sorted;
///
/// assert!(is_sorted(&[1, 1, 2]));
/// assert!(!is_sorted(&[2, 1]));
/// ```
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Returns true when both slices hold the same elements with the same
/// multiplicities.
pub fn same_multiset<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<&T, i64> = HashMap::new();
    for item in a {
        *counts.entry(item).or_default() += 1;
    }
    for item in b {
        match counts.get_mut(item) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

/// Panics unless `output` is a sorted permutation of `input`.
#[track_caller]
pub fn assert_sorted_permutation<T: Eq + Hash + PartialOrd + Debug>(input: &[T], output: &[T]) {
    assert!(is_sorted(output), "output not sorted: {:?}", output);
    assert!(
        same_multiset(input, output),
        "output is not a permutation of the input\n input: {:?}\noutput: {:?}",
        input,
        output
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_multiset() {
        assert!(same_multiset(&[1, 2, 2, 3], &[2, 3, 1, 2]));
        assert!(!same_multiset(&[1, 2, 2], &[1, 1, 2]));
        assert!(!same_multiset(&[1], &[1, 1]));
        assert!(same_multiset::<i64>(&[], &[]));
    }

    #[test]
    #[should_panic(expected = "not sorted")]
    fn test_assert_rejects_unsorted() {
        assert_sorted_permutation(&[2, 1], &[2, 1]);
    }
}
