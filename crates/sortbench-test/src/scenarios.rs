//! Canonical sort inputs with known results.

/// Small unsorted input used across every strategy's tests.
pub const MIXED: [i64; 6] = [5, 3, 8, 1, 9, 2];

/// [`MIXED`] in ascending order.
pub const MIXED_SORTED: [i64; 6] = [1, 2, 3, 5, 8, 9];

/// Strictly descending input of length `n` (`n, n-1, ..., 1`).
pub fn descending(n: usize) -> Vec<i64> {
    (1..=n as i64).rev().collect()
}

/// Ascending input of length `n` (`0, 1, ..., n-1`).
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}
