//! Shallow memory estimates.
//!
//! These figures count a vector's header plus its element buffer
//! (`capacity * size_of::<T>()`). Nothing behind the elements and no
//! allocator overhead is included, so they approximate rather than profile.

use std::mem::size_of;

/// Shallow size of `values` in bytes.
pub fn shallow_size<T>(values: &Vec<T>) -> usize {
    size_of::<Vec<T>>() + values.capacity() * size_of::<T>()
}

/// The larger shallow size of a sort's input and output containers.
pub fn peak_estimate<T>(input: &Vec<T>, output: &Vec<T>) -> usize {
    shallow_size(input).max(shallow_size(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_size_counts_buffer() {
        let empty: Vec<i64> = Vec::new();
        assert_eq!(shallow_size(&empty), size_of::<Vec<i64>>());

        let values: Vec<i64> = (0..100).collect();
        assert!(shallow_size(&values) >= size_of::<Vec<i64>>() + 100 * 8);
    }

    #[test]
    fn test_peak_takes_larger_side() {
        let small: Vec<i64> = Vec::with_capacity(4);
        let large: Vec<i64> = Vec::with_capacity(400);
        assert_eq!(peak_estimate(&small, &large), shallow_size(&large));
        assert_eq!(peak_estimate(&large, &small), shallow_size(&large));
    }
}
