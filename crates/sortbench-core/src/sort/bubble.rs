//! BubbleSort with comparison and swap counting.

use super::OperationCounts;

/// Returns a sorted copy of `input` along with the operations performed.
///
/// # Example
///
/// ```
/// use sortbench_core::sort::bubble_sort;
///
/// let (sorted, counts) = bubble_sort(&[4, 3, 2, 1]);
/// assert_eq!(sorted, vec![1, 2, 3, 4]);
/// assert_eq!(counts.comparisons, 6);
/// assert_eq!(counts.swaps, 6);
/// ```
pub fn bubble_sort<T: Ord + Copy>(input: &[T]) -> (Vec<T>, OperationCounts) {
    let mut data = input.to_vec();
    let counts = bubble_sort_in_place(&mut data);
    (data, counts)
}

/// Sorts `data` in place, stopping after the first pass without swaps.
pub fn bubble_sort_in_place<T: Ord + Copy>(data: &mut [T]) -> OperationCounts {
    let n = data.len();
    let mut counts = OperationCounts::default();

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            counts.comparisons += 1;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                counts.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_test::scenarios;

    #[test]
    fn test_scenario() {
        let (sorted, counts) = bubble_sort(&scenarios::MIXED);
        assert_eq!(sorted, scenarios::MIXED_SORTED.to_vec());
        assert!(counts.comparisons >= counts.swaps);
    }

    #[test]
    fn test_empty_and_single() {
        let (sorted, counts) = bubble_sort::<i64>(&[]);
        assert!(sorted.is_empty());
        assert_eq!(counts, OperationCounts::default());

        let (sorted, counts) = bubble_sort(&[1]);
        assert_eq!(sorted, vec![1]);
        assert_eq!(counts, OperationCounts::default());
    }

    #[test]
    fn test_sorted_input_exits_after_one_pass() {
        for n in 1..50usize {
            let (_, counts) = bubble_sort(&scenarios::ascending(n));
            assert_eq!(counts.swaps, 0);
            assert_eq!(counts.comparisons, n as u64 - 1);
        }
    }

    #[test]
    fn test_descending_worst_case() {
        for n in 0..50usize {
            let (_, counts) = bubble_sort(&scenarios::descending(n));
            let n = n as u64;
            let expected = n * n.saturating_sub(1) / 2;
            assert_eq!(counts.comparisons, expected);
            assert_eq!(counts.swaps, expected);
        }
    }

    #[test]
    fn test_early_exit_on_nearly_sorted() {
        // One adjacent inversion: a swapping pass, then a clean pass.
        let (sorted, counts) = bubble_sort(&[1, 2, 4, 3, 5]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(counts.swaps, 1);
        assert_eq!(counts.comparisons, 4 + 3);
    }
}
