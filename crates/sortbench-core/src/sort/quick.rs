//! QuickSort with the Hoare partition scheme.

/// Returns a sorted copy of `input`.
///
/// # Example
///
/// ```
/// use sortbench_core::sort::quick_sort;
///
/// let input = vec![5, 3, 8, 1, 9, 2];
/// assert_eq!(quick_sort(&input), vec![1, 2, 3, 5, 8, 9]);
/// assert_eq!(input, vec![5, 3, 8, 1, 9, 2]);
/// ```
pub fn quick_sort<T: Ord + Copy>(input: &[T]) -> Vec<T> {
    let mut data = input.to_vec();
    quick_sort_in_place(&mut data);
    data
}

/// Sorts `data` in place.
pub fn quick_sort_in_place<T: Ord + Copy>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    let high = data.len() - 1;
    quick_sort_range(data, 0, high);
}

/// Sorts the inclusive index range `[low, high]` of `data`.
///
/// `low >= high` is a no-op.
pub fn quick_sort_range<T: Ord + Copy>(data: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let split = partition(data, low, high);
    // The split index belongs to the left half under Hoare partitioning.
    quick_sort_range(data, low, split);
    quick_sort_range(data, split + 1, high);
}

/// Hoare partition of `[low, high]` around the midpoint value.
///
/// Returns `j` such that recursing on `[low, j]` and `[j + 1, high]` sorts
/// the range. Requires `low < high`; the returned index is always in
/// `[low, high - 1]`.
pub(crate) fn partition<T: Ord + Copy>(data: &mut [T], low: usize, high: usize) -> usize {
    // Read by value: swaps below may move the element at `mid`.
    let pivot = data[low + (high - low) / 2];
    let mut i = low;
    let mut j = high;

    loop {
        while data[i] < pivot {
            i += 1;
        }
        while data[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}
