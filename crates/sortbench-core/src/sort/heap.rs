//! HeapSort over an implicit binary max-heap.

/// Returns a sorted copy of `input`.
pub fn heap_sort<T: Ord + Copy>(input: &[T]) -> Vec<T> {
    let mut data = input.to_vec();
    heap_sort_in_place(&mut data);
    data
}

/// Sorts `data` in place: heap construction, then repeated extraction of
/// the maximum into the tail of the live region.
pub fn heap_sort_in_place<T: Ord + Copy>(data: &mut [T]) {
    let n = data.len();
    build_max_heap(data);
    for end in (1..n).rev() {
        data.swap(0, end);
        heapify(data, end, 0);
    }
}

/// Rearranges `data` so that it satisfies the max-heap property.
///
/// # Example
///
/// ```
/// use sortbench_core::sort::{build_max_heap, is_max_heap};
///
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// build_max_heap(&mut data);
/// assert!(is_max_heap(&data));
/// assert_eq!(data[0], 9);
/// ```
pub fn build_max_heap<T: Ord + Copy>(data: &mut [T]) {
    let n = data.len();
    for root in (0..n / 2).rev() {
        heapify(data, n, root);
    }
}

/// Sifts the element at `root` down within the first `heap_size` elements.
pub fn heapify<T: Ord + Copy>(data: &mut [T], heap_size: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap_size && data[left] > data[largest] {
        largest = left;
    }
    if right < heap_size && data[right] > data[largest] {
        largest = right;
    }

    if largest != root {
        data.swap(root, largest);
        heapify(data, heap_size, largest);
    }
}

/// Returns true when every parent is `>=` each of its children.
pub fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|child| data[(child - 1) / 2] >= data[child])
}
