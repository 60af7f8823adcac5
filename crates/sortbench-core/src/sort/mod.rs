//! Sorting strategies.
//!
//! Every strategy has a copying entry point that leaves the caller's slice
//! untouched and an `_in_place` variant working on one borrowed buffer.
//! [`SortAlgorithm`] selects a strategy at runtime; the unit structs
//! [`QuickSort`], [`HeapSort`] and [`BubbleSort`] implement [`Sorter`] for
//! static dispatch.

mod bubble;
mod heap;
mod quick;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SortBenchError};

pub use bubble::{bubble_sort, bubble_sort_in_place};
pub use heap::{build_max_heap, heap_sort, heap_sort_in_place, heapify, is_max_heap};
pub use quick::{quick_sort, quick_sort_in_place, quick_sort_range};

/// Operation tally reported by instrumented sorts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationCounts {
    /// Element comparisons performed.
    pub comparisons: u64,
    /// Element swaps performed.
    pub swaps: u64,
}

/// Strategy seam for in-place sorting.
pub trait Sorter {
    /// Sorts `data` ascending. Instrumented strategies return their counts.
    fn sort_in_place<T: Ord + Copy>(&self, data: &mut [T]) -> Option<OperationCounts>;
}

/// QuickSort, Hoare partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Sorter for QuickSort {
    #[inline]
    fn sort_in_place<T: Ord + Copy>(&self, data: &mut [T]) -> Option<OperationCounts> {
        quick_sort_in_place(data);
        None
    }
}

/// HeapSort.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl Sorter for HeapSort {
    #[inline]
    fn sort_in_place<T: Ord + Copy>(&self, data: &mut [T]) -> Option<OperationCounts> {
        heap_sort_in_place(data);
        None
    }
}

/// BubbleSort with early exit, instrumented.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    #[inline]
    fn sort_in_place<T: Ord + Copy>(&self, data: &mut [T]) -> Option<OperationCounts> {
        Some(bubble_sort_in_place(data))
    }
}

/// Result of a copying sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome<T> {
    pub sorted: Vec<T>,
    /// Present only for instrumented strategies.
    pub counts: Option<OperationCounts>,
}

/// Runtime selector over the available strategies.
///
/// # Example
///
/// ```
/// use sortbench_core::SortAlgorithm;
///
/// let algorithm: SortAlgorithm = "bubble".parse().unwrap();
/// let outcome = algorithm.sort(&[3, 1, 2]);
/// assert_eq!(outcome.sorted, vec![1, 2, 3]);
/// assert!(outcome.counts.is_some());
///
/// let outcome = SortAlgorithm::HeapSort.sort(&[3, 1, 2]);
/// assert!(outcome.counts.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortAlgorithm {
    #[default]
    QuickSort,
    HeapSort,
    BubbleSort,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::QuickSort,
        SortAlgorithm::HeapSort,
        SortAlgorithm::BubbleSort,
    ];

    /// Display name, e.g. `"QuickSort"`.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::QuickSort => "QuickSort",
            SortAlgorithm::HeapSort => "HeapSort",
            SortAlgorithm::BubbleSort => "BubbleSort",
        }
    }

    /// Whether [`SortOutcome::counts`] is populated.
    pub fn is_instrumented(self) -> bool {
        matches!(self, SortAlgorithm::BubbleSort)
    }

    /// Sorts a copy of `input`.
    pub fn sort<T: Ord + Copy>(self, input: &[T]) -> SortOutcome<T> {
        let mut sorted = input.to_vec();
        let counts = self.sort_in_place(&mut sorted);
        SortOutcome { sorted, counts }
    }
}

impl Sorter for SortAlgorithm {
    fn sort_in_place<T: Ord + Copy>(&self, data: &mut [T]) -> Option<OperationCounts> {
        match self {
            SortAlgorithm::QuickSort => QuickSort.sort_in_place(data),
            SortAlgorithm::HeapSort => HeapSort.sort_in_place(data),
            SortAlgorithm::BubbleSort => BubbleSort.sort_in_place(data),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "quick" | "quicksort" => Ok(SortAlgorithm::QuickSort),
            "heap" | "heapsort" => Ok(SortAlgorithm::HeapSort),
            "bubble" | "bubblesort" => Ok(SortAlgorithm::BubbleSort),
            _ => Err(SortBenchError::invalid(format!(
                "unknown algorithm '{}' (expected quick, heap or bubble)",
                s.trim()
            ))),
        }
    }
}
