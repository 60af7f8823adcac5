//! Cross-strategy properties.

use super::*;
use proptest::prelude::*;
use sortbench_test::{assert_sorted_permutation, is_sorted, same_multiset, scenarios};

fn sort_with(algorithm: SortAlgorithm, input: &[i64]) -> Vec<i64> {
    algorithm.sort(input).sorted
}

#[test]
fn test_all_strategies_on_scenarios() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(
            sort_with(algorithm, &scenarios::MIXED),
            scenarios::MIXED_SORTED.to_vec(),
            "{} failed the mixed scenario",
            algorithm
        );
        assert!(sort_with(algorithm, &[]).is_empty());
        assert_eq!(sort_with(algorithm, &[1]), vec![1]);
    }
}

#[test]
fn test_counts_only_for_bubble() {
    for algorithm in SortAlgorithm::ALL {
        let outcome = algorithm.sort(&scenarios::MIXED);
        assert_eq!(outcome.counts.is_some(), algorithm.is_instrumented());
    }

    let empty = SortAlgorithm::BubbleSort.sort::<i64>(&[]);
    assert_eq!(empty.counts, Some(OperationCounts::default()));
    let single = SortAlgorithm::BubbleSort.sort(&[1i64]);
    assert_eq!(single.counts, Some(OperationCounts::default()));
}

#[test]
fn test_unit_sorters_match_selector() {
    let input: Vec<i64> = vec![10, -3, 7, 7, 0, 22, -8];

    let mut a = input.clone();
    QuickSort.sort_in_place(&mut a);
    let mut b = input.clone();
    HeapSort.sort_in_place(&mut b);
    let mut c = input.clone();
    let counts = BubbleSort.sort_in_place(&mut c);

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert!(counts.is_some());
    assert_sorted_permutation(&input, &a);
}

#[test]
fn test_algorithm_parsing() {
    assert_eq!("quick".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::QuickSort);
    assert_eq!("Heap-Sort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::HeapSort);
    assert_eq!("bubble_sort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::BubbleSort);
    assert!(matches!(
        "merge".parse::<SortAlgorithm>(),
        Err(SortBenchError::InvalidArgument(_))
    ));
}

proptest! {
    #[test]
    fn prop_sorted_permutation(input in prop::collection::vec(-1000i64..1000, 0..300)) {
        for algorithm in SortAlgorithm::ALL {
            let output = sort_with(algorithm, &input);
            prop_assert!(is_sorted(&output));
            prop_assert!(same_multiset(&input, &output));
        }
    }

    #[test]
    fn prop_idempotent(input in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut sorted = input.clone();
        sorted.sort_unstable();
        for algorithm in SortAlgorithm::ALL {
            prop_assert_eq!(sort_with(algorithm, &sorted), sorted.clone());
        }
    }

    #[test]
    fn prop_input_not_mutated(input in prop::collection::vec(any::<i64>(), 0..200)) {
        let snapshot = input.clone();
        for algorithm in SortAlgorithm::ALL {
            let _ = algorithm.sort(&input);
            prop_assert_eq!(&input, &snapshot);
        }
    }

    #[test]
    fn prop_bubble_counts_ordered(input in prop::collection::vec(0i64..50, 0..120)) {
        let (_, counts) = bubble_sort(&input);
        prop_assert!(counts.comparisons >= counts.swaps);
        let n = input.len() as u64;
        prop_assert!(counts.comparisons <= n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn prop_heap_built_before_extraction(input in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut data = input;
        build_max_heap(&mut data);
        prop_assert!(is_max_heap(&data));
    }
}
