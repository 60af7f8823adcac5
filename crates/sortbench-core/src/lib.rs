//! SortBench Core - sorting strategies and input generators
//!
//! This crate provides the pieces every benchmark sweep is built from:
//! - Three comparison sorts (QuickSort with Hoare partitioning, HeapSort,
//!   and an instrumented BubbleSort)
//! - Distribution shapes and a seedable input generator
//! - The error taxonomy shared by the workspace

pub mod distribution;
pub mod error;
pub mod generator;
pub mod sort;

pub use distribution::{DistributionKind, OrderedStyle, ValueRange};
pub use error::{Result, SortBenchError};
pub use generator::{validate_size, DataGenerator};
pub use sort::{OperationCounts, SortAlgorithm, SortOutcome, Sorter};
