//! Benchmarking framework for SortBench.
//!
//! This crate drives a sorting strategy over a matrix of input sizes and
//! distributions, measures each run, and exports the results.
//!
//! # Overview
//!
//! The benchmarking framework allows you to:
//! - Sweep one algorithm over (distribution, size) pairs
//! - Time each sort and estimate its memory footprint
//! - Collect comparison/swap counts from instrumented sorts
//! - Keep going when a single trial fails, recording the failure
//! - Export results to CSV and Markdown
//!
//! Memory figures are shallow estimates (vector header plus element buffer),
//! not allocator-level profiling.
//!
//! # Example
//!
//! ```
//! use sortbench_benchmark::{Benchmark, MarkdownReport};
//! use sortbench_config::SweepConfig;
//! use sortbench_core::SortAlgorithm;
//!
//! let config = SweepConfig::new()
//!     .with_algorithm(SortAlgorithm::HeapSort)
//!     .with_sizes(vec![100, 1000]);
//!
//! let report = Benchmark::new(config).run();
//! assert_eq!(report.record_count(), 6);
//! assert!(MarkdownReport::to_string(&report).contains("HeapSort"));
//! ```

mod memory;
mod report;
mod result;
mod runner;

pub use memory::{peak_estimate, shallow_size};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{
    complexity_ratio, BenchmarkRecord, BenchmarkReport, DistributionResults, TrialFailure,
};
pub use runner::{run_sweep, Benchmark, BenchmarkBuilder};
