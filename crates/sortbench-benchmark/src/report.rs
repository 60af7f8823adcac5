//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::BenchmarkReport;

fn optional(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// CSV exporter for benchmark reports.
///
/// One row per successful trial, with columns for distribution, size, time
/// in seconds, memory estimate and (for instrumented sorts) operation counts.
/// Failed trials are not exported.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkReport, CsvExporter};
/// use sortbench_core::SortAlgorithm;
///
/// let report = BenchmarkReport::new("Test", SortAlgorithm::QuickSort);
/// let csv = CsvExporter::to_string(&report);
/// assert!(csv.starts_with("distribution,size,time_s"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a report to a CSV string.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::{BenchmarkRecord, BenchmarkReport, CsvExporter};
    /// use sortbench_core::{DistributionKind, OperationCounts, SortAlgorithm};
    /// use std::time::Duration;
    ///
    /// let mut report = BenchmarkReport::new("Test", SortAlgorithm::BubbleSort);
    /// report.add_record(BenchmarkRecord::new(
    ///     DistributionKind::Ascending,
    ///     10,
    ///     Duration::from_micros(5),
    ///     104,
    ///     Some(OperationCounts { comparisons: 9, swaps: 0 }),
    /// ));
    ///
    /// let csv = CsvExporter::to_string(&report);
    /// assert!(csv.contains("ascending,10,0.000005000,104,9,0"));
    /// ```
    pub fn to_string(report: &BenchmarkReport) -> String {
        let mut output = String::new();

        // Header
        writeln!(
            output,
            "distribution,size,time_s,memory_bytes,comparisons,swaps"
        )
        .unwrap();

        // Data rows
        for record in report.records() {
            writeln!(
                output,
                "{},{},{:.9},{},{},{}",
                record.distribution,
                record.size,
                record.elapsed_secs(),
                record.memory_bytes,
                optional(record.comparisons),
                optional(record.swaps),
            )
            .unwrap();
        }

        output
    }

    /// Exports a report to a CSV file.
    pub fn to_file(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
        let csv = Self::to_string(report);
        fs::write(path, csv)
    }

    /// Writes a report as CSV to a writer.
    pub fn write<W: Write>(report: &BenchmarkReport, mut writer: W) -> io::Result<()> {
        let csv = Self::to_string(report);
        writer.write_all(csv.as_bytes())
    }
}

/// Markdown report generator.
///
/// Generates human-readable Markdown from a sweep: one table per
/// distribution, the failed trials, a complexity table and per-distribution
/// averages.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkReport, MarkdownReport};
/// use sortbench_core::SortAlgorithm;
///
/// let report = BenchmarkReport::new("Test", SortAlgorithm::HeapSort);
/// let md = MarkdownReport::to_string(&report);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No trials completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(report: &BenchmarkReport) -> String {
        let mut output = String::new();
        let instrumented = report.algorithm.is_instrumented();

        // Title
        writeln!(output, "# Benchmark: {}", report.name).unwrap();
        writeln!(output).unwrap();

        // Metadata
        writeln!(output, "- **Algorithm**: {}", report.algorithm).unwrap();
        writeln!(output, "- **Trials**: {}", report.record_count()).unwrap();
        writeln!(output, "- **Failures**: {}", report.failure_count()).unwrap();
        writeln!(output).unwrap();

        if report.record_count() == 0 {
            writeln!(output, "*No trials completed.*").unwrap();
            writeln!(output).unwrap();
        }

        for bucket in report {
            if bucket.records.is_empty() {
                continue;
            }
            writeln!(output, "## {}", bucket.distribution).unwrap();
            writeln!(output).unwrap();

            if instrumented {
                writeln!(
                    output,
                    "| Size | Time (ms) | Memory (bytes) | Comparisons | Swaps |"
                )
                .unwrap();
                writeln!(
                    output,
                    "|------|-----------|----------------|-------------|-------|"
                )
                .unwrap();
            } else {
                writeln!(output, "| Size | Time (ms) | Memory (bytes) |").unwrap();
                writeln!(output, "|------|-----------|----------------|").unwrap();
            }

            for record in &bucket.records {
                let millis = record.elapsed_secs() * 1000.0;
                if instrumented {
                    writeln!(
                        output,
                        "| {} | {:.4} | {} | {} | {} |",
                        record.size,
                        millis,
                        record.memory_bytes,
                        optional(record.comparisons),
                        optional(record.swaps),
                    )
                    .unwrap();
                } else {
                    writeln!(
                        output,
                        "| {} | {:.4} | {} |",
                        record.size, millis, record.memory_bytes
                    )
                    .unwrap();
                }
            }
            writeln!(output).unwrap();
        }

        // Failures
        if report.failure_count() > 0 {
            writeln!(output, "## Failed Trials").unwrap();
            writeln!(output).unwrap();
            for failure in report.failures() {
                writeln!(
                    output,
                    "- {} / size {}: {}",
                    failure.distribution, failure.size, failure.message
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }

        if report.record_count() > 0 {
            Self::write_complexity(&mut output, report);
            Self::write_averages(&mut output, report);
        }

        output
    }

    fn write_complexity(output: &mut String, report: &BenchmarkReport) {
        writeln!(output, "## Complexity").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Distribution | Size | T(n) (s) | T(n)/n·log2(n) |").unwrap();
        writeln!(output, "|--------------|------|----------|----------------|").unwrap();

        for bucket in report {
            for (record, ratio) in bucket.records.iter().zip(bucket.complexity_ratios()) {
                writeln!(
                    output,
                    "| {} | {} | {:.6} | {:.3e} |",
                    bucket.distribution,
                    record.size,
                    record.elapsed_secs(),
                    ratio
                )
                .unwrap();
            }
        }
        writeln!(output).unwrap();
    }

    fn write_averages(output: &mut String, report: &BenchmarkReport) {
        writeln!(output, "## Average Time").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Distribution | Avg Time (ms) |").unwrap();
        writeln!(output, "|--------------|---------------|").unwrap();

        for bucket in report {
            if bucket.records.is_empty() {
                continue;
            }
            writeln!(
                output,
                "| {} | {:.4} |",
                bucket.distribution,
                bucket.average_elapsed().as_secs_f64() * 1000.0
            )
            .unwrap();
        }
    }

    /// Writes Markdown report to a file.
    pub fn to_file(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
        let md = Self::to_string(report);
        fs::write(path, md)
    }

    /// Writes Markdown report to a writer.
    pub fn write<W: Write>(report: &BenchmarkReport, mut writer: W) -> io::Result<()> {
        let md = Self::to_string(report);
        writer.write_all(md.as_bytes())
    }
}

/// Generates a comparison report for multiple sweeps.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkReport, MarkdownReport};
/// use sortbench_core::SortAlgorithm;
///
/// let quick = BenchmarkReport::new("Test", SortAlgorithm::QuickSort);
/// let heap = BenchmarkReport::new("Test", SortAlgorithm::HeapSort);
///
/// let comparison = MarkdownReport::comparison(&[&quick, &heap]);
/// assert!(comparison.contains("## Comparison"));
/// assert!(comparison.contains("| HeapSort |"));
/// ```
impl MarkdownReport {
    /// Generates a comparison table: one row per (algorithm, distribution).
    pub fn comparison(reports: &[&BenchmarkReport]) -> String {
        let mut output = String::new();

        writeln!(output, "## Comparison").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Algorithm | Distribution | Trials | Avg Time (ms) | Total Time (ms) |"
        )
        .unwrap();
        writeln!(
            output,
            "|-----------|--------------|--------|---------------|-----------------|"
        )
        .unwrap();

        for report in reports {
            if report.iter().next().is_none() {
                writeln!(output, "| {} | N/A | 0 | N/A | N/A |", report.algorithm).unwrap();
                continue;
            }
            for bucket in report.iter() {
                let total: f64 = bucket.records.iter().map(|r| r.elapsed_secs()).sum();
                writeln!(
                    output,
                    "| {} | {} | {} | {:.4} | {:.4} |",
                    report.algorithm,
                    bucket.distribution,
                    bucket.records.len(),
                    bucket.average_elapsed().as_secs_f64() * 1000.0,
                    total * 1000.0,
                )
                .unwrap();
            }
        }

        output
    }
}
