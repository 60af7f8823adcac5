//! Benchmark result types.

use std::time::Duration;

use sortbench_core::{DistributionKind, OperationCounts, SortAlgorithm};

/// Result of a single timed sort.
///
/// Contains timing, the memory estimate and, for instrumented strategies,
/// operation counts.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Shape of the input.
    pub distribution: DistributionKind,
    /// Number of elements sorted.
    pub size: usize,
    /// Wall-clock duration of the sort.
    pub elapsed: Duration,
    /// Peak shallow size of input and output, in bytes.
    pub memory_bytes: usize,
    /// Comparisons performed (instrumented strategies only).
    pub comparisons: Option<u64>,
    /// Swaps performed (instrumented strategies only).
    pub swaps: Option<u64>,
}

impl BenchmarkRecord {
    /// Creates a record, splitting optional counts into their columns.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::BenchmarkRecord;
    /// use sortbench_core::{DistributionKind, OperationCounts};
    /// use std::time::Duration;
    ///
    /// let counts = OperationCounts { comparisons: 9, swaps: 4 };
    /// let record = BenchmarkRecord::new(
    ///     DistributionKind::Random,
    ///     10,
    ///     Duration::from_millis(250),
    ///     104,
    ///     Some(counts),
    /// );
    ///
    /// assert_eq!(record.comparisons, Some(9));
    /// assert!((record.elapsed_secs() - 0.25).abs() < 1e-9);
    /// ```
    pub fn new(
        distribution: DistributionKind,
        size: usize,
        elapsed: Duration,
        memory_bytes: usize,
        counts: Option<OperationCounts>,
    ) -> Self {
        Self {
            distribution,
            size,
            elapsed,
            memory_bytes,
            comparisons: counts.map(|c| c.comparisons),
            swaps: counts.map(|c| c.swaps),
        }
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Operation counts, when recorded.
    pub fn counts(&self) -> Option<OperationCounts> {
        match (self.comparisons, self.swaps) {
            (Some(comparisons), Some(swaps)) => Some(OperationCounts { comparisons, swaps }),
            _ => None,
        }
    }
}

/// A trial that produced no measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialFailure {
    pub distribution: DistributionKind,
    /// Size as requested, which may be the cause of the failure.
    pub size: i64,
    pub message: String,
}

/// All trials of one distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionResults {
    pub distribution: DistributionKind,
    /// Successful trials, in the order the sizes were visited.
    pub records: Vec<BenchmarkRecord>,
    pub failures: Vec<TrialFailure>,
}

impl DistributionResults {
    pub fn new(distribution: DistributionKind) -> Self {
        Self {
            distribution,
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Sizes of the successful trials.
    pub fn sizes(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.size).collect()
    }

    /// Average sort time over successful trials.
    pub fn average_elapsed(&self) -> Duration {
        if self.records.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.records.iter().map(|r| r.elapsed).sum();
        total / self.records.len() as u32
    }

    /// `T(n) / (n log2 n)` for each record, the first one reported as 0.
    pub fn complexity_ratios(&self) -> Vec<f64> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                if index == 0 {
                    0.0
                } else {
                    complexity_ratio(record.size, record.elapsed_secs())
                }
            })
            .collect()
    }
}

/// `elapsed / (n * (bit_length(n) - 1))`, or 0 when the divisor is 0.
///
/// `bit_length(n) - 1` is `floor(log2 n)`.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::complexity_ratio;
///
/// // 1024 * 10 = 10240
/// assert!((complexity_ratio(1024, 10.24) - 0.001).abs() < 1e-12);
/// assert_eq!(complexity_ratio(1, 3.0), 0.0);
/// assert_eq!(complexity_ratio(0, 3.0), 0.0);
/// ```
pub fn complexity_ratio(size: usize, elapsed_secs: f64) -> f64 {
    if size == 0 {
        return 0.0;
    }
    let log2 = (usize::BITS - 1 - size.leading_zeros()) as f64;
    let divisor = size as f64 * log2;
    if divisor == 0.0 {
        0.0
    } else {
        elapsed_secs / divisor
    }
}

/// Results of one sweep, grouped by distribution in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Sweep name.
    pub name: String,
    /// Strategy measured.
    pub algorithm: SortAlgorithm,
    buckets: Vec<DistributionResults>,
}

impl BenchmarkReport {
    /// Creates an empty report.
    pub fn new(name: impl Into<String>, algorithm: SortAlgorithm) -> Self {
        Self {
            name: name.into(),
            algorithm,
            buckets: Vec::new(),
        }
    }

    /// Returns the bucket for `distribution`, creating it at the end if
    /// missing.
    pub(crate) fn bucket_mut(&mut self, distribution: DistributionKind) -> &mut DistributionResults {
        let position = match self
            .buckets
            .iter()
            .position(|b| b.distribution == distribution)
        {
            Some(position) => position,
            None => {
                self.buckets.push(DistributionResults::new(distribution));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[position]
    }

    /// Appends a successful trial to its distribution's bucket.
    pub fn add_record(&mut self, record: BenchmarkRecord) {
        self.bucket_mut(record.distribution).records.push(record);
    }

    /// Appends a failed trial to its distribution's bucket.
    pub fn add_failure(&mut self, failure: TrialFailure) {
        self.bucket_mut(failure.distribution).failures.push(failure);
    }

    /// Returns the bucket for `distribution`.
    pub fn get(&self, distribution: DistributionKind) -> Option<&DistributionResults> {
        self.buckets.iter().find(|b| b.distribution == distribution)
    }

    /// Buckets in request order.
    pub fn iter(&self) -> impl Iterator<Item = &DistributionResults> {
        self.buckets.iter()
    }

    /// Every successful record, bucket by bucket.
    pub fn records(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.buckets.iter().flat_map(|b| b.records.iter())
    }

    /// Every failed trial, bucket by bucket.
    pub fn failures(&self) -> impl Iterator<Item = &TrialFailure> {
        self.buckets.iter().flat_map(|b| b.failures.iter())
    }

    /// Number of successful trials.
    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(|b| b.records.len()).sum()
    }

    /// Number of failed trials.
    pub fn failure_count(&self) -> usize {
        self.buckets.iter().map(|b| b.failures.len()).sum()
    }

    /// Total time spent sorting across all records.
    pub fn total_elapsed(&self) -> Duration {
        self.records().map(|r| r.elapsed).sum()
    }
}

impl<'a> IntoIterator for &'a BenchmarkReport {
    type Item = &'a DistributionResults;
    type IntoIter = std::slice::Iter<'a, DistributionResults>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
