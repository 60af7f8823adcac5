//! Benchmark runner.

use std::time::Instant;

use sortbench_config::SweepConfig;
use sortbench_core::{validate_size, DistributionKind, Result, SortAlgorithm, SortBenchError};
use tracing::{debug, info, warn};

use crate::memory::peak_estimate;
use crate::result::{BenchmarkRecord, BenchmarkReport, TrialFailure};

/// Sweep runner.
///
/// Executes the configured algorithm once per (distribution, size) pair,
/// generating a fresh input for every trial. A trial that fails is recorded
/// against its pair and the sweep moves on.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::Benchmark;
/// use sortbench_config::SweepConfig;
/// use sortbench_core::{DistributionKind, SortAlgorithm};
///
/// let config = SweepConfig::new()
///     .with_algorithm(SortAlgorithm::BubbleSort)
///     .with_sizes(vec![10, 20])
///     .with_distributions(vec![DistributionKind::Ascending]);
///
/// let report = Benchmark::new(config).run();
/// let ascending = report.get(DistributionKind::Ascending).unwrap();
/// assert_eq!(ascending.sizes(), vec![10, 20]);
/// assert_eq!(ascending.records[0].swaps, Some(0));
/// assert_eq!(ascending.records[0].comparisons, Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: SweepConfig,
}

impl Benchmark {
    /// Creates a runner for `config`.
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Runs every trial and returns the grouped results.
    ///
    /// Distributions are visited in configured order, and sizes in configured
    /// order within each distribution.
    pub fn run(&self) -> BenchmarkReport {
        let algorithm = self.config.algorithm;
        let mut report = BenchmarkReport::new(self.config.name.clone(), algorithm);

        info!(
            event = "sweep_start",
            name = %self.config.name,
            algorithm = algorithm.name(),
            distribution_count = self.config.distributions.len() as u64,
            size_count = self.config.sizes.len() as u64,
            seeded = self.config.effective_seed().is_some(),
        );
        let sweep_start = Instant::now();

        for &distribution in &self.config.distributions {
            // An empty bucket still shows up in the report when all trials fail.
            report.bucket_mut(distribution);

            for &size in &self.config.sizes {
                match self.run_trial(distribution, size) {
                    Ok(record) => {
                        debug!(
                            event = "trial_end",
                            algorithm = algorithm.name(),
                            distribution = distribution.name(),
                            size = record.size as u64,
                            elapsed_ns = record.elapsed.as_nanos() as u64,
                            memory_bytes = record.memory_bytes as u64,
                            comparisons = record.comparisons,
                            swaps = record.swaps,
                        );
                        report.add_record(record);
                    }
                    Err(err) => {
                        warn!(
                            event = "trial_failed",
                            algorithm = algorithm.name(),
                            distribution = distribution.name(),
                            size,
                            error = %err,
                        );
                        report.add_failure(TrialFailure {
                            distribution,
                            size,
                            message: err.to_string(),
                        });
                    }
                }
            }
        }

        info!(
            event = "sweep_end",
            name = %self.config.name,
            algorithm = algorithm.name(),
            trials = report.record_count() as u64,
            failures = report.failure_count() as u64,
            duration_ms = sweep_start.elapsed().as_millis() as u64,
        );

        report
    }

    /// Runs one timed trial.
    ///
    /// # Errors
    ///
    /// [`SortBenchError::InvalidArgument`] for a negative size or an inverted
    /// value range, and [`SortBenchError::Internal`] when verification finds
    /// unsorted output.
    pub fn run_trial(&self, distribution: DistributionKind, size: i64) -> Result<BenchmarkRecord> {
        let len = validate_size(size)?;
        let generator = self.config.generator()?;

        let algorithm = self.config.algorithm;
        let input = generator.generate(len, distribution, self.config.effective_seed());

        for _ in 0..self.config.warmup_count {
            let _ = algorithm.sort(&input);
        }

        let start = Instant::now();
        let outcome = algorithm.sort(&input);
        let elapsed = start.elapsed();

        if self.config.verify && !is_non_descending(&outcome.sorted) {
            return Err(SortBenchError::Internal(format!(
                "{} produced unsorted output for {} input of size {}",
                algorithm, distribution, len
            )));
        }

        let memory_bytes = peak_estimate(&input, &outcome.sorted);
        Ok(BenchmarkRecord::new(
            distribution,
            len,
            elapsed,
            memory_bytes,
            outcome.counts,
        ))
    }
}

fn is_non_descending(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Runs `algorithm` over `sizes` x `distributions` with default settings
/// (seed 42, progression inputs drawn from `[0, 100000]`).
pub fn run_sweep(
    sizes: &[i64],
    distributions: &[DistributionKind],
    algorithm: SortAlgorithm,
) -> BenchmarkReport {
    let config = SweepConfig::new()
        .with_name(format!("{} sweep", algorithm))
        .with_algorithm(algorithm)
        .with_sizes(sizes.to_vec())
        .with_distributions(distributions.to_vec());
    Benchmark::new(config).run()
}

/// Builder for creating benchmarks with fluent API.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkBuilder {
    config: SweepConfig,
}

impl BenchmarkBuilder {
    /// Creates a new benchmark builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: SweepConfig::new().with_name(name),
        }
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.config = self.config.with_algorithm(algorithm);
        self
    }

    /// Sets the sizes.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<i64>>) -> Self {
        self.config = self.config.with_sizes(sizes);
        self
    }

    /// Sets the distributions.
    pub fn with_distributions(mut self, distributions: impl Into<Vec<DistributionKind>>) -> Self {
        self.config = self.config.with_distributions(distributions);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Sets the warmup count.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.config = self.config.with_warmup_count(count);
        self
    }

    /// Builds the benchmark.
    pub fn build(self) -> Benchmark {
        Benchmark::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::{OrderedStyle, ValueRange};
    use sortbench_test::{assert_sorted_permutation, is_sorted};

    fn small_config(algorithm: SortAlgorithm) -> SweepConfig {
        SweepConfig::new()
            .with_algorithm(algorithm)
            .with_sizes(vec![5, 50, 500])
    }

    #[test]
    fn test_report_shape() {
        for algorithm in SortAlgorithm::ALL {
            let report = Benchmark::new(small_config(algorithm)).run();
            assert_eq!(report.algorithm, algorithm);
            assert_eq!(report.iter().count(), 3);
            for bucket in &report {
                assert_eq!(bucket.sizes(), vec![5, 50, 500]);
                assert!(bucket.failures.is_empty());
                for record in &bucket.records {
                    assert_eq!(record.comparisons.is_some(), algorithm.is_instrumented());
                    assert!(record.memory_bytes >= record.size * std::mem::size_of::<i64>());
                }
            }
        }
    }

    #[test]
    fn test_negative_size_recorded_and_sweep_continues() {
        let config = SweepConfig::new()
            .with_sizes(vec![10, -3, 30])
            .with_distributions(vec![DistributionKind::Random, DistributionKind::Descending]);
        let report = Benchmark::new(config).run();

        assert_eq!(report.failure_count(), 2);
        for bucket in &report {
            assert_eq!(bucket.sizes(), vec![10, 30]);
            assert_eq!(bucket.failures.len(), 1);
            assert_eq!(bucket.failures[0].size, -3);
            assert!(bucket.failures[0].message.contains("Invalid argument"));
        }
    }

    #[test]
    fn test_inverted_range_fails_each_random_trial() {
        let config = SweepConfig::new()
            .with_sizes(vec![4, 8])
            .with_distributions(vec![DistributionKind::Random])
            .with_value_range(ValueRange { min: 9, max: 1 });
        let report = Benchmark::new(config).run();
        assert_eq!(report.record_count(), 0);
        assert_eq!(report.failure_count(), 2);
        assert!(report.get(DistributionKind::Random).is_some());
    }

    #[test]
    fn test_bubble_counts_match_distribution() {
        let config = SweepConfig::new()
            .with_algorithm(SortAlgorithm::BubbleSort)
            .with_sizes(vec![1, 10, 40]);
        let benchmark = Benchmark::new(config);

        let ascending = benchmark.run_trial(DistributionKind::Ascending, 40).unwrap();
        assert_eq!(ascending.swaps, Some(0));
        assert_eq!(ascending.comparisons, Some(39));

        let descending = benchmark.run_trial(DistributionKind::Descending, 40).unwrap();
        assert_eq!(descending.comparisons, Some(40 * 39 / 2));
        assert_eq!(descending.swaps, Some(40 * 39 / 2));

        let empty = benchmark.run_trial(DistributionKind::Random, 0).unwrap();
        assert_eq!(empty.comparisons, Some(0));
        assert_eq!(empty.swaps, Some(0));
    }

    #[test]
    fn test_seeded_trials_repeat_counts() {
        let config = SweepConfig::new()
            .with_algorithm(SortAlgorithm::BubbleSort)
            .with_seed(42);
        let benchmark = Benchmark::new(config);
        let a = benchmark.run_trial(DistributionKind::Random, 200).unwrap();
        let b = benchmark.run_trial(DistributionKind::Random, 200).unwrap();
        assert_eq!(a.counts(), b.counts());
    }

    #[test]
    fn test_sorted_draw_profile_runs() {
        let config = SweepConfig::bubble_sort_profile().with_sizes(vec![10, 50]);
        assert_eq!(config.ordered_style, OrderedStyle::SortedDraw);
        let report = Benchmark::new(config).run();
        assert_eq!(report.record_count(), 6);
        let descending = report.get(DistributionKind::Descending).unwrap();
        assert!(descending.records.iter().all(|r| r.swaps <= r.comparisons));
    }

    #[test]
    fn test_run_sweep_contract() {
        let report = run_sweep(
            &[100, 200],
            &[DistributionKind::Ascending],
            SortAlgorithm::HeapSort,
        );
        assert_eq!(report.iter().count(), 1);
        assert_eq!(report.get(DistributionKind::Ascending).unwrap().sizes(), vec![100, 200]);
    }

    #[test]
    fn test_builder() {
        let benchmark = BenchmarkBuilder::new("Built")
            .with_algorithm(SortAlgorithm::HeapSort)
            .with_sizes(vec![16])
            .with_distributions(vec![DistributionKind::Random])
            .with_seed(5)
            .with_warmup_count(2)
            .build();
        assert_eq!(benchmark.config().name, "Built");
        assert_eq!(benchmark.config().warmup_count, 2);
        assert_eq!(benchmark.run().record_count(), 1);
    }

    #[test]
    fn test_builder_from_config_without_verification() {
        let config = SweepConfig::new()
            .with_name("Unverified")
            .with_algorithm(SortAlgorithm::BubbleSort)
            .with_verify(false);
        let benchmark = BenchmarkBuilder::from_config(config)
            .with_sizes(vec![0, 25])
            .with_distributions(vec![DistributionKind::Descending])
            .build();
        assert_eq!(benchmark.config().name, "Unverified");
        assert!(!benchmark.config().verify);

        let report = benchmark.run();
        assert_eq!(report.record_count(), 2);
        assert_eq!(report.failure_count(), 0);
        let records = &report.get(DistributionKind::Descending).unwrap().records;
        assert_eq!(records[1].swaps, Some(25 * 24 / 2));
    }

    #[test]
    fn test_generated_input_is_what_gets_sorted() {
        let config = small_config(SortAlgorithm::QuickSort);
        let generator = config.generator().unwrap();
        let input = generator.generate(500, DistributionKind::Random, config.effective_seed());
        let outcome = config.algorithm.sort(&input);
        assert!(is_sorted(&outcome.sorted));
        assert_sorted_permutation(&input, &outcome.sorted);
    }
}
