//! Configuration system for SortBench.
//!
//! Load sweep configuration from TOML or YAML files to control the
//! algorithm, input sizes, distributions and seeding without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use sortbench_config::SweepConfig;
//! use sortbench_core::{DistributionKind, SortAlgorithm};
//!
//! let config = SweepConfig::from_toml_str(r#"
//!     name = "HeapSort sweep"
//!     algorithm = "heap_sort"
//!     sizes = [100, 1000, 10000]
//!     distributions = ["random", "descending"]
//!     seed = 7
//!
//!     [value_range]
//!     min = 1
//!     max = 500
//! "#).unwrap();
//!
//! assert_eq!(config.algorithm, SortAlgorithm::HeapSort);
//! assert_eq!(config.distributions, vec![DistributionKind::Random, DistributionKind::Descending]);
//! assert_eq!(config.effective_seed(), Some(7));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use sortbench_config::SweepConfig;
//!
//! let config = SweepConfig::load("sortbench.toml").unwrap_or_default();
//! assert_eq!(config.sizes, vec![100, 500, 1000, 5000, 10000]);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sortbench_core::{
    DataGenerator, DistributionKind, OrderedStyle, SortAlgorithm, SortBenchError, ValueRange,
};

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Seed used by the reproducible profiles.
pub const DEFAULT_SEED: u64 = 42;

fn default_name() -> String {
    "Sort benchmark".to_string()
}

fn default_sizes() -> Vec<i64> {
    vec![100, 500, 1000, 5000, 10000]
}

fn default_distributions() -> Vec<DistributionKind> {
    DistributionKind::ALL.to_vec()
}

fn default_seed() -> Option<u64> {
    Some(DEFAULT_SEED)
}

fn default_verify() -> bool {
    true
}

/// One benchmark sweep: an algorithm run over every (distribution, size)
/// pair.
///
/// Sizes are signed so that a bad entry in a file survives parsing and is
/// reported as a failure of that one trial rather than of the whole file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SweepConfig {
    /// Name shown in reports.
    #[serde(default = "default_name")]
    pub name: String,

    /// Strategy under test.
    #[serde(default)]
    pub algorithm: SortAlgorithm,

    /// Input sizes, visited in the given order.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<i64>,

    /// Distribution buckets, visited in the given order.
    #[serde(default = "default_distributions")]
    pub distributions: Vec<DistributionKind>,

    /// Seed for every generated input.
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,

    /// Draw fresh OS-seeded inputs and ignore `seed`.
    #[serde(default)]
    pub unseeded: bool,

    /// Bounds for random draws.
    #[serde(default)]
    pub value_range: ValueRange,

    /// How ascending/descending inputs are produced.
    #[serde(default)]
    pub ordered_style: OrderedStyle,

    /// Untimed sorts before each measurement.
    #[serde(default)]
    pub warmup_count: usize,

    /// Check each sorted output before recording it.
    #[serde(default = "default_verify")]
    pub verify: bool,

    /// CSV export path.
    #[serde(default)]
    pub csv_output: Option<String>,

    /// Markdown export path.
    #[serde(default)]
    pub markdown_output: Option<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            algorithm: SortAlgorithm::default(),
            sizes: default_sizes(),
            distributions: default_distributions(),
            seed: default_seed(),
            unseeded: false,
            value_range: ValueRange::default(),
            ordered_style: OrderedStyle::default(),
            warmup_count: 0,
            verify: true,
            csv_output: None,
            markdown_output: None,
        }
    }
}

impl SweepConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, YAML for `.yaml`/`.yml`, TOML
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`SweepConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Rejects sweeps that cannot produce any data point.
    ///
    /// Negative sizes pass: the runner records them as failed trials.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("sizes must not be empty".to_string()));
        }
        if self.distributions.is_empty() {
            return Err(ConfigError::Invalid(
                "distributions must not be empty".to_string(),
            ));
        }
        self.value_range
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// The seed actually used for generation.
    pub fn effective_seed(&self) -> Option<u64> {
        if self.unseeded {
            None
        } else {
            self.seed
        }
    }

    /// Generator matching `value_range` and `ordered_style`.
    ///
    /// Fails with `InvalidArgument` when `value_range` is inverted.
    pub fn generator(&self) -> Result<DataGenerator, SortBenchError> {
        DataGenerator::with_style(self.value_range, self.ordered_style)
    }

    /// Sets the report name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the algorithm under test.
    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the input sizes.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<i64>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets the distributions.
    pub fn with_distributions(mut self, distributions: impl Into<Vec<DistributionKind>>) -> Self {
        self.distributions = distributions.into();
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.unseeded = false;
        self
    }

    /// Draws fresh inputs on every trial.
    pub fn without_seed(mut self) -> Self {
        self.unseeded = true;
        self
    }

    /// Sets the random draw bounds.
    pub fn with_value_range(mut self, range: ValueRange) -> Self {
        self.value_range = range;
        self
    }

    /// Sets how ordered inputs are produced.
    pub fn with_ordered_style(mut self, style: OrderedStyle) -> Self {
        self.ordered_style = style;
        self
    }

    /// Sets the number of untimed warmup sorts per trial.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Enables or disables output verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Sets the output path for CSV export.
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output = Some(path.into());
        self
    }

    /// Sets the output path for Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output = Some(path.into());
        self
    }

    /// QuickSort sweep: sizes 100 to 10000, seeded progressions.
    pub fn quick_sort_profile() -> Self {
        Self::new()
            .with_name("QuickSort performance")
            .with_algorithm(SortAlgorithm::QuickSort)
    }

    /// HeapSort sweep: sizes 100 to 100000, seeded progressions.
    pub fn heap_sort_profile() -> Self {
        Self::new()
            .with_name("HeapSort performance")
            .with_algorithm(SortAlgorithm::HeapSort)
            .with_sizes(vec![100, 500, 1000, 5000, 10000, 20000, 50000, 100000])
    }

    /// BubbleSort sweep: sizes 10 to 1000, fresh sorted draws from
    /// `[1, 10000]`.
    pub fn bubble_sort_profile() -> Self {
        Self::new()
            .with_name("BubbleSort analysis")
            .with_algorithm(SortAlgorithm::BubbleSort)
            .with_sizes(vec![10, 50, 100, 500, 1000])
            .without_seed()
            .with_value_range(ValueRange { min: 1, max: 10_000 })
            .with_ordered_style(OrderedStyle::SortedDraw)
    }

    /// Built-in profile for `algorithm`.
    pub fn profile(algorithm: SortAlgorithm) -> Self {
        match algorithm {
            SortAlgorithm::QuickSort => Self::quick_sort_profile(),
            SortAlgorithm::HeapSort => Self::heap_sort_profile(),
            SortAlgorithm::BubbleSort => Self::bubble_sort_profile(),
        }
    }
}
