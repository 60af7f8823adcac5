//! Input distribution shapes.
//!
//! A [`DistributionKind`] names the shape of a generated sequence. How the two
//! ordered shapes are filled is decided by [`OrderedStyle`], and the bounds of
//! random draws by [`ValueRange`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SortBenchError};

/// Shape of a generated input sequence.
///
/// String tags are only parsed at the configuration/CLI boundary. Besides the
/// canonical names, the legacy tags `sorted`, `reverse`, `aleatorio`,
/// `ordenado` and `inverso` are accepted.
///
/// # Example
///
/// ```
/// use sortbench_core::DistributionKind;
///
/// let kind: DistributionKind = "reverse".parse().unwrap();
/// assert_eq!(kind, DistributionKind::Descending);
/// assert!("zigzag".parse::<DistributionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistributionKind {
    /// Independent uniform draws.
    #[cfg_attr(feature = "serde", serde(alias = "aleatorio"))]
    Random,
    /// Non-descending order.
    #[cfg_attr(feature = "serde", serde(alias = "sorted", alias = "ordenado"))]
    Ascending,
    /// Non-ascending order.
    #[cfg_attr(feature = "serde", serde(alias = "reverse", alias = "inverso"))]
    Descending,
}

impl DistributionKind {
    /// All kinds, in the order sweeps visit them by default.
    pub const ALL: [DistributionKind; 3] = [
        DistributionKind::Random,
        DistributionKind::Ascending,
        DistributionKind::Descending,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            DistributionKind::Random => "random",
            DistributionKind::Ascending => "ascending",
            DistributionKind::Descending => "descending",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "aleatorio" => Ok(DistributionKind::Random),
            "ascending" | "sorted" | "ordenado" => Ok(DistributionKind::Ascending),
            "descending" | "reverse" | "inverso" => Ok(DistributionKind::Descending),
            other => Err(SortBenchError::invalid(format!(
                "unknown distribution '{}' (expected random, ascending or descending)",
                other
            ))),
        }
    }
}

/// How the ordered kinds ([`DistributionKind::Ascending`] and
/// [`DistributionKind::Descending`]) are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderedStyle {
    /// Arithmetic progression: `0..n` ascending, `n..=1` descending.
    #[default]
    Progression,
    /// A random draw from the value range, sorted afterwards.
    SortedDraw,
}

/// Inclusive bounds for random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    /// Creates a range, rejecting `min > max`.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_core::ValueRange;
    ///
    /// assert!(ValueRange::new(1, 10_000).is_ok());
    /// assert!(ValueRange::new(10, 1).is_err());
    /// ```
    pub fn new(min: i64, max: i64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Checks `min <= max`. Ranges built from struct literals or
    /// deserialization skip [`ValueRange::new`], so callers re-check here.
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(SortBenchError::invalid(format!(
                "value range is inverted: [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0, max: 100_000 }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
