//! Deterministic and randomized input generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::distribution::{DistributionKind, OrderedStyle, ValueRange};
use crate::error::{Result, SortBenchError};

/// Produces integer sequences of a requested size and shape.
///
/// The generator holds no random state. Randomness is either derived from an
/// explicit seed on every call or borrowed from the caller through
/// [`DataGenerator::generate_with`].
///
/// # Example
///
/// ```
/// use sortbench_core::{DataGenerator, DistributionKind};
///
/// let generator = DataGenerator::new();
/// let a = generator.generate(100, DistributionKind::Random, Some(42));
/// let b = generator.generate(100, DistributionKind::Random, Some(42));
/// assert_eq!(a, b);
///
/// assert_eq!(generator.generate(4, DistributionKind::Descending, None), vec![4, 3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataGenerator {
    range: ValueRange,
    style: OrderedStyle,
}

impl DataGenerator {
    /// Progression-style generator drawing from `[0, 100000]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered kinds are arithmetic progressions; random draws use `range`.
    ///
    /// # Errors
    ///
    /// [`SortBenchError::InvalidArgument`] when `range` is inverted.
    pub fn progression(range: ValueRange) -> Result<Self> {
        Self::with_style(range, OrderedStyle::Progression)
    }

    /// Ordered kinds are sorted random draws from `range`.
    ///
    /// # Errors
    ///
    /// [`SortBenchError::InvalidArgument`] when `range` is inverted.
    pub fn sorted_draw(range: ValueRange) -> Result<Self> {
        Self::with_style(range, OrderedStyle::SortedDraw)
    }

    /// Builds a generator from its parts, validating the range.
    pub fn with_style(range: ValueRange, style: OrderedStyle) -> Result<Self> {
        range.validate()?;
        Ok(Self { range, style })
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn style(&self) -> OrderedStyle {
        self.style
    }

    /// Generates `size` elements of the given shape.
    ///
    /// With `Some(seed)` the rng is re-created from the seed on every call,
    /// so identical `(size, kind, seed)` always yields identical output.
    /// With `None` the rng is seeded from the operating system.
    pub fn generate(&self, size: usize, kind: DistributionKind, seed: Option<u64>) -> Vec<i64> {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.generate_with(size, kind, &mut rng)
    }

    /// Generates `size` elements using a caller-supplied random source.
    ///
    /// Progression shapes do not touch `rng`.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        size: usize,
        kind: DistributionKind,
        rng: &mut R,
    ) -> Vec<i64> {
        match (kind, self.style) {
            (DistributionKind::Random, _) => self.draw(size, rng),
            (DistributionKind::Ascending, OrderedStyle::Progression) => {
                (0..size as i64).collect()
            }
            (DistributionKind::Descending, OrderedStyle::Progression) => {
                (1..=size as i64).rev().collect()
            }
            (DistributionKind::Ascending, OrderedStyle::SortedDraw) => {
                let mut values = self.draw(size, rng);
                values.sort_unstable();
                values
            }
            (DistributionKind::Descending, OrderedStyle::SortedDraw) => {
                let mut values = self.draw(size, rng);
                values.sort_unstable_by(|a, b| b.cmp(a));
                values
            }
        }
    }

    /// Boundary entry point taking a signed size and a string tag.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::InvalidArgument`] when `size` is negative or
    /// `kind` is not a recognized tag.
    pub fn generate_checked(&self, size: i64, kind: &str, seed: Option<u64>) -> Result<Vec<i64>> {
        let size = validate_size(size)?;
        let kind: DistributionKind = kind.parse()?;
        Ok(self.generate(size, kind, seed))
    }

    fn draw<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<i64> {
        let ValueRange { min, max } = self.range;
        (0..size).map(|_| rng.random_range(min..=max)).collect()
    }
}

/// Converts a signed size into a length, rejecting negatives.
pub fn validate_size(size: i64) -> Result<usize> {
    usize::try_from(size)
        .map_err(|_| SortBenchError::invalid(format!("size must be non-negative, got {}", size)))
}
