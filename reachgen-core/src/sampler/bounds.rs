//! Inclusive ranges that shape parameters are drawn from.

use rand::Rng;

use crate::error::{GraphError, Result};

/// Inclusive integer range `[min, max]` for one shape parameter.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use reachgen_core::Bounds;
///
/// let nodes = Bounds::new("node count", 30, 200)?;
/// let mut rng = SmallRng::seed_from_u64(5);
/// assert!((30..=200).contains(&nodes.sample(&mut rng)));
/// assert_eq!(nodes.sample_capped(&mut rng, 10), 10);
/// assert!(Bounds::new("node count", 5, 4).is_err());
/// # Ok::<(), reachgen_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    name: &'static str,
    min: usize,
    max: usize,
}

impl Bounds {
    /// Creates the range `[min, max]` for the parameter `name`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidBounds`] when `min > max`.
    pub fn new(name: &'static str, min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(GraphError::InvalidBounds {
                name,
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { name, min, max })
    }

    /// Creates the single-value range `[value, value]`.
    #[must_use]
    pub const fn exact(name: &'static str, value: usize) -> Self {
        Self {
            name,
            min: value,
            max: value,
        }
    }

    /// Parameter the range applies to.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Draws uniformly from `[min, max]`.
    pub fn sample<R>(&self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        rng.gen_range(self.min..=self.max)
    }

    /// Draws uniformly from `[min, min(max, cap)]`, lowering `min` to the
    /// cap when it lies above it.
    pub fn sample_capped<R>(&self, rng: &mut R, cap: usize) -> usize
    where
        R: Rng + ?Sized,
    {
        draw_clamped(rng, self.min, self.max.min(cap))
    }
}

/// Inclusive real range `[min, max]`, used for density multipliers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioBounds {
    min: f64,
    max: f64,
}

impl RatioBounds {
    /// Creates the range `[min, max]` for the parameter `name`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidBounds`] when either end is not finite
    /// or `min > max`.
    pub fn new(name: &'static str, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(GraphError::InvalidBounds {
                name,
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Draws uniformly from `[min, max]`.
    pub fn sample<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        rng.gen_range(self.min..=self.max)
    }
}

/// Draws uniformly from `[min(min, max), max]`.
pub(crate) fn draw_clamped<R>(rng: &mut R, min: usize, max: usize) -> usize
where
    R: Rng + ?Sized,
{
    rng.gen_range(min.min(max)..=max)
}
