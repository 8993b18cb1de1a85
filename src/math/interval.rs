//! One-dimensional intervals and linear remapping between them
//!
//! Every component of the crate works in its own coordinate system: the grid
//! works in index space `[0, N-1]`, Fourier bases in `[-π, π]`, polynomial
//! bases in `[-1, 1]`, and the caller in its physical domain. Moving between
//! them always goes through [`convert_range`].

use std::f64::consts::PI;
use std::fmt;

use crate::error::{DiffusionError, Result};

// =================================================================================================
// Interval
// =================================================================================================

/// Immutable pair `(start, end)`
///
/// `end` may be smaller than `start`; the length is then negative and the
/// mapping reverses orientation. Only zero-length intervals are rejected, and
/// only where they are used as a mapping source/target or a quadrature range.
///
/// # Example
///
/// ```rust
/// use heat_rs::math::Interval;
///
/// let unit = Interval::new(0.0, 1.0);
/// assert_eq!(unit.length(), 1.0);
/// assert_eq!(unit.midpoint(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Create an interval from its two end points
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `[-1, 1]`, canonical domain of the polynomial bases
    pub const fn unit_symmetric() -> Self {
        Self::new(-1.0, 1.0)
    }

    /// `[-π, π]`, canonical domain of the Fourier bases
    pub const fn periodic() -> Self {
        Self::new(-PI, PI)
    }

    /// `[0, N-1]`, index space of an `N`-point grid
    pub fn indices(len: usize) -> Self {
        Self::new(0.0, len.saturating_sub(1) as f64)
    }

    /// Smallest interval symmetric about the origin that contains `self`
    pub fn symmetric_hull(&self) -> Self {
        let half = self.start.abs().max(self.end.abs());
        Self::new(-half, half)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// `end - start`
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * self.length() + self.start
    }

    /// True if `x` lies between the two end points (inclusive)
    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        x >= lo && x <= hi
    }

    /// Fails with a domain error unless the length is finite and non-zero
    pub fn ensure_non_degenerate(&self, context: &'static str) -> Result<()> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(DiffusionError::Domain {
                start: self.start,
                end: self.end,
                context,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

// =================================================================================================
// Mapping
// =================================================================================================

/// Linearly remap `x` from the coordinate system of `from` into that of `to`
///
/// ```text
/// result = ((x - from.start) / from.length) * to.length + to.start
/// ```
///
/// # Errors
///
/// [`DiffusionError::Domain`] if either interval has zero length.
///
/// # Example
///
/// ```rust
/// use heat_rs::math::{convert_range, Interval};
///
/// let physical = Interval::new(0.0, 1.0);
/// let grid = Interval::indices(5);
/// assert_eq!(convert_range(0.5, physical, grid).unwrap(), 2.0);
/// ```
pub fn convert_range(x: f64, from: Interval, to: Interval) -> Result<f64> {
    from.ensure_non_degenerate("convert_range (source)")?;
    to.ensure_non_degenerate("convert_range (target)")?;

    let normalized = (x - from.start) / from.length();
    Ok(normalized * to.length() + to.start)
}

// =================================================================================================
// Tests
// =================================================================================================
