//! Sampling solutions into plottable curves
//!
//! A [`Curve`] is the common currency of the output layer: the CSV exporters
//! and the plotting functions all take one or several of them.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::math::Interval;
//! use heat_rs::output::sample_curve;
//! use heat_rs::solver::{Profile, SpectralConfig, SpectralSolver};
//!
//! let domain = Interval::new(0.0, 1.0);
//! let solver = SpectralSolver::new(domain, Profile::sine(1.0, 1.0), SpectralConfig::new(8, 400)).unwrap();
//!
//! let curve = sample_curve(&solver, domain, 0.1, 0.0).unwrap();
//! assert_eq!(curve.len(), 11);
//! ```

use crate::error::{DiffusionError, Result};
use crate::math::Interval;
use crate::solver::DiffusionSolver;

// =================================================================================================
// Curve
// =================================================================================================

/// Ordered `(x, y)` samples with a display label
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Builder pattern: set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// `(min, max)` of the y values, ignoring non-finite samples
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.y
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |bounds, v| match bounds {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Iterate over `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

// =================================================================================================
// Sampling
// =================================================================================================

/// Sample `f` every `dx` over `range`: `⌊length / dx⌋ + 1` points from `range.start()`
///
/// # Errors
///
/// - [`DiffusionError::Domain`] when `range` has zero length
/// - [`DiffusionError::Configuration`] when `dx` is not positive and finite
/// - the first error returned by `f`
pub fn sample_function<F>(f: F, range: Interval, dx: f64) -> Result<Curve>
where
    F: Fn(f64) -> Result<f64>,
{
    range.ensure_non_degenerate("sampling range")?;
    if !dx.is_finite() || dx <= 0.0 {
        return Err(DiffusionError::configuration(
            "dx",
            format!("sampling step must be positive and finite, got {}", dx),
        ));
    }

    let count = (range.length().abs() / dx).floor() as usize + 1;
    let direction = range.length().signum();

    let mut x = Vec::with_capacity(count);
    let mut y = Vec::with_capacity(count);
    for i in 0..count {
        let position = range.start() + direction * i as f64 * dx;
        x.push(position);
        y.push(f(position)?);
    }

    Ok(Curve::new(String::new(), x, y))
}

/// Sample a solver at time `t`, labelled with the solver name
pub fn sample_curve<S>(solver: &S, range: Interval, dx: f64, t: f64) -> Result<Curve>
where
    S: DiffusionSolver + ?Sized,
{
    let curve = sample_function(|x| solver.evaluate(x, t), range, dx)?;
    Ok(curve.with_label(solver.name()))
}

// =================================================================================================
// Comparison
// =================================================================================================

/// Pointwise difference between two sampled solutions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverComparison {
    /// Number of sampled positions
    pub points: usize,

    /// `max |a(x) - b(x)|`
    pub max_abs_difference: f64,

    /// `sqrt(mean((a(x) - b(x))²))`
    pub rms_difference: f64,
}

/// Sample both solvers on the same positions and measure their gap
///
/// # Example
///
/// ```rust
/// use heat_rs::math::Interval;
/// use heat_rs::output::compare_solvers;
/// use heat_rs::solver::{Profile, SpectralConfig, SpectralSolver};
///
/// let domain = Interval::new(0.0, 1.0);
/// let coarse = SpectralSolver::new(domain, Profile::sine(1.0, 1.0), SpectralConfig::new(2, 400)).unwrap();
/// let fine = SpectralSolver::new(domain, Profile::sine(1.0, 1.0), SpectralConfig::new(16, 400)).unwrap();
///
/// let comparison = compare_solvers(&coarse, &fine, domain, 0.05, 0.01).unwrap();
/// assert!(comparison.max_abs_difference < 1e-4);
/// ```
pub fn compare_solvers<A, B>(a: &A, b: &B, range: Interval, dx: f64, t: f64) -> Result<SolverComparison>
where
    A: DiffusionSolver + ?Sized,
    B: DiffusionSolver + ?Sized,
{
    let first = sample_curve(a, range, dx, t)?;
    let second = sample_curve(b, range, dx, t)?;
    Ok(compare_curves(&first, &second))
}

/// Gap between two curves sampled on the same positions
///
/// Only the common prefix is compared when the lengths differ.
pub fn compare_curves(first: &Curve, second: &Curve) -> SolverComparison {
    let differences: Vec<f64> = first
        .y
        .iter()
        .zip(second.y.iter())
        .map(|(a, b)| (a - b).abs())
        .collect();

    let points = differences.len();
    if points == 0 {
        return SolverComparison {
            points,
            max_abs_difference: 0.0,
            rms_difference: 0.0,
        };
    }

    let max_abs_difference = differences.iter().copied().fold(0.0, f64::max);
    let mean_square = differences.iter().map(|d| d * d).sum::<f64>() / points as f64;

    SolverComparison {
        points,
        max_abs_difference,
        rms_difference: mean_square.sqrt(),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
