//! Projection of arbitrary functions onto an orthogonal basis
//!
//! # Algorithm
//!
//! For each mode `i` in `0..=degree`:
//!
//! ```text
//! c_i = normalization_constant(i) · ∫_{domain} φ_i(x) · f(x) dx
//! ```
//!
//! where the integral uses [`crate::math::integrate`]. The fitted function is
//! then `x ↦ Σ c_i · φ_i(x)`.
//!
//! Nothing is cached: every call recomputes the coefficients from scratch.
//!
//! # Coordinates
//!
//! [`project_coefficients`] and [`reconstruct`] work in the canonical domain
//! of the basis. [`fit`] and [`fit_fourier`] wrap them so that both the input
//! function and the fitted result live in a caller-chosen physical range.

use nalgebra::DVector;

use crate::error::Result;
use crate::math::{convert_range, try_integrate_weighted, Interval};
use crate::spectral::OrthogonalBasis;

// =================================================================================================
// Coefficients
// =================================================================================================

/// Spectral coefficients of `f` (canonical coordinates), modes `0..=degree`
///
/// # Errors
///
/// [`DiffusionError::Configuration`](crate::DiffusionError::Configuration)
/// when `integration_points == 0`.
///
/// # Example
///
/// ```rust
/// use heat_rs::spectral::{project_coefficients, OrthogonalBasis};
///
/// let c = project_coefficients(|x| x.sin(), OrthogonalBasis::FourierOdd, 3, 400).unwrap();
/// assert!((c[1] - 1.0).abs() < 1e-4);
/// assert!(c[2].abs() < 1e-4);
/// ```
pub fn project_coefficients<F>(
    f: F,
    basis: OrthogonalBasis,
    degree: usize,
    integration_points: usize,
) -> Result<DVector<f64>>
where
    F: Fn(f64) -> f64,
{
    try_project_coefficients(|x| Ok(f(x)), basis, degree, integration_points)
}

/// Same as [`project_coefficients`] for a fallible function
pub fn try_project_coefficients<F>(
    f: F,
    basis: OrthogonalBasis,
    degree: usize,
    integration_points: usize,
) -> Result<DVector<f64>>
where
    F: Fn(f64) -> Result<f64>,
{
    let domain = basis.canonical_domain();
    let mut coefficients = DVector::zeros(degree + 1);

    for mode in 0..=degree {
        let integral = try_integrate_weighted(
            |x| Ok(basis.basis_value(mode, x) * f(x)?),
            integration_points,
            domain,
            |_| 1.0,
        )?;
        coefficients[mode] = integral * basis.normalization_constant(mode);
    }

    Ok(coefficients)
}

/// Evaluate `Σ coefficients[i] · φ_i(x)` at a canonical coordinate
pub fn reconstruct(coefficients: &DVector<f64>, basis: OrthogonalBasis, x: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(mode, c)| c * basis.basis_value(mode, x))
        .sum()
}

// =================================================================================================
// Fitted functions
// =================================================================================================

/// Truncated expansion of a function in one basis, evaluable on a physical range
///
/// # Example
///
/// ```rust
/// use heat_rs::math::Interval;
/// use heat_rs::spectral::{fit, OrthogonalBasis};
///
/// let range = Interval::new(0.0, 2.0);
/// let fitted = fit(|x| x * x, OrthogonalBasis::Legendre, 4, 2000, range).unwrap();
/// assert!((fitted.evaluate(1.5).unwrap() - 2.25).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct FittedFunction {
    basis: OrthogonalBasis,
    coefficients: DVector<f64>,
    range: Interval,
}

impl FittedFunction {
    /// Wrap already computed coefficients
    ///
    /// `range` is the physical interval mapped onto the canonical domain.
    pub fn new(basis: OrthogonalBasis, coefficients: DVector<f64>, range: Interval) -> Result<Self> {
        range.ensure_non_degenerate("fitted function range")?;
        Ok(Self {
            basis,
            coefficients,
            range,
        })
    }

    pub fn basis(&self) -> OrthogonalBasis {
        self.basis
    }

    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    pub fn range(&self) -> Interval {
        self.range
    }

    /// Highest mode kept in the expansion
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Value of the expansion at a physical coordinate
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let s = convert_range(x, self.range, self.basis.canonical_domain())?;
        Ok(reconstruct(&self.coefficients, self.basis, s))
    }
}

/// Fit `f`, defined on the physical `range`, with `degree + 1` modes of `basis`
pub fn fit<F>(
    f: F,
    basis: OrthogonalBasis,
    degree: usize,
    integration_points: usize,
    range: Interval,
) -> Result<FittedFunction>
where
    F: Fn(f64) -> f64,
{
    range.ensure_non_degenerate("fit range")?;
    let canonical = basis.canonical_domain();

    let coefficients = try_project_coefficients(
        |s| Ok(f(convert_range(s, canonical, range)?)),
        basis,
        degree,
        integration_points,
    )?;

    FittedFunction::new(basis, coefficients, range)
}

/// Full Fourier series: cosine part plus sine part
#[derive(Debug, Clone)]
pub struct FourierSeries {
    even: FittedFunction,
    odd: FittedFunction,
}

impl FourierSeries {
    /// Cosine coefficients `a_0..a_degree`
    pub fn cosine_coefficients(&self) -> &DVector<f64> {
        self.even.coefficients()
    }

    /// Sine coefficients `b_0..b_degree` (`b_0` is always 0)
    pub fn sine_coefficients(&self) -> &DVector<f64> {
        self.odd.coefficients()
    }

    pub fn evaluate(&self, x: f64) -> Result<f64> {
        Ok(self.even.evaluate(x)? + self.odd.evaluate(x)?)
    }
}

/// Fit `f` on `range` with a full Fourier series of the given degree
///
/// The physical range is treated as one period.
pub fn fit_fourier<F>(
    f: F,
    degree: usize,
    integration_points: usize,
    range: Interval,
) -> Result<FourierSeries>
where
    F: Fn(f64) -> f64,
{
    let even = fit(&f, OrthogonalBasis::FourierEven, degree, integration_points, range)?;
    let odd = fit(&f, OrthogonalBasis::FourierOdd, degree, integration_points, range)?;
    Ok(FourierSeries { even, odd })
}

// =================================================================================================
// Tests
// =================================================================================================
