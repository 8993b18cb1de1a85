//! Spectral diffusion solver on a sine basis
//!
//! # Mathematical Background
//!
//! On a symmetric interval `[-L, L]` with homogeneous Dirichlet conditions,
//! `sin(n·π·x / L)` are eigenfunctions of `∂²/∂x²` with eigenvalue
//! `-(n·π/L)²`. Expanding the initial condition in that basis gives the
//! exact solution of the truncated problem:
//!
//! ```text
//! u(x, t) = Σ_{n=1}^{degree} c_n · exp(-(n·π/L)²·t) · sin(n·s),    s = π·x / L
//! ```
//!
//! # Pipeline
//!
//! 1. The physical domain `[a, b]` is enclosed in `[-L, L]`, `L = max(|a|, |b|)`
//! 2. The initial profile is odd-extended: `x < 0 ↦ -f(-x)`
//! 3. Coefficients `c_n` come from [`project_coefficients`](crate::spectral::project_coefficients)
//!    with [`OrthogonalBasis::FourierOdd`] on `[-π, π]`
//! 4. [`SpectralSolver::solution`] evaluates the series at any `(x, t)`:
//!    there is no time stepping
//!
//! # Example
//!
//! ```rust
//! use heat_rs::math::Interval;
//! use heat_rs::solver::{Profile, SpectralConfig, SpectralSolver};
//!
//! let domain = Interval::new(-std::f64::consts::PI, std::f64::consts::PI);
//! let solver = SpectralSolver::new(domain, Profile::custom(f64::sin), SpectralConfig::new(1, 400)).unwrap();
//!
//! // sin(x)·e^{-t}
//! let u = solver.solution(1.0, 0.5).unwrap();
//! assert!((u - 1f64.sin() * (-0.5f64).exp()).abs() < 1e-6);
//! ```

use std::f64::consts::PI;

use nalgebra::DVector;

use crate::error::Result;
use crate::math::{convert_range, Interval};
use crate::solver::{DiffusionSolver, Profile, SpectralConfig};
use crate::spectral::{try_project_coefficients, OrthogonalBasis};

const BASIS: OrthogonalBasis = OrthogonalBasis::FourierOdd;

// =================================================================================================
// Spectral Solver
// =================================================================================================

/// Closed-form diffusion solver built from a truncated sine expansion
#[derive(Debug, Clone)]
pub struct SpectralSolver {
    domain: Interval,
    symmetric: Interval,
    initial: Profile,
    config: SpectralConfig,
    coefficients: DVector<f64>,
}

impl SpectralSolver {
    /// Create a solver and project `initial` onto the sine basis
    ///
    /// # Errors
    ///
    /// - [`DiffusionError::Domain`](crate::DiffusionError::Domain) when `domain` has zero length
    /// - [`DiffusionError::Configuration`](crate::DiffusionError::Configuration) when `config` is invalid
    /// - any error raised while sampling `initial`
    pub fn new(domain: Interval, initial: Profile, config: SpectralConfig) -> Result<Self> {
        domain.ensure_non_degenerate("spectral domain")?;
        config.validate()?;

        let symmetric = domain.symmetric_hull();
        let coefficients = project_initial(&initial, symmetric, &config)?;

        Ok(Self {
            domain,
            symmetric,
            initial,
            config,
            coefficients,
        })
    }

    // ====== Accessors ======

    pub fn domain(&self) -> Interval {
        self.domain
    }

    /// `[-L, L]`, the interval the sine basis is laid on
    pub fn symmetric_domain(&self) -> Interval {
        self.symmetric
    }

    pub fn initial(&self) -> &Profile {
        &self.initial
    }

    pub fn config(&self) -> &SpectralConfig {
        &self.config
    }

    pub fn degree(&self) -> usize {
        self.config.degree
    }

    /// Sine coefficients `c_0..=c_degree` (`c_0` is always 0)
    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    // ====== Rebuilding ======

    /// Recompute the coefficients from the current initial profile
    pub fn set_initial_value(&mut self) -> Result<()> {
        self.coefficients = project_initial(&self.initial, self.symmetric, &self.config)?;
        Ok(())
    }

    /// Alias of [`set_initial_value`](Self::set_initial_value)
    pub fn reset(&mut self) -> Result<()> {
        self.set_initial_value()
    }

    /// Replace the initial profile and recompute the coefficients
    ///
    /// On error, the previous profile and coefficients are left untouched.
    pub fn reset_with(&mut self, initial: Profile) -> Result<()> {
        let coefficients = project_initial(&initial, self.symmetric, &self.config)?;
        self.initial = initial;
        self.coefficients = coefficients;
        Ok(())
    }

    /// Change degree and quadrature resolution, then recompute
    ///
    /// On error, the previous configuration and coefficients are left untouched.
    pub fn reconfigure(&mut self, config: SpectralConfig) -> Result<()> {
        config.validate()?;
        let coefficients = project_initial(&self.initial, self.symmetric, &config)?;
        self.config = config;
        self.coefficients = coefficients;
        Ok(())
    }

    // ====== Evaluation ======

    /// `exp(-(n·π/L)²·t)`, decay of mode `n` after time `t`
    pub fn decay_factor(&self, mode: usize, t: f64) -> f64 {
        let wavenumber = mode as f64 * PI / self.symmetric.end();
        (-wavenumber * wavenumber * t).exp()
    }

    /// Coefficients multiplied by their decay factor at time `t`
    pub fn mode_amplitudes(&self, t: f64) -> DVector<f64> {
        DVector::from_iterator(
            self.coefficients.len(),
            self.coefficients
                .iter()
                .enumerate()
                .map(|(mode, c)| c * self.decay_factor(mode, t)),
        )
    }

    /// Value of the truncated series at position `x` and time `t`
    pub fn solution(&self, x: f64, t: f64) -> Result<f64> {
        let s = convert_range(x, self.symmetric, BASIS.canonical_domain())?;

        let value: f64 = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(mode, c)| c * self.decay_factor(mode, t) * BASIS.basis_value(mode, s))
            .sum();
        Ok(value)
    }
}

impl DiffusionSolver for SpectralSolver {
    fn name(&self) -> &'static str {
        "Spectral (Fourier sine series)"
    }

    fn domain(&self) -> Interval {
        self.domain
    }

    fn reset(&mut self) -> Result<()> {
        self.set_initial_value()
    }

    fn evaluate(&self, x: f64, t: f64) -> Result<f64> {
        self.solution(x, t)
    }
}

// =================================================================================================
// Helpers
// =================================================================================================

/// `x < 0 ↦ -f(-x)`, `f(x)` otherwise
fn odd_extension(profile: &Profile, x: f64) -> Result<f64> {
    if x < 0.0 {
        Ok(-profile.evaluate(-x)?)
    } else {
        profile.evaluate(x)
    }
}

fn project_initial(initial: &Profile, symmetric: Interval, config: &SpectralConfig) -> Result<DVector<f64>> {
    let canonical = BASIS.canonical_domain();
    let coefficients = try_project_coefficients(
        |s| odd_extension(initial, convert_range(s, canonical, symmetric)?),
        BASIS,
        config.degree,
        config.integration_points,
    )?;

    log::debug!(
        "spectral coefficients rebuilt: degree {}, {} integration points",
        config.degree,
        config.integration_points
    );
    Ok(coefficients)
}

// =================================================================================================
// Tests
// =================================================================================================
