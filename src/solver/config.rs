//! Solver configurations and the explicit-scheme stability check
//!
//! # Design
//!
//! Each solver gets a small value type holding its numerical parameters, with
//! a `validate()` method returning a descriptive error and named
//! constructors for the common set-ups. Validation never mutates anything:
//! solvers call it before committing a new configuration.

use std::fmt;

use crate::error::{DiffusionError, Result};
use crate::math::Interval;

/// Threshold on `dt / dx²` above which the explicit stencil diverges
pub const STABILITY_LIMIT: f64 = 0.5;

// =================================================================================================
// Finite-difference configuration
// =================================================================================================

/// Numerical parameters of the explicit finite-difference scheme
///
/// # Example
///
/// ```rust
/// use heat_rs::math::Interval;
/// use heat_rs::solver::FiniteDifferenceConfig;
///
/// // 101 points on [0, 1] with r = dt/dx² = 0.4
/// let config = FiniteDifferenceConfig::for_domain(Interval::new(0.0, 1.0), 101, 0.4).unwrap();
/// assert!((config.dx - 0.01).abs() < 1e-15);
/// assert!((config.stability_ratio() - 0.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifferenceConfig {
    /// Time step
    pub dt: f64,

    /// Space step
    pub dx: f64,

    /// Number of grid points, boundaries included
    pub grid_points: usize,
}

impl FiniteDifferenceConfig {
    pub fn new(dt: f64, dx: f64, grid_points: usize) -> Self {
        Self { dt, dx, grid_points }
    }

    /// Grid spanning `domain` end to end with the time step chosen so that
    /// `dt / dx² == ratio`
    pub fn for_domain(domain: Interval, grid_points: usize, ratio: f64) -> Result<Self> {
        domain.ensure_non_degenerate("finite-difference domain")?;
        if grid_points < 2 {
            return Err(DiffusionError::configuration(
                "grid_points",
                format!("a domain needs at least 2 grid points, got {}", grid_points),
            ));
        }

        let dx = domain.length().abs() / (grid_points - 1) as f64;
        let config = Self::new(ratio * dx * dx, dx, grid_points);
        config.validate()?;
        Ok(config)
    }

    /// `dt / dx²`
    pub fn stability_ratio(&self) -> f64 {
        self.dt / (self.dx * self.dx)
    }

    /// Advisory for step ratios at or above [`STABILITY_LIMIT`]
    pub fn stability_warning(&self) -> Option<StabilityWarning> {
        let ratio = self.stability_ratio();
        if ratio >= STABILITY_LIMIT {
            Some(StabilityWarning {
                ratio,
                dt: self.dt,
                dx: self.dx,
            })
        } else {
            None
        }
    }

    /// Whether `dx` spans `domain` end to end in `grid_points - 1` steps
    ///
    /// [`FiniteDifferenceSolver::solution`](crate::solver::FiniteDifferenceSolver::solution)
    /// maps positions through the domain and the grid size, while
    /// `positions()` and [`Profile::on_grid`](crate::solver::Profile::on_grid)
    /// use `dx`. The two only agree when this holds. A one-point grid has no
    /// spacing and always matches.
    pub fn spans_domain(&self, domain: Interval) -> bool {
        if self.grid_points < 2 {
            return true;
        }
        let expected = domain.length().abs() / (self.grid_points - 1) as f64;
        (self.dx - expected).abs() <= 1e-9 * expected.max(self.dx)
    }

    /// Validate that parameters are numerically meaningful
    pub fn validate(&self) -> Result<()> {
        if self.grid_points == 0 {
            return Err(DiffusionError::configuration(
                "grid_points",
                "the grid must contain at least one point",
            ));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(DiffusionError::configuration(
                "dt",
                format!("time step must be positive and finite, got {}", self.dt),
            ));
        }
        if !self.dx.is_finite() || self.dx <= 0.0 {
            return Err(DiffusionError::configuration(
                "dx",
                format!("space step must be positive and finite, got {}", self.dx),
            ));
        }
        Ok(())
    }
}

/// Non-fatal advisory: the explicit scheme is unstable for this step ratio
///
/// Solvers still accept such a configuration. The warning is logged through
/// `log::warn!` and kept on the solver for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityWarning {
    /// Offending `dt / dx²`
    pub ratio: f64,
    pub dt: f64,
    pub dx: f64,
}

impl StabilityWarning {
    /// Largest stable time step for the same `dx`
    pub fn max_stable_dt(&self) -> f64 {
        STABILITY_LIMIT * self.dx * self.dx
    }
}

impl fmt::Display for StabilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dt / dx^2 = {:.4} >= {} (dt = {:e}, dx = {:e}); the explicit scheme will diverge, \
             use dt < {:e}",
            self.ratio,
            STABILITY_LIMIT,
            self.dt,
            self.dx,
            self.max_stable_dt()
        )
    }
}

// =================================================================================================
// Spectral configuration
// =================================================================================================

/// Truncation and quadrature parameters of the spectral solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralConfig {
    /// Highest sine mode kept in the expansion
    pub degree: usize,

    /// Quadrature subdivisions used for every coefficient
    pub integration_points: usize,
}

impl SpectralConfig {
    pub fn new(degree: usize, integration_points: usize) -> Self {
        Self {
            degree,
            integration_points,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.integration_points == 0 {
            return Err(DiffusionError::configuration(
                "integration_points",
                "at least one quadrature subdivision is required",
            ));
        }
        Ok(())
    }
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self::new(30, 400)
    }
}

// =================================================================================================
// Complete set-up
// =================================================================================================

/// Physical domain plus both solver configurations
///
/// `Default` reproduces the interactive set-up the crate was designed
/// around: `[0, 1]`, 200 grid points, `r = 0.45`, 30 sine modes integrated
/// with 400 subdivisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionSetup {
    pub domain: Interval,
    pub finite_difference: FiniteDifferenceConfig,
    pub spectral: SpectralConfig,
}

impl DiffusionSetup {
    /// Default stability ratio of the interactive set-up
    pub const DEFAULT_RATIO: f64 = STABILITY_LIMIT - 0.05;

    pub fn new(domain: Interval, grid_points: usize, ratio: f64, spectral: SpectralConfig) -> Result<Self> {
        let finite_difference = FiniteDifferenceConfig::for_domain(domain, grid_points, ratio)?;
        spectral.validate()?;
        Ok(Self {
            domain,
            finite_difference,
            spectral,
        })
    }
}

impl Default for DiffusionSetup {
    fn default() -> Self {
        let domain = Interval::new(0.0, 1.0);
        let grid_points = 200;
        let dx = domain.length() / (grid_points - 1) as f64;
        Self {
            domain,
            finite_difference: FiniteDifferenceConfig::new(Self::DEFAULT_RATIO * dx * dx, dx, grid_points),
            spectral: SpectralConfig::default(),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
