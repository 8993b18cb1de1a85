//! Explicit finite-difference diffusion solver
//!
//! # Mathematical Background
//!
//! The heat equation `u_t = u_xx` is discretized on a uniform grid of `N`
//! points with spacing `dx` and advanced with forward Euler in time:
//!
//! ```text
//! u_i^{n+1} = u_i^n + r · (u_{i+1}^n + u_{i-1}^n - 2·u_i^n),    r = dt / dx²
//! ```
//!
//! Indices `0` and `N-1` hold Dirichlet boundary values taken from the
//! boundary profile before every step.
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space
//! - **Stability**: conditionally stable, requires `r < 0.5`
//! - **Cost**: `O(N)` per step, no allocation
//! - **Memory**: two grid buffers used alternately
//!
//! # Stability policy
//!
//! A configuration with `r >= 0.5` is accepted. The solver emits a
//! [`StabilityWarning`] through `log::warn!` and keeps it available through
//! [`FiniteDifferenceSolver::stability_warning`]; the grid will oscillate and
//! blow up if stepped long enough.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::math::Interval;
//! use heat_rs::solver::{FiniteDifferenceConfig, FiniteDifferenceSolver, GridConditions, Profile};
//!
//! let domain = Interval::new(0.0, 1.0);
//! let config = FiniteDifferenceConfig::for_domain(domain, 51, 0.4).unwrap();
//!
//! // sin(πx) expressed in grid indices
//! let initial = Profile::sine(1.0, 1.0).on_grid(domain.start(), config.dx);
//! let mut solver = FiniteDifferenceSolver::new(domain, config, GridConditions::with_zero_boundary(initial)).unwrap();
//!
//! solver.advance(100).unwrap();
//! let peak = solver.solution(0.5).unwrap();
//! assert!(peak < 1.0 && peak > 0.0);
//! ```

use nalgebra::DVector;

use crate::error::{DiffusionError, Result};
use crate::math::{convert_range, Interval};
use crate::solver::{DiffusionSolver, FiniteDifferenceConfig, GridConditions, StabilityWarning};

// =================================================================================================
// Finite-Difference Solver
// =================================================================================================

/// Explicit time-stepper for `u_t = u_xx` on a uniform grid
///
/// # State
///
/// - `current`: grid values at the current time
/// - `scratch`: target buffer of the next step, swapped with `current`
///   afterwards
///
/// Both buffers always have `grid_points` entries and are only replaced
/// wholesale when a reset succeeds.
#[derive(Debug, Clone)]
pub struct FiniteDifferenceSolver {
    domain: Interval,
    config: FiniteDifferenceConfig,
    conditions: GridConditions,
    current: DVector<f64>,
    scratch: DVector<f64>,
    time: f64,
    steps: usize,
    stability: Option<StabilityWarning>,
}

impl FiniteDifferenceSolver {
    /// Create a solver and sample its initial grid
    ///
    /// # Errors
    ///
    /// - [`DiffusionError::Configuration`] when `config` is invalid
    /// - [`DiffusionError::Domain`] when `domain` has zero length
    /// - any error raised while sampling `conditions`
    pub fn new(domain: Interval, config: FiniteDifferenceConfig, conditions: GridConditions) -> Result<Self> {
        config.validate()?;
        domain.ensure_non_degenerate("finite-difference domain")?;

        let (current, scratch) = build_grid(&config, &conditions)?;
        let stability = check_stability(&config);
        check_spacing(domain, &config);

        Ok(Self {
            domain,
            config,
            conditions,
            current,
            scratch,
            time: 0.0,
            steps: 0,
            stability,
        })
    }

    // ====== Accessors ======

    pub fn domain(&self) -> Interval {
        self.domain
    }

    pub fn config(&self) -> &FiniteDifferenceConfig {
        &self.config
    }

    pub fn conditions(&self) -> &GridConditions {
        &self.conditions
    }

    /// Grid values at the current time, boundaries included
    pub fn grid(&self) -> &DVector<f64> {
        &self.current
    }

    /// Simulation time reached so far
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of steps taken since the last reset
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advisory recorded for the current configuration, if any
    pub fn stability_warning(&self) -> Option<&StabilityWarning> {
        self.stability.as_ref()
    }

    /// Whether `dx` and the grid size cover the domain exactly
    ///
    /// When false, [`solution`](Self::solution) and [`positions`](Self::positions)
    /// place grid points at different coordinates. A warning is logged
    /// whenever such a configuration is accepted.
    pub fn spacing_matches_domain(&self) -> bool {
        self.config.spans_domain(self.domain)
    }

    /// False once any grid value has become NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.current.iter().all(|v| v.is_finite())
    }

    // ====== Reset ======

    /// Resample the initial profile, apply boundaries and rewind to `t = 0`
    pub fn reset(&mut self) -> Result<()> {
        let (current, scratch) = build_grid(&self.config, &self.conditions)?;
        self.commit_grid(current, scratch);
        Ok(())
    }

    /// Replace both profiles and reset
    ///
    /// On error, the previous profiles and grid are left untouched.
    pub fn reset_with(&mut self, conditions: GridConditions) -> Result<()> {
        let (current, scratch) = build_grid(&self.config, &conditions)?;
        self.conditions = conditions;
        self.commit_grid(current, scratch);
        Ok(())
    }

    /// Replace the whole configuration (grid size included) and reset
    ///
    /// On error, the previous configuration and grid are left untouched.
    pub fn reconfigure(&mut self, config: FiniteDifferenceConfig) -> Result<()> {
        config.validate()?;
        let (current, scratch) = build_grid(&config, &self.conditions)?;
        self.stability = check_stability(&config);
        check_spacing(self.domain, &config);
        self.config = config;
        self.commit_grid(current, scratch);
        Ok(())
    }

    /// Change the default time step used by [`calc`](Self::calc)
    ///
    /// The grid is kept as is. The stability check runs again and its
    /// outcome is returned as well as recorded.
    pub fn set_time_step(&mut self, dt: f64) -> Result<Option<StabilityWarning>> {
        let config = FiniteDifferenceConfig { dt, ..self.config };
        config.validate()?;

        self.stability = check_stability(&config);
        self.config = config;
        Ok(self.stability)
    }

    fn commit_grid(&mut self, current: DVector<f64>, scratch: DVector<f64>) {
        self.current = current;
        self.scratch = scratch;
        self.time = 0.0;
        self.steps = 0;
    }

    // ====== Time stepping ======

    /// Advance by the configured time step
    pub fn calc(&mut self) -> Result<()> {
        self.calc_with(self.config.dt)
    }

    /// Advance by `step` instead of the configured time step
    ///
    /// # Errors
    ///
    /// - [`DiffusionError::Configuration`] when `step` is not positive and finite
    /// - any error raised by the boundary profile; the grid is then unchanged
    pub fn calc_with(&mut self, step: f64) -> Result<()> {
        if !step.is_finite() || step <= 0.0 {
            return Err(DiffusionError::configuration(
                "step",
                format!("time step must be positive and finite, got {}", step),
            ));
        }

        let last = self.current.len() - 1;
        let (left, right) = boundary_values(&self.conditions, last)?;
        for buffer in [&mut self.current, &mut self.scratch] {
            buffer[0] = left;
            buffer[last] = right;
        }

        let r = step / (self.config.dx * self.config.dx);
        for i in 1..last {
            let u = self.current[i];
            self.scratch[i] = u + r * (self.current[i + 1] + self.current[i - 1] - 2.0 * u);
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
        self.time += step;
        self.steps += 1;
        Ok(())
    }

    /// Call [`calc`](Self::calc) `steps` times
    pub fn advance(&mut self, steps: usize) -> Result<()> {
        for _ in 0..steps {
            self.calc()?;
        }
        Ok(())
    }

    // ====== Sampling ======

    /// Grid value at the physical position `x`
    ///
    /// `x` is mapped onto the index interval `[0, N-1]` and floored: the
    /// value of the nearest grid point on the left, no interpolation.
    ///
    /// # Errors
    ///
    /// - [`DiffusionError::Index`] when `x` maps outside the grid
    /// - [`DiffusionError::Domain`] for a single-point grid, whose index
    ///   interval is degenerate
    pub fn solution(&self, x: f64) -> Result<f64> {
        let len = self.current.len();
        let index = convert_range(x, self.domain, Interval::indices(len))?.floor();

        if !(index >= 0.0 && index < len as f64) {
            return Err(DiffusionError::Index {
                position: x,
                index,
                len,
            });
        }
        Ok(self.current[index as usize])
    }

    /// Physical coordinate of every grid point
    pub fn positions(&self) -> Vec<f64> {
        (0..self.current.len())
            .map(|i| self.domain.start() + i as f64 * self.config.dx)
            .collect()
    }
}

impl DiffusionSolver for FiniteDifferenceSolver {
    fn name(&self) -> &'static str {
        "Finite Difference (explicit)"
    }

    fn domain(&self) -> Interval {
        self.domain
    }

    fn reset(&mut self) -> Result<()> {
        FiniteDifferenceSolver::reset(self)
    }

    fn evaluate(&self, x: f64, _t: f64) -> Result<f64> {
        self.solution(x)
    }

    fn current_time(&self) -> Option<f64> {
        Some(self.time)
    }
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Fresh `(current, scratch)` pair: initial profile at every index, boundary
/// values at both ends of both buffers
fn build_grid(config: &FiniteDifferenceConfig, conditions: &GridConditions) -> Result<(DVector<f64>, DVector<f64>)> {
    let len = config.grid_points;
    let mut current = DVector::zeros(len);
    for i in 0..len {
        current[i] = conditions.initial.evaluate(i as f64)?;
    }

    let last = len - 1;
    let (left, right) = boundary_values(conditions, last)?;
    current[0] = left;
    current[last] = right;

    let scratch = current.clone();
    log::debug!("finite-difference grid rebuilt with {} points", len);
    Ok((current, scratch))
}

fn boundary_values(conditions: &GridConditions, last: usize) -> Result<(f64, f64)> {
    let left = conditions.boundary.evaluate(0.0)?;
    let right = conditions.boundary.evaluate(last as f64)?;
    Ok((left, right))
}

fn check_stability(config: &FiniteDifferenceConfig) -> Option<StabilityWarning> {
    let warning = config.stability_warning();
    if let Some(warning) = &warning {
        log::warn!("unstable finite-difference configuration: {}", warning);
    }
    warning
}

fn check_spacing(domain: Interval, config: &FiniteDifferenceConfig) {
    if !config.spans_domain(domain) {
        log::warn!(
            "grid spacing dx = {:e} with {} points does not span {}; solution() and positions() will disagree",
            config.dx,
            config.grid_points,
            domain
        );
    }
}

// =================================================================================================
// Tests
// =================================================================================================
