//! Common interface of the diffusion solvers
//!
//! # Design
//!
//! The two solvers advance time very differently: the finite-difference
//! solver mutates a grid on every [`calc`](crate::solver::FiniteDifferenceSolver::calc),
//! the spectral solver evaluates a closed form at any `t`. Consumers that
//! only need to *sample* a solution (plotting, CSV export, comparisons) go
//! through [`DiffusionSolver`] and stay agnostic of that difference.

use crate::error::Result;
use crate::math::Interval;

/// Solution of `u_t = u_xx` that can be sampled on its physical domain
///
/// # Example
///
/// ```rust
/// use heat_rs::math::Interval;
/// use heat_rs::solver::{DiffusionSolver, Profile, SpectralConfig, SpectralSolver};
///
/// let domain = Interval::new(0.0, 1.0);
/// let solver = SpectralSolver::new(domain, Profile::sine(1.0, 1.0), SpectralConfig::new(4, 400)).unwrap();
///
/// let value = solver.evaluate(0.5, 0.0).unwrap();
/// assert!((value - 1.0).abs() < 1e-3);
/// ```
pub trait DiffusionSolver {
    /// Human-readable solver name
    fn name(&self) -> &'static str;

    /// Physical domain the solution is defined on
    fn domain(&self) -> Interval;

    /// Rebuild internal state from the current initial and boundary profiles
    fn reset(&mut self) -> Result<()>;

    /// Value of the solution at position `x` and time `t`
    ///
    /// Time-stepping solvers only hold their current time and ignore `t`.
    fn evaluate(&self, x: f64, t: f64) -> Result<f64>;

    /// Time at which [`evaluate`](Self::evaluate) is meaningful when the
    /// solver holds a single snapshot, `None` for closed-form solvers
    fn current_time(&self) -> Option<f64> {
        None
    }
}
