//! heat-rs: One-dimensional diffusion solvers
//!
//! Numerical approximations of the heat equation `u_t = u_xx` on a bounded
//! interval, computed two independent ways so they can be checked against
//! each other.
//!
//! # Architecture
//!
//! heat-rs is built on two core principles:
//!
//! 1. **Separation of numerics and set-up**
//!    - Profiles and configurations define the problem (what to solve)
//!    - Solvers provide the methods (how to solve)
//!
//! 2. **Explicit coordinate systems**
//!    - Every component works in its own canonical interval
//!    - [`math::convert_range`] is the only bridge between them
//!
//! # Quick Start
//!
//! ```rust
//! use heat_rs::prelude::*;
//!
//! # fn main() -> heat_rs::Result<()> {
//! let setup = DiffusionSetup::default();
//! let initial = Profile::sine(1.0, 1.0);
//!
//! // 1. Explicit finite differences, stepped by hand
//! let grid_initial = initial.clone().on_grid(setup.domain.start(), setup.finite_difference.dx);
//! let mut fd = FiniteDifferenceSolver::new(
//!     setup.domain,
//!     setup.finite_difference,
//!     GridConditions::with_zero_boundary(grid_initial),
//! )?;
//! fd.advance(500)?;
//!
//! // 2. Spectral solution, evaluated at the same time
//! let spectral = SpectralSolver::new(setup.domain, initial, setup.spectral)?;
//! let t = fd.time();
//!
//! // 3. Compare
//! let comparison = compare_solvers(&fd, &spectral, setup.domain, 0.01, t)?;
//! println!("max |FD - spectral| at t = {:.4}: {:.2e}", t, comparison.max_abs_difference);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`math`]: intervals, quadrature, combinatorics
//! - [`spectral`]: orthogonal bases and spectral projection
//! - [`solver`]: profiles, configurations and the two diffusion solvers
//! - [`output`]: curve sampling, CSV export and plots
//! - [`error`]: the crate error type
//!
//! # Logging
//!
//! The crate logs through the `log` facade (`warn` for unstable
//! finite-difference configurations, `debug` on rebuilds) and never installs
//! a logger itself.

pub mod error;
pub mod math;
pub mod output;
pub mod solver;
pub mod spectral;

pub use error::{DiffusionError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use heat_rs::prelude::*;
    //! ```
    pub use crate::error::DiffusionError;
    pub use crate::math::{convert_range, integrate, Interval};
    pub use crate::output::{compare_solvers, sample_curve, Curve};
    pub use crate::solver::{
        DiffusionSetup, DiffusionSolver, FiniteDifferenceConfig, FiniteDifferenceSolver, GridConditions, Profile,
        SampledFunction, SpectralConfig, SpectralSolver,
    };
    pub use crate::spectral::{fit, project_coefficients, reconstruct, OrthogonalBasis};
}
