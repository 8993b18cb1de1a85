//! Concrete diffusion solvers
//!
//! Both implement [`DiffusionSolver`](crate::solver::DiffusionSolver).
//!
//! # Available Methods
//!
//! - **[`FiniteDifferenceSolver`]**: explicit forward-Euler stencil on a grid
//!   - Order: O(dt) in time, O(dx²) in space
//!   - Cost: O(N) per step
//!   - Stable only for `dt / dx² < 0.5`
//!
//! - **[`SpectralSolver`]**: truncated sine series with analytic decay
//!   - Exact in time for the retained modes
//!   - Cost: O(degree · integration points) per reset, O(degree) per sample
//!   - No time stepping, `solution(x, t)` at any `t`
//!
//! # Example
//!
//! ```rust
//! use heat_rs::math::Interval;
//! use heat_rs::solver::{
//!     DiffusionSetup, FiniteDifferenceSolver, GridConditions, Profile, SpectralSolver,
//! };
//!
//! let setup = DiffusionSetup::default();
//! let initial = Profile::sine(1.0, 1.0);
//!
//! let grid_initial = initial.clone().on_grid(setup.domain.start(), setup.finite_difference.dx);
//! let mut fd = FiniteDifferenceSolver::new(
//!     setup.domain,
//!     setup.finite_difference,
//!     GridConditions::with_zero_boundary(grid_initial),
//! ).unwrap();
//! let spectral = SpectralSolver::new(setup.domain, initial, setup.spectral).unwrap();
//!
//! fd.advance(1000).unwrap();
//! let t = fd.time();
//! let difference = (fd.solution(0.5).unwrap() - spectral.solution(0.5, t).unwrap()).abs();
//! assert!(difference < 1e-2);
//! ```

pub mod finite_difference;
pub mod spectral;

pub use finite_difference::FiniteDifferenceSolver;
pub use spectral::SpectralSolver;
