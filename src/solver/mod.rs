//! Diffusion solvers
//!
//! This module provides two independent numerical solutions of `u_t = u_xx`
//! on a bounded interval, and the types needed to set them up.
//!
//! # Core Concepts
//!
//! 1. **Conditions** ([`Profile`], [`GridConditions`]): WHAT to solve
//!    - initial condition
//!    - Dirichlet boundary values (finite differences only)
//!
//! 2. **Configuration** ([`FiniteDifferenceConfig`], [`SpectralConfig`]): HOW to solve
//!    - grid and time step, or
//!    - series degree and quadrature resolution
//!
//! 3. **Solver** ([`DiffusionSolver`] trait): the numerical method
//!    - [`FiniteDifferenceSolver`] advances a grid with `calc()`
//!    - [`SpectralSolver`] evaluates a closed form at any time
//!
//! # Module Organization
//!
//! - **`conditions`**: profiles and grid-backed functions
//! - **`config`**: validated configurations, stability check, default set-up
//! - **`traits`**: the [`DiffusionSolver`] interface
//! - **`methods`**: the two solvers
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐      ┌──────────────────────┐
//! │ Profile(s)      │      │ Config (+ validate)  │
//! └────────┬────────┘      └──────────┬───────────┘
//!          │                          │
//!          └────────────┬─────────────┘
//!                       │
//!              ┌────────▼─────────┐
//!              │ Solver::new      │ ← samples / projects the initial profile
//!              └────────┬─────────┘
//!                       │
//!        ┌──────────────┴───────────────┐
//!        │                              │
//! ┌──────▼───────────┐        ┌─────────▼──────────┐
//! │ calc() × n       │        │ solution(x, t)     │
//! │ solution(x)      │        │ (closed form)      │
//! └──────────────────┘        └────────────────────┘
//!   finite difference               spectral
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use heat_rs::math::Interval;
//! use heat_rs::solver::{FiniteDifferenceConfig, FiniteDifferenceSolver, GridConditions, Profile};
//!
//! let domain = Interval::new(0.0, 1.0);
//! let config = FiniteDifferenceConfig::for_domain(domain, 101, 0.45)?;
//! let initial = Profile::gaussian(0.5, 0.05, 1.0).on_grid(domain.start(), config.dx);
//!
//! let mut solver = FiniteDifferenceSolver::new(domain, config, GridConditions::with_zero_boundary(initial))?;
//! solver.advance(500)?;
//! println!("u(0.5, {:.4}) = {:.4}", solver.time(), solver.solution(0.5)?);
//! # Ok::<(), heat_rs::DiffusionError>(())
//! ```

pub mod conditions;
pub mod config;
pub mod methods;
pub mod traits;

pub use conditions::{GridConditions, Profile, SampledFunction};
pub use config::{DiffusionSetup, FiniteDifferenceConfig, SpectralConfig, StabilityWarning, STABILITY_LIMIT};
pub use methods::{FiniteDifferenceSolver, SpectralSolver};
pub use traits::DiffusionSolver;
