//! Orthogonal bases and spectral projection
//!
//! - [`basis`]: the closed family [`OrthogonalBasis`]
//! - [`projection`]: coefficients, reconstruction and range-aware fits
//!
//! The spectral diffusion solver
//! ([`SpectralSolver`](crate::solver::SpectralSolver)) is built on top of
//! this module with the odd Fourier basis.

pub mod basis;
pub mod projection;

pub use basis::OrthogonalBasis;
pub use projection::{
    fit, fit_fourier, project_coefficients, reconstruct, try_project_coefficients,
    FittedFunction, FourierSeries,
};
