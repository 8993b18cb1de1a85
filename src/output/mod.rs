//! Output of simulation results
//!
//! - **Sampling**: turn any [`DiffusionSolver`](crate::solver::DiffusionSolver)
//!   into a [`Curve`], compare two solvers
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV files for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs
//! ├── sampling.rs         ← Curve, sample_curve, compare_solvers
//! ├── visualization/      ← Plots
//! │   ├── config.rs
//! │   └── profiles.rs
//! └── export/             ← Data export
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::{export_curve_csv, plot_profile, sample_curve};
//!
//! let curve = sample_curve(&solver, domain, 0.01, t)?;
//! plot_profile(&curve, "profile.png", None)?;
//! export_curve_csv(&curve, "profile.csv", None)?;
//! ```
//!
//! Plotting and export errors are reported as `Box<dyn Error>`: they mix
//! I/O, plotters backend and data validation failures.

pub mod export;
pub mod sampling;
pub mod visualization;

pub use sampling::{compare_curves, compare_solvers, sample_curve, sample_function, Curve, SolverComparison};

pub use visualization::{plot_profile, plot_profiles, PlotConfig, NO_TITLE};

pub use export::{export_curve_csv, export_curves_csv, CsvConfig, CsvMetadata};
