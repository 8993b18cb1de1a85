//! Data export of sampled solutions
//!
//! # Available formats
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! Every exporter takes [`Curve`](crate::output::Curve)s, so any solver
//! implementing [`DiffusionSolver`](crate::solver::DiffusionSolver) can be
//! exported after [`sample_curve`](crate::output::sample_curve).

pub mod csv;

pub use csv::{export_curve_csv, export_curves_csv, CsvConfig, CsvMetadata};
