//! Numeric building blocks
//!
//! - [`interval`]: `Interval` and [`convert_range`]
//! - [`quadrature`]: the composite rule behind every spectral projection
//! - [`combinatorics`]: generalized binomial coefficients

pub mod combinatorics;
pub mod interval;
pub mod quadrature;

pub use combinatorics::combination;
pub use interval::{convert_range, Interval};
pub use quadrature::{integrate, integrate_weighted, try_integrate_weighted};
