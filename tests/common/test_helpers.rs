//! Helper functions for integration tests

use std::f64::consts::PI;

use heat_rs::math::Interval;
use heat_rs::solver::{FiniteDifferenceConfig, FiniteDifferenceSolver, GridConditions, Profile};

/// `[0, 1]`
pub const UNIT: Interval = Interval::new(0.0, 1.0);

/// Exact solution for `sin(k·π·x)` on `[0, 1]` with zero boundaries
pub fn exact_sine_mode(wavenumber: f64, x: f64, t: f64) -> f64 {
    (wavenumber * PI * x).sin() * (-(wavenumber * PI).powi(2) * t).exp()
}

/// Finite-difference solver on `[0, 1]` with zero boundaries and a
/// physical-coordinate initial profile
pub fn fd_solver_on_unit_interval(grid_points: usize, ratio: f64, initial: Profile) -> FiniteDifferenceSolver {
    let config = FiniteDifferenceConfig::for_domain(UNIT, grid_points, ratio).unwrap();
    let initial = initial.on_grid(UNIT.start(), config.dx);
    FiniteDifferenceSolver::new(UNIT, config, GridConditions::with_zero_boundary(initial)).unwrap()
}

/// Mean of `(f(x) - g(x))²` over `samples` evenly spaced positions of `range`
pub fn mean_squared_error<F, G>(f: F, g: G, range: Interval, samples: usize) -> f64
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let step = range.length() / (samples - 1) as f64;
    let total: f64 = (0..samples)
        .map(|i| {
            let x = range.start() + i as f64 * step;
            (f(x) - g(x)).powi(2)
        })
        .sum();
    total / samples as f64
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
