//! Composite quadrature used by the spectral projection
//!
//! # The rule
//!
//! With `h = (b - a) / N`:
//!
//! ```text
//! S = 2 · Σ_{i=1}^{N-1} f(a + i·h)·w(a + i·h)
//!   + f(a + h/2) + f(b - h/2)
//! ∫ f·w dx ≈ S · h/2
//! ```
//!
//! This is a hybrid of the trapezoid rule on the interior nodes and the
//! midpoint rule on the two outermost half-cells. The end points `a` and `b`
//! themselves are never evaluated, which keeps integrands such as
//! `cos(n·acos(x))` away from the edges of their domain.
//!
//! The rule is reproduced exactly, including the fact that the weight
//! function is only applied to the interior nodes. Coefficients computed by
//! [`crate::spectral`] therefore match bit for bit across implementations.

use crate::error::{DiffusionError, Result};
use crate::math::Interval;

/// Approximate `∫ f(x) dx` over `range` with `subdivisions` cells
///
/// # Errors
///
/// - [`DiffusionError::Configuration`] when `subdivisions == 0`
/// - [`DiffusionError::Domain`] when `range` has zero length
///
/// # Example
///
/// ```rust
/// use heat_rs::math::{integrate, Interval};
///
/// let area = integrate(|_| 1.0, 10, Interval::new(2.0, 5.0)).unwrap();
/// assert!((area - 3.0).abs() < 1e-12);
/// ```
pub fn integrate<F>(f: F, subdivisions: usize, range: Interval) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    integrate_weighted(f, subdivisions, range, |_| 1.0)
}

/// Approximate `∫ f(x)·weight(x) dx` over `range` with `subdivisions` cells
pub fn integrate_weighted<F, W>(f: F, subdivisions: usize, range: Interval, weight: W) -> Result<f64>
where
    F: Fn(f64) -> f64,
    W: Fn(f64) -> f64,
{
    try_integrate_weighted(|x| Ok(f(x)), subdivisions, range, weight)
}

/// Same rule for an integrand that can fail
///
/// The first error raised by `f` aborts the integration and is returned
/// unchanged.
pub fn try_integrate_weighted<F, W>(
    f: F,
    subdivisions: usize,
    range: Interval,
    weight: W,
) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
    W: Fn(f64) -> f64,
{
    if subdivisions == 0 {
        return Err(DiffusionError::configuration(
            "integration points",
            "at least one subdivision is required",
        ));
    }
    range.ensure_non_degenerate("integrate")?;

    let a = range.start();
    let b = range.end();
    let h = range.length() / subdivisions as f64;

    let mut sum = 0.0;
    for i in 1..subdivisions {
        let x = a + i as f64 * h;
        sum += f(x)? * weight(x);
    }
    sum *= 2.0;
    sum += f(a + h / 2.0)? + f(b - h / 2.0)?;
    sum *= 0.5 * h;

    Ok(sum)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_constant_integrates_to_length() {
        for &n in &[1usize, 2, 7, 100, 1000] {
            for &(a, b) in &[(0.0, 1.0), (-3.0, 2.5), (4.0, -1.0)] {
                let value = integrate(|_| 1.0, n, Interval::new(a, b)).unwrap();
                assert_relative_eq!(value, b - a, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_sine_over_symmetric_range_vanishes() {
        let value = integrate(f64::sin, 400, Interval::periodic()).unwrap();
        assert!(value.abs() < 1e-12, "got {}", value);
    }

    #[test]
    fn test_rule_matches_hand_computation() {
        // N = 2 on [0, 1]: h = 0.5, interior node 0.5, outer midpoints 0.25 and 0.75
        let f = |x: f64| x * x;
        let expected = (2.0 * f(0.5) + f(0.25) + f(0.75)) * 0.5 * 0.5;
        let value = integrate(f, 2, Interval::new(0.0, 1.0)).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_single_subdivision_uses_midpoints_only() {
        // N = 1: no interior node, f(a + h/2) twice
        let value = integrate(|x| x, 1, Interval::new(0.0, 2.0)).unwrap();
        assert_eq!(value, (1.0 + 1.0) * 0.5 * 2.0);
    }

    #[test]
    fn test_weight_applies_to_interior_nodes_only() {
        let range = Interval::new(0.0, 1.0);
        let weighted = integrate_weighted(|_| 1.0, 2, range, |_| 3.0).unwrap();
        // interior: 2 * (1 * 3), outer midpoints unweighted: 1 + 1
        assert_eq!(weighted, (2.0 * 3.0 + 2.0) * 0.5 * 0.5);
    }

    #[test]
    fn test_converges_for_smooth_integrand() {
        let value = integrate(|x: f64| x.cos(), 2000, Interval::new(0.0, PI / 2.0)).unwrap();
        assert_relative_eq!(value, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_subdivisions_rejected() {
        let result = integrate(|_| 1.0, 0, Interval::new(0.0, 1.0));
        assert!(matches!(result, Err(DiffusionError::Configuration { .. })));
    }

    #[test]
    fn test_zero_length_range_rejected() {
        let result = integrate(|_| 1.0, 10, Interval::new(1.0, 1.0));
        assert!(matches!(result, Err(DiffusionError::Domain { .. })));
    }

    #[test]
    fn test_fallible_integrand_error_is_propagated() {
        let result = try_integrate_weighted(
            |x| {
                if x > 0.5 {
                    Err(DiffusionError::Index { position: x, index: 9.0, len: 3 })
                } else {
                    Ok(x)
                }
            },
            10,
            Interval::new(0.0, 1.0),
            |_| 1.0,
        );
        assert!(matches!(result, Err(DiffusionError::Index { .. })));
    }
}
