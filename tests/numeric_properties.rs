//! Properties of the numerical building blocks: interval mapping,
//! quadrature, combinatorics and basis fits

mod common;

use approx::assert_relative_eq;
use common::relative_error;
use std::f64::consts::PI;

use heat_rs::math::{combination, convert_range, integrate, Interval};
use heat_rs::spectral::{fit, fit_fourier, project_coefficients, reconstruct, OrthogonalBasis};
use heat_rs::DiffusionError;

// =================================================================================================
// Interval mapping
// =================================================================================================

#[test]
fn test_convert_range_round_trip() {
    let pairs = [
        (Interval::new(0.0, 1.0), Interval::periodic()),
        (Interval::new(-3.0, 7.5), Interval::indices(200)),
        (Interval::new(2.0, -2.0), Interval::unit_symmetric()),
    ];

    for (from, to) in pairs {
        for i in 0..=10 {
            let x = from.start() + i as f64 * from.length() / 10.0;
            let there = convert_range(x, from, to).unwrap();
            let back = convert_range(there, to, from).unwrap();
            assert_relative_eq!(back, x, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_convert_range_maps_end_points() {
    let from = Interval::new(-1.5, 4.0);
    let to = Interval::indices(11);
    assert_eq!(convert_range(-1.5, from, to).unwrap(), 0.0);
    assert_relative_eq!(convert_range(4.0, from, to).unwrap(), 10.0, epsilon = 1e-12);
    assert_relative_eq!(convert_range(from.midpoint(), from, to).unwrap(), 5.0, epsilon = 1e-12);
}

#[test]
fn test_convert_range_rejects_degenerate_intervals() {
    let flat = Interval::new(2.0, 2.0);
    assert!(matches!(convert_range(2.0, flat, Interval::unit_symmetric()), Err(DiffusionError::Domain { .. })));
    assert!(matches!(convert_range(0.0, Interval::unit_symmetric(), flat), Err(DiffusionError::Domain { .. })));
}

// =================================================================================================
// Quadrature
// =================================================================================================

#[test]
fn test_integrate_constant_gives_length() {
    for range in [Interval::new(0.0, 1.0), Interval::periodic(), Interval::new(5.0, 2.0)] {
        let area = integrate(|_| 1.0, 400, range).unwrap();
        assert_relative_eq!(area, range.length(), epsilon = 1e-10);
    }
}

#[test]
fn test_integrate_odd_function_over_symmetric_range() {
    let area = integrate(f64::sin, 400, Interval::periodic()).unwrap();
    assert!(area.abs() < 1e-12);
}

#[test]
fn test_integrate_converges_with_subdivisions() {
    let exact = 1.0 - (-1.0f64).exp();
    let coarse = integrate(|x| (-x).exp(), 20, Interval::new(0.0, 1.0)).unwrap();
    let fine = integrate(|x| (-x).exp(), 2000, Interval::new(0.0, 1.0)).unwrap();

    assert!(relative_error(fine, exact) < relative_error(coarse, exact));
    assert!(relative_error(fine, exact) < 1e-6);
}

#[test]
fn test_integrate_rejects_zero_subdivisions() {
    let result = integrate(|x| x, 0, Interval::new(0.0, 1.0));
    assert!(matches!(result, Err(DiffusionError::Configuration { .. })));
}

#[test]
fn test_legendre_polynomials_are_orthogonal() {
    let basis = OrthogonalBasis::Legendre;
    let range = basis.canonical_domain();

    for m in 0..5 {
        for n in 0..5 {
            let inner = integrate(|x| basis.basis_value(m, x) * basis.basis_value(n, x), 2000, range).unwrap();
            if m == n {
                // ∫ P_n² = 2 / (2n + 1), the inverse of the normalization constant
                assert_relative_eq!(inner * basis.normalization_constant(n), 1.0, epsilon = 1e-3);
            } else {
                assert!(inner.abs() < 1e-3, "<P{}, P{}> = {}", m, n, inner);
            }
        }
    }
}

// =================================================================================================
// Combinatorics
// =================================================================================================

#[test]
fn test_combination_symmetry() {
    for n in 0..12 {
        for r in 0..=n {
            assert_eq!(
                combination(n as f64, r as f64),
                combination(n as f64, (n - r) as f64),
                "C({}, {})",
                n,
                r
            );
        }
    }
}

#[test]
fn test_combination_pascal_rule() {
    for n in 1..15 {
        for r in 1..n {
            let (n, r) = (n as f64, r as f64);
            assert_relative_eq!(
                combination(n, r),
                combination(n - 1.0, r - 1.0) + combination(n - 1.0, r),
                epsilon = 1e-9
            );
        }
    }
}

// =================================================================================================
// Basis fits
// =================================================================================================

#[test]
fn test_legendre_fit_recovers_cubic() {
    let range = Interval::new(0.0, 2.0);
    let cubic = |x: f64| x * x * x - 2.0 * x + 1.0;
    let fitted = fit(cubic, OrthogonalBasis::Legendre, 3, 4000, range).unwrap();

    assert_eq!(fitted.degree(), 3);
    for i in 0..=8 {
        let x = i as f64 * 0.25;
        assert_relative_eq!(fitted.evaluate(x).unwrap(), cubic(x), epsilon = 1e-3);
    }
}

#[test]
fn test_fit_matches_projection_of_rescaled_function() {
    let range = Interval::new(10.0, 14.0);
    let f = |x: f64| (x - 12.0).powi(2);

    for basis in OrthogonalBasis::ALL {
        let fitted = fit(f, basis, 4, 300, range).unwrap();
        let canonical = basis.canonical_domain();
        let direct = project_coefficients(
            |s| f(convert_range(s, canonical, range).unwrap()),
            basis,
            4,
            300,
        )
        .unwrap();

        assert_eq!(fitted.coefficients(), &direct, "{}", basis);

        let s = convert_range(11.0, range, canonical).unwrap();
        assert_eq!(fitted.evaluate(11.0).unwrap(), reconstruct(&direct, basis, s));
    }
}

#[test]
fn test_legendre_fit_of_exponential() {
    let fitted = fit(f64::exp, OrthogonalBasis::Legendre, 6, 2000, Interval::new(0.0, 1.0)).unwrap();
    for &x in &[0.1, 0.5, 0.9] {
        assert_relative_eq!(fitted.evaluate(x).unwrap(), x.exp(), epsilon = 1e-4);
    }
}

#[test]
fn test_fourier_series_of_trigonometric_polynomial() {
    let f = |x: f64| 1.0 + x.cos() + 2.0 * (2.0 * x).sin();
    let series = fit_fourier(f, 3, 400, Interval::periodic()).unwrap();

    let a = series.cosine_coefficients();
    let b = series.sine_coefficients();
    assert_relative_eq!(a[0], 1.0, epsilon = 1e-4);
    assert_relative_eq!(a[1], 1.0, epsilon = 1e-4);
    assert!(a[2].abs() < 1e-4 && a[3].abs() < 1e-4);
    assert_eq!(b[0], 0.0);
    assert!(b[1].abs() < 1e-4 && b[3].abs() < 1e-4);
    assert_relative_eq!(b[2], 2.0, epsilon = 1e-4);

    for i in 0..=12 {
        let x = -PI + i as f64 * PI / 6.0;
        assert_relative_eq!(series.evaluate(x).unwrap(), f(x), epsilon = 1e-3);
    }
}

#[test]
fn test_fourier_series_on_shifted_period() {
    // one period over [2, 3], centred on 2.5
    let series = fit_fourier(|x| (2.0 * PI * (x - 2.5)).sin(), 2, 400, Interval::new(2.0, 3.0)).unwrap();
    assert_relative_eq!(series.sine_coefficients()[1], 1.0, epsilon = 1e-4);
    assert_relative_eq!(series.evaluate(2.75).unwrap(), 1.0, epsilon = 1e-3);
    assert_relative_eq!(series.evaluate(2.25).unwrap(), -1.0, epsilon = 1e-3);
}
