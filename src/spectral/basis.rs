//! Orthogonal function families
//!
//! # Design
//!
//! The family is closed, so it is a plain enum. Each variant carries a fixed
//! canonical domain and two pure functions:
//!
//! - `basis_value(n, x)`: the `n`-th basis function at `x`
//! - `normalization_constant(n)`: the factor turning `∫ φ_n·f` into the
//!   `n`-th spectral coefficient
//!
//! | Variant       | Domain  | φ_n(x)                 | normalization        |
//! |---------------|---------|------------------------|----------------------|
//! | `Legendre`    | [-1, 1] | P_n(x)                 | (2n + 1) / 2         |
//! | `Chebyshev`   | [-1, 1] | cos(n·acos x)          | 1/π, then 2/π        |
//! | `FourierEven` | [-π, π] | cos(n·x)               | 1/(2π), then 1/π     |
//! | `FourierOdd`  | [-π, π] | sin(n·x)               | 0, then 1/π          |
//!
//! # Example
//!
//! ```rust
//! use heat_rs::spectral::OrthogonalBasis;
//!
//! let basis = OrthogonalBasis::Legendre;
//! // P_2(x) = (3x² - 1) / 2
//! assert!((basis.basis_value(2, 0.5) - (-0.125)).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use std::fmt;

use crate::math::{combination, Interval};

/// Closed set of orthogonal bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrthogonalBasis {
    /// Legendre polynomials on `[-1, 1]`
    Legendre,

    /// Chebyshev polynomials of the first kind on `[-1, 1]`
    Chebyshev,

    /// Cosine series on `[-π, π]`
    FourierEven,

    /// Sine series on `[-π, π]`
    FourierOdd,
}

impl OrthogonalBasis {
    /// All variants, in declaration order
    pub const ALL: [OrthogonalBasis; 4] = [
        OrthogonalBasis::Legendre,
        OrthogonalBasis::Chebyshev,
        OrthogonalBasis::FourierEven,
        OrthogonalBasis::FourierOdd,
    ];

    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            OrthogonalBasis::Legendre => "Legendre",
            OrthogonalBasis::Chebyshev => "Chebyshev",
            OrthogonalBasis::FourierEven => "Fourier (even)",
            OrthogonalBasis::FourierOdd => "Fourier (odd)",
        }
    }

    /// Interval on which the family is orthogonal
    pub fn canonical_domain(&self) -> Interval {
        match self {
            OrthogonalBasis::Legendre | OrthogonalBasis::Chebyshev => Interval::unit_symmetric(),
            OrthogonalBasis::FourierEven | OrthogonalBasis::FourierOdd => Interval::periodic(),
        }
    }

    /// Value of the `mode`-th basis function at `x` (canonical coordinates)
    pub fn basis_value(&self, mode: usize, x: f64) -> f64 {
        let n = mode as f64;
        match self {
            OrthogonalBasis::Legendre => legendre(mode, x),
            OrthogonalBasis::Chebyshev => (n * x.acos()).cos(),
            OrthogonalBasis::FourierEven => (n * x).cos(),
            OrthogonalBasis::FourierOdd => (n * x).sin(),
        }
    }

    /// Factor applied to `∫ φ_mode · f` to obtain the `mode`-th coefficient
    pub fn normalization_constant(&self, mode: usize) -> f64 {
        match self {
            OrthogonalBasis::Legendre => (2.0 * mode as f64 + 1.0) / 2.0,
            OrthogonalBasis::Chebyshev => {
                let c = if mode == 0 { PI } else { PI * 0.5 };
                1.0 / c
            }
            OrthogonalBasis::FourierEven => {
                if mode == 0 {
                    0.5 / PI
                } else {
                    1.0 / PI
                }
            }
            // sin(0·x) vanishes identically, its coefficient is forced to 0
            OrthogonalBasis::FourierOdd => {
                if mode == 0 {
                    0.0
                } else {
                    1.0 / PI
                }
            }
        }
    }
}

impl fmt::Display for OrthogonalBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Legendre polynomial of degree `n` from the closed form
///
/// ```text
/// P_n(x) = 2ⁿ · Σ_{k=0}^{n} xᵏ · C(n, k) · C((n + k - 1) / 2, n)
/// ```
fn legendre(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let nf = n as f64;
            let mut sum = 0.0;
            for k in 0..=n {
                let kf = k as f64;
                sum += x.powi(k as i32) * combination(nf, kf) * combination((nf + kf - 1.0) / 2.0, nf);
            }
            sum * 2f64.powi(n as i32)
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::integrate;
    use approx::assert_relative_eq;

    const SAMPLES: [f64; 7] = [-0.9, -0.5, -0.1, 0.0, 0.3, 0.7, 0.95];

    #[test]
    fn test_canonical_domains() {
        assert_eq!(OrthogonalBasis::Legendre.canonical_domain(), Interval::new(-1.0, 1.0));
        assert_eq!(OrthogonalBasis::Chebyshev.canonical_domain(), Interval::new(-1.0, 1.0));
        assert_eq!(OrthogonalBasis::FourierEven.canonical_domain(), Interval::new(-PI, PI));
        assert_eq!(OrthogonalBasis::FourierOdd.canonical_domain(), Interval::new(-PI, PI));
    }

    #[test]
    fn test_legendre_low_orders() {
        let basis = OrthogonalBasis::Legendre;
        for &x in &SAMPLES {
            assert_eq!(basis.basis_value(0, x), 1.0);
            assert_eq!(basis.basis_value(1, x), x);
            assert_relative_eq!(basis.basis_value(2, x), 0.5 * (3.0 * x * x - 1.0), epsilon = 1e-12);
            assert_relative_eq!(basis.basis_value(3, x), 0.5 * (5.0 * x.powi(3) - 3.0 * x), epsilon = 1e-12);
            assert_relative_eq!(
                basis.basis_value(4, x),
                (35.0 * x.powi(4) - 30.0 * x * x + 3.0) / 8.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_legendre_matches_recurrence() {
        // (n+1) P_{n+1} = (2n+1) x P_n - n P_{n-1}
        let basis = OrthogonalBasis::Legendre;
        for &x in &SAMPLES {
            let mut prev = 1.0;
            let mut curr = x;
            for n in 1..12 {
                let nf = n as f64;
                let next = ((2.0 * nf + 1.0) * x * curr - nf * prev) / (nf + 1.0);
                assert_relative_eq!(basis.basis_value(n + 1, x), next, epsilon = 1e-8);
                prev = curr;
                curr = next;
            }
        }
    }

    #[test]
    fn test_legendre_end_point_values() {
        let basis = OrthogonalBasis::Legendre;
        for n in 0..10 {
            assert_relative_eq!(basis.basis_value(n, 1.0), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_chebyshev_low_orders() {
        let basis = OrthogonalBasis::Chebyshev;
        for &x in &SAMPLES {
            assert_relative_eq!(basis.basis_value(0, x), 1.0, epsilon = 1e-12);
            assert_relative_eq!(basis.basis_value(1, x), x, epsilon = 1e-12);
            assert_relative_eq!(basis.basis_value(2, x), 2.0 * x * x - 1.0, epsilon = 1e-12);
            assert_relative_eq!(basis.basis_value(3, x), 4.0 * x.powi(3) - 3.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fourier_values() {
        assert_relative_eq!(OrthogonalBasis::FourierEven.basis_value(3, 0.4), (1.2f64).cos());
        assert_relative_eq!(OrthogonalBasis::FourierOdd.basis_value(3, 0.4), (1.2f64).sin());
        assert_eq!(OrthogonalBasis::FourierOdd.basis_value(0, 1.0), 0.0);
    }

    #[test]
    fn test_normalization_constants() {
        assert_eq!(OrthogonalBasis::Legendre.normalization_constant(0), 0.5);
        assert_eq!(OrthogonalBasis::Legendre.normalization_constant(3), 3.5);
        assert_relative_eq!(OrthogonalBasis::Chebyshev.normalization_constant(0), 1.0 / PI);
        assert_relative_eq!(OrthogonalBasis::Chebyshev.normalization_constant(4), 2.0 / PI);
        assert_relative_eq!(OrthogonalBasis::FourierEven.normalization_constant(0), 0.5 / PI);
        assert_relative_eq!(OrthogonalBasis::FourierEven.normalization_constant(1), 1.0 / PI);
        assert_eq!(OrthogonalBasis::FourierOdd.normalization_constant(0), 0.0);
        assert_relative_eq!(OrthogonalBasis::FourierOdd.normalization_constant(7), 1.0 / PI);
    }

    #[test]
    fn test_fourier_modes_are_orthonormal_under_normalization() {
        for basis in [OrthogonalBasis::FourierEven, OrthogonalBasis::FourierOdd] {
            for n in 1..6 {
                for m in 1..6 {
                    let inner = integrate(
                        |x| basis.basis_value(n, x) * basis.basis_value(m, x),
                        800,
                        basis.canonical_domain(),
                    )
                    .unwrap()
                        * basis.normalization_constant(n);
                    let expected = if n == m { 1.0 } else { 0.0 };
                    assert_relative_eq!(inner, expected, epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_legendre_modes_are_orthonormal_under_normalization() {
        let basis = OrthogonalBasis::Legendre;
        for n in 0..5 {
            for m in 0..5 {
                let inner = integrate(
                    |x| basis.basis_value(n, x) * basis.basis_value(m, x),
                    2000,
                    basis.canonical_domain(),
                )
                .unwrap()
                    * basis.normalization_constant(n);
                let expected = if n == m { 1.0 } else { 0.0 };
                assert_relative_eq!(inner, expected, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(OrthogonalBasis::FourierOdd.to_string(), "Fourier (odd)");
        assert_eq!(OrthogonalBasis::ALL.len(), 4);
    }
}
