//! Generalized binomial coefficients for the Legendre closed form

/// Binomial coefficient `C(n, r)` for real `n`
///
/// Uses the symmetry `C(n, r) = C(n, n - r)` whenever `2(n - r) > n`, then
/// evaluates the product `Π_{i=1}^{⌊r⌋} (n - i + 1) / i` iteratively.
///
/// `n` may be fractional: the Legendre sum needs `C((n + k - 1) / 2, n)`,
/// which is the generalized binomial coefficient.
///
/// # Example
///
/// ```rust
/// use heat_rs::math::combination;
///
/// assert_eq!(combination(5.0, 2.0), 10.0);
/// assert_eq!(combination(0.5, 2.0), -0.125);
/// ```
pub fn combination(n: f64, r: f64) -> f64 {
    let r = if 2.0 * (n - r) > n { n - r } else { r };

    let mut num = 1.0;
    let mut i = 1.0;
    while i <= r {
        num = num * (n - i + 1.0) / i;
        i += 1.0;
    }
    num
}
