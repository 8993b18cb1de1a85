//! Truncated Expansions in Four Bases
//!
//! Fits the same function with Legendre, Chebyshev, cosine and sine modes
//! at increasing degree, reports the error and plots each fit against the
//! original.

use heat_rs::{
    math::Interval,
    output::{plot_profiles, sample_function, PlotConfig},
    spectral::{fit, OrthogonalBasis},
};
use std::error::Error;

fn target(x: f64) -> f64 {
    x * (1.0 - x) * (4.0 * x).cos()
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Basis Fits of x(1 - x)cos(4x) on [0, 1] ===\n");

    let range = Interval::new(0.0, 1.0);
    let integration_points = 400;
    let sample_dx = 0.005;
    let tmp_dir = std::env::temp_dir();

    let exact = sample_function(|x| Ok(target(x)), range, sample_dx)?.with_label("f(x)");

    for basis in OrthogonalBasis::ALL {
        println!("{}:", basis);
        let mut curves = vec![exact.clone()];

        for degree in [2usize, 5, 10] {
            let fitted = fit(target, basis, degree, integration_points, range)?;
            let curve = sample_function(|x| fitted.evaluate(x), range, sample_dx)?
                .with_label(format!("degree {}", degree));

            let max_error = curve
                .points()
                .map(|(x, y)| (y - target(x)).abs())
                .fold(0.0, f64::max);
            println!("  degree {:>2}: max error {:.3e}", degree, max_error);

            curves.push(curve);
        }

        let slug: String = basis
            .name()
            .to_lowercase()
            .chars()
            .filter_map(|c| match c {
                'a'..='z' => Some(c),
                ' ' => Some('_'),
                _ => None,
            })
            .collect();
        let file_name = format!("basis_fit_{}.png", slug);
        let path = tmp_dir.join(&file_name);
        plot_profiles(
            &curves,
            path.to_str().ok_or("non UTF-8 temp path")?,
            Some(&PlotConfig::basis_fit(format!("{} fit", basis))),
        )?;
        println!("  ✓ {}\n", file_name);
    }

    Ok(())
}
