//! Heat Pulse: Finite Differences versus Sine Series
//!
//! ∂u/∂t = ∂²u/∂x²   on [0, 1],   u(0, t) = u(1, t) = 0
//!
//! A Gaussian pulse is diffused with both solvers from the same set-up.
//! Profiles are written at several times, then compared pointwise.

use heat_rs::{
    output::{compare_curves, export_curves_csv, plot_profiles, sample_curve, CsvConfig, CsvMetadata, PlotConfig},
    solver::{DiffusionSetup, FiniteDifferenceSolver, GridConditions, Profile, SpectralSolver},
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Heat Pulse: Finite Differences vs Spectral ===\n");

    let setup = DiffusionSetup::default();
    let domain = setup.domain;
    let pulse = Profile::gaussian(0.5, 0.08, 1.0);
    let snapshot_steps = [0usize, 200, 1000, 4000];

    println!("Set-up:");
    println!("  Domain: {}", domain);
    println!("  Grid points: {}", setup.finite_difference.grid_points);
    println!("  dt / dx²: {:.3}", setup.finite_difference.stability_ratio());
    println!("  Sine modes: {}", setup.spectral.degree);
    println!("  Integration points: {}\n", setup.spectral.integration_points);

    let grid_initial = pulse.clone().on_grid(domain.start(), setup.finite_difference.dx);
    let mut fd = FiniteDifferenceSolver::new(
        domain,
        setup.finite_difference,
        GridConditions::with_zero_boundary(grid_initial),
    )?;

    let start = std::time::Instant::now();
    let spectral = SpectralSolver::new(domain, pulse, setup.spectral)?;
    println!("✓ Spectral coefficients in {:.3} ms\n", start.elapsed().as_secs_f64() * 1e3);

    let tmp_dir = std::env::temp_dir();
    let sample_dx = setup.finite_difference.dx;
    let mut previous = 0;

    for &steps in &snapshot_steps {
        fd.advance(steps - previous)?;
        previous = steps;
        let t = fd.time();

        let fd_curve = sample_curve(&fd, domain, sample_dx, t)?;
        let spectral_curve = sample_curve(&spectral, domain, sample_dx, t)?;
        let gap = compare_curves(&fd_curve, &spectral_curve);

        println!("t = {:.5} ({} steps)", t, steps);
        println!("  max |FD - spectral| = {:.3e}", gap.max_abs_difference);
        println!("  rms |FD - spectral| = {:.3e}", gap.rms_difference);

        let stem = format!("heat_pulse_{:05}", steps);

        let config = PlotConfig::profile(format!("Heat pulse at t = {:.4}", t));
        let plot_path = tmp_dir.join(format!("{}.png", stem));
        plot_profiles(
            &[fd_curve.clone(), spectral_curve.clone()],
            plot_path.to_str().ok_or("non UTF-8 temp path")?,
            Some(&config),
        )?;

        let mut metadata = CsvMetadata::from_finite_difference(&fd);
        metadata.add_custom("Spectral Degree", spectral.degree().to_string());
        let csv_path = tmp_dir.join(format!("{}.csv", stem));
        export_curves_csv(
            &[fd_curve, spectral_curve],
            csv_path.to_str().ok_or("non UTF-8 temp path")?,
            Some(&CsvConfig::default().with_metadata(metadata)),
        )?;

        println!("  ✓ {}.png, {}.csv\n", stem, stem);
    }

    println!("=== Simulation Complete ===");
    println!("Files written to {}", tmp_dir.display());

    Ok(())
}
