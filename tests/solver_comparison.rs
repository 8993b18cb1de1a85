//! Cross-checks between the finite-difference and spectral solvers, and the
//! sampling / export path that feeds plots and CSV files

mod common;

use std::fs;

use common::{exact_sine_mode, fd_solver_on_unit_interval, UNIT};
use tempfile::tempdir;

use heat_rs::output::{
    compare_curves, compare_solvers, export_curve_csv, export_curves_csv, sample_curve, CsvConfig, CsvMetadata,
};
use heat_rs::solver::{DiffusionSolver, FiniteDifferenceSolver, Profile, SpectralConfig, SpectralSolver};

fn sine_pair(grid_points: usize, steps: usize) -> (FiniteDifferenceSolver, SpectralSolver) {
    let mut fd = fd_solver_on_unit_interval(grid_points, 0.4, Profile::sine(1.0, 1.0));
    fd.advance(steps).unwrap();
    let spectral = SpectralSolver::new(UNIT, Profile::sine(1.0, 1.0), SpectralConfig::new(10, 400)).unwrap();
    (fd, spectral)
}

// =================================================================================================
// Agreement
// =================================================================================================

#[test]
fn test_solvers_agree_on_grid_points() {
    let (fd, spectral) = sine_pair(101, 500);
    let t = fd.time();

    for (i, x) in fd.positions().into_iter().enumerate() {
        let u_spectral = spectral.solution(x, t).unwrap();
        assert!(
            (fd.grid()[i] - u_spectral).abs() < 1e-3,
            "x = {:.2}: FD {} versus spectral {}",
            x,
            fd.grid()[i],
            u_spectral
        );
        assert!((u_spectral - exact_sine_mode(1.0, x, t)).abs() < 1e-5);
    }
}

#[test]
fn test_compare_solvers_on_shared_positions() {
    let (fd, spectral) = sine_pair(101, 500);
    let t = fd.time();

    let comparison = compare_solvers(&fd, &spectral, UNIT, 0.02, t).unwrap();
    assert_eq!(comparison.points, 51);
    // nearest-left lookup costs at most one grid step of slope
    assert!(comparison.max_abs_difference < 0.05);
    assert!(comparison.rms_difference <= comparison.max_abs_difference);
}

#[test]
fn test_comparison_gap_shrinks_with_grid() {
    let t_end = 0.02;
    let gap = |grid_points: usize| {
        let mut fd = fd_solver_on_unit_interval(grid_points, 0.4, Profile::sine(1.0, 1.0));
        let steps = (t_end / fd.config().dt).round() as usize;
        fd.advance(steps).unwrap();
        let spectral = SpectralSolver::new(UNIT, Profile::sine(1.0, 1.0), SpectralConfig::new(5, 400)).unwrap();
        compare_solvers(&fd, &spectral, UNIT, 0.01, fd.time()).unwrap().rms_difference
    };

    assert!(gap(81) < gap(11));
}

#[test]
fn test_solvers_behind_trait_objects() {
    let (fd, spectral) = sine_pair(51, 100);
    let t = fd.time();
    let solvers: Vec<Box<dyn DiffusionSolver>> = vec![Box::new(fd), Box::new(spectral)];

    let curves: Vec<_> = solvers
        .iter()
        .map(|solver| sample_curve(solver.as_ref(), UNIT, 0.05, t).unwrap())
        .collect();

    assert_eq!(curves[0].label, "Finite Difference (explicit)");
    assert_eq!(curves[1].label, "Spectral (Fourier sine series)");
    assert_eq!(curves[0].x, curves[1].x);
    assert!(compare_curves(&curves[0], &curves[1]).max_abs_difference < 0.1);
}

// =================================================================================================
// Export
// =================================================================================================

#[test]
fn test_export_both_solutions_with_metadata() {
    let (fd, spectral) = sine_pair(21, 40);
    let t = fd.time();
    let dir = tempdir().unwrap();
    let path = dir.path().join("comparison.csv");

    let fd_curve = sample_curve(&fd, UNIT, 0.05, t).unwrap();
    let spectral_curve = sample_curve(&spectral, UNIT, 0.05, t).unwrap();

    let mut metadata = CsvMetadata::from_finite_difference(&fd);
    metadata.add_custom("Spectral Degree", spectral.degree().to_string());
    let config = CsvConfig::default().with_metadata(metadata);

    export_curves_csv(&[fd_curve, spectral_curve], path.to_str().unwrap(), Some(&config)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Diffusion Simulation Data"));
    assert!(content.contains("# Solver: Finite Difference (explicit)"));
    assert!(content.contains("# Grid Points: 21"));
    assert!(content.contains("# Spectral Degree: 10"));
    assert!(content.contains("x,Finite Difference (explicit),Spectral (Fourier sine series)"));

    let data_lines = content.lines().filter(|line| !line.starts_with('#')).count();
    // header plus 21 samples
    assert_eq!(data_lines, 22);
}

#[test]
fn test_export_spectral_profile() {
    let spectral = SpectralSolver::new(UNIT, Profile::gaussian(0.5, 0.1, 1.0), SpectralConfig::default()).unwrap();
    let curve = sample_curve(&spectral, UNIT, 0.1, 0.001).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("spectral.csv");

    let config = CsvConfig::european().with_metadata(CsvMetadata::from_spectral(&spectral, 0.001));
    export_curve_csv(&curve, path.to_str().unwrap(), Some(&config)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# Degree: 30"));
    assert!(content.contains("# Integration Points: 400"));
    assert!(content.contains("0,500000;"));
}

#[test]
fn test_export_rejects_mismatched_positions() {
    let (fd, spectral) = sine_pair(21, 10);
    let t = fd.time();
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");

    let coarse = sample_curve(&fd, UNIT, 0.1, t).unwrap();
    let fine = sample_curve(&spectral, UNIT, 0.05, t).unwrap();

    assert!(export_curves_csv(&[coarse, fine], path.to_str().unwrap(), None).is_err());
}
