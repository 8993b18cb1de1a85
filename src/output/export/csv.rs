//! CSV export of sampled solutions
//!
//! Files open in any spreadsheet, pandas or gnuplot.
//!
//! # Features
//!
//! - **Simple interface**: export one [`Curve`] or several sharing the same x
//! - **Metadata support**: optional `#` comment header with solver parameters
//! - **Customizable**: delimiter, decimal separator, precision, headers
//! - **Validation**: rejects empty curves, length mismatches and NaN/Inf
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use heat_rs::output::{export_curve_csv, Curve};
//!
//! let curve = Curve::new("u", vec![0.0, 0.5, 1.0], vec![0.0, 1.0, 0.0]);
//! export_curve_csv(&curve, "profile.csv", None)?;
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! x,u
//! 0.000000,0.000000
//! 0.500000,1.000000
//! 1.000000,0.000000
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use heat_rs::output::{export_curve_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_finite_difference(&solver);
//! let config = CsvConfig::default().with_metadata(metadata);
//! export_curve_csv(&curve, "profile.csv", Some(&config))?;
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! # Diffusion Simulation Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Solver: Finite Difference (explicit)
//! # Domain: [0, 1]
//! # Time: 0.0113
//! # Grid Points: 200
//! # dt: 0.0000113
//! # dx: 0.00502
//! #
//! x,u
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::output::Curve;
use crate::solver::{DiffusionSolver, FiniteDifferenceSolver, SpectralSolver};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use heat_rs::output::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.x_header, "x");
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the position column (default: "x")
    pub x_header: String,

    /// Header of the value column for single-curve exports (default: "u")
    pub value_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            x_header: "x".to_string(),
            value_header: "u".to_string(),
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter, comma as decimal separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are `Some` end up in the header.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Solver name (e.g. "Finite Difference (explicit)")
    pub solver_name: Option<String>,

    /// Physical domain, already formatted
    pub domain: Option<String>,

    /// Simulation time of the exported profile
    pub time: Option<f64>,

    /// Finite differences: grid size
    pub grid_points: Option<usize>,

    /// Finite differences: time step
    pub dt: Option<f64>,

    /// Finite differences: space step
    pub dx: Option<f64>,

    /// Spectral: highest mode
    pub degree: Option<usize>,

    /// Spectral: quadrature subdivisions
    pub integration_points: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Parameters and current time of a finite-difference solver
    pub fn from_finite_difference(solver: &FiniteDifferenceSolver) -> Self {
        let config = solver.config();
        Self {
            solver_name: Some(solver.name().to_string()),
            domain: Some(solver.domain().to_string()),
            time: Some(solver.time()),
            grid_points: Some(config.grid_points),
            dt: Some(config.dt),
            dx: Some(config.dx),
            ..Default::default()
        }
    }

    /// Parameters of a spectral solver sampled at time `t`
    pub fn from_spectral(solver: &SpectralSolver, t: f64) -> Self {
        Self {
            solver_name: Some(solver.name().to_string()),
            domain: Some(solver.domain().to_string()),
            time: Some(t),
            degree: Some(solver.degree()),
            integration_points: Some(solver.config().integration_points),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(out, "# Diffusion Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(domain) = &metadata.domain {
        writeln!(out, "# Domain: {}", domain)?;
    }
    if let Some(time) = metadata.time {
        writeln!(out, "# Time: {}", time)?;
    }

    // Finite-difference parameters
    if let Some(grid_points) = metadata.grid_points {
        writeln!(out, "# Grid Points: {}", grid_points)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(out, "# dt: {}", dt)?;
    }
    if let Some(dx) = metadata.dx {
        writeln!(out, "# dx: {}", dx)?;
    }

    // Spectral parameters
    if let Some(degree) = metadata.degree {
        writeln!(out, "# Degree: {}", degree)?;
    }
    if let Some(points) = metadata.integration_points {
        writeln!(out, "# Integration Points: {}", points)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn validate_curve(curve: &Curve) -> Result<(), Box<dyn Error>> {
    if curve.is_empty() {
        return Err(format!("Empty data: curve '{}' has no samples", curve.label).into());
    }
    if curve.x.len() != curve.y.len() {
        return Err(format!(
            "Data length mismatch in '{}': {} positions versus {} values",
            curve.label,
            curve.x.len(),
            curve.y.len()
        )
        .into());
    }
    if curve.x.iter().chain(curve.y.iter()).any(|v| !v.is_finite()) {
        return Err(format!("Invalid data: NaN or Inf detected in '{}'", curve.label).into());
    }
    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export one curve as two columns, position and value
///
/// # Errors
///
/// - empty curve, mismatched lengths, NaN or Inf values
/// - file creation or write errors
pub fn export_curve_csv(curve: &Curve, output_path: &str, configuration: Option<&CsvConfig>) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    validate_curve(curve)?;

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Write ==================================

    let mut out = BufWriter::new(File::create(output_path)?);

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut out, metadata)?;
        }
    }

    writeln!(
        out,
        "{}{}{}",
        configuration.x_header, configuration.delimiter, configuration.value_header
    )?;

    for (x, y) in curve.points() {
        writeln!(
            out,
            "{}{}{}",
            format_number(x, configuration),
            configuration.delimiter,
            format_number(y, configuration)
        )?;
    }

    out.flush()?;
    log::debug!("exported {} samples to {}", curve.len(), output_path);
    Ok(())
}

/// Export several curves sampled on the same positions
///
/// Columns: position, then one column per curve headed by its label.
///
/// # Errors
///
/// Same as [`export_curve_csv`], plus curves whose positions differ from the
/// first one.
pub fn export_curves_csv(curves: &[Curve], output_path: &str, configuration: Option<&CsvConfig>) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    let reference = curves
        .first()
        .ok_or("Empty data: at least one curve is required")?;

    for curve in curves {
        validate_curve(curve)?;
        if curve.x != reference.x {
            return Err(format!(
                "Curve '{}' is not sampled on the same positions as '{}'",
                curve.label, reference.label
            )
            .into());
        }
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Write ==================================

    let mut out = BufWriter::new(File::create(output_path)?);

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut out, metadata)?;
        }
    }

    write!(out, "{}", configuration.x_header)?;
    for curve in curves {
        write!(out, "{}{}", configuration.delimiter, curve.label)?;
    }
    writeln!(out)?;

    for (i, x) in reference.x.iter().enumerate() {
        write!(out, "{}", format_number(*x, configuration))?;
        for curve in curves {
            write!(out, "{}{}", configuration.delimiter, format_number(curve.y[i], configuration))?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    log::debug!("exported {} curves to {}", curves.len(), output_path);
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
