//! Spatial profile plotting
//!
//! # Usage
//!
//! ```rust,ignore
//! use heat_rs::output::{plot_profile, plot_profiles, sample_curve, PlotConfig};
//!
//! let curve = sample_curve(&solver, domain, 0.005, t)?;
//! plot_profile(&curve, "profile.png", None)?;
//!
//! // several solvers, or several times, on the same axes
//! plot_profiles(&[fd_curve, spectral_curve], "comparison.svg", Some(&PlotConfig::profile("t = 0.01")))?;
//! ```
//!
//! The backend is picked from the file extension: `.svg` writes SVG,
//! anything else a bitmap.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use super::config::{PlotConfig, NO_TITLE};
use crate::output::Curve;

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot one curve
pub fn plot_profile(curve: &Curve, output_path: &str, config: Option<&PlotConfig>) -> Result<(), Box<dyn Error>> {
    plot_profiles(std::slice::from_ref(curve), output_path, config)
}

/// Overlay several curves on the same axes
///
/// Single-curve plots use `config.line_color`, multi-curve plots the
/// configured or default palette, with a legend built from the labels.
///
/// # Errors
///
/// - no curve, or only empty / non-finite curves
/// - backend (file or font) errors
pub fn plot_profiles(curves: &[Curve], output_path: &str, config: Option<&PlotConfig>) -> Result<(), Box<dyn Error>> {
    if curves.is_empty() {
        return Err("No curves provided".into());
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (x_range, y_range) = plot_ranges(curves).ok_or("No finite data to plot")?;

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profiles_impl(backend, curves, config, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profiles_impl(backend, curves, config, x_range, y_range)
        }
    }
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Axis ranges covering every finite sample, y padded by 10%
///
/// Flat curves get a unit-height window so the chart stays drawable.
fn plot_ranges(curves: &[Curve]) -> Option<((f64, f64), (f64, f64))> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for curve in curves {
        for (x, y) in curve.points().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() {
        return None;
    }
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let span = y_max - y_min;
    let (y_low, y_high) = if span > 0.0 {
        (y_min - 0.1 * span, y_max + 0.1 * span)
    } else {
        (y_min - 0.5, y_max + 0.5)
    };

    Some(((x_min, x_max), (y_low, y_high)))
}

fn plot_profiles_impl<DB: DrawingBackend>(
    backend: DB,
    curves: &[Curve],
    config: &PlotConfig,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.3}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    for (idx, curve) in curves.iter().enumerate() {
        let color = if curves.len() == 1 {
            config.line_color
        } else {
            config.curve_color(idx)
        };

        chart
            .draw_series(LineSeries::new(
                curve.points().filter(|(x, y)| x.is_finite() && y.is_finite()),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
