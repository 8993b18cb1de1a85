//! Visualization of sampled solutions with `plotters`
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profiles**: Spatial plots `u(x)` of one or several curves
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::{plot_profile, PlotConfig};
//!
//! let curve = sample_curve(&solver, domain, 0.01, 0.0)?;
//!
//! // default config
//! plot_profile(&curve, "initial.png", None)?;
//!
//! // custom title
//! plot_profile(&curve, "initial.svg", Some(&PlotConfig::profile("Initial condition")))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One solver at one time | `plot_profile` |
//! | FD vs spectral, or several times | `plot_profiles` |

pub mod config;
pub mod profiles;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use profiles::{plot_profile, plot_profiles};
