//! Initial and boundary condition profiles
//!
//! A [`Profile`] is the callable the solvers sample to build their state:
//!
//! - the finite-difference solver evaluates its initial profile at every
//!   grid *index* `i = 0..N` and its boundary profile at indices `0` and `N-1`
//! - the spectral solver evaluates its initial profile at *physical*
//!   positions (after odd extension)
//!
//! [`Profile::on_grid`] converts a physical-coordinate profile into an
//! index-coordinate one, `i ↦ f(start + i·dx)`.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::solver::Profile;
//!
//! let bump = Profile::gaussian(0.5, 0.1, 1.0);
//! assert!((bump.evaluate(0.5).unwrap() - 1.0).abs() < 1e-12);
//!
//! // the same bump on a grid with dx = 0.01 starting at 0
//! let on_grid = bump.on_grid(0.0, 0.01);
//! assert!((on_grid.evaluate(50.0).unwrap() - 1.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use std::sync::Arc;

use nalgebra::DVector;

use crate::error::{DiffusionError, Result};
use crate::math::{convert_range, Interval};

// =================================================================================================
// Profile
// =================================================================================================

/// Scalar function of one coordinate used as initial or boundary condition
pub enum Profile {
    /// Identically zero
    Zero,

    /// Identically `value`
    Constant(f64),

    /// `amplitude · sin(wavenumber · π · x)`
    Sine { amplitude: f64, wavenumber: f64 },

    /// `peak · exp(-((x - center) / width)² / 2)`
    Gaussian { center: f64, width: f64, peak: f64 },

    /// `value` on `[start, end)`, zero elsewhere
    Rectangle { start: f64, end: f64, value: f64 },

    /// User-defined function
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),

    /// Grid-backed function, see [`SampledFunction`]
    Sampled(SampledFunction),

    /// `source` evaluated at `start + step · x`
    Rescaled {
        source: Arc<Profile>,
        start: f64,
        step: f64,
    },
}

// ==================== Manual Clone Implementation ====================

impl Clone for Profile {
    fn clone(&self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::Constant(value) => Self::Constant(*value),
            Self::Sine { amplitude, wavenumber } => Self::Sine {
                amplitude: *amplitude,
                wavenumber: *wavenumber,
            },
            Self::Gaussian { center, width, peak } => Self::Gaussian {
                center: *center,
                width: *width,
                peak: *peak,
            },
            Self::Rectangle { start, end, value } => Self::Rectangle {
                start: *start,
                end: *end,
                value: *value,
            },
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
            Self::Sampled(sampled) => Self::Sampled(sampled.clone()),
            Self::Rescaled { source, start, step } => Self::Rescaled {
                source: Arc::clone(source),
                start: *start,
                step: *step,
            },
        }
    }
}

// ==================== Manual Debug Implementation ====================

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zero => f.debug_struct("Zero").finish(),
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Sine { amplitude, wavenumber } => f
                .debug_struct("Sine")
                .field("amplitude", amplitude)
                .field("wavenumber", wavenumber)
                .finish(),
            Self::Gaussian { center, width, peak } => f
                .debug_struct("Gaussian")
                .field("center", center)
                .field("width", width)
                .field("peak", peak)
                .finish(),
            Self::Rectangle { start, end, value } => f
                .debug_struct("Rectangle")
                .field("start", start)
                .field("end", end)
                .field("value", value)
                .finish(),
            Self::Custom(_) => f
                .debug_struct("Custom")
                .field("function", &"<user-defined>")
                .finish(),
            Self::Sampled(sampled) => f.debug_tuple("Sampled").field(sampled).finish(),
            Self::Rescaled { source, start, step } => f
                .debug_struct("Rescaled")
                .field("source", source)
                .field("start", start)
                .field("step", step)
                .finish(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::Zero
    }
}

// ==================== Implementation ====================

impl Profile {
    /// Identically zero profile
    pub fn zero() -> Self {
        Self::Zero
    }

    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// `amplitude · sin(wavenumber · π · x)`
    pub fn sine(amplitude: f64, wavenumber: f64) -> Self {
        Self::Sine { amplitude, wavenumber }
    }

    /// Bell-shaped profile centred on `center` with standard deviation `width`
    pub fn gaussian(center: f64, width: f64, peak: f64) -> Self {
        Self::Gaussian { center, width, peak }
    }

    /// Constant `value` on `[start, end)`
    ///
    /// # Panics
    ///
    /// Panics when `end <= start`.
    pub fn rectangle(start: f64, end: f64, value: f64) -> Self {
        assert!(end > start, "Rectangle end must be > start");
        Self::Rectangle { start, end, value }
    }

    /// Wrap a user-defined function
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Grid-backed profile
    pub fn sampled(sampled: SampledFunction) -> Self {
        Self::Sampled(sampled)
    }

    /// Re-express a physical-coordinate profile in grid indices
    ///
    /// The returned profile maps index `i` to `self(start + i·dx)`.
    pub fn on_grid(self, start: f64, dx: f64) -> Self {
        Self::Rescaled {
            source: Arc::new(self),
            start,
            step: dx,
        }
    }

    /// Evaluate the profile at `x`
    ///
    /// # Errors
    ///
    /// Only grid-backed profiles can fail, with
    /// [`DiffusionError::Index`] when `x` falls outside their range.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        match self {
            Self::Zero => Ok(0.0),
            Self::Constant(value) => Ok(*value),
            Self::Sine { amplitude, wavenumber } => Ok(amplitude * (wavenumber * PI * x).sin()),
            Self::Gaussian { center, width, peak } => {
                let distance = (x - center) / width;
                Ok(peak * (-distance * distance / 2.0).exp())
            }
            Self::Rectangle { start, end, value } => {
                if x >= *start && x < *end {
                    Ok(*value)
                } else {
                    Ok(0.0)
                }
            }
            Self::Custom(f) => Ok(f(x)),
            Self::Sampled(sampled) => sampled.evaluate(x),
            Self::Rescaled { source, start, step } => source.evaluate(start + step * x),
        }
    }

    /// Evaluate at several positions, stopping at the first failure
    pub fn evaluate_series(&self, positions: &[f64]) -> Result<Vec<f64>> {
        positions.iter().map(|&x| self.evaluate(x)).collect()
    }
}

// =================================================================================================
// Sampled function
// =================================================================================================

/// Array of samples spread uniformly over a physical range
///
/// Evaluation maps `x` into index space `[0, len-1]`, floors, and returns the
/// stored sample: nearest-lower-index lookup, no interpolation. Positions that
/// map outside the array fail with [`DiffusionError::Index`].
///
/// This is how a curve drawn by a user (one sample per pixel column) becomes
/// an initial condition.
///
/// # Example
///
/// ```rust
/// use heat_rs::math::Interval;
/// use heat_rs::solver::SampledFunction;
///
/// let f = SampledFunction::new(vec![0.0, 1.0, 2.0, 3.0], Interval::new(0.0, 3.0)).unwrap();
/// assert_eq!(f.evaluate(1.7).unwrap(), 1.0);
/// assert!(f.evaluate(-0.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampledFunction {
    values: DVector<f64>,
    range: Interval,
}

impl SampledFunction {
    /// Wrap `values` spread over `range`
    ///
    /// # Errors
    ///
    /// - [`DiffusionError::Configuration`] when fewer than two samples are given
    /// - [`DiffusionError::Domain`] when `range` has zero length
    pub fn new(values: Vec<f64>, range: Interval) -> Result<Self> {
        if values.len() < 2 {
            return Err(DiffusionError::configuration(
                "sample count",
                format!("need at least 2 samples, got {}", values.len()),
            ));
        }
        range.ensure_non_degenerate("sampled function range")?;

        Ok(Self {
            values: DVector::from_vec(values),
            range,
        })
    }

    /// Sample `f` at `len` evenly spaced points of `range` (end points included)
    pub fn from_fn<F>(f: F, len: usize, range: Interval) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        if len < 2 {
            return Err(DiffusionError::configuration(
                "sample count",
                format!("need at least 2 samples, got {}", len),
            ));
        }
        let step = range.length() / (len - 1) as f64;
        let values = (0..len).map(|i| f(range.start() + i as f64 * step)).collect();
        Self::new(values, range)
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn range(&self) -> Interval {
        self.range
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at physical position `x`
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let len = self.values.len();
        let index = convert_range(x, self.range, Interval::indices(len))?.floor();

        if !(index >= 0.0 && index < len as f64) {
            return Err(DiffusionError::Index {
                position: x,
                index,
                len,
            });
        }

        Ok(self.values[index as usize])
    }

    /// Replace non-finite samples by the mean of the finite samples within
    /// `window` positions on either side
    ///
    /// A gap with no finite neighbour inside the window becomes `0.0`.
    pub fn fill_gaps(mut self, window: usize) -> Self {
        let original = self.values.clone();
        let len = original.len();

        for i in 0..len {
            if original[i].is_finite() {
                continue;
            }

            let lo = i.saturating_sub(window);
            let hi = (i + window).min(len - 1);
            let (sum, count) = (lo..=hi)
                .filter(|&j| j != i && original[j].is_finite())
                .fold((0.0, 0usize), |(sum, count), j| (sum + original[j], count + 1));

            self.values[i] = if count > 0 { sum / count as f64 } else { 0.0 };
        }

        self
    }
}

// =================================================================================================
// Grid conditions
// =================================================================================================

/// Initial and boundary profiles of the finite-difference solver
///
/// Both profiles are evaluated in grid-index coordinates.
#[derive(Debug, Clone, Default)]
pub struct GridConditions {
    /// Sampled at every index on reset
    pub initial: Profile,

    /// Sampled at the first and last index before every step
    pub boundary: Profile,
}

impl GridConditions {
    pub fn new(initial: Profile, boundary: Profile) -> Self {
        Self { initial, boundary }
    }

    /// Dirichlet-zero boundaries with the given initial profile
    pub fn with_zero_boundary(initial: Profile) -> Self {
        Self::new(initial, Profile::Zero)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
