//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-curve plots
/// - `curve_colors`: Optional colors for multi-curve plots (one per curve)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use heat_rs::output::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("Heat pulse");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// assert_eq!(config.xlabel, "x");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "u(x, t)")
    pub ylabel: String,

    /// Line color for single-curve plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-curve plots
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    pub curve_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "x".to_string(),
            ylabel: "u(x, t)".to_string(),
            line_color: RED,
            curve_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for a solution profile `u(x)` with optional custom title
    ///
    /// Title defaults to "Temperature Profile".
    ///
    /// ```rust
    /// use heat_rs::output::{PlotConfig, NO_TITLE};
    ///
    /// assert_eq!(PlotConfig::profile(NO_TITLE).title, "Temperature Profile");
    /// assert_eq!(PlotConfig::profile(format!("t = {}", 0.5)).title, "t = 0.5");
    /// ```
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Temperature Profile".to_string()),
            ..Self::default()
        }
    }

    /// Config for a basis fit (function against its truncated expansion)
    pub fn basis_fit(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title.into_optional_title().unwrap_or_else(|| "Basis Fit".to_string()),
            ylabel: "f(x)".to_string(),
            ..Self::default()
        }
    }

    /// Builder pattern: set colors of multi-curve plots
    pub fn with_curve_colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.curve_colors = Some(colors);
        self
    }

    /// Color of the curve at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn curve_color(&self, curve_index: usize) -> RGBColor {
        if let Some(ref colors) = self.curve_colors {
            if curve_index < colors.len() {
                return colors[curve_index];
            }
        }

        const PALETTE: [RGBColor; 8] = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        PALETTE[curve_index % PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
