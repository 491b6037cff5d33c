//! Figure sizes, fonts and default colormaps of the Arcadia style.

use std::{fmt, str::FromStr};
use crate::{
    error::{Error, Result},
    gradients,
    registry::prefixed,
};

/// Resolution (dots per inch) at which figure sizes are given.
pub const BASE_DPI: u32 = 72;

/// Resolution for print exports.
pub const PRINT_DPI: u32 = 300;

/// Transparent border around figures, in pixels at [`BASE_DPI`].
pub const FIGURE_PADDING_PIXELS: u32 = 20;

/// Common figure sizes of the Arcadia templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FigureSize {
    FullWide,
    FullSquare,
    FloatWide,
    FloatSquare,
    HalfSquare,
}

impl FigureSize {
    pub const ALL: [FigureSize; 5] = [
        FigureSize::FullWide, FigureSize::FullSquare, FigureSize::FloatWide,
        FigureSize::FloatSquare, FigureSize::HalfSquare];

    /// Width and height in inches, without the padding.  For example
    /// `FullWide` is 960 pixels wide at 72 DPI.
    pub fn inches(self) -> (f64, f64) {
        match self {
            FigureSize::FullWide => (13.33333333, 5.27777777),
            FigureSize::FullSquare => (6.52777777, 6.52777777),
            FigureSize::FloatWide => (9.16666667, 5.27777777),
            FigureSize::FloatSquare => (4.44444444, 4.44444444),
            FigureSize::HalfSquare => (6.38888888, 6.38888888),
        }
    }

    /// Width and height in pixels, including the padding on each side.
    pub fn pixels(self) -> (u32, u32) {
        match self {
            FigureSize::FullWide => (1000, 420),
            FigureSize::FullSquare => (500, 500),
            FigureSize::FloatWide => (700, 420),
            FigureSize::FloatSquare => (360, 360),
            FigureSize::HalfSquare => (500, 500),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            FigureSize::FullWide => "full_wide",
            FigureSize::FullSquare => "full_square",
            FigureSize::FloatWide => "float_wide",
            FigureSize::FloatSquare => "float_square",
            FigureSize::HalfSquare => "half_square",
        }
    }
}

impl fmt::Display for FigureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FigureSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<FigureSize> {
        FigureSize::ALL.into_iter().find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnknownFigureSize(s.to_string()))
    }
}

/// Settings shared by the plotting front ends.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleConfig {
    pub base_dpi: u32,
    pub print_dpi: u32,
    pub figure_padding_pixels: u32,
    pub default_font: String,
    pub monospace_font: String,
    /// Font names as Plotly knows them.
    pub default_font_plotly: String,
    pub monospace_font_plotly: String,
    pub base_font_size: f64,
    pub title_font_size: f64,
    pub monospace_font_size: f64,
    /// Registered name of the default sequential colormap.
    pub sequential_colormap: String,
    /// Registered name of the default diverging colormap.
    pub diverging_colormap: String,
}

impl StyleConfig {
    /// The figure padding in inches.
    pub fn figure_padding_inches(&self) -> f64 {
        f64::from(self.figure_padding_pixels) / f64::from(self.base_dpi)
    }

    /// Pixel dimensions of `size` at the print resolution, without the
    /// padding.
    pub fn print_pixels(&self, size: FigureSize) -> (u32, u32) {
        let (w, h) = size.inches();
        let px = |x: f64| (x * f64::from(self.print_dpi)).round() as u32;
        (px(w), px(h))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            base_dpi: BASE_DPI,
            print_dpi: PRINT_DPI,
            figure_padding_pixels: FIGURE_PADDING_PIXELS,
            default_font: "Suisse Int'l".to_string(),
            monospace_font: "Suisse Int'l Mono".to_string(),
            default_font_plotly: "SuisseIntl".to_string(),
            monospace_font_plotly: "SuisseIntlMono".to_string(),
            base_font_size: 15.,
            title_font_size: 16.,
            monospace_font_size: 14.5,
            sequential_colormap: prefixed(gradients::MAGMA.name()),
            diverging_colormap: prefixed(gradients::POPPIES.name()),
        }
    }
}
