//! Arcadia brand colors, palettes and gradients.
//!
//! - [`HexCode`]: a named color,
//! - [`Palette`]: a discrete sequence of colors,
//! - [`Gradient`]: colors anchored at positions in \[0, 1\].
//!
//! [`ColorRange`] samples palettes and gradients.  The brand data lives
//! in [`colors`], [`palettes`] and [`gradients`]; [`ColormapRegistry`]
//! collects them under `apc:` names for plotting front ends.  The
//! [`cvd`] module simulates color vision deficiencies.
//!
//! # Example
//!
//! ```
//! use rgb::RGB8;
//! use arcadia_color::{gradients, ColorRange};
//! let magma = &*gradients::MAGMA;
//! let c: RGB8 = magma.rgb(0.5);
//! let palette = magma.resample_as_palette(5);
//! assert_eq!(palette.len(), 5);
//! ```

use std::marker::PhantomData;
use rgb::{RGBA, RGB8};

pub mod values;
pub mod colorspace;
pub mod display;
mod error;
pub mod hexcode;
mod palette;
mod gradient;
pub mod cvd;
pub mod colors;
pub mod palettes;
pub mod gradients;
pub mod registry;
pub mod style;

pub use error::{Error, Result};
pub use hexcode::HexCode;
pub use palette::Palette;
pub use gradient::{Anchor, Gradient, LUT_SIZE, SWATCH_STEPS};
pub use cvd::CvdType;
pub use gradients::GradientKind;
pub use registry::{Colormap, ColormapRegistry};
pub use style::{FigureSize, StyleConfig};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl<Color, R> ColorRange<Color> for &R
where R: ColorRange<Color> {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(*self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize {
        if self.i > self.j { 0 } else { self.j - self.i + 1 }
    }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Convert a component in \[0, 255\] to a byte, rounding half to even.
#[inline]
fn to_u8(x: f64) -> u8 { x.clamp(0., 255.).round_ties_even() as u8 }

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Blend `self` with `c1` in CIE L\*C\*h\*: `t == 0.` returns
    /// `self` and `t == 1.` returns `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use arcadia_color::RGBColor;
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let purple = red.blend(&blue, 0.5);
    /// ```
    fn blend(&self, c1: &Self, t: f64) -> Self {
        let lin = |c: RGBA<f64>| RGBA {
            r: colorspace::srgb_to_linear(c.r / 255.),
            g: colorspace::srgb_to_linear(c.g / 255.),
            b: colorspace::srgb_to_linear(c.b / 255.),
            a: c.a };
        let m = colorspace::lch_mix(lin(self.to_rgba()), lin(c1.to_rgba()),
                                    t.clamp(0., 1.));
        let enc = |x: f64| 255. * colorspace::linear_to_srgb(x.clamp(0., 1.));
        Self::from_rgba(RGBA { r: enc(m.r), g: enc(m.g), b: enc(m.b), a: m.a })
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b) }
    }
}
