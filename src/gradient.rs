use std::{fmt, ops::Add};
use rgb::{RGB8, RGBA};
use tracing::debug;
use crate::{
    display::colorize,
    error::{Error, Result},
    hexcode::{unit_to_u8, HexCode},
    palette::Palette,
    registry::Colormap,
    values::{distribute_unit, interpolate_x_values,
             is_non_decreasing, rescale_and_concatenate_values},
    ColorRange, RGBColor,
};

/// Number of entries of the lookup table used to sample gradients.
pub const LUT_SIZE: usize = 256;

/// Default number of blocks of [`Gradient::swatch`].
pub const SWATCH_STEPS: usize = 21;

/// A color and its position in \[0, 1\] along a gradient.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Anchor {
    pub color: HexCode,
    pub value: f64,
}

/// A continuous range of colors defined by [`Anchor`]s.
///
/// The first anchor sits at `0.` and the last at `1.`; colors between
/// two anchors are linearly interpolated in sRGB.  See the
/// [`ColorRange`] trait to sample it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gradient {
    name: String,
    anchors: Vec<Anchor>,
    // sRGB channels in [0, 1]
    #[cfg_attr(feature = "serde", serde(skip))]
    lut: Vec<[f64; 3]>,
}

fn check_values(values: &[f64], colors: usize) -> Result<()> {
    use Error::InvalidGradientValues as Invalid;
    if values.len() < 2 {
        return Err(Invalid { reason: "a gradient must have at least two values" });
    }
    if !values.iter().all(|v| (0. ..= 1.).contains(v)) {
        return Err(Invalid { reason: "all values must be between 0 and 1" });
    }
    if values[0] != 0. || values[values.len() - 1] != 1. {
        return Err(Invalid {
            reason: "the first value must be 0 and the last value must be 1" });
    }
    if !is_non_decreasing(values) {
        return Err(Invalid { reason: "values must be non-decreasing" });
    }
    if values.len() != colors {
        return Err(Error::LengthMismatch { colors, values: values.len() });
    }
    Ok(())
}

/// Lookup table sampling the anchors at `i / (LUT_SIZE - 1)`.
fn lookup_table(anchors: &[Anchor]) -> Vec<[f64; 3]> {
    let last = (LUT_SIZE - 1) as f64;
    let xs: Vec<f64> = anchors.iter().map(|a| a.value * last).collect();
    let cs: Vec<[f64; 3]> = anchors.iter().map(|a| a.color.to_unit_rgb()).collect();
    let n = anchors.len();
    let mut lut = Vec::with_capacity(LUT_SIZE);
    lut.push(cs[0]);
    for i in 1 .. LUT_SIZE - 1 {
        let x = i as f64;
        // First anchor at or after `x`; anchors start at 0 < x.
        let k = xs.iter().position(|&xk| xk >= x).unwrap_or(n - 1).max(1);
        let d = (x - xs[k - 1]) / (xs[k] - xs[k - 1]);
        let (c0, c1) = (cs[k - 1], cs[k]);
        lut.push([0, 1, 2].map(|j| (c0[j] + d * (c1[j] - c0[j])).clamp(0., 1.)));
    }
    lut.push(cs[n - 1]);
    lut
}

impl Gradient {
    /// Create a gradient.  Without `values`, the colors are evenly
    /// spread over \[0, 1\].
    ///
    /// # Errors
    ///
    /// Fails if there are less than two colors, or if `values` has a
    /// different length than `colors`, is not non-decreasing, leaves
    /// \[0, 1\] or does not start at `0.` and end at `1.`.
    ///
    /// # Example
    ///
    /// ```
    /// use arcadia_color::{Gradient, HexCode};
    /// let colors = vec![HexCode::new("white", "#FFFFFF").unwrap(),
    ///                   HexCode::new("black", "#000000").unwrap()];
    /// let g = Gradient::new("bw", colors, None).unwrap();
    /// assert_eq!(g.anchor_values(), vec![0., 1.]);
    /// ```
    pub fn new(name: impl Into<String>, colors: Vec<HexCode>,
               values: Option<&[f64]>) -> Result<Self> {
        if colors.len() < 2 {
            return Err(Error::TooFewColors {
                what: "a gradient", required: 2, got: colors.len() });
        }
        let values = match values {
            Some(v) => { check_values(v, colors.len())?; v.to_vec() }
            None => distribute_unit(colors.len()),
        };
        Ok(Gradient::from_anchors(name.into(), colors, values))
    }

    /// A gradient of the built-in tables, whose values are known to be
    /// valid.
    pub(crate) fn known(name: &str, colors: Vec<HexCode>, values: &[f64]) -> Self {
        debug_assert!(check_values(values, colors.len()).is_ok(), "{name}");
        Gradient::from_anchors(name.to_string(), colors, values.to_vec())
    }

    fn from_anchors(name: String, colors: Vec<HexCode>, values: Vec<f64>) -> Self {
        let anchors: Vec<Anchor> = colors.into_iter().zip(values)
            .map(|(color, value)| Anchor { color, value })
            .collect();
        let lut = lookup_table(&anchors);
        Gradient { name, anchors, lut }
    }

    /// Create a gradient from `(color name, HEX code)` pairs.
    pub fn from_pairs(name: impl Into<String>, colors: &[(&str, &str)],
                      values: Option<&[f64]>) -> Result<Self> {
        let colors = colors.iter()
            .map(|&(n, hex)| HexCode::new(n, hex))
            .collect::<Result<Vec<_>>>()?;
        Gradient::new(name, colors, values)
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn anchors(&self) -> &[Anchor] { &self.anchors }

    pub fn anchor_colors(&self) -> Vec<HexCode> {
        self.anchors.iter().map(|a| a.color.clone()).collect()
    }

    pub fn anchor_values(&self) -> Vec<f64> {
        self.anchors.iter().map(|a| a.value).collect()
    }

    pub fn num_anchors(&self) -> usize { self.anchors.len() }

    /// Return the table entry used for `t`, with `t` clamped to
    /// \[0, 1\].
    fn lut_entry(&self, t: f64) -> [f64; 3] {
        let i = (t.clamp(0., 1.) * LUT_SIZE as f64) as usize;
        self.lut[i.min(LUT_SIZE - 1)]
    }

    /// The color at position `t`, named `name`.
    fn hex_at(&self, name: String, t: f64) -> HexCode {
        let [r, g, b] = self.lut_entry(t);
        HexCode::from_rgb(name, RGB8::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b)))
    }

    /// Returns a new gradient with the colors and values reversed.
    pub fn reverse(&self) -> Gradient {
        let anchors: Vec<Anchor> = self.anchors.iter().rev()
            .map(|a| Anchor { color: a.color.clone(), value: 1. - a.value })
            .collect();
        let lut = lookup_table(&anchors);
        Gradient { name: format!("{}_r", self.name), anchors, lut }
    }

    /// Returns a swatch of `steps` blocks sampled at `i / steps`.
    pub fn swatch(&self, steps: usize) -> String {
        (0 .. steps).map(|i| {
            let c = self.hex_at(i.to_string(), i as f64 / steps as f64);
            colorize(" ", None, Some(c.to_rgb()))
        }).collect()
    }

    /// Returns `steps` colors evenly sampled along the gradient.
    pub fn resample_as_palette(&self, steps: usize) -> Palette {
        let colors = distribute_unit(steps).into_iter().enumerate()
            .map(|(i, t)| self.hex_at(format!("{}_{i}", self.name), t))
            .collect();
        Palette::new(format!("{}_resampled_{steps}", self.name), colors)
    }

    /// Map `values` to colors of the gradient.  `min` (resp. `max`)
    /// corresponds to the first (resp. last) color and defaults to the
    /// smallest (resp. largest) of `values`; values outside are
    /// clamped.  Each color is named after its normalized value.
    ///
    /// # Errors
    ///
    /// Fails if `min >= max`.
    pub fn map_values(&self, values: &[f64], min: Option<f64>,
                      max: Option<f64>) -> Result<Vec<HexCode>> {
        if values.is_empty() {
            return Ok(vec![]);
        }
        let min = min.unwrap_or_else(|| values.iter().copied().fold(f64::INFINITY, f64::min));
        let max = max.unwrap_or_else(|| values.iter().copied().fold(f64::NEG_INFINITY, f64::max));
        if !(min < max) {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(values.iter().map(|&v| {
            let t = (v - min) / (max - min);
            self.hex_at(format!("{t:?}"), t)
        }).collect())
    }

    /// Return a gradient with the same colors whose positions make
    /// the perceptual lightness (CAM02-UCS `J'`) vary linearly.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than three anchors or if the lightness
    /// of the anchors is not monotonic or is constant.
    pub fn interpolate_lightness(&self) -> Result<Gradient> {
        if self.anchors.len() < 3 {
            return Err(Error::TooFewColors {
                what: "interpolation", required: 3, got: self.anchors.len() });
        }
        let lightness: Vec<f64> = self.anchors.iter()
            .map(|a| a.color.lightness()).collect();
        let values = interpolate_x_values(&lightness)?;
        debug!(gradient = %self.name, ?lightness, ?values,
               "re-anchored gradient on lightness");
        Gradient::new(format!("{}_interpolated", self.name),
                      self.anchor_colors(), Some(&values))
    }

    /// Return the perceptual lightness (CAM02-UCS `J'`) of `steps`
    /// colors evenly sampled along the gradient, with their positions.
    pub fn lightness_profile(&self, steps: usize) -> Vec<(f64, f64)> {
        distribute_unit(steps).into_iter()
            .map(|t| (t, self.hex_at(String::new(), t).lightness()))
            .collect()
    }

    /// Return 256 `(position, "#rrggbb")` stops, the colorscale format
    /// of Plotly.
    pub fn to_colorscale(&self) -> Vec<(f64, String)> {
        ColorRange::<RGB8>::range(self, 0., 1., LUT_SIZE)
            .map(|(t, c)| (t, HexCode::from_rgb("", c).hex_code().to_string()))
            .collect()
    }

    /// A colormap interpolating between the anchors.
    pub fn to_linear_colormap(&self) -> Colormap { Colormap::Linear(self.clone()) }
}

impl<Color: RGBColor> ColorRange<Color> for Gradient {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], quantized
    /// to [`LUT_SIZE`] levels.  `t` outside \[0, 1\] gives the end colors.
    fn rgb(&self, t: f64) -> Color {
        let [r, g, b] = self.lut_entry(t);
        Color::from_rgba(RGBA { r: 255. * r, g: 255. * g, b: 255. * b, a: 255. })
    }
}

/// Concatenate two gradients, `self` on \[0, 0.5\] and `other` on
/// \[0.5, 1\].  When `other` starts with the color `self` ends with, that
/// anchor is not repeated.
impl Add<&Gradient> for &Gradient {
    type Output = Gradient;

    fn add(self, other: &Gradient) -> Gradient {
        let shared = match (self.anchors.last(), other.anchors.first()) {
            (Some(a), Some(b)) => a.color.same_color(&b.color),
            _ => false,
        };
        let offset = usize::from(shared);
        let rest = &other.anchors[offset ..];
        let values = rescale_and_concatenate_values(
            &self.anchor_values(),
            &rest.iter().map(|a| a.value).collect::<Vec<_>>());
        let anchors: Vec<Anchor> = self.anchors.iter().chain(rest)
            .zip(values)
            .map(|(a, value)| Anchor { color: a.color.clone(), value })
            .collect();
        let lut = lookup_table(&anchors);
        Gradient { name: format!("{}_{}", self.name, other.name), anchors, lut }
    }
}

impl Add for Gradient {
    type Output = Gradient;

    fn add(self, other: Gradient) -> Gradient { &self + &other }
}

/// The swatch of the gradient followed by, for each anchor, the swatch
/// of its color and its position.
impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.anchors.iter()
            .map(|a| a.color.name().chars().count()).max().unwrap_or(0);
        f.write_str(&self.swatch(SWATCH_STEPS))?;
        for a in &self.anchors {
            write!(f, "\n{} {:?}", a.color.swatch(2, Some(w)), a.value)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> HexCode { HexCode::new("white", "#FFFFFF").unwrap() }
    fn black() -> HexCode { HexCode::new("black", "#000000").unwrap() }
    fn bw() -> Gradient { Gradient::new("bw", vec![white(), black()], None).unwrap() }

    #[test]
    fn new_with_and_without_values() {
        let g = Gradient::new("g", vec![white(), black()], Some(&[0., 1.])).unwrap();
        assert_eq!(g.anchor_colors(), vec![white(), black()]);
        assert_eq!(bw().anchor_colors(), vec![white(), black()]);
        let g = Gradient::new("g", vec![white(), white(), black()], None).unwrap();
        assert_eq!(g.anchor_values(), vec![0., 0.5, 1.]);
        assert_eq!(g.num_anchors(), 3);
    }

    #[test]
    fn invalid_values() {
        let invalid: [&[f64]; 8] = [&[0., 2.], &[-1., 0.], &[0., 1.1],
                                    &[0.25, 0.5], &[], &[0.], &[1.],
                                    &[f64::NAN, 1.]];
        for v in invalid {
            let r = Gradient::new("g", vec![white(), black()], Some(v));
            assert!(matches!(r, Err(Error::InvalidGradientValues { .. })),
                    "{v:?}: {r:?}");
        }
        let r = Gradient::new("g", vec![white(), black(), black()],
                              Some(&[0., 0.7, 0.3, 1.][..]));
        assert!(matches!(r, Err(Error::InvalidGradientValues { .. })));
    }

    #[test]
    fn wrong_number_of_values() {
        assert_eq!(Gradient::new("g", vec![white(), black()], Some(&[0., 0.5, 1.])),
                   Err(Error::LengthMismatch { colors: 2, values: 3 }));
        let grey = HexCode::new("gray", "#CCCCCC").unwrap();
        assert_eq!(Gradient::new("g", vec![white(), grey, black()], Some(&[0., 1.])),
                   Err(Error::LengthMismatch { colors: 3, values: 2 }));
    }

    #[test]
    fn too_few_colors() {
        assert!(matches!(Gradient::new("g", vec![white()], None),
                         Err(Error::TooFewColors { got: 1, .. })));
    }

    #[test]
    fn from_pairs() {
        let g = Gradient::from_pairs("g", &[("white", "#FFFFFF"), ("black", "#000000")],
                                     None).unwrap();
        assert_eq!(g.anchor_colors(), vec![white(), black()]);
        assert!(Gradient::from_pairs("g", &[("white", "#FFFFFF"), ("x", "apples")],
                                     Some(&[0., 1.])).is_err());
    }

    #[test]
    fn swatch() {
        let expected = "\x1b[48;2;255;255;255m \x1b[0m\x1b[48;2;204;204;204m \x1b[0m\
                        \x1b[48;2;153;153;153m \x1b[0m\x1b[48;2;102;102;102m \x1b[0m\
                        \x1b[48;2;51;51;51m \x1b[0m";
        assert_eq!(bw().swatch(5), expected);
    }

    #[test]
    fn default_swatch_levels() {
        let levels = [255, 243, 231, 219, 207, 195, 182, 170, 158, 146, 134,
                      121, 109, 97, 85, 73, 60, 48, 36, 24, 12];
        let expected: String = levels.iter()
            .map(|l| format!("\x1b[48;2;{l};{l};{l}m \x1b[0m"))
            .collect();
        assert_eq!(bw().swatch(SWATCH_STEPS), expected);
    }

    #[test]
    fn display() {
        let g = bw();
        let expected = format!(
            "{}\n\x1b[48;2;255;255;255m  \x1b[0m\x1b[38;2;255;255;255m white #FFFFFF\x1b[0m 0.0\
             \n\x1b[48;2;0;0;0m  \x1b[0m\x1b[38;2;0;0;0m black #000000\x1b[0m 1.0",
            g.swatch(SWATCH_STEPS));
        assert_eq!(g.to_string(), expected);
    }

    #[test]
    fn reverse() {
        let g = Gradient::new("g", vec![white(), black(), black()],
                              Some(&[0., 0.25, 1.])).unwrap();
        let r = g.reverse();
        assert_eq!(r.name(), "g_r");
        assert_eq!(r.anchor_values(), vec![0., 0.75, 1.]);
        assert_eq!(r.anchor_colors()[2], white());
    }

    #[test]
    fn sampling() {
        let g = bw();
        let c: RGB8 = g.rgb(0.);
        assert_eq!(c, RGB8::new(255, 255, 255));
        let c: RGB8 = g.rgb(1.);
        assert_eq!(c, RGB8::new(0, 0, 0));
        let c: RGB8 = g.rgb(2.);
        assert_eq!(c, RGB8::new(0, 0, 0));
        let c: RGB8 = g.rgb(-1.);
        assert_eq!(c, RGB8::new(255, 255, 255));
    }

    #[test]
    fn resample() {
        let p = bw().resample_as_palette(3);
        assert_eq!(p.name(), "bw_resampled_3");
        let hex: Vec<&str> = p.iter().map(|c| c.hex_code()).collect();
        assert_eq!(hex, ["#ffffff", "#7f7f7f", "#000000"]);
        assert_eq!(p[1].name(), "bw_1");
    }

    #[test]
    fn map_values() {
        let g = bw();
        assert_eq!(g.map_values(&[], None, None), Ok(vec![]));
        let c = g.map_values(&[1., 2., 3.], None, None).unwrap();
        assert_eq!(c[0].hex_code(), "#ffffff");
        assert_eq!(c[2].hex_code(), "#000000");
        assert_eq!(c[1].name(), "0.5");
        let c = g.map_values(&[-5., 5.], Some(0.), Some(1.)).unwrap();
        assert_eq!(c[0].hex_code(), "#ffffff");
        assert_eq!(c[1].hex_code(), "#000000");
        assert_eq!(g.map_values(&[1., 1.], None, None),
                   Err(Error::InvalidRange { min: 1., max: 1. }));
    }

    #[test]
    fn interpolate_lightness() {
        let grey = HexCode::new("grey", "#404040").unwrap();
        let g = Gradient::new("g", vec![black(), grey, white()], None).unwrap();
        let i = g.interpolate_lightness().unwrap();
        assert_eq!(i.name(), "g_interpolated");
        let v = i.anchor_values();
        assert_eq!(v[0], 0.);
        assert_eq!(v[2], 1.);
        assert!(v[1] > 0. && v[1] < 1.);
        assert!(matches!(bw().interpolate_lightness(),
                         Err(Error::TooFewColors { required: 3, .. })));
        let g = Gradient::new("g", vec![white(), black(), white()], None).unwrap();
        assert_eq!(g.interpolate_lightness(), Err(Error::NonMonotonicLightness));
        let g = Gradient::new("g", vec![white(), white(), white()], None).unwrap();
        assert!(matches!(g.interpolate_lightness(),
                         Err(Error::DegenerateLightness { .. })));
    }

    #[test]
    fn add() {
        let g = bw();
        let sum = &g + &g;
        assert_eq!(sum.name(), "bw_bw");
        assert_eq!(sum.anchor_values(), vec![0., 0.5, 0.5, 1.]);
        let back = &g + &g.reverse();
        assert_eq!(back.anchor_values(), vec![0., 0.5, 1.]);
        assert_eq!(back.num_anchors(), 3);
    }

    #[test]
    fn lightness_profile() {
        let p = bw().lightness_profile(5);
        let t: Vec<f64> = p.iter().map(|&(t, _)| t).collect();
        assert_eq!(t, vec![0., 0.25, 0.5, 0.75, 1.]);
        assert!((p[0].1 - white().lightness()).abs() < 1e-12);
        assert!(p[4].1.abs() < 1e-9);
        assert!(p.windows(2).all(|w| w[0].1 > w[1].1));
        assert!(bw().lightness_profile(0).is_empty());
    }

    #[test]
    fn colorscale() {
        let s = bw().to_colorscale();
        assert_eq!(s.len(), 256);
        assert_eq!(s[0], (0., "#ffffff".to_string()));
        assert_eq!(s[255], (1., "#000000".to_string()));
        assert!((s[51].0 - 0.2).abs() < 1e-12);
    }
}
