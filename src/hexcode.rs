//! Named colors given by their HEX code.

use std::fmt;
use rgb::{RGB8, RGBA};
use crate::{
    colorspace,
    display::colorize,
    error::{Error, Result},
    RGBColor,
};

/// Says whether `s` is `#` followed by 3 or 6 hexadecimal digits.
pub fn is_hex_code(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => matches!(digits.len(), 3 | 6)
            && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Convert a channel in \[0, 1\] to a byte, rounding half to even.
#[inline]
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0., 1.) * 255.).round_ties_even() as u8
}

/// A color with a name and a HEX code (`#RGB` or `#RRGGBB`).
///
/// Converting a `HexCode` to a string (with `Display`) gives the HEX
/// code as it was provided.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HexCode {
    name: String,
    hex_code: String,
}

impl HexCode {
    /// Create a color from its name and HEX code.
    ///
    /// # Example
    ///
    /// ```
    /// use arcadia_color::HexCode;
    /// let white = HexCode::new("white", "#FFF").unwrap();
    /// assert_eq!(white.to_string(), "#FFF");
    /// assert!(HexCode::new("white", "ffffff").is_err());
    /// ```
    pub fn new(name: impl Into<String>, hex_code: impl Into<String>)
               -> Result<Self> {
        let hex_code = hex_code.into();
        if !is_hex_code(&hex_code) {
            return Err(Error::InvalidHexCode { hex: hex_code });
        }
        Ok(HexCode { name: name.into(), hex_code })
    }

    /// A color of the built-in tables, whose HEX code is known to be
    /// valid.
    pub(crate) fn known(name: &str, hex_code: &str) -> Self {
        debug_assert!(is_hex_code(hex_code), "{hex_code}");
        HexCode { name: name.to_string(), hex_code: hex_code.to_string() }
    }

    /// Create a color from RGB components.  The HEX code is written in
    /// lowercase with two digits per channel.
    pub fn from_rgb(name: impl Into<String>, c: RGB8) -> Self {
        HexCode { name: name.into(),
                  hex_code: format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b) }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn hex_code(&self) -> &str { &self.hex_code }

    /// Return the same color under another name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        HexCode { name: name.into(), hex_code: self.hex_code.clone() }
    }

    /// Says whether `self` and `other` have the same HEX code, whatever
    /// their names and the case of their digits.
    pub fn same_color(&self, other: &HexCode) -> bool {
        self.to_rgb() == other.to_rgb()
    }

    /// Return the red, green and blue components of the color.
    pub fn to_rgb(&self) -> RGB8 {
        // The code was validated on construction.
        let digits = &self.hex_code.as_bytes()[1..];
        let nibble = |b: u8| (b as char).to_digit(16).unwrap_or(0) as u8;
        if digits.len() == 3 {
            let c = |i: usize| 17 * nibble(digits[i]);
            RGB8::new(c(0), c(1), c(2))
        } else {
            let c = |i: usize| 16 * nibble(digits[2 * i])
                + nibble(digits[2 * i + 1]);
            RGB8::new(c(0), c(1), c(2))
        }
    }

    /// Return the components of the color in \[0, 255\], fully opaque.
    pub fn to_rgba(&self) -> RGBA<f64> { self.to_rgb().to_rgba() }

    /// Return the channels of the color in \[0, 1\].
    pub(crate) fn to_unit_rgb(&self) -> [f64; 3] {
        let c = self.to_rgb();
        [c.r as f64 / 255., c.g as f64 / 255., c.b as f64 / 255.]
    }

    /// Return the CAM02-UCS coordinates `[J', a', b']` of the color.
    /// `J'` is the lightness, `a'` goes from green to red and `b'` from
    /// blue to yellow.
    pub fn to_cam02ucs(&self) -> [f64; 3] {
        colorspace::srgb_to_cam02ucs(self.to_unit_rgb())
    }

    /// The perceptual lightness `J'` of the color, in \[0, 100\].
    #[inline]
    pub fn lightness(&self) -> f64 { self.to_cam02ucs()[0] }

    /// Scale the HLS lightness of the color by `amount`.  Values below
    /// `1.` darken the color, values above lighten it.
    pub fn adjust_lightness(&self, amount: f64) -> HexCode {
        let [r, g, b] = self.to_unit_rgb();
        let (h, l, s) = rgb_to_hls(r, g, b);
        let (r, g, b) = hls_to_rgb(h, (amount * l).clamp(0., 1.), s);
        HexCode::from_rgb(self.name.clone(),
                          RGB8::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b)))
    }

    /// Blend `self` with `other` in CIE L\*C\*h\*; `t == 0.` is `self`.
    pub fn blend(&self, other: &HexCode, t: f64) -> HexCode {
        let c = self.to_rgb().blend(&other.to_rgb(), t);
        HexCode::from_rgb(format!("{}_{}", self.name, other.name), c)
    }

    /// Return a terminal swatch: a block of `width` spaces in the color
    /// followed by the name (padded to `min_name_width`) and HEX code.
    pub fn swatch(&self, width: usize, min_name_width: Option<usize>) -> String {
        let c = Some(self.to_rgb());
        let name = match min_name_width {
            Some(w) => format!("{:<w$}", self.name),
            None => self.name.clone(),
        };
        let mut s = colorize(&" ".repeat(width), None, c);
        s.push_str(&colorize(&format!(" {name} {}", self.hex_code), c, None));
        s
    }
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_code)
    }
}

impl AsRef<str> for HexCode {
    fn as_ref(&self) -> &str { &self.hex_code }
}

impl From<&HexCode> for RGB8 {
    fn from(c: &HexCode) -> RGB8 { c.to_rgb() }
}

impl From<&HexCode> for RGBA<f64> {
    fn from(c: &HexCode) -> RGBA<f64> { c.to_rgba() }
}

fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (min + max) / 2.;
    if max == min {
        return (0., l, 0.);
    }
    let d = max - min;
    let s = if l <= 0.5 { d / (max + min) } else { d / (2. - max - min) };
    let rc = (max - r) / d;
    let gc = (max - g) / d;
    let bc = (max - b) / d;
    let h = if r == max { bc - gc }
            else if g == max { 2. + rc - bc }
            else { 4. + gc - rc };
    ((h / 6.).rem_euclid(1.), l, s)
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0. {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1. + s) } else { l + s - l * s };
    let m1 = 2. * l - m2;
    let v = |hue: f64| {
        let hue = hue.rem_euclid(1.);
        if hue < 1. / 6. { m1 + (m2 - m1) * hue * 6. }
        else if hue < 0.5 { m2 }
        else if hue < 2. / 3. { m1 + (m2 - m1) * (2. / 3. - hue) * 6. }
        else { m1 }
    };
    (v(h + 1. / 3.), v(h), v(h - 1. / 3.))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        for hex in ["#FFFFFF", "#ffffff", "#FFF", "#fff", "#5088C5"] {
            let c = HexCode::new("white", hex).unwrap();
            assert_eq!(c.to_string(), hex);
            assert_eq!(c.hex_code(), hex);
        }
    }

    #[test]
    fn invalid_codes() {
        for hex in ["#ZZZZZZ", "#ZZZ", "#FF", "apples", "123456", "ffffff",
                    "white", "", "#", "#FFFFFFF", "#FFFF"] {
            assert_eq!(HexCode::new("white", hex),
                       Err(Error::InvalidHexCode { hex: hex.to_string() }));
        }
    }

    #[test]
    fn rgb_components() {
        assert_eq!(HexCode::new("a", "#5088C5").unwrap().to_rgb(),
                   RGB8::new(80, 136, 197));
        assert_eq!(HexCode::new("a", "#fa0").unwrap().to_rgb(),
                   RGB8::new(255, 170, 0));
        let c = HexCode::from_rgb("c", RGB8::new(80, 136, 197));
        assert_eq!(c.hex_code(), "#5088c5");
        assert_eq!(c.to_rgba(), RGBA { r: 80., g: 136., b: 197., a: 255. });
    }

    #[test]
    fn same_color_ignores_name_and_case() {
        let a = HexCode::new("a", "#FFFFFF").unwrap();
        let b = HexCode::new("b", "#fff").unwrap();
        assert!(a.same_color(&b));
        assert_ne!(a, b);
        assert!(!a.same_color(&HexCode::new("a", "#000").unwrap()));
    }

    #[test]
    fn swatch() {
        let white = HexCode::new("white", "#FFFFFF").unwrap();
        assert_eq!(white.swatch(2, None),
                   "\x1b[48;2;255;255;255m  \x1b[0m\
                    \x1b[38;2;255;255;255m white #FFFFFF\x1b[0m");
        let aegean = HexCode::new("aegean", "#5088C5").unwrap();
        assert_eq!(aegean.swatch(2, None),
                   "\x1b[48;2;80;136;197m  \x1b[0m\
                    \x1b[38;2;80;136;197m aegean #5088C5\x1b[0m");
        assert_eq!(aegean.swatch(3, Some(10)),
                   "\x1b[48;2;80;136;197m   \x1b[0m\
                    \x1b[38;2;80;136;197m aegean     #5088C5\x1b[0m");
    }

    #[test]
    fn lightness_orders_greys() {
        let black = HexCode::new("black", "#000000").unwrap();
        let grey = HexCode::new("grey", "#808080").unwrap();
        let white = HexCode::new("white", "#FFFFFF").unwrap();
        assert!(black.lightness() < grey.lightness());
        assert!(grey.lightness() < white.lightness());
    }

    #[test]
    fn adjust_lightness() {
        let grey = HexCode::new("grey", "#808080").unwrap();
        assert_eq!(grey.adjust_lightness(1.).hex_code(), "#808080");
        assert_eq!(grey.adjust_lightness(0.).hex_code(), "#000000");
        assert_eq!(grey.adjust_lightness(10.).hex_code(), "#ffffff");
        let red = HexCode::new("red", "#FF0000").unwrap();
        assert_eq!(red.adjust_lightness(0.5).hex_code(), "#800000");
        assert_eq!(red.adjust_lightness(0.5).name(), "red");
    }

    #[test]
    fn hls_round_trip() {
        for (r, g, b) in [(0.2, 0.4, 0.6), (0.9, 0.1, 0.3), (0.5, 0.5, 0.1)] {
            let (h, l, s) = rgb_to_hls(r, g, b);
            let (r1, g1, b1) = hls_to_rgb(h, l, s);
            assert!((r - r1).abs() < 1e-12 && (g - g1).abs() < 1e-12
                    && (b - b1).abs() < 1e-12);
        }
    }
}
