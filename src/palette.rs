use std::{fmt, ops::{Add, Index, Range}};
use rgb::RGBA;
use crate::{
    display::colorize,
    error::Result,
    hexcode::HexCode,
    registry::Colormap,
    ColorRange, RGBColor,
};

/// A discrete ordered sequence of colors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    name: String,
    colors: Vec<HexCode>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<HexCode>) -> Self {
        Palette { name: name.into(), colors }
    }

    /// Create a palette from `(color name, HEX code)` pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use arcadia_color::Palette;
    /// let p = Palette::from_pairs("bw", &[("white", "#FFFFFF"),
    ///                                     ("black", "#000000")]).unwrap();
    /// assert_eq!(p.len(), 2);
    /// assert_eq!(p[1].name(), "black");
    /// ```
    pub fn from_pairs(name: impl Into<String>, colors: &[(&str, &str)])
                      -> Result<Self> {
        let colors = colors.iter()
            .map(|&(n, hex)| HexCode::new(n, hex))
            .collect::<Result<Vec<_>>>()?;
        Ok(Palette::new(name, colors))
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn rename(&mut self, name: impl Into<String>) { self.name = name.into() }

    /// Returns the colors of the palette.
    pub fn colors(&self) -> &[HexCode] { &self.colors }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn get(&self, i: usize) -> Option<&HexCode> { self.colors.get(i) }

    pub fn iter(&self) -> std::slice::Iter<'_, HexCode> { self.colors.iter() }

    /// Return the sub-palette of the colors in `range`.  The range is
    /// clamped to the palette, so that out of bounds parts are ignored.
    pub fn slice(&self, range: Range<usize>) -> Palette {
        let end = range.end.min(self.colors.len());
        let start = range.start.min(end);
        Palette::new(format!("{}_slice", self.name),
                     self.colors[start .. end].to_vec())
    }

    /// Returns a new palette with the colors in reverse order.
    pub fn reverse(&self) -> Palette {
        Palette::new(format!("{}_r", self.name),
                     self.colors.iter().rev().cloned().collect())
    }

    /// Returns a swatch showing all colors of the palette side by side.
    pub fn swatch(&self) -> String {
        self.colors.iter()
            .map(|c| colorize("  ", None, Some(c.to_rgb())))
            .collect()
    }

    fn longest_name(&self) -> usize {
        self.colors.iter().map(|c| c.name().chars().count()).max().unwrap_or(0)
    }

    /// A colormap with one band per color.
    pub fn to_listed_colormap(&self) -> Colormap { Colormap::Listed(self.clone()) }
}

/// The colors of the palette split \[0, 1\] into equal bands, as a
/// listed colormap does.  An empty palette is black.
impl<Color: RGBColor> ColorRange<Color> for Palette {
    fn rgb(&self, t: f64) -> Color {
        let n = self.colors.len();
        if n == 0 {
            return Color::from_rgba(RGBA { r: 0., g: 0., b: 0., a: 255. });
        }
        let i = (t.clamp(0., 1.) * n as f64) as usize;
        Color::from_rgba(self.colors[i.min(n - 1)].to_rgb().to_rgba())
    }
}

impl Index<usize> for Palette {
    type Output = HexCode;

    fn index(&self, i: usize) -> &HexCode { &self.colors[i] }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a HexCode;
    type IntoIter = std::slice::Iter<'a, HexCode>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}

impl IntoIterator for Palette {
    type Item = HexCode;
    type IntoIter = std::vec::IntoIter<HexCode>;

    fn into_iter(self) -> Self::IntoIter { self.colors.into_iter() }
}

/// Concatenation of two palettes.
impl Add<&Palette> for &Palette {
    type Output = Palette;

    fn add(self, other: &Palette) -> Palette {
        let mut colors = self.colors.clone();
        colors.extend_from_slice(&other.colors);
        Palette::new(format!("{}+{}", self.name, other.name), colors)
    }
}

impl Add for Palette {
    type Output = Palette;

    fn add(self, other: Palette) -> Palette { &self + &other }
}

/// The swatch of the palette followed by a swatch line per color.
impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.longest_name();
        f.write_str(&self.swatch())?;
        for c in &self.colors {
            write!(f, "\n{}", c.swatch(2, Some(w)))?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    fn bw() -> Palette {
        Palette::from_pairs("bw", &[("white", "#FFFFFF"), ("black", "#000000")])
            .unwrap()
    }

    #[test]
    fn from_pairs() {
        let p = bw();
        assert_eq!(p.colors(),
                   &[HexCode::new("white", "#FFFFFF").unwrap(),
                     HexCode::new("black", "#000000").unwrap()]);
        assert!(Palette::from_pairs("x", &[("bad", "#GG0000")]).is_err());
    }

    #[test]
    fn reverse_slice_and_add() {
        let p = bw();
        let r = p.reverse();
        assert_eq!(r.name(), "bw_r");
        assert_eq!(r[0].name(), "black");
        let s = p.slice(1 .. 2);
        assert_eq!(s.name(), "bw_slice");
        assert_eq!(s.len(), 1);
        let sum = &p + &r;
        assert_eq!(sum.name(), "bw+bw_r");
        assert_eq!(sum.len(), 4);
        assert_eq!(sum[2].name(), "black");
    }

    #[test]
    fn slice_out_of_bounds_is_clamped() {
        let p = bw();
        assert_eq!(p.slice(1 .. 10).colors(), &p.colors()[1 ..]);
        assert!(p.slice(5 .. 8).is_empty());
        assert!(p.slice(2 .. 1).is_empty());
        assert_eq!(p.slice(0 .. usize::MAX).len(), 2);
    }

    #[test]
    fn swatch_and_display() {
        let p = bw();
        assert_eq!(p.swatch(),
                   "\x1b[48;2;255;255;255m  \x1b[0m\x1b[48;2;0;0;0m  \x1b[0m");
        let expected = format!("{}\n{}\n{}", p.swatch(),
                               p[0].swatch(2, Some(5)), p[1].swatch(2, Some(5)));
        assert_eq!(p.to_string(), expected);
    }

    #[test]
    fn listed_sampling() {
        let p = bw();
        let c: RGB8 = p.rgb(0.);
        assert_eq!(c, RGB8::new(255, 255, 255));
        let c: RGB8 = p.rgb(0.49);
        assert_eq!(c, RGB8::new(255, 255, 255));
        let c: RGB8 = p.rgb(0.5);
        assert_eq!(c, RGB8::new(0, 0, 0));
        let c: RGB8 = p.rgb(1.);
        assert_eq!(c, RGB8::new(0, 0, 0));
    }
}
