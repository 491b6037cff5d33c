//! Simulation of color vision deficiencies.
//!
//! Colors are transformed in linear sRGB with the matrices of Machado,
//! Oliveira and Fernandes, “A Physiologically-based Model for
//! Simulation of Color Vision Deficiency” (IEEE TVCG, 2009), tabulated
//! every tenth of severity.  Other severities interpolate linearly
//! between the two nearest tabulated matrices.

use std::{fmt, str::FromStr};
use rgb::{RGB8, RGBA};
use tracing::trace;
use crate::{
    colorspace::{linear_to_srgb, srgb_to_linear, transform},
    error::{Error, Result},
    hexcode::{unit_to_u8, HexCode},
    Gradient, Palette,
};

/// Maximum severity of a deficiency.
pub const MAX_SEVERITY: u8 = 100;

/// Kind of color vision deficiency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CvdType {
    /// Anomalous M cones (green-weak).
    Deuteranomaly,
    /// Anomalous L cones (red-weak).
    Protanomaly,
    /// Anomalous S cones (blue-weak).
    Tritanomaly,
}

const IDENTITY: [[f64; 3]; 3] = [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]];

// Severities 0.1, 0.2, …, 1.0 in linear sRGB.
const DEUTERANOMALY: [[[f64; 3]; 3]; 10] = [
    // 0.1
    [[0.866435, 0.177704, -0.044139],
     [0.049567, 0.939063, 0.011370],
     [-0.003453, 0.007233, 0.996220]],
    // 0.2
    [[0.760729, 0.319078, -0.079807],
     [0.090568, 0.889315, 0.020117],
     [-0.006027, 0.013325, 0.992702]],
    // 0.3
    [[0.675425, 0.433850, -0.109275],
     [0.125303, 0.847755, 0.026942],
     [-0.007950, 0.018572, 0.989378]],
    // 0.4
    [[0.605511, 0.528560, -0.134071],
     [0.155318, 0.812366, 0.032316],
     [-0.009376, 0.023176, 0.986200]],
    // 0.5
    [[0.547494, 0.607765, -0.155259],
     [0.181692, 0.781742, 0.036566],
     [-0.010410, 0.027275, 0.983136]],
    // 0.6
    [[0.498864, 0.674741, -0.173604],
     [0.205199, 0.754872, 0.039929],
     [-0.011131, 0.030969, 0.980162]],
    // 0.7
    [[0.457771, 0.731899, -0.189670],
     [0.226409, 0.731012, 0.042579],
     [-0.011595, 0.034333, 0.977261]],
    // 0.8
    [[0.422823, 0.781057, -0.203881],
     [0.245752, 0.709602, 0.044646],
     [-0.011843, 0.037423, 0.974421]],
    // 0.9
    [[0.392952, 0.823610, -0.216562],
     [0.263559, 0.690210, 0.046232],
     [-0.011910, 0.040281, 0.971630]],
    // 1.0
    [[0.367322, 0.860646, -0.227968],
     [0.280085, 0.672501, 0.047413],
     [-0.011820, 0.042940, 0.968881]],
];

const PROTANOMALY: [[[f64; 3]; 3]; 10] = [
    // 0.1
    [[0.856167, 0.182038, -0.038205],
     [0.029342, 0.955115, 0.015544],
     [-0.002880, -0.001563, 1.004443]],
    // 0.2
    [[0.734766, 0.334872, -0.069637],
     [0.051840, 0.919198, 0.028963],
     [-0.004928, -0.004209, 1.009137]],
    // 0.3
    [[0.630323, 0.465641, -0.095964],
     [0.069181, 0.890046, 0.040773],
     [-0.006308, -0.007724, 1.014032]],
    // 0.4
    [[0.539009, 0.579343, -0.118352],
     [0.082546, 0.866121, 0.051332],
     [-0.007136, -0.011959, 1.019095]],
    // 0.5
    [[0.458064, 0.679578, -0.137642],
     [0.092785, 0.846313, 0.060902],
     [-0.007494, -0.016807, 1.024301]],
    // 0.6
    [[0.385450, 0.769005, -0.154455],
     [0.100526, 0.829802, 0.069673],
     [-0.007442, -0.022190, 1.029632]],
    // 0.7
    [[0.319627, 0.849633, -0.169261],
     [0.106241, 0.815969, 0.077790],
     [-0.007025, -0.028051, 1.035076]],
    // 0.8
    [[0.259411, 0.923008, -0.182420],
     [0.110296, 0.804340, 0.085364],
     [-0.006276, -0.034346, 1.040622]],
    // 0.9
    [[0.203876, 0.990338, -0.194214],
     [0.112975, 0.794542, 0.092483],
     [-0.005222, -0.041043, 1.046265]],
    // 1.0
    [[0.152286, 1.052583, -0.204868],
     [0.114503, 0.786281, 0.099216],
     [-0.003882, -0.048116, 1.051998]],
];

const TRITANOMALY: [[[f64; 3]; 3]; 10] = [
    // 0.1
    [[0.926670, 0.092514, -0.019184],
     [0.021191, 0.964503, 0.014306],
     [0.008437, 0.054813, 0.936750]],
    // 0.2
    [[0.895720, 0.133330, -0.029050],
     [0.029997, 0.945400, 0.024603],
     [0.013027, 0.104707, 0.882266]],
    // 0.3
    [[0.905871, 0.127791, -0.033662],
     [0.026856, 0.941251, 0.031893],
     [0.013410, 0.148296, 0.838294]],
    // 0.4
    [[0.948035, 0.089490, -0.037526],
     [0.014364, 0.946792, 0.038844],
     [0.010853, 0.193991, 0.795156]],
    // 0.5
    [[1.017277, 0.027029, -0.044306],
     [-0.006113, 0.958479, 0.047634],
     [0.006379, 0.248708, 0.744913]],
    // 0.6
    [[1.104996, -0.046633, -0.058363],
     [-0.032137, 0.971635, 0.060503],
     [0.001336, 0.317922, 0.680742]],
    // 0.7
    [[1.193214, -0.109812, -0.083402],
     [-0.058496, 0.979410, 0.079086],
     [-0.002346, 0.403492, 0.598854]],
    // 0.8
    [[1.257728, -0.139648, -0.118081],
     [-0.078003, 0.975409, 0.102594],
     [-0.003316, 0.501214, 0.502102]],
    // 0.9
    [[1.278864, -0.125333, -0.153531],
     [-0.084748, 0.957674, 0.127074],
     [-0.000989, 0.601151, 0.399838]],
    // 1.0
    [[1.255528, -0.076749, -0.178779],
     [-0.078411, 0.930809, 0.147602],
     [0.004733, 0.691367, 0.303900]],
];

impl CvdType {
    /// The three deficiencies, in the order d, p, t.
    pub const ALL: [CvdType; 3] =
        [CvdType::Deuteranomaly, CvdType::Protanomaly, CvdType::Tritanomaly];

    /// One letter code: `'d'`, `'p'` or `'t'`.
    pub fn code(self) -> char {
        match self {
            CvdType::Deuteranomaly => 'd',
            CvdType::Protanomaly => 'p',
            CvdType::Tritanomaly => 't',
        }
    }

    pub fn from_code(c: char) -> Result<CvdType> {
        match c {
            'd' => Ok(CvdType::Deuteranomaly),
            'p' => Ok(CvdType::Protanomaly),
            't' => Ok(CvdType::Tritanomaly),
            _ => Err(Error::UnknownCvdType(c.to_string())),
        }
    }

    fn table(self) -> &'static [[[f64; 3]; 3]; 10] {
        match self {
            CvdType::Deuteranomaly => &DEUTERANOMALY,
            CvdType::Protanomaly => &PROTANOMALY,
            CvdType::Tritanomaly => &TRITANOMALY,
        }
    }

    /// Linear sRGB matrix for `severity` (clamped to `0 ..= 100`),
    /// interpolated between the two nearest tabulated severities.
    fn matrix(self, severity: u8) -> [[f64; 3]; 3] {
        let s = severity.min(MAX_SEVERITY);
        let k = usize::from(s / 10);
        let frac = f64::from(s % 10) / 10.;
        let table = self.table();
        let at = |k: usize| if k == 0 { IDENTITY } else { table[k - 1] };
        let lo = at(k);
        if s % 10 == 0 {
            return lo;
        }
        let hi = at(k + 1);
        let mut m = [[0.; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = (1. - frac) * lo[i][j] + frac * hi[i][j];
            }
        }
        m
    }
}

impl fmt::Display for CvdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CvdType::Deuteranomaly => "deuteranomaly",
            CvdType::Protanomaly => "protanomaly",
            CvdType::Tritanomaly => "tritanomaly",
        })
    }
}

/// Accepts the one letter codes and the full names.
impl FromStr for CvdType {
    type Err = Error;

    fn from_str(s: &str) -> Result<CvdType> {
        match s {
            "d" | "deuteranomaly" => Ok(CvdType::Deuteranomaly),
            "p" | "protanomaly" => Ok(CvdType::Protanomaly),
            "t" | "tritanomaly" => Ok(CvdType::Tritanomaly),
            _ => Err(Error::UnknownCvdType(s.to_string())),
        }
    }
}

/// Return how `color` appears with the deficiency `cvd` of the given
/// `severity` (clamped to `0 ..= 100`).  The result is named
/// `<name>_<code>`.
///
/// # Example
///
/// ```
/// use arcadia_color::{cvd, CvdType, HexCode};
/// let red = HexCode::new("red", "#FF0000").unwrap();
/// let seen = cvd::simulate_color(&red, CvdType::Deuteranomaly, 100);
/// assert_eq!(seen.name(), "red_d");
/// ```
pub fn simulate_color(color: &HexCode, cvd: CvdType, severity: u8) -> HexCode {
    let m = cvd.matrix(severity);
    let [r, g, b] = color.to_unit_rgb().map(srgb_to_linear);
    let c = transform(&m, RGBA { r, g, b, a: 1. });
    let enc = |x: f64| unit_to_u8(linear_to_srgb(x.clamp(0., 1.)));
    let out = HexCode::from_rgb(format!("{}_{}", color.name(), cvd.code()),
                                RGB8::new(enc(c.r), enc(c.g), enc(c.b)));
    trace!(color = %color, simulated = %out, %cvd, severity, "simulated color");
    out
}

/// [`simulate_color`] for each color of `colors`.
pub fn simulate_colors(colors: &[HexCode], cvd: CvdType, severity: u8)
                       -> Vec<HexCode> {
    colors.iter().map(|c| simulate_color(c, cvd, severity)).collect()
}

/// Simulate the deficiency on each color of `palette`.  The result is
/// named `<palette>_<code>`.
pub fn simulate_palette(palette: &Palette, cvd: CvdType, severity: u8) -> Palette {
    Palette::new(format!("{}_{}", palette.name(), cvd.code()),
                 simulate_colors(palette.colors(), cvd, severity))
}

/// Simulate the deficiency on the anchor colors of `gradient`, keeping
/// their positions.
pub fn simulate_gradient(gradient: &Gradient, cvd: CvdType, severity: u8)
                         -> Result<Gradient> {
    let values = gradient.anchor_values();
    Gradient::new(format!("{}_{}", gradient.name(), cvd.code()),
                  simulate_colors(&gradient.anchor_colors(), cvd, severity),
                  Some(&values))
}

/// `color` followed by its simulation for each deficiency of
/// [`CvdType::ALL`].
pub fn simulate_all_color(color: &HexCode, severity: u8) -> Vec<HexCode> {
    std::iter::once(color.clone())
        .chain(CvdType::ALL.iter().map(|&t| simulate_color(color, t, severity)))
        .collect()
}

/// `palette` followed by its simulation for each deficiency of
/// [`CvdType::ALL`].
pub fn simulate_all_palette(palette: &Palette, severity: u8) -> Vec<Palette> {
    std::iter::once(palette.clone())
        .chain(CvdType::ALL.iter().map(|&t| simulate_palette(palette, t, severity)))
        .collect()
}

/// `gradient` followed by its simulation for each deficiency of
/// [`CvdType::ALL`].
pub fn simulate_all_gradient(gradient: &Gradient, severity: u8)
                             -> Result<Vec<Gradient>> {
    let mut all = vec![gradient.clone()];
    for &t in &CvdType::ALL {
        all.push(simulate_gradient(gradient, t, severity)?);
    }
    Ok(all)
}
