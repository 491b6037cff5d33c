//! Conversions from sRGB to the perceptual spaces used to judge and
//! blend colors: CIE L\*C\*h\* (for blending) and CAM02-UCS (for
//! lightness).

use std::f64::consts::PI;
use rgb::RGBA;

const TWO_PI: f64 = 2. * PI;

/// Undo the sRGB transfer curve of a channel in \[0, 1\].
#[inline]
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Apply the sRGB transfer curve to a linear channel in \[0, 1\].
#[inline]
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 { 12.92 * c } else { 1.055 * c.powf(1. / 2.4) - 0.055 }
}

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
     m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
     m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2]]
}

/// Apply a 3×3 matrix to the linear RGB channels of `c` (alpha is
/// kept).
#[inline]
pub(crate) fn transform(m: &[[f64; 3]; 3], c: RGBA<f64>) -> RGBA<f64> {
    let [r, g, b] = mul(m, [c.r, c.g, c.b]);
    RGBA { r, g, b, a: c.a }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Lch {
    /// The lightness in the range 0. to 100.
    pub(crate) l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    pub(crate) c: f64,
    /// The hue in radians in the range 0. to 2π.
    pub(crate) h: f64,
    /// Alpha component
    pub(crate) a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;

impl Lch {
    /// `c` holds linear sRGB channels in \[0, 1\].
    pub(crate) fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    /// Return linear sRGB channels (possibly out of \[0, 1\]).
    pub(crate) fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r, g, b, a: self.a }
    }
}

/// Blend two linear sRGB colors in L\*C\*h\* along the shortest hue arc.
/// `t == 0.` gives `c0` and `t == 1.` gives `c1`.
pub(crate) fn lch_mix(c0: RGBA<f64>, c1: RGBA<f64>, t: f64) -> RGBA<f64> {
    let lch0 = Lch::from_rgb(c0);
    let lch1 = Lch::from_rgb(c1);
    let h0 = lch0.h;
    let h1 = lch1.h;
    let dh = {
        if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
        else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
        else { h1 - h0 } };
    let lch = Lch { l: lch0.l + t * (lch1.l - lch0.l),
                    c: lch0.c + t * (lch1.c - lch0.c),
                    h: lch0.h + t * dh,
                    a: lch0.a + t * (lch1.a - lch0.a) };
    lch.to_rgb()
}

// CIECAM02 with the usual defaults: D65 white, 20% background,
// adapting luminance 64/π/5 cd/m², average surround.

const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505]];
const WHITE_D65: [f64; 3] = [95.047, 100., 108.883];
const Y_B: f64 = 20.;
const SURROUND_F: f64 = 1.0;
const SURROUND_C: f64 = 0.69;
const SURROUND_NC: f64 = 1.0;

const M_CAT02: [[f64; 3]; 3] = [
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834]];
const M_CAT02_INV: [[f64; 3]; 3] = [
    [1.096124, -0.278869, 0.182745],
    [0.454369, 0.473533, 0.072098],
    [-0.009628, -0.005698, 1.015326]];
const M_HPE: [[f64; 3]; 3] = [
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18340, 0.04641],
    [0.0, 0.0, 1.0]];

// CAM02-UCS coefficients.
const UCS_C1: f64 = 0.007;
const UCS_C2: f64 = 0.0228;

/// Quantities of the viewing conditions that do not depend on the
/// stimulus.
struct Viewing {
    d_rgb: [f64; 3],
    f_l: f64,
    n: f64,
    z: f64,
    n_bb: f64,
    a_w: f64,
}

impl Viewing {
    fn new() -> Viewing {
        let l_a = 64. / PI / 5.;
        let y_w = WHITE_D65[1];
        let rgb_w = mul(&M_CAT02, WHITE_D65);
        let d = (SURROUND_F * (1. - (1. / 3.6) * ((-l_a - 42.) / 92.).exp()))
            .clamp(0., 1.);
        let d_rgb = rgb_w.map(|c| d * y_w / c + 1. - d);
        let k = 1. / (5. * l_a + 1.);
        let k4 = k.powi(4);
        let f_l = 0.2 * k4 * (5. * l_a)
            + 0.1 * (1. - k4).powi(2) * (5. * l_a).cbrt();
        let n = Y_B / y_w;
        let z = 1.48 + n.sqrt();
        let n_bb = 0.725 * n.powf(-0.2);
        let mut v = Viewing { d_rgb, f_l, n, z, n_bb, a_w: 0. };
        let rgb_aw = v.adapted(WHITE_D65);
        v.a_w = v.achromatic(rgb_aw);
        v
    }

    /// Post-adaptation cone responses of the stimulus `xyz` (Y in
    /// \[0, 100\]).
    fn adapted(&self, xyz: [f64; 3]) -> [f64; 3] {
        let rgb = mul(&M_CAT02, xyz);
        let rgb_c = [self.d_rgb[0] * rgb[0], self.d_rgb[1] * rgb[1],
                     self.d_rgb[2] * rgb[2]];
        let rgb_p = mul(&M_HPE, mul(&M_CAT02_INV, rgb_c));
        rgb_p.map(|c| {
            let f = (self.f_l * c.abs() / 100.).powf(0.42);
            c.signum() * 400. * f / (f + 27.13) + 0.1
        })
    }

    fn achromatic(&self, [r, g, b]: [f64; 3]) -> f64 {
        (2. * r + g + b / 20. - 0.305) * self.n_bb
    }
}

lazy_static::lazy_static! {
    static ref VIEWING: Viewing = Viewing::new();
}

/// Return the CAM02-UCS coordinates `[J', a', b']` of the sRGB color
/// `c` (channels in \[0, 1\], gamma encoded).
pub fn srgb_to_cam02ucs(c: [f64; 3]) -> [f64; 3] {
    let v = &*VIEWING;
    let lin = c.map(srgb_to_linear);
    let xyz = mul(&SRGB_TO_XYZ, lin).map(|x| 100. * x);
    let [ra, ga, ba] = v.adapted(xyz);
    let a = ra - 12. * ga / 11. + ba / 11.;
    let b = (ra + ga - 2. * ba) / 9.;
    let h = b.atan2(a);
    let ach = v.achromatic([ra, ga, ba]).max(0.);
    let j = 100. * (ach / v.a_w).powf(SURROUND_C * v.z);
    let e_t = 0.25 * ((h + 2.).cos() + 3.8);
    let denom = ra + ga + 21. / 20. * ba;
    let t = if denom == 0. { 0. } else {
        50000. / 13. * SURROUND_NC * v.n_bb * e_t * a.hypot(b) / denom };
    let chroma = t.max(0.).powf(0.9) * (j / 100.).sqrt()
        * (1.64 - 0.29f64.powf(v.n)).powf(0.73);
    let m = chroma * v.f_l.powf(0.25);
    let j_p = (1. + 100. * UCS_C1) * j / (1. + UCS_C1 * j);
    let m_p = (1. / UCS_C2) * (1. + UCS_C2 * m).ln();
    [j_p, m_p * h.cos(), m_p * h.sin()]
}
