//! Numeric helpers placing the stops of a gradient on \[0, 1\].

use crate::error::{Error, Result};

/// Number of decimal digits kept by [`interpolate_x_values`].
pub const ROUND_DIGITS: i32 = 3;

/// Return `n` values evenly distributed between `min` and `max`, both
/// included.
///
/// A single value sits at the midpoint of the interval and `n == 0`
/// gives an empty vector.
///
/// # Example
///
/// ```
/// use arcadia_color::values::distribute_values;
/// assert_eq!(distribute_values(3, 0., 10.), vec![0., 5., 10.]);
/// assert_eq!(distribute_values(1, 2., 4.), vec![3.]);
/// ```
pub fn distribute_values(n: usize, min: f64, max: f64) -> Vec<f64> {
    if n <= 1 {
        return vec![min + (max - min) / 2.; n];
    }
    let last = (n - 1) as f64;
    let step = (max - min) / last;
    (0 .. n).map(|i| {
        // Pin the end point so that it is `max` exactly.
        if i == n - 1 { max } else { min + i as f64 * step }
    }).collect()
}

/// [`distribute_values`] on the unit interval.
#[inline]
pub fn distribute_unit(n: usize) -> Vec<f64> { distribute_values(n, 0., 1.) }

/// Return positions `x` in \[0, 1\] such that the values `y` lie on the
/// line through `(0, y[0])` and `(1, y[n-1])`.  Positions are rounded
/// to [`ROUND_DIGITS`] decimal digits.
///
/// `y` must be monotonic (see [`is_monotonic`]); NaN values are not.
/// A sequence whose end points coincide has no slope and is rejected.
pub fn interpolate_x_values(y: &[f64]) -> Result<Vec<f64>> {
    interpolate_x_values_with(y, ROUND_DIGITS)
}

/// Same as [`interpolate_x_values`] with `digits` decimal digits.
pub fn interpolate_x_values_with(y: &[f64], digits: i32) -> Result<Vec<f64>> {
    if y.len() < 2 {
        return Err(Error::TooFewValues { required: 2, got: y.len() });
    }
    if !is_monotonic(y) {
        return Err(Error::NonMonotonicLightness);
    }
    let y0 = y[0];
    let y1 = y[y.len() - 1];
    // Slope of the line through (0, y0) and (1, y1).
    let m = (y1 - y0) / (1. - 0.);
    if m == 0. || !m.is_finite() {
        return Err(Error::DegenerateLightness { first: y0, last: y1 });
    }
    Ok(y.iter().map(|&yi| round_to((yi - y0) / m, digits)).collect())
}

/// Round half to even at `digits` decimal digits.
fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (x * scale).round_ties_even() / scale
}

/// Says whether every value is `<=` its successor.
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Says whether every value is `>=` its successor.
pub fn is_non_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] >= w[1])
}

/// Says whether `values` is non-decreasing or non-increasing.  Empty
/// and one-element sequences are monotonic.
pub fn is_monotonic(values: &[f64]) -> bool {
    is_non_decreasing(values) || is_non_increasing(values)
}

/// Map `first` into \[0, 0.5\] and `second` into \[0.5, 1\], then
/// concatenate them.
pub fn rescale_and_concatenate_values(first: &[f64], second: &[f64]) -> Vec<f64> {
    first.iter().map(|&x| 0.5 * x)
        .chain(second.iter().map(|&x| 0.5 * x + 0.5))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: &[f64], expected: &[f64]) {
        assert_eq!(got.len(), expected.len(), "{got:?} vs {expected:?}");
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() <= 1e-12, "{got:?} ≉ {expected:?}");
        }
    }

    #[test]
    fn distribute_small_counts() {
        assert_eq!(distribute_values(0, 0., 1.), Vec::<f64>::new());
        assert_eq!(distribute_values(1, 0., 1.), vec![0.5]);
        assert_eq!(distribute_values(2, 0., 1.), vec![0., 1.]);
        assert_eq!(distribute_values(3, 0., 1.), vec![0., 0.5, 1.]);
    }

    #[test]
    fn distribute_midpoint_uses_min() {
        assert_eq!(distribute_values(1, 2., 4.), vec![3.]);
        assert_eq!(distribute_values(1, -1., 1.), vec![0.]);
    }

    #[test]
    fn distribute_matches_linspace() {
        assert_close(&distribute_unit(4),
                     &[0., 0.3333333333333333, 0.6666666666666666, 1.]);
        assert_close(&distribute_unit(5), &[0., 0.25, 0.5, 0.75, 1.]);
        assert_close(&distribute_values(3, 0., 10.), &[0., 5., 10.]);
    }

    #[test]
    fn monotonic() {
        assert!(is_monotonic(&[1., 2., 3.]));
        assert!(is_monotonic(&[3., 2., 1.]));
        assert!(!is_monotonic(&[1., 3., 2.]));
        assert!(is_monotonic(&[5.]));
        assert!(is_monotonic(&[]));
        assert!(is_monotonic(&[1., 1., 2.]));
        assert!(is_non_decreasing(&[1., 1.]) && is_non_increasing(&[1., 1.]));
        assert!(!is_non_increasing(&[1., 2.]));
    }

    #[test]
    fn interpolate() {
        assert_close(&interpolate_x_values(&[0., 1., 2.]).unwrap(),
                     &[0., 0.5, 1.]);
        assert_close(&interpolate_x_values(&[0., 4., 10.]).unwrap(),
                     &[0., 0.4, 1.]);
        assert_close(&interpolate_x_values(&[10., 6., 0.]).unwrap(),
                     &[0., 0.4, 1.]);
    }

    #[test]
    fn interpolate_rounds() {
        let x = interpolate_x_values(&[0., 1., 3.]).unwrap();
        assert_close(&x, &[0., 0.333, 1.]);
        let x = interpolate_x_values_with(&[0., 1., 3.], 1).unwrap();
        assert_close(&x, &[0., 0.3, 1.]);
    }

    #[test]
    fn interpolate_rejects_degenerate_input() {
        assert_eq!(interpolate_x_values(&[1.]),
                   Err(Error::TooFewValues { required: 2, got: 1 }));
        assert!(matches!(interpolate_x_values(&[2., 2., 2.]),
                         Err(Error::DegenerateLightness { .. })));
        assert!(matches!(interpolate_x_values(&[0., f64::INFINITY]),
                         Err(Error::DegenerateLightness { .. })));
    }

    #[test]
    fn interpolate_rejects_non_monotonic_input() {
        for y in [&[0., 5., 1.][..], &[2., 3., 2.], &[0., f64::NAN, 1.], &[0., f64::NAN]] {
            assert_eq!(interpolate_x_values(y), Err(Error::NonMonotonicLightness),
                       "{y:?}");
        }
    }

    #[test]
    fn rescale_and_concatenate() {
        assert_eq!(rescale_and_concatenate_values(&[0., 1.], &[0., 1.]),
                   vec![0., 0.5, 0.5, 1.]);
        assert_eq!(rescale_and_concatenate_values(&[0., 0.5, 1.], &[1.]),
                   vec![0., 0.25, 0.5, 1.]);
        assert_eq!(rescale_and_concatenate_values(&[], &[]), Vec::<f64>::new());
    }
}
