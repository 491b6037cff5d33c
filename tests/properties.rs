//! Property tests for value distribution, concatenation and gradient
//! sampling, plus checks on the brand data.

use proptest::prelude::*;
use rgb::RGB8;
use arcadia_color::{
    cvd, gradients, palettes,
    values::{distribute_values, is_monotonic, is_non_decreasing,
             rescale_and_concatenate_values},
    ColorRange, ColormapRegistry, CvdType, Gradient, GradientKind, HexCode,
};

fn hex_color() -> impl Strategy<Value = HexCode> {
    any::<[u8; 3]>().prop_map(|[r, g, b]| HexCode::from_rgb("c", RGB8::new(r, g, b)))
}

fn gradient() -> impl Strategy<Value = Gradient> {
    (proptest::collection::vec(hex_color(), 2 .. 8),
     proptest::collection::vec(0. .. 1f64, 6))
        .prop_map(|(colors, mut inner)| {
            inner.truncate(colors.len() - 2);
            inner.sort_by(f64::total_cmp);
            let mut values = vec![0.];
            values.extend(inner);
            values.push(1.);
            Gradient::new("g", colors, Some(&values)).unwrap()
        })
}

proptest! {
    #[test]
    fn distribute_values_spans_the_range(n in 2usize .. 200,
                                         a in -1e3 .. 1e3f64,
                                         width in 1e-3 .. 1e3f64) {
        let b = a + width;
        let v = distribute_values(n, a, b);
        prop_assert_eq!(v.len(), n);
        prop_assert_eq!(v[0], a);
        prop_assert_eq!(v[n - 1], b);
        prop_assert!(v.windows(2).all(|w| w[0] < w[1]));
        for (i, x) in v.iter().enumerate() {
            let expected = a + i as f64 * (b - a) / (n - 1) as f64;
            prop_assert!((x - expected).abs() <= 1e-9 * (1. + expected.abs()));
        }
    }

    #[test]
    fn rescaled_values_stay_in_halves(
        first in proptest::collection::vec(0. ..= 1f64, 0 .. 10),
        second in proptest::collection::vec(0. ..= 1f64, 0 .. 10)) {
        let v = rescale_and_concatenate_values(&first, &second);
        prop_assert_eq!(v.len(), first.len() + second.len());
        prop_assert!(v[.. first.len()].iter().all(|&x| (0. ..= 0.5).contains(&x)));
        prop_assert!(v[first.len() ..].iter().all(|&x| (0.5 ..= 1.).contains(&x)));
    }

    #[test]
    fn self_concatenation_stays_monotonic(g in gradient()) {
        let sum = &g + &g;
        prop_assert!(is_non_decreasing(&sum.anchor_values()));
        prop_assert!(is_monotonic(&sum.anchor_values()));
        prop_assert_eq!(sum.anchor_values()[0], 0.);
        prop_assert_eq!(*sum.anchor_values().last().unwrap(), 1.);
    }

    #[test]
    fn reverse_twice_gives_back_the_colors(g in gradient(), t in 0. ..= 1f64) {
        let rr = g.reverse().reverse();
        prop_assert_eq!(rr.anchor_colors(), g.anchor_colors());
        let c0: RGB8 = g.rgb(0.);
        let c1: RGB8 = g.reverse().rgb(1.);
        prop_assert_eq!(c0, c1);
        let _: RGB8 = g.rgb(t);
    }

    #[test]
    fn zero_severity_leaves_colors_alone(c in hex_color()) {
        for t in CvdType::ALL {
            let seen = cvd::simulate_color(&c, t, 0);
            prop_assert_eq!(seen.hex_code(), c.hex_code());
        }
    }
}

#[test]
fn brand_gradients_sample_their_end_anchors() {
    for (_, g) in gradients::all_gradients() {
        let first: RGB8 = g.rgb(0.);
        let last: RGB8 = g.rgb(1.);
        assert_eq!(first, g.anchor_colors()[0].to_rgb(), "{}", g.name());
        assert_eq!(last, g.anchor_colors()[g.num_anchors() - 1].to_rgb(), "{}", g.name());
    }
}

#[test]
fn perceptually_uniform_gradients_get_brighter() {
    for g in gradients::find(GradientKind::PerceptuallyUniform) {
        let l: Vec<f64> = g.anchors().iter().map(|a| a.color.lightness()).collect();
        assert!(is_non_decreasing(&l), "{}: {l:?}", g.name());
        let i = g.interpolate_lightness().unwrap();
        assert!(is_non_decreasing(&i.anchor_values()), "{}", g.name());
    }
}

#[test]
fn registry_holds_the_brand_data() {
    let reg = ColormapRegistry::with_defaults();
    for p in palettes::all_palettes() {
        assert!(reg.contains(p.name()), "{}", p.name());
    }
    for (_, g) in gradients::all_gradients() {
        assert!(reg.contains(&format!("{}_r", g.name())));
    }
}
