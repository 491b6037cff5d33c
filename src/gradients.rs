//! The Arcadia gradients.

use std::fmt;
use lazy_static::lazy_static;
use crate::{colors::*, gradient::Gradient};

/// Kind of gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientKind {
    /// Lightness increases steadily from the first to the last color
    /// while the hue changes.  Suited to ordered data where no value
    /// plays a special role.
    PerceptuallyUniform,
    /// A single hue going from dark to light.  Suited to ordered data
    /// progressing from high to low.
    Monocolor,
    /// Two hues meeting at a light midpoint, each with a single anchor.
    /// They put emphasis on the middle value and the two ends.
    WeakBicolor,
    /// Two hues meeting at a light midpoint with several anchors on
    /// each side, giving a stronger contrast to the extremes.
    StrongBicolor,
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GradientKind::PerceptuallyUniform => "perceptually uniform",
            GradientKind::Monocolor => "monocolor",
            GradientKind::WeakBicolor => "weak bicolor",
            GradientKind::StrongBicolor => "strong bicolor",
        })
    }
}

macro_rules! gradients {
    ($($(#[$doc: meta])* $id: ident = $name: literal, $kind: ident,
       [$($c: ident),*], $values: expr;)*) => {
        lazy_static! {
            $( $(#[$doc])*
               pub static ref $id: Gradient = Gradient::known(
                   $name, vec![$($c.clone()),*], &$values); )*
        }

        /// All gradients with their kind, in declaration order.
        pub fn all_gradients() -> Vec<(GradientKind, &'static Gradient)> {
            vec![$( (GradientKind::$kind, &*$id) ),*]
        }
    }
}

gradients! {
    VIRIDIS = "viridis", PerceptuallyUniform,
        [CONCORD, GRAPE, AEGEAN, LIME, YELLOW], [0., 0.23, 0.49, 0.77, 1.];
    /// Default sequential gradient.
    MAGMA = "magma", PerceptuallyUniform,
        [PITCH, GRAPE, TAFFY, TANGERINE, OAT], [0., 0.38, 0.72, 0.9, 1.];
    CIVIDIS = "cividis", PerceptuallyUniform,
        [CROW, FOREST, CANARY, SATIN], [0., 0.39, 0.85, 1.];

    REDS = "reds", Monocolor,
        [REDWOOD, DRAGON, AMBER, PAPER], [0., 0.43, 0.64, 1.];
    ORANGES = "oranges", Monocolor,
        [SOIL, UMBER, TANGERINE, PAPER], [0., 0.38, 0.8, 1.];
    YELLOWS = "yellows", Monocolor,
        [COCOA, CANARY, OAT, PAPER], [0., 0.76, 0.9, 1.];
    GREENS = "greens", Monocolor,
        [YUCCA, LIME, PAPER], [0., 0.7, 1.];
    TEALS = "teals", Monocolor,
        [DEPTHS, SEAWEED, PAPER], [0., 0.42, 1.];
    BLUES = "blues", Monocolor,
        [CONCORD, AEGEAN, VITALBLUE, PAPER], [0., 0.47, 0.66, 1.];
    PURPLES = "purples", Monocolor,
        [ROYAL, ASTER, WISH, PAPER], [0., 0.4, 0.74, 1.];
    MAGENTAS = "magentas", Monocolor,
        [CARMINE, PITAYA, ROSE, PAPER], [0., 0.44, 0.73, 1.];

    AEGEANAMBER = "aegeanamber", WeakBicolor,
        [AEGEAN, PAPER, AMBER], [0., 0.5, 1.];
    ASTERCANARY = "astercanary", WeakBicolor,
        [ASTER, PAPER, CANARY], [0., 0.5, 1.];
    LIMEROSE = "limerose", WeakBicolor,
        [LIME, PAPER, ROSE], [0., 0.5, 1.];
    SEAWEEDTANGERINE = "seaweedtangerine", WeakBicolor,
        [SEAWEED, PAPER, TANGERINE], [0., 0.5, 1.];

    /// Default diverging gradient.
    POPPIES = "poppies", StrongBicolor,
        [CONCORD, AEGEAN, VITALBLUE, PAPER, AMBER, DRAGON, REDWOOD],
        [0., 0.235, 0.33, 0.5, 0.68, 0.785, 1.];
    PANSIES = "pansies", StrongBicolor,
        [ROYAL, ASTER, WISH, PAPER, OAT, CANARY, COCOA],
        [0., 0.2, 0.37, 0.5, 0.55, 0.62, 1.];
    DAHLIAS = "dahlias", StrongBicolor,
        [YUCCA, LIME, PAPER, ROSE, PITAYA, CARMINE],
        [0., 0.35, 0.5, 0.635, 0.78, 1.];
    LILIES = "lilies", StrongBicolor,
        [DEPTHS, SEAWEED, PAPER, TANGERINE, UMBER, SOIL],
        [0., 0.21, 0.5, 0.6, 0.81, 1.];
}

/// Return the gradients of kind `kind`.
///
/// # Example
///
/// ```
/// use arcadia_color::{gradients, GradientKind};
/// let names: Vec<&str> = gradients::find(GradientKind::PerceptuallyUniform)
///     .map(|g| g.name()).collect();
/// assert_eq!(names, ["viridis", "magma", "cividis"]);
/// ```
pub fn find(kind: GradientKind) -> impl Iterator<Item = &'static Gradient> {
    all_gradients().into_iter().filter(move |&(k, _)| k == kind).map(|(_, g)| g)
}

/// Return the gradient named `name`.
pub fn by_name(name: &str) -> Option<&'static Gradient> {
    all_gradients().into_iter().map(|(_, g)| g).find(|g| g.name() == name)
}
