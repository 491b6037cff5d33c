//! The Arcadia palettes.

use lazy_static::lazy_static;
use crate::{colors::*, palette::Palette};

macro_rules! palette {
    ($name: literal, $($c: ident),* $(,)?) => {
        Palette::new($name, vec![$($c.clone()),*])
    };
}

lazy_static! {
    pub static ref CORE: Palette = palette!("Core",
        LIGHTGREY, SHELL, DAWN, SEAFOAM, TANGERINE, PITCH, CHARCOAL,
        MARINEBLUE, FOREST);

    pub static ref NEUTRAL: Palette = palette!("Neutral",
        ZEPHYR, PALEAZURE, LICHEN, ORCHID, BUFF, BARK, SLATE, CROW);

    pub static ref ACCENT: Palette = palette!("Accent",
        AEGEAN, AMBER, SEAWEED, CANARY, ASTER, ROSE);

    pub static ref LIGHT_ACCENT: Palette = palette!("LightAccent",
        BLUESKY, DRESS, SAGE, OAT, PERIWINKLE, BLOSSOM);

    /// Tangerine and marineblue also belong to [`struct@CORE`].
    pub static ref ACCENT_EXPANDED: Palette = palette!("AccentExpanded",
        LIME, VITALBLUE, TANGERINE, CHATEAU, MARINEBLUE, DRAGON);

    pub static ref LIGHT_ACCENT_EXPANDED: Palette = palette!("LightAccentExpanded",
        MINT, WISH, SATIN, TAUPE, MARS, DENIM);

    pub static ref OTHER: Palette = palette!("Other",
        CONCORD, GRAPE, TAFFY, BRIGHTGREY, PAPER, REDWOOD, COCOA,
        ROYAL, CARMINE, DEPTHS, BLUEGRASS, YUCCA, PITAYA, SOIL, UMBER);

    pub static ref NAMED: Palette = palette!("Named",
        WHITE, RED, GREEN, BLUE, CYAN, MAGENTA, YELLOW, BLACK);

    /// Concatenation of all the palettes above.
    pub static ref ALL: Palette = {
        let mut all = all_palettes().into_iter()
            .fold(Palette::new("", vec![]), |acc, p| &acc + p);
        all.rename("All");
        all
    };
}

/// The palettes of this module, except [`struct@ALL`].
pub fn all_palettes() -> [&'static Palette; 8] {
    [&*CORE, &*NEUTRAL, &*ACCENT, &*LIGHT_ACCENT, &*ACCENT_EXPANDED,
     &*LIGHT_ACCENT_EXPANDED, &*OTHER, &*NAMED]
}
