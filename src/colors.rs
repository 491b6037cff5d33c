//! The Arcadia named colors.

use lazy_static::lazy_static;
use crate::hexcode::HexCode;

macro_rules! colors {
    ($($(#[$doc: meta])* $id: ident = $name: literal, $hex: literal;)*) => {
        lazy_static! {
            $( $(#[$doc])*
               pub static ref $id: HexCode = HexCode::known($name, $hex); )*
        }

        /// All named colors, in declaration order.
        pub fn all() -> Vec<&'static HexCode> { vec![$( &*$id ),*] }
    }
}

colors! {
    // Core colors
    LIGHTGREY = "lightgrey", "#EBEDE8";
    SHELL = "shell", "#EDE0D6";
    DAWN = "dawn", "#F8F4F1";
    SEAFOAM = "seafoam", "#F9FCF0";
    TANGERINE = "tangerine", "#FFB984";
    PITCH = "pitch", "#09090A";
    CHARCOAL = "charcoal", "#484B50";
    MARINEBLUE = "marineblue", "#8A99AD";
    FOREST = "forest", "#596F74";
    // Neutral colors
    ZEPHYR = "zephyr", "#F4FBFF";
    PALEAZURE = "paleazure", "#F7F9FD";
    LICHEN = "lichen", "#F7FBEF";
    ORCHID = "orchid", "#FFFDF7";
    BUFF = "buff", "#FFFBF8";
    BARK = "bark", "#8F8885";
    SLATE = "slate", "#43413F";
    CROW = "crow", "#292928";
    // Accent colors
    AEGEAN = "aegean", "#5088C5";
    AMBER = "amber", "#F28360";
    SEAWEED = "seaweed", "#3B9886";
    CANARY = "canary", "#F7B846";
    ASTER = "aster", "#7A77AB";
    ROSE = "rose", "#F898AE";
    // Light accent colors
    BLUESKY = "bluesky", "#C6E7F4";
    DRESS = "dress", "#F8C5C1";
    SAGE = "sage", "#B5BEA4";
    OAT = "oat", "#F5E4BE";
    PERIWINKLE = "periwinkle", "#DCBFFC";
    BLOSSOM = "blossom", "#F5CBE4";
    // Accent expanded colors
    LIME = "lime", "#97CD78";
    VITALBLUE = "vitalblue", "#73B5E3";
    CHATEAU = "chateau", "#BAB0A8";
    DRAGON = "dragon", "#C85152";
    // Light accent expanded colors
    MINT = "mint", "#D1EADF";
    WISH = "wish", "#BABEE0";
    SATIN = "satin", "#F1E8DA";
    TAUPE = "taupe", "#DAD3C7";
    MARS = "mars", "#DA9085";
    DENIM = "denim", "#B6C8D4";
    // Other Arcadia colors
    CONCORD = "concord", "#341E60";
    GRAPE = "grape", "#5A4596";
    TAFFY = "taffy", "#E87485";
    BRIGHTGREY = "brightgrey", "#EAEAEA";
    PAPER = "paper", "#FCFCFC";
    REDWOOD = "redwood", "#52180A";
    COCOA = "cocoa", "#4D2C03";
    ROYAL = "royal", "#3F2D5C";
    CARMINE = "carmine", "#471122";
    DEPTHS = "depths", "#09473E";
    BLUEGRASS = "bluegrass", "#458F99";
    YUCCA = "yucca", "#1E4812";
    PITAYA = "pitaya", "#C74970";
    SOIL = "soil", "#4D2500";
    UMBER = "umber", "#A85E28";
    // Other named colors
    WHITE = "white", "#FFFFFF";
    RED = "red", "#FF0000";
    GREEN = "green", "#00FF00";
    BLUE = "blue", "#0000FF";
    CYAN = "cyan", "#00FFFF";
    MAGENTA = "magenta", "#FF00FF";
    YELLOW = "yellow", "#FFFF00";
    BLACK = "black", "#000000";
}

/// Return the named color called `name`.
///
/// # Example
///
/// ```
/// use arcadia_color::colors;
/// assert_eq!(colors::by_name("aegean").unwrap().hex_code(), "#5088C5");
/// assert!(colors::by_name("mauve").is_none());
/// ```
pub fn by_name(name: &str) -> Option<&'static HexCode> {
    all().into_iter().find(|c| c.name() == name)
}
