//! ANSI 24-bit color escapes for terminal swatches.
//!
//! See <https://gist.github.com/fnky/458719343aabd01cfb17a3a4f7296797>.

use rgb::RGB8;

const RESET: &str = "\x1b[0m";

/// Wrap `text` in escape sequences setting its foreground color `fg`,
/// then its background color `bg`.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use arcadia_color::display::colorize;
/// let s = colorize("  ", None, Some(RGB8::new(255, 0, 0)));
/// assert_eq!(s, "\x1b[48;2;255;0;0m  \x1b[0m");
/// ```
pub fn colorize(text: &str, fg: Option<RGB8>, bg: Option<RGB8>) -> String {
    let mut s = text.to_string();
    if let Some(c) = fg {
        s = format!("\x1b[38;2;{};{};{}m{s}{RESET}", c.r, c.g, c.b);
    }
    if let Some(c) = bg {
        s = format!("\x1b[48;2;{};{};{}m{s}{RESET}", c.r, c.g, c.b);
    }
    s
}
