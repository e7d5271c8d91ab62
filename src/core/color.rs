//! Color parsing and contrast helpers for block fills.
//!
//! Accepts `#RRGGBB`, `rgb(r, g, b)`, and `rgba(r, g, b, a)`; anything else
//! degrades to mid-gray rather than failing.

use once_cell::sync::Lazy;
use regex::Regex;

static RGB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rgba?\((\d+),\s*(\d+),\s*(\d+)(?:,\s*[\d.]+)?\)").expect("static rgb pattern")
});

/// Fallback hex for unparseable input.
pub const FALLBACK_HEX: &str = "#CCCCCC";

/// Parse a CSS color into RGB components. Returns `None` on unknown formats.
pub fn parse_color(input: &str) -> Option<(u8, u8, u8)> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some((r, g, b));
        }
        return None;
    }
    if input.starts_with("rgb") {
        let caps = RGB_RE.captures(input)?;
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u16>().ok();
        let r = channel(1)?.min(255) as u8;
        let g = channel(2)?.min(255) as u8;
        let b = channel(3)?.min(255) as u8;
        return Some((r, g, b));
    }
    None
}

/// Whether `input` is a color the dialogs accept.
pub fn is_valid_color(input: &str) -> bool {
    parse_color(input).is_some()
}

/// Relative luminance of a color in `[0, 1]`, mid-gray for unknown formats.
pub fn color_brightness(input: &str) -> f64 {
    let (r, g, b) = parse_color(input).unwrap_or((128, 128, 128));
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}

/// Black text on light backgrounds, white on dark.
pub fn contrast_text_color(background: &str) -> &'static str {
    text_color_for_brightness(color_brightness(background))
}

/// The threshold comparison is strict, so a brightness of exactly 0.55 still
/// gets white text.
pub fn text_color_for_brightness(brightness: f64) -> &'static str {
    if brightness > 0.55 {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

/// Normalize any accepted color to lowercase `#rrggbb` hex. Hex input passes
/// through unchanged; unparseable input yields the mid-gray fallback.
pub fn rgb_to_hex(input: &str) -> String {
    let input = input.trim();
    if input.starts_with('#') {
        return input.to_string();
    }
    match parse_color(input) {
        Some((r, g, b)) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        None => FALLBACK_HEX.to_string(),
    }
}

/// Lighten (positive `amount`) or darken (negative) a hex color per channel.
pub fn adjust_color(hex: &str, amount: i32) -> String {
    let (r, g, b) = match parse_color(hex) {
        Some(rgb) => rgb,
        None => return FALLBACK_HEX.to_string(),
    };
    let shift = |channel: u8| (channel as i32 + amount).clamp(0, 255) as u8;
    format!("#{:02x}{:02x}{:02x}", shift(r), shift(g), shift(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_rgb_forms() {
        assert_eq!(parse_color("#FFD3D3"), Some((255, 211, 211)));
        assert_eq!(parse_color("rgb(255, 0, 0)"), Some((255, 0, 0)));
        assert_eq!(parse_color("rgba(12, 34, 56, 0.5)"), Some((12, 34, 56)));
        assert_eq!(parse_color("tomato"), None);
        assert_eq!(parse_color("#fff"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex("rgb(255,0,0)"), "#ff0000");
        assert_eq!(rgb_to_hex("rgba(0, 128, 255, 0.3)"), "#0080ff");
        assert_eq!(rgb_to_hex("#A1B2C3"), "#A1B2C3");
        assert_eq!(rgb_to_hex("not-a-color"), "#CCCCCC");
    }

    #[test]
    fn test_contrast_extremes() {
        assert_eq!(contrast_text_color("#FFFFFF"), "#000000");
        assert_eq!(contrast_text_color("#000000"), "#FFFFFF");
    }

    #[test]
    fn test_contrast_threshold_is_strict() {
        // Exactly at the threshold the strict `>` keeps white text.
        assert_eq!(text_color_for_brightness(0.55), "#FFFFFF");
        assert_eq!(text_color_for_brightness(0.551), "#000000");
        // 0.55 * 255 = 140.25; a uniform gray of 140 lands just below the
        // threshold and one of 141 just above it.
        assert_eq!(contrast_text_color("rgb(140,140,140)"), "#FFFFFF");
        assert_eq!(contrast_text_color("rgb(141,141,141)"), "#000000");
        // Unknown formats read as mid-gray, i.e. dark enough for white text.
        assert_eq!(contrast_text_color("transparent"), "#FFFFFF");
    }

    #[test]
    fn test_adjust_color_clamps() {
        assert_eq!(adjust_color("#FFFFFF", 40), "#ffffff");
        assert_eq!(adjust_color("#101010", -40), "#000000");
        assert_eq!(adjust_color("#808080", 16), "#909090");
    }
}
