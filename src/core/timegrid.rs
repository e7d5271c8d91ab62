//! Time parsing and formatting for the schedule grid.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an `HH:MM-HH:MM` range anywhere in a block's display text.
static TIME_RANGE_SCAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})").expect("static pattern"));

/// Matches a full `HH:MM-HH:MM` string, the only form dialogs accept.
static TIME_RANGE_STRICT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2})-(\d{2}):(\d{2})$").expect("static pattern"));

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Format minutes from midnight as zero-padded `HH:MM`.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Render a `(start, end)` minute pair as `HH:MM-HH:MM`.
pub fn format_time_range(start_min: u32, end_min: u32) -> String {
    format!("{}-{}", minutes_to_time(start_min), minutes_to_time(end_min))
}

/// Scan free text for the first `HH:MM-HH:MM` occurrence and return the pair
/// as minutes from midnight. No plausibility checks; callers validate.
pub fn scan_time_range(text: &str) -> Option<(u32, u32)> {
    let caps = TIME_RANGE_SCAN_RE.captures(text)?;
    let number = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    let start = number(1)? * 60 + number(2)?;
    let end = number(3)? * 60 + number(4)?;
    Some((start, end))
}

/// Parse a dialog time-range input. Rejects anything that is not exactly
/// `HH:MM-HH:MM` with a plausible ordering.
pub fn parse_time_range_strict(input: &str) -> Option<(u32, u32)> {
    let caps = TIME_RANGE_STRICT_RE.captures(input.trim())?;
    let number = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    let start = number(1)? * 60 + number(2)?;
    let end = number(3)? * 60 + number(4)?;
    if !plausible_range(start, end) {
        return None;
    }
    Some((start, end))
}

/// A range is plausible when it runs forward within one day.
pub fn plausible_range(start_min: u32, end_min: u32) -> bool {
    start_min < end_min && end_min <= MINUTES_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_to_time_pads() {
        assert_eq!(minutes_to_time(540), "09:00");
        assert_eq!(minutes_to_time(605), "10:05");
        assert_eq!(format_time_range(540, 630), "09:00-10:30");
    }

    #[test]
    fn test_scan_finds_range_inside_text() {
        let text = "Mathematik\nFrau Weber\nGruppe A\n09:00-10:30";
        assert_eq!(scan_time_range(text), Some((540, 630)));
        assert_eq!(scan_time_range("no times here"), None);
    }

    #[test]
    fn test_strict_parse_rejects_backwards_and_overflow() {
        assert_eq!(parse_time_range_strict("09:00-10:30"), Some((540, 630)));
        assert_eq!(parse_time_range_strict(" 09:00-10:30 "), Some((540, 630)));
        assert_eq!(parse_time_range_strict("10:30-09:00"), None);
        assert_eq!(parse_time_range_strict("09:00-25:00"), None);
        assert_eq!(parse_time_range_strict("9:00-10:30"), None);
        assert_eq!(parse_time_range_strict("09:00 - 10:30"), None);
    }

    #[test]
    fn test_plausible_range_bounds() {
        assert!(plausible_range(0, MINUTES_PER_DAY));
        assert!(!plausible_range(600, 600));
        assert!(!plausible_range(600, MINUTES_PER_DAY + 5));
    }
}
