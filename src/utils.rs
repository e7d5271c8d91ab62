/// Parse a float from a text input, falling back when empty or malformed.
pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f64>().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_input() {
        assert_eq!(parse_f64_input(" 0.45 ", 1.0), 0.45);
        assert_eq!(parse_f64_input("", 1.0), 1.0);
        assert_eq!(parse_f64_input("abc", 0.4), 0.4);
    }
}
