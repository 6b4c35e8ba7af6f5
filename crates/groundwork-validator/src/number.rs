use std::sync::OnceLock;

use regex::Regex;

/// A value that may be coerced to a number
///
/// Mirrors what a loosely typed caller hands over: either an actual number
/// or text that might contain one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<'a> {
    /// A number
    Number(f64),
    /// Text to be parsed
    Text(&'a str),
}

impl Numeric<'_> {
    /// Numeric value, or `None` if the value does not coerce
    ///
    /// NaN never coerces.
    pub fn coerce(&self) -> Option<f64> {
        match *self {
            Self::Number(number) if number.is_nan() => None,
            Self::Number(number) => Some(number),
            Self::Text(text) => parse_number(text),
        }
    }

    /// Numeric value with NaN standing in for non-numeric text
    pub(crate) fn as_f64(&self) -> f64 {
        self.coerce().unwrap_or(f64::NAN)
    }
}

impl From<f64> for Numeric<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Numeric<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Numeric<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Numeric<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for Numeric<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Numeric<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl<'a> From<&'a str> for Numeric<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Numeric<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

fn decimal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid decimal regex"))
}

/// Parse text the way a loose numeric conversion does
///
/// Surrounding whitespace is ignored and blank text is zero. Accepts decimal
/// literals with optional sign, fraction and exponent, unsigned `0x`, `0o`
/// and `0b` integers, and `Infinity` with optional sign.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(radix) = radix_of(trimmed) {
        return parse_radix(&trimmed[2..], radix);
    }

    if decimal_regex().is_match(trimmed) {
        return trimmed.parse().ok();
    }

    None
}

fn radix_of(text: &str) -> Option<u32> {
    let prefix = text.get(..2)?;

    match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_text() {
        assert_eq!(parse_number("1"), Some(1.0));
        assert_eq!(parse_number(" -2.5 "), Some(-2.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1."), Some(1.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("+4E-1"), Some(0.4));
    }

    #[test]
    fn blank_text_is_zero() {
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("   "), Some(0.0));
    }

    #[test]
    fn radix_prefixes() {
        assert_eq!(parse_number("0x10"), Some(16.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
        assert_eq!(parse_number("0b101"), Some(5.0));
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0b2"), None);
        assert_eq!(parse_number("-0x10"), None);
    }

    #[test]
    fn infinity_but_not_other_float_spellings() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("infinity"), None);
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_number("bar"), None);
        assert_eq!(parse_number("1_000"), None);
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number("."), None);
    }

    #[test]
    fn wide_integers_coerce() {
        assert_eq!(Numeric::from(5_u32).coerce(), Some(5.0));
        assert_eq!(Numeric::from(-7_i64).coerce(), Some(-7.0));
        assert_eq!(Numeric::from(1_u64 << 40).coerce(), Some(1_099_511_627_776.0));
        assert_eq!(Numeric::from(3_usize).coerce(), Some(3.0));
    }

    #[test]
    fn nan_number_does_not_coerce() {
        assert_eq!(Numeric::from(f64::NAN).coerce(), None);
        assert_eq!(Numeric::from(3).coerce(), Some(3.0));
    }
}
