//! Conversion of raw form input into numbers.
//!
//! Numeric form controls hand over whatever text the user typed. The value is
//! coerced the way a browser's `Number()` does it, so a field that cannot be
//! read as a number holds `NaN` instead of being rejected or guessed at.

/// Coerces raw field text into an `f64`.
///
/// * Surrounding whitespace is ignored; empty input is `0`.
/// * Decimal literals with an optional sign, fraction and exponent.
/// * `0x`, `0o` and `0b` prefixed integers (unsigned).
/// * `Infinity`, `+Infinity` and `-Infinity`.
///
/// Anything else yields `NaN`.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(s) {
        return value;
    }

    // `f64::from_str` also takes "inf" and "nan" spellings that are not numbers here.
    let decimal_chars = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_chars {
        return f64::NAN;
    }

    s.parse().unwrap_or(f64::NAN)
}

fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
