//! Grammars for the non-temporal scalar variants.
//!
//! Every function here is non-throwing: `None` means the text does not
//! belong to the grammar. [`crate::Value::parse`] lifts these into errors.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Parses a boolean: `true t yes y +` or `false f no n -`, case-insensitively.
#[must_use]
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "+" => Some(true),
        "false" | "f" | "no" | "n" | "-" => Some(false),
        _ => None,
    }
}

/// Parses an optionally signed decimal integer into any integer type.
///
/// The numeral is evaluated at 128-bit precision and then range-checked
/// against `T`, so syntactically valid numerals outside `T` are rejected.
#[must_use]
pub fn parse_integer<T: TryFrom<i128>>(text: &str) -> Option<T> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let wide: i128 = text.parse().ok()?;
    T::try_from(wide).ok()
}

/// True for decimal or scientific numerals and the words `NaN`,
/// `Infinity`, `+Infinity`, `-Infinity`.
fn is_float_literal(text: &str) -> bool {
    match text {
        "NaN" | "Infinity" | "+Infinity" | "-Infinity" => true,
        _ => {
            !text.is_empty()
                && text
                    .bytes()
                    .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        }
    }
}

/// Parses an `f64` in decimal or scientific notation, `NaN`, or `Infinity`.
#[must_use]
pub fn parse_f64(text: &str) -> Option<f64> {
    if !is_float_literal(text) {
        return None;
    }
    text.parse().ok()
}

/// Parses an `f32` in decimal or scientific notation, `NaN`, or `Infinity`.
#[must_use]
pub fn parse_f32(text: &str) -> Option<f32> {
    if !is_float_literal(text) {
        return None;
    }
    text.parse().ok()
}

/// Parses hex digit pairs with an optional `0x`/`0X` prefix.
#[must_use]
pub fn parse_binary(text: &str) -> Option<Vec<u8>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    hex::decode(digits).ok()
}

/// Renders bytes canonically: `0x` followed by uppercase hex.
#[must_use]
pub fn format_binary(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode_upper(bytes))
}

/// Parses an address of either family.
#[must_use]
pub fn parse_ip(text: &str) -> Option<IpAddr> {
    text.parse().ok()
}

/// Parses a dotted-quad IPv4 address.
#[must_use]
pub fn parse_ipv4(text: &str) -> Option<Ipv4Addr> {
    text.parse().ok()
}

/// Parses a colon-hex IPv6 address.
#[must_use]
pub fn parse_ipv6(text: &str) -> Option<Ipv6Addr> {
    text.parse().ok()
}

/// Renders a float as the shortest text that parses back to the same bits.
///
/// Magnitudes outside `1e-5..1e15` switch to scientific notation.
pub(crate) fn format_float<F>(value: F, magnitude: f64) -> String
where
    F: std::fmt::Display + std::fmt::LowerExp,
{
    if magnitude.is_nan() {
        "NaN".to_string()
    } else if magnitude.is_infinite() {
        if magnitude > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if magnitude != 0.0 && (magnitude.abs() >= 1e15 || magnitude.abs() < 1e-5) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}
