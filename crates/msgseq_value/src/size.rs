//! Byte-size quantities.
//!
//! A [`ByteSize`] is a plain `u64` count whose text grammar accepts a decimal
//! number with an optional magnitude suffix (`42K`, `1.5 Mi`, `0.0001k`).

use std::fmt;
use std::str::FromStr;

use msgseq_foundation::scale::{self, DEFAULT_PRECISION, Ladder, Magnitude};
use msgseq_foundation::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits beyond this are dropped before scaling.
const MAX_FRACTION_DIGITS: usize = 18;

/// An unsigned byte count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ByteSize(pub u64);

impl ByteSize {
    /// Creates a size from a byte count.
    #[must_use]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Returns the byte count.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Parses a size, returning `None` on malformed or out-of-range input.
    ///
    /// The decimal value is multiplied by the suffix factor and rounded to
    /// the nearest integer, ties away from zero. A non-zero quantity never
    /// rounds down to zero bytes: `0.0001k` is one byte.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let number_len = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+' || c == '-'))
            .unwrap_or(text.len());
        let (number, suffix) = text.split_at(number_len);
        let suffix = suffix.trim_start();

        let factor = if suffix.is_empty() {
            1
        } else {
            Magnitude::from_suffix(suffix)?.factor()
        };

        let (negative, number) = match number.as_bytes().first() {
            Some(b'-') => (true, &number[1..]),
            Some(b'+') => (false, &number[1..]),
            _ => (false, number),
        };
        let (integer, fraction) = number.split_once('.').unwrap_or((number, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() && fraction.is_empty()
            || !all_digits(integer)
            || !all_digits(fraction)
        {
            return None;
        }

        let nonzero = integer.bytes().chain(fraction.bytes()).any(|b| b != b'0');
        if negative && nonzero {
            return None;
        }

        let whole: u128 = if integer.is_empty() {
            0
        } else {
            integer.parse().ok()?
        };
        let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
        let scaled_fraction = if fraction.is_empty() {
            0
        } else {
            let numerator: u128 = fraction.parse().ok()?;
            let denominator = 10u128.pow(fraction.len() as u32);
            let product = numerator * u128::from(factor);
            let quotient = product / denominator;
            if (product % denominator) * 2 >= denominator {
                quotient + 1
            } else {
                quotient
            }
        };

        let total = whole
            .checked_mul(u128::from(factor))?
            .checked_add(scaled_fraction)?;
        let total = if total == 0 && nonzero { 1 } else { total };
        u64::try_from(total).ok().map(Self)
    }

    /// Parses a size, failing with a format error.
    pub fn parse(text: &str) -> Result<Self> {
        Self::try_parse(text).ok_or_else(|| Error::format("Size", text))
    }

    /// Renders the count in `magnitude` units with its suffix.
    ///
    /// `pattern` is a decimal pattern such as `0.00`; without one the shortest
    /// exact decimal is used.
    pub fn to_magnitude_string(self, magnitude: Magnitude, pattern: Option<&str>) -> Result<String> {
        scale::format_fixed(self.0, magnitude, pattern)
    }

    /// Renders in kilobytes (10^3).
    pub fn to_kilo_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::KILO, pattern)
    }

    /// Renders in megabytes (10^6).
    pub fn to_mega_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::MEGA, pattern)
    }

    /// Renders in gigabytes (10^9).
    pub fn to_giga_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::GIGA, pattern)
    }

    /// Renders in terabytes (10^12).
    pub fn to_tera_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::TERA, pattern)
    }

    /// Renders in petabytes (10^15).
    pub fn to_peta_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::PETA, pattern)
    }

    /// Renders in kibibytes (2^10).
    pub fn to_kibi_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::KIBI, pattern)
    }

    /// Renders in mebibytes (2^20).
    pub fn to_mebi_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::MEBI, pattern)
    }

    /// Renders in gibibytes (2^30).
    pub fn to_gibi_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::GIBI, pattern)
    }

    /// Renders in tebibytes (2^40).
    pub fn to_tebi_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::TEBI, pattern)
    }

    /// Renders in pebibytes (2^50).
    pub fn to_pebi_string(self, pattern: Option<&str>) -> Result<String> {
        self.to_magnitude_string(Magnitude::PEBI, pattern)
    }

    /// Auto-scaled SI rendering with `precision` significant digits.
    #[must_use]
    pub fn to_scaled_si_string(self, precision: usize) -> String {
        scale::format_scaled(self.0, precision, Ladder::Si)
    }

    /// Auto-scaled binary rendering with `precision` significant digits.
    #[must_use]
    pub fn to_scaled_binary_string(self, precision: usize) -> String {
        scale::format_scaled(self.0, precision, Ladder::Binary)
    }

    /// Auto-scaled SI rendering at the default precision.
    #[must_use]
    pub fn scaled_si(self) -> String {
        self.to_scaled_si_string(DEFAULT_PRECISION)
    }

    /// Auto-scaled binary rendering at the default precision.
    #[must_use]
    pub fn scaled_binary(self) -> String {
        self.to_scaled_binary_string(DEFAULT_PRECISION)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ByteSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}
