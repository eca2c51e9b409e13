//! Magnitude scaling for byte counts.
//!
//! Renders a `u64` count as a short human string (`1.23M`, `42Ki`) using
//! either the SI ladder (factor 1000 per step) or the binary ladder
//! (factor 1024 per step). The ladders stop at peta; larger counts are
//! expressed as a coefficient above the step factor (`12300P`).

use std::fmt;

use crate::error::{Error, Result};

/// Default number of significant digits for scaled rendering.
pub const DEFAULT_PRECISION: usize = 3;

/// Highest step on either ladder (peta / pebi).
pub const MAX_STEP: u32 = 5;

/// A magnitude ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ladder {
    /// Powers of 1000: K, M, G, T, P.
    Si,
    /// Powers of 1024: Ki, Mi, Gi, Ti, Pi.
    Binary,
}

impl Ladder {
    /// Multiplier between adjacent steps.
    #[must_use]
    pub const fn base(self) -> u64 {
        match self {
            Self::Si => 1000,
            Self::Binary => 1024,
        }
    }

    /// Suffix rendered for the given step (`""` for step 0).
    #[must_use]
    pub const fn suffix(self, step: u32) -> &'static str {
        const SI: [&str; 6] = ["", "K", "M", "G", "T", "P"];
        const BINARY: [&str; 6] = ["", "Ki", "Mi", "Gi", "Ti", "Pi"];
        let index = if step > MAX_STEP { MAX_STEP } else { step };
        match self {
            Self::Si => SI[index as usize],
            Self::Binary => BINARY[index as usize],
        }
    }

    /// Multiplier for the given step.
    #[must_use]
    pub const fn factor(self, step: u32) -> u64 {
        self.base().pow(step)
    }
}

/// One fixed step on one ladder, e.g. mebi.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Magnitude {
    /// The ladder this step belongs to.
    pub ladder: Ladder,
    /// Step index, 1 (kilo) through 5 (peta).
    pub step: u32,
}

impl Magnitude {
    /// 10^3.
    pub const KILO: Self = Self::new(Ladder::Si, 1);
    /// 10^6.
    pub const MEGA: Self = Self::new(Ladder::Si, 2);
    /// 10^9.
    pub const GIGA: Self = Self::new(Ladder::Si, 3);
    /// 10^12.
    pub const TERA: Self = Self::new(Ladder::Si, 4);
    /// 10^15.
    pub const PETA: Self = Self::new(Ladder::Si, 5);
    /// 2^10.
    pub const KIBI: Self = Self::new(Ladder::Binary, 1);
    /// 2^20.
    pub const MEBI: Self = Self::new(Ladder::Binary, 2);
    /// 2^30.
    pub const GIBI: Self = Self::new(Ladder::Binary, 3);
    /// 2^40.
    pub const TEBI: Self = Self::new(Ladder::Binary, 4);
    /// 2^50.
    pub const PEBI: Self = Self::new(Ladder::Binary, 5);

    const fn new(ladder: Ladder, step: u32) -> Self {
        Self { ladder, step }
    }

    /// Multiplier of this magnitude.
    #[must_use]
    pub const fn factor(self) -> u64 {
        self.ladder.factor(self.step)
    }

    /// Canonical suffix of this magnitude.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        self.ladder.suffix(self.step)
    }

    /// Looks up a magnitude by suffix, case-insensitively (`k`, `Ki`, `MI`, ...).
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let lower = suffix.to_ascii_lowercase();
        let (letter, ladder) = match lower.as_bytes() {
            [c] => (*c, Ladder::Si),
            [c, b'i'] => (*c, Ladder::Binary),
            _ => return None,
        };
        let step = match letter {
            b'k' => 1,
            b'm' => 2,
            b'g' => 3,
            b't' => 4,
            b'p' => 5,
            _ => return None,
        };
        Some(Self::new(ladder, step))
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Renders `value` on `ladder` with `precision` significant digits.
///
/// The largest step whose scaled value is at least 1 is chosen, moving up a
/// step when rounding carries the coefficient to the next factor. The result
/// carries exactly `precision` significant digits; once the integer part
/// alone uses them all, the scaled value is rounded to an integer count of
/// that unit (`12345.67P` at precision 3 renders as `12300P`). Counts below
/// one step are rendered exactly.
#[must_use]
pub fn format_scaled(value: u64, precision: usize, ladder: Ladder) -> String {
    let precision = precision.max(1);
    let ratio = ladder.base() as f64;

    let mut step = 0;
    while step < MAX_STEP && value / ladder.factor(step + 1) >= 1 {
        step += 1;
    }

    loop {
        let scaled = value as f64 / ladder.factor(step) as f64;
        if step < MAX_STEP && round_significant(scaled, precision) >= ratio {
            step += 1;
            continue;
        }
        if step == 0 {
            return value.to_string();
        }
        return format!("{}{}", significant(scaled, precision), ladder.suffix(step));
    }
}

/// Number of digits in the integer part of a value >= 1.
fn integer_digits(value: f64) -> usize {
    let mut digits = 1;
    let mut bound = 10.0;
    while value >= bound {
        digits += 1;
        bound *= 10.0;
    }
    digits
}

fn round_significant(value: f64, precision: usize) -> f64 {
    let exponent = integer_digits(value) as i32 - precision as i32;
    let unit = 10f64.powi(exponent);
    (value / unit).round() * unit
}

fn significant(value: f64, precision: usize) -> String {
    let rounded = round_significant(value, precision);
    let digits = integer_digits(rounded);
    if digits >= precision {
        format!("{rounded:.0}")
    } else {
        let text = format!("{:.*}", precision - digits, rounded);
        text.trim_end_matches('.').to_string()
    }
}

/// A fixed-point rendering pattern such as `0.00` or `0.0##`.
///
/// Before the decimal point, each `0` is a mandatory digit; after it, each
/// `0` is a mandatory fractional digit and each trailing `#` an optional one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalPattern {
    min_integer: usize,
    min_fraction: usize,
    max_fraction: usize,
}

impl DecimalPattern {
    /// Parses a pattern.
    ///
    /// # Errors
    ///
    /// Returns a format error for characters other than `0`, `#`, and one
    /// `.`, or for a `0` after a `#` in the fraction.
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = || Error::format("decimal pattern", pattern);
        let (integer, fraction) = match pattern.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (pattern, None),
        };
        if integer.is_empty() || !integer.chars().all(|c| c == '0' || c == '#') {
            return Err(invalid());
        }
        let min_integer = integer.chars().filter(|&c| c == '0').count().max(1);

        let (min_fraction, max_fraction) = match fraction {
            None => (0, 0),
            Some(f) => {
                let zeros = f.chars().take_while(|&c| c == '0').count();
                let hashes = f[zeros..].chars().take_while(|&c| c == '#').count();
                if zeros + hashes != f.len() {
                    return Err(invalid());
                }
                (zeros, zeros + hashes)
            }
        };

        Ok(Self {
            min_integer,
            min_fraction,
            max_fraction,
        })
    }

    /// Renders `value` according to this pattern.
    #[must_use]
    pub fn render(&self, value: f64) -> String {
        let text = format!("{:.*}", self.max_fraction, value);
        let (integer, fraction) = match text.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (text.clone(), String::new()),
        };

        let mut fraction = fraction;
        while fraction.len() > self.min_fraction && fraction.ends_with('0') {
            fraction.pop();
        }

        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer.as_str()),
        };
        let padded = format!("{sign}{digits:0>width$}", width = self.min_integer);

        if fraction.is_empty() {
            padded
        } else {
            format!("{padded}.{fraction}")
        }
    }
}

/// Renders `value` divided by `magnitude`, followed by the magnitude suffix.
///
/// Without a pattern the shortest exact decimal form of the quotient is used.
///
/// # Errors
///
/// Returns a format error if `pattern` is malformed.
pub fn format_fixed(value: u64, magnitude: Magnitude, pattern: Option<&str>) -> Result<String> {
    let scaled = value as f64 / magnitude.factor() as f64;
    let number = match pattern {
        Some(p) => DecimalPattern::parse(p)?.render(scaled),
        None => scaled.to_string(),
    };
    Ok(format!("{number}{}", magnitude.suffix()))
}
