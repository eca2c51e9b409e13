//! Sign-aware reinterpretation between byte sequences and integers.
//!
//! All encodings are big-endian. Decoding accepts byte sequences of any
//! length: sequences shorter than the requested width are extended (sign
//! extension for signed targets, zero extension for unsigned ones), and longer
//! sequences are accepted only when the surplus leading bytes are a valid
//! extension of the low `width` bytes.

use std::fmt;

use byteorder::{BigEndian, ByteOrder};

/// Integer width in bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    /// 8 bits.
    W8,
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    W64,
}

impl Width {
    /// Number of bytes occupied by this width.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::W8 => 1,
            Self::W16 => 2,
            Self::W32 => 4,
            Self::W64 => 8,
        }
    }

    /// Number of bits occupied by this width.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }

    /// Smallest signed value representable in this width.
    #[must_use]
    pub const fn signed_min(self) -> i64 {
        match self {
            Self::W8 => i8::MIN as i64,
            Self::W16 => i16::MIN as i64,
            Self::W32 => i32::MIN as i64,
            Self::W64 => i64::MIN,
        }
    }

    /// Largest signed value representable in this width.
    #[must_use]
    pub const fn signed_max(self) -> i64 {
        match self {
            Self::W8 => i8::MAX as i64,
            Self::W16 => i16::MAX as i64,
            Self::W32 => i32::MAX as i64,
            Self::W64 => i64::MAX,
        }
    }

    /// Largest unsigned value representable in this width.
    #[must_use]
    pub const fn unsigned_max(self) -> u64 {
        match self {
            Self::W8 => u8::MAX as u64,
            Self::W16 => u16::MAX as u64,
            Self::W32 => u32::MAX as u64,
            Self::W64 => u64::MAX,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Splits `bytes` into (surplus, low) where `low` holds at most `width` bytes.
fn split_low(bytes: &[u8], width: Width) -> (&[u8], &[u8]) {
    let cut = bytes.len().saturating_sub(width.bytes());
    bytes.split_at(cut)
}

/// Decodes `bytes` as a signed integer of the given width.
///
/// Returns `None` for an empty sequence, or when the bytes beyond the low
/// `width` bytes are not all `0x00` (low part non-negative) or all `0xFF`
/// (low part negative).
#[must_use]
pub fn decode_signed(bytes: &[u8], width: Width) -> Option<i64> {
    let (surplus, low) = split_low(bytes, width);
    let first = *low.first()?;
    let fill = if first & 0x80 == 0 { 0x00 } else { 0xFF };
    if surplus.iter().any(|&b| b != fill) {
        return None;
    }

    let mut buf = [fill; 8];
    buf[8 - low.len()..].copy_from_slice(low);
    Some(BigEndian::read_i64(&buf))
}

/// Decodes `bytes` as an unsigned integer of the given width.
///
/// Returns `None` for an empty sequence, or when any byte beyond the low
/// `width` bytes is non-zero.
#[must_use]
pub fn decode_unsigned(bytes: &[u8], width: Width) -> Option<u64> {
    if bytes.is_empty() {
        return None;
    }
    let (surplus, low) = split_low(bytes, width);
    if surplus.iter().any(|&b| b != 0) {
        return None;
    }

    let mut buf = [0u8; 8];
    buf[8 - low.len()..].copy_from_slice(low);
    Some(BigEndian::read_u64(&buf))
}

/// Encodes a signed value as `width` big-endian two's-complement bytes.
///
/// Bits above `width` are discarded; callers pass values already in range.
#[must_use]
pub fn encode_signed(value: i64, width: Width) -> Vec<u8> {
    let mut buf = [0u8; 8];
    BigEndian::write_i64(&mut buf, value);
    buf[8 - width.bytes()..].to_vec()
}

/// Encodes an unsigned value as `width` big-endian bytes.
#[must_use]
pub fn encode_unsigned(value: u64, width: Width) -> Vec<u8> {
    let mut buf = [0u8; 8];
    BigEndian::write_u64(&mut buf, value);
    buf[8 - width.bytes()..].to_vec()
}

/// Encodes the IEEE-754 bit pattern of an `f32`, big-endian.
#[must_use]
pub fn encode_f32(value: f32) -> Vec<u8> {
    let mut buf = [0u8; 4];
    BigEndian::write_f32(&mut buf, value);
    buf.to_vec()
}

/// Encodes the IEEE-754 bit pattern of an `f64`, big-endian.
#[must_use]
pub fn encode_f64(value: f64) -> Vec<u8> {
    let mut buf = [0u8; 8];
    BigEndian::write_f64(&mut buf, value);
    buf.to_vec()
}

/// Decodes exactly four big-endian bytes as an `f32`.
#[must_use]
pub fn decode_f32(bytes: &[u8]) -> Option<f32> {
    (bytes.len() == 4).then(|| BigEndian::read_f32(bytes))
}

/// Decodes exactly eight big-endian bytes as an `f64`.
#[must_use]
pub fn decode_f64(bytes: &[u8]) -> Option<f64> {
    (bytes.len() == 8).then(|| BigEndian::read_f64(bytes))
}
