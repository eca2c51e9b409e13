//! The cross-variant coercion matrix.
//!
//! Every accessor here is a query: it never fails with an error and never
//! mutates the receiver. `None` means the source cannot represent the target
//! meaningfully. Text sources always go through the target's parser; Binary
//! sources go through the byte codec.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use msgseq_foundation::Width;
use msgseq_foundation::codec;

use crate::config::ValueConfig;
use crate::kind::ValueKind;
use crate::parse;
use crate::size::ByteSize;
use crate::temporal;
use crate::value::Value;

const NANOS_PER_TICK: f64 = 100.0;
const TICKS_PER_SECOND: f64 = 10_000_000.0;

/// Truncates toward zero; non-finite values have no integer view.
#[allow(clippy::cast_possible_truncation)]
fn float_to_integer(x: f64) -> Option<i128> {
    if !x.is_finite() || x.abs() >= 2f64.powi(126) {
        return None;
    }
    Some(x.trunc() as i128)
}

fn midnight_utc(date: NaiveDate) -> DateTime<FixedOffset> {
    date.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

fn epoch_seconds_f64(dt: &DateTime<FixedOffset>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let whole = dt.timestamp() as f64;
    whole + f64::from(dt.timestamp_subsec_nanos()) / 1e9
}

/// Epoch seconds with a fractional part, kept at 100ns resolution.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn from_epoch_f64(seconds: f64) -> Option<DateTime<FixedOffset>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let whole = i64::try_from(float_to_integer(whole)?).ok()?;
    let ticks = ((seconds - seconds.floor()) * TICKS_PER_SECOND).round();
    let (whole, ticks) = if ticks >= TICKS_PER_SECOND {
        (whole.checked_add(1)?, 0.0)
    } else {
        (whole, ticks)
    };
    let nanos = (ticks * NANOS_PER_TICK) as u32;
    DateTime::from_timestamp(whole, nanos).map(|dt| dt.fixed_offset())
}

fn duration_seconds_f64(delta: TimeDelta) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let whole = delta.num_seconds() as f64;
    whole + f64::from(delta.subsec_nanos()) / 1e9
}

impl Value {
    /// Integer view shared by the integer, Boolean, and Size accessors.
    ///
    /// Text and Binary are handled by the callers, which know the target
    /// width and signedness.
    fn integer_view(&self) -> Option<i128> {
        match self {
            Self::Boolean(b) => Some(i128::from(*b)),
            Self::Int8(n) => Some(i128::from(*n)),
            Self::Int16(n) => Some(i128::from(*n)),
            Self::Int32(n) => Some(i128::from(*n)),
            Self::Int64(n) => Some(i128::from(*n)),
            Self::UInt8(n) => Some(i128::from(*n)),
            Self::UInt16(n) => Some(i128::from(*n)),
            Self::UInt32(n) => Some(i128::from(*n)),
            Self::UInt64(n) => Some(i128::from(*n)),
            Self::Size(size) => Some(i128::from(size.0)),
            Self::Float32(x) => float_to_integer(f64::from(*x)),
            Self::Float64(x) => float_to_integer(*x),
            Self::DateTime(dt) => Some(i128::from(dt.timestamp())),
            Self::Date(date) => Some(i128::from(midnight_utc(*date).timestamp())),
            Self::Duration(delta) => Some(i128::from(delta.num_seconds())),
            Self::Text(_)
            | Self::Binary(_)
            | Self::Time(_)
            | Self::IpAddress(_)
            | Self::Ipv4Address(_)
            | Self::Ipv6Address(_) => None,
        }
    }

    /// Float view shared by both float accessors, for non-Text, non-Binary sources.
    #[allow(clippy::cast_precision_loss)]
    fn float_view(&self) -> Option<f64> {
        match self {
            Self::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int8(n) => Some(f64::from(*n)),
            Self::Int16(n) => Some(f64::from(*n)),
            Self::Int32(n) => Some(f64::from(*n)),
            Self::Int64(n) => Some(*n as f64),
            Self::UInt8(n) => Some(f64::from(*n)),
            Self::UInt16(n) => Some(f64::from(*n)),
            Self::UInt32(n) => Some(f64::from(*n)),
            Self::UInt64(n) => Some(*n as f64),
            Self::Size(size) => Some(size.0 as f64),
            Self::Float32(x) => Some(f64::from(*x)),
            Self::Float64(x) => Some(*x),
            Self::DateTime(dt) => Some(epoch_seconds_f64(dt)),
            Self::Date(date) => Some(epoch_seconds_f64(&midnight_utc(*date))),
            Self::Duration(delta) => Some(duration_seconds_f64(*delta)),
            Self::Text(_)
            | Self::Binary(_)
            | Self::Time(_)
            | Self::IpAddress(_)
            | Self::Ipv4Address(_)
            | Self::Ipv6Address(_) => None,
        }
    }

    fn integer<T: TryFrom<i128>>(&self, width: Width, signed: bool) -> Option<T> {
        let wide = match self {
            Self::Text(text) => return parse::parse_integer(text),
            Self::Binary(bytes) if signed => codec::decode_signed(bytes, width).map(i128::from),
            Self::Binary(bytes) => codec::decode_unsigned(bytes, width).map(i128::from),
            other => other.integer_view(),
        }?;
        T::try_from(wide).ok()
    }

    /// Coerces to a boolean: numeric sources are true iff non-zero.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Text(text) => parse::parse_bool(text),
            Self::Float32(x) if !x.is_nan() => Some(*x != 0.0),
            Self::Float64(x) if !x.is_nan() => Some(*x != 0.0),
            Self::Int8(_)
            | Self::Int16(_)
            | Self::Int32(_)
            | Self::Int64(_)
            | Self::UInt8(_)
            | Self::UInt16(_)
            | Self::UInt32(_)
            | Self::UInt64(_)
            | Self::Size(_) => self.integer_view().map(|n| n != 0),
            _ => None,
        }
    }

    /// Coerces to `i8`, range-checked.
    #[must_use]
    pub fn as_i8(&self) -> Option<i8> {
        self.integer(Width::W8, true)
    }

    /// Coerces to `i16`, range-checked.
    #[must_use]
    pub fn as_i16(&self) -> Option<i16> {
        self.integer(Width::W16, true)
    }

    /// Coerces to `i32`, range-checked.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        self.integer(Width::W32, true)
    }

    /// Coerces to `i64`, range-checked.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.integer(Width::W64, true)
    }

    /// Coerces to `u8`, range-checked.
    #[must_use]
    pub fn as_u8(&self) -> Option<u8> {
        self.integer(Width::W8, false)
    }

    /// Coerces to `u16`, range-checked.
    #[must_use]
    pub fn as_u16(&self) -> Option<u16> {
        self.integer(Width::W16, false)
    }

    /// Coerces to `u32`, range-checked.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        self.integer(Width::W32, false)
    }

    /// Coerces to `u64`, range-checked.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.integer(Width::W64, false)
    }

    /// Coerces to `f32`. Binary sources must hold exactly four bytes; finite
    /// sources beyond the `f32` range are absent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Text(text) => parse::parse_f32(text),
            Self::Binary(bytes) => codec::decode_f32(bytes),
            Self::Float32(x) => Some(*x),
            other => other.float_view().and_then(|x| {
                let narrow = x as f32;
                (narrow.is_finite() || !x.is_finite()).then_some(narrow)
            }),
        }
    }

    /// Coerces to `f64`. Binary sources must hold exactly eight bytes.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Text(text) => parse::parse_f64(text),
            Self::Binary(bytes) => codec::decode_f64(bytes),
            other => other.float_view(),
        }
    }

    /// Coerces to text. Binary is decoded as UTF-8; everything else renders
    /// its canonical form.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Binary(bytes) => String::from_utf8(bytes.to_vec()).ok(),
            other => Some(other.to_text()),
        }
    }

    /// Coerces to bytes: fixed-width big-endian for numbers, network order
    /// for addresses.
    #[must_use]
    pub fn as_binary(&self) -> Option<Vec<u8>> {
        match self {
            Self::Int8(n) => Some(codec::encode_signed(i64::from(*n), Width::W8)),
            Self::Int16(n) => Some(codec::encode_signed(i64::from(*n), Width::W16)),
            Self::Int32(n) => Some(codec::encode_signed(i64::from(*n), Width::W32)),
            Self::Int64(n) => Some(codec::encode_signed(*n, Width::W64)),
            Self::UInt8(n) => Some(codec::encode_unsigned(u64::from(*n), Width::W8)),
            Self::UInt16(n) => Some(codec::encode_unsigned(u64::from(*n), Width::W16)),
            Self::UInt32(n) => Some(codec::encode_unsigned(u64::from(*n), Width::W32)),
            Self::UInt64(n) => Some(codec::encode_unsigned(*n, Width::W64)),
            Self::Size(size) => Some(codec::encode_unsigned(size.0, Width::W64)),
            Self::Float32(x) => Some(codec::encode_f32(*x)),
            Self::Float64(x) => Some(codec::encode_f64(*x)),
            Self::Text(text) => parse::parse_binary(text),
            Self::Binary(bytes) => Some(bytes.to_vec()),
            Self::IpAddress(IpAddr::V4(addr)) | Self::Ipv4Address(addr) => {
                Some(addr.octets().to_vec())
            }
            Self::IpAddress(IpAddr::V6(addr)) | Self::Ipv6Address(addr) => {
                Some(addr.octets().to_vec())
            }
            Self::Boolean(_)
            | Self::DateTime(_)
            | Self::Date(_)
            | Self::Time(_)
            | Self::Duration(_) => None,
        }
    }

    /// Coerces to a date and time, parsing text with default configuration.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.as_datetime_with(&ValueConfig::default())
    }

    /// Coerces to a date and time.
    ///
    /// 64-bit integers and `f64` are Unix epoch seconds in UTC; a Date is
    /// midnight UTC.
    #[must_use]
    pub fn as_datetime_with(&self, config: &ValueConfig) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            Self::Date(date) => Some(midnight_utc(*date)),
            Self::Text(text) => temporal::parse_datetime(text, config),
            Self::Int64(n) => DateTime::from_timestamp(*n, 0).map(|dt| dt.fixed_offset()),
            Self::UInt64(n) => {
                let seconds = i64::try_from(*n).ok()?;
                DateTime::from_timestamp(seconds, 0).map(|dt| dt.fixed_offset())
            }
            Self::Float64(x) => from_epoch_f64(*x),
            _ => None,
        }
    }

    /// Coerces to a calendar date.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::DateTime(dt) => Some(dt.date_naive()),
            Self::Text(text) => temporal::parse_date(text),
            Self::Int64(_) | Self::UInt64(_) | Self::Float64(_) => {
                self.as_datetime().map(|dt| dt.date_naive())
            }
            _ => None,
        }
    }

    /// Coerces to a time of day. Only DateTime, Time, and Text sources qualify.
    #[must_use]
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(time) => Some(*time),
            Self::DateTime(dt) => Some(dt.time()),
            Self::Text(text) => temporal::parse_time(text),
            _ => None,
        }
    }

    /// Coerces to a duration. Only Duration and Text sources qualify.
    #[must_use]
    pub fn as_duration(&self) -> Option<TimeDelta> {
        match self {
            Self::Duration(delta) => Some(*delta),
            Self::Text(text) => temporal::parse_duration(text),
            _ => None,
        }
    }

    /// Coerces to an address of either family.
    #[must_use]
    pub fn as_ip_address(&self) -> Option<IpAddr> {
        match self {
            Self::IpAddress(addr) => Some(*addr),
            Self::Ipv4Address(addr) => Some(IpAddr::V4(*addr)),
            Self::Ipv6Address(addr) => Some(IpAddr::V6(*addr)),
            Self::Text(text) => parse::parse_ip(text),
            _ => None,
        }
    }

    /// Coerces to an IPv4 address; IPv6 sources are always absent.
    #[must_use]
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            Self::Ipv4Address(addr) | Self::IpAddress(IpAddr::V4(addr)) => Some(*addr),
            Self::Text(text) => parse::parse_ipv4(text),
            _ => None,
        }
    }

    /// Coerces to an IPv6 address; IPv4 sources are always absent.
    #[must_use]
    pub fn as_ipv6(&self) -> Option<Ipv6Addr> {
        match self {
            Self::Ipv6Address(addr) | Self::IpAddress(IpAddr::V6(addr)) => Some(*addr),
            Self::Text(text) => parse::parse_ipv6(text),
            _ => None,
        }
    }

    /// Coerces to a byte size: non-negative integers and epoch seconds.
    #[must_use]
    pub fn as_size(&self) -> Option<ByteSize> {
        match self {
            Self::Size(size) => Some(*size),
            Self::Text(text) => ByteSize::try_parse(text),
            Self::Int8(_)
            | Self::Int16(_)
            | Self::Int32(_)
            | Self::Int64(_)
            | Self::UInt8(_)
            | Self::UInt16(_)
            | Self::UInt32(_)
            | Self::UInt64(_)
            | Self::DateTime(_)
            | Self::Date(_) => self
                .integer_view()
                .and_then(|n| u64::try_from(n).ok())
                .map(ByteSize),
            _ => None,
        }
    }

    /// Builds a new value of `kind` through the matching accessor.
    #[must_use]
    pub fn coerce(&self, kind: ValueKind) -> Option<Self> {
        self.coerce_with(kind, &ValueConfig::default())
    }

    /// Like [`Value::coerce`], with explicit temporal defaults for text sources.
    #[must_use]
    pub fn coerce_with(&self, kind: ValueKind, config: &ValueConfig) -> Option<Self> {
        match kind {
            ValueKind::Boolean => self.as_bool().map(Self::Boolean),
            ValueKind::Int8 => self.as_i8().map(Self::Int8),
            ValueKind::Int16 => self.as_i16().map(Self::Int16),
            ValueKind::Int32 => self.as_i32().map(Self::Int32),
            ValueKind::Int64 => self.as_i64().map(Self::Int64),
            ValueKind::UInt8 => self.as_u8().map(Self::UInt8),
            ValueKind::UInt16 => self.as_u16().map(Self::UInt16),
            ValueKind::UInt32 => self.as_u32().map(Self::UInt32),
            ValueKind::UInt64 => self.as_u64().map(Self::UInt64),
            ValueKind::Float32 => self.as_f32().map(Self::Float32),
            ValueKind::Float64 => self.as_f64().map(Self::Float64),
            ValueKind::Text => self.as_text().map(Self::from),
            ValueKind::Binary => self.as_binary().map(Self::from),
            ValueKind::DateTime => self.as_datetime_with(config).map(Self::DateTime),
            ValueKind::Date => self.as_date().map(Self::Date),
            ValueKind::Time => self.as_time().map(Self::Time),
            ValueKind::Duration => self.as_duration().map(Self::Duration),
            ValueKind::IpAddress => self.as_ip_address().map(Self::IpAddress),
            ValueKind::Ipv4Address => self.as_ipv4().map(Self::Ipv4Address),
            ValueKind::Ipv6Address => self.as_ipv6().map(Self::Ipv6Address),
            ValueKind::Size => self.as_size().map(Self::Size),
        }
    }
}
