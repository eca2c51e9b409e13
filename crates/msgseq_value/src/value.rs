//! Core value type for all msgseq field data.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use msgseq_foundation::{Error, Result};

use crate::config::ValueConfig;
use crate::kind::ValueKind;
use crate::parse;
use crate::size::ByteSize;
use crate::temporal;

/// A typed scalar.
///
/// Values are immutable and cheaply cloneable; text and byte payloads are
/// shared. A value never changes variant: coercion builds a new one.
#[derive(Clone)]
pub enum Value {
    /// True or false.
    Boolean(bool),
    /// Signed 8-bit integer.
    Int8(i8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 8-bit integer.
    UInt8(u8),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// IEEE single precision.
    Float32(f32),
    /// IEEE double precision.
    Float64(f64),
    /// Character data.
    Text(Arc<str>),
    /// Raw bytes, big-endian when read as an integer.
    Binary(Arc<[u8]>),
    /// Date, time of day, and UTC offset.
    DateTime(DateTime<FixedOffset>),
    /// Calendar date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Signed elapsed time.
    Duration(TimeDelta),
    /// Address of either family.
    IpAddress(IpAddr),
    /// IPv4 address.
    Ipv4Address(Ipv4Addr),
    /// IPv6 address.
    Ipv6Address(Ipv6Addr),
    /// Byte count.
    Size(ByteSize),
}

impl Value {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Int8(_) => ValueKind::Int8,
            Self::Int16(_) => ValueKind::Int16,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::UInt8(_) => ValueKind::UInt8,
            Self::UInt16(_) => ValueKind::UInt16,
            Self::UInt32(_) => ValueKind::UInt32,
            Self::UInt64(_) => ValueKind::UInt64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Text(_) => ValueKind::Text,
            Self::Binary(_) => ValueKind::Binary,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::Duration(_) => ValueKind::Duration,
            Self::IpAddress(_) => ValueKind::IpAddress,
            Self::Ipv4Address(_) => ValueKind::Ipv4Address,
            Self::Ipv6Address(_) => ValueKind::Ipv6Address,
            Self::Size(_) => ValueKind::Size,
        }
    }

    // -------------------------------------------------------------------------
    // Parsing
    // -------------------------------------------------------------------------

    /// Parses `text` as `kind`, returning `None` if it does not match the
    /// kind's grammar.
    #[must_use]
    pub fn try_parse(kind: ValueKind, text: &str) -> Option<Self> {
        Self::try_parse_with(kind, text, &ValueConfig::default())
    }

    /// Like [`Value::try_parse`], with explicit temporal defaults.
    #[must_use]
    pub fn try_parse_with(kind: ValueKind, text: &str, config: &ValueConfig) -> Option<Self> {
        match kind {
            ValueKind::Boolean => parse::parse_bool(text).map(Self::Boolean),
            ValueKind::Int8 => parse::parse_integer(text).map(Self::Int8),
            ValueKind::Int16 => parse::parse_integer(text).map(Self::Int16),
            ValueKind::Int32 => parse::parse_integer(text).map(Self::Int32),
            ValueKind::Int64 => parse::parse_integer(text).map(Self::Int64),
            ValueKind::UInt8 => parse::parse_integer(text).map(Self::UInt8),
            ValueKind::UInt16 => parse::parse_integer(text).map(Self::UInt16),
            ValueKind::UInt32 => parse::parse_integer(text).map(Self::UInt32),
            ValueKind::UInt64 => parse::parse_integer(text).map(Self::UInt64),
            ValueKind::Float32 => parse::parse_f32(text).map(Self::Float32),
            ValueKind::Float64 => parse::parse_f64(text).map(Self::Float64),
            ValueKind::Text => Some(Self::Text(text.into())),
            ValueKind::Binary => parse::parse_binary(text).map(Self::from),
            ValueKind::DateTime => temporal::parse_datetime(text, config).map(Self::DateTime),
            ValueKind::Date => temporal::parse_date(text).map(Self::Date),
            ValueKind::Time => temporal::parse_time(text).map(Self::Time),
            ValueKind::Duration => temporal::parse_duration(text).map(Self::Duration),
            ValueKind::IpAddress => parse::parse_ip(text).map(Self::IpAddress),
            ValueKind::Ipv4Address => parse::parse_ipv4(text).map(Self::Ipv4Address),
            ValueKind::Ipv6Address => parse::parse_ipv6(text).map(Self::Ipv6Address),
            ValueKind::Size => ByteSize::try_parse(text).map(Self::Size),
        }
    }

    /// Parses `text` as `kind`.
    ///
    /// # Errors
    ///
    /// Returns a format error if `text` does not match the kind's grammar.
    pub fn parse(kind: ValueKind, text: &str) -> Result<Self> {
        Self::parse_with(kind, text, &ValueConfig::default())
    }

    /// Like [`Value::parse`], with explicit temporal defaults.
    ///
    /// # Errors
    ///
    /// Returns a format error if `text` does not match the kind's grammar.
    pub fn parse_with(kind: ValueKind, text: &str, config: &ValueConfig) -> Result<Self> {
        Self::try_parse_with(kind, text, config).ok_or_else(|| {
            tracing::trace!(%kind, input = text, "value parse failed");
            Error::format(kind.name(), text)
        })
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Renders the canonical text form, which parses back to an equal value.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Boolean(true) => "True".to_string(),
            Self::Boolean(false) => "False".to_string(),
            Self::Int8(n) => n.to_string(),
            Self::Int16(n) => n.to_string(),
            Self::Int32(n) => n.to_string(),
            Self::Int64(n) => n.to_string(),
            Self::UInt8(n) => n.to_string(),
            Self::UInt16(n) => n.to_string(),
            Self::UInt32(n) => n.to_string(),
            Self::UInt64(n) => n.to_string(),
            Self::Float32(x) => parse::format_float(*x, f64::from(*x)),
            Self::Float64(x) => parse::format_float(*x, *x),
            Self::Text(s) => s.to_string(),
            Self::Binary(bytes) => parse::format_binary(bytes),
            Self::DateTime(dt) => temporal::format_datetime(dt),
            Self::Date(date) => temporal::format_date(*date),
            Self::Time(time) => temporal::format_time(*time),
            Self::Duration(delta) => temporal::format_duration(*delta),
            Self::IpAddress(addr) => addr.to_string(),
            Self::Ipv4Address(addr) => addr.to_string(),
            Self::Ipv6Address(addr) => addr.to_string(),
            Self::Size(size) => size.to_string(),
        }
    }

    /// Borrows the payload of a Text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the payload of a Binary value.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Constructors
    // -------------------------------------------------------------------------

    /// Creates a Boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Creates an Int8 value.
    #[must_use]
    pub const fn from_i8(value: i8) -> Self {
        Self::Int8(value)
    }

    /// Creates an Int16 value.
    #[must_use]
    pub const fn from_i16(value: i16) -> Self {
        Self::Int16(value)
    }

    /// Creates an Int32 value.
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        Self::Int32(value)
    }

    /// Creates an Int64 value.
    #[must_use]
    pub const fn from_i64(value: i64) -> Self {
        Self::Int64(value)
    }

    /// Creates a UInt8 value.
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        Self::UInt8(value)
    }

    /// Creates a UInt16 value.
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        Self::UInt16(value)
    }

    /// Creates a UInt32 value.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self::UInt32(value)
    }

    /// Creates a UInt64 value.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self::UInt64(value)
    }

    /// Creates a Float32 value.
    #[must_use]
    pub const fn from_f32(value: f32) -> Self {
        Self::Float32(value)
    }

    /// Creates a Float64 value.
    #[must_use]
    pub const fn from_f64(value: f64) -> Self {
        Self::Float64(value)
    }

    /// Creates a Text value.
    #[must_use]
    pub fn from_text(value: impl Into<Arc<str>>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a Binary value.
    #[must_use]
    pub fn from_bytes(value: impl Into<Arc<[u8]>>) -> Self {
        Self::Binary(value.into())
    }

    /// Creates a DateTime value.
    #[must_use]
    pub const fn from_datetime(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }

    /// Creates a Date value.
    #[must_use]
    pub const fn from_date(value: NaiveDate) -> Self {
        Self::Date(value)
    }

    /// Creates a Time value.
    #[must_use]
    pub const fn from_time(value: NaiveTime) -> Self {
        Self::Time(value)
    }

    /// Creates a Duration value.
    #[must_use]
    pub const fn from_duration(value: TimeDelta) -> Self {
        Self::Duration(value)
    }

    /// Creates an IPAddress value.
    #[must_use]
    pub const fn from_ip(value: IpAddr) -> Self {
        Self::IpAddress(value)
    }

    /// Creates an IPv4Address value.
    #[must_use]
    pub const fn from_ipv4(value: Ipv4Addr) -> Self {
        Self::Ipv4Address(value)
    }

    /// Creates an IPv6Address value.
    #[must_use]
    pub const fn from_ipv6(value: Ipv6Addr) -> Self {
        Self::Ipv6Address(value)
    }

    /// Creates a Size value from a byte count.
    #[must_use]
    pub const fn from_size(bytes: u64) -> Self {
        Self::Size(ByteSize(bytes))
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::UInt8(a), Self::UInt8(b)) => a == b,
            (Self::UInt16(a), Self::UInt16(b)) => a == b,
            (Self::UInt32(a), Self::UInt32(b)) => a == b,
            (Self::UInt64(a), Self::UInt64(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a == b,
            // Same instant and same offset
            (Self::DateTime(a), Self::DateTime(b)) => a == b && a.offset() == b.offset(),
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::IpAddress(a), Self::IpAddress(b)) => a == b,
            (Self::Ipv4Address(a), Self::Ipv4Address(b)) => a == b,
            (Self::Ipv6Address(a), Self::Ipv6Address(b)) => a == b,
            (Self::Size(a), Self::Size(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Boolean(b) => b.hash(state),
            Self::Int8(n) => n.hash(state),
            Self::Int16(n) => n.hash(state),
            Self::Int32(n) => n.hash(state),
            Self::Int64(n) => n.hash(state),
            Self::UInt8(n) => n.hash(state),
            Self::UInt16(n) => n.hash(state),
            Self::UInt32(n) => n.hash(state),
            Self::UInt64(n) => n.hash(state),
            Self::Float32(x) => x.to_bits().hash(state),
            Self::Float64(x) => x.to_bits().hash(state),
            Self::Text(s) => s.hash(state),
            Self::Binary(bytes) => bytes.hash(state),
            Self::DateTime(dt) => {
                dt.hash(state);
                dt.offset().local_minus_utc().hash(state);
            }
            Self::Date(date) => date.hash(state),
            Self::Time(time) => time.hash(state),
            Self::Duration(delta) => delta.hash(state),
            Self::IpAddress(addr) => addr.hash(state),
            Self::Ipv4Address(addr) => addr.hash(state),
            Self::Ipv6Address(addr) => addr.hash(state),
            Self::Size(size) => size.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "Text({s:?})"),
            other => write!(f, "{}({})", other.kind(), other.to_text()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            other => f.write_str(&other.to_text()),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i8> for Value {
    fn from(n: i8) -> Self {
        Self::Int8(n)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Self::Int16(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int64(n)
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Self::UInt8(n)
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Self::UInt16(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::UInt32(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::UInt64(n)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float32(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float64(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::Text(s)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Binary(bytes.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes.into())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveTime> for Value {
    fn from(time: NaiveTime) -> Self {
        Self::Time(time)
    }
}

impl From<TimeDelta> for Value {
    fn from(delta: TimeDelta) -> Self {
        Self::Duration(delta)
    }
}

impl From<IpAddr> for Value {
    fn from(addr: IpAddr) -> Self {
        Self::IpAddress(addr)
    }
}

impl From<Ipv4Addr> for Value {
    fn from(addr: Ipv4Addr) -> Self {
        Self::Ipv4Address(addr)
    }
}

impl From<Ipv6Addr> for Value {
    fn from(addr: Ipv6Addr) -> Self {
        Self::Ipv6Address(addr)
    }
}

impl From<ByteSize> for Value {
    fn from(size: ByteSize) -> Self {
        Self::Size(size)
    }
}
