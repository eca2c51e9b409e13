//! Variant tags for [`crate::Value`].

use std::fmt;
use std::str::FromStr;

use msgseq_foundation::{Error, Result, Width};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names one variant of the closed value union.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueKind {
    /// True or false.
    Boolean,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Unsigned 64-bit integer.
    UInt64,
    /// IEEE single precision.
    Float32,
    /// IEEE double precision.
    Float64,
    /// Character data.
    Text,
    /// Raw bytes.
    Binary,
    /// Date, time of day, and UTC offset.
    DateTime,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Signed elapsed time.
    Duration,
    /// Address of either family.
    #[cfg_attr(feature = "serde", serde(rename = "IPAddress"))]
    IpAddress,
    /// IPv4 address.
    #[cfg_attr(feature = "serde", serde(rename = "IPv4Address"))]
    Ipv4Address,
    /// IPv6 address.
    #[cfg_attr(feature = "serde", serde(rename = "IPv6Address"))]
    Ipv6Address,
    /// Byte count.
    Size,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Boolean,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Float32,
        Self::Float64,
        Self::Text,
        Self::Binary,
        Self::DateTime,
        Self::Date,
        Self::Time,
        Self::Duration,
        Self::IpAddress,
        Self::Ipv4Address,
        Self::Ipv6Address,
        Self::Size,
    ];

    /// Returns the canonical kind name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Text => "Text",
            Self::Binary => "Binary",
            Self::DateTime => "DateTime",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Duration => "Duration",
            Self::IpAddress => "IPAddress",
            Self::Ipv4Address => "IPv4Address",
            Self::Ipv6Address => "IPv6Address",
            Self::Size => "Size",
        }
    }

    /// Returns true for the eight fixed-width integer kinds.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.width().is_some()
    }

    /// Returns true for the signed integer kinds.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns true for the two float kinds.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Returns true for DateTime, Date, Time, and Duration.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::DateTime | Self::Date | Self::Time | Self::Duration)
    }

    /// Returns true for the three address kinds.
    #[must_use]
    pub const fn is_ip(self) -> bool {
        matches!(self, Self::IpAddress | Self::Ipv4Address | Self::Ipv6Address)
    }

    /// Returns the storage width of an integer kind.
    #[must_use]
    pub const fn width(self) -> Option<Width> {
        match self {
            Self::Int8 | Self::UInt8 => Some(Width::W8),
            Self::Int16 | Self::UInt16 => Some(Width::W16),
            Self::Int32 | Self::UInt32 => Some(Width::W32),
            Self::Int64 | Self::UInt64 => Some(Width::W64),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::format("ValueKind", s))
    }
}
