//! Configuration for the temporal parsers.

use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Where the UTC offset comes from when the input text does not carry one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LocalOffset {
    /// The host's local time zone at the parsed instant.
    #[default]
    System,
    /// A fixed offset.
    Fixed(FixedOffset),
}

impl LocalOffset {
    /// Resolves the offset for a local wall-clock time.
    #[must_use]
    pub fn offset_at(&self, local: NaiveDateTime) -> FixedOffset {
        match self {
            Self::System => Local
                .offset_from_local_datetime(&local)
                .earliest()
                .unwrap_or_else(|| Local.offset_from_utc_datetime(&local)),
            Self::Fixed(offset) => *offset,
        }
    }
}

/// Which calendar date a time-only DateTime input lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReferenceDate {
    /// The host's current local date.
    #[default]
    Today,
    /// A fixed date.
    Fixed(NaiveDate),
}

impl ReferenceDate {
    /// Resolves the date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Today => Local::now().date_naive(),
            Self::Fixed(date) => *date,
        }
    }
}

/// Configuration for value parsing.
///
/// Only the DateTime grammar consults it: date-only and time-only input, and
/// input without an explicit offset, are completed from these defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ValueConfig {
    /// Offset applied to input without one.
    pub local_offset: LocalOffset,
    /// Date applied to time-only input.
    pub reference_date: ReferenceDate,
}

impl ValueConfig {
    /// Creates a configuration that uses the host clock and time zone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deterministic configuration from a fixed offset and date.
    #[must_use]
    pub fn fixed(offset: FixedOffset, date: NaiveDate) -> Self {
        Self {
            local_offset: LocalOffset::Fixed(offset),
            reference_date: ReferenceDate::Fixed(date),
        }
    }

    /// Builder method to set the local offset.
    #[must_use]
    pub fn with_local_offset(mut self, offset: FixedOffset) -> Self {
        self.local_offset = LocalOffset::Fixed(offset);
        self
    }

    /// Builder method to set the reference date.
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = ReferenceDate::Fixed(date);
        self
    }
}
