//! Grammars and canonical renderings for DateTime, Date, Time, and Duration.
//!
//! Sub-second precision is 100ns (seven fractional digits). Canonical forms:
//!
//! ```text
//! DateTime  2021-01-14 19:22:44.5 +01:30
//! Date      2021-01-14
//! Time      19:22:44.1234567
//! Duration  6.02:11:23      (days omitted when zero)
//! ```

use std::fmt::Write;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike,
};

use crate::config::ValueConfig;

const NANOS_PER_TICK: u32 = 100;
const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_DAY: u64 = 86_400;
const MAX_FRACTION_DIGITS: usize = 7;

/// Byte cursor over ASCII grammar input.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.advance();
        }
        self.pos > start
    }

    fn digit_run(&self) -> usize {
        self.text.as_bytes()[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    }

    fn take_digits(&mut self, count: usize) -> Option<u64> {
        let digits = &self.text[self.pos..self.pos + count];
        self.pos += count;
        digits.parse().ok()
    }

    /// Exactly `count` digits, whatever follows.
    fn fixed(&mut self, count: usize) -> Option<u64> {
        if self.digit_run() < count {
            return None;
        }
        self.take_digits(count)
    }

    /// A whole digit run whose length lies in `min..=max`.
    fn variable(&mut self, min: usize, max: usize) -> Option<u64> {
        let run = self.digit_run();
        if run < min || run > max {
            return None;
        }
        self.take_digits(run)
    }

    /// Up to seven fractional digits (the `.` already consumed), as nanoseconds.
    fn fraction(&mut self) -> Option<u32> {
        let run = self.digit_run();
        if run == 0 || run > MAX_FRACTION_DIGITS {
            return None;
        }
        let digits = &self.text[self.pos..self.pos + run];
        self.pos += run;
        let padded = format!("{digits:0<9}");
        padded.parse().ok()
    }

    fn word(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.advance();
        }
        &self.text[start..self.pos]
    }
}

fn small(value: u64) -> Option<u32> {
    u32::try_from(value).ok()
}

// =============================================================================
// Time
// =============================================================================

/// `H[H]:mm[:ss[.fffffff]]`
fn extended_time(cur: &mut Cursor<'_>) -> Option<NaiveTime> {
    let hour = small(cur.fixed(2)?)?;
    if !cur.eat(b':') {
        return None;
    }
    let minute = small(cur.fixed(2)?)?;
    let (second, nanos) = if cur.eat(b':') {
        let second = small(cur.fixed(2)?)?;
        let nanos = if cur.eat(b'.') { cur.fraction()? } else { 0 };
        (second, nanos)
    } else {
        (0, 0)
    };
    checked_time(hour, minute, second, nanos)
}

/// `HHmm[ss[.fffffff]]`
fn basic_time(cur: &mut Cursor<'_>) -> Option<NaiveTime> {
    let hour = small(cur.fixed(2)?)?;
    let minute = small(cur.fixed(2)?)?;
    let (second, nanos) = if cur.digit_run() >= 2 {
        let second = small(cur.fixed(2)?)?;
        let nanos = if cur.eat(b'.') { cur.fraction()? } else { 0 };
        (second, nanos)
    } else {
        (0, 0)
    };
    checked_time(hour, minute, second, nanos)
}

fn checked_time(hour: u32, minute: u32, second: u32, nanos: u32) -> Option<NaiveTime> {
    if second > 59 {
        return None;
    }
    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
}

/// Parses a time of day: `HH:mm[:ss[.fffffff]]`.
#[must_use]
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let mut cur = Cursor::new(text);
    let time = extended_time(&mut cur)?;
    cur.is_done().then_some(time)
}

fn format_fraction(out: &mut String, nanos: u32) {
    let ticks = (nanos % 1_000_000_000) / NANOS_PER_TICK;
    if ticks > 0 {
        let digits = format!("{ticks:07}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}

/// Renders a time of day canonically.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    let mut out = format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    );
    format_fraction(&mut out, time.nanosecond());
    out
}

// =============================================================================
// Date
// =============================================================================

/// `yyyy-MM-dd` (extended) or `yyyyMMdd` (basic). Returns whether basic.
fn date_parts(cur: &mut Cursor<'_>) -> Option<(NaiveDate, bool)> {
    let year = i32::try_from(cur.fixed(4)?).ok()?;
    let basic = !cur.eat(b'-');
    let month = small(cur.fixed(2)?)?;
    if !basic && !cur.eat(b'-') {
        return None;
    }
    let day = small(cur.fixed(2)?)?;
    Some((NaiveDate::from_ymd_opt(year, month, day)?, basic))
}

/// Parses a calendar date: `yyyy-MM-dd` or `yyyyMMdd`.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let mut cur = Cursor::new(text);
    let (date, _) = date_parts(&mut cur)?;
    cur.is_done().then_some(date)
}

/// Renders a calendar date canonically.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

// =============================================================================
// DateTime
// =============================================================================

/// `Z`, `+HH:MM`, `+HHMM`, or `+HH`.
fn offset(cur: &mut Cursor<'_>) -> Option<FixedOffset> {
    if cur.eat(b'Z') || cur.eat(b'z') {
        return FixedOffset::east_opt(0);
    }
    let sign = if cur.eat(b'+') {
        1
    } else if cur.eat(b'-') {
        -1
    } else {
        return None;
    };
    let hours = i32::try_from(cur.fixed(2)?).ok()?;
    let colon = cur.eat(b':');
    let minutes = if colon || cur.digit_run() > 0 {
        i32::try_from(cur.fixed(2)?).ok()?
    } else {
        0
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn localize(
    naive: NaiveDateTime,
    offset: Option<FixedOffset>,
    config: &ValueConfig,
) -> Option<DateTime<FixedOffset>> {
    let offset = offset.unwrap_or_else(|| config.local_offset.offset_at(naive));
    naive.and_local_timezone(offset).single()
}

/// Parses a date and time.
///
/// Accepts extended ISO-8601 (`2021-01-14T19:22:44+01:30`), basic ISO-8601
/// (`20210114T192244Z`), the canonical space-separated form
/// (`2021-01-14 19:22:44 +01:30`), a bare date (midnight), and a bare time
/// (on the configured reference date). Missing offsets come from `config`.
#[must_use]
pub fn parse_datetime(text: &str, config: &ValueConfig) -> Option<DateTime<FixedOffset>> {
    if let Some(time) = parse_time(text) {
        let naive = config.reference_date.date().and_time(time);
        return localize(naive, None, config);
    }

    let mut cur = Cursor::new(text);
    let (date, basic) = date_parts(&mut cur)?;
    if cur.is_done() {
        return localize(date.and_time(NaiveTime::MIN), None, config);
    }

    match cur.peek()? {
        b'T' | b't' | b' ' => cur.advance(),
        _ => return None,
    }

    let mut attempt = cur;
    let time = if basic {
        basic_time(&mut attempt).or_else(|| {
            attempt = cur;
            extended_time(&mut attempt)
        })?
    } else {
        extended_time(&mut attempt)?
    };
    cur = attempt;

    let spaced = cur.eat(b' ');
    let zone = if cur.is_done() {
        if spaced {
            return None;
        }
        None
    } else {
        Some(offset(&mut cur)?)
    };
    if !cur.is_done() {
        return None;
    }
    localize(date.and_time(time), zone, config)
}

fn format_offset(out: &mut String, offset: FixedOffset) {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let _ = write!(out, "{sign}{:02}:{:02}", minutes / 60, minutes % 60);
}

/// Renders a date and time canonically: `yyyy-MM-dd HH:mm:ss[.f] +HH:MM`.
#[must_use]
pub fn format_datetime(value: &DateTime<FixedOffset>) -> String {
    let local = value.naive_local();
    let mut out = format!(
        "{} {} ",
        format_date(local.date()),
        format_time(local.time())
    );
    format_offset(&mut out, *value.offset());
    out
}

// =============================================================================
// Duration
// =============================================================================

fn build_duration(negative: bool, nanos: i128) -> Option<TimeDelta> {
    let nanos = nanos - nanos % i128::from(NANOS_PER_TICK);
    let seconds = i64::try_from(nanos / NANOS_PER_SECOND).ok()?;
    let subsec = u32::try_from(nanos % NANOS_PER_SECOND).ok()?;
    let delta = TimeDelta::new(seconds, subsec)?;
    Some(if negative { -delta } else { delta })
}

/// `[-][d.]H[H]:mm:ss[.fffffff]`
fn colon_duration(text: &str) -> Option<TimeDelta> {
    let mut cur = Cursor::new(text);
    let negative = cur.eat(b'-');
    let lead = cur.variable(1, 10)?;
    let (days, hours) = if cur.eat(b'.') {
        (lead, cur.variable(1, 2)?)
    } else {
        (0, lead)
    };
    if hours > 23 || !cur.eat(b':') {
        return None;
    }
    let minutes = cur.fixed(2)?;
    if minutes > 59 || !cur.eat(b':') {
        return None;
    }
    let seconds = cur.fixed(2)?;
    if seconds > 59 {
        return None;
    }
    let nanos = if cur.eat(b'.') { cur.fraction()? } else { 0 };
    if !cur.is_done() {
        return None;
    }

    let whole = days * SECONDS_PER_DAY + hours * 3600 + minutes * 60 + seconds;
    build_duration(
        negative,
        i128::from(whole) * NANOS_PER_SECOND + i128::from(nanos),
    )
}

/// `[-]` then any subset of `Nd Nh Nm Ns Nms Nus Nns`, each at most once.
fn unit_duration(text: &str) -> Option<TimeDelta> {
    const UNITS: [(&str, i128); 7] = [
        ("d", 86_400 * NANOS_PER_SECOND),
        ("h", 3_600 * NANOS_PER_SECOND),
        ("m", 60 * NANOS_PER_SECOND),
        ("s", NANOS_PER_SECOND),
        ("ms", 1_000_000),
        ("us", 1_000),
        ("ns", 1),
    ];

    let mut cur = Cursor::new(text);
    let negative = cur.eat(b'-');
    let mut seen = [false; UNITS.len()];
    let mut total: i128 = 0;

    loop {
        let whole = cur.variable(1, 19)?;
        let fraction = if cur.eat(b'.') {
            Some(cur.fraction()?)
        } else {
            None
        };
        cur.skip_whitespace();
        let unit = cur.word().to_ascii_lowercase();
        let index = UNITS.iter().position(|(name, _)| *name == unit)?;
        if seen[index] || (fraction.is_some() && unit != "s") {
            return None;
        }
        seen[index] = true;

        total = total.checked_add(i128::from(whole) * UNITS[index].1)?;
        total += i128::from(fraction.unwrap_or(0));

        let spaced = cur.skip_whitespace();
        if cur.is_done() {
            if spaced {
                return None;
            }
            break;
        }
    }

    build_duration(negative, total)
}

/// Parses a duration in colon form (`6.02:11:23.5`) or unit form
/// (`6d 2h 11m 23.5s`).
#[must_use]
pub fn parse_duration(text: &str) -> Option<TimeDelta> {
    if text.contains(':') {
        colon_duration(text)
    } else {
        unit_duration(text)
    }
}

/// Renders a duration canonically in colon form.
#[must_use]
pub fn format_duration(value: TimeDelta) -> String {
    let mut out = String::new();
    if value < TimeDelta::zero() {
        out.push('-');
    }
    let seconds = value.num_seconds().unsigned_abs();
    let nanos = value.subsec_nanos().unsigned_abs();

    let days = seconds / SECONDS_PER_DAY;
    if days > 0 {
        let _ = write!(out, "{days}.");
    }
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        seconds / 3600 % 24,
        seconds / 60 % 60,
        seconds % 60
    );
    format_fraction(&mut out, nanos);
    out
}
