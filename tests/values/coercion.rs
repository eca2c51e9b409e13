//! Integration tests for the coercion matrix

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use chrono::{NaiveDate, TimeDelta};
use msgseq_value::{ByteSize, Value, ValueKind};

// =============================================================================
// Boolean Source
// =============================================================================

#[test]
fn boolean_to_numbers_and_text() {
    let t = Value::from(true);
    assert_eq!(t.as_i8(), Some(1));
    assert_eq!(t.as_u64(), Some(1));
    assert_eq!(t.as_f64(), Some(1.0));
    assert_eq!(Value::from(false).as_i32(), Some(0));
    assert_eq!(t.as_text().as_deref(), Some("True"));
    assert_eq!(t.as_binary(), None);
    assert_eq!(t.as_size(), None);
    assert_eq!(t.as_datetime(), None);
    assert_eq!(t.as_ip_address(), None);
}

// =============================================================================
// Integer Sources
// =============================================================================

#[test]
fn narrowing_is_range_checked() {
    let v = Value::from(300i32);
    assert_eq!(v.as_i8(), None);
    assert_eq!(v.as_u8(), None);
    assert_eq!(v.as_i16(), Some(300));
    assert_eq!(Value::from(-1i64).as_u64(), None);
    assert_eq!(Value::from(u64::MAX).as_i64(), None);
}

#[test]
fn integer_to_other_kinds() {
    let v = Value::from(-2i16);
    assert_eq!(v.as_bool(), Some(true));
    assert_eq!(Value::from(0u8).as_bool(), Some(false));
    assert_eq!(v.as_f32(), Some(-2.0));
    assert_eq!(v.as_text().as_deref(), Some("-2"));
    assert_eq!(v.as_binary(), Some(vec![0xFF, 0xFE]));
    assert_eq!(Value::from(258u32).as_binary(), Some(vec![0, 0, 1, 2]));
    assert_eq!(v.as_size(), None);
    assert_eq!(Value::from(5i8).as_size(), Some(ByteSize(5)));
}

#[test]
fn only_wide_integers_are_epoch_seconds() {
    let epoch = Value::from(86_400i64);
    assert_eq!(epoch.as_date(), NaiveDate::from_ymd_opt(1970, 1, 2));
    assert_eq!(
        epoch.as_datetime().map(|dt| dt.to_rfc3339()).as_deref(),
        Some("1970-01-02T00:00:00+00:00")
    );
    assert!(Value::from(86_400u64).as_datetime().is_some());
    assert_eq!(Value::from(86_400i32).as_datetime(), None);
    assert_eq!(Value::from(1u16).as_date(), None);
}

// =============================================================================
// Float Sources
// =============================================================================

#[test]
fn floats_truncate_then_range_check() {
    assert_eq!(Value::from(3.9f64).as_i32(), Some(3));
    assert_eq!(Value::from(-3.9f64).as_i32(), Some(-3));
    assert_eq!(Value::from(300.0f64).as_u8(), None);
    assert_eq!(Value::from(-1.0f32).as_u32(), None);
    assert_eq!(Value::from(f64::NAN).as_i64(), None);
    assert_eq!(Value::from(f64::INFINITY).as_u64(), None);
}

#[test]
fn narrowing_to_f32_rejects_overflow() {
    assert_eq!(Value::from(1e300f64).as_f32(), None);
    assert_eq!(Value::from(-1e300f64).as_f32(), None);
    assert_eq!(Value::from(u64::MAX).as_f32(), Some(2f32.powi(64)));
    assert_eq!(Value::from(f64::INFINITY).as_f32(), Some(f32::INFINITY));
    assert!(Value::from(f64::NAN).as_f32().is_some_and(f32::is_nan));
    assert_eq!(Value::from(1e300f64).coerce(ValueKind::Float32), None);
}

#[test]
fn float_to_other_kinds() {
    let v = Value::from(1.5f64);
    assert_eq!(v.as_text().as_deref(), Some("1.5"));
    assert_eq!(v.as_binary(), Some(vec![0x3F, 0xF8, 0, 0, 0, 0, 0, 0]));
    assert_eq!(Value::from(1.0f32).as_binary(), Some(vec![0x3F, 0x80, 0, 0]));
    assert_eq!(v.as_size(), None);
    assert_eq!(v.as_duration(), None);
    assert_eq!(v.as_time(), None);
    assert!(v.as_datetime().is_some());
    assert_eq!(Value::from(1.5f32).as_datetime(), None);
}

// =============================================================================
// Text Source
// =============================================================================

#[test]
fn text_reparses_for_every_kind() {
    let v = Value::from("130");
    assert_eq!(v.as_u8(), Some(130));
    assert_eq!(v.as_i8(), None);
    assert_eq!(v.as_f64(), Some(130.0));
    assert_eq!(v.as_size(), Some(ByteSize(130)));
    assert_eq!(v.as_bool(), None);
    assert_eq!(Value::from("yes").as_bool(), Some(true));
    let six_days_two_hours = 6 * 86_400 + 2 * 3_600 + 11 * 60 + 23;
    assert_eq!(six_days_two_hours, 526_283);
    assert_eq!(
        Value::from("6.02:11:23").as_duration().map(|d| d.num_seconds()),
        Some(six_days_two_hours)
    );
    assert_eq!(
        Value::from("6d 2h 11m 23s").as_duration().map(|d| d.num_seconds()),
        Some(six_days_two_hours)
    );
    assert_eq!(Value::from("10.1.2.3").as_ipv4(), Some(Ipv4Addr::new(10, 1, 2, 3)));
    assert_eq!(Value::from("10.1.2.3").as_ipv6(), None);
    assert_eq!(Value::from("0x0102").as_binary(), Some(vec![1, 2]));
}

#[test]
fn coerce_builds_new_values() {
    let v = Value::from("42Ki");
    assert_eq!(v.coerce(ValueKind::Size), Some(Value::from_size(43_008)));
    assert_eq!(v.coerce(ValueKind::Int32), None);
    assert_eq!(
        Value::from(7u8).coerce(ValueKind::Text),
        Some(Value::from("7"))
    );
    for kind in ValueKind::ALL {
        let coerced = Value::from("1").coerce(kind);
        if let Some(value) = coerced {
            assert_eq!(value.kind(), kind);
        }
    }
}

// =============================================================================
// Binary Source
// =============================================================================

#[test]
fn binary_extension_rules() {
    let v = Value::from(vec![0x00, 0x82]);
    assert_eq!(v.as_i8(), None);
    assert_eq!(v.as_i16(), Some(130));
    assert_eq!(v.as_u8(), Some(130));
    assert_eq!(v.as_u16(), Some(130));

    let negative = Value::from(vec![0xFF, 0xFF, 0x80]);
    assert_eq!(negative.as_i8(), Some(-128));
    assert_eq!(negative.as_u8(), None);
    assert_eq!(negative.as_u32(), Some(0x00FF_FF80));
}

#[test]
fn binary_to_text_and_floats() {
    assert_eq!(Value::from(b"hi".as_slice()).as_text().as_deref(), Some("hi"));
    assert_eq!(Value::from(vec![0xFF, 0xFE]).as_text(), None);
    assert_eq!(Value::from(vec![0x3F, 0x80, 0, 0]).as_f32(), Some(1.0));
    assert_eq!(Value::from(vec![0x3F, 0x80, 0]).as_f32(), None);
    assert_eq!(Value::from(vec![0x0A, 0, 0, 1]).as_ipv4(), None);
    assert_eq!(Value::from(Vec::<u8>::new()).as_i8(), None);
}

// =============================================================================
// Temporal Sources
// =============================================================================

#[test]
fn datetime_views() {
    let dt = Value::parse(ValueKind::DateTime, "1970-01-02T01:00:00.5+01:00").unwrap();
    assert_eq!(dt.as_i64(), Some(86_400));
    assert_eq!(dt.as_f64(), Some(86_400.5));
    assert_eq!(dt.as_i8(), None);
    assert_eq!(dt.as_date(), NaiveDate::from_ymd_opt(1970, 1, 2));
    assert_eq!(dt.as_time().map(|t| t.to_string()).as_deref(), Some("01:00:00.500"));
    assert_eq!(dt.as_size(), Some(ByteSize(86_400)));
    assert_eq!(dt.as_text().as_deref(), Some("1970-01-02 01:00:00.5 +01:00"));
}

#[test]
fn date_has_no_time() {
    let d = Value::from(NaiveDate::from_ymd_opt(1970, 1, 3).unwrap());
    assert_eq!(d.as_time(), None);
    assert_eq!(d.as_i64(), Some(2 * 86_400));
    assert_eq!(
        d.as_datetime().map(|dt| dt.to_rfc3339()).as_deref(),
        Some("1970-01-03T00:00:00+00:00")
    );
}

#[test]
fn duration_views_respect_width() {
    let d = Value::from(TimeDelta::seconds(1_000));
    assert_eq!(d.as_i16(), Some(1_000));
    assert_eq!(d.as_i8(), None);
    assert_eq!(d.as_u8(), None);
    assert_eq!(Value::from(TimeDelta::milliseconds(2_500)).as_f64(), Some(2.5));
    assert_eq!(d.as_text().as_deref(), Some("00:16:40"));
    assert_eq!(d.as_datetime(), None);
    assert_eq!(d.as_size(), None);
}

// =============================================================================
// Address Sources
// =============================================================================

#[test]
fn address_families() {
    let v4 = Value::from(Ipv4Addr::new(192, 168, 0, 1));
    assert_eq!(v4.as_ipv4(), Some(Ipv4Addr::new(192, 168, 0, 1)));
    assert_eq!(v4.as_ipv6(), None);
    assert_eq!(v4.as_ip_address(), Some(IpAddr::V4(Ipv4Addr::new(192, 168, 0, 1))));
    assert_eq!(v4.as_binary(), Some(vec![192, 168, 0, 1]));
    assert_eq!(v4.as_u32(), None);

    let v6 = Value::from(IpAddr::V6(Ipv6Addr::LOCALHOST));
    assert_eq!(v6.as_ipv6(), Some(Ipv6Addr::LOCALHOST));
    assert_eq!(v6.as_ipv4(), None);
    assert_eq!(v6.as_binary().map(|b| b.len()), Some(16));
    assert_eq!(v6.as_text().as_deref(), Some("::1"));
}

// =============================================================================
// Size Source
// =============================================================================

#[test]
fn size_behaves_like_u64() {
    let v = Value::from_size(43_008);
    assert_eq!(v.as_u16(), Some(43_008));
    assert_eq!(v.as_i16(), None);
    assert_eq!(v.as_text().as_deref(), Some("43008"));
    assert_eq!(v.as_binary(), Some(vec![0, 0, 0, 0, 0, 0, 0xA8, 0x00]));
    assert_eq!(v.as_bool(), Some(true));
}
