//! Integration tests for byte sizes

use msgseq_value::{ByteSize, Value, ValueKind};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn suffix_families() {
    assert_eq!(ByteSize::parse("42K").unwrap(), ByteSize(42_000));
    assert_eq!(ByteSize::parse("42Ki").unwrap(), ByteSize(43_008));
    assert_eq!(ByteSize::parse(" 3 gi ").unwrap(), ByteSize(3 << 30));
    assert_eq!(ByteSize::parse("1T").unwrap(), ByteSize(1_000_000_000_000));
}

#[test]
fn fractions_round_to_nearest() {
    assert_eq!(ByteSize::parse("0.0001 k").unwrap(), ByteSize(1));
    assert_eq!(ByteSize::parse("1.0005K").unwrap(), ByteSize(1_001));
    assert_eq!(ByteSize::parse("1.0004K").unwrap(), ByteSize(1_000));
}

#[test]
fn out_of_range_fails() {
    assert!(ByteSize::parse("18446744073709551616").unwrap_err().is_format());
    assert!(ByteSize::try_parse("-1").is_none());
    assert!(ByteSize::try_parse("16384Pi").is_none());
    assert!(ByteSize::try_parse("1Q").is_none());
    assert!(Value::try_parse(ValueKind::Size, "").is_none());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn scaled_renderers() {
    let size = ByteSize(1_234_567);
    assert_eq!(size.to_scaled_si_string(3), "1.23M");
    assert_eq!(size.to_scaled_si_string(1), "1M");
    assert_eq!(size.scaled_si(), "1.23M");
    assert_eq!(size.scaled_binary(), "1.18Mi");
    assert_eq!(ByteSize(12_345_678_901_234_567_890).scaled_si(), "12300P");
    assert_eq!(ByteSize(999).scaled_si(), "999");
}

#[test]
fn fixed_renderers() {
    let size = ByteSize(1_572_864);
    assert_eq!(size.to_mebi_string(None).unwrap(), "1.5Mi");
    assert_eq!(size.to_kibi_string(Some("0")).unwrap(), "1536Ki");
    assert_eq!(size.to_mega_string(Some("0.00")).unwrap(), "1.57M");
    assert_eq!(ByteSize(2_000).to_kilo_string(None).unwrap(), "2K");
    assert!(size.to_giga_string(Some("?")).is_err());
}

#[test]
fn display_is_plain_count() {
    assert_eq!(ByteSize(43_008).to_string(), "43008");
    assert_eq!(Value::parse(ValueKind::Size, "42Ki").unwrap().to_text(), "43008");
}
