//! Integration tests for scaled and fixed-magnitude formatting

use msgseq_foundation::scale::{DEFAULT_PRECISION, format_fixed, format_scaled};
use msgseq_foundation::{DecimalPattern, Ladder, Magnitude};

// =============================================================================
// Scaled Formatting
// =============================================================================

#[test]
fn significant_digits() {
    assert_eq!(format_scaled(1_234_567, 3, Ladder::Si), "1.23M");
    assert_eq!(format_scaled(1_234_567, 1, Ladder::Si), "1M");
    assert_eq!(format_scaled(1_234_567, 5, Ladder::Si), "1.2346M");
}

#[test]
fn magnitude_caps_at_peta() {
    assert_eq!(
        format_scaled(12_345_678_901_234_567_890, DEFAULT_PRECISION, Ladder::Si),
        "12300P"
    );
}

#[test]
fn base_unit_below_first_step() {
    assert_eq!(format_scaled(42, 3, Ladder::Si), "42");
    assert_eq!(format_scaled(1023, 3, Ladder::Binary), "1023");
    assert_eq!(format_scaled(1024, 3, Ladder::Binary), "1.00Ki");
}

#[test]
fn rounding_carry_moves_up_a_step() {
    assert_eq!(format_scaled(999_999, 3, Ladder::Si), "1.00M");
    assert_eq!(format_scaled(999, 1, Ladder::Si), "1K");
    assert_eq!(format_scaled(1_048_575, 4, Ladder::Binary), "1.000Mi");
    assert_eq!(format_scaled(999, 3, Ladder::Si), "999");
}

#[test]
fn integer_part_consumes_precision() {
    assert_eq!(format_scaled(123_456, 3, Ladder::Si), "123K");
    assert_eq!(format_scaled(123_456, 2, Ladder::Si), "120K");
}

// =============================================================================
// Fixed Magnitudes
// =============================================================================

#[test]
fn fixed_without_pattern() {
    assert_eq!(format_fixed(1_500, Magnitude::KILO, None).unwrap(), "1.5K");
    assert_eq!(format_fixed(2 << 20, Magnitude::MEBI, None).unwrap(), "2Mi");
}

#[test]
fn fixed_with_pattern() {
    assert_eq!(format_fixed(1_500, Magnitude::KILO, Some("0.00")).unwrap(), "1.50K");
    assert_eq!(format_fixed(1_500, Magnitude::KILO, Some("0.0#")).unwrap(), "1.5K");
    assert!(format_fixed(1_500, Magnitude::KILO, Some("bogus")).is_err());
}

#[test]
fn pattern_grammar() {
    assert!(DecimalPattern::parse("0").is_ok());
    assert!(DecimalPattern::parse("#0.00#").is_ok());
    assert!(DecimalPattern::parse("0.#0").is_err());
    assert!(DecimalPattern::parse("").is_err());
}

#[test]
fn suffix_lookup() {
    assert_eq!(Magnitude::from_suffix("m"), Some(Magnitude::MEGA));
    assert_eq!(Magnitude::from_suffix("mi"), Some(Magnitude::MEBI));
    assert_eq!(Magnitude::PETA.factor(), 1_000_000_000_000_000);
    assert_eq!(Magnitude::from_suffix("e"), None);
}
