//! Integration tests for the binary codec

use msgseq_foundation::Width;
use msgseq_foundation::codec::{
    decode_f32, decode_f64, decode_signed, decode_unsigned, encode_f32, encode_f64,
    encode_signed, encode_unsigned,
};

// =============================================================================
// Extension Rules
// =============================================================================

#[test]
fn zero_extended_two_bytes() {
    let bytes = [0x00, 0x82];
    assert_eq!(decode_signed(&bytes, Width::W8), None);
    assert_eq!(decode_signed(&bytes, Width::W16), Some(130));
    assert_eq!(decode_unsigned(&bytes, Width::W8), Some(130));
}

#[test]
fn sign_extended_bytes() {
    let bytes = [0xFF, 0xFF, 0xFF, 0xFE];
    assert_eq!(decode_signed(&bytes, Width::W8), Some(-2));
    assert_eq!(decode_signed(&bytes, Width::W64), Some(-2));
    assert_eq!(decode_unsigned(&bytes, Width::W8), None);
    assert_eq!(decode_unsigned(&bytes, Width::W32), Some(0xFFFF_FFFE));
}

#[test]
fn wide_input_must_fit() {
    let bytes = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert_eq!(decode_unsigned(&bytes, Width::W64), None);
    assert_eq!(decode_signed(&bytes, Width::W64), None);
}

#[test]
fn width_bounds() {
    assert_eq!(Width::W16.bytes(), 2);
    assert_eq!(Width::W32.bits(), 32);
    assert_eq!(Width::W8.signed_min(), -128);
    assert_eq!(Width::W8.signed_max(), 127);
    assert_eq!(Width::W64.unsigned_max(), u64::MAX);
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn encode_is_big_endian_fixed_width() {
    assert_eq!(encode_signed(-1, Width::W32), [0xFF; 4]);
    assert_eq!(encode_unsigned(0x0102, Width::W16), [0x01, 0x02]);
    assert_eq!(encode_unsigned(1, Width::W64).len(), 8);
}

#[test]
fn encode_then_decode_at_each_width() {
    for width in [Width::W8, Width::W16, Width::W32, Width::W64] {
        let min = width.signed_min();
        assert_eq!(decode_signed(&encode_signed(min, width), width), Some(min));
        let max = width.unsigned_max();
        assert_eq!(decode_unsigned(&encode_unsigned(max, width), width), Some(max));
    }
}

#[test]
fn float_bit_patterns() {
    assert_eq!(encode_f64(1.0), [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(decode_f32(&encode_f32(0.5)), Some(0.5));
    assert!(decode_f64(&encode_f64(f64::NAN)).is_some_and(f64::is_nan));
    assert_eq!(decode_f64(&[0; 4]), None);
}
