//! Tests for RUT validation and normalization.

use rstest::rstest;

use super::error::RutError;
use super::rut::Rut;

#[rstest]
#[case("11.111.111-1", "111111111")]
#[case("11111111-1", "111111111")]
#[case("111111111", "111111111")]
#[case("  11.111.111-1  ", "111111111")]
#[case("7.654.321-6", "76543216")]
#[case("12.345.678-5", "123456785")]
fn test_parse_normalizes_punctuation_and_whitespace(
    #[case] input: &str,
    #[case] canonical: &str,
) {
    let rut = Rut::parse(input).unwrap();
    assert_eq!(rut.as_str(), canonical);
}

#[test]
fn test_known_check_digit_for_body_7654321() {
    // Weights over reversed digits 1,2,3,4,5,6,7 are 2,3,4,5,6,7,2:
    // sum = 2 + 6 + 12 + 20 + 30 + 42 + 14 = 126, (-126) mod 11 = 6.
    let rut = Rut::parse("7654321-6").unwrap();
    assert_eq!(rut.check_char(), '6');
    assert_eq!(rut.body(), "7654321");
}

#[test]
fn test_check_digit_ten_maps_to_k() {
    // Scan a small body range for one whose modulo-11 value is 10.
    let mut found = None;
    for body in 1_000_000u32..1_000_100 {
        if let Ok(rut) = Rut::parse(&format!("{body}-K")) {
            found = Some(rut);
            break;
        }
    }
    let rut = found.expect("some body in range must have check digit K");
    assert_eq!(rut.check_char(), 'K');
}

#[test]
fn test_lowercase_k_is_normalized() {
    // Find a K-checked body, then feed it back with a lowercase check char.
    let mut canonical = None;
    for body in 1_000_000u32..1_000_100 {
        if let Ok(rut) = Rut::parse(&format!("{body}-K")) {
            canonical = Some(rut.into_string());
            break;
        }
    }
    let canonical = canonical.expect("some body in range must have check digit K");
    let lower = canonical.to_lowercase();
    assert_eq!(Rut::parse(&lower).unwrap().as_str(), canonical);
}

#[test]
fn test_parse_is_idempotent_over_canonical_form() {
    let first = Rut::parse("11.111.111-1").unwrap();
    let second = Rut::parse(first.as_str()).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case("1-1")]
#[case("1234567")]
#[case("123.456-7")]
fn test_too_short_is_invalid_format(#[case] input: &str) {
    assert!(matches!(
        Rut::parse(input),
        Err(RutError::InvalidFormat(_))
    ));
}

#[test]
fn test_too_long_is_invalid_format() {
    assert!(matches!(
        Rut::parse("1.234.567.890-1"),
        Err(RutError::InvalidFormat(_))
    ));
}

#[rstest]
#[case("1234567é")]
#[case("12.345.678-ñ")]
#[case("１２３４５６７８")]
fn test_non_ascii_input_is_invalid_format(#[case] input: &str) {
    // The final char of "1234567é" is multibyte; this must be a format
    // error, never a char-boundary panic inside the body/check split.
    assert!(matches!(
        Rut::parse(input),
        Err(RutError::InvalidFormat(_))
    ));
}

#[test]
fn test_non_numeric_body_is_invalid_format() {
    assert!(matches!(
        Rut::parse("1234A678-5"),
        Err(RutError::InvalidFormat(_))
    ));
}

#[test]
fn test_wrong_check_digit_is_invalid_checksum() {
    let err = Rut::parse("11.111.111-2").unwrap_err();
    assert_eq!(
        err,
        RutError::InvalidChecksum {
            expected: '1',
            found: '2'
        }
    );
}

#[test]
fn test_empty_input_is_accepted_as_absent() {
    assert_eq!(Rut::parse_optional("").unwrap(), None);
    assert_eq!(Rut::parse_optional("   ").unwrap(), None);
}

#[test]
fn test_parse_optional_present_value() {
    let rut = Rut::parse_optional("11.111.111-1").unwrap().unwrap();
    assert_eq!(rut.as_str(), "111111111");
}
