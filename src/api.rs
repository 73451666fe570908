// ============================================================================
// Convenience API
// One-call conversions with the default formats of each number kind
// ============================================================================
//
// Integers detect a `0x`/`0X` prefix (IntFormat::Auto); floats accept the
// general decimal form with optional exponent. Use the scanner functions
// directly to pin a format or to parse in `const` context.

use crate::numeric::ParseResult;
use crate::scanner::{
    parse_f32, parse_f64, parse_i32, parse_i64, parse_u32, parse_u64, CodeUnits, FloatFormat,
    IntFormat, Number,
};

/// Parse an `i32` (C `int`).
#[inline]
pub fn str_to_int<'a>(input: impl Into<CodeUnits<'a>>) -> ParseResult<i32> {
    parse_i32(input.into(), IntFormat::Auto)
}

/// Parse a `u32` (C `unsigned int`).
#[inline]
pub fn str_to_uint<'a>(input: impl Into<CodeUnits<'a>>) -> ParseResult<u32> {
    parse_u32(input.into(), IntFormat::Auto)
}

/// Parse an `i64` (C `long long`).
#[inline]
pub fn str_to_ll<'a>(input: impl Into<CodeUnits<'a>>) -> ParseResult<i64> {
    parse_i64(input.into(), IntFormat::Auto)
}

/// Parse a `u64` (C `unsigned long long`).
#[inline]
pub fn str_to_ull<'a>(input: impl Into<CodeUnits<'a>>) -> ParseResult<u64> {
    parse_u64(input.into(), IntFormat::Auto)
}

/// Parse an `f32`.
#[inline]
pub fn str_to_float<'a>(input: impl Into<CodeUnits<'a>>) -> ParseResult<f32> {
    parse_f32(input.into(), FloatFormat::General)
}

/// Parse an `f64`.
#[inline]
pub fn str_to_double<'a>(input: impl Into<CodeUnits<'a>>) -> ParseResult<f64> {
    parse_f64(input.into(), FloatFormat::General)
}

/// Parse any supported number type.
///
/// # Example
/// ```
/// use str_to_num::api::str_to_num;
///
/// assert_eq!(str_to_num::<u16>("0xFFFF").ok(), Some(u16::MAX));
/// assert_eq!(str_to_num::<f64>("2.5e1").ok(), Some(25.0));
/// ```
#[inline]
pub fn str_to_num<'a, T: Number>(input: impl Into<CodeUnits<'a>>) -> ParseResult<T> {
    T::parse_default(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ParseError;
    use crate::scanner::wide_literal;

    #[test]
    fn test_integer_defaults_detect_hex() {
        assert_eq!(str_to_int("12345").ok(), Some(12345));
        assert_eq!(str_to_ll("0xABCDEF").ok(), Some(0xABCDEF));
        assert_eq!(str_to_ll(&wide_literal(b"-0xACE987")).ok(), Some(-0xACE987));
        assert_eq!(str_to_ull("0XFFFFFFFFFFFFFFFF").ok(), Some(u64::MAX));
        assert_eq!(str_to_uint("-1").error(), Some(ParseError::InvalidSign));
        assert_eq!(str_to_int("2147483648").error(), Some(ParseError::Overflow));
    }

    #[test]
    fn test_float_defaults() {
        assert_eq!(str_to_double("3.1415926535").ok(), Some(3.1415926535));
        assert_eq!(str_to_float("-0.25").ok(), Some(-0.25f32));
        // the general format does not take hex literals
        assert_eq!(str_to_double("0x1p3").error(), Some(ParseError::InvalidCharacter));
    }

    #[test]
    fn test_generic_entry_point() {
        assert_eq!(str_to_num::<i8>("-128").ok(), Some(i8::MIN));
        assert_eq!(str_to_num::<usize>("0x10").ok(), Some(16));
        assert_eq!(str_to_num::<f32>("1e2").ok(), Some(100.0));
        assert_eq!(str_to_num::<i128>("").error(), Some(ParseError::EmptyInput));
    }
}
