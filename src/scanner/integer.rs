// ============================================================================
// Integer Scanner
// Sign, prefix and digit-run recognition for fixed-width integers
// ============================================================================

use super::code_units::{digit_in_radix, has_hex_prefix, is_ascii, CodeUnits};
use super::format::IntFormat;
use super::sealed::Sealed;
use super::Number;
use crate::numeric::{ParseError, ParseResult};
use std::fmt;

/// Sign and unsigned magnitude of a scanned literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Magnitude {
    pub negative: bool,
    pub value: u128,
}

/// Scan a whole span as an integer literal.
///
/// The magnitude is accumulated in `u128`, which holds every supported
/// width including `i128::MIN`. The full span is validated before an
/// overflow is reported.
pub(crate) const fn scan_integer(
    units: CodeUnits<'_>,
    format: IntFormat,
    signed: bool,
) -> Result<Magnitude, ParseError> {
    let len = units.len();
    if len == 0 {
        return Err(ParseError::EmptyInput);
    }

    let mut pos = 0;
    let mut negative = false;
    let first = units.unit(0);
    if is_ascii(first, b'+') {
        pos = 1;
    } else if is_ascii(first, b'-') {
        if !signed {
            return Err(ParseError::InvalidSign);
        }
        negative = true;
        pos = 1;
    }
    if pos == len {
        return Err(ParseError::InvalidSign);
    }

    let mut radix = format.default_radix();
    if !matches!(format, IntFormat::Decimal) && has_hex_prefix(&units, pos) {
        radix = 16;
        pos += 2;
        if pos == len {
            return Err(ParseError::NoDigits);
        }
    }

    let mut value: u128 = 0;
    let mut overflow = false;
    while pos < len {
        let digit = match digit_in_radix(units.unit(pos), radix) {
            Some(digit) => digit,
            None => return Err(ParseError::InvalidCharacter),
        };
        if !overflow {
            match value.checked_mul(radix as u128) {
                Some(shifted) => match shifted.checked_add(digit as u128) {
                    Some(next) => value = next,
                    None => overflow = true,
                },
                None => overflow = true,
            }
        }
        pos += 1;
    }

    if overflow {
        return Err(ParseError::Overflow);
    }
    Ok(Magnitude { negative, value })
}

/// Fixed-width integer types the scanner can produce.
pub trait Integer: Copy + fmt::Debug + PartialEq + Sealed {
    /// Whether a leading `-` is accepted
    const SIGNED: bool;

    /// Scan `units` as a literal of this type.
    fn from_units(units: CodeUnits<'_>, format: IntFormat) -> ParseResult<Self>;
}

macro_rules! integer_scanners {
    ($($ty:ident => $name:ident, signed: $signed:literal;)*) => {
        $(
            #[doc = concat!("Parse a `", stringify!($ty), "` literal. Usable in `const` items.")]
            #[allow(
                clippy::absurd_extreme_comparisons,
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss
            )]
            pub const fn $name(units: CodeUnits<'_>, format: IntFormat) -> ParseResult<$ty> {
                match scan_integer(units, format, $signed) {
                    Ok(Magnitude { negative: true, value }) => {
                        if value > ($ty::MIN as i128).unsigned_abs() {
                            ParseResult::absent(ParseError::Overflow)
                        } else {
                            ParseResult::found((value as i128).wrapping_neg() as $ty)
                        }
                    }
                    Ok(Magnitude { value, .. }) => {
                        if value > $ty::MAX as u128 {
                            ParseResult::absent(ParseError::Overflow)
                        } else {
                            ParseResult::found(value as $ty)
                        }
                    }
                    Err(error) => ParseResult::absent(error),
                }
            }

            impl Sealed for $ty {}

            impl Integer for $ty {
                const SIGNED: bool = $signed;

                #[inline]
                fn from_units(units: CodeUnits<'_>, format: IntFormat) -> ParseResult<Self> {
                    $name(units, format)
                }
            }

            impl Number for $ty {
                #[inline]
                fn parse_default(units: CodeUnits<'_>) -> ParseResult<Self> {
                    $name(units, IntFormat::Auto)
                }
            }
        )*
    };
}

integer_scanners! {
    i8 => parse_i8, signed: true;
    i16 => parse_i16, signed: true;
    i32 => parse_i32, signed: true;
    i64 => parse_i64, signed: true;
    i128 => parse_i128, signed: true;
    isize => parse_isize, signed: true;
    u8 => parse_u8, signed: false;
    u16 => parse_u16, signed: false;
    u32 => parse_u32, signed: false;
    u64 => parse_u64, signed: false;
    u128 => parse_u128, signed: false;
    usize => parse_usize, signed: false;
}

/// Parse an integer literal of any supported width.
///
/// # Example
/// ```
/// use str_to_num::scanner::{parse_integer, IntFormat};
///
/// assert_eq!(parse_integer::<i64>("-0xACE987", IntFormat::Hex).ok(), Some(-0xACE987));
/// assert!(!parse_integer::<u32>("-5", IntFormat::Decimal).has_value());
/// ```
#[inline]
pub fn parse_integer<'a, T: Integer>(
    input: impl Into<CodeUnits<'a>>,
    format: IntFormat,
) -> ParseResult<T> {
    T::from_units(input.into(), format)
}
