// ============================================================================
// Floating-Point Scanner
// Decimal and hexadecimal floating-point literal recognition and rounding
// ============================================================================
//
// Every step is `const fn`, so `parse_f32`/`parse_f64` give the same bits in
// `const` items and at run time. Hex literals collect their mantissa into 64
// bits plus a sticky bit and round directly. Decimal literals are collected
// into a fixed-capacity `Decimal`; short ones whose mantissa and power of ten
// are both exact take a single correctly rounded multiply or divide, the rest
// go through the shifting conversion in `decimal`. Nothing allocates.

use super::binary::{round_binary, BinaryLayout, BINARY32, BINARY64};
use super::code_units::{decimal_digit, has_hex_prefix, hex_digit, is_ascii, is_ascii_letter, CodeUnits};
use super::decimal::Decimal;
use super::format::{FloatFormat, FloatOverflow};
use super::sealed::Sealed;
use super::Number;
use crate::numeric::{ParseError, ParseResult};
use std::fmt;

/// Exponent digits beyond this magnitude cannot change the result.
const EXPONENT_LIMIT: i64 = 1 << 32;

/// Binary floating-point types the scanner can produce.
pub trait Float: Copy + fmt::Debug + PartialEq + PartialOrd + Sealed {
    /// Scan `units` as a literal of this type.
    fn from_units(units: CodeUnits<'_>, format: FloatFormat, overflow: FloatOverflow)
        -> ParseResult<Self>;
}

// ============================================================================
// Cursor
// ============================================================================

struct Cursor<'a> {
    units: CodeUnits<'a>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(units: CodeUnits<'a>) -> Self {
        Self { units, pos: 0 }
    }

    #[inline]
    const fn peek(&self) -> Option<u32> {
        if self.pos < self.units.len() {
            Some(self.units.unit(self.pos))
        } else {
            None
        }
    }

    #[inline]
    const fn peek_decimal(&self) -> Option<u32> {
        match self.peek() {
            Some(unit) => decimal_digit(unit),
            None => None,
        }
    }

    #[inline]
    const fn bump(&mut self) {
        self.pos += 1;
    }

    #[inline]
    const fn at_end(&self) -> bool {
        self.pos >= self.units.len()
    }

    const fn eat(&mut self, byte: u8) -> bool {
        match self.peek() {
            Some(unit) if is_ascii(unit, byte) => {
                self.bump();
                true
            },
            _ => false,
        }
    }

    const fn eat_letter(&mut self, lower: u8) -> bool {
        match self.peek() {
            Some(unit) if is_ascii_letter(unit, lower) => {
                self.bump();
                true
            },
            _ => false,
        }
    }

    /// Consume an optional sign; `true` when it was `-`.
    const fn eat_sign(&mut self) -> bool {
        if self.eat(b'-') {
            return true;
        }
        self.eat(b'+');
        false
    }

    const fn eat_hex_prefix(&mut self) {
        if has_hex_prefix(&self.units, self.pos) {
            self.pos += 2;
        }
    }

    /// Optionally signed decimal exponent, clamped to `EXPONENT_LIMIT`.
    /// `None` when no digit follows the sign.
    const fn take_exponent(&mut self) -> Option<i64> {
        let negative = self.eat_sign();
        let mut value: i64 = 0;
        let mut digits = 0usize;
        while let Some(digit) = self.peek_decimal() {
            value = value * 10 + digit as i64;
            if value > EXPONENT_LIMIT {
                value = EXPONENT_LIMIT;
            }
            digits += 1;
            self.bump();
        }
        if digits == 0 {
            None
        } else if negative {
            Some(-value)
        } else {
            Some(value)
        }
    }

    /// Error for a mantissa without digits: `NoDigits` when what follows
    /// could legitimately follow a mantissa, `InvalidCharacter` otherwise.
    const fn missing_digits(&self, exponent_marker: u8) -> ParseError {
        match self.peek() {
            None => ParseError::NoDigits,
            Some(unit) if is_ascii_letter(unit, exponent_marker) => ParseError::NoDigits,
            Some(_) => ParseError::InvalidCharacter,
        }
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// A validated literal: already rounded, or decimal digits still to round.
#[allow(clippy::large_enum_variant)]
pub(crate) enum Literal {
    Binary(u64),
    Decimal(Decimal),
}

/// Scan a whole span as a floating-point literal.
pub(crate) const fn scan_float(
    units: CodeUnits<'_>,
    format: FloatFormat,
    layout: &BinaryLayout,
) -> Result<Literal, ParseError> {
    if units.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut cursor = Cursor::new(units);
    let negative = cursor.eat_sign();
    if cursor.at_end() {
        return Err(ParseError::InvalidSign);
    }

    match format {
        FloatFormat::Hex => match scan_hex(&mut cursor, negative, layout) {
            Ok(bits) => Ok(Literal::Binary(bits)),
            Err(error) => Err(error),
        },
        _ => match scan_decimal(&mut cursor, negative, format) {
            Ok(decimal) => Ok(Literal::Decimal(decimal)),
            Err(error) => Err(error),
        },
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn scan_decimal(
    cursor: &mut Cursor<'_>,
    negative: bool,
    format: FloatFormat,
) -> Result<Decimal, ParseError> {
    let mut decimal = Decimal::new(negative);

    let mut digits = 0usize;
    while let Some(digit) = cursor.peek_decimal() {
        // digit < 10
        decimal.push_integer_digit(digit as u8);
        digits += 1;
        cursor.bump();
    }
    if cursor.eat(b'.') {
        while let Some(digit) = cursor.peek_decimal() {
            decimal.push_fraction_digit(digit as u8);
            digits += 1;
            cursor.bump();
        }
    }
    if digits == 0 {
        return Err(cursor.missing_digits(b'e'));
    }

    if cursor.eat_letter(b'e') {
        if !format.allows_exponent() {
            return Err(ParseError::InvalidCharacter);
        }
        match cursor.take_exponent() {
            Some(exponent) => decimal.scale(exponent),
            None => return Err(ParseError::MalformedExponent),
        }
    } else if format.requires_exponent() && cursor.at_end() {
        return Err(ParseError::MalformedExponent);
    }

    if !cursor.at_end() {
        return Err(ParseError::InvalidCharacter);
    }
    decimal.trim();
    Ok(decimal)
}

const fn scan_hex(
    cursor: &mut Cursor<'_>,
    negative: bool,
    layout: &BinaryLayout,
) -> Result<u64, ParseError> {
    cursor.eat_hex_prefix();

    let mut mantissa: u64 = 0;
    let mut sticky = false;
    let mut scale: i64 = 0;
    let mut digits = 0usize;
    let mut seen_point = false;

    while let Some(unit) = cursor.peek() {
        if let Some(digit) = hex_digit(unit) {
            digits += 1;
            if mantissa >> 60 == 0 {
                mantissa = (mantissa << 4) | digit as u64;
                if seen_point {
                    scale = scale.saturating_sub(4);
                }
            } else {
                sticky |= digit != 0;
                if !seen_point {
                    scale = scale.saturating_add(4);
                }
            }
        } else if !seen_point && is_ascii(unit, b'.') {
            seen_point = true;
        } else {
            break;
        }
        cursor.bump();
    }

    if digits == 0 {
        return Err(cursor.missing_digits(b'p'));
    }

    if !cursor.eat_letter(b'p') {
        return Err(if cursor.at_end() {
            ParseError::MalformedExponent
        } else {
            ParseError::InvalidCharacter
        });
    }

    let exponent = match cursor.take_exponent() {
        Some(exponent) => exponent,
        None => return Err(ParseError::MalformedExponent),
    };
    if !cursor.at_end() {
        return Err(ParseError::InvalidCharacter);
    }

    Ok(round_binary(layout, negative, mantissa, sticky, exponent.saturating_add(scale)))
}

// ============================================================================
// Entry Points
// ============================================================================

macro_rules! float_scanners {
    ($($ty:ident => $name:ident, $with:ident, layout: $layout:ident, raw: $raw:ty,
        exact_powers: $exact:literal;)*) => {
        $(
            #[doc = concat!("Parse an `", stringify!($ty), "` literal, rejecting values beyond the")]
            #[doc = "finite range. Usable in `const` items."]
            #[inline]
            pub const fn $name(units: CodeUnits<'_>, format: FloatFormat) -> ParseResult<$ty> {
                $with(units, format, FloatOverflow::Reject)
            }

            #[doc = concat!("Parse an `", stringify!($ty), "` literal with an explicit overflow policy.")]
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            pub const fn $with(
                units: CodeUnits<'_>,
                format: FloatFormat,
                overflow: FloatOverflow,
            ) -> ParseResult<$ty> {
                // exact in the target type as far as the fast path indexes
                const POWERS_OF_TEN: [$ty; 23] = [
                    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13,
                    1e14, 1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
                ];

                let bits = match scan_float(units, format, &$layout) {
                    Ok(Literal::Binary(bits)) => bits,
                    Ok(Literal::Decimal(decimal)) => match decimal.exact_parts() {
                        Some((mantissa, exponent))
                            if mantissa <= 1u64 << $layout.precision()
                                && exponent.unsigned_abs() <= $exact =>
                        {
                            let value = mantissa as $ty;
                            let power = POWERS_OF_TEN[exponent.unsigned_abs() as usize];
                            let value = if exponent < 0 { value / power } else { value * power };
                            let value = if decimal.is_negative() { -value } else { value };
                            value.to_bits() as u64
                        },
                        _ => decimal.to_binary(&$layout),
                    },
                    Err(error) => return ParseResult::absent(error),
                };

                if $layout.is_infinity(bits) && matches!(overflow, FloatOverflow::Reject) {
                    return ParseResult::absent(ParseError::Overflow);
                }
                ParseResult::found($ty::from_bits(bits as $raw))
            }

            impl Sealed for $ty {}

            impl Float for $ty {
                #[inline]
                fn from_units(
                    units: CodeUnits<'_>,
                    format: FloatFormat,
                    overflow: FloatOverflow,
                ) -> ParseResult<Self> {
                    $with(units, format, overflow)
                }
            }

            impl Number for $ty {
                #[inline]
                fn parse_default(units: CodeUnits<'_>) -> ParseResult<Self> {
                    $name(units, FloatFormat::General)
                }
            }
        )*
    };
}

float_scanners! {
    f32 => parse_f32, parse_f32_with, layout: BINARY32, raw: u32, exact_powers: 10;
    f64 => parse_f64, parse_f64_with, layout: BINARY64, raw: u64, exact_powers: 22;
}

/// Parse a floating-point literal, rejecting values beyond the finite range.
///
/// # Example
/// ```
/// use str_to_num::scanner::{parse_float, FloatFormat};
///
/// assert_eq!(parse_float::<f32>("0x1.Fp-2", FloatFormat::Hex).ok(), Some(0.484375));
/// assert!(!parse_float::<f64>("0x1.F", FloatFormat::Hex).has_value());
/// ```
#[inline]
pub fn parse_float<'a, T: Float>(
    input: impl Into<CodeUnits<'a>>,
    format: FloatFormat,
) -> ParseResult<T> {
    T::from_units(input.into(), format, FloatOverflow::Reject)
}

/// Parse a floating-point literal with an explicit overflow policy.
#[inline]
pub fn parse_float_with<'a, T: Float>(
    input: impl Into<CodeUnits<'a>>,
    format: FloatFormat,
    overflow: FloatOverflow,
) -> ParseResult<T> {
    T::from_units(input.into(), format, overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::code_units::{wide32_literal, wide_literal};

    fn general(s: &str) -> ParseResult<f64> {
        parse_float(s, FloatFormat::General)
    }

    fn hex64(s: &str) -> ParseResult<f64> {
        parse_float(s, FloatFormat::Hex)
    }

    fn hex32(s: &str) -> ParseResult<f32> {
        parse_float(s, FloatFormat::Hex)
    }

    #[test]
    fn test_decimal_values() {
        assert_eq!(general("3.1415926535").ok(), Some(3.1415926535));
        assert_eq!(general("-987.654").ok(), Some(-987.654));
        assert_eq!(general("+0.5").ok(), Some(0.5));
        assert_eq!(general(".5").ok(), Some(0.5));
        assert_eq!(general("5.").ok(), Some(5.0));
        assert_eq!(general("42").ok(), Some(42.0));
        assert_eq!(general("1e3").ok(), Some(1000.0));
        assert_eq!(general("1.5E-3").ok(), Some(0.0015));
        assert_eq!(general("2.e+2").ok(), Some(200.0));
    }

    #[test]
    fn test_decimal_rounds_to_nearest_even() {
        // 2^53 + 1 sits exactly between two doubles
        assert_eq!(general("9007199254740993").ok(), Some(9_007_199_254_740_992.0));
        assert_eq!(general("9007199254740995").ok(), Some(9_007_199_254_740_996.0));
        // 2^24 + 1 for single precision
        assert_eq!(parse_float::<f32>("16777217", FloatFormat::General).ok(), Some(16_777_216.0));
    }

    /// 2^-1075, half the smallest positive subnormal, written out exactly.
    const HALF_MIN_SUBNORMAL: &str = "2.47032822920623272088284396434110686182529901307162382212792841250337753635104375932649918180817996189898282347722858865463328355177969898199387398005390939063150356595155702263922908583924491051844359318028499365361525003193704576782492193656236698636584807570015857692699037063119282795585513329278343384093519780155312465972635795746227664652728272200563740064854999770965994704540208281662262378573934507363390079677619305775067401763246736009689513405355374585166611342237666786041621596804619144672918403005300575308490487653917113865916462395249126236538818796362393732804238910186723484976682350898633885879256283027559956575244555072551893136908362547791869486679949683240497058210285131854513962138377228261454376934125320985913276672363281250";

    #[test]
    fn test_long_literals() {
        let literal = format!("0.{}1", "0".repeat(200));
        assert_eq!(general(&literal).ok(), Some(1e-201));
        let digits = format!("1{}", "0".repeat(1000));
        assert_eq!(general(&format!("{digits}e-1000")).ok(), Some(1.0));
        assert_eq!(general(&digits).error(), Some(ParseError::Overflow));
    }

    #[test]
    fn test_digits_past_capacity_break_ties() {
        // exact tie: even neighbour is zero
        assert_eq!(general(&format!("{HALF_MIN_SUBNORMAL}e-324")).ok(), Some(0.0));
        // a nonzero digit far past the retained digits tips it upward
        let nudged = format!("{HALF_MIN_SUBNORMAL}{}1e-324", "0".repeat(100));
        assert_eq!(general(&nudged).ok().map(f64::to_bits), Some(1));

        let tie = "1.00000000000000011102230246251565404236316680908203125";
        assert_eq!(general(tie).ok(), Some(1.0));
        let nudged = format!("{tie}{}1", "0".repeat(1000));
        assert_eq!(general(&nudged).ok(), Some(1.0 + f64::EPSILON));
    }

    #[test]
    fn test_exact_and_shifting_paths_agree() {
        // 1e22 is the last exact power of ten for f64, 1e23 is not
        assert_eq!(general("1e22").ok(), Some(1e22));
        assert_eq!(general("1e23").ok(), Some(1e23));
        assert_eq!(general("9007199254740992e1").ok(), Some(90_071_992_547_409_920.0));
        assert_eq!(general("123456789012345678901234567890").ok(), Some(1.2345678901234568e29));
        assert_eq!(general("2.2250738585072011e-308").ok(), Some(2.225073858507201e-308));
        assert_eq!(general("2.2250738585072014e-308").ok(), Some(f64::MIN_POSITIVE));
        assert_eq!(general("1.7976931348623157e308").ok(), Some(f64::MAX));
        assert_eq!(
            parse_float::<f32>("3.4028235e38", FloatFormat::General).ok(),
            Some(f32::MAX)
        );
        assert_eq!(
            parse_float::<f32>("1e-45", FloatFormat::General).ok().map(f32::to_bits),
            Some(1)
        );
        assert_eq!(
            parse_float::<f32>("1e10", FloatFormat::General).ok(),
            Some(10_000_000_000.0)
        );
    }

    #[test]
    fn test_const_entry_points() {
        const HEX: ParseResult<f32> = parse_f32(CodeUnits::narrow_str("0x1.Fp-2"), FloatFormat::Hex);
        const PI: ParseResult<f64> =
            parse_f64(CodeUnits::narrow_str("3.14159265358979"), FloatFormat::General);
        const LONG: ParseResult<f64> =
            parse_f64(CodeUnits::narrow_str("0.1000000000000000055511151231257827"), FloatFormat::General);
        const HUGE: ParseResult<f64> = parse_f64_with(
            CodeUnits::narrow_str("1e400"),
            FloatFormat::Scientific,
            FloatOverflow::Infinity,
        );

        const _: () = assert!(matches!(HEX.get(), Some(v) if v.to_bits() == 0x3EF8_0000));
        const _: () = assert!(matches!(PI.get(), Some(v) if v.to_bits() == 0x4009_21FB_5444_2D11));
        const _: () = assert!(matches!(LONG.get(), Some(v) if v.to_bits() == 0.1f64.to_bits()));
        const _: () = assert!(matches!(HUGE.get(), Some(v) if v.is_infinite()));

        assert_eq!(HEX, hex32("0x1.Fp-2"));
        assert_eq!(PI, general("3.14159265358979"));
        assert_eq!(LONG.ok(), Some(0.1));
    }

    #[test]
    fn test_malformed_decimal() {
        assert_eq!(general("").error(), Some(ParseError::EmptyInput));
        assert_eq!(general("+").error(), Some(ParseError::InvalidSign));
        assert_eq!(general("-").error(), Some(ParseError::InvalidSign));
        assert_eq!(general(".").error(), Some(ParseError::NoDigits));
        assert_eq!(general("e5").error(), Some(ParseError::NoDigits));
        assert_eq!(general(".e5").error(), Some(ParseError::NoDigits));
        assert_eq!(general("1e").error(), Some(ParseError::MalformedExponent));
        assert_eq!(general("1e+").error(), Some(ParseError::MalformedExponent));
        assert_eq!(general("1.2.3").error(), Some(ParseError::InvalidCharacter));
        assert_eq!(general("0x1p3").error(), Some(ParseError::InvalidCharacter));
        assert_eq!(general("1.5f").error(), Some(ParseError::InvalidCharacter));
        assert_eq!(general(" 1.5").error(), Some(ParseError::InvalidCharacter));
        assert_eq!(general("abc").error(), Some(ParseError::InvalidCharacter));
    }

    #[test]
    fn test_special_spellings_rejected() {
        for s in ["inf", "-inf", "infinity", "nan", "NaN"] {
            assert_eq!(general(s).error(), Some(ParseError::InvalidCharacter), "{s}");
        }
    }

    #[test]
    fn test_fixed_and_scientific() {
        let fixed = |s: &str| parse_float::<f64>(s, FloatFormat::Fixed);
        let scientific = |s: &str| parse_float::<f64>(s, FloatFormat::Scientific);

        assert_eq!(fixed("1.25").ok(), Some(1.25));
        assert_eq!(fixed("1e5").error(), Some(ParseError::InvalidCharacter));
        assert_eq!(scientific("1.5e3").ok(), Some(1500.0));
        assert_eq!(scientific("1.5").error(), Some(ParseError::MalformedExponent));
        assert_eq!(scientific("1.5x").error(), Some(ParseError::InvalidCharacter));
    }

    #[test]
    fn test_decimal_overflow_policy() {
        assert_eq!(general("1e309").error(), Some(ParseError::Overflow));
        assert_eq!(general("-1e309").error(), Some(ParseError::Overflow));
        assert_eq!(
            parse_float::<f32>("1e39", FloatFormat::General).error(),
            Some(ParseError::Overflow)
        );

        let inf = parse_float_with::<f64>("1e309", FloatFormat::General, FloatOverflow::Infinity);
        assert_eq!(inf.ok(), Some(f64::INFINITY));
        let neg_inf = parse_float_with::<f64>("-1e309", FloatFormat::General, FloatOverflow::Infinity);
        assert_eq!(neg_inf.ok(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_decimal_underflow_is_zero() {
        assert_eq!(general("1e-400").ok(), Some(0.0));
        let neg = general("-1e-400").value();
        assert_eq!(neg, 0.0);
        assert!(neg.is_sign_negative());
        assert_eq!(general("1e-99999999999999999999").ok(), Some(0.0));
    }

    #[test]
    fn test_hex_float() {
        assert_eq!(hex32("0x1.Fp-2").ok(), Some(0.484375));
        assert_eq!(hex64("0x1.Fp-2").ok(), Some(0.484375));
        assert_eq!(hex64("1.Fp-2").ok(), Some(0.484375));
        assert_eq!(hex64("0X1.fP-2").ok(), Some(0.484375));
        assert_eq!(hex64("-0x1p4").ok(), Some(-16.0));
        assert_eq!(hex64("0x.8p1").ok(), Some(1.0));
        assert_eq!(hex64("0xA.p0").ok(), Some(10.0));
        assert_eq!(hex64("0x10p+0").ok(), Some(16.0));
    }

    #[test]
    fn test_malformed_hex_float() {
        assert_eq!(hex64("0x1.F").error(), Some(ParseError::MalformedExponent));
        assert_eq!(hex64("0x1.Fp").error(), Some(ParseError::MalformedExponent));
        assert_eq!(hex64("0x1.Fp-").error(), Some(ParseError::MalformedExponent));
        assert_eq!(hex64("0x").error(), Some(ParseError::NoDigits));
        assert_eq!(hex64("0xp1").error(), Some(ParseError::NoDigits));
        assert_eq!(hex64("0x.p1").error(), Some(ParseError::NoDigits));
        assert_eq!(hex64("0x1.Fz").error(), Some(ParseError::InvalidCharacter));
        assert_eq!(hex64("0x1p1.5").error(), Some(ParseError::InvalidCharacter));
        assert_eq!(hex64("0x1pA").error(), Some(ParseError::MalformedExponent));
    }

    #[test]
    fn test_hex_extremes_f64() {
        assert_eq!(hex64("0x1.fffffffffffffp1023").ok(), Some(f64::MAX));
        assert_eq!(hex64("0x1p-1022").ok(), Some(f64::MIN_POSITIVE));
        assert_eq!(hex64("0x1p-1074").ok(), Some(f64::from_bits(1)));
        assert_eq!(hex64("0x1.fffffffffffff8p1023").error(), Some(ParseError::Overflow));
        assert_eq!(hex64("0x1p1024").error(), Some(ParseError::Overflow));
        assert_eq!(hex64("0x1p99999999999999999999").error(), Some(ParseError::Overflow));
        assert_eq!(hex64("0x1p-99999999999999999999").ok(), Some(0.0));
    }

    #[test]
    fn test_hex_subnormal_rounding() {
        // exactly half the smallest subnormal: ties to even (zero)
        assert_eq!(hex64("0x1p-1075").ok(), Some(0.0));
        // just above half: rounds up
        assert_eq!(hex64("0x1.8p-1075").ok(), Some(f64::from_bits(1)));
        assert_eq!(hex64("0x1.0000000000001p-1075").ok(), Some(f64::from_bits(1)));
        // largest subnormal rounding up into the smallest normal
        assert_eq!(hex64("0x0.fffffffffffff8p-1022").ok(), Some(f64::MIN_POSITIVE));
        assert_eq!(hex32("0x1p-149").ok(), Some(f32::from_bits(1)));
        assert_eq!(hex32("0x1p-150").ok(), Some(0.0));
    }

    #[test]
    fn test_hex_ties_and_sticky() {
        // 1 + 2^-24 is a tie for f32: stays on the even neighbour 1.0
        assert_eq!(hex32("0x1.000001p0").ok(), Some(1.0));
        // 1 + 3 * 2^-24 is a tie between odd and even: rounds to even (up)
        assert_eq!(hex32("0x1.000003p0").ok(), Some(1.0 + f32::EPSILON * 2.0));
        // 1 + 2^-53 is a tie for f64
        assert_eq!(hex64("0x1.00000000000008p0").ok(), Some(1.0));
        // the same tie nudged upward by digits beyond the 64-bit window
        assert_eq!(hex64("0x1.000000000000080001p0").ok(), Some(1.0 + f64::EPSILON));
        assert_eq!(hex64("0x1.00000000000000000001p0").ok(), Some(1.0));
    }

    #[test]
    fn test_hex_f32_extremes() {
        assert_eq!(hex32("0x1.fffffep127").ok(), Some(f32::MAX));
        assert_eq!(hex32("0x1.ffffffp127").error(), Some(ParseError::Overflow));
        let inf = parse_float_with::<f32>("-0x1p200", FloatFormat::Hex, FloatOverflow::Infinity);
        assert_eq!(inf.ok(), Some(f32::NEG_INFINITY));
    }

    #[test]
    fn test_hex_signed_zero() {
        let zero = hex64("-0x0p0").value();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_negative());
        assert_eq!(hex64("0x0.000p99").ok(), Some(0.0));
    }

    #[test]
    fn test_wide_parity() {
        let w16 = wide_literal(b"0x1.Fp-2");
        let w32 = wide32_literal(b"-987.654");
        assert_eq!(parse_float::<f32>(&w16, FloatFormat::Hex).ok(), Some(0.484375));
        assert_eq!(parse_float::<f64>(&w32, FloatFormat::General), general("-987.654"));

        // a wide unit that truncates to '5' is not a digit
        let tricky = [u16::from(b'1'), u16::from(b'.'), 0x0135];
        assert_eq!(
            parse_float::<f64>(&tricky, FloatFormat::General).error(),
            Some(ParseError::InvalidCharacter)
        );
    }
}
