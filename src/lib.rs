// ============================================================================
// StrToNum Library
// Locale-independent numeric literal scanning for narrow and wide strings
// ============================================================================

//! # StrToNum
//!
//! Parses integer and floating-point literals from spans of 8-, 16- or 32-bit
//! code units without exceptions, locales or allocation.
//!
//! ## Features
//!
//! - **Every fixed-width integer type**, decimal or hex (`0x` optional)
//! - **`f32`/`f64`** in fixed, scientific, general and hex-float forms
//! - **Narrow and wide input** with identical results
//! - **`const` evaluation** of every integer and float type, bit-identical to run time
//! - **Absence as failure**, with an opt-in strict mode carrying the reason
//!
//! ## Example
//!
//! ```rust
//! use str_to_num::prelude::*;
//!
//! const WSTR: [u16; 10] = wide_literal(b"1234567890");
//!
//! // Evaluated at compile time
//! const INT1: ParseResult<i32> =
//!     parse_i32(CodeUnits::narrow_str("1234567890").substr(0, 5), IntFormat::Decimal);
//! const _: () = assert!(matches!(INT1.get(), Some(&12345)));
//! const FL_HEX: ParseResult<f32> =
//!     parse_f32(CodeUnits::wide(&wide_literal(b"0x1.Fp-2")), FloatFormat::Hex);
//! const _: () = assert!(matches!(FL_HEX.get(), Some(v) if v.to_bits() == 0.484375f32.to_bits()));
//!
//! // Evaluated at run time
//! assert_eq!(str_to_int(CodeUnits::wide(&WSTR).tail(5)).value_or(-1), 67890);
//! assert_eq!(str_to_ll("0xABCDEF").value_or(-1), 0xABCDEF);
//! assert_eq!(str_to_double("-987.654").value_or(-1.0), -987.654);
//! assert_eq!(parse_float::<f32>("0x1.Fp-2", FloatFormat::Hex), FL_HEX);
//!
//! // Failure is absence
//! assert!(!str_to_uint("-5").has_value());
//! ```

pub mod api;
pub mod numeric;
pub mod parser;
pub mod scanner;

// Re-exports for convenience
pub mod prelude {
    pub use crate::api::{
        str_to_double, str_to_float, str_to_int, str_to_ll, str_to_num, str_to_uint, str_to_ull,
    };
    pub use crate::numeric::{NumericResult, ParseError, ParseResult};
    pub use crate::parser::{NumberParser, ParserConfig};
    pub use crate::scanner::{
        parse_f32, parse_f32_with, parse_f64, parse_f64_with, parse_float, parse_float_with,
        parse_i128, parse_i16, parse_i32, parse_i64, parse_i8,
        parse_integer, parse_isize, parse_u128, parse_u16, parse_u32, parse_u64, parse_u8,
        parse_usize, wide32_literal, wide_literal, CodeUnits, Float, FloatFormat, FloatOverflow,
        IntFormat, Integer, Number,
    };
}
