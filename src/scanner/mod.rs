// ============================================================================
// Scanner Module
// Numeric literal recognition over narrow and wide code units
//
// This module contains:
// - CodeUnits: borrowed span of 8-, 16- or 32-bit code units
// - IntFormat / FloatFormat / FloatOverflow: accepted literal forms
// - Integer scanning: every fixed-width integer type
// - Float scanning: decimal and hexadecimal literals for f32/f64
// - Binary layout and decimal conversion backing the float scanner
//
// The scanner is pure: no locale, no global state, no I/O, no allocation.
// Every per-type entry point is a `const fn` and runs unchanged in `const`
// items and at run time.
// ============================================================================

mod binary;
pub mod code_units;
mod decimal;
pub mod float;
pub mod format;
pub mod integer;

pub use code_units::{wide32_literal, wide_literal, CodeUnits};
pub use float::{
    parse_f32, parse_f32_with, parse_f64, parse_f64_with, parse_float, parse_float_with, Float,
};
pub use format::{FloatFormat, FloatOverflow, IntFormat};
pub use integer::{
    parse_i128, parse_i16, parse_i32, parse_i64, parse_i8, parse_integer, parse_isize, parse_u128,
    parse_u16, parse_u32, parse_u64, parse_u8, parse_usize, Integer,
};

use crate::numeric::ParseResult;

mod sealed {
    pub trait Sealed {}
}

/// Any number type the scanner can produce, parsed with default formats.
///
/// Integers use [`IntFormat::Auto`]; floats use [`FloatFormat::General`]
/// and reject overflow.
pub trait Number: Copy + sealed::Sealed {
    fn parse_default(units: CodeUnits<'_>) -> ParseResult<Self>;
}
