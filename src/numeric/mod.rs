// ============================================================================
// Numeric Module
// Result and error types shared by every parsing entry point
// ============================================================================
//
// This module provides:
// - ParseResult<T>: value-or-absent container returned by the scanner
// - ParseError: failure kinds, surfaced only in strict mode
// - NumericResult<T>: Result alias used by the strict adapters
//
// Design principles:
// - Absence is the default failure signal; nothing panics on bad input
// - Inspection is const-evaluable so compile-time parses can be asserted

mod errors;
mod parse_result;

pub use errors::{NumericResult, ParseError};
pub use parse_result::ParseResult;
