// ============================================================================
// Parse Errors
// Failure kinds reported by the numeric literal scanner
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a character span was rejected as a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseError {
    /// Span has zero length
    EmptyInput,
    /// Sign not representable by the target type, or sign with nothing after it
    InvalidSign,
    /// Prefix or radix point recognized but no digits follow
    NoDigits,
    /// Character outside the accepted alphabet, including trailing garbage
    InvalidCharacter,
    /// Magnitude exceeds the range of the target type
    Overflow,
    /// Exponent marker without digits, or hex float without `p` exponent
    MalformedExponent,
}

impl ParseError {
    /// Short stable identifier, suitable for structured log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParseError::EmptyInput => "empty_input",
            ParseError::InvalidSign => "invalid_sign",
            ParseError::NoDigits => "no_digits",
            ParseError::InvalidCharacter => "invalid_character",
            ParseError::Overflow => "overflow",
            ParseError::MalformedExponent => "malformed_exponent",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty input: nothing to parse"),
            ParseError::InvalidSign => {
                write!(f, "invalid sign: not allowed for target type or not followed by digits")
            },
            ParseError::NoDigits => write!(f, "no digits: literal has no digit characters"),
            ParseError::InvalidCharacter => {
                write!(f, "invalid character: input is not a well-formed literal")
            },
            ParseError::Overflow => {
                write!(f, "overflow: value exceeds the range of the target type")
            },
            ParseError::MalformedExponent => {
                write!(f, "malformed exponent: missing or incomplete exponent")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for strict-mode parsing
pub type NumericResult<T> = Result<T, ParseError>;
