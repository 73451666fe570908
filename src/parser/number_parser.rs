// ============================================================================
// Number Parser
// Configured front end over the scanner with absent and strict modes
// ============================================================================

use super::config::ParserConfig;
use crate::numeric::{NumericResult, ParseResult};
use crate::scanner::{parse_float_with, CodeUnits, Float, Integer};

/// Parser bound to a [`ParserConfig`].
///
/// `parse_*` methods report failure as absence. `try_*` methods are the
/// strict mode: they return the failure kind as an error and log it at
/// `debug` level.
///
/// # Example
/// ```
/// use str_to_num::prelude::*;
///
/// let parser = NumberParser::new(ParserConfig::hex());
/// assert_eq!(parser.parse_integer::<u32>("0xBEEF").ok(), Some(0xBEEF));
/// assert_eq!(parser.try_float::<f64>("0x1.8"), Err(ParseError::MalformedExponent));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParser {
    config: ParserConfig,
}

impl NumberParser {
    /// Create a parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an integer; absent on failure.
    #[inline]
    pub fn parse_integer<'a, T: Integer>(&self, input: impl Into<CodeUnits<'a>>) -> ParseResult<T> {
        T::from_units(input.into(), self.config.int_format)
    }

    /// Parse a float; absent on failure.
    #[inline]
    pub fn parse_float<'a, T: Float>(&self, input: impl Into<CodeUnits<'a>>) -> ParseResult<T> {
        parse_float_with(input, self.config.float_format, self.config.float_overflow)
    }

    /// Parse an integer, returning the failure kind.
    ///
    /// # Errors
    /// Returns the [`ParseError`](crate::numeric::ParseError) found by the scanner.
    pub fn try_integer<'a, T: Integer>(&self, input: impl Into<CodeUnits<'a>>) -> NumericResult<T> {
        let units = input.into();
        self.parse_integer(units).expected().inspect_err(|error| {
            tracing::debug!(
                kind = error.as_str(),
                format = ?self.config.int_format,
                len = units.len(),
                unit_width = units.unit_width(),
                "rejected integer literal: {}",
                error
            );
        })
    }

    /// Parse a float, returning the failure kind.
    ///
    /// # Errors
    /// Returns the [`ParseError`](crate::numeric::ParseError) found by the scanner.
    pub fn try_float<'a, T: Float>(&self, input: impl Into<CodeUnits<'a>>) -> NumericResult<T> {
        let units = input.into();
        self.parse_float(units).expected().inspect_err(|error| {
            tracing::debug!(
                kind = error.as_str(),
                format = ?self.config.float_format,
                len = units.len(),
                unit_width = units.unit_width(),
                "rejected float literal: {}",
                error
            );
        })
    }
}
