// ============================================================================
// Parse Result
// Value-or-absent container returned by every scanner entry point
// ============================================================================

use super::errors::{NumericResult, ParseError};

/// Outcome of scanning a numeric literal.
///
/// Either holds the parsed value or is *absent*. Absence is the only failure
/// signal in the default mode; the reason is kept so that a strict caller can
/// recover it through [`ParseResult::expected`].
///
/// All inspection methods that do not consume `self` are `const fn`, so a
/// result produced in a `const` item can be checked at compile time:
///
/// ```
/// use str_to_num::prelude::*;
///
/// const N: ParseResult<i32> = parse_i32(CodeUnits::narrow_str("12345"), IntFormat::Decimal);
/// const _: () = assert!(matches!(N.get(), Some(&12345)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an absent ParseResult signals that parsing failed"]
pub struct ParseResult<T> {
    inner: Result<T, ParseError>,
}

impl<T> ParseResult<T> {
    /// Create a result holding `value`.
    #[inline]
    pub const fn found(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Create an absent result, remembering why.
    #[inline]
    pub const fn absent(error: ParseError) -> Self {
        Self { inner: Err(error) }
    }

    /// Check whether a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.inner.is_ok()
    }

    /// Borrow the value if present.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match &self.inner {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    /// The failure kind, if absent.
    #[inline]
    pub const fn error(&self) -> Option<ParseError> {
        match &self.inner {
            Ok(_) => None,
            Err(error) => Some(*error),
        }
    }

    /// Extract the value.
    ///
    /// # Panics
    /// Panics if the result is absent. Check [`has_value`](Self::has_value)
    /// first or use [`value_or`](Self::value_or).
    #[inline]
    #[track_caller]
    pub fn value(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(error) => panic!("called `ParseResult::value()` on an absent result: {error}"),
        }
    }

    /// Extract the value, or `default` when absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self.inner {
            Ok(value) => value,
            Err(_) => default,
        }
    }

    /// Convert into an `Option`, discarding the failure kind.
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.inner.ok()
    }

    /// Strict mode: surface the failure kind as an error.
    ///
    /// # Errors
    /// Returns the [`ParseError`] recorded by the scanner when absent.
    #[inline]
    pub fn expected(self) -> NumericResult<T> {
        self.inner
    }

    /// Map a present value, keeping absence untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseResult<U> {
        ParseResult {
            inner: self.inner.map(f),
        }
    }
}

impl<T> From<NumericResult<T>> for ParseResult<T> {
    #[inline]
    fn from(inner: NumericResult<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<ParseResult<T>> for Option<T> {
    #[inline]
    fn from(result: ParseResult<T>) -> Self {
        result.ok()
    }
}
