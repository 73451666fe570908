// ============================================================================
// Literal Formats
// Selectors restricting which lexical forms the scanner accepts
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Accepted forms for integer literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntFormat {
    /// Decimal digits only; a `0x` prefix is an invalid character
    #[default]
    Decimal,
    /// Hex digits in either case, `0x`/`0X` prefix optional
    Hex,
    /// Hex when a `0x`/`0X` prefix is present, decimal otherwise
    Auto,
}

impl IntFormat {
    /// Radix used for digits when no prefix is present.
    #[inline]
    pub const fn default_radix(self) -> u32 {
        match self {
            IntFormat::Decimal | IntFormat::Auto => 10,
            IntFormat::Hex => 16,
        }
    }
}

/// Accepted forms for floating-point literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloatFormat {
    /// Decimal mantissa, no exponent
    Fixed,
    /// Decimal mantissa with a required `e`/`E` exponent
    Scientific,
    /// Decimal mantissa with an optional exponent
    #[default]
    General,
    /// Hex mantissa with a required `p`/`P` binary exponent
    Hex,
}

impl FloatFormat {
    #[inline]
    pub const fn allows_exponent(self) -> bool {
        !matches!(self, FloatFormat::Fixed)
    }

    #[inline]
    pub const fn requires_exponent(self) -> bool {
        matches!(self, FloatFormat::Scientific | FloatFormat::Hex)
    }
}

/// What to do when a float literal is too large for the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloatOverflow {
    /// Report `ParseError::Overflow`
    #[default]
    Reject,
    /// Return an infinity carrying the literal's sign
    Infinity,
}
